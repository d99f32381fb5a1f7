use chrono::{Duration, NaiveDate};
use thiserror::Error;
use tracing::debug;

use crate::entities::cycle::{CycleForecast, CyclePrediction};

/// Days before ovulation the fertile window opens
const FERTILE_DAYS_BEFORE: i64 = 5;

/// Days after ovulation the fertile window closes
const FERTILE_DAYS_AFTER: i64 = 1;

/// Upper bound on the up-front allocation; larger counts grow as they go
const PREALLOCATED_CYCLES: usize = 24;

/// Cycle prediction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CycleError {
    #[error("Please enter the first day of your last period.")]
    MissingStartDate,

    #[error("Invalid date.")]
    InvalidDate,
}

fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate, CycleError> {
    date.checked_add_signed(Duration::days(days))
        .ok_or(CycleError::InvalidDate)
}

/// Project `count` cycles forward from the first day of the last period.
///
/// Each cycle starts `cycle_length` days after the previous one; ovulation
/// falls `cycle_length - luteal_phase` days into the cycle. Lengths are not
/// range-checked here.
pub fn predict_cycles(
    last_period_start: NaiveDate,
    cycle_length: i64,
    luteal_phase: i64,
    count: u32,
) -> Result<CycleForecast, CycleError> {
    let mut cycles = Vec::with_capacity((count as usize).min(PREALLOCATED_CYCLES));
    let mut period_start = last_period_start;

    for cycle_number in 1..=count {
        let ovulation = add_days(period_start, cycle_length - luteal_phase)?;

        cycles.push(CyclePrediction {
            cycle_number,
            period_start,
            ovulation,
            fertile_window_start: add_days(ovulation, -FERTILE_DAYS_BEFORE)?,
            fertile_window_end: add_days(ovulation, FERTILE_DAYS_AFTER)?,
        });

        period_start = add_days(period_start, cycle_length)?;
    }

    let next_period = cycles
        .first()
        .map(|cycle| cycle.period_start)
        .unwrap_or(last_period_start);

    debug!("Predicted {} cycles from {}", cycles.len(), last_period_start);

    Ok(CycleForecast { cycles, next_period })
}

/// Parse a `YYYY-MM-DD` start date, then predict as [`predict_cycles`]
pub fn predict_cycles_from_str(
    last_period_start: Option<&str>,
    cycle_length: i64,
    luteal_phase: i64,
    count: u32,
) -> Result<CycleForecast, CycleError> {
    let raw = last_period_start
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(CycleError::MissingStartDate)?;

    let start = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| CycleError::InvalidDate)?;

    predict_cycles(start, cycle_length, luteal_phase, count)
}
