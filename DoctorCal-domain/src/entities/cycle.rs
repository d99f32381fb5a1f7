use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Cycle length used when none is supplied
pub const DEFAULT_CYCLE_LENGTH: i64 = 28;

/// Luteal phase length used when none is supplied
pub const DEFAULT_LUTEAL_PHASE: i64 = 14;

/// Number of cycles predicted when none is supplied
pub const DEFAULT_CYCLE_COUNT: u32 = 6;

/// One predicted menstrual cycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct CyclePrediction {
    /// 1-based position in the forecast
    pub cycle_number: u32,

    pub period_start: NaiveDate,

    pub ovulation: NaiveDate,

    /// First day of the fertile window (ovulation - 5)
    pub fertile_window_start: NaiveDate,

    /// Last day of the fertile window (ovulation + 1)
    pub fertile_window_end: NaiveDate,
}

/// Ordered cycle predictions plus the predicted next period
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct CycleForecast {
    pub cycles: Vec<CyclePrediction>,

    pub next_period: NaiveDate,
}

/// Request payload for a cycle forecast
///
/// The ranges are input hints; the predictor itself accepts any values.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct CycleRequest {
    /// First day of the last period, YYYY-MM-DD
    #[serde(default)]
    pub last_period: Option<String>,

    #[serde(default = "default_cycle_length")]
    #[validate(range(min = 21, max = 45, message = "Cycle length must be between 21 and 45 days"))]
    pub cycle_length: i64,

    #[serde(default = "default_luteal_phase")]
    #[validate(range(min = 10, max = 18, message = "Luteal phase must be between 10 and 18 days"))]
    pub luteal_phase: i64,

    #[serde(default = "default_cycle_count")]
    #[validate(range(min = 1, max = 12, message = "Between 1 and 12 cycles can be predicted"))]
    pub count: u32,

    /// Clinical observations, carried into records and submissions
    #[serde(default)]
    #[validate(length(max = 2000, message = "Note cannot exceed 2000 characters"))]
    pub note: String,
}

fn default_cycle_length() -> i64 {
    DEFAULT_CYCLE_LENGTH
}

fn default_luteal_phase() -> i64 {
    DEFAULT_LUTEAL_PHASE
}

fn default_cycle_count() -> u32 {
    DEFAULT_CYCLE_COUNT
}
