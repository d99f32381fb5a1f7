use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Employee on the wellness roster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub dept: String,
    pub role_id: u64,
    pub bmi: Option<f64>,
    pub hba1c: Option<f64>,
}

/// Role with its estimated productivity loss per absent day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct Role {
    pub id: u64,
    pub name: String,
    pub avg_loss_per_day: f64,
}

/// Total absenteeism days recorded on a date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct AbsenteeismMetric {
    pub id: String,
    pub date: NaiveDate,
    pub absenteeism_days: f64,
}

/// Total medical claims cost recorded on a date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ClaimsMetric {
    pub id: String,
    pub date: NaiveDate,
    pub total_claims_cost: f64,
}

/// Request payload for adding an employee
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct NewEmployee {
    #[validate(length(min = 1, max = 200, message = "Name must be between 1 and 200 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 200, message = "Department cannot exceed 200 characters"))]
    pub dept: String,

    pub role_id: u64,

    #[serde(default)]
    #[validate(range(min = 5.0, max = 100.0, message = "BMI must be between 5 and 100"))]
    pub bmi: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 2.0, max = 25.0, message = "HbA1c must be between 2 and 25"))]
    pub hba1c: Option<f64>,
}

/// Request payload for adding a role
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct NewRole {
    #[validate(length(min = 1, max = 200, message = "Role name must be between 1 and 200 characters"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "Average loss per day cannot be negative"))]
    pub avg_loss_per_day: f64,
}

/// Request payload for adding an absenteeism measurement
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct NewAbsenteeismMetric {
    /// ISO-8601 date (YYYY-MM-DD)
    pub date: NaiveDate,

    #[validate(range(min = 0.0, message = "Absenteeism days cannot be negative"))]
    pub absenteeism_days: f64,
}

/// Request payload for adding a claims cost measurement
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct NewClaimsMetric {
    /// ISO-8601 date (YYYY-MM-DD)
    pub date: NaiveDate,

    #[validate(range(min = 0.0, message = "Claims cost cannot be negative"))]
    pub total_claims_cost: f64,
}

/// Everything the wellness log holds, newest records first
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct WellnessLog {
    pub employees: Vec<Employee>,
    pub roles: Vec<Role>,
    pub metrics: Vec<AbsenteeismMetric>,
    pub claims: Vec<ClaimsMetric>,
}

/// Direction of a series between its baseline and latest value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum Trend {
    Decrease,
    Increase,
    NoChange,
}

impl Trend {
    /// Trend of `baseline - latest`
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Trend::Decrease
        } else if change < 0.0 {
            Trend::Increase
        } else {
            Trend::NoChange
        }
    }
}

/// Baseline (earliest) against latest value of a dated series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct SeriesChange {
    pub baseline: f64,
    pub latest: f64,
    /// `baseline - latest`; positive means improvement
    pub change: f64,
    pub trend: Trend,
}

/// Wellness programme ROI figures
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct WellnessSummary {
    pub total_employees: usize,
    /// Productivity loss per absent day averaged over the roster
    pub avg_loss_per_day: f64,
    pub absenteeism: SeriesChange,
    pub claims: SeriesChange,
    pub savings_from_productivity: f64,
    pub savings_from_claims: f64,
    pub total_estimated_savings: f64,
}
