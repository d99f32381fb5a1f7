use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage key for the employee roster
pub const EMPLOYEES_KEY: &str = "ew_employees";

/// Storage key for the role table
pub const ROLES_KEY: &str = "ew_roles";

/// Storage key for the absenteeism series
pub const METRICS_KEY: &str = "ew_metrics";

/// Storage key for the claims series
pub const CLAIMS_KEY: &str = "ew_claims";

/// Every key owned by the wellness log, in export order
pub const WELLNESS_KEYS: [&str; 4] = [EMPLOYEES_KEY, ROLES_KEY, METRICS_KEY, CLAIMS_KEY];

/// Storage model for an employee on the wellness roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier for the employee
    pub id: String,

    /// Employee name
    pub name: String,

    /// Department, free text
    #[serde(default)]
    pub dept: String,

    /// Role the employee belongs to
    pub role_id: u64,

    /// Optional body mass index
    #[serde(default)]
    pub bmi: Option<f64>,

    /// Optional HbA1c percentage
    #[serde(default)]
    pub hba1c: Option<f64>,
}

/// Storage model for a role and its productivity loss per absent day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRecord {
    pub id: u64,
    pub name: String,
    pub avg_loss_per_day: f64,
}

/// Storage model for one absenteeism measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsenteeismRecord {
    pub id: String,

    /// Serialized as ISO-8601 (YYYY-MM-DD)
    pub date: NaiveDate,

    pub absenteeism_days: f64,
}

/// Storage model for one claims cost measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimsRecord {
    pub id: String,

    /// Serialized as ISO-8601 (YYYY-MM-DD)
    pub date: NaiveDate,

    pub total_claims_cost: f64,
}
