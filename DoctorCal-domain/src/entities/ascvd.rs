use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::common::Sex;

/// Race groups covered by the Pooled Cohort Equations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum Race {
    /// White (non-Hispanic); also used for other races
    White,
    /// African-American
    Black,
}

/// Inputs of the 10-year ASCVD risk estimate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct AscvdInput {
    /// Age in years (validated range 40-79)
    pub age: u32,

    pub sex: Sex,

    pub race: Race,

    /// Total cholesterol in mg/dL
    pub total_cholesterol: f64,

    /// HDL cholesterol in mg/dL
    pub hdl: f64,

    /// Systolic blood pressure in mmHg
    pub systolic_bp: f64,

    /// Currently treated for hypertension
    pub on_hypertension_treatment: bool,

    pub diabetes: bool,

    /// Current smoker
    pub smoker: bool,
}

/// Interpretation of a 10-year ASCVD risk percentage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum AscvdRiskCategory {
    /// Below 5%
    Low,

    /// 5% to below 7.5%
    Borderline,

    /// 7.5% or above, consider a risk-lowering therapy discussion
    Elevated,
}

impl AscvdRiskCategory {
    /// Categorize a risk percentage
    pub fn from_percent(risk_percent: f64) -> Self {
        if risk_percent < 5.0 {
            AscvdRiskCategory::Low
        } else if risk_percent < 7.5 {
            AscvdRiskCategory::Borderline
        } else {
            AscvdRiskCategory::Elevated
        }
    }
}

impl std::fmt::Display for AscvdRiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AscvdRiskCategory::Low => "Low",
            AscvdRiskCategory::Borderline => "Borderline",
            AscvdRiskCategory::Elevated => "Elevated",
        };
        f.write_str(label)
    }
}

/// Result of the 10-year ASCVD risk estimate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct AscvdResult {
    /// Estimated 10-year risk, percent in [0, 100] with one decimal
    pub risk_percent: f64,

    pub category: AscvdRiskCategory,

    /// Set when the age falls outside the validated 40-79 range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_warning: Option<String>,
}
