use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::common::Sex;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum Tobacco {
    Former,
    Current,
    #[default]
    #[serde(other)]
    Never,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum Alcohol {
    Occasional,
    Daily,
    #[default]
    #[serde(other)]
    None,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum PhysicalActivity {
    Moderate,
    Sedentary,
    #[default]
    #[serde(other)]
    Active,
}

/// How often processed or red meat is eaten
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum ProcessedDiet {
    Occasional,
    Frequent,
    #[default]
    #[serde(other)]
    Rare,
}

/// Inputs of the composite cancer risk score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct CancerInput {
    pub age: u32,

    pub sex: Sex,

    /// First-degree relative with cancer
    #[serde(default)]
    pub family_history: bool,

    #[serde(default)]
    pub tobacco: Tobacco,

    #[serde(default)]
    pub alcohol: Alcohol,

    #[serde(default)]
    pub physical_activity: PhysicalActivity,

    #[serde(default)]
    pub diet: ProcessedDiet,

    pub bmi: f64,

    /// Occupational or environmental carcinogen exposure
    #[serde(default)]
    pub environmental: bool,

    /// Chronic inflammatory disease
    #[serde(default)]
    pub inflammatory: bool,

    #[serde(default)]
    pub diabetes: bool,

    /// Never given birth, scored for females only
    #[serde(default)]
    pub nulliparity: bool,

    /// Long-term hormone therapy, scored for females only
    #[serde(default)]
    pub hormone_therapy: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum CancerRiskBand {
    Low,
    Moderate,
    High,
}

impl CancerRiskBand {
    pub fn label(&self) -> &'static str {
        match self {
            CancerRiskBand::Low => "Low risk",
            CancerRiskBand::Moderate => "Moderate risk",
            CancerRiskBand::High => "High risk",
        }
    }

    /// Recommended follow-up for the band
    pub fn advice(&self) -> &'static str {
        match self {
            CancerRiskBand::Low => "Routine screening per guidelines",
            CancerRiskBand::Moderate => "Lifestyle modification and annual check-up",
            CancerRiskBand::High => "Physician consultation; consider targeted cancer screening",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct CancerScore {
    pub score: u32,
    pub band: CancerRiskBand,
    pub label: String,
    pub advice: String,
}
