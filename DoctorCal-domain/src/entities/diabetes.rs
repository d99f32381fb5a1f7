//! FINDRISC questionnaire answers.
//!
//! Each answer enum owns its point value. Unknown answers deserialize to the
//! zero-point category, which is also the default of every field.

use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum AgeBracket {
    #[serde(rename = "45_54")]
    From45To54,
    #[serde(rename = "55_64")]
    From55To64,
    #[serde(rename = "over_64")]
    Over64,
    #[default]
    #[serde(other, rename = "under_45")]
    Under45,
}

impl AgeBracket {
    pub fn points(self) -> u32 {
        match self {
            AgeBracket::Under45 => 0,
            AgeBracket::From45To54 => 2,
            AgeBracket::From55To64 => 3,
            AgeBracket::Over64 => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum BmiBracket {
    #[serde(rename = "25_30")]
    From25To30,
    #[serde(rename = "over_30")]
    Over30,
    #[default]
    #[serde(other, rename = "under_25")]
    Under25,
}

impl BmiBracket {
    pub fn points(self) -> u32 {
        match self {
            BmiBracket::Under25 => 0,
            BmiBracket::From25To30 => 1,
            BmiBracket::Over30 => 3,
        }
    }
}

/// Waist circumference band
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum WaistBracket {
    Moderate,
    High,
    #[default]
    #[serde(other)]
    Low,
}

impl WaistBracket {
    pub fn points(self) -> u32 {
        match self {
            WaistBracket::Low => 0,
            WaistBracket::Moderate => 3,
            WaistBracket::High => 4,
        }
    }
}

/// Answer to a yes/no question where "yes" is the healthy answer
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum HealthyHabit {
    No,
    #[default]
    #[serde(other)]
    Yes,
}

/// Answer to a yes/no question where "no" is the healthy answer
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum RiskFactor {
    Yes,
    #[default]
    #[serde(other)]
    No,
}

/// Closest relative diagnosed with diabetes
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum FamilyHistory {
    /// Grandparent, aunt, uncle or first cousin
    SecondDegree,
    /// Parent, sibling or child
    FirstDegree,
    #[default]
    #[serde(other)]
    None,
}

impl FamilyHistory {
    pub fn points(self) -> u32 {
        match self {
            FamilyHistory::None => 0,
            FamilyHistory::SecondDegree => 3,
            FamilyHistory::FirstDegree => 5,
        }
    }
}

/// Answers to the eight FINDRISC questions
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct DiabetesAnswers {
    pub age: AgeBracket,
    pub bmi: BmiBracket,
    pub waist: WaistBracket,
    /// At least 30 minutes of physical activity daily
    pub daily_activity: HealthyHabit,
    /// Fruit or vegetables every day
    pub daily_fruit_vegetables: HealthyHabit,
    /// Taking blood pressure medication
    pub bp_medication: RiskFactor,
    /// History of high blood glucose
    pub high_glucose_history: RiskFactor,
    pub family_history: FamilyHistory,
}

/// FINDRISC risk band, ordered from lowest to highest
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum DiabetesRiskBand {
    Low,
    SlightlyElevated,
    Moderate,
    High,
    VeryHigh,
}

impl DiabetesRiskBand {
    /// Label with the approximate 10-year risk of type 2 diabetes
    pub fn label(&self) -> &'static str {
        match self {
            DiabetesRiskBand::Low => "Low Risk (~1%)",
            DiabetesRiskBand::SlightlyElevated => "Slightly Elevated (~4%)",
            DiabetesRiskBand::Moderate => "Moderate Risk (~16%)",
            DiabetesRiskBand::High => "High Risk (~33%)",
            DiabetesRiskBand::VeryHigh => "Very High Risk (~50%)",
        }
    }
}

/// Total FINDRISC score and its band
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct DiabetesScore {
    pub score: u32,
    pub band: DiabetesRiskBand,
    pub label: String,
}
