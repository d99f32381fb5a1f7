use serde::{Deserialize, Serialize};
use validator::Validate;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::common::Sex;

/// Daily activity level, scaling BMR to total energy expenditure
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Multiplier applied to BMR
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

/// Condition driving the macro split. Unknown keys fall back to `None`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum DiseasePreset {
    Diabetes,
    Hypertension,
    Obesity,
    Ckd,
    HeartFailure,
    WeightLoss,
    WeightGain,
    #[default]
    #[serde(other)]
    None,
}

impl DiseasePreset {
    pub const ALL: [DiseasePreset; 8] = [
        DiseasePreset::None,
        DiseasePreset::Diabetes,
        DiseasePreset::Hypertension,
        DiseasePreset::Obesity,
        DiseasePreset::Ckd,
        DiseasePreset::HeartFailure,
        DiseasePreset::WeightLoss,
        DiseasePreset::WeightGain,
    ];

    /// Wire key of the preset
    pub fn as_str(&self) -> &'static str {
        match self {
            DiseasePreset::None => "none",
            DiseasePreset::Diabetes => "diabetes",
            DiseasePreset::Hypertension => "hypertension",
            DiseasePreset::Obesity => "obesity",
            DiseasePreset::Ckd => "ckd",
            DiseasePreset::HeartFailure => "heart_failure",
            DiseasePreset::WeightLoss => "weight_loss",
            DiseasePreset::WeightGain => "weight_gain",
        }
    }
}

/// Regional cuisine used for the meal plan
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum Region {
    #[default]
    South,
    North,
}

impl Region {
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::South => "South Indian",
            Region::North => "North Indian",
        }
    }
}

/// Patient details for a diet prescription
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct DietPatient {
    #[serde(default)]
    #[validate(length(max = 200, message = "Name cannot exceed 200 characters"))]
    pub name: String,

    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: u32,

    pub sex: Sex,

    /// Height in centimetres
    #[validate(range(min = 50.0, max = 250.0, message = "Height must be between 50 and 250 cm"))]
    pub height_cm: f64,

    /// Weight in kilograms
    #[validate(range(min = 20.0, max = 300.0, message = "Weight must be between 20 and 300 kg"))]
    pub weight_kg: f64,

    #[serde(default)]
    pub activity: ActivityLevel,

    #[serde(default)]
    pub disease: DiseasePreset,

    #[serde(default)]
    pub region: Region,

    #[serde(default = "default_vegetarian")]
    pub vegetarian: bool,
}

fn default_vegetarian() -> bool {
    true
}

/// One serving of a food with its nutrients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct FoodItem {
    #[validate(length(min = 1, max = 200, message = "Food name must be between 1 and 200 characters"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "Energy cannot be negative"))]
    pub kcal: f64,

    #[serde(default)]
    pub carbs: f64,

    #[serde(default)]
    pub protein: f64,

    #[serde(default)]
    pub fat: f64,

    #[serde(default)]
    pub fibre: f64,
}

impl FoodItem {
    /// Food with energy only, as entered ad hoc during a session
    pub fn custom(name: impl Into<String>, kcal: f64) -> Self {
        Self {
            name: name.into(),
            kcal,
            carbs: 0.0,
            protein: 0.0,
            fat: 0.0,
            fibre: 0.0,
        }
    }
}

/// Macro split of a disease preset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct MacroPreset {
    pub carbs_pct: f64,
    pub protein_pct: f64,
    pub fat_pct: f64,
    /// Daily fibre goal in grams
    pub fiber_goal: f64,
    /// Fractional calorie adjustment, e.g. -0.2 for a 20% deficit
    pub calorie_adj: f64,
}

/// Daily energy and macronutrient targets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct MacroTargets {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
    pub preset: MacroPreset,
}

/// Positional meal plan; a slot is empty when the food list runs short
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct MealPlan {
    pub breakfast: Option<FoodItem>,
    pub mid_morning_snack: Option<FoodItem>,
    pub lunch: Option<FoodItem>,
    pub evening_snack: Option<FoodItem>,
    pub dinner: Option<FoodItem>,
    pub notes: String,
}

/// Complete diet prescription
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct DietPlan {
    /// Basal metabolic rate, kcal/day
    pub bmr: f64,

    /// Total daily energy expenditure, kcal/day
    pub tdee: f64,

    pub macros: MacroTargets,

    pub plan: MealPlan,
}
