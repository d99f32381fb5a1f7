pub mod ascvd;
pub mod cancer;
pub mod common;
pub mod conversions;
pub mod cycle;
pub mod diabetes;
pub mod diet;
pub mod wellness;

// Re-export common types for easier imports
pub use ascvd::{AscvdInput, AscvdResult, AscvdRiskCategory, Race};
pub use cancer::{CancerInput, CancerRiskBand, CancerScore};
pub use common::Sex;
pub use cycle::{CycleForecast, CyclePrediction, CycleRequest};
pub use diabetes::{DiabetesAnswers, DiabetesRiskBand, DiabetesScore};
pub use diet::{ActivityLevel, DietPatient, DietPlan, DiseasePreset, FoodItem, MacroPreset, MacroTargets, MealPlan, Region};
pub use wellness::{
    AbsenteeismMetric, ClaimsMetric, Employee, NewAbsenteeismMetric, NewClaimsMetric, NewEmployee, NewRole, Role,
    SeriesChange, Trend, WellnessLog, WellnessSummary,
};
