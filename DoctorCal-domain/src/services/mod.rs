// Domain services
// Calculators are pure functions; the wellness service owns the persisted log.
pub mod ascvd;
pub mod cancer;
pub mod cycle;
pub mod diabetes;
pub mod diet;
pub mod wellness;

use validator::ValidationErrors;

// Re-export calculators, service traits and factory functions
pub use ascvd::{compute_ascvd_risk, AscvdError};
pub use cancer::compute_cancer_score;
pub use cycle::{predict_cycles, predict_cycles_from_str, CycleError};
pub use diabetes::compute_diabetes_score;
pub use diet::{DietCalculator, FoodCatalog, PresetTable};
pub use wellness::{
    compute_wellness_summary, create_default_wellness_service, create_wellness_service, WellnessService,
    WellnessServiceError, WellnessServiceTrait,
};

// Re-export mock service factory functions when the mock feature is enabled
#[cfg(feature = "mock")]
pub use wellness::create_mock_wellness_service;

/// Flatten validator errors into one message, `field: message; field: message`
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages: Vec<String> = errors
                .iter()
                .map(|err| match &err.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Invalid {}", field),
                })
                .collect();
            format!("{}: {}", field, messages.join(", "))
        })
        .collect();
    // field_errors is a HashMap
    fields.sort();
    fields.join("; ")
}
