pub mod ascvd;
pub mod cycles;
pub mod diet;
pub mod health;
pub mod scores;
pub mod wellness;

use std::sync::Arc;

use doctor_cal_domain::submit::ClinicClient;

/// Shared client for the clinic records endpoint
pub type ClinicService = Arc<ClinicClient>;

/// `Content-Disposition` value for a download.
///
/// `filename` is an ASCII fallback; `filename*` carries the full name in UTF-8.
pub(crate) fn attachment_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(filename)
    )
}

// Re-export handlers for easier imports
pub use ascvd::calculate_ascvd;
pub use cycles::{cycle_record, predict_cycles, submit_cycles};
pub use diet::{compute_diet_plan, export_diet_plan, list_foods, submit_diet_plan};
pub use health::health_check;
pub use scores::{calculate_cancer, calculate_diabetes};
pub use wellness::{
    add_claim, add_employee, add_metric, add_role, clear_wellness_log, export_wellness_csv, get_wellness_log,
    get_wellness_summary,
};

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_attachment_disposition_plain_name() {
        assert_eq!(
            attachment_disposition("wellness_data.csv"),
            "attachment; filename=\"wellness_data.csv\"; filename*=UTF-8''wellness_data.csv"
        );
    }

    #[test]
    fn test_attachment_disposition_is_always_a_valid_header() {
        let disposition = attachment_disposition("Rāo \"Asha\"\r\n.json");
        assert_eq!(
            disposition,
            "attachment; filename=\"R_o__Asha___.json\"; filename*=UTF-8''R%C4%81o%20%22Asha%22%0D%0A.json"
        );
        assert!(HeaderValue::from_str(&disposition).is_ok());
    }
}
