use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use doctor_cal_domain::entities::ascvd::{AscvdInput, Race};
use doctor_cal_domain::entities::common::Sex;

/// Request for a 10-year ASCVD risk estimate
///
/// Ages outside 40-79 are accepted and answered with a warning.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct AscvdRequest {
    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: u32,

    pub sex: Sex,

    pub race: Race,

    /// Total cholesterol in mg/dL
    #[validate(range(min = 1.0, max = 1000.0, message = "Total cholesterol must be between 1 and 1000 mg/dL"))]
    pub total_cholesterol: f64,

    /// HDL cholesterol in mg/dL
    #[validate(range(min = 1.0, max = 500.0, message = "HDL must be between 1 and 500 mg/dL"))]
    pub hdl: f64,

    /// Systolic blood pressure in mmHg
    #[validate(range(min = 40.0, max = 300.0, message = "Systolic BP must be between 40 and 300 mmHg"))]
    pub systolic_bp: f64,

    #[serde(default)]
    pub on_hypertension_treatment: bool,

    #[serde(default)]
    pub diabetes: bool,

    #[serde(default)]
    pub smoker: bool,
}

impl From<AscvdRequest> for AscvdInput {
    fn from(request: AscvdRequest) -> Self {
        AscvdInput {
            age: request.age,
            sex: request.sex,
            race: request.race,
            total_cholesterol: request.total_cholesterol,
            hdl: request.hdl,
            systolic_bp: request.systolic_bp,
            on_hypertension_treatment: request.on_hypertension_treatment,
            diabetes: request.diabetes,
            smoker: request.smoker,
        }
    }
}
