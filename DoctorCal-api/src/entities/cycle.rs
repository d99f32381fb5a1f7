use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use doctor_cal_domain::entities::cycle::CycleRequest;

/// Cycle forecast to compute and forward to the clinic endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CycleSubmitRequest {
    #[serde(default)]
    pub patient_id: Option<String>,

    #[serde(flatten)]
    pub cycle: CycleRequest,
}
