use axum::{extract::Json, http::StatusCode, response::IntoResponse};
use tracing::{info, instrument, warn};
use validator::Validate;

use doctor_cal_domain::entities::ascvd::{AscvdInput, AscvdResult};
use doctor_cal_domain::services::{compute_ascvd_risk, AscvdError};

use crate::entities::ascvd::AscvdRequest;
use crate::entities::ErrorResponse;

/// Estimate 10-year ASCVD risk with the Pooled Cohort Equations
#[utoipa::path(
    post,
    path = "/api/v1/ascvd",
    request_body = AscvdRequest,
    responses(
        (status = 200, description = "Risk estimate", body = AscvdResult),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    ),
    tag = "calculators"
)]
#[instrument(skip(request))]
pub async fn calculate_ascvd(Json(request): Json<AscvdRequest>) -> Result<impl IntoResponse, ErrorResponse> {
    if let Err(errors) = request.validate() {
        warn!("Invalid ASCVD request: {}", errors);
        return Err(ErrorResponse::from_validation(&errors));
    }

    let input = AscvdInput::from(request);
    match compute_ascvd_risk(&input) {
        Ok(result) => {
            info!("ASCVD risk {}% ({})", result.risk_percent, result.category);
            Ok((StatusCode::OK, Json(result)))
        }
        Err(AscvdError::ValidationError(message)) => Err(ErrorResponse::validation_error(&message, None)),
    }
}
