use axum::{
    extract::{Json, State},
    response::{Html, IntoResponse},
};
use chrono::Utc;
use tracing::{info, instrument, warn};
use validator::Validate;

use doctor_cal_domain::entities::cycle::{CycleForecast, CycleRequest};
use doctor_cal_domain::export::cycle_record_html;
use doctor_cal_domain::services::predict_cycles_from_str;
use doctor_cal_domain::submit::CycleSubmission;

use super::ClinicService;
use crate::entities::cycle::CycleSubmitRequest;
use crate::entities::{ErrorResponse, SubmissionResponse};

fn forecast_for(request: &CycleRequest) -> Result<CycleForecast, ErrorResponse> {
    if let Err(errors) = request.validate() {
        warn!("Invalid cycle request: {}", errors);
        return Err(ErrorResponse::from_validation(&errors));
    }

    predict_cycles_from_str(
        request.last_period.as_deref(),
        request.cycle_length,
        request.luteal_phase,
        request.count,
    )
    .map_err(|e| {
        warn!("Cycle prediction rejected: {}", e);
        ErrorResponse::bad_request(&e.to_string())
    })
}

/// Predict upcoming periods, ovulation days and fertile windows
#[utoipa::path(
    post,
    path = "/api/v1/cycles",
    request_body = CycleRequest,
    responses(
        (status = 200, description = "Predicted cycles", body = CycleForecast),
        (status = 400, description = "Missing or invalid start date", body = ErrorResponse),
    ),
    tag = "cycles"
)]
#[instrument(skip(request))]
pub async fn predict_cycles(Json(request): Json<CycleRequest>) -> Result<Json<CycleForecast>, ErrorResponse> {
    let forecast = forecast_for(&request)?;
    info!("Predicted {} cycles", forecast.cycles.len());
    Ok(Json(forecast))
}

/// Printable patient record for a cycle forecast
#[utoipa::path(
    post,
    path = "/api/v1/cycles/record",
    request_body = CycleRequest,
    responses(
        (status = 200, description = "Patient record", content_type = "text/html", body = String),
        (status = 400, description = "Missing or invalid start date", body = ErrorResponse),
    ),
    tag = "cycles"
)]
#[instrument(skip(request))]
pub async fn cycle_record(Json(request): Json<CycleRequest>) -> Result<impl IntoResponse, ErrorResponse> {
    let forecast = forecast_for(&request)?;
    Ok(Html(cycle_record_html(&request, &forecast, Utc::now().date_naive())))
}

/// Predict cycles and forward them to the clinic endpoint
#[utoipa::path(
    post,
    path = "/api/v1/cycles/submit",
    request_body = CycleSubmitRequest,
    responses(
        (status = 200, description = "Submission outcome", body = SubmissionResponse),
        (status = 400, description = "Missing or invalid start date", body = ErrorResponse),
    ),
    tag = "cycles"
)]
#[instrument(skip(clinic, request))]
pub async fn submit_cycles(
    State(clinic): State<ClinicService>,
    Json(request): Json<CycleSubmitRequest>,
) -> Result<Json<SubmissionResponse>, ErrorResponse> {
    let forecast = forecast_for(&request.cycle)?;
    let submission = CycleSubmission::new(request.patient_id, &request.cycle, &forecast);

    let response = match clinic.submit(&submission).await {
        Ok(()) => SubmissionResponse::saved(),
        Err(e) => {
            warn!("Cycle submission not saved: {}", e);
            SubmissionResponse::failed(e)
        }
    };
    Ok(Json(response))
}
