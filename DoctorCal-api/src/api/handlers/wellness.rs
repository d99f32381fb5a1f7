use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use tracing::{error, info, instrument, warn};

use doctor_cal_domain::entities::wellness::{
    AbsenteeismMetric, ClaimsMetric, Employee, NewAbsenteeismMetric, NewClaimsMetric, NewEmployee, NewRole, Role,
    WellnessLog, WellnessSummary,
};
use doctor_cal_domain::export::WELLNESS_CSV_FILENAME;
use doctor_cal_domain::services::{WellnessServiceError, WellnessServiceTrait};

use super::attachment_disposition;
use crate::entities::ErrorResponse;

/// Service type for dependency injection
pub type WellnessService = Arc<dyn WellnessServiceTrait + Send + Sync>;

/// Map wellness service errors to API error responses
fn map_service_error(err: WellnessServiceError) -> ErrorResponse {
    match err {
        WellnessServiceError::ValidationError(message) => {
            warn!("Invalid wellness request: {}", message);
            ErrorResponse::validation_error(&message, None)
        }
        WellnessServiceError::RepositoryError(message) => {
            error!("Wellness log storage failed: {}", message);
            ErrorResponse::internal_error()
        }
    }
}

/// Whole wellness log, newest records first
#[utoipa::path(
    get,
    path = "/api/v1/wellness",
    responses(
        (status = 200, description = "Wellness log", body = WellnessLog),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "wellness"
)]
#[instrument(skip(service))]
pub async fn get_wellness_log(State(service): State<WellnessService>) -> Result<Json<WellnessLog>, ErrorResponse> {
    service.snapshot().await.map(Json).map_err(map_service_error)
}

/// Drop every wellness record set
#[utoipa::path(
    delete,
    path = "/api/v1/wellness",
    responses(
        (status = 204, description = "Wellness log cleared"),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "wellness"
)]
#[instrument(skip(service))]
pub async fn clear_wellness_log(State(service): State<WellnessService>) -> Result<StatusCode, ErrorResponse> {
    service.clear_all().await.map_err(map_service_error)?;
    info!("Wellness log cleared");
    Ok(StatusCode::NO_CONTENT)
}

/// Add an employee to the roster
#[utoipa::path(
    post,
    path = "/api/v1/wellness/employees",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee added", body = Employee),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "wellness"
)]
#[instrument(skip(service, request))]
pub async fn add_employee(
    State(service): State<WellnessService>,
    Json(request): Json<NewEmployee>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let employee = service.add_employee(request).await.map_err(map_service_error)?;
    info!("Employee added with ID: {}", employee.id);
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Add a role with its productivity loss per absent day
#[utoipa::path(
    post,
    path = "/api/v1/wellness/roles",
    request_body = NewRole,
    responses(
        (status = 201, description = "Role added", body = Role),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "wellness"
)]
#[instrument(skip(service, request))]
pub async fn add_role(
    State(service): State<WellnessService>,
    Json(request): Json<NewRole>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let role = service.add_role(request).await.map_err(map_service_error)?;
    info!("Role added with ID: {}", role.id);
    Ok((StatusCode::CREATED, Json(role)))
}

/// Record absenteeism days for a date
#[utoipa::path(
    post,
    path = "/api/v1/wellness/metrics",
    request_body = NewAbsenteeismMetric,
    responses(
        (status = 201, description = "Measurement added", body = AbsenteeismMetric),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "wellness"
)]
#[instrument(skip(service, request))]
pub async fn add_metric(
    State(service): State<WellnessService>,
    Json(request): Json<NewAbsenteeismMetric>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let metric = service.add_metric(request).await.map_err(map_service_error)?;
    Ok((StatusCode::CREATED, Json(metric)))
}

/// Record total claims cost for a date
#[utoipa::path(
    post,
    path = "/api/v1/wellness/claims",
    request_body = NewClaimsMetric,
    responses(
        (status = 201, description = "Measurement added", body = ClaimsMetric),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "wellness"
)]
#[instrument(skip(service, request))]
pub async fn add_claim(
    State(service): State<WellnessService>,
    Json(request): Json<NewClaimsMetric>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let claim = service.add_claim(request).await.map_err(map_service_error)?;
    Ok((StatusCode::CREATED, Json(claim)))
}

/// Estimated programme savings
#[utoipa::path(
    get,
    path = "/api/v1/wellness/summary",
    responses(
        (status = 200, description = "ROI summary", body = WellnessSummary),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "wellness"
)]
#[instrument(skip(service))]
pub async fn get_wellness_summary(
    State(service): State<WellnessService>,
) -> Result<Json<WellnessSummary>, ErrorResponse> {
    service.summary().await.map(Json).map_err(map_service_error)
}

/// Wellness log as a CSV download
#[utoipa::path(
    get,
    path = "/api/v1/wellness/export.csv",
    responses(
        (status = 200, description = "CSV export", content_type = "text/csv", body = String),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "wellness"
)]
#[instrument(skip(service))]
pub async fn export_wellness_csv(State(service): State<WellnessService>) -> Result<impl IntoResponse, ErrorResponse> {
    let csv = service.export_csv().await.map_err(map_service_error)?;
    let disposition = attachment_disposition(WELLNESS_CSV_FILENAME);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    ))
}
