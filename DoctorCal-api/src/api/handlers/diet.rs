use std::sync::Arc;

use axum::{
    extract::{Json, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use chrono::Utc;
use tracing::{debug, error, info, instrument, warn};

use doctor_cal_domain::entities::diet::{DietPlan, FoodItem};
use doctor_cal_domain::export::{diet_plan_filename, diet_plan_json};
use doctor_cal_domain::services::DietCalculator;
use doctor_cal_domain::submit::DietSubmission;

use super::{attachment_disposition, ClinicService};
use crate::entities::diet::{DietRequest, FoodQuery};
use crate::entities::{ErrorResponse, SubmissionResponse};

/// Shared diet calculator with its food and preset tables
pub type DietService = Arc<DietCalculator>;

fn plan_for(calculator: &DietCalculator, request: &DietRequest) -> Result<DietPlan, ErrorResponse> {
    if let Err(errors) = request.validate() {
        warn!("Invalid diet request: {}", errors);
        return Err(ErrorResponse::from_validation(&errors));
    }
    Ok(calculator.compute_diet_plan(&request.patient, &request.custom_foods))
}

/// Compute energy needs, macro targets and a meal plan
#[utoipa::path(
    post,
    path = "/api/v1/diet",
    request_body = DietRequest,
    responses(
        (status = 200, description = "Diet prescription", body = DietPlan),
        (status = 400, description = "Invalid patient data", body = ErrorResponse),
    ),
    tag = "diet"
)]
#[instrument(skip(calculator, request))]
pub async fn compute_diet_plan(
    State(calculator): State<DietService>,
    Json(request): Json<DietRequest>,
) -> Result<Json<DietPlan>, ErrorResponse> {
    let plan = plan_for(&calculator, &request)?;
    info!(
        "Diet plan for {} preset: {} kcal/day",
        request.patient.disease.as_str(),
        plan.macros.calories
    );
    Ok(Json(plan))
}

/// Regional food table, optionally filtered by name
#[utoipa::path(
    get,
    path = "/api/v1/diet/foods",
    params(FoodQuery),
    responses(
        (status = 200, description = "Matching foods", body = [FoodItem]),
    ),
    tag = "diet"
)]
#[instrument(skip(calculator))]
pub async fn list_foods(State(calculator): State<DietService>, Query(query): Query<FoodQuery>) -> Json<Vec<FoodItem>> {
    let region = query.region.unwrap_or_default();
    let foods = match query.q.as_deref() {
        Some(q) => calculator.search_foods(region, &[], q),
        None => calculator.food_list(region, &[]),
    };
    debug!("Listing {} {} foods", foods.len(), region.display_name());
    Json(foods)
}

/// Diet prescription as a JSON download
#[utoipa::path(
    post,
    path = "/api/v1/diet/export",
    request_body = DietRequest,
    responses(
        (status = 200, description = "Prescription file", content_type = "application/json", body = String),
        (status = 400, description = "Invalid patient data", body = ErrorResponse),
    ),
    tag = "diet"
)]
#[instrument(skip(calculator, request))]
pub async fn export_diet_plan(
    State(calculator): State<DietService>,
    Json(request): Json<DietRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let plan = plan_for(&calculator, &request)?;
    let body = diet_plan_json(&request.patient, &plan).map_err(|e| {
        error!("Failed to serialize diet prescription: {}", e);
        ErrorResponse::internal_error()
    })?;

    let disposition = attachment_disposition(&diet_plan_filename(&request.patient));
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

/// Compute a diet prescription and forward it to the clinic endpoint
#[utoipa::path(
    post,
    path = "/api/v1/diet/submit",
    request_body = DietRequest,
    responses(
        (status = 200, description = "Submission outcome", body = SubmissionResponse),
        (status = 400, description = "Invalid patient data", body = ErrorResponse),
    ),
    tag = "diet"
)]
#[instrument(skip(calculator, clinic, request))]
pub async fn submit_diet_plan(
    State(calculator): State<DietService>,
    State(clinic): State<ClinicService>,
    Json(request): Json<DietRequest>,
) -> Result<Json<SubmissionResponse>, ErrorResponse> {
    let plan = plan_for(&calculator, &request)?;
    let submission = DietSubmission::new(request.patient, plan, Utc::now());

    let response = match clinic.submit(&submission).await {
        Ok(()) => SubmissionResponse::saved(),
        Err(e) => {
            warn!("Diet prescription not saved: {}", e);
            SubmissionResponse::failed(e)
        }
    };
    Ok(Json(response))
}
