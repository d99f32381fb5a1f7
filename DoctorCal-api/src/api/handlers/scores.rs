// Questionnaire scores: FINDRISC diabetes and the cancer composite
use axum::extract::Json;
use tracing::{info, instrument};

use doctor_cal_domain::entities::cancer::{CancerInput, CancerScore};
use doctor_cal_domain::entities::diabetes::{DiabetesAnswers, DiabetesScore};
use doctor_cal_domain::services::{compute_cancer_score, compute_diabetes_score};

/// Score the FINDRISC type 2 diabetes questionnaire
#[utoipa::path(
    post,
    path = "/api/v1/diabetes",
    request_body = DiabetesAnswers,
    responses(
        (status = 200, description = "Questionnaire score and band", body = DiabetesScore),
    ),
    tag = "calculators"
)]
#[instrument(skip(answers))]
pub async fn calculate_diabetes(Json(answers): Json<DiabetesAnswers>) -> Json<DiabetesScore> {
    let score = compute_diabetes_score(&answers);
    info!("FINDRISC score {} ({})", score.score, score.label);
    Json(score)
}

/// Score the cancer risk questionnaire
#[utoipa::path(
    post,
    path = "/api/v1/cancer",
    request_body = CancerInput,
    responses(
        (status = 200, description = "Composite score, band and advice", body = CancerScore),
    ),
    tag = "calculators"
)]
#[instrument(skip(input))]
pub async fn calculate_cancer(Json(input): Json<CancerInput>) -> Json<CancerScore> {
    let score = compute_cancer_score(&input);
    info!("Cancer risk score {} ({})", score.score, score.label);
    Json(score)
}
