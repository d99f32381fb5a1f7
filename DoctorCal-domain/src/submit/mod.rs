//! Submission of computed results to a clinic records endpoint
//!
//! Submissions are fire-and-forget: a failure is returned to the caller as a
//! notice and never retried.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::entities::cycle::{CycleForecast, CyclePrediction, CycleRequest};
use crate::entities::diet::{DietPatient, DietPlan, MacroTargets, MealPlan};

/// Clinic submission errors
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// No endpoint configured
    #[error("No clinic endpoint configured")]
    NotConfigured,

    /// The request could not be sent or the response not read
    #[error("Failed to reach clinic endpoint: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status
    #[error("Failed to save: {0}")]
    Rejected(u16),
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        SubmissionError::Transport(err.to_string())
    }
}

/// Computed part of a diet submission
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct DietComputed {
    pub bmr: f64,
    pub tdee: f64,
    pub macros: MacroTargets,
    pub plan: MealPlan,
    pub created_at: DateTime<Utc>,
}

/// Diet prescription as sent to the clinic
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct DietSubmission {
    pub patient: DietPatient,
    pub computed: DietComputed,
}

impl DietSubmission {
    pub fn new(patient: DietPatient, plan: DietPlan, created_at: DateTime<Utc>) -> Self {
        Self {
            patient,
            computed: DietComputed {
                bmr: plan.bmr,
                tdee: plan.tdee,
                macros: plan.macros,
                plan: plan.plan,
                created_at,
            },
        }
    }
}

/// Cycle forecast as sent to the clinic
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct CycleSubmission {
    pub patient_id: Option<String>,
    pub last_period: NaiveDate,
    pub cycle_length: i64,
    pub luteal_phase: i64,
    pub predictions: Vec<CyclePrediction>,
    pub note: String,
}

impl CycleSubmission {
    pub fn new(patient_id: Option<String>, request: &CycleRequest, forecast: &CycleForecast) -> Self {
        let last_period = forecast
            .cycles
            .first()
            .map(|c| c.period_start)
            .unwrap_or(forecast.next_period);

        Self {
            patient_id,
            last_period,
            cycle_length: request.cycle_length,
            luteal_phase: request.luteal_phase,
            predictions: forecast.cycles.clone(),
            note: request.note.clone(),
        }
    }
}

/// Client posting JSON payloads to the clinic endpoint
#[derive(Debug, Clone, Default)]
pub struct ClinicClient {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl ClinicClient {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.filter(|e| !e.trim().is_empty()),
        }
    }

    /// Client configured from `CLINIC_ENDPOINT`
    pub fn from_env() -> Self {
        Self::new(std::env::var("CLINIC_ENDPOINT").ok())
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    /// POST a payload to the configured endpoint
    pub async fn submit<T: Serialize + ?Sized>(&self, payload: &T) -> Result<(), SubmissionError> {
        let endpoint = self.endpoint.as_deref().ok_or(SubmissionError::NotConfigured)?;
        self.submit_to(endpoint, payload).await
    }

    /// POST a payload to an explicit endpoint
    pub async fn submit_to<T: Serialize + ?Sized>(&self, endpoint: &str, payload: &T) -> Result<(), SubmissionError> {
        let response = self.client.post(endpoint).json(payload).send().await.map_err(|e| {
            error!("Clinic submission to {} failed: {}", endpoint, e);
            SubmissionError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("Clinic endpoint {} rejected submission with {}", endpoint, status);
            return Err(SubmissionError::Rejected(status.as_u16()));
        }

        info!("Submitted record to clinic endpoint {}", endpoint);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::common::Sex;
    use crate::entities::diet::{ActivityLevel, DiseasePreset, Region};
    use crate::services::cycle::predict_cycles;
    use crate::services::diet::DietCalculator;

    #[test]
    fn test_cycle_submission_payload_shape() {
        let request = CycleRequest {
            last_period: Some("2024-01-01".to_string()),
            cycle_length: 28,
            luteal_phase: 14,
            count: 3,
            note: "follow up".to_string(),
        };
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let forecast = predict_cycles(start, 28, 14, 3).unwrap();

        let value = serde_json::to_value(CycleSubmission::new(None, &request, &forecast)).unwrap();
        assert!(value["patientId"].is_null());
        assert_eq!(value["lastPeriod"], "2024-01-01");
        assert_eq!(value["cycleLength"], 28);
        assert_eq!(value["lutealPhase"], 14);
        assert_eq!(value["predictions"].as_array().unwrap().len(), 3);
        assert_eq!(value["predictions"][1]["periodStart"], "2024-01-29");
        assert_eq!(value["note"], "follow up");
    }

    #[test]
    fn test_diet_submission_payload_shape() {
        let patient = DietPatient {
            name: "Ravi".to_string(),
            age: 45,
            sex: Sex::Male,
            height_cm: 170.0,
            weight_kg: 70.0,
            activity: ActivityLevel::Moderate,
            disease: DiseasePreset::None,
            region: Region::South,
            vegetarian: true,
        };
        let plan = DietCalculator::default().compute_diet_plan(&patient, &[]);

        let value = serde_json::to_value(DietSubmission::new(patient, plan, Utc::now())).unwrap();
        assert_eq!(value["patient"]["name"], "Ravi");
        assert_eq!(value["computed"]["tdee"], 2391.0);
        assert!(value["computed"]["createdAt"].is_string());
        assert!(value["computed"]["macros"]["protein_g"].is_number());
    }

    #[tokio::test]
    async fn test_unconfigured_client_reports_notice() {
        let client = ClinicClient::new(Some("  ".to_string()));
        assert!(!client.is_configured());

        let result = client.submit(&serde_json::json!({})).await;
        assert!(matches!(result, Err(SubmissionError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let client = ClinicClient::new(Some("http://127.0.0.1:9/api/prescriptions".to_string()));
        let result = client.submit(&serde_json::json!({"patient": null})).await;
        assert!(matches!(result, Err(SubmissionError::Transport(_))));
    }
}
