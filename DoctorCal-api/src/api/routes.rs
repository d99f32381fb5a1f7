use axum::{
    extract::FromRef,
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::debug;

use doctor_cal_domain::health::HealthService as DomainHealthService;
use doctor_cal_domain::services::{create_default_wellness_service, DietCalculator, WellnessServiceError};
use doctor_cal_domain::submit::ClinicClient;

use crate::api::handlers::{
    ascvd, cycles, diet, diet::DietService, health, health::HealthService, scores, wellness,
    wellness::WellnessService, ClinicService,
};
use crate::openapi::configure_swagger_routes;

/// Shared services handed to the handlers
#[derive(Clone, FromRef)]
pub struct AppState {
    pub wellness: WellnessService,
    pub diet: DietService,
    pub clinic: ClinicService,
    #[from_ref(skip)]
    pub health: HealthService,
}

impl AppState {
    pub fn new(wellness: WellnessService, health: HealthService, diet: DietCalculator, clinic: ClinicClient) -> Self {
        Self {
            wellness,
            diet: Arc::new(diet),
            clinic: Arc::new(clinic),
            health,
        }
    }

    /// State with an in-memory wellness log and no clinic endpoint
    pub async fn in_memory() -> Result<Self, WellnessServiceError> {
        let wellness = create_default_wellness_service().await?;
        Ok(Self::new(
            Arc::new(wellness),
            Arc::new(DomainHealthService::new()),
            DietCalculator::default(),
            ClinicClient::new(None),
        ))
    }
}

/// Create the application router
pub fn create_app(state: AppState) -> Router {
    debug!("Creating application router");

    let calculator_routes = Router::new()
        .route("/ascvd", post(ascvd::calculate_ascvd))
        .route("/diabetes", post(scores::calculate_diabetes))
        .route("/cancer", post(scores::calculate_cancer))
        .route("/cycles", post(cycles::predict_cycles))
        .route("/cycles/record", post(cycles::cycle_record))
        .route("/cycles/submit", post(cycles::submit_cycles))
        .route("/diet", post(diet::compute_diet_plan))
        .route("/diet/foods", get(diet::list_foods))
        .route("/diet/export", post(diet::export_diet_plan))
        .route("/diet/submit", post(diet::submit_diet_plan));

    debug!("Calculator routes configured");

    let wellness_routes = Router::new()
        .route(
            "/wellness",
            get(wellness::get_wellness_log).delete(wellness::clear_wellness_log),
        )
        .route("/wellness/employees", post(wellness::add_employee))
        .route("/wellness/roles", post(wellness::add_role))
        .route("/wellness/metrics", post(wellness::add_metric))
        .route("/wellness/claims", post(wellness::add_claim))
        .route("/wellness/summary", get(wellness::get_wellness_summary))
        .route("/wellness/export.csv", get(wellness::export_wellness_csv));

    debug!("Wellness routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(state.health.clone()));

    let app = Router::new()
        .merge(public_routes)
        .nest("/api/v1", calculator_routes.merge(wellness_routes))
        .with_state(state);

    let app = add_swagger_ui(app).layer(TraceLayer::new_for_http());

    health::initialize_server_start_time();
    debug!("Application router ready");

    app
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    app.merge(configure_swagger_routes())
}
