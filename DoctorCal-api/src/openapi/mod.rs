use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Calculator endpoints
        crate::api::handlers::ascvd::calculate_ascvd,
        crate::api::handlers::scores::calculate_diabetes,
        crate::api::handlers::scores::calculate_cancer,

        // Cycle endpoints
        crate::api::handlers::cycles::predict_cycles,
        crate::api::handlers::cycles::cycle_record,
        crate::api::handlers::cycles::submit_cycles,

        // Diet endpoints
        crate::api::handlers::diet::compute_diet_plan,
        crate::api::handlers::diet::list_foods,
        crate::api::handlers::diet::export_diet_plan,
        crate::api::handlers::diet::submit_diet_plan,

        // Wellness endpoints
        crate::api::handlers::wellness::get_wellness_log,
        crate::api::handlers::wellness::clear_wellness_log,
        crate::api::handlers::wellness::add_employee,
        crate::api::handlers::wellness::add_role,
        crate::api::handlers::wellness::add_metric,
        crate::api::handlers::wellness::add_claim,
        crate::api::handlers::wellness::get_wellness_summary,
        crate::api::handlers::wellness::export_wellness_csv
    ),
    components(
        schemas(
            // API entities
            crate::entities::ErrorResponse,
            crate::entities::SubmissionResponse,
            crate::entities::ascvd::AscvdRequest,
            crate::entities::cycle::CycleSubmitRequest,
            crate::entities::diet::DietRequest,
            crate::entities::diet::FoodQuery,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,

            // Calculator schemas
            doctor_cal_domain::entities::common::Sex,
            doctor_cal_domain::entities::ascvd::Race,
            doctor_cal_domain::entities::ascvd::AscvdResult,
            doctor_cal_domain::entities::ascvd::AscvdRiskCategory,
            doctor_cal_domain::entities::diabetes::DiabetesAnswers,
            doctor_cal_domain::entities::diabetes::AgeBracket,
            doctor_cal_domain::entities::diabetes::BmiBracket,
            doctor_cal_domain::entities::diabetes::WaistBracket,
            doctor_cal_domain::entities::diabetes::HealthyHabit,
            doctor_cal_domain::entities::diabetes::RiskFactor,
            doctor_cal_domain::entities::diabetes::FamilyHistory,
            doctor_cal_domain::entities::diabetes::DiabetesRiskBand,
            doctor_cal_domain::entities::diabetes::DiabetesScore,
            doctor_cal_domain::entities::cancer::CancerInput,
            doctor_cal_domain::entities::cancer::Tobacco,
            doctor_cal_domain::entities::cancer::Alcohol,
            doctor_cal_domain::entities::cancer::PhysicalActivity,
            doctor_cal_domain::entities::cancer::ProcessedDiet,
            doctor_cal_domain::entities::cancer::CancerRiskBand,
            doctor_cal_domain::entities::cancer::CancerScore,

            // Cycle schemas
            doctor_cal_domain::entities::cycle::CycleRequest,
            doctor_cal_domain::entities::cycle::CyclePrediction,
            doctor_cal_domain::entities::cycle::CycleForecast,

            // Diet schemas
            doctor_cal_domain::entities::diet::DietPatient,
            doctor_cal_domain::entities::diet::ActivityLevel,
            doctor_cal_domain::entities::diet::DiseasePreset,
            doctor_cal_domain::entities::diet::Region,
            doctor_cal_domain::entities::diet::FoodItem,
            doctor_cal_domain::entities::diet::MacroPreset,
            doctor_cal_domain::entities::diet::MacroTargets,
            doctor_cal_domain::entities::diet::MealPlan,
            doctor_cal_domain::entities::diet::DietPlan,

            // Wellness schemas
            doctor_cal_domain::entities::wellness::Employee,
            doctor_cal_domain::entities::wellness::Role,
            doctor_cal_domain::entities::wellness::AbsenteeismMetric,
            doctor_cal_domain::entities::wellness::ClaimsMetric,
            doctor_cal_domain::entities::wellness::NewEmployee,
            doctor_cal_domain::entities::wellness::NewRole,
            doctor_cal_domain::entities::wellness::NewAbsenteeismMetric,
            doctor_cal_domain::entities::wellness::NewClaimsMetric,
            doctor_cal_domain::entities::wellness::WellnessLog,
            doctor_cal_domain::entities::wellness::Trend,
            doctor_cal_domain::entities::wellness::SeriesChange,
            doctor_cal_domain::entities::wellness::WellnessSummary
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "calculators", description = "ASCVD, FINDRISC and cancer risk calculators"),
        (name = "cycles", description = "Menstrual cycle predictions and patient records"),
        (name = "diet", description = "Diet and macro prescriptions"),
        (name = "wellness", description = "Employee wellness ROI tracking")
    ),
    info(
        title = "DoctorCal API",
        version = "0.1.0",
        description = "Clinical calculators and wellness programme ROI",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
