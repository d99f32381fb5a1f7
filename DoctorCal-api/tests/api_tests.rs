use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Once;
use tower::ServiceExt;

use doctor_cal_api::api::create_application;

// Ensure tracing is initialized only once
static INIT: Once = Once::new();

fn initialize() {
    INIT.call_once(|| {
        tracing_subscriber::fmt().with_test_writer().init();
    });
}

async fn app() -> Router {
    initialize();
    create_application().await.unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn read_body(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_memory_only_server_reports_degraded() {
    let response = app().await.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json: Value = serde_json::from_str(&read_body(response).await).unwrap();
    assert_eq!(json["components"]["database"]["status"], "degraded");
    assert_eq!(json["components"]["calculators"]["status"], "ok");
}

#[tokio::test]
async fn test_ascvd_black_male_branch() {
    let response = app()
        .await
        .oneshot(post_json(
            "/api/v1/ascvd",
            json!({
                "age": 55,
                "sex": "male",
                "race": "black",
                "total_cholesterol": 213.0,
                "hdl": 50.0,
                "systolic_bp": 120.0
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: Value = serde_json::from_str(&read_body(response).await).unwrap();
    assert_eq!(json["risk_percent"], 6.1);
    assert_eq!(json["category"], "Borderline");
}

#[tokio::test]
async fn test_diet_plan_reference_patient() {
    let response = app()
        .await
        .oneshot(post_json(
            "/api/v1/diet",
            json!({
                "patient": {
                    "age": 45,
                    "sex": "male",
                    "height_cm": 170.0,
                    "weight_kg": 70.0,
                    "activity": "moderate",
                    "disease": "none",
                    "region": "south"
                }
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: Value = serde_json::from_str(&read_body(response).await).unwrap();
    assert_eq!(json["bmr"], 1542.5);
    assert_eq!(json["tdee"], 2391.0);
    assert_eq!(json["plan"]["breakfast"]["name"], "Idli (2)");
    assert_eq!(json["plan"]["lunch"]["name"], "Ragi Dosa (2)");
}

#[tokio::test]
async fn test_wellness_log_round_trip_through_service() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/wellness/employees",
            json!({"name": "Asha", "dept": "ICU", "role_id": 1, "bmi": 24.5}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/wellness/employees",
            json!({"name": "Ghost", "role_id": 99}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get("/api/v1/wellness/export.csv")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let csv = read_body(response).await;
    assert!(csv.starts_with("Employees\nid,name,dept,roleId,bmi,hbA1c\n"));
    assert!(csv.contains(",Asha,ICU,1,24.5,"));
    assert!(csv.contains("2,Administrative,1500"));
}

#[tokio::test]
async fn test_cycle_record_missing_date() {
    let response = app()
        .await
        .oneshot(post_json("/api/v1/cycles/record", json!({"cycleLength": 28})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json: Value = serde_json::from_str(&read_body(response).await).unwrap();
    assert_eq!(json["message"], "Please enter the first day of your last period.");
}
