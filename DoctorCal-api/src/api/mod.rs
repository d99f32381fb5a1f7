pub mod handlers;
pub mod routes;


use axum::Router;

pub use routes::{create_app, AppState};

/// Create the application router with in-memory services
pub async fn create_application() -> Result<Router, Box<dyn std::error::Error>> {
    let state = AppState::in_memory().await?;
    Ok(create_app(state))
}
