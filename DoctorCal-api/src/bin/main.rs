use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use dotenv::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use doctor_cal_api::api::{create_app, AppState};
use doctor_cal_data::repository::RecordStore;
use doctor_cal_domain::database::{create_database_pool, DatabaseConfig};
use doctor_cal_domain::health::HealthService;
use doctor_cal_domain::services::{create_wellness_service, DietCalculator};
use doctor_cal_domain::submit::ClinicClient;

/// The main entry point for the DoctorCal API server
///
/// This function:
/// 1. Initializes environment variables from .env file
/// 2. Sets up tracing for logging
/// 3. Opens the wellness log database, falling back to memory
/// 4. Creates and starts the Axum web application
/// 5. Handles graceful shutdown
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if dotenv().is_err() {
        eprintln!("Warning: .env file not found or couldn't be read. Using environment variables.");
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_span_events(FmtSpan::CLOSE)
                .with_target(false)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stdout),
        )
        .with(env_filter)
        .init();

    info!("Starting DoctorCal API server");

    // DB_SQLITE_PATH defaults to a file under DATA_DIR
    if std::env::var("DB_SQLITE_PATH").is_err() {
        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
        let db_path = PathBuf::from(&data_dir).join("doctor_cal.db");
        std::env::set_var("DB_SQLITE_PATH", db_path.to_string_lossy().to_string());
        info!("Set DB_SQLITE_PATH to {}", db_path.display());
    }

    let config = DatabaseConfig::from_env()?;

    let (store, health) = match create_database_pool(&config) {
        Ok(pool) => {
            info!("Database pool initialized successfully");
            (RecordStore::with_pool(pool.clone()), HealthService::with_pool(pool))
        }
        Err(e) => {
            // Keep serving; the wellness log lives in memory until restart
            error!("Failed to initialize database pool: {}", e);
            (RecordStore::new(), HealthService::new())
        }
    };

    let wellness = create_wellness_service(store).await?;

    let clinic = ClinicClient::from_env();
    if !clinic.is_configured() {
        warn!("CLINIC_ENDPOINT not set, submissions will be reported as not saved");
    }

    let state = AppState::new(
        Arc::new(wellness),
        Arc::new(health),
        DietCalculator::default(),
        clinic,
    );
    let app = create_app(state);

    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for CTRL+C or SIGTERM (on Unix systems)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down server...");
}
