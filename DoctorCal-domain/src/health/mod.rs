//! Domain layer health check functionality
//! This module provides health check services for the application

use std::collections::HashMap;

use async_trait::async_trait;
use doctor_cal_data::database::{self, DatabasePool};
use tracing::warn;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced capability
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;

    /// Check the status of the database
    /// Returns Ok(true) if the database answers, Ok(false) when the wellness
    /// log is only held in memory, and an error if the database is unreachable
    async fn check_database_status(&self) -> Result<bool, String>;
}

/// Health service checking the database behind the wellness log
#[derive(Debug, Clone, Default)]
pub struct HealthService {
    pool: Option<DatabasePool>,
}

impl HealthService {
    /// Health service for a store without a database
    pub fn new() -> Self {
        Self::default()
    }

    /// Health service for a store persisting to the given pool
    pub fn with_pool(pool: DatabasePool) -> Self {
        Self { pool: Some(pool) }
    }
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let db_component = match self.check_database_status().await {
            Ok(true) => HealthComponent {
                status: ComponentStatus::Healthy,
                details: self.pool.as_ref().map(database::get_connection_info),
            },
            Ok(false) => HealthComponent {
                status: ComponentStatus::Degraded,
                details: Some("No database configured, wellness log is kept in memory".to_string()),
            },
            Err(e) => HealthComponent {
                status: ComponentStatus::Unhealthy,
                details: Some(e),
            },
        };

        let overall_status = match db_component.status {
            ComponentStatus::Unhealthy => SystemStatus::Unhealthy,
            ComponentStatus::Degraded => SystemStatus::Degraded,
            ComponentStatus::Healthy => SystemStatus::Healthy,
        };

        let calculators = HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        };

        SystemHealth {
            status: overall_status,
            components: vec![
                ("database".to_string(), db_component),
                ("calculators".to_string(), calculators),
            ]
            .into_iter()
            .collect(),
        }
    }

    async fn check_database_status(&self) -> Result<bool, String> {
        match &self.pool {
            Some(pool) => database::check_connection(pool).map(|_| true).map_err(|e| {
                warn!("Database health check failed: {}", e);
                format!("Database connection error: {}", e)
            }),
            None => Ok(false),
        }
    }
}
