// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

// Re-export useful test mocks from the data layer
pub use doctor_cal_data::repository::tests::MockRecordStore;

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::entities::wellness::{
    AbsenteeismMetric, ClaimsMetric, Employee, NewAbsenteeismMetric, NewClaimsMetric, NewEmployee, NewRole, Role,
    WellnessLog, WellnessSummary,
};
use crate::export;
use crate::health::{ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth, SystemStatus};
use crate::services::wellness::{compute_wellness_summary, default_roles, WellnessServiceError, WellnessServiceTrait};

/// Mock implementation of the WellnessServiceTrait for testing
#[derive(Debug)]
pub struct MockWellnessService {
    log: RwLock<WellnessLog>,
    should_fail_validation: bool,
    should_fail_storage: bool,
}

impl Default for MockWellnessService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockWellnessService {
    /// Create a new mock wellness service holding the default roles
    pub fn new() -> Self {
        Self {
            log: RwLock::new(WellnessLog {
                roles: default_roles(),
                ..WellnessLog::default()
            }),
            should_fail_validation: false,
            should_fail_storage: false,
        }
    }

    /// Configure the mock to reject every add request
    pub fn with_validation_failure(mut self) -> Self {
        self.should_fail_validation = true;
        self
    }

    /// Configure the mock to fail every storage operation
    pub fn with_storage_failure(mut self) -> Self {
        self.should_fail_storage = true;
        self
    }

    /// Replace the mock's log contents
    pub fn with_log(self, log: WellnessLog) -> Self {
        if let Ok(mut current) = self.log.write() {
            *current = log;
        }
        self
    }

    fn check_storage(&self) -> Result<(), WellnessServiceError> {
        if self.should_fail_storage {
            Err(WellnessServiceError::RepositoryError(
                "Repository error - mock is configured to fail storage".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    fn check_add(&self) -> Result<(), WellnessServiceError> {
        if self.should_fail_validation {
            return Err(WellnessServiceError::ValidationError(
                "Validation failed - mock is configured to fail validation".to_string(),
            ));
        }
        self.check_storage()
    }

    fn read_log(&self) -> Result<WellnessLog, WellnessServiceError> {
        self.check_storage()?;
        self.log
            .read()
            .map(|log| log.clone())
            .map_err(|e| WellnessServiceError::RepositoryError(e.to_string()))
    }

    fn update_log<T>(&self, update: impl FnOnce(&mut WellnessLog) -> T) -> Result<T, WellnessServiceError> {
        let mut log = self
            .log
            .write()
            .map_err(|e| WellnessServiceError::RepositoryError(e.to_string()))?;
        Ok(update(&mut log))
    }
}

#[async_trait]
impl WellnessServiceTrait for MockWellnessService {
    async fn initialize(&self) -> Result<(), WellnessServiceError> {
        self.check_storage()?;
        self.update_log(|log| {
            if log.roles.is_empty() {
                log.roles = default_roles();
            }
        })
    }

    async fn snapshot(&self) -> Result<WellnessLog, WellnessServiceError> {
        self.read_log()
    }

    async fn add_employee(&self, request: NewEmployee) -> Result<Employee, WellnessServiceError> {
        self.check_add()?;
        let employee = Employee {
            id: uuid::Uuid::new_v4().to_string(),
            name: request.name,
            dept: request.dept,
            role_id: request.role_id,
            bmi: request.bmi,
            hba1c: request.hba1c,
        };
        let stored = employee.clone();
        self.update_log(move |log| log.employees.insert(0, stored))?;
        Ok(employee)
    }

    async fn add_role(&self, request: NewRole) -> Result<Role, WellnessServiceError> {
        self.check_add()?;
        self.update_log(|log| {
            let role = Role {
                id: log.roles.iter().map(|r| r.id).max().unwrap_or(0) + 1,
                name: request.name,
                avg_loss_per_day: request.avg_loss_per_day,
            };
            log.roles.insert(0, role.clone());
            role
        })
    }

    async fn add_metric(&self, request: NewAbsenteeismMetric) -> Result<AbsenteeismMetric, WellnessServiceError> {
        self.check_add()?;
        let metric = AbsenteeismMetric {
            id: uuid::Uuid::new_v4().to_string(),
            date: request.date,
            absenteeism_days: request.absenteeism_days,
        };
        let stored = metric.clone();
        self.update_log(move |log| log.metrics.insert(0, stored))?;
        Ok(metric)
    }

    async fn add_claim(&self, request: NewClaimsMetric) -> Result<ClaimsMetric, WellnessServiceError> {
        self.check_add()?;
        let claim = ClaimsMetric {
            id: uuid::Uuid::new_v4().to_string(),
            date: request.date,
            total_claims_cost: request.total_claims_cost,
        };
        let stored = claim.clone();
        self.update_log(move |log| log.claims.insert(0, stored))?;
        Ok(claim)
    }

    async fn clear_all(&self) -> Result<(), WellnessServiceError> {
        self.check_storage()?;
        self.update_log(|log| *log = WellnessLog::default())
    }

    async fn summary(&self) -> Result<WellnessSummary, WellnessServiceError> {
        let log = self.read_log()?;
        Ok(compute_wellness_summary(&log.employees, &log.roles, &log.metrics, &log.claims))
    }

    async fn export_csv(&self) -> Result<String, WellnessServiceError> {
        Ok(export::wellness_csv(&self.read_log()?))
    }
}

/// Mock implementation of health services for testing system health
#[derive(Debug)]
pub struct MockHealthService {
    /// Database component status
    database_status: ComponentStatus,
    /// System status
    system_status: SystemStatus,
    /// Additional components
    components: HashMap<String, HealthComponent>,
}

impl Default for MockHealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHealthService {
    /// Create a new mock health service with all components healthy
    pub fn new() -> Self {
        Self {
            database_status: ComponentStatus::Healthy,
            system_status: SystemStatus::Healthy,
            components: HashMap::new(),
        }
    }

    /// Configure the mock with a degraded database
    pub fn with_degraded_database(mut self) -> Self {
        self.database_status = ComponentStatus::Degraded;
        self
    }

    /// Configure the mock with an unhealthy database
    pub fn with_unhealthy_database(mut self) -> Self {
        self.database_status = ComponentStatus::Unhealthy;
        self
    }

    /// Set the overall system status
    pub fn with_system_status(mut self, status: SystemStatus) -> Self {
        self.system_status = status;
        self
    }

    /// Add a custom component with a specific status
    pub fn with_component(mut self, name: &str, status: ComponentStatus, details: Option<String>) -> Self {
        self.components
            .insert(name.to_string(), HealthComponent { status, details });
        self
    }
}

#[async_trait]
impl HealthServiceTrait for MockHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let mut components = HashMap::new();

        components.insert(
            "database".to_string(),
            HealthComponent {
                status: self.database_status.clone(),
                details: match self.database_status {
                    ComponentStatus::Healthy => None,
                    ComponentStatus::Degraded => Some("Wellness log is kept in memory".to_string()),
                    ComponentStatus::Unhealthy => Some("Database connection failed".to_string()),
                },
            },
        );

        components.insert(
            "calculators".to_string(),
            HealthComponent {
                status: ComponentStatus::Healthy,
                details: None,
            },
        );

        for (name, component) in &self.components {
            components.insert(name.clone(), component.clone());
        }

        SystemHealth {
            status: self.system_status.clone(),
            components,
        }
    }

    async fn check_database_status(&self) -> Result<bool, String> {
        match self.database_status {
            ComponentStatus::Healthy => Ok(true),
            ComponentStatus::Degraded => Ok(false),
            ComponentStatus::Unhealthy => Err("Database connection failed".to_string()),
        }
    }
}

/// Factory function to create a mock health service
pub fn create_mock_health_service() -> impl HealthServiceTrait {
    MockHealthService::new()
}
