use std::collections::HashMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, error, info};
use uuid::Uuid;
use validator::Validate;

use crate::entities::conversions;
use crate::entities::wellness::{
    AbsenteeismMetric, ClaimsMetric, Employee, NewAbsenteeismMetric, NewClaimsMetric, NewEmployee, NewRole, Role,
    SeriesChange, Trend, WellnessLog, WellnessSummary,
};
use crate::export;
use crate::services::validation_message;
use doctor_cal_data::models::wellness::{CLAIMS_KEY, EMPLOYEES_KEY, METRICS_KEY, ROLES_KEY};
use doctor_cal_data::models::{AbsenteeismRecord, ClaimsRecord, EmployeeRecord, RoleRecord};
use doctor_cal_data::repository::{RecordStoreTrait, RepositoryError};

/// Wellness service errors
#[derive(Debug, Error)]
pub enum WellnessServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Roles seeded into an empty log
pub fn default_roles() -> Vec<Role> {
    vec![
        Role {
            id: 1,
            name: "Clinical".to_string(),
            avg_loss_per_day: 3000.0,
        },
        Role {
            id: 2,
            name: "Administrative".to_string(),
            avg_loss_per_day: 1500.0,
        },
    ]
}

/// Productivity loss per absent day averaged over the roster.
///
/// With no employees this is the plain mean over roles. Employees whose role
/// is unknown are left out of the average.
fn average_loss_per_day(employees: &[Employee], roles: &[Role]) -> f64 {
    if employees.is_empty() {
        if roles.is_empty() {
            return 0.0;
        }
        return roles.iter().map(|r| r.avg_loss_per_day).sum::<f64>() / roles.len() as f64;
    }

    let mut counts: HashMap<u64, usize> = HashMap::new();
    for employee in employees {
        *counts.entry(employee.role_id).or_insert(0) += 1;
    }

    let (total_loss, total_count) = roles.iter().fold((0.0, 0usize), |(loss, count), role| {
        let c = counts.get(&role.id).copied().unwrap_or(0);
        (loss + c as f64 * role.avg_loss_per_day, count + c)
    });

    if total_count == 0 {
        0.0
    } else {
        total_loss / total_count as f64
    }
}

/// Baseline (earliest) and latest value of a dated series
fn series_change<T>(records: &[T], date: impl Fn(&T) -> chrono::NaiveDate, value: impl Fn(&T) -> f64) -> SeriesChange {
    let mut sorted: Vec<&T> = records.iter().collect();
    sorted.sort_by_key(|record| date(*record));

    let baseline = sorted.first().map(|r| value(*r)).unwrap_or(0.0);
    let latest = sorted.last().map(|r| value(*r)).unwrap_or(0.0);
    let change = baseline - latest;

    SeriesChange {
        baseline,
        latest,
        change,
        trend: Trend::from_change(change),
    }
}

/// Compute the wellness programme ROI from the log contents
pub fn compute_wellness_summary(
    employees: &[Employee],
    roles: &[Role],
    metrics: &[AbsenteeismMetric],
    claims: &[ClaimsMetric],
) -> WellnessSummary {
    let avg_loss_per_day = average_loss_per_day(employees, roles);
    let absenteeism = series_change(metrics, |m| m.date, |m| m.absenteeism_days);
    let claims = series_change(claims, |c| c.date, |c| c.total_claims_cost);

    let savings_from_productivity = (absenteeism.change * avg_loss_per_day).round().max(0.0);
    let savings_from_claims = claims.change.round().max(0.0);

    WellnessSummary {
        total_employees: employees.len(),
        avg_loss_per_day,
        absenteeism,
        claims,
        savings_from_productivity,
        savings_from_claims,
        total_estimated_savings: savings_from_productivity + savings_from_claims,
    }
}

/// Trait for wellness log operations
#[async_trait]
pub trait WellnessServiceTrait {
    /// Seed the default roles when the role set is empty
    async fn initialize(&self) -> Result<(), WellnessServiceError>;

    /// Current contents of the log, newest records first
    async fn snapshot(&self) -> Result<WellnessLog, WellnessServiceError>;

    async fn add_employee(&self, request: NewEmployee) -> Result<Employee, WellnessServiceError>;

    async fn add_role(&self, request: NewRole) -> Result<Role, WellnessServiceError>;

    async fn add_metric(&self, request: NewAbsenteeismMetric) -> Result<AbsenteeismMetric, WellnessServiceError>;

    async fn add_claim(&self, request: NewClaimsMetric) -> Result<ClaimsMetric, WellnessServiceError>;

    /// Drop every record set
    async fn clear_all(&self) -> Result<(), WellnessServiceError>;

    async fn summary(&self) -> Result<WellnessSummary, WellnessServiceError>;

    /// Log contents as CSV
    async fn export_csv(&self) -> Result<String, WellnessServiceError>;
}

/// Wellness log service over an injected record store
pub struct WellnessService<R: RecordStoreTrait> {
    repository: R,
    /// Held across every load-append-save so concurrent appends never lose records
    write_lock: Mutex<()>,
}

impl<R: RecordStoreTrait + Send + Sync> WellnessService<R> {
    /// Create a new wellness service
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }

    /// Map repository errors to service errors
    fn map_repo_error(&self, err: RepositoryError) -> WellnessServiceError {
        match err {
            RepositoryError::Validation(msg) => WellnessServiceError::ValidationError(msg),
            _ => WellnessServiceError::RepositoryError(err.to_string()),
        }
    }

    fn validate<T: Validate>(&self, request: &T) -> Result<(), WellnessServiceError> {
        request
            .validate()
            .map_err(|errors| WellnessServiceError::ValidationError(validation_message(&errors)))
    }

    async fn load_records<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, WellnessServiceError> {
        let values = self.repository.load(key).await.map_err(|e| self.map_repo_error(e))?;
        values
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()
            .map_err(|e| {
                error!("Corrupt record set {}: {}", key, e);
                self.map_repo_error(RepositoryError::Serialization(e))
            })
    }

    async fn save_records<T: Serialize>(&self, key: &str, records: &[T]) -> Result<(), WellnessServiceError> {
        let values = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<Value>, _>>()
            .map_err(|e| self.map_repo_error(RepositoryError::Serialization(e)))?;

        self.repository
            .save(key, values)
            .await
            .map_err(|e| self.map_repo_error(e))
    }

    /// Load a set, put the record in front and save it back
    async fn prepend_record<T: Serialize + DeserializeOwned>(
        &self,
        key: &str,
        record: T,
    ) -> Result<(), WellnessServiceError> {
        let mut records: Vec<T> = self.load_records(key).await?;
        records.insert(0, record);
        self.save_records(key, &records).await
    }

    async fn load_roles(&self) -> Result<Vec<Role>, WellnessServiceError> {
        let records: Vec<RoleRecord> = self.load_records(ROLES_KEY).await?;
        Ok(records.into_iter().map(conversions::convert_to_domain_role).collect())
    }
}

#[async_trait]
impl<R: RecordStoreTrait + Send + Sync> WellnessServiceTrait for WellnessService<R> {
    async fn initialize(&self) -> Result<(), WellnessServiceError> {
        let _guard = self.write_lock.lock().await;

        if self.load_roles().await?.is_empty() {
            info!("Seeding default wellness roles");
            let records: Vec<RoleRecord> = default_roles().iter().map(conversions::convert_to_data_role).collect();
            self.save_records(ROLES_KEY, &records).await?;
        }

        Ok(())
    }

    async fn snapshot(&self) -> Result<WellnessLog, WellnessServiceError> {
        let employees: Vec<EmployeeRecord> = self.load_records(EMPLOYEES_KEY).await?;
        let metrics: Vec<AbsenteeismRecord> = self.load_records(METRICS_KEY).await?;
        let claims: Vec<ClaimsRecord> = self.load_records(CLAIMS_KEY).await?;

        Ok(WellnessLog {
            employees: employees.into_iter().map(conversions::convert_to_domain_employee).collect(),
            roles: self.load_roles().await?,
            metrics: metrics.into_iter().map(conversions::convert_to_domain_metric).collect(),
            claims: claims.into_iter().map(conversions::convert_to_domain_claim).collect(),
        })
    }

    async fn add_employee(&self, request: NewEmployee) -> Result<Employee, WellnessServiceError> {
        self.validate(&request)?;

        let _guard = self.write_lock.lock().await;

        let roles = self.load_roles().await?;
        if !roles.iter().any(|role| role.id == request.role_id) {
            return Err(WellnessServiceError::ValidationError(format!(
                "Unknown role id {}",
                request.role_id
            )));
        }

        let employee = Employee {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            dept: request.dept,
            role_id: request.role_id,
            bmi: request.bmi,
            hba1c: request.hba1c,
        };

        self.prepend_record(EMPLOYEES_KEY, conversions::convert_to_data_employee(&employee))
            .await?;
        debug!("Added employee {} with role {}", employee.id, employee.role_id);

        Ok(employee)
    }

    async fn add_role(&self, request: NewRole) -> Result<Role, WellnessServiceError> {
        self.validate(&request)?;

        let _guard = self.write_lock.lock().await;

        let next_id = self
            .load_roles()
            .await?
            .iter()
            .map(|role| role.id)
            .max()
            .unwrap_or(0)
            + 1;

        let role = Role {
            id: next_id,
            name: request.name,
            avg_loss_per_day: request.avg_loss_per_day,
        };

        self.prepend_record(ROLES_KEY, conversions::convert_to_data_role(&role))
            .await?;
        debug!("Added role {} ({})", role.id, role.name);

        Ok(role)
    }

    async fn add_metric(&self, request: NewAbsenteeismMetric) -> Result<AbsenteeismMetric, WellnessServiceError> {
        self.validate(&request)?;

        let metric = AbsenteeismMetric {
            id: Uuid::new_v4().to_string(),
            date: request.date,
            absenteeism_days: request.absenteeism_days,
        };

        let _guard = self.write_lock.lock().await;
        self.prepend_record(METRICS_KEY, conversions::convert_to_data_metric(&metric))
            .await?;
        debug!("Added absenteeism metric for {}", metric.date);

        Ok(metric)
    }

    async fn add_claim(&self, request: NewClaimsMetric) -> Result<ClaimsMetric, WellnessServiceError> {
        self.validate(&request)?;

        let claim = ClaimsMetric {
            id: Uuid::new_v4().to_string(),
            date: request.date,
            total_claims_cost: request.total_claims_cost,
        };

        let _guard = self.write_lock.lock().await;
        self.prepend_record(CLAIMS_KEY, conversions::convert_to_data_claim(&claim))
            .await?;
        debug!("Added claims entry for {}", claim.date);

        Ok(claim)
    }

    async fn clear_all(&self) -> Result<(), WellnessServiceError> {
        let _guard = self.write_lock.lock().await;
        self.repository.clear().await.map_err(|e| self.map_repo_error(e))?;
        info!("Cleared all wellness records");
        Ok(())
    }

    async fn summary(&self) -> Result<WellnessSummary, WellnessServiceError> {
        let log = self.snapshot().await?;
        Ok(compute_wellness_summary(&log.employees, &log.roles, &log.metrics, &log.claims))
    }

    async fn export_csv(&self) -> Result<String, WellnessServiceError> {
        let log = self.snapshot().await?;
        Ok(export::wellness_csv(&log))
    }
}

/// Create a wellness service over the given record store, seeding default roles
pub async fn create_wellness_service<R>(repository: R) -> Result<WellnessService<R>, WellnessServiceError>
where
    R: RecordStoreTrait + Send + Sync,
{
    let service = WellnessService::new(repository);
    service.initialize().await?;
    Ok(service)
}

/// Create a wellness service keeping its log in memory
pub async fn create_default_wellness_service() -> Result<impl WellnessServiceTrait + Send + Sync, WellnessServiceError>
{
    create_wellness_service(doctor_cal_data::repository::RecordStore::new()).await
}

/// Create a mock wellness service for testing
/// This function is only available when the mock feature is enabled
#[cfg(feature = "mock")]
pub fn create_mock_wellness_service() -> impl WellnessServiceTrait + Send + Sync {
    crate::testing::MockWellnessService::new()
}
