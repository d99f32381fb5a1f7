use doctor_cal_data::models::{AbsenteeismRecord, ClaimsRecord, EmployeeRecord, RoleRecord};

use crate::entities::wellness::{AbsenteeismMetric, ClaimsMetric, Employee, Role};

/// Conversion functions between domain entities and data models
/// These functions follow the pattern convert_to_[target_layer]_[model_name]

/// Convert from data model to domain entity for an employee
pub fn convert_to_domain_employee(record: EmployeeRecord) -> Employee {
    Employee {
        id: record.id,
        name: record.name,
        dept: record.dept,
        role_id: record.role_id,
        bmi: record.bmi,
        hba1c: record.hba1c,
    }
}

/// Convert from domain entity to data model for an employee
pub fn convert_to_data_employee(employee: &Employee) -> EmployeeRecord {
    EmployeeRecord {
        id: employee.id.clone(),
        name: employee.name.clone(),
        dept: employee.dept.clone(),
        role_id: employee.role_id,
        bmi: employee.bmi,
        hba1c: employee.hba1c,
    }
}

pub fn convert_to_domain_role(record: RoleRecord) -> Role {
    Role {
        id: record.id,
        name: record.name,
        avg_loss_per_day: record.avg_loss_per_day,
    }
}

pub fn convert_to_data_role(role: &Role) -> RoleRecord {
    RoleRecord {
        id: role.id,
        name: role.name.clone(),
        avg_loss_per_day: role.avg_loss_per_day,
    }
}

pub fn convert_to_domain_metric(record: AbsenteeismRecord) -> AbsenteeismMetric {
    AbsenteeismMetric {
        id: record.id,
        date: record.date,
        absenteeism_days: record.absenteeism_days,
    }
}

pub fn convert_to_data_metric(metric: &AbsenteeismMetric) -> AbsenteeismRecord {
    AbsenteeismRecord {
        id: metric.id.clone(),
        date: metric.date,
        absenteeism_days: metric.absenteeism_days,
    }
}

pub fn convert_to_domain_claim(record: ClaimsRecord) -> ClaimsMetric {
    ClaimsMetric {
        id: record.id,
        date: record.date,
        total_claims_cost: record.total_claims_cost,
    }
}

pub fn convert_to_data_claim(claim: &ClaimsMetric) -> ClaimsRecord {
    ClaimsRecord {
        id: claim.id.clone(),
        date: claim.date,
        total_claims_cost: claim.total_claims_cost,
    }
}
