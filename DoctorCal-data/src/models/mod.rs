// Storage models for persisted record sets
pub mod wellness;

pub use wellness::{AbsenteeismRecord, ClaimsRecord, EmployeeRecord, RoleRecord};
