// DoctorCal Domain
// This crate contains the clinical calculators and the wellness ROI logic

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Health checks and system status
pub mod health;

// CSV, HTML and JSON exports
pub mod export;

// Submission of computed results to a clinic endpoint
#[cfg(feature = "with-submit")]
pub mod submit;

// Re-export the database module from doctor_cal_data for convenience
pub use doctor_cal_data::database;

// Testing utilities - only available with mock feature
#[cfg(feature = "mock")]
pub mod testing;
