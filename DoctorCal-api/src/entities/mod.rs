// Public entities for the DoctorCal API
// This module contains data structures that are shared across the application boundary

// ASCVD request with its input checks
pub mod ascvd;

// Common entities for error handling and submission notices
pub mod common;

// Cycle and diet request wrappers
pub mod cycle;
pub mod diet;

pub use common::{ErrorResponse, SubmissionResponse};
