// DoctorCal Data
// This crate handles persistence of the wellness log record sets

// Database connection management
pub mod database;

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
