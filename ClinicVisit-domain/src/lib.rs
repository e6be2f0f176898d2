// ClinicVisit Domain
// This crate contains the vitals classification and visit intake logic

// Domain entities and value objects
pub mod entities;

// Services that implement the business rules
pub mod services;

// Health checks for the static reference data
pub mod health;

// Re-export the reference tables from clinic_visit_data for convenience
pub use clinic_visit_data as reference;
