// Public entities for the ClinicVisit API
// Request and response shapes exchanged with the clinic UI

// Vitals classification requests and responses
pub mod vitals;

// Register, purpose and tab lookups
pub mod registers;

// Common entities for error handling and form values
pub mod common;
