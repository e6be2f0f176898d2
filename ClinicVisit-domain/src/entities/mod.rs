// Domain entities and value objects
pub mod conversions;
pub mod visit;
pub mod vitals;

// Re-export common types for easier imports
pub use conversions::ParseValueError;
pub use visit::{PersonType, RegisterExtras, RegisterSelection, Role, Tab, TabVisibility, VisitType};
pub use vitals::{Meter, Tone, VitalKind, VitalMeasurement, VitalStatus, VitalsAssessment, VitalsInput};
