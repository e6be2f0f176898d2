// ClinicVisit Data
// This crate holds the static reference tables used by the clinic visit engine

// Shapes of the reference tables
pub mod models;

// The tables themselves
pub mod tables;

pub use models::bands::{first_match, BpRule, Bound, Combine, Interval, Numeric, RangeBand, VitalScale};
pub use models::reference::ReferenceRange;
pub use models::registers::{RegisterEntry, RegisterTable};
