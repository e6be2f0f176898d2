pub mod age;
pub mod classification;
pub mod input;
pub mod intake;
pub mod register_resolver;
pub mod tabs;

// Domain services
// Pure functions implementing the vitals and intake rules.

// Re-export the operations used by the API layer
pub use age::{age_from_dob, age_today, parse_date_of_birth};
pub use classification::{
    assess_vitals, bmi_status, bmi_value, bp_status, mean_arterial_pressure, pulse_status, reference_ranges,
    respiratory_rate_status, spo2_status, status_label, temperature_status,
};
pub use input::RawValue;
pub use intake::{validate_intake, IntakeError};
pub use register_resolver::{register_options, register_options_raw, resolve_purpose, resolve_purpose_raw};
pub use tabs::{tabs_for_role, tabs_for_role_raw, visible_tabs, visible_tabs_raw};
