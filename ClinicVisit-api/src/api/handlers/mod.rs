pub mod health;
pub mod registers;
pub mod vitals;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use health::health_check;
pub use registers::{get_purpose, get_register_options, get_visible_tabs, validate_visit};
pub use vitals::{assess_vitals, get_age, get_reference_ranges};
