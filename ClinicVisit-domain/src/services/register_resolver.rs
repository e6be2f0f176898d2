//! Register and purpose lookup.
//!
//! Registers are offered per person type and visit type in a fixed order;
//! each resolves to exactly one purpose. Absent combinations resolve to an
//! empty purpose rather than an error.

use tracing::debug;

use clinic_visit_data::{RegisterEntry, RegisterTable};

use crate::entities::conversions::convert_to_domain_selection;
use crate::entities::visit::{PersonType, RegisterSelection, VisitType};

/// Register rows offered for a person type and visit type, in display order
pub fn registers_for(person_type: PersonType, visit_type: VisitType) -> &'static [RegisterEntry] {
    let table = person_type.register_table();
    match visit_type {
        VisitType::Preventive => table.preventive,
        VisitType::Curative => table.curative,
    }
}

/// Register names offered for a person type and visit type, in display order
pub fn register_options(person_type: PersonType, visit_type: VisitType) -> Vec<&'static str> {
    registers_for(person_type, visit_type)
        .iter()
        .map(|entry| entry.register)
        .collect()
}

/// Purpose for a register, empty when the register is not offered
pub fn resolve_purpose(person_type: PersonType, visit_type: VisitType, register: &str) -> &'static str {
    match RegisterTable::lookup(registers_for(person_type, visit_type), register) {
        Some(entry) => entry.purpose,
        None => {
            debug!(%person_type, %visit_type, register, "Register not offered");
            ""
        }
    }
}

/// Like [`register_options`] for plain form strings; unknown values give no options
pub fn register_options_raw(person_type: &str, visit_type: &str) -> Vec<&'static str> {
    match (person_type.parse(), visit_type.parse()) {
        (Ok(person_type), Ok(visit_type)) => register_options(person_type, visit_type),
        _ => {
            debug!(person_type, visit_type, "Unknown person or visit type");
            Vec::new()
        }
    }
}

/// Like [`resolve_purpose`] for plain form strings; unknown values give an empty purpose
pub fn resolve_purpose_raw(person_type: &str, visit_type: &str, register: &str) -> &'static str {
    match (person_type.parse(), visit_type.parse()) {
        (Ok(person_type), Ok(visit_type)) => resolve_purpose(person_type, visit_type, register),
        _ => {
            debug!(person_type, visit_type, "Unknown person or visit type");
            ""
        }
    }
}

impl RegisterSelection {
    /// Build a selection with its purpose looked up from the register catalogue
    pub fn resolve(person_type: PersonType, visit_type: VisitType, register: &str) -> Self {
        match RegisterTable::lookup(registers_for(person_type, visit_type), register) {
            Some(entry) => convert_to_domain_selection(person_type, visit_type, entry),
            None => Self {
                person_type,
                visit_type,
                register: register.to_string(),
                purpose: String::new(),
            },
        }
    }

    /// Whether the register is offered for this person and visit type
    pub fn is_offered(&self) -> bool {
        !self.purpose.is_empty()
    }
}
