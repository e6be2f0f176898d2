//! Conversions between the plain strings used by forms and the
//! domain enums. Parsing ignores surrounding whitespace and case.

use std::str::FromStr;

use thiserror::Error;

use clinic_visit_data::RegisterEntry;

use crate::entities::visit::{PersonType, RegisterSelection, Role, Tab, VisitType};
use crate::entities::vitals::{VitalKind, VitalStatus};

/// Error raised when a form value does not name a known variant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind}: '{value}'")]
pub struct ParseValueError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseValueError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

impl FromStr for PersonType {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "employee" => Ok(PersonType::Employee),
            "contractor" => Ok(PersonType::Contractor),
            "visitor" => Ok(PersonType::Visitor),
            _ => Err(ParseValueError::new("person type", s)),
        }
    }
}

impl FromStr for VisitType {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "preventive" => Ok(VisitType::Preventive),
            "curative" => Ok(VisitType::Curative),
            _ => Err(ParseValueError::new("visit type", s)),
        }
    }
}

impl FromStr for Role {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "nurse" => Ok(Role::Nurse),
            "doctor" => Ok(Role::Doctor),
            "hr" => Ok(Role::Hr),
            "pharmacist" => Ok(Role::Pharmacist),
            "other" => Ok(Role::Other),
            _ => Err(ParseValueError::new("role", s)),
        }
    }
}

impl FromStr for Tab {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Tab::ALL
            .iter()
            .copied()
            .find(|tab| tab.id().to_ascii_lowercase() == wanted)
            .ok_or_else(|| ParseValueError::new("tab", s))
    }
}

impl FromStr for VitalKind {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = normalize(s).chars().filter(|c| c.is_ascii_alphanumeric()).collect();
        match compact.as_str() {
            "bloodpressure" | "bp" => Ok(VitalKind::BloodPressure),
            "pulse" => Ok(VitalKind::Pulse),
            "temperature" | "temp" => Ok(VitalKind::Temperature),
            "spo2" => Ok(VitalKind::SpO2),
            "respiratoryrate" | "rr" => Ok(VitalKind::RespiratoryRate),
            "bmi" => Ok(VitalKind::Bmi),
            _ => Err(ParseValueError::new("vital", s)),
        }
    }
}

impl FromStr for VitalStatus {
    type Err = ParseValueError;

    /// Labels are matched exactly; they are persisted as-is by the backend
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VitalStatus::from_label(s).ok_or_else(|| ParseValueError::new("vital status", s))
    }
}

/// Convert a register table row into the intake selection it describes
pub fn convert_to_domain_selection(
    person_type: PersonType,
    visit_type: VisitType,
    entry: &RegisterEntry,
) -> RegisterSelection {
    RegisterSelection {
        person_type,
        visit_type,
        register: entry.register.to_string(),
        purpose: entry.purpose.to_string(),
    }
}
