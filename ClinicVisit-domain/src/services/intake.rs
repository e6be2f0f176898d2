use thiserror::Error;
use tracing::debug;
use validator::{Validate, ValidationErrors};

use clinic_visit_data::tables::registers::{ANNUAL_PERIODICAL, CAMPS_PREFIX, PERIODICAL_FOOD_HANDLER};
use clinic_visit_data::RegisterTable;

use crate::entities::visit::{PersonType, RegisterExtras, RegisterSelection, VisitType};
use crate::services::register_resolver::registers_for;

/// Intake validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// No register was chosen
    #[error("Register is required")]
    MissingRegister,

    /// The register is not offered for this person and visit type
    #[error("Register '{register}' is not available for {person_type} {visit_type} visits")]
    UnknownRegister {
        register: String,
        person_type: PersonType,
        visit_type: VisitType,
    },

    /// Register-specific details were left empty
    #[error("Missing details for {register}: {}", .fields.join(", "))]
    MissingDetails { register: String, fields: Vec<String> },
}

/// Details needed by annual and periodical examinations
#[derive(Debug, Validate)]
struct PeriodicalDetails {
    #[validate(length(min = 1, message = "Year is required"))]
    year: String,

    #[validate(length(min = 1, message = "Batch is required"))]
    batch: String,

    #[validate(length(min = 1, message = "Hospital name is required"))]
    hospital_name: String,
}

/// Details needed by camp registers
#[derive(Debug, Validate)]
struct CampDetails {
    #[validate(length(min = 1, message = "Camp name is required"))]
    camp_name: String,

    #[validate(length(min = 1, message = "Hospital name is required"))]
    hospital_name: String,
}

fn filled(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}

/// Which extra details a register asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredDetails {
    None,
    Periodical,
    Camp,
}

impl RequiredDetails {
    pub fn for_register(register: &str) -> Self {
        if register == ANNUAL_PERIODICAL || register == PERIODICAL_FOOD_HANDLER {
            RequiredDetails::Periodical
        } else if register.starts_with(CAMPS_PREFIX) {
            RequiredDetails::Camp
        } else {
            RequiredDetails::None
        }
    }
}

fn check_details(required: RequiredDetails, extras: &RegisterExtras) -> Result<(), ValidationErrors> {
    match required {
        RequiredDetails::None => Ok(()),
        RequiredDetails::Periodical => PeriodicalDetails {
            year: filled(&extras.year),
            batch: filled(&extras.batch),
            hospital_name: filled(&extras.hospital_name),
        }
        .validate(),
        RequiredDetails::Camp => CampDetails {
            camp_name: filled(&extras.camp_name),
            hospital_name: filled(&extras.hospital_name),
        }
        .validate(),
    }
}

/// Check that a visit can be submitted: a register offered for the person
/// and visit type, plus whatever details that register asks for.
pub fn validate_intake(selection: &RegisterSelection, extras: &RegisterExtras) -> Result<(), IntakeError> {
    let register = selection.register.trim();
    if register.is_empty() {
        return Err(IntakeError::MissingRegister);
    }

    if RegisterTable::lookup(registers_for(selection.person_type, selection.visit_type), register).is_none() {
        debug!(register, person_type = %selection.person_type, visit_type = %selection.visit_type, "Register rejected");
        return Err(IntakeError::UnknownRegister {
            register: register.to_string(),
            person_type: selection.person_type,
            visit_type: selection.visit_type,
        });
    }

    if let Err(validation_errors) = check_details(RequiredDetails::for_register(register), extras) {
        let mut fields: Vec<String> = validation_errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        return Err(IntakeError::MissingDetails {
            register: register.to_string(),
            fields,
        });
    }

    Ok(())
}
