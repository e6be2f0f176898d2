use clinic_visit_data::tables::registers::{
    ALCOHOL_ABUSE, CAMPS_OPTIONAL, FITNESS_AFTER_MEDICAL_LEAVE, FOLLOWUP_VISITS, PERIODIC_WORK_FITNESS,
};

use crate::entities::visit::{Role, Tab, TabVisibility, VisitType};

/// Tab gate for a visit. `visit_type` is `None` when the form has no
/// recognised visit type yet; tabs gated on a specific type then stay hidden.
fn is_visible(tab: Tab, register: &str, visit_type: Option<VisitType>, purpose: &str) -> bool {
    let alcohol = register == ALCOHOL_ABUSE;
    let curative = visit_type == Some(VisitType::Curative);
    let preventive = visit_type == Some(VisitType::Preventive);

    match tab {
        Tab::BasicDetails | Tab::Vitals => true,
        Tab::MedicalHistory | Tab::Vaccination => !alcohol,
        Tab::Investigations => {
            !alcohol
                && purpose != PERIODIC_WORK_FITNESS
                && register != FITNESS_AFTER_MEDICAL_LEAVE
                && (register == FOLLOWUP_VISITS || !curative)
        }
        Tab::Fitness => !alcohol && preventive && register != CAMPS_OPTIONAL,
        Tab::Consultation | Tab::Prescription => !alcohol && curative,
    }
}

fn collect(register: &str, visit_type: Option<VisitType>, purpose: &str) -> TabVisibility {
    TabVisibility::from_tabs(
        Tab::ALL
            .into_iter()
            .filter(|tab| is_visible(*tab, register, visit_type, purpose)),
    )
}

/// Tabs of the new-visit form shown for a register, visit type and purpose
pub fn visible_tabs(register: &str, visit_type: VisitType, purpose: &str) -> TabVisibility {
    collect(register, Some(visit_type), purpose)
}

/// Like [`visible_tabs`] with the visit type as a plain form string
pub fn visible_tabs_raw(register: &str, visit_type: &str, purpose: &str) -> TabVisibility {
    collect(register, visit_type.parse().ok(), purpose)
}

/// Tabs a user may open. Only nurses and doctors run the new-visit workflow.
pub fn tabs_for_role(role: Role, register: &str, visit_type: VisitType, purpose: &str) -> TabVisibility {
    if role.is_clinical() {
        visible_tabs(register, visit_type, purpose)
    } else {
        TabVisibility::default()
    }
}

/// Like [`tabs_for_role`] with the visit type as a plain form string
pub fn tabs_for_role_raw(role: Role, register: &str, visit_type: &str, purpose: &str) -> TabVisibility {
    if role.is_clinical() {
        visible_tabs_raw(register, visit_type, purpose)
    } else {
        TabVisibility::default()
    }
}
