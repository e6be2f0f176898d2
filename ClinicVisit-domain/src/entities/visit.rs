use std::fmt;

use serde::{Deserialize, Serialize};

use clinic_visit_data::tables::registers::{
    CONTRACTOR_REGISTERS, CURATIVE_PURPOSES, EMPLOYEE_REGISTERS, VISITOR_REGISTERS,
};
use clinic_visit_data::RegisterTable;

/// Who the visit is for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PersonType {
    Employee,
    Contractor,
    Visitor,
}

impl PersonType {
    pub const ALL: [PersonType; 3] = [PersonType::Employee, PersonType::Contractor, PersonType::Visitor];

    /// Register catalogue offered to this kind of person
    pub fn register_table(self) -> &'static RegisterTable {
        match self {
            PersonType::Employee => &EMPLOYEE_REGISTERS,
            PersonType::Contractor => &CONTRACTOR_REGISTERS,
            PersonType::Visitor => &VISITOR_REGISTERS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PersonType::Employee => "Employee",
            PersonType::Contractor => "Contractor",
            PersonType::Visitor => "Visitor",
        }
    }
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preventive (screening, fitness) or curative (treatment) visit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VisitType {
    Preventive,
    Curative,
}

impl VisitType {
    pub const ALL: [VisitType; 2] = [VisitType::Preventive, VisitType::Curative];

    /// Visit type implied when staff pick a purpose first.
    /// Outpatient and alcohol abuse visits are curative, everything else preventive.
    pub fn for_purpose(purpose: &str) -> VisitType {
        if CURATIVE_PURPOSES.contains(&purpose) {
            VisitType::Curative
        } else {
            VisitType::Preventive
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VisitType::Preventive => "Preventive",
            VisitType::Curative => "Curative",
        }
    }
}

impl fmt::Display for VisitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access level of the signed-in clinic user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Nurse,
    Doctor,
    Hr,
    Pharmacist,
    Other,
}

impl Role {
    /// Map a stored access level to a role. Unknown levels get no clinical rights.
    pub fn from_access_level(level: &str) -> Role {
        level.parse().unwrap_or(Role::Other)
    }

    /// Nurses and doctors run the new-visit workflow
    pub fn is_clinical(self) -> bool {
        matches!(self, Role::Nurse | Role::Doctor)
    }

    pub fn can_view_documents(self) -> bool {
        self.is_clinical()
    }

    pub fn can_delete_documents(self) -> bool {
        self == Role::Doctor
    }

    /// Only doctors sign off the overall fitness verdict and systematic examination
    pub fn can_record_fitness_verdict(self) -> bool {
        self == Role::Doctor
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Nurse => "nurse",
            Role::Doctor => "doctor",
            Role::Hr => "hr",
            Role::Pharmacist => "pharmacist",
            Role::Other => "other",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sections of the new-visit form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tab {
    BasicDetails,
    Vitals,
    MedicalHistory,
    Investigations,
    Vaccination,
    Fitness,
    Consultation,
    Prescription,
}

impl Tab {
    /// Tabs in the order the form shows them
    pub const ALL: [Tab; 8] = [
        Tab::BasicDetails,
        Tab::Vitals,
        Tab::MedicalHistory,
        Tab::Investigations,
        Tab::Vaccination,
        Tab::Fitness,
        Tab::Consultation,
        Tab::Prescription,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Tab::BasicDetails => "BasicDetails",
            Tab::Vitals => "Vitals",
            Tab::MedicalHistory => "MedicalHistory",
            Tab::Investigations => "Investigations",
            Tab::Vaccination => "Vaccination",
            Tab::Fitness => "Fitness",
            Tab::Consultation => "Consultation",
            Tab::Prescription => "Prescription",
        }
    }

    /// Caption shown on the tab; doctors see a shorter consultation caption
    pub fn label(self, role: Role) -> &'static str {
        match self {
            Tab::BasicDetails => "Basic Details",
            Tab::Vitals => "Vitals",
            Tab::MedicalHistory => "Medical/Surgical/Personal History",
            Tab::Investigations => "Investigations",
            Tab::Vaccination => "Vaccination",
            Tab::Fitness => "Fitness",
            Tab::Consultation if role == Role::Doctor => "Consultation",
            Tab::Consultation => "Consultation and Referral",
            Tab::Prescription => "Prescription",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Ordered set of visible tabs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct TabVisibility {
    tabs: Vec<Tab>,
}

impl TabVisibility {
    /// Build from any collection of tabs; order and duplicates are normalized
    pub fn from_tabs(tabs: impl IntoIterator<Item = Tab>) -> Self {
        let mut tabs: Vec<Tab> = tabs.into_iter().collect();
        tabs.sort();
        tabs.dedup();
        Self { tabs }
    }

    pub fn contains(&self, tab: Tab) -> bool {
        self.tabs.contains(&tab)
    }

    pub fn iter(&self) -> impl Iterator<Item = Tab> + '_ {
        self.tabs.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.iter().map(Tab::id).collect()
    }
}

/// The person/visit/register choice made at intake, with its resolved purpose
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterSelection {
    pub person_type: PersonType,
    pub visit_type: VisitType,
    pub register: String,
    /// Canonical purpose for the register, empty when the register is not offered
    pub purpose: String,
}

/// Register-specific details captured at intake
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterExtras {
    /// Examination year for annual/periodical registers
    pub year: Option<String>,

    /// Batch for annual/periodical registers
    pub batch: Option<String>,

    /// Hospital conducting the examination or camp
    pub hospital_name: Option<String>,

    /// Name of the camp for camp registers
    pub camp_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_type_for_purpose() {
        assert_eq!(VisitType::for_purpose("Outpatient"), VisitType::Curative);
        assert_eq!(VisitType::for_purpose("Alcohol Abuse"), VisitType::Curative);
        assert_eq!(VisitType::for_purpose("Medical Examination"), VisitType::Preventive);
        assert_eq!(VisitType::for_purpose(""), VisitType::Preventive);
    }

    #[test]
    fn test_role_permissions() {
        assert!(Role::Doctor.can_delete_documents());
        assert!(!Role::Nurse.can_delete_documents());
        assert!(Role::Nurse.can_view_documents());
        assert!(!Role::Pharmacist.can_view_documents());
        assert!(Role::Doctor.can_record_fitness_verdict());
        assert!(!Role::Nurse.can_record_fitness_verdict());
    }

    #[test]
    fn test_role_from_access_level_defaults_to_other() {
        assert_eq!(Role::from_access_level("doctor"), Role::Doctor);
        assert_eq!(Role::from_access_level("receptionist"), Role::Other);
    }

    #[test]
    fn test_consultation_label_depends_on_role() {
        assert_eq!(Tab::Consultation.label(Role::Doctor), "Consultation");
        assert_eq!(Tab::Consultation.label(Role::Nurse), "Consultation and Referral");
        assert_eq!(Tab::Vitals.label(Role::Doctor), "Vitals");
    }

    #[test]
    fn test_tab_visibility_normalizes_order() {
        let tabs = TabVisibility::from_tabs(vec![Tab::Prescription, Tab::BasicDetails, Tab::Vitals, Tab::Vitals]);
        assert_eq!(tabs.ids(), vec!["BasicDetails", "Vitals", "Prescription"]);
    }

    #[test]
    fn test_tab_visibility_serializes_as_list() {
        let tabs = TabVisibility::from_tabs(vec![Tab::BasicDetails, Tab::Vitals]);
        let json = serde_json::to_string(&tabs).unwrap();
        assert_eq!(json, r#"["BasicDetails","Vitals"]"#);
    }
}
