//! Register catalogue.
//!
//! Employees and contractors share the curative registers but each have
//! their own preventive list; visitors have their own short list.

use crate::models::registers::{RegisterEntry, RegisterTable};

// Purposes
pub const MEDICAL_EXAMINATION: &str = "Medical Examination";
pub const PERIODIC_WORK_FITNESS: &str = "Periodic Work Fitness";
pub const OUTPATIENT: &str = "Outpatient";

// Registers the form logic branches on
pub const ALCOHOL_ABUSE: &str = "Alcohol Abuse";
pub const FOLLOWUP_VISITS: &str = "Followup Visits";
pub const FITNESS_AFTER_MEDICAL_LEAVE: &str = "Fitness After Medical Leave";
pub const CAMPS_OPTIONAL: &str = "Camps (Optional)";
pub const CAMPS_PREFIX: &str = "Camps";
pub const ANNUAL_PERIODICAL: &str = "Annual / Periodical";
pub const PERIODICAL_FOOD_HANDLER: &str = "Periodical (Food Handler)";

static EMPLOYEE_PREVENTIVE: [RegisterEntry; 13] = [
    RegisterEntry::new("Pre employment", MEDICAL_EXAMINATION),
    RegisterEntry::new("Pre employment (Food Handler)", MEDICAL_EXAMINATION),
    RegisterEntry::new("Pre Placement", MEDICAL_EXAMINATION),
    RegisterEntry::new(ANNUAL_PERIODICAL, MEDICAL_EXAMINATION),
    RegisterEntry::new(PERIODICAL_FOOD_HANDLER, MEDICAL_EXAMINATION),
    RegisterEntry::new("Camps (Mandatory)", MEDICAL_EXAMINATION),
    RegisterEntry::new(CAMPS_OPTIONAL, MEDICAL_EXAMINATION),
    RegisterEntry::new("Special Work Fitness", PERIODIC_WORK_FITNESS),
    RegisterEntry::new("Special Work Fitness (Renewal)", PERIODIC_WORK_FITNESS),
    RegisterEntry::new(FITNESS_AFTER_MEDICAL_LEAVE, FITNESS_AFTER_MEDICAL_LEAVE),
    RegisterEntry::new("Fitness After Long Leave", "Fitness After Long Leave"),
    RegisterEntry::new("Mock Drill", "Mock Drill"),
    RegisterEntry::new("BP Sugar Check  ( Normal Value)", "BP Sugar Check  ( Normal Value)"),
];

static CONTRACTOR_PREVENTIVE: [RegisterEntry; 13] = [
    RegisterEntry::new("Pre employment", MEDICAL_EXAMINATION),
    RegisterEntry::new("Pre employment (Food Handler)", MEDICAL_EXAMINATION),
    RegisterEntry::new("Pre Placement", MEDICAL_EXAMINATION),
    RegisterEntry::new(ANNUAL_PERIODICAL, MEDICAL_EXAMINATION),
    RegisterEntry::new(PERIODICAL_FOOD_HANDLER, MEDICAL_EXAMINATION),
    RegisterEntry::new("Camps (Mandatory)", MEDICAL_EXAMINATION),
    RegisterEntry::new(CAMPS_OPTIONAL, MEDICAL_EXAMINATION),
    RegisterEntry::new("Special Work Fitness", PERIODIC_WORK_FITNESS),
    RegisterEntry::new("Special Work Fitness (Renewal)", PERIODIC_WORK_FITNESS),
    RegisterEntry::new(FITNESS_AFTER_MEDICAL_LEAVE, FITNESS_AFTER_MEDICAL_LEAVE),
    RegisterEntry::new("Fitness Long Medical Leave", "Fitness Long Medical Leave"),
    RegisterEntry::new("Mock Drill", "Mock Drill"),
    RegisterEntry::new("BP Sugar Check  ( Normal Value)", "BP Sugar Check  ( Normal Value)"),
];

static OCCUPATIONAL_CURATIVE: [RegisterEntry; 9] = [
    RegisterEntry::new("Illness", OUTPATIENT),
    RegisterEntry::new("Over Counter Illness", OUTPATIENT),
    RegisterEntry::new("Injury", OUTPATIENT),
    RegisterEntry::new("Over Counter Injury", OUTPATIENT),
    RegisterEntry::new(FOLLOWUP_VISITS, OUTPATIENT),
    RegisterEntry::new("BP Sugar ( Abnormal Value)", OUTPATIENT),
    RegisterEntry::new("Injury Outside the Premises", OUTPATIENT),
    RegisterEntry::new("Over Counter Injury Outside the Premises", OUTPATIENT),
    RegisterEntry::new(ALCOHOL_ABUSE, ALCOHOL_ABUSE),
];

static VISITOR_PREVENTIVE: [RegisterEntry; 1] = [RegisterEntry::new(
    "Visitors Outsider Fitness",
    "Visitors Outsider Fitness",
)];

static VISITOR_CURATIVE: [RegisterEntry; 1] = [RegisterEntry::new(
    "Visitors Outsider Patient",
    "Visitors Outsider Patient",
)];

/// Registers for employees
pub static EMPLOYEE_REGISTERS: RegisterTable = RegisterTable {
    preventive: &EMPLOYEE_PREVENTIVE,
    curative: &OCCUPATIONAL_CURATIVE,
};

/// Registers for contractors
pub static CONTRACTOR_REGISTERS: RegisterTable = RegisterTable {
    preventive: &CONTRACTOR_PREVENTIVE,
    curative: &OCCUPATIONAL_CURATIVE,
};

/// Registers for visitors
pub static VISITOR_REGISTERS: RegisterTable = RegisterTable {
    preventive: &VISITOR_PREVENTIVE,
    curative: &VISITOR_CURATIVE,
};

/// Purposes that only make sense on a curative visit
pub static CURATIVE_PURPOSES: [&str; 2] = [OUTPATIENT, ALCOHOL_ABUSE];
