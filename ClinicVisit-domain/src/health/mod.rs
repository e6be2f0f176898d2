//! Domain layer health check functionality
//! The engine has no external dependencies, so health means the static
//! reference tables are internally consistent.

use std::collections::{HashMap, HashSet};

use clinic_visit_data::tables::vitals::{ALL_SCALES, BP_FALLBACK, BP_LADDER, BP_REFERENCE};
use clinic_visit_data::{Bound, Interval};

use crate::entities::visit::{PersonType, VisitType};
use crate::entities::vitals::VitalStatus;
use crate::services::register_resolver::registers_for;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    pub status: ComponentStatus,
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

/// Trait for health services
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    fn get_system_health(&self) -> SystemHealth;

    /// Check the reference tables, listing every problem found
    fn check_reference_data(&self) -> Result<(), Vec<String>>;
}

/// Health service backed by the compiled-in reference tables
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceDataHealthService;

impl HealthServiceTrait for ReferenceDataHealthService {
    fn get_system_health(&self) -> SystemHealth {
        get_system_health()
    }

    fn check_reference_data(&self) -> Result<(), Vec<String>> {
        check_reference_data()
    }
}

/// Finite end of an interval and whether the limit itself is included
fn limit(bound: Bound) -> Option<(f64, bool)> {
    match bound {
        Bound::Unbounded => None,
        Bound::Inclusive(value) => Some((value, true)),
        Bound::Exclusive(value) => Some((value, false)),
    }
}

/// Whether some value lies in both intervals
fn overlaps(a: &Interval, b: &Interval) -> bool {
    let lower = match (limit(a.lower), limit(b.lower)) {
        (None, other) | (other, None) => other,
        (Some(x), Some(y)) if x.0 == y.0 => Some((x.0, x.1 && y.1)),
        (Some(x), Some(y)) => Some(if x.0 > y.0 { x } else { y }),
    };
    let upper = match (limit(a.upper), limit(b.upper)) {
        (None, other) | (other, None) => other,
        (Some(x), Some(y)) if x.0 == y.0 => Some((x.0, x.1 && y.1)),
        (Some(x), Some(y)) => Some(if x.0 < y.0 { x } else { y }),
    };
    match (lower, upper) {
        (Some((lo, lo_inc)), Some((hi, hi_inc))) => lo < hi || (lo == hi && lo_inc && hi_inc),
        _ => true,
    }
}

fn check_label(problems: &mut Vec<String>, owner: &str, label: &str) {
    if VitalStatus::from_label(label).is_none() {
        problems.push(format!("{}: unknown status label '{}'", owner, label));
    }
}

fn check_vital_tables(problems: &mut Vec<String>) {
    for scale in ALL_SCALES.iter() {
        for (i, band) in scale.bands.iter().enumerate() {
            check_label(problems, scale.name, band.label);
            for other in &scale.bands[i + 1..] {
                if overlaps(&band.interval, &other.interval) {
                    problems.push(format!(
                        "{}: bands '{}' and '{}' overlap",
                        scale.name, band.label, other.label
                    ));
                }
            }
        }
        if let Some(gap) = scale.gap_label {
            check_label(problems, scale.name, gap);
        }
        for row in scale.reference {
            check_label(problems, scale.name, row.classification);
        }
    }

    for rule in BP_LADDER.iter() {
        check_label(problems, "Blood Pressure", rule.label);
    }
    check_label(problems, "Blood Pressure", BP_FALLBACK);
    for row in BP_REFERENCE.iter() {
        check_label(problems, "Blood Pressure", row.classification);
    }
}

fn check_register_tables(problems: &mut Vec<String>) {
    for person_type in PersonType::ALL {
        for visit_type in VisitType::ALL {
            let mut seen = HashSet::new();
            for entry in registers_for(person_type, visit_type) {
                if entry.register.trim().is_empty() {
                    problems.push(format!("{} {}: empty register name", person_type, visit_type));
                }
                if entry.purpose.trim().is_empty() {
                    problems.push(format!(
                        "{} {}: register '{}' has no purpose",
                        person_type, visit_type, entry.register
                    ));
                }
                if !seen.insert(entry.register) {
                    problems.push(format!(
                        "{} {}: register '{}' listed twice",
                        person_type, visit_type, entry.register
                    ));
                }
            }
        }
    }
}

/// Verify the static reference tables
///
/// Returns:
/// - Ok(()) if every table is consistent
/// - Err with one message per problem otherwise
pub fn check_reference_data() -> Result<(), Vec<String>> {
    let mut problems = Vec::new();
    check_vital_tables(&mut problems);
    check_register_tables(&mut problems);
    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}

/// Get overall system health
pub fn get_system_health() -> SystemHealth {
    let reference_component = match check_reference_data() {
        Ok(()) => HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        },
        Err(problems) => HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some(problems.join("; ")),
        },
    };

    let overall_status = match reference_component.status {
        ComponentStatus::Healthy => SystemStatus::Healthy,
        ComponentStatus::Degraded => SystemStatus::Degraded,
        ComponentStatus::Unhealthy => SystemStatus::Unhealthy,
    };

    SystemHealth {
        status: overall_status,
        components: vec![("reference_data".to_string(), reference_component)]
            .into_iter()
            .collect(),
    }
}
