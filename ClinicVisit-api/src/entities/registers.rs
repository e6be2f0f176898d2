use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use clinic_visit_domain::entities::{RegisterExtras, Role, TabVisibility};

/// Query parameters for the register list
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct RegisterQueryParams {
    /// Employee, Contractor or Visitor
    pub person_type: String,
    /// Preventive or Curative
    pub visit_type: String,
}

/// A register and the purpose it resolves to
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterOption {
    pub register: String,
    pub purpose: String,
}

/// Registers offered for a person and visit type, in display order
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterOptionsResponse {
    pub person_type: String,
    pub visit_type: String,
    pub registers: Vec<RegisterOption>,
}

/// Query parameters for purpose resolution
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PurposeQueryParams {
    pub person_type: String,
    pub visit_type: String,
    pub register: String,
}

/// Resolved purpose; empty when the register is not offered
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PurposeResponse {
    pub person_type: String,
    pub visit_type: String,
    pub register: String,
    pub purpose: String,
}

/// Query parameters for tab visibility
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct TabsQueryParams {
    pub register: String,
    /// Preventive or Curative; anything else hides type-specific tabs
    #[serde(default)]
    pub visit_type: String,
    #[serde(default)]
    pub purpose: String,
    /// nurse, doctor, hr, pharmacist or other (default: nurse)
    pub role: Option<String>,
}

/// A visible tab with its caption for the requesting role
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TabResponse {
    pub id: String,
    pub label: String,
}

/// Visible tabs in display order
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TabsResponse {
    pub role: String,
    pub tabs: Vec<TabResponse>,
}

/// Convert domain tabs to their public form for a role
pub fn convert_to_public_tabs(tabs: &TabVisibility, role: Role) -> Vec<TabResponse> {
    tabs.iter()
        .map(|tab| TabResponse {
            id: tab.id().to_string(),
            label: tab.label(role).to_string(),
        })
        .collect()
}

/// Intake submitted for validation
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct VisitValidationRequest {
    pub person_type: String,
    pub visit_type: String,

    #[serde(default)]
    #[validate(length(max = 200, message = "Register cannot exceed 200 characters"))]
    pub register: String,

    /// Examination year, annual and periodical registers
    #[validate(length(max = 10, message = "Year cannot exceed 10 characters"))]
    pub year: Option<String>,

    /// Batch, annual and periodical registers
    #[validate(length(max = 100, message = "Batch cannot exceed 100 characters"))]
    pub batch: Option<String>,

    /// Hospital, annual, periodical and camp registers
    #[validate(length(max = 200, message = "Hospital name cannot exceed 200 characters"))]
    pub hospital_name: Option<String>,

    /// Camp name, camp registers
    #[validate(length(max = 200, message = "Camp name cannot exceed 200 characters"))]
    pub camp_name: Option<String>,

    /// Role of the submitting user (default: nurse)
    pub role: Option<String>,
}

impl VisitValidationRequest {
    pub fn extras(&self) -> RegisterExtras {
        RegisterExtras {
            year: self.year.clone(),
            batch: self.batch.clone(),
            hospital_name: self.hospital_name.clone(),
            camp_name: self.camp_name.clone(),
        }
    }
}

/// Accepted intake with the derived purpose and the tabs to show next
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VisitValidationResponse {
    pub person_type: String,
    pub visit_type: String,
    pub register: String,
    pub purpose: String,
    pub tabs: Vec<TabResponse>,
}
