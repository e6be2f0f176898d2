use axum::{
    extract::{Json, Query},
    response::{IntoResponse, Response},
};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use clinic_visit_domain::entities::{ParseValueError, PersonType, RegisterSelection, Role, VisitType};
use clinic_visit_domain::services::register_resolver::registers_for;
use clinic_visit_domain::services::{resolve_purpose, tabs_for_role, tabs_for_role_raw, validate_intake, IntakeError};

use crate::api::handlers::vitals::validation_error_response;
use crate::entities::common::ErrorResponse;
use crate::entities::registers::{
    convert_to_public_tabs, PurposeQueryParams, PurposeResponse, RegisterOption, RegisterOptionsResponse,
    RegisterQueryParams, TabsQueryParams, TabsResponse, VisitValidationRequest, VisitValidationResponse,
};

/// Role used when the caller does not name one
const DEFAULT_ROLE: Role = Role::Nurse;

fn bad_request(err: ParseValueError) -> Response {
    ErrorResponse::bad_request(&err.to_string()).into_response()
}

fn parse_types(person_type: &str, visit_type: &str) -> Result<(PersonType, VisitType), Response> {
    let person_type = person_type.parse::<PersonType>().map_err(bad_request)?;
    let visit_type = visit_type.parse::<VisitType>().map_err(bad_request)?;
    Ok((person_type, visit_type))
}

fn parse_role(role: Option<&str>) -> Result<Role, Response> {
    match role.map(str::trim).filter(|r| !r.is_empty()) {
        Some(role) => role.parse::<Role>().map_err(bad_request),
        None => Ok(DEFAULT_ROLE),
    }
}

/// Registers offered for a person type and visit type
#[utoipa::path(
    get,
    path = "/api/v1/registers",
    params(RegisterQueryParams),
    responses(
        (status = 200, description = "Registers in display order", body = RegisterOptionsResponse),
        (status = 400, description = "Unknown person or visit type", body = ErrorResponse),
    ),
    tag = "registers"
)]
#[instrument]
pub async fn get_register_options(Query(params): Query<RegisterQueryParams>) -> Result<impl IntoResponse, Response> {
    let (person_type, visit_type) = parse_types(&params.person_type, &params.visit_type)?;

    let registers: Vec<RegisterOption> = registers_for(person_type, visit_type)
        .iter()
        .map(|entry| RegisterOption {
            register: entry.register.to_string(),
            purpose: entry.purpose.to_string(),
        })
        .collect();
    debug!("Returning {} registers", registers.len());

    Ok(Json(RegisterOptionsResponse {
        person_type: person_type.to_string(),
        visit_type: visit_type.to_string(),
        registers,
    }))
}

/// Purpose for a register; empty when the register is not offered
#[utoipa::path(
    get,
    path = "/api/v1/registers/purpose",
    params(PurposeQueryParams),
    responses(
        (status = 200, description = "Resolved purpose", body = PurposeResponse),
        (status = 400, description = "Unknown person or visit type", body = ErrorResponse),
    ),
    tag = "registers"
)]
#[instrument]
pub async fn get_purpose(Query(params): Query<PurposeQueryParams>) -> Result<impl IntoResponse, Response> {
    let (person_type, visit_type) = parse_types(&params.person_type, &params.visit_type)?;
    let purpose = resolve_purpose(person_type, visit_type, &params.register);

    Ok(Json(PurposeResponse {
        person_type: person_type.to_string(),
        visit_type: visit_type.to_string(),
        register: params.register,
        purpose: purpose.to_string(),
    }))
}

/// Tabs of the new-visit form for a register, visit type, purpose and role
#[utoipa::path(
    get,
    path = "/api/v1/tabs",
    params(TabsQueryParams),
    responses(
        (status = 200, description = "Visible tabs in display order", body = TabsResponse),
        (status = 400, description = "Unknown role", body = ErrorResponse),
    ),
    tag = "registers"
)]
#[instrument]
pub async fn get_visible_tabs(Query(params): Query<TabsQueryParams>) -> Result<impl IntoResponse, Response> {
    let role = parse_role(params.role.as_deref())?;
    let tabs = tabs_for_role_raw(role, &params.register, &params.visit_type, &params.purpose);

    Ok(Json(TabsResponse {
        role: role.to_string(),
        tabs: convert_to_public_tabs(&tabs, role),
    }))
}

/// Validate an intake before it is submitted
#[utoipa::path(
    post,
    path = "/api/v1/visits/validate",
    request_body = VisitValidationRequest,
    responses(
        (status = 200, description = "Intake is complete", body = VisitValidationResponse),
        (status = 400, description = "Intake is incomplete or invalid", body = ErrorResponse),
    ),
    tag = "registers"
)]
#[instrument(skip(request))]
pub async fn validate_visit(Json(request): Json<VisitValidationRequest>) -> Result<impl IntoResponse, Response> {
    if let Err(errors) = request.validate() {
        warn!("Visit validation request is malformed: {}", errors);
        return Err(validation_error_response(errors));
    }

    let (person_type, visit_type) = parse_types(&request.person_type, &request.visit_type)?;
    let role = parse_role(request.role.as_deref())?;
    let selection = RegisterSelection::resolve(person_type, visit_type, request.register.trim());

    if let Err(err) = validate_intake(&selection, &request.extras()) {
        info!("Intake rejected: {}", err);
        let details = match &err {
            IntakeError::MissingDetails { fields, .. } => Some(serde_json::json!({ "missing": fields })),
            _ => None,
        };
        return Err(ErrorResponse::validation_error(&err.to_string(), details).into_response());
    }

    let tabs = tabs_for_role(role, &selection.register, visit_type, &selection.purpose);
    Ok(Json(VisitValidationResponse {
        person_type: person_type.to_string(),
        visit_type: visit_type.to_string(),
        tabs: convert_to_public_tabs(&tabs, role),
        register: selection.register,
        purpose: selection.purpose,
    }))
}
