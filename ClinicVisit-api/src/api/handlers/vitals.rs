use axum::{
    extract::{Json, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{Local, NaiveDate};
use tracing::{info, instrument, warn};
use validator::Validate;

use clinic_visit_domain::entities::{VitalKind, VitalsInput};
use clinic_visit_domain::services::{age_from_dob, assess_vitals as assess_domain_vitals, reference_ranges};

use crate::entities::common::ErrorResponse;
use crate::entities::vitals::{
    AgeQueryParams, AgeResponse, ReferenceQueryParams, ReferenceRangesResponse, ReferenceRow, VitalsAssessmentResponse,
    VitalsRequest,
};

/// Map validator errors to a public validation error
pub(crate) fn validation_error_response(errors: validator::ValidationErrors) -> Response {
    let details: serde_json::Map<String, serde_json::Value> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages: Vec<String> = errs
                .iter()
                .map(|err| match &err.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Invalid {}", field),
                })
                .collect();
            (field.to_string(), serde_json::json!(messages))
        })
        .collect();

    ErrorResponse::validation_error("Request validation failed", Some(serde_json::Value::Object(details)))
        .into_response()
}

/// Classify every vital on the form
#[utoipa::path(
    post,
    path = "/api/v1/vitals/assess",
    request_body = VitalsRequest,
    responses(
        (status = 200, description = "Vitals classified", body = VitalsAssessmentResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(request))]
pub async fn assess_vitals(Json(request): Json<VitalsRequest>) -> Result<impl IntoResponse, Response> {
    if let Err(errors) = request.validate() {
        warn!("Vitals request failed validation: {}", errors);
        return Err(validation_error_response(errors));
    }

    let input = VitalsInput::from(request);
    let assessment = assess_domain_vitals(&input);
    info!(
        bp = assessment.blood_pressure.status_label(),
        bmi = assessment.bmi.status_label(),
        "Vitals assessed"
    );

    Ok((StatusCode::OK, Json(VitalsAssessmentResponse::from(&assessment))))
}

/// Age in whole years from a date of birth
#[utoipa::path(
    get,
    path = "/api/v1/vitals/age",
    params(AgeQueryParams),
    responses(
        (status = 200, description = "Age computed; null when the date of birth is unreadable", body = AgeResponse),
        (status = 400, description = "Invalid as_of date", body = ErrorResponse),
    ),
    tag = "vitals"
)]
#[instrument]
pub async fn get_age(Query(params): Query<AgeQueryParams>) -> Result<impl IntoResponse, Response> {
    let as_of = match params.as_of.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| {
            ErrorResponse::bad_request(&format!("as_of must be a YYYY-MM-DD date, got '{}'", text)).into_response()
        })?,
        None => Local::now().date_naive(),
    };

    let age = age_from_dob(&params.dob, as_of);
    Ok(Json(AgeResponse {
        dob: params.dob,
        as_of: as_of.format("%Y-%m-%d").to_string(),
        age,
    }))
}

/// Reference ranges shown to clinicians for a vital
#[utoipa::path(
    get,
    path = "/api/v1/vitals/reference",
    params(ReferenceQueryParams),
    responses(
        (status = 200, description = "Reference table", body = ReferenceRangesResponse),
        (status = 400, description = "Unknown vital", body = ErrorResponse),
    ),
    tag = "vitals"
)]
#[instrument]
pub async fn get_reference_ranges(Query(params): Query<ReferenceQueryParams>) -> Result<impl IntoResponse, Response> {
    let kind: VitalKind = params
        .kind
        .parse()
        .map_err(|err: clinic_visit_domain::entities::ParseValueError| {
            ErrorResponse::bad_request(&err.to_string()).into_response()
        })?;

    Ok(Json(ReferenceRangesResponse {
        kind: kind.to_string(),
        ranges: reference_ranges(kind).iter().map(ReferenceRow::from).collect(),
    }))
}
