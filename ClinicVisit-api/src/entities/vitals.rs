use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use clinic_visit_domain::entities::{Meter, VitalMeasurement, VitalsAssessment, VitalsInput};
use clinic_visit_domain::reference::ReferenceRange;
use clinic_visit_domain::services::classification::format_bmi;

use crate::entities::common::form_value;

/// Vitals form as entered. Fields may be sent as text or numbers; anything
/// missing or unreadable simply gets no status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct VitalsRequest {
    /// Height in centimetres
    #[serde(default, deserialize_with = "form_value")]
    #[validate(length(max = 32, message = "Height is too long"))]
    pub height_cm: Option<String>,

    /// Weight in kilograms
    #[serde(default, deserialize_with = "form_value")]
    #[validate(length(max = 32, message = "Weight is too long"))]
    pub weight_kg: Option<String>,

    /// Systolic pressure in mmHg
    #[serde(default, deserialize_with = "form_value")]
    #[validate(length(max = 32, message = "Systolic is too long"))]
    pub systolic: Option<String>,

    /// Diastolic pressure in mmHg
    #[serde(default, deserialize_with = "form_value")]
    #[validate(length(max = 32, message = "Diastolic is too long"))]
    pub diastolic: Option<String>,

    /// Pulse per minute
    #[serde(default, deserialize_with = "form_value")]
    #[validate(length(max = 32, message = "Pulse is too long"))]
    pub pulse: Option<String>,

    /// Temperature in °F
    #[serde(default, deserialize_with = "form_value")]
    #[validate(length(max = 32, message = "Temperature is too long"))]
    pub temperature_f: Option<String>,

    /// Oxygen saturation in percent
    #[serde(default, deserialize_with = "form_value")]
    #[validate(length(max = 32, message = "SpO2 is too long"))]
    pub spo2: Option<String>,

    /// Breaths per minute
    #[serde(default, deserialize_with = "form_value")]
    #[validate(length(max = 32, message = "Respiratory rate is too long"))]
    pub respiratory_rate: Option<String>,
}

impl From<VitalsRequest> for VitalsInput {
    fn from(request: VitalsRequest) -> Self {
        VitalsInput {
            height_cm: request.height_cm,
            weight_kg: request.weight_kg,
            systolic: request.systolic,
            diastolic: request.diastolic,
            pulse: request.pulse,
            temperature_f: request.temperature_f,
            spo2: request.spo2,
            respiratory_rate: request.respiratory_rate,
        }
    }
}

/// Severity meter next to blood pressure and BMI
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MeterResponse {
    /// Colour: blue, green, yellow, orange, red or gray
    pub tone: String,
    /// Gauge fill, 0 to 100
    pub percent: u8,
}

impl From<Meter> for MeterResponse {
    fn from(meter: Meter) -> Self {
        let tone = serde_json::to_value(meter.tone)
            .ok()
            .and_then(|value| value.as_str().map(str::to_string))
            .unwrap_or_default();
        Self {
            tone,
            percent: meter.percent,
        }
    }
}

/// One classified measurement
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MeasurementResponse {
    /// Which vital this is
    pub kind: String,

    /// Field values used, as entered
    pub raw_inputs: Vec<String>,

    /// Parsed or derived value
    pub value: Option<f64>,

    /// Clinical status label, empty when there is none
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter: Option<MeterResponse>,
}

impl From<&VitalMeasurement> for MeasurementResponse {
    fn from(measurement: &VitalMeasurement) -> Self {
        Self {
            kind: measurement.kind.to_string(),
            raw_inputs: measurement.raw_inputs.clone(),
            value: measurement.computed_value,
            status: measurement.status_label().to_string(),
            meter: measurement.meter.map(MeterResponse::from),
        }
    }
}

/// Every vital classified in one response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VitalsAssessmentResponse {
    pub bmi: MeasurementResponse,

    /// BMI as shown on the form, one decimal place, empty when not computable
    pub bmi_display: String,

    pub blood_pressure: MeasurementResponse,
    pub pulse: MeasurementResponse,
    pub temperature: MeasurementResponse,
    pub spo2: MeasurementResponse,
    pub respiratory_rate: MeasurementResponse,

    /// Mean arterial pressure, present only when systolic exceeds diastolic
    pub mean_arterial_pressure: Option<f64>,
}

impl From<&VitalsAssessment> for VitalsAssessmentResponse {
    fn from(assessment: &VitalsAssessment) -> Self {
        Self {
            bmi: (&assessment.bmi).into(),
            bmi_display: assessment.bmi.computed_value.map(format_bmi).unwrap_or_default(),
            blood_pressure: (&assessment.blood_pressure).into(),
            pulse: (&assessment.pulse).into(),
            temperature: (&assessment.temperature).into(),
            spo2: (&assessment.spo2).into(),
            respiratory_rate: (&assessment.respiratory_rate).into(),
            mean_arterial_pressure: assessment.mean_arterial_pressure,
        }
    }
}

/// Query parameters for the age calculation
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct AgeQueryParams {
    /// Date of birth, DD-MM-YYYY or YYYY-MM-DD
    pub dob: String,

    /// Date to compute the age on, YYYY-MM-DD (default: today)
    pub as_of: Option<String>,
}

/// Age in whole years
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AgeResponse {
    pub dob: String,
    pub as_of: String,
    /// Missing when the date of birth is unreadable or after `as_of`
    pub age: Option<u32>,
}

/// Query parameters for the reference table
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ReferenceQueryParams {
    /// Vital: bmi, bp, pulse, temperature, spo2 or respiratory_rate
    pub kind: String,
}

/// One row of a reference table
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReferenceRow {
    pub range: String,
    pub classification: String,
}

impl From<&ReferenceRange> for ReferenceRow {
    fn from(row: &ReferenceRange) -> Self {
        Self {
            range: row.range.to_string(),
            classification: row.classification.to_string(),
        }
    }
}

/// Reference table shown to clinicians for a vital
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReferenceRangesResponse {
    pub kind: String,
    pub ranges: Vec<ReferenceRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_visit_domain::entities::Tone;

    #[test]
    fn test_meter_tone_is_lowercase() {
        let meter = MeterResponse::from(Meter::new(Tone::Orange, 75));
        assert_eq!(meter.tone, "orange");
        assert_eq!(meter.percent, 75);
    }

    #[test]
    fn test_vitals_request_accepts_numbers() {
        let request: VitalsRequest = serde_json::from_str(r#"{"systolic": 120, "diastolic": "80"}"#).unwrap();
        assert_eq!(request.systolic.as_deref(), Some("120"));
        assert_eq!(request.diastolic.as_deref(), Some("80"));
        assert_eq!(request.pulse, None);
        assert!(request.validate().is_ok());
    }
}
