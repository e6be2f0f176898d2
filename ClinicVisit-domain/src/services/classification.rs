//! Vitals classification.
//!
//! Every function here is total: incomplete, non-numeric or out-of-range
//! input gives `None`, which the form shows as an empty status. Thresholds
//! live in `clinic_visit_data::tables::vitals`.

use tracing::debug;

use clinic_visit_data::tables::vitals::{
    BMI_SCALE, BP_DOMAIN, BP_FALLBACK, BP_LADDER, BP_REFERENCE, PULSE_SCALE, RESPIRATORY_RATE_SCALE,
    SPO2_SCALE, TEMPERATURE_SCALE,
};
use clinic_visit_data::{first_match, Numeric, ReferenceRange, VitalScale};

use crate::entities::vitals::{Meter, VitalKind, VitalMeasurement, VitalStatus, VitalsAssessment, VitalsInput};
use crate::services::input::RawValue;

/// Threshold scale for a single-valued vital. Blood pressure has its own ladder.
pub fn scale_for(kind: VitalKind) -> Option<&'static VitalScale> {
    match kind {
        VitalKind::BloodPressure => None,
        VitalKind::Pulse => Some(&PULSE_SCALE),
        VitalKind::Temperature => Some(&TEMPERATURE_SCALE),
        VitalKind::SpO2 => Some(&SPO2_SCALE),
        VitalKind::RespiratoryRate => Some(&RESPIRATORY_RATE_SCALE),
        VitalKind::Bmi => Some(&BMI_SCALE),
    }
}

/// Reference table shown to clinicians for a vital
pub fn reference_ranges(kind: VitalKind) -> &'static [ReferenceRange] {
    match scale_for(kind) {
        Some(scale) => scale.reference,
        None => &BP_REFERENCE,
    }
}

/// Read a raw value the way the scale expects, without checking its domain
pub fn read_reading(scale: &VitalScale, raw: RawValue<'_>) -> Option<f64> {
    match scale.numeric {
        Numeric::Integer => raw.as_integer(),
        Numeric::Decimal => raw.as_decimal(),
    }
}

/// Classify an already numeric reading against a scale
pub fn classify_value(scale: &VitalScale, value: f64) -> Option<VitalStatus> {
    if !value.is_finite() || !scale.domain.contains(value) {
        return None;
    }
    let label = match first_match(scale.bands, value) {
        Some(band) => band.label,
        None => scale.gap_label?,
    };
    let status = VitalStatus::from_label(label);
    if status.is_none() {
        debug!(scale = scale.name, label, "Band label has no matching status");
    }
    status
}

/// Classify a raw reading against a scale
pub fn classify_reading(scale: &VitalScale, raw: RawValue<'_>) -> Option<VitalStatus> {
    read_reading(scale, raw).and_then(|value| classify_value(scale, value))
}

/// Round to one decimal place, halves away from zero
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// BMI shown with one decimal, as on the form
pub fn format_bmi(bmi: f64) -> String {
    format!("{:.1}", bmi)
}

/// Body mass index from height in centimetres and weight in kilograms,
/// rounded to one decimal place
pub fn bmi_value<'h, 'w>(height_cm: impl Into<RawValue<'h>>, weight_kg: impl Into<RawValue<'w>>) -> Option<f64> {
    let height_cm = height_cm.into().as_decimal()?;
    let weight_kg = weight_kg.into().as_decimal()?;
    if height_cm <= 0.0 || weight_kg <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    let bmi = round_one_decimal(weight_kg / (height_m * height_m));
    bmi.is_finite().then_some(bmi)
}

pub fn bmi_status<'a>(bmi: impl Into<RawValue<'a>>) -> Option<VitalStatus> {
    classify_reading(&BMI_SCALE, bmi.into())
}

/// Read a systolic/diastolic pair, both positive whole numbers
fn read_bp_pair(systolic: RawValue<'_>, diastolic: RawValue<'_>) -> Option<(f64, f64)> {
    let sys = systolic.as_integer()?;
    let dia = diastolic.as_integer()?;
    (BP_DOMAIN.contains(sys) && BP_DOMAIN.contains(dia)).then_some((sys, dia))
}

/// Blood pressure stage. The ladder is evaluated top to bottom and the first
/// matching rule wins; a valid pair matching no rule is "Check Values".
pub fn bp_status<'s, 'd>(systolic: impl Into<RawValue<'s>>, diastolic: impl Into<RawValue<'d>>) -> Option<VitalStatus> {
    let (sys, dia) = read_bp_pair(systolic.into(), diastolic.into())?;
    let label = BP_LADDER
        .iter()
        .find(|rule| rule.matches(sys, dia))
        .map_or(BP_FALLBACK, |rule| rule.label);
    VitalStatus::from_label(label)
}

/// Mean arterial pressure, only when systolic exceeds diastolic
pub fn mean_arterial_pressure<'s, 'd>(
    systolic: impl Into<RawValue<'s>>,
    diastolic: impl Into<RawValue<'d>>,
) -> Option<f64> {
    let (sys, dia) = read_bp_pair(systolic.into(), diastolic.into())?;
    (sys > dia).then(|| dia + (sys - dia) / 3.0)
}

pub fn pulse_status<'a>(pulse: impl Into<RawValue<'a>>) -> Option<VitalStatus> {
    classify_reading(&PULSE_SCALE, pulse.into())
}

/// Temperature in °F. There is no lower limit on the reading.
pub fn temperature_status<'a>(temperature_f: impl Into<RawValue<'a>>) -> Option<VitalStatus> {
    classify_reading(&TEMPERATURE_SCALE, temperature_f.into())
}

pub fn spo2_status<'a>(spo2: impl Into<RawValue<'a>>) -> Option<VitalStatus> {
    classify_reading(&SPO2_SCALE, spo2.into())
}

pub fn respiratory_rate_status<'a>(rate: impl Into<RawValue<'a>>) -> Option<VitalStatus> {
    classify_reading(&RESPIRATORY_RATE_SCALE, rate.into())
}

/// Label for an optional status, empty when absent
pub fn status_label(status: Option<VitalStatus>) -> &'static str {
    status.map(VitalStatus::label).unwrap_or("")
}

fn single_measurement(kind: VitalKind, scale: &VitalScale, raw: &Option<String>) -> VitalMeasurement {
    let raw_value = RawValue::from(raw);
    let status = classify_reading(scale, raw_value);
    VitalMeasurement {
        kind,
        raw_inputs: vec![raw_value.to_string()],
        computed_value: read_reading(scale, raw_value),
        status,
        meter: Meter::for_measurement(kind, status),
    }
}

/// Classify every vital on the form in one pass
pub fn assess_vitals(input: &VitalsInput) -> VitalsAssessment {
    let height = RawValue::from(&input.height_cm);
    let weight = RawValue::from(&input.weight_kg);
    let bmi = bmi_value(height, weight);
    let weight_status = bmi.and_then(|value| bmi_status(value));

    let systolic = RawValue::from(&input.systolic);
    let diastolic = RawValue::from(&input.diastolic);
    let bp = bp_status(systolic, diastolic);
    let map = mean_arterial_pressure(systolic, diastolic);

    let assessment = VitalsAssessment {
        bmi: VitalMeasurement {
            kind: VitalKind::Bmi,
            raw_inputs: vec![height.to_string(), weight.to_string()],
            computed_value: bmi,
            status: weight_status,
            meter: Meter::for_measurement(VitalKind::Bmi, weight_status),
        },
        blood_pressure: VitalMeasurement {
            kind: VitalKind::BloodPressure,
            raw_inputs: vec![systolic.to_string(), diastolic.to_string()],
            computed_value: map,
            status: bp,
            meter: Meter::for_measurement(VitalKind::BloodPressure, bp),
        },
        pulse: single_measurement(VitalKind::Pulse, &PULSE_SCALE, &input.pulse),
        temperature: single_measurement(VitalKind::Temperature, &TEMPERATURE_SCALE, &input.temperature_f),
        spo2: single_measurement(VitalKind::SpO2, &SPO2_SCALE, &input.spo2),
        respiratory_rate: single_measurement(
            VitalKind::RespiratoryRate,
            &RESPIRATORY_RATE_SCALE,
            &input.respiratory_rate,
        ),
        mean_arterial_pressure: map,
    };

    debug!(
        bmi = status_label(assessment.bmi.status),
        bp = status_label(assessment.blood_pressure.status),
        pulse = status_label(assessment.pulse.status),
        "Assessed vitals"
    );
    assessment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_value() {
        assert_eq!(bmi_value(170, 70), Some(24.2));
        assert_eq!(bmi_value(160, 100), Some(39.1));
        assert_eq!(bmi_value("170", "70 kg"), Some(24.2));
        assert_eq!(bmi_value(0, 70), None);
        assert_eq!(bmi_value(170, -1), None);
        assert_eq!(bmi_value("", "70"), None);
        assert_eq!(bmi_value("abc", "70"), None);
    }

    #[test]
    fn test_bmi_value_rounds_to_one_decimal() {
        // 72 / 1.75² = 23.5102...
        assert_eq!(bmi_value(175, 72), Some(23.5));
        assert_eq!(format_bmi(23.5), "23.5");
        assert_eq!(format_bmi(24.0), "24.0");
    }

    #[test]
    fn test_bmi_value_monotone() {
        let mut previous = 0.0;
        for weight in (40..=150).step_by(5) {
            let bmi = bmi_value(170, weight).unwrap();
            assert!(bmi >= previous, "weight {}", weight);
            previous = bmi;
        }

        let mut previous = f64::MAX;
        for height in (140..=200).step_by(5) {
            let bmi = bmi_value(height, 70).unwrap();
            assert!(bmi <= previous, "height {}", height);
            previous = bmi;
        }
    }

    #[test]
    fn test_bmi_status() {
        assert_eq!(bmi_status(bmi_value(170, 70)), Some(VitalStatus::NormalWeight));
        assert_eq!(bmi_status(bmi_value(160, 100)), Some(VitalStatus::Obesity));
        assert_eq!(bmi_status(17.0), Some(VitalStatus::Underweight));
        assert_eq!(bmi_status("18.5"), Some(VitalStatus::NormalWeight));
        assert_eq!(bmi_status(27.3), Some(VitalStatus::Overweight));
        assert_eq!(bmi_status(40.0), Some(VitalStatus::SevereObesity));
        assert_eq!(bmi_status(0.0), None);
        assert_eq!(bmi_status(-3.0), None);
        assert_eq!(bmi_status("n/a"), None);
    }

    #[test]
    fn test_bmi_status_gap_between_bands_is_empty() {
        assert_eq!(bmi_status(24.95), None);
        assert_eq!(bmi_status(39.95), None);
    }

    #[test]
    fn test_bp_status_ladder() {
        assert_eq!(bp_status(200, 130), Some(VitalStatus::HypertensiveCrisis));
        assert_eq!(bp_status(185, 70), Some(VitalStatus::HypertensiveCrisis));
        assert_eq!(bp_status(165, 85), Some(VitalStatus::Stage2Hypertension));
        assert_eq!(bp_status(120, 100), Some(VitalStatus::Stage2Hypertension));
        assert_eq!(bp_status(145, 70), Some(VitalStatus::Stage1Hypertension));
        assert_eq!(bp_status(125, 75), Some(VitalStatus::HighNormal));
        assert_eq!(bp_status(110, 85), Some(VitalStatus::HighNormal));
        assert_eq!(bp_status(110, 70), Some(VitalStatus::Normal));
    }

    #[test]
    fn test_bp_status_precedence_is_literal() {
        // Normal is tested before Low BP, so any positive pair below 120/80
        // is staged Normal
        assert_eq!(bp_status(85, 55), Some(VitalStatus::Normal));
        // High systolic with low diastolic resolves on the systolic rule
        assert_eq!(bp_status(150, 50), Some(VitalStatus::Stage1Hypertension));
    }

    #[test]
    fn test_bp_status_invalid_input() {
        assert_eq!(bp_status(0, 80), None);
        assert_eq!(bp_status(120, -1), None);
        assert_eq!(bp_status("", "80"), None);
        assert_eq!(bp_status("abc", "80"), None);
        assert_eq!(bp_status("120.9", "79.9"), Some(VitalStatus::HighNormal));
    }

    #[test]
    fn test_bp_status_unreachable_rungs_stay_consistent() {
        // Low BP and the fallback are never produced for positive whole numbers
        for sys in 1..=250 {
            for dia in 1..=150 {
                let status = bp_status(sys, dia);
                assert!(status.is_some());
                assert_ne!(status, Some(VitalStatus::Hypotension));
                assert_ne!(status, Some(VitalStatus::CheckValues));
            }
        }
    }

    #[test]
    fn test_mean_arterial_pressure() {
        assert_eq!(mean_arterial_pressure(120, 80), Some(80.0 + 40.0 / 3.0));
        assert_eq!(mean_arterial_pressure(90, 60), Some(70.0));
        assert_eq!(mean_arterial_pressure(80, 80), None);
        assert_eq!(mean_arterial_pressure(70, 80), None);
        assert_eq!(mean_arterial_pressure(0, 80), None);
    }

    #[test]
    fn test_pulse_status() {
        assert_eq!(pulse_status(45), Some(VitalStatus::Bradycardia));
        assert_eq!(pulse_status(110), Some(VitalStatus::Tachycardia));
        assert_eq!(pulse_status(75), Some(VitalStatus::Normal));
        assert_eq!(pulse_status(60), Some(VitalStatus::Normal));
        assert_eq!(pulse_status(100), Some(VitalStatus::Normal));
        assert_eq!(pulse_status(-5), None);
        assert_eq!(pulse_status(0), None);
        assert_eq!(pulse_status("72 bpm"), Some(VitalStatus::Normal));
        assert_eq!(status_label(pulse_status(-5)), "");
    }

    #[test]
    fn test_temperature_status() {
        assert_eq!(temperature_status(98.6), Some(VitalStatus::Normal));
        assert_eq!(temperature_status(99.1), Some(VitalStatus::LowGradeFever));
        assert_eq!(temperature_status(100.4), Some(VitalStatus::LowGradeFever));
        assert_eq!(temperature_status(101.0), Some(VitalStatus::ModerateGradeFever));
        assert_eq!(temperature_status(103.0), Some(VitalStatus::HighGradeFever));
        assert_eq!(temperature_status(105.8), Some(VitalStatus::HighGradeFever));
        assert_eq!(temperature_status(106.0), Some(VitalStatus::Hyperthermic));
        assert_eq!(temperature_status("abc"), None);
    }

    #[test]
    fn test_temperature_between_bands() {
        assert_eq!(temperature_status(100.45), Some(VitalStatus::CheckValue));
        assert_eq!(temperature_status(102.25), Some(VitalStatus::CheckValue));
    }

    #[test]
    fn test_spo2_status() {
        assert_eq!(spo2_status(99), Some(VitalStatus::Normal));
        assert_eq!(spo2_status(100), Some(VitalStatus::Normal));
        assert_eq!(spo2_status(92), Some(VitalStatus::MildHypoxemia));
        assert_eq!(spo2_status(88), Some(VitalStatus::ModerateHypoxemia));
        assert_eq!(spo2_status(85), Some(VitalStatus::SevereHypoxemia));
        assert_eq!(spo2_status(0), Some(VitalStatus::SevereHypoxemia));
        assert_eq!(spo2_status(150), None);
        assert_eq!(spo2_status(-1), None);
        // Integer reading: 94.5 reads as 94
        assert_eq!(spo2_status("94.5"), Some(VitalStatus::MildHypoxemia));
    }

    #[test]
    fn test_respiratory_rate_status() {
        assert_eq!(respiratory_rate_status(8), Some(VitalStatus::Bradypnea));
        assert_eq!(respiratory_rate_status(16), Some(VitalStatus::Normal));
        assert_eq!(respiratory_rate_status(24), Some(VitalStatus::Tachypnea));
        assert_eq!(respiratory_rate_status(0), None);
        assert_eq!(respiratory_rate_status(""), None);
    }

    #[test]
    fn test_reference_ranges() {
        assert_eq!(reference_ranges(VitalKind::BloodPressure).len(), 6);
        assert_eq!(reference_ranges(VitalKind::Bmi)[0].classification, "Underweight");
        for kind in VitalKind::ALL {
            for row in reference_ranges(kind) {
                assert!(VitalStatus::from_label(row.classification).is_some(), "{}", row.classification);
            }
        }
    }

    #[test]
    fn test_assess_vitals() {
        let input = VitalsInput {
            height_cm: Some("170".to_string()),
            weight_kg: Some("70".to_string()),
            systolic: Some("120".to_string()),
            diastolic: Some("80".to_string()),
            pulse: Some("72".to_string()),
            temperature_f: Some("98.6".to_string()),
            spo2: Some("98".to_string()),
            respiratory_rate: None,
        };

        let assessment = assess_vitals(&input);
        assert_eq!(assessment.bmi.computed_value, Some(24.2));
        assert_eq!(assessment.bmi.status, Some(VitalStatus::NormalWeight));
        assert_eq!(assessment.bmi.raw_inputs, vec!["170", "70"]);
        assert_eq!(assessment.blood_pressure.status, Some(VitalStatus::HighNormal));
        assert!(assessment.blood_pressure.meter.is_some());
        assert_eq!(assessment.pulse.status, Some(VitalStatus::Normal));
        assert!(assessment.pulse.meter.is_none());
        assert_eq!(assessment.temperature.status, Some(VitalStatus::Normal));
        assert_eq!(assessment.spo2.status, Some(VitalStatus::Normal));
        assert_eq!(assessment.respiratory_rate.status, None);
        assert_eq!(assessment.respiratory_rate.raw_inputs, vec![""]);
        assert!(assessment.mean_arterial_pressure.is_some());
    }

    #[test]
    fn test_assess_vitals_empty_form() {
        let assessment = assess_vitals(&VitalsInput::default());
        for measurement in assessment.measurements() {
            assert_eq!(measurement.status, None);
            assert_eq!(measurement.status_label(), "");
        }
        assert_eq!(assessment.mean_arterial_pressure, None);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let input = VitalsInput {
            height_cm: Some("182".to_string()),
            weight_kg: Some("95.5".to_string()),
            systolic: Some("145".to_string()),
            diastolic: Some("92".to_string()),
            pulse: Some("101".to_string()),
            temperature_f: Some("100.45".to_string()),
            spo2: Some("90".to_string()),
            respiratory_rate: Some("21".to_string()),
        };
        assert_eq!(assess_vitals(&input), assess_vitals(&input));
        assert_eq!(bp_status(145, 92), bp_status(145, 92));
        assert_eq!(bmi_value(182, 95.5), bmi_value(182, 95.5));
    }
}
