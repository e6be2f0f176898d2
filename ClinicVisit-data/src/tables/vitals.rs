//! Threshold tables for vital sign classification.
//!
//! Every table is evaluated first-match-wins. Bounds are inclusive unless
//! written as `Exclusive`.

use crate::models::bands::{BpRule, Combine, Interval, Numeric, RangeBand, VitalScale};
use crate::models::reference::ReferenceRange;

use crate::models::bands::Bound::{Exclusive, Inclusive, Unbounded};

/// Label used when a valid blood pressure pair matches no rule
pub const BP_FALLBACK: &str = "Check Values";

/// Label used when a valid single reading falls between bands
pub const CHECK_VALUE: &str = "Check Value";

/// Systolic and diastolic readings must both be positive
pub const BP_DOMAIN: Interval = Interval::new(Exclusive(0.0), Unbounded);

/// Blood pressure staging ladder, evaluated top to bottom
pub static BP_LADDER: [BpRule; 6] = [
    BpRule::new(
        Interval::new(Exclusive(180.0), Unbounded),
        Interval::new(Exclusive(120.0), Unbounded),
        Combine::Either,
        "Hypertensive Urgency/Crisis",
    ),
    BpRule::new(
        Interval::new(Inclusive(160.0), Unbounded),
        Interval::new(Inclusive(100.0), Unbounded),
        Combine::Either,
        "Stage 2 Hypertension",
    ),
    BpRule::new(
        Interval::new(Inclusive(140.0), Inclusive(159.0)),
        Interval::new(Inclusive(90.0), Inclusive(99.0)),
        Combine::Either,
        "Stage 1 Hypertension",
    ),
    BpRule::new(
        Interval::new(Inclusive(120.0), Inclusive(139.0)),
        Interval::new(Inclusive(80.0), Inclusive(89.0)),
        Combine::Either,
        "High Normal (Prehypertension)",
    ),
    BpRule::new(
        Interval::new(Unbounded, Exclusive(120.0)),
        Interval::new(Unbounded, Exclusive(80.0)),
        Combine::Both,
        "Normal",
    ),
    BpRule::new(
        Interval::new(Unbounded, Exclusive(90.0)),
        Interval::new(Unbounded, Exclusive(60.0)),
        Combine::Either,
        "Low BP (Hypotension)",
    ),
];

pub static BP_REFERENCE: [ReferenceRange; 6] = [
    ReferenceRange::new("< 90 / < 60", "Low BP (Hypotension)"),
    ReferenceRange::new("< 120 / < 80", "Normal"),
    ReferenceRange::new("120-139 / 80-89", "High Normal (Prehypertension)"),
    ReferenceRange::new("140-159 / 90-99", "Stage 1 Hypertension"),
    ReferenceRange::new("≥ 160 / ≥ 100", "Stage 2 Hypertension"),
    ReferenceRange::new("> 180 / > 120", "Hypertensive Urgency/Crisis"),
];

static BMI_BANDS: [RangeBand; 5] = [
    RangeBand::new(Unbounded, Exclusive(18.5), "Underweight"),
    RangeBand::new(Inclusive(18.5), Inclusive(24.9), "Normal weight"),
    RangeBand::new(Inclusive(25.0), Inclusive(29.9), "Overweight"),
    RangeBand::new(Inclusive(30.0), Inclusive(39.9), "Obesity"),
    RangeBand::new(Inclusive(40.0), Unbounded, "Severe Obesity"),
];

static BMI_REFERENCE: [ReferenceRange; 5] = [
    ReferenceRange::new("< 18.5", "Underweight"),
    ReferenceRange::new("18.5 – 24.9", "Normal weight"),
    ReferenceRange::new("25.0 – 29.9", "Overweight"),
    ReferenceRange::new("30.0 – 39.9", "Obesity"),
    ReferenceRange::new("≥ 40.0", "Severe Obesity"),
];

/// Body mass index in kg/m²
pub static BMI_SCALE: VitalScale = VitalScale {
    name: "BMI",
    unit: "kg/m²",
    numeric: Numeric::Decimal,
    domain: Interval::new(Exclusive(0.0), Unbounded),
    bands: &BMI_BANDS,
    gap_label: None,
    reference: &BMI_REFERENCE,
};

static PULSE_BANDS: [RangeBand; 3] = [
    RangeBand::new(Unbounded, Exclusive(60.0), "Bradycardia"),
    RangeBand::new(Exclusive(100.0), Unbounded, "Tachycardia"),
    RangeBand::new(Inclusive(60.0), Inclusive(100.0), "Normal"),
];

static PULSE_REFERENCE: [ReferenceRange; 3] = [
    ReferenceRange::new("60 - 100 bpm", "Normal"),
    ReferenceRange::new("< 60 bpm", "Bradycardia"),
    ReferenceRange::new("> 100 bpm", "Tachycardia"),
];

/// Pulse in beats per minute
pub static PULSE_SCALE: VitalScale = VitalScale {
    name: "Pulse",
    unit: "/min",
    numeric: Numeric::Integer,
    domain: Interval::new(Exclusive(0.0), Unbounded),
    bands: &PULSE_BANDS,
    gap_label: Some(CHECK_VALUE),
    reference: &PULSE_REFERENCE,
};

static TEMPERATURE_BANDS: [RangeBand; 5] = [
    RangeBand::new(Unbounded, Exclusive(99.1), "Normal"),
    RangeBand::new(Inclusive(99.1), Inclusive(100.4), "Low Grade Fever"),
    RangeBand::new(Inclusive(100.5), Inclusive(102.2), "Moderate Grade Fever"),
    RangeBand::new(Inclusive(102.3), Inclusive(105.8), "High Grade Fever"),
    RangeBand::new(Exclusive(105.8), Unbounded, "Hyperthermic"),
];

static TEMPERATURE_REFERENCE: [ReferenceRange; 5] = [
    ReferenceRange::new("< 99.1°F", "Normal"),
    ReferenceRange::new("99.1°F - 100.4°F", "Low Grade Fever"),
    ReferenceRange::new("100.5°F - 102.2°F", "Moderate Grade Fever"),
    ReferenceRange::new("102.3°F - 105.8°F", "High Grade Fever"),
    ReferenceRange::new("> 105.8°F", "Hyperthermic"),
];

/// Body temperature in degrees Fahrenheit
pub static TEMPERATURE_SCALE: VitalScale = VitalScale {
    name: "Temperature",
    unit: "°F",
    numeric: Numeric::Decimal,
    domain: Interval::any(),
    bands: &TEMPERATURE_BANDS,
    gap_label: Some(CHECK_VALUE),
    reference: &TEMPERATURE_REFERENCE,
};

static SPO2_BANDS: [RangeBand; 4] = [
    RangeBand::new(Unbounded, Exclusive(86.0), "Severe Hypoxemia"),
    RangeBand::new(Inclusive(86.0), Inclusive(90.0), "Moderate Hypoxemia"),
    RangeBand::new(Inclusive(91.0), Inclusive(94.0), "Mild Hypoxemia"),
    RangeBand::new(Inclusive(95.0), Inclusive(100.0), "Normal"),
];

static SPO2_REFERENCE: [ReferenceRange; 4] = [
    ReferenceRange::new("95% - 100%", "Normal"),
    ReferenceRange::new("91% - 94%", "Mild Hypoxemia"),
    ReferenceRange::new("86% - 90%", "Moderate Hypoxemia"),
    ReferenceRange::new("< 86%", "Severe Hypoxemia"),
];

/// Oxygen saturation in percent
pub static SPO2_SCALE: VitalScale = VitalScale {
    name: "SpO₂",
    unit: "%",
    numeric: Numeric::Integer,
    domain: Interval::new(Inclusive(0.0), Inclusive(100.0)),
    bands: &SPO2_BANDS,
    gap_label: Some(CHECK_VALUE),
    reference: &SPO2_REFERENCE,
};

static RESPIRATORY_RATE_BANDS: [RangeBand; 3] = [
    RangeBand::new(Unbounded, Exclusive(12.0), "Bradypnea"),
    RangeBand::new(Exclusive(20.0), Unbounded, "Tachypnea"),
    RangeBand::new(Inclusive(12.0), Inclusive(20.0), "Normal"),
];

static RESPIRATORY_RATE_REFERENCE: [ReferenceRange; 3] = [
    ReferenceRange::new("12 - 20 breaths/min", "Normal"),
    ReferenceRange::new("< 12 breaths/min", "Bradypnea"),
    ReferenceRange::new("> 20 breaths/min", "Tachypnea"),
];

/// Respiratory rate in breaths per minute
pub static RESPIRATORY_RATE_SCALE: VitalScale = VitalScale {
    name: "Respiratory Rate",
    unit: "/min",
    numeric: Numeric::Integer,
    domain: Interval::new(Exclusive(0.0), Unbounded),
    bands: &RESPIRATORY_RATE_BANDS,
    gap_label: Some(CHECK_VALUE),
    reference: &RESPIRATORY_RATE_REFERENCE,
};

/// All single-valued scales, for integrity checks
pub static ALL_SCALES: [&VitalScale; 5] = [
    &BMI_SCALE,
    &PULSE_SCALE,
    &TEMPERATURE_SCALE,
    &SPO2_SCALE,
    &RESPIRATORY_RATE_SCALE,
];
