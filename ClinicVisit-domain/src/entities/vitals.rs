use std::fmt;

use serde::{Deserialize, Serialize};

/// The measurements taken on the vitals form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VitalKind {
    BloodPressure,
    Pulse,
    Temperature,
    SpO2,
    RespiratoryRate,
    Bmi,
}

impl VitalKind {
    pub const ALL: [VitalKind; 6] = [
        VitalKind::BloodPressure,
        VitalKind::Pulse,
        VitalKind::Temperature,
        VitalKind::SpO2,
        VitalKind::RespiratoryRate,
        VitalKind::Bmi,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VitalKind::BloodPressure => "BloodPressure",
            VitalKind::Pulse => "Pulse",
            VitalKind::Temperature => "Temperature",
            VitalKind::SpO2 => "SpO2",
            VitalKind::RespiratoryRate => "RespiratoryRate",
            VitalKind::Bmi => "Bmi",
        }
    }
}

impl fmt::Display for VitalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every status label the classification engine can emit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VitalStatus {
    // BMI
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    Overweight,
    Obesity,
    #[serde(rename = "Severe Obesity")]
    SevereObesity,

    // Blood pressure
    #[serde(rename = "Hypertensive Urgency/Crisis")]
    HypertensiveCrisis,
    #[serde(rename = "Stage 2 Hypertension")]
    Stage2Hypertension,
    #[serde(rename = "Stage 1 Hypertension")]
    Stage1Hypertension,
    #[serde(rename = "High Normal (Prehypertension)")]
    HighNormal,
    Normal,
    #[serde(rename = "Low BP (Hypotension)")]
    Hypotension,
    #[serde(rename = "Check Values")]
    CheckValues,

    // Pulse
    Bradycardia,
    Tachycardia,

    // Temperature
    #[serde(rename = "Low Grade Fever")]
    LowGradeFever,
    #[serde(rename = "Moderate Grade Fever")]
    ModerateGradeFever,
    #[serde(rename = "High Grade Fever")]
    HighGradeFever,
    Hyperthermic,

    // SpO2
    #[serde(rename = "Severe Hypoxemia")]
    SevereHypoxemia,
    #[serde(rename = "Moderate Hypoxemia")]
    ModerateHypoxemia,
    #[serde(rename = "Mild Hypoxemia")]
    MildHypoxemia,

    // Respiratory rate
    Bradypnea,
    Tachypnea,

    // A valid reading that falls between two bands
    #[serde(rename = "Check Value")]
    CheckValue,
}

impl VitalStatus {
    pub const ALL: [VitalStatus; 24] = [
        VitalStatus::Underweight,
        VitalStatus::NormalWeight,
        VitalStatus::Overweight,
        VitalStatus::Obesity,
        VitalStatus::SevereObesity,
        VitalStatus::HypertensiveCrisis,
        VitalStatus::Stage2Hypertension,
        VitalStatus::Stage1Hypertension,
        VitalStatus::HighNormal,
        VitalStatus::Normal,
        VitalStatus::Hypotension,
        VitalStatus::CheckValues,
        VitalStatus::Bradycardia,
        VitalStatus::Tachycardia,
        VitalStatus::LowGradeFever,
        VitalStatus::ModerateGradeFever,
        VitalStatus::HighGradeFever,
        VitalStatus::Hyperthermic,
        VitalStatus::SevereHypoxemia,
        VitalStatus::ModerateHypoxemia,
        VitalStatus::MildHypoxemia,
        VitalStatus::Bradypnea,
        VitalStatus::Tachypnea,
        VitalStatus::CheckValue,
    ];

    /// Clinical label exactly as shown on the form
    pub fn label(self) -> &'static str {
        match self {
            VitalStatus::Underweight => "Underweight",
            VitalStatus::NormalWeight => "Normal weight",
            VitalStatus::Overweight => "Overweight",
            VitalStatus::Obesity => "Obesity",
            VitalStatus::SevereObesity => "Severe Obesity",
            VitalStatus::HypertensiveCrisis => "Hypertensive Urgency/Crisis",
            VitalStatus::Stage2Hypertension => "Stage 2 Hypertension",
            VitalStatus::Stage1Hypertension => "Stage 1 Hypertension",
            VitalStatus::HighNormal => "High Normal (Prehypertension)",
            VitalStatus::Normal => "Normal",
            VitalStatus::Hypotension => "Low BP (Hypotension)",
            VitalStatus::CheckValues => "Check Values",
            VitalStatus::Bradycardia => "Bradycardia",
            VitalStatus::Tachycardia => "Tachycardia",
            VitalStatus::LowGradeFever => "Low Grade Fever",
            VitalStatus::ModerateGradeFever => "Moderate Grade Fever",
            VitalStatus::HighGradeFever => "High Grade Fever",
            VitalStatus::Hyperthermic => "Hyperthermic",
            VitalStatus::SevereHypoxemia => "Severe Hypoxemia",
            VitalStatus::ModerateHypoxemia => "Moderate Hypoxemia",
            VitalStatus::MildHypoxemia => "Mild Hypoxemia",
            VitalStatus::Bradypnea => "Bradypnea",
            VitalStatus::Tachypnea => "Tachypnea",
            VitalStatus::CheckValue => "Check Value",
        }
    }

    /// Look a status up by its clinical label
    pub fn from_label(label: &str) -> Option<VitalStatus> {
        Self::ALL.iter().copied().find(|status| status.label() == label)
    }
}

impl fmt::Display for VitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Colour of the severity meter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Gray,
}

/// Severity meter shown next to the blood pressure and BMI readings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meter {
    pub tone: Tone,
    /// Fill of the gauge, 0 to 100
    pub percent: u8,
}

impl Meter {
    const NEUTRAL: Meter = Meter::new(Tone::Gray, 50);

    pub const fn new(tone: Tone, percent: u8) -> Self {
        Self { tone, percent }
    }

    /// Meter for a classified measurement. Only blood pressure and BMI carry one.
    pub fn for_measurement(kind: VitalKind, status: Option<VitalStatus>) -> Option<Meter> {
        let meter = match kind {
            VitalKind::BloodPressure => match status {
                Some(VitalStatus::Hypotension) => Meter::new(Tone::Blue, 15),
                Some(VitalStatus::Normal) => Meter::new(Tone::Green, 35),
                Some(VitalStatus::HighNormal) => Meter::new(Tone::Yellow, 55),
                Some(VitalStatus::Stage1Hypertension) => Meter::new(Tone::Orange, 75),
                Some(VitalStatus::Stage2Hypertension) => Meter::new(Tone::Red, 90),
                Some(VitalStatus::HypertensiveCrisis) => Meter::new(Tone::Red, 100),
                _ => Self::NEUTRAL,
            },
            VitalKind::Bmi => match status {
                Some(VitalStatus::Underweight) => Meter::new(Tone::Blue, 15),
                Some(VitalStatus::NormalWeight) => Meter::new(Tone::Green, 35),
                Some(VitalStatus::Overweight) => Meter::new(Tone::Yellow, 55),
                Some(VitalStatus::Obesity) => Meter::new(Tone::Orange, 75),
                Some(VitalStatus::SevereObesity) => Meter::new(Tone::Red, 90),
                _ => Self::NEUTRAL,
            },
            _ => return None,
        };
        Some(meter)
    }
}

/// One classified measurement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitalMeasurement {
    pub kind: VitalKind,

    /// Field values the measurement was computed from, as entered
    pub raw_inputs: Vec<String>,

    /// Parsed or derived numeric value
    pub computed_value: Option<f64>,

    /// Classification, `None` when the input was incomplete or out of range
    pub status: Option<VitalStatus>,

    pub meter: Option<Meter>,
}

impl VitalMeasurement {
    /// Status label, empty when there is no status
    pub fn status_label(&self) -> &'static str {
        self.status.map(VitalStatus::label).unwrap_or("")
    }
}

/// Raw vitals form as entered. All fields are free text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VitalsInput {
    pub height_cm: Option<String>,
    pub weight_kg: Option<String>,
    pub systolic: Option<String>,
    pub diastolic: Option<String>,
    pub pulse: Option<String>,
    pub temperature_f: Option<String>,
    pub spo2: Option<String>,
    pub respiratory_rate: Option<String>,
}

/// Every vital classified in one pass
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitalsAssessment {
    pub bmi: VitalMeasurement,
    pub blood_pressure: VitalMeasurement,
    pub pulse: VitalMeasurement,
    pub temperature: VitalMeasurement,
    pub spo2: VitalMeasurement,
    pub respiratory_rate: VitalMeasurement,

    /// Display annotation next to the blood pressure meter
    pub mean_arterial_pressure: Option<f64>,
}

impl VitalsAssessment {
    pub fn measurements(&self) -> [&VitalMeasurement; 6] {
        [
            &self.bmi,
            &self.blood_pressure,
            &self.pulse,
            &self.temperature,
            &self.spo2,
            &self.respiratory_rate,
        ]
    }
}
