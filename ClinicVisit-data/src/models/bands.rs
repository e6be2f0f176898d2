use serde::Serialize;

use super::reference::ReferenceRange;

/// One end of a numeric interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Bound {
    /// No limit on this side
    Unbounded,

    /// The limit itself is part of the interval
    Inclusive(f64),

    /// The limit itself is excluded
    Exclusive(f64),
}

/// A numeric interval described by its two bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    pub lower: Bound,
    pub upper: Bound,
}

impl Interval {
    /// Create a new interval
    pub const fn new(lower: Bound, upper: Bound) -> Self {
        Self { lower, upper }
    }

    /// Interval accepting every value
    pub const fn any() -> Self {
        Self::new(Bound::Unbounded, Bound::Unbounded)
    }

    /// Check whether a value falls inside the interval
    pub fn contains(&self, value: f64) -> bool {
        let above = match self.lower {
            Bound::Unbounded => true,
            Bound::Inclusive(limit) => value >= limit,
            Bound::Exclusive(limit) => value > limit,
        };
        let below = match self.upper {
            Bound::Unbounded => true,
            Bound::Inclusive(limit) => value <= limit,
            Bound::Exclusive(limit) => value < limit,
        };
        above && below
    }

    /// Lowest finite limit, if any
    pub fn lower_limit(&self) -> Option<f64> {
        match self.lower {
            Bound::Unbounded => None,
            Bound::Inclusive(limit) | Bound::Exclusive(limit) => Some(limit),
        }
    }

    /// Highest finite limit, if any
    pub fn upper_limit(&self) -> Option<f64> {
        match self.upper {
            Bound::Unbounded => None,
            Bound::Inclusive(limit) | Bound::Exclusive(limit) => Some(limit),
        }
    }
}

/// A labelled band of a threshold table: `(lower, upper, label)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeBand {
    pub interval: Interval,
    pub label: &'static str,
}

impl RangeBand {
    pub const fn new(lower: Bound, upper: Bound, label: &'static str) -> Self {
        Self {
            interval: Interval::new(lower, upper),
            label,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.interval.contains(value)
    }
}

/// Evaluate a threshold table, first matching band wins
pub fn first_match(bands: &'static [RangeBand], value: f64) -> Option<&'static RangeBand> {
    bands.iter().find(|band| band.contains(value))
}

/// How a raw reading is read as a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Numeric {
    /// Whole numbers only; any fractional part is dropped
    Integer,

    /// Decimal readings
    Decimal,
}

/// Everything needed to classify a single-valued vital sign
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VitalScale {
    /// Display name of the measurement
    pub name: &'static str,

    /// Unit the reading is entered in
    pub unit: &'static str,

    /// Integer or decimal reading
    pub numeric: Numeric,

    /// Readings outside this interval get no status at all
    pub domain: Interval,

    /// Ordered classification bands
    pub bands: &'static [RangeBand],

    /// Label used when a valid reading falls between two bands
    pub gap_label: Option<&'static str>,

    /// Reference table shown to clinicians
    #[serde(skip)]
    pub reference: &'static [ReferenceRange],
}

/// How the systolic and diastolic tests of a rule are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Combine {
    /// Either reading in range is enough
    Either,

    /// Both readings must be in range
    Both,
}

/// One step of the blood pressure staging ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BpRule {
    pub systolic: Interval,
    pub diastolic: Interval,
    pub combine: Combine,
    pub label: &'static str,
}

impl BpRule {
    pub const fn new(
        systolic: Interval,
        diastolic: Interval,
        combine: Combine,
        label: &'static str,
    ) -> Self {
        Self {
            systolic,
            diastolic,
            combine,
            label,
        }
    }

    /// Check whether the pair matches this rule
    pub fn matches(&self, systolic: f64, diastolic: f64) -> bool {
        let sys = self.systolic.contains(systolic);
        let dia = self.diastolic.contains(diastolic);
        match self.combine {
            Combine::Either => sys || dia,
            Combine::Both => sys && dia,
        }
    }
}
