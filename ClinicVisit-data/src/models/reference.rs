use serde::Serialize;

/// A row of a clinician-facing reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceRange {
    /// Human readable range, e.g. "18.5 – 24.9"
    pub range: &'static str,

    /// Classification shown for that range
    pub classification: &'static str,
}

impl ReferenceRange {
    pub const fn new(range: &'static str, classification: &'static str) -> Self {
        Self {
            range,
            classification,
        }
    }
}
