use serde::Serialize;

/// A register (reason for visit) and the purpose it resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegisterEntry {
    pub register: &'static str,
    pub purpose: &'static str,
}

impl RegisterEntry {
    pub const fn new(register: &'static str, purpose: &'static str) -> Self {
        Self { register, purpose }
    }
}

/// Registers available to one kind of person, split by visit type.
/// Entries are kept in the order they are offered to clinicians.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RegisterTable {
    pub preventive: &'static [RegisterEntry],
    pub curative: &'static [RegisterEntry],
}

impl RegisterTable {
    /// Find the purpose for a register in one of the visit lists
    pub fn lookup(entries: &'static [RegisterEntry], register: &str) -> Option<&'static RegisterEntry> {
        entries.iter().find(|entry| entry.register == register)
    }
}
