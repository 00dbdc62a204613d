//! Successful decode outcomes.

use std::fmt;

use nfclink_core::types::ContactRecord;

/// How much of a card could be recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Completeness {
    /// Both the name and the phone number were extracted.
    Complete,
    /// The payload was card-shaped but at least one field is empty.
    Partial,
}

impl Completeness {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Partial => "partial",
        }
    }
}

impl fmt::Display for Completeness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record recovered from a payload, tagged with its completeness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCard {
    pub record: ContactRecord,
    pub completeness: Completeness,
}

impl DecodedCard {
    /// Classifies `record` by whether both of its fields are populated.
    #[must_use]
    pub fn classify(record: ContactRecord) -> Self {
        let completeness = if record.is_sendable() {
            Completeness::Complete
        } else {
            Completeness::Partial
        };
        Self {
            record,
            completeness,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completeness == Completeness::Complete
    }
}
