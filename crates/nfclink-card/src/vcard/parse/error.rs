//! Card decode error types.

use std::fmt;
use std::str::Utf8Error;

use thiserror::Error;

use crate::vcard::core::DecodedCard;

/// Result type for card decoding.
pub type DecodeResult = Result<DecodedCard, DecodeError>;

/// A payload from which no record could be recovered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload bytes are not valid UTF-8.
    #[error("payload is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] Utf8Error),

    /// The payload is text but contains neither a name nor a phone marker.
    #[error("no recognized card fields in {} bytes of text", raw.len())]
    NoRecognizedFields {
        /// The received text, kept so callers can show what arrived.
        raw: String,
    },
}

impl DecodeError {
    #[must_use]
    pub const fn reason(&self) -> DecodeFailureReason {
        match self {
            Self::InvalidEncoding(_) => DecodeFailureReason::InvalidEncoding,
            Self::NoRecognizedFields { .. } => DecodeFailureReason::NoRecognizedFields,
        }
    }

    /// Returns the received text when the payload decoded as UTF-8.
    #[must_use]
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            Self::InvalidEncoding(_) => None,
            Self::NoRecognizedFields { raw } => Some(raw),
        }
    }
}

/// Reason code of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeFailureReason {
    InvalidEncoding,
    NoRecognizedFields,
}

impl fmt::Display for DecodeFailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEncoding => write!(f, "invalid encoding"),
            Self::NoRecognizedFields => write!(f, "no recognized fields"),
        }
    }
}
