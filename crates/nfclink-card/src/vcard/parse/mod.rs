//! Best-effort card decoding.
//!
//! ## Usage
//!
//! ```rust
//! use nfclink_card::vcard::parse::{DecodeFailureReason, decode};
//!
//! let card = decode(b"BEGIN:VCARD\nFN:Jane Doe").unwrap();
//! assert_eq!(card.record.display_name(), "Jane Doe");
//!
//! let err = decode(b"hello world").unwrap_err();
//! assert_eq!(err.reason(), DecodeFailureReason::NoRecognizedFields);
//! assert_eq!(err.raw_text(), Some("hello world"));
//! ```
//!
//! ## Features
//!
//! - Accepts any byte sequence and never panics
//! - Tolerates missing line terminators, CRLF endings and missing fields
//! - Recognizes `TEL`, `TEL;` and `TEL;TYPE=...` phone lines alike, at the
//!   start of a line only

mod decoder;
mod error;
mod scan;


pub use decoder::decode;
pub use error::{DecodeError, DecodeFailureReason, DecodeResult};
