//! Card encoding.
//!
//! ## Usage
//!
//! ```rust
//! use nfclink_card::vcard::build::encode;
//! use nfclink_core::types::ContactRecord;
//!
//! let payload = encode(&ContactRecord::new("Ana Lopez", "5551234"));
//! assert!(payload.as_str().contains("FN:Ana Lopez\n"));
//! ```
//!
//! ## Features
//!
//! - Fixed property order, LF line endings, trailing LF after `END:VCARD`
//! - Values are written verbatim (no escaping, no folding)
//! - Never fails, including for empty fields

mod encoder;

pub use encoder::encode;
