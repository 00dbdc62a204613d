//! Minimal vCard 3.0 profile used for contact exchange.
//!
//! ## Overview
//!
//! The profile carries exactly two values: a display name and a phone number.
//! It is a strict subset of RFC 2426: no line folding, no escaping and no
//! other property types. Values containing `:`, `;` or a line feed do not
//! survive a round trip.
//!
//! ## Usage
//!
//! ```rust
//! use nfclink_card::vcard::{Completeness, decode, encode};
//! use nfclink_core::types::ContactRecord;
//!
//! let payload = encode(&ContactRecord::new("Ana Lopez", "5551234"));
//! assert_eq!(payload.media_type(), "text/x-vcard");
//!
//! let decoded = decode(payload.body()).unwrap();
//! assert_eq!(decoded.completeness, Completeness::Complete);
//! assert_eq!(decoded.record.display_name(), "Ana Lopez");
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Payload and decode outcome types
//! - [`build`] - Encoding
//! - [`parse`] - Best-effort decoding and error types

pub mod build;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

pub use build::encode;
pub use self::core::{Completeness, DecodedCard, WirePayload};
pub use parse::{DecodeError, DecodeFailureReason, DecodeResult, decode};
