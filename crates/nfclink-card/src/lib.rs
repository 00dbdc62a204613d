//! Contact card codec for device-to-device exchange.
//!
//! [`vcard::encode`] turns a [`ContactRecord`](nfclink_core::types::ContactRecord)
//! into a `text/x-vcard` payload, and [`vcard::decode`] recovers a record from
//! whatever bytes arrive, classifying the outcome instead of failing hard.

pub mod vcard;
