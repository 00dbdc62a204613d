//! Core vCard types.

mod decoded;
mod payload;

pub mod names;

pub use decoded::{Completeness, DecodedCard};
pub use payload::WirePayload;
