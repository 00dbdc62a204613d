//! Host actions around the codec.
//!
//! A [`ReceiveSession`] owns the card from the latest receive event. Every
//! downstream action ([`export_card`], [`save_to_contacts`], [`summary`])
//! takes that card explicitly.

mod contacts;
mod export;
mod session;
mod summary;

pub use contacts::{ContactBook, ContactInsert, JsonContactBook, save_to_contacts};
pub use export::export_card;
pub use session::{ReceiveSession, ReceivedCard};
pub use summary::summary;
