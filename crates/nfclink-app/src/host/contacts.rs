//! Hand-off of a received record to the platform contact book.

use std::io::Write;

use nfclink_core::types::ContactRecord;
use serde::Serialize;

use super::session::ReceivedCard;
use crate::error::{AppError, AppResult};

/// The values passed to the platform's contact-creation flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInsert {
    pub name: String,
    pub phone: String,
}

impl From<&ContactRecord> for ContactInsert {
    fn from(record: &ContactRecord) -> Self {
        Self {
            name: record.display_name().to_string(),
            phone: record.phone_number().to_string(),
        }
    }
}

/// A platform contact book that can create a contact from two values.
pub trait ContactBook {
    /// ## Errors
    /// Returns an error if the request could not be handed to the platform.
    fn insert(&mut self, request: &ContactInsert) -> AppResult<()>;
}

/// Writes each insert request as one JSON line, for a platform shim to consume.
#[derive(Debug)]
pub struct JsonContactBook<W> {
    writer: W,
}

impl<W: Write> JsonContactBook<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ContactBook for JsonContactBook<W> {
    fn insert(&mut self, request: &ContactInsert) -> AppResult<()> {
        serde_json::to_writer(&mut self.writer, request)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// ## Summary
/// Offers the received record to the contact book. Partial records are
/// offered as they are; the platform flow lets the user fill the gaps.
///
/// ## Errors
/// Returns [`AppError::NothingToSave`] if the payload did not decode to a
/// record, or the contact book's error.
#[tracing::instrument(skip_all)]
pub fn save_to_contacts(
    card: &ReceivedCard,
    book: &mut impl ContactBook,
) -> AppResult<ContactInsert> {
    let decoded = card
        .result()
        .as_ref()
        .map_err(|e| AppError::NothingToSave(e.reason()))?;

    let request = ContactInsert::from(&decoded.record);
    book.insert(&request)?;

    tracing::info!(completeness = %decoded.completeness, "Contact handed to contact book");

    Ok(request)
}
