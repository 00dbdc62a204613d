//! Receive-session state.

use nfclink_card::vcard::{DecodeResult, decode};
use nfclink_core::types::ContactRecord;

use crate::error::{AppError, AppResult};

/// One received payload and its decode outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedCard {
    raw: Vec<u8>,
    result: DecodeResult,
}

impl ReceivedCard {
    /// Decodes `raw` once and keeps both the bytes and the outcome.
    #[must_use]
    pub fn decode(raw: Vec<u8>) -> Self {
        let result = decode(&raw);
        Self { raw, result }
    }

    /// The bytes exactly as they arrived.
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    #[must_use]
    pub fn result(&self) -> &DecodeResult {
        &self.result
    }

    /// Returns the recovered record, complete or partial.
    #[must_use]
    pub fn record(&self) -> Option<&ContactRecord> {
        self.result.as_ref().ok().map(|card| &card.record)
    }
}

/// Holds the card of the most recent receive event.
#[derive(Debug, Default)]
pub struct ReceiveSession {
    current: Option<ReceivedCard>,
}

impl ReceiveSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Handles one receive event: decodes `body` and replaces the current card.
    #[tracing::instrument(skip(self, body), fields(body_len = body.len()))]
    pub fn receive(&mut self, body: Vec<u8>) -> &ReceivedCard {
        let card = ReceivedCard::decode(body);
        match card.result() {
            Ok(decoded) => {
                tracing::info!(completeness = %decoded.completeness, "Contact card received");
            }
            Err(e) => {
                tracing::warn!(reason = %e.reason(), "Received payload is not a readable card");
            }
        }
        self.current.insert(card)
    }

    #[must_use]
    pub fn current(&self) -> Option<&ReceivedCard> {
        self.current.as_ref()
    }

    /// ## Summary
    /// Returns the current card.
    ///
    /// ## Errors
    /// Returns [`AppError::NothingReceived`] if no payload has been received.
    pub fn require_current(&self) -> AppResult<&ReceivedCard> {
        self.current.as_ref().ok_or(AppError::NothingReceived)
    }

    pub fn take(&mut self) -> Option<ReceivedCard> {
        self.current.take()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
