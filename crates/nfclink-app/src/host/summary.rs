//! Text shown to the user after a receive event.

use nfclink_card::vcard::{Completeness, DecodeError, DecodeResult};

/// ## Summary
/// Describes a decode outcome in one line of user-facing text.
#[must_use]
pub fn summary(result: &DecodeResult) -> String {
    match result {
        Ok(card) => {
            let name = card.record.display_name();
            let phone = card.record.phone_number();
            match card.completeness {
                Completeness::Complete => format!("Received: {name}"),
                Completeness::Partial if !name.is_empty() => {
                    format!("Received (partial): {name}")
                }
                Completeness::Partial if !phone.is_empty() => {
                    format!("Card data without a readable name (phone: {phone})")
                }
                Completeness::Partial => "Card data without a readable name".to_string(),
            }
        }
        Err(DecodeError::NoRecognizedFields { raw }) => format!("Raw data received: {raw}"),
        Err(DecodeError::InvalidEncoding(_)) => {
            "Could not read card: payload is not UTF-8".to_string()
        }
    }
}
