//! Card decoder.

use nfclink_core::types::ContactRecord;

use super::error::{DecodeError, DecodeResult};
use super::scan::{after_line_marker, after_marker, line_value};
use crate::vcard::core::DecodedCard;
use crate::vcard::core::names::{FN_MARKER, TEL_MARKER};

/// Decodes a received payload into a contact record.
///
/// ## Summary
/// Recovers as much of the card as possible:
///
/// - the name is the rest of the line after the first `FN:`;
/// - the phone is the rest of the line after the first `:` that follows the
///   first `TEL` starting a line;
/// - a missing final line feed ends the value at the end of the text.
///
/// The result is [`Complete`](crate::vcard::Completeness::Complete) when both
/// values are non-empty and [`Partial`](crate::vcard::Completeness::Partial)
/// when at least one marker was found. Decoding is a pure function of `body`.
///
/// ## Errors
/// - [`DecodeError::InvalidEncoding`] if `body` is not UTF-8.
/// - [`DecodeError::NoRecognizedFields`] if neither `FN:` nor a line-leading
///   `TEL` occurs;
///   the text is returned in the error.
#[tracing::instrument(skip(body), fields(input_len = body.len()))]
pub fn decode(body: &[u8]) -> DecodeResult {
    tracing::debug!("Decoding card payload");

    let text = std::str::from_utf8(body).map_err(|e| {
        tracing::debug!(valid_up_to = e.valid_up_to(), "Payload is not UTF-8");
        DecodeError::InvalidEncoding(e)
    })?;

    let name = after_marker(text, FN_MARKER).map(line_value);
    let phone = after_line_marker(text, TEL_MARKER)
        .map(|rest| after_marker(rest, ":").map_or("", line_value));

    tracing::trace!(
        has_name_marker = name.is_some(),
        has_phone_marker = phone.is_some(),
        "Scanned markers"
    );

    if name.is_none() && phone.is_none() {
        tracing::debug!("No card fields recognized");
        return Err(DecodeError::NoRecognizedFields {
            raw: text.to_owned(),
        });
    }

    let card = DecodedCard::classify(ContactRecord::new(
        name.unwrap_or_default(),
        phone.unwrap_or_default(),
    ));

    tracing::debug!(completeness = %card.completeness, "Decoded card");

    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcard::core::Completeness;
    use crate::vcard::parse::DecodeFailureReason;

    fn decoded(body: &str) -> DecodedCard {
        decode(body.as_bytes()).unwrap()
    }

    #[test_log::test]
    fn decodes_full_card() {
        let card = decoded(
            "BEGIN:VCARD\nVERSION:3.0\nN:Ana Lopez;;;\nFN:Ana Lopez\nTEL;TYPE=CELL:5551234\nEND:VCARD\n",
        );
        assert_eq!(card.completeness, Completeness::Complete);
        assert_eq!(card.record, ContactRecord::new("Ana Lopez", "5551234"));
    }

    #[test]
    fn name_without_terminator() {
        let card = decoded("BEGIN:VCARD\nFN:Jane Doe");
        assert_eq!(card.record.display_name(), "Jane Doe");
        assert_eq!(card.record.phone_number(), "");
        assert_eq!(card.completeness, Completeness::Partial);
    }

    #[test]
    fn phone_without_terminator() {
        let card = decoded("FN:Jane\nTEL;TYPE=CELL:5551234");
        assert_eq!(card.record.phone_number(), "5551234");
        assert!(card.is_complete());
    }

    #[test]
    fn phone_only_card() {
        let card = decoded("BEGIN:VCARD\nTEL:5551234\nEND:VCARD\n");
        assert_eq!(card.record.display_name(), "");
        assert_eq!(card.record.phone_number(), "5551234");
        assert_eq!(card.completeness, Completeness::Partial);
    }

    #[test]
    fn tel_variants_are_recognized() {
        for line in ["TEL:1", "TEL;:1", "TEL;TYPE=HOME:1", "TEL;TYPE=CELL,VOICE:1"] {
            let card = decoded(&format!("FN:A\n{line}\n"));
            assert_eq!(card.record.phone_number(), "1", "line {line}");
        }
    }

    #[test]
    fn tel_marker_without_separator_yields_empty_phone() {
        let card = decoded("FN:Jane\nTEL");
        assert_eq!(card.record.phone_number(), "");
        assert_eq!(card.completeness, Completeness::Partial);
    }

    #[test]
    fn tel_marker_alone_is_partial() {
        let card = decoded("TEL");
        assert_eq!(card.record, ContactRecord::default());
        assert_eq!(card.completeness, Completeness::Partial);
    }

    #[test]
    fn empty_name_value_is_partial() {
        let card = decoded("FN:\nTEL;TYPE=CELL:5551234\n");
        assert_eq!(card.record.display_name(), "");
        assert_eq!(card.completeness, Completeness::Partial);
    }

    #[test]
    fn crlf_line_endings_are_trimmed() {
        let card = decoded("BEGIN:VCARD\r\nFN:Ana Lopez\r\nTEL;TYPE=CELL:5551234\r\nEND:VCARD\r\n");
        assert_eq!(card.record, ContactRecord::new("Ana Lopez", "5551234"));
    }

    #[test]
    fn first_marker_wins() {
        let card = decoded("FN:First\nFN:Second\nTEL:1\nTEL:2\n");
        assert_eq!(card.record, ContactRecord::new("First", "1"));
    }

    #[test]
    fn unrecognized_text_is_kept() {
        let err = decode(b"hello world").unwrap_err();
        assert_eq!(err.reason(), DecodeFailureReason::NoRecognizedFields);
        assert_eq!(err.raw_text(), Some("hello world"));
    }

    #[test]
    fn empty_input_is_unrecognized() {
        let err = decode(b"").unwrap_err();
        assert_eq!(err, DecodeError::NoRecognizedFields { raw: String::new() });
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let err = decode(&[b'F', b'N', b':', 0xC3, 0x28]).unwrap_err();
        assert_eq!(err.reason(), DecodeFailureReason::InvalidEncoding);
    }

    #[test]
    fn markers_are_case_sensitive() {
        let err = decode(b"fn:jane\ntel:1").unwrap_err();
        assert_eq!(err.reason(), DecodeFailureReason::NoRecognizedFields);
    }

    #[test]
    fn many_repeated_markers() {
        let body = "FN:TEL:".repeat(5_000);
        let card = decoded(&body);
        assert!(card.record.display_name().starts_with("TEL:FN:"));
        assert_eq!(card.record.phone_number(), "");

        let body = "FN:A\nTEL:1\n".repeat(5_000);
        let card = decoded(&body);
        assert_eq!(card.record, ContactRecord::new("A", "1"));
    }

    #[test]
    fn tel_inside_a_line_is_not_a_phone_marker() {
        let card = decoded("N:ESTELA;;;\nFN:ESTELA\nTEL;TYPE=CELL:5551234\n");
        assert_eq!(card.record, ContactRecord::new("ESTELA", "5551234"));

        let card = decoded("FN:CASTELLO\nNOTE:call HOTEL:front desk\n");
        assert_eq!(card.record.phone_number(), "");
        assert_eq!(card.completeness, Completeness::Partial);
    }

    #[test]
    fn tel_only_mid_line_is_unrecognized() {
        let err = decode(b"HOTEL:5551234").unwrap_err();
        assert_eq!(err.reason(), DecodeFailureReason::NoRecognizedFields);
    }
}
