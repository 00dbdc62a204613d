//! Card encoder.

use nfclink_core::constants::VCARD_VERSION;
use nfclink_core::types::ContactRecord;

use crate::vcard::core::WirePayload;
use crate::vcard::core::names;

/// Encodes a contact record as a card payload.
///
/// ## Summary
/// Produces the six-line card body (`BEGIN`, `VERSION`, `N`, `FN`, `TEL`,
/// `END`), each line terminated by a single LF. Empty fields produce lines
/// with empty values.
#[must_use]
#[tracing::instrument(skip(record), fields(sendable = record.is_sendable()))]
pub fn encode(record: &ContactRecord) -> WirePayload {
    let name = record.display_name();
    let phone = record.phone_number();

    let mut body = String::with_capacity(64 + 2 * name.len() + phone.len());

    push_line(&mut body, names::BEGIN, &[]);
    push_line(&mut body, names::VERSION, &[VCARD_VERSION]);
    // N is family;given;additional;prefix. The whole name goes in the first slot.
    push_line(&mut body, names::N, &[name, ";;;"]);
    push_line(&mut body, names::FN, &[name]);
    push_line(&mut body, names::TEL_CELL, &[phone]);
    push_line(&mut body, names::END, &[]);

    tracing::trace!(len = body.len(), "Encoded card");

    WirePayload::new(body)
}

/// Appends `name[:value...]` and a line feed. An empty `value` writes the bare name.
fn push_line(output: &mut String, name: &str, value: &[&str]) {
    output.push_str(name);
    if !value.is_empty() {
        output.push(':');
        value.iter().for_each(|part| output.push_str(part));
    }
    output.push('\n');
}
