//! Keyword tokens of the card profile.

/// First line of every card.
pub const BEGIN: &str = "BEGIN:VCARD";
/// Last line of every card.
pub const END: &str = "END:VCARD";
/// Profile version property name.
pub const VERSION: &str = "VERSION";
/// Structured name property name.
pub const N: &str = "N";
/// Formatted (display) name property name.
pub const FN: &str = "FN";
/// Property name and parameters of the phone line.
pub const TEL_CELL: &str = "TEL;TYPE=CELL";

/// Marker that introduces the display name when decoding.
pub const FN_MARKER: &str = "FN:";
/// Marker that introduces the phone number when decoding, at the start of a line.
///
/// Matches `TEL`, `TEL;...` and `TEL;TYPE=...:` alike.
pub const TEL_MARKER: &str = "TEL";
