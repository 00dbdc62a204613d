//! Card payloads as they arrive from other devices.

/// Body produced by this encoder for "Ana Lopez" / "5551234".
pub const CARD_ANA: &str = "BEGIN:VCARD\nVERSION:3.0\nN:Ana Lopez;;;\nFN:Ana Lopez\nTEL;TYPE=CELL:5551234\nEND:VCARD\n";

/// Legacy sender that omitted the final line feed.
pub const CARD_NO_TRAILING_LF: &str =
    "BEGIN:VCARD\nVERSION:3.0\nN:Jane Doe;;;\nFN:Jane Doe\nTEL;TYPE=CELL:5550000\nEND:VCARD";

/// Body cut off in the middle of the name line.
pub const CARD_TRUNCATED: &str = "BEGIN:VCARD\nVERSION:3.0\nN:Jane Doe;;;\nFN:Jane Doe";

/// A standard vCard 4.0 from a desktop address book.
pub const CARD_V4_CRLF: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
N:Doe;John;;;\r\n\
FN:John Doe\r\n\
EMAIL:john@example.com\r\n\
TEL;TYPE=work,voice;VALUE=uri:tel:+1-555-555-5555\r\n\
END:VCARD\r\n";

/// vCard 2.1 style phone line with bare parameters.
pub const CARD_V21: &str = "BEGIN:VCARD\nVERSION:2.1\nFN:Max\nTEL;CELL:+49 151 0000000\nEND:VCARD\n";

/// A card carrying only a phone number.
pub const CARD_PHONE_ONLY: &str = "BEGIN:VCARD\nVERSION:3.0\nTEL;TYPE=CELL:5551234\nEND:VCARD\n";

/// A plain text record pushed by some other application.
pub const PLAIN_TEXT: &str = "hello world";
