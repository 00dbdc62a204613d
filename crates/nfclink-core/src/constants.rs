/// Declared media type of every card payload.
pub const VCARD_MEDIA_TYPE: &str = "text/x-vcard";

pub const VCARD_EXTENSION: &str = "vcf";

pub const EXPORT_FILE_STEM: &str = "received_contact";
pub const EXPORT_FILE_NAME: &str = const_str::concat!(EXPORT_FILE_STEM, ".", VCARD_EXTENSION);

/// Card profile version written by the encoder.
pub const VCARD_VERSION: &str = "3.0";
