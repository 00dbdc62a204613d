//! Wire payload produced by the encoder.

use nfclink_core::constants::VCARD_MEDIA_TYPE;

/// A serialized card ready to hand to the transport.
///
/// The body is held as a `String`, so it is always valid UTF-8, and the media
/// type is always [`VCARD_MEDIA_TYPE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WirePayload {
    body: String,
}

impl WirePayload {
    pub(crate) fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the declared media type.
    #[must_use]
    pub const fn media_type(&self) -> &'static str {
        VCARD_MEDIA_TYPE
    }

    /// Returns the UTF-8 encoded body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        self.body.as_bytes()
    }

    /// Returns the body as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.body
    }
}

impl AsRef<[u8]> for WirePayload {
    fn as_ref(&self) -> &[u8] {
        self.body()
    }
}
