use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A personal contact card as exchanged between two devices.
///
/// Values are stored exactly as entered; phone numbers are not normalized.
/// A record with empty fields is still a valid value (it can be encoded and
/// is what the decoder yields for unrecoverable fields), it just is not
/// [sendable](Self::is_sendable).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactRecord {
    display_name: String,
    phone_number: String,
}

impl ContactRecord {
    #[must_use]
    pub fn new(display_name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            phone_number: phone_number.into(),
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// ## Summary
    /// Returns `true` when both the name and the phone number are non-empty.
    #[must_use]
    pub fn is_sendable(&self) -> bool {
        !self.display_name.is_empty() && !self.phone_number.is_empty()
    }

    /// ## Summary
    /// Checks that the record is sendable.
    ///
    /// ## Errors
    /// Returns a validation error naming the first empty field.
    pub fn ensure_sendable(&self) -> CoreResult<()> {
        if self.display_name.is_empty() {
            return Err(CoreError::ValidationError(
                "display name must not be empty".to_string(),
            ));
        }
        if self.phone_number.is_empty() {
            return Err(CoreError::ValidationError(
                "phone number must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sendable_requires_both_fields() {
        assert!(ContactRecord::new("Ana Lopez", "5551234").is_sendable());
        assert!(!ContactRecord::new("Ana Lopez", "").is_sendable());
        assert!(!ContactRecord::new("", "5551234").is_sendable());
        assert!(!ContactRecord::default().is_sendable());
    }

    #[test]
    fn ensure_sendable_names_missing_field() {
        let err = ContactRecord::new("", "5551234")
            .ensure_sendable()
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::ValidationError("display name must not be empty".to_string())
        );

        let err = ContactRecord::new("Ana", "").ensure_sendable().unwrap_err();
        assert!(err.to_string().contains("phone number"));
    }

    #[test]
    fn phone_is_kept_as_entered() {
        let record = ContactRecord::new("Ana", " +1 (555) 123-4567 ");
        assert_eq!(record.phone_number(), " +1 (555) 123-4567 ");
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(
            ContactRecord::new("Ana", "1"),
            ContactRecord::new(String::from("Ana"), String::from("1"))
        );
        assert_ne!(ContactRecord::new("Ana", "1"), ContactRecord::new("Ana", "2"));
    }

    #[test]
    fn serde_uses_field_names() {
        let json = serde_json::to_string(&ContactRecord::new("Ana", "1")).unwrap();
        assert_eq!(json, r#"{"display_name":"Ana","phone_number":"1"}"#);
    }
}
