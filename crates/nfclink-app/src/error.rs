use nfclink_card::vcard::DecodeFailureReason;
use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No contact card has been received")]
    NothingReceived,

    #[error("Received payload has no contact to save ({0})")]
    NothingToSave(DecodeFailureReason),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
