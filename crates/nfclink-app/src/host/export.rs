//! Writing a received card to a file.

use std::path::PathBuf;

use nfclink_core::config::ExportConfig;

use super::session::ReceivedCard;
use crate::error::{AppError, AppResult};

/// ## Summary
/// Writes the received bytes verbatim to the configured export file, creating
/// the export directory if needed, and returns the path written.
///
/// Partial cards and payloads that failed to decode are exported as well;
/// the file always holds exactly what arrived.
///
/// ## Errors
/// Returns [`AppError::NothingReceived`] for an empty payload, or an I/O
/// error if the directory or file cannot be written.
#[tracing::instrument(skip(card), fields(raw_len = card.raw().len()))]
pub async fn export_card(card: &ReceivedCard, export: &ExportConfig) -> AppResult<PathBuf> {
    if card.raw().is_empty() {
        tracing::warn!("Refusing to export an empty payload");
        return Err(AppError::NothingReceived);
    }

    tokio::fs::create_dir_all(&export.directory).await?;

    let path = export.path();
    tokio::fs::write(&path, card.raw()).await?;

    tracing::info!(path = %path.display(), "Exported received card");

    Ok(path)
}
