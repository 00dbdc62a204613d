//! `nfclink` command line.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use nfclink_card::vcard::encode;
use nfclink_core::config::Settings;
use nfclink_core::constants::VCARD_MEDIA_TYPE;

use crate::host::{JsonContactBook, ReceiveSession, export_card, save_to_contacts, summary};

#[derive(Parser, Debug)]
#[command(name = "nfclink")]
#[command(about = "Exchange contact cards as text/x-vcard payloads", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a contact card payload
    Encode {
        /// Display name (defaults to owner.name from the configuration)
        #[arg(short, long)]
        name: Option<String>,

        /// Phone number (defaults to owner.phone from the configuration)
        #[arg(short, long)]
        phone: Option<String>,

        /// Write the payload to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Process a received payload
    Receive {
        /// File holding the raw payload bytes
        file: PathBuf,

        /// Write the received payload to the configured export file
        #[arg(long)]
        export: bool,

        /// Hand the received record to the contact book
        #[arg(long)]
        save_contact: bool,
    },
    /// Print the declared payload media type
    MediaType,
}

/// ## Summary
/// Runs one command against the loaded settings, writing command output to `out`.
///
/// ## Errors
/// Returns an error if reading the payload, writing output, exporting or
/// saving the contact fails.
pub async fn run(
    command: Command,
    settings: &Settings,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Encode {
            name,
            phone,
            out: path,
        } => {
            let record = settings.owner.record(name, phone);
            if let Err(e) = record.ensure_sendable() {
                tracing::warn!(error = %e, "Encoding a card that is not sendable");
            }

            let payload = encode(&record);
            if let Some(path) = path {
                tokio::fs::write(&path, &payload)
                    .await
                    .with_context(|| format!("writing payload to {}", path.display()))?;
                tracing::info!(path = %path.display(), "Payload written");
            } else {
                out.write_all(payload.as_ref())?;
            }
        }
        Command::Receive {
            file,
            export,
            save_contact,
        } => {
            let body = tokio::fs::read(&file)
                .await
                .with_context(|| format!("reading payload from {}", file.display()))?;

            let mut session = ReceiveSession::new();
            let card = session.receive(body);
            writeln!(out, "{}", summary(card.result()))?;

            if export {
                let path = export_card(card, &settings.export).await?;
                writeln!(out, "Saved to: {}", path.display())?;
            }

            if save_contact {
                let mut book = JsonContactBook::new(&mut *out);
                save_to_contacts(card, &mut book)?;
            }
        }
        Command::MediaType => writeln!(out, "{VCARD_MEDIA_TYPE}")?,
    }

    Ok(())
}
