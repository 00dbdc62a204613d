use std::fmt;
use std::path::PathBuf;

use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::EXPORT_FILE_NAME;
use crate::types::ContactRecord;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub export: ExportConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub owner: OwnerConfig,
}

/// Where received cards are written when exported.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub directory: PathBuf,
    pub file_name: String,
}

impl ExportConfig {
    /// ## Summary
    /// Returns the full path of the export file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// The card this device sends when no explicit values are given.
///
/// `Debug` only reports which values are set, never the values themselves.
#[derive(Clone, Default, Deserialize)]
pub struct OwnerConfig {
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl fmt::Debug for OwnerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnerConfig")
            .field("name_set", &self.name.is_some())
            .field("phone_set", &self.phone.is_some())
            .finish()
    }
}

impl OwnerConfig {
    /// ## Summary
    /// Builds the owner's record, overriding configured values with the given ones.
    /// Missing values become empty fields.
    #[must_use]
    pub fn record(&self, name: Option<String>, phone: Option<String>) -> ContactRecord {
        ContactRecord::new(
            name.or_else(|| self.name.clone()).unwrap_or_default(),
            phone.or_else(|| self.phone.clone()).unwrap_or_default(),
        )
    }
}

impl Settings {
    /// ## Summary
    /// Returns a config builder pre-populated with the default values.
    ///
    /// ## Errors
    /// Returns an error if a default value cannot be set.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("export.directory", ".")?
            .set_default("export.file_name", EXPORT_FILE_NAME)?
            .set_default("logging.level", "debug")?)
    }

    /// ## Summary
    /// Returns the environment source.
    ///
    /// Variables use the `NFCLINK_` prefix and `__` between sections, e.g.
    /// `NFCLINK_EXPORT__FILE_NAME`. Values are kept as strings so phone
    /// numbers keep their `+` and leading zeros.
    #[must_use]
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix("NFCLINK")
            .prefix_separator("_")
            .separator("__")
            .ignore_empty(true)
    }

    /// ## Summary
    /// Loads configuration from defaults, environment variables and an optional
    /// `config.toml` into a `Settings`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::defaults()?
            .add_source(Self::environment())
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    Settings::load()
}
