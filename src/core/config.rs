//! Settings file management.
//!
//! Reads the optional `n8n-setup.toml` from the project root. Every field
//! has a default, so the file only needs the values being changed.

use serde::Deserialize;
use tracing::debug;

use crate::core::constants;
use crate::core::layout::Layout;
use crate::error::{ConfigError, Result};

/// Contents of `n8n-setup.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub backup: BackupSettings,
    pub app: AppSettings,
}

/// Where `backup` dumps from.
///
/// Defaults to the `postgres` service with `n8n`/`n8n`, independent of the
/// credentials in `.env`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackupSettings {
    /// Compose service running PostgreSQL
    pub service: String,
    /// Role passed to `pg_dump -U`
    pub user: String,
    /// Database to dump
    pub database: String,
}

impl Default for BackupSettings {
    fn default() -> Self {
        Self {
            service: constants::DEFAULT_DB_SERVICE.to_string(),
            user: constants::DEFAULT_BACKUP_USER.to_string(),
            database: constants::DEFAULT_BACKUP_DATABASE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppSettings {
    /// URL printed after a successful start
    pub url: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            url: constants::DEFAULT_APP_URL.to_string(),
        }
    }
}

impl Settings {
    /// Load settings for a project, or defaults when the file is absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file can't be read, or
    /// `ConfigError::Parse` if the TOML is malformed.
    pub fn load(layout: &Layout) -> Result<Self> {
        let path = layout.settings_file();
        if !path.exists() {
            debug!("no settings file, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading settings");
        let contents = std::fs::read_to_string(&path).map_err(|source| {
            ConfigError::ReadFile {
                path: path.clone(),
                source,
            }
        })?;
        let settings = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        Ok(settings)
    }
}
