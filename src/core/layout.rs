//! Project layout.
//!
//! Every path the tool reads or writes, relative to a project root.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use tracing::{debug, trace};

use crate::core::constants;
use crate::error::Result;

/// Paths of a deployment directory.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout rooted at the current working directory.
    pub fn current() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn env_file(&self) -> PathBuf {
        self.root.join(constants::ENV_FILE)
    }

    pub fn env_template(&self) -> PathBuf {
        self.root.join(constants::ENV_TEMPLATE)
    }

    pub fn sql_template(&self) -> PathBuf {
        self.root
            .join(constants::INIT_SCRIPTS_DIR)
            .join(constants::SQL_TEMPLATE)
    }

    pub fn sql_file(&self) -> PathBuf {
        self.root
            .join(constants::INIT_SCRIPTS_DIR)
            .join(constants::SQL_FILE)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.root.join(constants::SETTINGS_FILE)
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.root.join(constants::BACKUP_DIR)
    }

    /// Backup file for a point in time: `backups/n8n_backup_YYYYMMDD_HHMMSS.sql`.
    pub fn backup_file<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> PathBuf
    where
        Tz::Offset: std::fmt::Display,
    {
        self.backup_dir().join(format!(
            "{}{}.{}",
            constants::BACKUP_PREFIX,
            at.format(constants::BACKUP_TIMESTAMP_FORMAT),
            constants::BACKUP_EXTENSION
        ))
    }

    /// Create the project directories. Existing ones are left alone.
    pub fn create_directories(&self) -> Result<()> {
        for dir in constants::PROJECT_DIRS {
            // PathBuf::join handles the separator on every platform
            let path = dir
                .split('/')
                .fold(self.root.clone(), |acc, part| acc.join(part));
            trace!(path = %path.display(), "creating directory");
            std::fs::create_dir_all(&path)?;
        }
        debug!(count = constants::PROJECT_DIRS.len(), "project directories ready");
        Ok(())
    }
}

/// Replace `path` with `contents` via a sibling temp file and rename.
///
/// A crash mid-write leaves the previous file intact. With `private`, the
/// file is created 0600 on Unix.
pub fn write_atomic(path: &Path, contents: &str, private: bool) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = path.with_file_name(format!(".{}.tmp", file_name));
    // a stale temp file would keep its old permissions
    let _ = std::fs::remove_file(&tmp);

    let result = write_file(&tmp, contents, private).and_then(|()| {
        std::fs::rename(&tmp, path)?;
        Ok(())
    });

    if result.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }

    trace!(path = %path.display(), bytes = contents.len(), "wrote file");
    result
}

fn write_file(path: &Path, contents: &str, private: bool) -> Result<()> {
    let mut options = std::fs::OpenOptions::new();
    options.create(true).truncate(true).write(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        if private {
            options.mode(0o600);
        }
    }
    #[cfg(not(unix))]
    let _ = private;

    let mut file = options.open(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    Ok(())
}
