//! Backup command.
//!
//! Dumps the database through `pg_dump` inside the database container into
//! `backups/n8n_backup_YYYYMMDD_HHMMSS.sql`.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use tracing::info;

use crate::cli::{output, report_failure, Context};
use crate::core::compose::Compose;
use crate::core::config::Settings;
use crate::error::Result;

/// Create a timestamped database backup.
pub fn execute(ctx: &Context<'_>, compose: &Compose<'_>) -> Result<()> {
    backup_at(ctx, compose, Local::now()).map(|_| ())
}

/// Back up to the file named for `at`.
///
/// Returns the backup path when the dump succeeded. A failed dump is
/// reported and its partial file removed.
pub fn backup_at(
    ctx: &Context<'_>,
    compose: &Compose<'_>,
    at: DateTime<Local>,
) -> Result<Option<PathBuf>> {
    let settings = Settings::load(&ctx.layout)?;

    std::fs::create_dir_all(ctx.layout.backup_dir())?;
    let path = ctx.layout.backup_file(&at);
    let shown = path
        .strip_prefix(ctx.layout.root())
        .unwrap_or(&path)
        .to_path_buf();

    output::step(&format!("creating database backup: {}", output::path(&shown)));
    let out = compose.dump(&settings.backup, &path);

    if out.success {
        info!(path = %path.display(), "backup written");
        output::success(&format!("database backup created: {}", output::path(&shown)));
        Ok(Some(path))
    } else {
        let _ = std::fs::remove_file(&path);
        report_failure("failed to create backup", &out);
        Ok(None)
    }
}
