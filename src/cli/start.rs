//! Start command.
//!
//! Refreshes the SQL init script from `.env` and brings services up.

use tracing::warn;

use crate::cli::{output, report_failure, Context};
use crate::core::compose::Compose;
use crate::core::config::Settings;
use crate::core::template;
use crate::error::{MissingPrerequisite, Result};

/// Start services.
///
/// # Errors
///
/// Returns `MissingPrerequisite::EnvFile` before any compose call if
/// `.env` has not been generated.
pub fn execute(ctx: &Context<'_>, compose: &Compose<'_>) -> Result<()> {
    if !ctx.layout.env_file().exists() {
        return Err(MissingPrerequisite::EnvFile.into());
    }
    let settings = Settings::load(&ctx.layout)?;

    match template::render_sql_template(&ctx.layout) {
        Ok(()) => output::success("generated init-user.sql with current environment variables"),
        Err(e) => {
            warn!(error = %e, "sql init script not refreshed");
            output::failure(&e.to_string());
        }
    }

    output::step("starting services");
    let out = compose.up();
    if out.success {
        output::success("services started successfully");
        output::kv("n8n is available at", &settings.app.url);
    } else {
        report_failure("failed to start services", &out);
    }

    Ok(())
}
