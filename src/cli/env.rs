//! Env command.
//!
//! Generates `.env` from `env.template`, then the SQL init script.

use tracing::info;

use crate::cli::{output, Context};
use crate::core::template::{self, EnvOutcome};
use crate::error::Result;

/// Generate `.env` without touching Docker.
pub fn execute(ctx: &Context<'_>) -> Result<()> {
    render(ctx)
}

/// Render `.env` (asking before overwriting) and report what happened.
pub(crate) fn render(ctx: &Context<'_>) -> Result<()> {
    match template::render_env_template(&ctx.layout, ctx.confirm)? {
        EnvOutcome::Skipped => {
            output::warn("skipping .env file creation");
        }
        EnvOutcome::Written { credentials, sql } => {
            info!("generated new credentials");
            output::success(".env file created with generated passwords:");
            output::kv("n8n admin password", credentials.n8n_password.as_str());
            output::kv("database passwords", "[generated]");
            output::kv("encryption key", "[generated]");
            output::blank();
            output::warn("save these credentials securely!");

            match sql {
                Ok(()) => output::success("generated init-user.sql with current environment variables"),
                Err(e) => output::failure(&e.to_string()),
            }
        }
    }

    Ok(())
}
