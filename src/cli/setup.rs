//! Setup command.
//!
//! Creates the project directories and generates `.env` plus the SQL init
//! script.

use crate::cli::{env, output, Context};
use crate::error::Result;

/// Bootstrap a deployment directory.
pub fn execute(ctx: &Context<'_>) -> Result<()> {
    output::header("Setting up n8n Docker environment...");

    ctx.layout.create_directories()?;
    output::success("created required directories");

    env::render(ctx)?;

    output::blank();
    output::success("setup complete! next steps:");
    output::numbered(1, "review the .env file and adjust settings if needed");
    output::numbered(2, &format!("run: {}", output::cmd("n8n-setup start")));

    Ok(())
}
