//! Command-line interface.

pub mod backup;
pub mod completions;
pub mod env;
pub mod lifecycle;
pub mod output;
pub mod setup;
pub mod start;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::core::compose::{self, CommandOutput, Compose, Runner};
use crate::core::layout::Layout;
use crate::core::prompt::Confirm;
use crate::error::Result;

/// n8n-setup - bootstrap and manage an n8n Docker deployment.
#[derive(Parser)]
#[command(
    name = "n8n-setup",
    about = "Bootstrap and manage an n8n + PostgreSQL Docker deployment",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create directories, generate .env and the SQL init script
    Setup,

    /// Start services (requires .env)
    Start,

    /// Stop services
    Stop,

    /// Show service status
    Status,

    /// Follow service logs
    Logs,

    /// Dump the database into backups/
    Backup,

    /// Generate .env and the SQL init script only
    Env,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// What a command runs against.
pub struct Context<'a> {
    pub layout: Layout,
    pub runner: &'a dyn Runner,
    pub confirm: &'a dyn Confirm,
}

/// Execute a command.
///
/// Everything except `env` and `completions` checks for Docker first.
pub fn execute(command: Command, ctx: &Context<'_>) -> Result<()> {
    debug!(?command, root = %ctx.layout.root().display(), "executing");

    match command {
        Command::Env => env::execute(ctx),
        Command::Completions { shell } => completions::execute(shell),
        Command::Setup => {
            docker(ctx)?;
            setup::execute(ctx)
        }
        Command::Start => start::execute(ctx, &docker(ctx)?),
        Command::Stop => lifecycle::stop(&docker(ctx)?),
        Command::Status => lifecycle::status(&docker(ctx)?),
        Command::Logs => lifecycle::logs(&docker(ctx)?),
        Command::Backup => backup::execute(ctx, &docker(ctx)?),
    }
}

/// Check Docker and resolve the compose variant for this run.
fn docker<'a>(ctx: &Context<'a>) -> Result<Compose<'a>> {
    let compose = compose::check_docker(ctx.runner)?;
    output::success(&format!(
        "Docker and Docker Compose are available (using '{}')",
        compose.variant()
    ));
    Ok(compose)
}

/// Report a failed lifecycle command on stdout. Never fatal.
fn report_failure(what: &str, out: &CommandOutput) {
    let detail = out.stderr.trim();
    if detail.is_empty() {
        output::failure(what);
    } else {
        output::failure(&format!("{}: {}", what, detail));
    }
}
