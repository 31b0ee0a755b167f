//! n8n-setup - bootstrap and manage an n8n Docker deployment.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use n8n_setup::cli::{execute, output, Cli, Context};
use n8n_setup::core::compose::SystemRunner;
use n8n_setup::core::constants;
use n8n_setup::core::layout::Layout;
use n8n_setup::core::prompt::TerminalPrompt;
use n8n_setup::error::{Error, MissingPrerequisite, ToolError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("n8n_setup=debug")
        } else {
            EnvFilter::new("n8n_setup=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let runner = SystemRunner;
    let prompt = TerminalPrompt;
    let result = Layout::current().and_then(|layout| {
        let ctx = Context {
            layout,
            runner: &runner,
            confirm: &prompt,
        };
        execute(cli.command, &ctx)
    });

    if let Err(e) = result {
        output::error(&e.to_string());
        if let Some(hint) = suggestion(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

/// Follow-up advice for fatal errors.
fn suggestion(e: &Error) -> Option<&'static str> {
    match e {
        Error::Missing(MissingPrerequisite::EnvFile) => Some("run: n8n-setup setup"),
        Error::Missing(MissingPrerequisite::EnvTemplate) => {
            Some("env.template must be in the current directory")
        }
        Error::Tool(ToolError::DockerUnavailable) if cfg!(windows) => Some(
            "install Docker Desktop for Windows and make sure it's running: https://www.docker.com/products/docker-desktop",
        ),
        Error::Tool(ToolError::ComposeUnavailable) if cfg!(windows) => {
            Some("Docker Compose should be included with Docker Desktop for Windows")
        }
        _ => None,
    }
}
