//! Error types.
//!
//! Fatal conditions are modelled as [`Error`]. A lifecycle command that exits
//! non-zero is not an error: it comes back as a failed
//! [`CommandOutput`](crate::core::compose::CommandOutput) and the dispatcher
//! reports it.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// A file the action depends on does not exist
    #[error(transparent)]
    Missing(#[from] MissingPrerequisite),

    /// Docker or docker compose cannot be used on this host
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// Settings file problems
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Interactive prompt failed
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Required input files.
#[derive(Error, Debug)]
pub enum MissingPrerequisite {
    #[error("env.template not found")]
    EnvTemplate,

    #[error("init-user.sql.template not found")]
    SqlTemplate,

    #[error(".env file not found")]
    EnvFile,
}

/// External tooling availability.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Docker is not installed or not accessible")]
    DockerUnavailable,

    #[error("Docker Compose is not installed or not accessible")]
    ComposeUnavailable,
}

/// Settings file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
