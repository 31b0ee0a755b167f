//! Docker Compose bridge.
//!
//! Detects which compose spelling the host supports and issues lifecycle
//! commands through it. Processes are started through the [`Runner`] trait
//! so the dispatcher can be exercised without Docker.
//!
//! ## Variants
//!
//! - `docker compose` (the CLI plugin), probed first with `docker compose version`
//! - `docker-compose` (standalone), probed with `docker-compose --version`

use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::core::config::BackupSettings;
use crate::error::{Result, ToolError};

/// Captured result of an external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A command that could not be run at all.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: reason.into(),
        }
    }
}

/// Process runner.
///
/// Implementations never return an error for a command that fails or
/// cannot be spawned; that is reported through [`CommandOutput::success`].
pub trait Runner {
    /// Run to completion, capturing stdout and stderr.
    fn output(&self, program: &str, args: &[&str]) -> CommandOutput;

    /// Run with the terminal inherited. Only `success` is meaningful.
    fn stream(&self, program: &str, args: &[&str]) -> CommandOutput;

    /// Run with stdout written to `path`, capturing stderr.
    fn to_file(&self, program: &str, args: &[&str], path: &Path) -> CommandOutput;
}

/// Runs real processes, resolving programs on `PATH`.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    fn command(program: &str, args: &[&str]) -> std::result::Result<Command, String> {
        let path = which::which(program).map_err(|e| format!("{}: {}", program, e))?;
        trace!(program = %path.display(), ?args, "spawning");
        let mut cmd = Command::new(path);
        cmd.args(args);
        Ok(cmd)
    }
}

impl Runner for SystemRunner {
    fn output(&self, program: &str, args: &[&str]) -> CommandOutput {
        let mut cmd = match Self::command(program, args) {
            Ok(cmd) => cmd,
            Err(reason) => return CommandOutput::failed(reason),
        };

        match cmd.stdin(Stdio::null()).output() {
            Ok(output) => CommandOutput {
                success: output.status.success(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
            Err(e) => CommandOutput::failed(format!("failed to run {}: {}", program, e)),
        }
    }

    fn stream(&self, program: &str, args: &[&str]) -> CommandOutput {
        let mut cmd = match Self::command(program, args) {
            Ok(cmd) => cmd,
            Err(reason) => return CommandOutput::failed(reason),
        };

        #[cfg(unix)]
        let _interrupt = interrupt::Ignored::install(&mut cmd);

        match cmd.status() {
            Ok(status) => CommandOutput {
                success: status.success(),
                ..CommandOutput::default()
            },
            Err(e) => CommandOutput::failed(format!("failed to run {}: {}", program, e)),
        }
    }

    fn to_file(&self, program: &str, args: &[&str], path: &Path) -> CommandOutput {
        let mut cmd = match Self::command(program, args) {
            Ok(cmd) => cmd,
            Err(reason) => return CommandOutput::failed(reason),
        };

        let file = match File::create(path) {
            Ok(file) => file,
            Err(e) => {
                return CommandOutput::failed(format!("cannot create {}: {}", path.display(), e))
            }
        };

        match cmd
            .stdin(Stdio::null())
            .stdout(Stdio::from(file))
            .stderr(Stdio::piped())
            .output()
        {
            Ok(output) => CommandOutput {
                success: output.status.success(),
                stdout: String::new(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
            Err(e) => CommandOutput::failed(format!("failed to run {}: {}", program, e)),
        }
    }
}

#[cfg(unix)]
mod interrupt {
    //! Ctrl-C handling for streamed commands.

    use std::os::unix::process::CommandExt;
    use std::process::Command;

    /// Ignores SIGINT in this process until dropped.
    ///
    /// The child gets the default disposition back before exec, so Ctrl-C
    /// stops the child and this process carries on.
    pub struct Ignored {
        previous: libc::sighandler_t,
    }

    impl Ignored {
        pub fn install(cmd: &mut Command) -> Self {
            // SAFETY: signal(2) is async-signal-safe, as pre_exec requires
            unsafe {
                cmd.pre_exec(|| {
                    libc::signal(libc::SIGINT, libc::SIG_DFL);
                    Ok(())
                });
            }

            let previous = unsafe { libc::signal(libc::SIGINT, libc::SIG_IGN) };
            let previous = if previous == libc::SIG_ERR {
                libc::SIG_DFL
            } else {
                previous
            };
            Self { previous }
        }
    }

    impl Drop for Ignored {
        fn drop(&mut self) {
            unsafe {
                libc::signal(libc::SIGINT, self.previous);
            }
        }
    }
}

/// The two accepted compose spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// `docker compose`
    Plugin,
    /// `docker-compose`
    Standalone,
}

impl Variant {
    /// Detection order.
    pub const ALL: [Variant; 2] = [Variant::Plugin, Variant::Standalone];

    pub fn program(self) -> &'static str {
        match self {
            Self::Plugin => "docker",
            Self::Standalone => "docker-compose",
        }
    }

    /// Arguments between the program and the compose subcommand.
    fn prefix(self) -> &'static [&'static str] {
        match self {
            Self::Plugin => &["compose"],
            Self::Standalone => &[],
        }
    }

    fn version_args(self) -> &'static [&'static str] {
        match self {
            Self::Plugin => &["compose", "version"],
            Self::Standalone => &["--version"],
        }
    }

    /// Display name for user-facing messages
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Plugin => "docker compose",
            Self::Standalone => "docker-compose",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A detected compose command bound to a runner.
pub struct Compose<'r> {
    runner: &'r dyn Runner,
    variant: Variant,
}

impl<'r> Compose<'r> {
    pub fn new(runner: &'r dyn Runner, variant: Variant) -> Self {
        Self { runner, variant }
    }

    /// Probe the variants in order and bind the first that answers.
    pub fn detect(runner: &'r dyn Runner) -> Option<Self> {
        Variant::ALL.into_iter().find_map(|variant| {
            let probe = runner.output(variant.program(), variant.version_args());
            debug!(%variant, available = probe.success, "probed compose variant");
            probe.success.then(|| Self::new(runner, variant))
        })
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    fn args<'a>(&self, subcommand: &[&'a str]) -> Vec<&'a str> {
        self.variant
            .prefix()
            .iter()
            .copied()
            .chain(subcommand.iter().copied())
            .collect()
    }

    /// `up -d`
    pub fn up(&self) -> CommandOutput {
        self.runner
            .output(self.variant.program(), &self.args(&["up", "-d"]))
    }

    /// `down`
    pub fn down(&self) -> CommandOutput {
        self.runner
            .output(self.variant.program(), &self.args(&["down"]))
    }

    /// `ps`
    pub fn ps(&self) -> CommandOutput {
        self.runner.output(self.variant.program(), &self.args(&["ps"]))
    }

    /// `logs -f`, streamed until the user interrupts.
    pub fn logs(&self) -> CommandOutput {
        self.runner
            .stream(self.variant.program(), &self.args(&["logs", "-f"]))
    }

    /// `exec -T <service> pg_dump -U <user> <database>` into `path`.
    pub fn dump(&self, backup: &BackupSettings, path: &Path) -> CommandOutput {
        let args = self.args(&[
            "exec",
            "-T",
            backup.service.as_str(),
            "pg_dump",
            "-U",
            backup.user.as_str(),
            backup.database.as_str(),
        ]);
        self.runner.to_file(self.variant.program(), &args, path)
    }
}

/// Verify Docker is installed and resolve the compose variant.
///
/// # Errors
///
/// Returns `ToolError::DockerUnavailable` if `docker --version` fails, or
/// `ToolError::ComposeUnavailable` if neither compose variant answers.
pub fn check_docker(runner: &dyn Runner) -> Result<Compose<'_>> {
    let docker = runner.output("docker", &["--version"]);
    if !docker.success {
        debug!(stderr = %docker.stderr.trim(), "docker probe failed");
        return Err(ToolError::DockerUnavailable.into());
    }

    Compose::detect(runner).ok_or_else(|| ToolError::ComposeUnavailable.into())
}
