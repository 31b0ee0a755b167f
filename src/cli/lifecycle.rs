//! Service lifecycle commands.
//!
//! Stop, status and logs. Failures are reported, never fatal.

use tracing::debug;

use crate::cli::{output, report_failure};
use crate::core::compose::Compose;
use crate::error::Result;

/// Stop services.
pub fn stop(compose: &Compose<'_>) -> Result<()> {
    output::step("stopping services");
    let out = compose.down();
    if out.success {
        output::success("services stopped successfully");
    } else {
        report_failure("failed to stop services", &out);
    }
    Ok(())
}

/// Show service status.
pub fn status(compose: &Compose<'_>) -> Result<()> {
    let out = compose.ps();
    if out.success {
        output::header("Service Status:");
        output::data(&out.stdout);
    } else {
        report_failure("failed to get status", &out);
    }
    Ok(())
}

/// Follow service logs until interrupted.
///
/// Ctrl-C ends the stream, not this process, so the exit status is 0 either
/// way. Compose writes its own errors to the inherited terminal.
pub fn logs(compose: &Compose<'_>) -> Result<()> {
    output::header("Service Logs (press Ctrl+C to exit):");
    let out = compose.logs();
    debug!(success = out.success, "log stream ended");
    Ok(())
}
