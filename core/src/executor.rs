//! # Scan Executor
//!
//! Runs the scanner as an external process, captures its output as text
//! and enforces the wall-clock bound. One invocation attempt per request,
//! never a retry.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use portsage_common::error::{PipelineError, Result};

use crate::command::ScanCommand;

/// Spawns the scan and waits for it to finish within `limit`.
///
/// Returns captured stdout on success. Expiry terminates the process
/// (`kill_on_drop` reaps it as soon as the wait future is dropped) and is
/// reported as [`PipelineError::ScanTimeout`]; a non-zero exit or a failed
/// spawn surfaces as [`PipelineError::ScanProcessFailure`] carrying the
/// diagnostic text.
pub async fn run(cmd: &ScanCommand, limit: Duration) -> Result<String> {
    debug!(command = %cmd, limit_secs = limit.as_secs(), "spawning scanner");

    let child = Command::new(&cmd.program)
        .args(&cmd.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| PipelineError::ScanProcessFailure {
            stderr: format!("failed to spawn {}: {e}", cmd.program),
        })?;

    let output = match timeout(limit, child.wait_with_output()).await {
        Err(_) => return Err(PipelineError::ScanTimeout(limit)),
        Ok(Err(e)) => {
            return Err(PipelineError::ScanProcessFailure {
                stderr: format!("failed to collect scanner output: {e}"),
            });
        }
        Ok(Ok(output)) => output,
    };

    if !output.status.success() {
        return Err(PipelineError::ScanProcessFailure {
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    debug!(bytes = output.stdout.len(), "scanner finished");
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
