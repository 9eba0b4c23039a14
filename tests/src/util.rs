//! Shared helpers for the integration tests: stub scanners written to the
//! temp directory and canned summarizers.

#![cfg(unix)]

use std::path::PathBuf;

use async_trait::async_trait;

use portsage_common::error::{PipelineError, Result};
use portsage_common::finding::PortFinding;
use portsage_common::intent::ScanMode;
use portsage_common::summarize::Summarizer;

/// A summarizer that never talks to the network and echoes what it was
/// given, so tests can assert which branch ran.
pub struct StubSummarizer;

#[async_trait]
impl Summarizer for StubSummarizer {
    async fn summarize(
        &self,
        target: &str,
        mode: ScanMode,
        findings: &[PortFinding],
    ) -> Result<String> {
        Ok(format!(
            "stub summary for {target} in {mode} mode with {} findings",
            findings.len()
        ))
    }
}

/// A summarizer whose remote call always fails.
pub struct FailingSummarizer;

#[async_trait]
impl Summarizer for FailingSummarizer {
    async fn summarize(&self, _: &str, _: ScanMode, _: &[PortFinding]) -> Result<String> {
        Err(PipelineError::SummaryRequestFailure(
            "stubbed network failure".to_string(),
        ))
    }
}

/// Writes an executable shell script into the temp directory and returns
/// its path. Each caller passes a distinct name so tests do not collide.
#[cfg(unix)]
pub fn stub_scanner(name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = std::env::temp_dir().join(format!("portsage-{}-{}", std::process::id(), name));
    let script = format!("#!/bin/sh\n{body}\n");
    std::fs::write(&path, script).expect("stub scanner is written");

    let mut perms = std::fs::metadata(&path).expect("stub metadata").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("stub is executable");

    path
}
