//! # Request Pipeline
//!
//! One utterance in, one report out: extract → build → execute → parse →
//! summarize, strictly in that order. Neither scan failure path reaches
//! the parser, and nothing here outlives the request.

use tracing::{debug, info};

use portsage_common::config::Config;
use portsage_common::error::{PipelineError, Result};
use portsage_common::finding::PortFinding;
use portsage_common::intent::{self, ScanMode};
use portsage_common::summarize::Summarizer;

use crate::{command, executor, parser};

/// Everything one request produced, handed to the terminal layer whole.
#[derive(Debug)]
pub struct ScanReport {
    pub target: String,
    pub mode: ScanMode,
    /// The exact invocation that ran, for reproducibility.
    pub command_line: String,
    /// Raw captured scanner output, for the excerpt view.
    pub raw_output: String,
    pub findings: Vec<PortFinding>,
    pub summary: String,
}

/// Stage narration callback, invoked with short human-readable messages.
pub type Progress<'a> = &'a (dyn Fn(&str) + Send + Sync);

fn narrate(progress: Option<Progress<'_>>, msg: &str) {
    if let Some(callback) = progress {
        callback(msg);
    }
}

/// Runs the full pipeline for one utterance.
pub async fn run(
    utterance: &str,
    cfg: &Config,
    summarizer: &dyn Summarizer,
    progress: Option<Progress<'_>>,
) -> Result<ScanReport> {
    let intent = intent::extract(utterance).ok_or(PipelineError::UnrecognizedIntent)?;
    debug!(target = %intent.target, mode = %intent.mode, "intent extracted");

    let cmd = command::build(&intent, cfg)?;
    info!(command = %cmd, "scan command assembled");

    narrate(progress, &format!("scanning {} ({} mode)", intent.target, intent.mode));
    let raw_output = executor::run(&cmd, cfg.scan_timeout).await?;

    let findings = parser::parse(&raw_output);
    debug!(count = findings.len(), "open ports parsed");

    narrate(progress, "requesting summary");
    let summary = summarizer
        .summarize(&intent.target, intent.mode, &findings)
        .await?;

    Ok(ScanReport {
        target: intent.target,
        mode: intent.mode,
        command_line: cmd.to_string(),
        raw_output,
        findings,
        summary,
    })
}
