use std::time::Duration;

use thiserror::Error;

/// Everything that can go wrong between reading a task and printing its
/// summary. All variants are recoverable at the prompt; the read-loop
/// reports them and keeps going.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("no scan target found in the input, expected an IPv4 address")]
    UnrecognizedIntent,

    #[error("scan command requires a non-empty target")]
    InvalidCommand,

    #[error("scan timed out after {}s", .0.as_secs())]
    ScanTimeout(Duration),

    #[error("scanner process failed: {stderr}")]
    ScanProcessFailure { stderr: String },

    #[error("summary request failed: {0}")]
    SummaryRequestFailure(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
