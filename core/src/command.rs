//! # Scan Command Builder
//!
//! Maps a validated intent onto the exact argument vector handed to the
//! external scanner. Flag order is part of the contract: scans must be
//! reproducible from their printed command line.

use std::fmt;

use portsage_common::config::Config;
use portsage_common::error::{PipelineError, Result};
use portsage_common::intent::{ScanIntent, ScanMode};

/// An external-process invocation, program plus ordered arguments.
/// Built once per intent and consumed once by the executor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for ScanCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program, self.args.join(" "))
    }
}

/// Flags per mode, target always appended last.
fn mode_args(mode: ScanMode) -> &'static [&'static str] {
    match mode {
        ScanMode::Web => &["-T4", "-p", "80,443,8080", "-sV"],
        ScanMode::Full => &["-T4", "-sV", "-sC"],
        ScanMode::Quick => &["-T4", "-F"],
    }
}

/// Builds the scanner invocation for one intent.
///
/// The extractor guarantees a non-empty validated target, but the builder
/// checks again rather than trusting its caller.
pub fn build(intent: &ScanIntent, cfg: &Config) -> Result<ScanCommand> {
    if intent.target.is_empty() {
        return Err(PipelineError::InvalidCommand);
    }

    let mut args: Vec<String> = mode_args(intent.mode)
        .iter()
        .map(|arg| arg.to_string())
        .collect();
    args.push(intent.target.clone());

    Ok(ScanCommand {
        program: cfg.scanner_path.clone(),
        args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config::new(Some("nmap".to_string()), true, 0)
    }

    fn intent(target: &str, mode: ScanMode) -> ScanIntent {
        ScanIntent {
            target: target.to_string(),
            mode,
        }
    }

    #[test]
    fn web_mode_restricts_ports_and_detects_services() {
        let cmd = build(&intent("192.168.1.10", ScanMode::Web), &test_config()).unwrap();
        assert_eq!(cmd.program, "nmap");
        assert_eq!(cmd.args, ["-T4", "-p", "80,443,8080", "-sV", "192.168.1.10"]);
    }

    #[test]
    fn full_mode_enables_scripts_without_port_restriction() {
        let cmd = build(&intent("10.0.0.5", ScanMode::Full), &test_config()).unwrap();
        assert_eq!(cmd.args, ["-T4", "-sV", "-sC", "10.0.0.5"]);
    }

    #[test]
    fn quick_mode_uses_fast_profile() {
        let cmd = build(&intent("10.0.0.5", ScanMode::Quick), &test_config()).unwrap();
        assert_eq!(cmd.args, ["-T4", "-F", "10.0.0.5"]);
    }

    #[test]
    fn target_is_always_the_last_argument() {
        for mode in [ScanMode::Quick, ScanMode::Web, ScanMode::Full] {
            let cmd = build(&intent("172.16.0.9", mode), &test_config()).unwrap();
            assert_eq!(cmd.args.last().map(String::as_str), Some("172.16.0.9"));
        }
    }

    #[test]
    fn empty_target_is_rejected() {
        let result = build(&intent("", ScanMode::Quick), &test_config());
        assert!(matches!(result, Err(PipelineError::InvalidCommand)));
    }

    #[test]
    fn display_renders_the_full_invocation() {
        let cmd = build(&intent("192.168.1.10", ScanMode::Web), &test_config()).unwrap();
        assert_eq!(cmd.to_string(), "nmap -T4 -p 80,443,8080 -sV 192.168.1.10");
    }
}
