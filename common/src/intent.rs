//! # Scan Intent Model
//!
//! Turns one free-text utterance into a validated scan intent.
//!
//! Two decisions are made here and nowhere else:
//! * **Target detection**: the first dotted-quad substring that parses as a
//!   real IPv4 address. An invalid match (octet above 255) fails the whole
//!   utterance, it does not fall through to a later match.
//! * **Mode classification**: ordered keyword rules over the lowercased
//!   utterance, first hit wins, [`ScanMode::Quick`] when nothing matches.

use std::fmt;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

use regex::Regex;

/// Which port/flag profile the scan uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanMode {
    /// Top common ports only, no service detection.
    Quick,
    /// Web ports (80, 443, 8080) with service detection.
    Web,
    /// Service detection plus default scripts across all default ports.
    Full,
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScanMode::Quick => "quick",
            ScanMode::Web => "web",
            ScanMode::Full => "full",
        };
        write!(f, "{name}")
    }
}

/// A validated `{ target, mode }` pair derived from user text.
///
/// The target is kept in its textual dotted-quad form since it only ever
/// travels into an argument vector, but it is guaranteed to parse as a
/// legal [`Ipv4Addr`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanIntent {
    pub target: String,
    pub mode: ScanMode,
}

/// Keyword rules in priority order. Order is observable behavior: an
/// utterance containing both a web and a full keyword classifies as web.
const MODE_RULES: &[(ScanMode, &[&str])] = &[
    (ScanMode::Web, &["web", "http", "https", "website"]),
    (ScanMode::Full, &["full", "detailed", "all ports"]),
];

fn target_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\b(?:\d{1,3}\.){3}\d{1,3}\b").expect("dotted-quad pattern compiles")
    })
}

/// Extracts a [`ScanIntent`] from one utterance, or `None` when no usable
/// target is present. Pure function of the input text.
pub fn extract(utterance: &str) -> Option<ScanIntent> {
    let candidate = target_pattern().find(utterance)?.as_str();
    candidate.parse::<Ipv4Addr>().ok()?;

    Some(ScanIntent {
        target: candidate.to_string(),
        mode: classify_mode(utterance),
    })
}

fn classify_mode(utterance: &str) -> ScanMode {
    let lowered = utterance.to_lowercase();
    for (mode, keywords) in MODE_RULES {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return *mode;
        }
    }
    ScanMode::Quick
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
