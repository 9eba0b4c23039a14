//! Fixed phrasing for the summary request.
//!
//! The wording here is contract: the system instruction, the sampling
//! temperature and the no-open-ports sentence are all observable behavior
//! and covered by tests.

use portsage_common::finding::PortFinding;
use portsage_common::intent::ScanMode;

pub const SYSTEM_PROMPT: &str = "You are a concise cybersecurity assistant";

/// Low-variance sampling for reproducible phrasing.
pub const TEMPERATURE: f32 = 0.4;

/// The answer for a scan that found nothing, produced without any remote
/// call.
pub fn no_open_ports(target: &str, mode: ScanMode) -> String {
    format!("For {target}: no open ports were found in {mode} mode.")
}

/// One bullet line per finding, joined with newlines.
pub fn render_findings(findings: &[PortFinding]) -> String {
    findings
        .iter()
        .map(PortFinding::as_bullet)
        .collect::<Vec<String>>()
        .join("\n")
}

/// The user turn of the summary request.
pub fn summary_request(target: &str, mode: ScanMode, findings: &[PortFinding]) -> String {
    format!(
        "You are a cybersecurity analyst. Based on the nmap scan results, summarize the findings for:\n\
Target: {target}\n\
Mode: {mode}\n\
Open Ports and Services: {ports}\n\
\n\
Explain in simple language:\n\
1) What these ports/services are usually used for.\n\
2) Which ports are more sensitive from security perspective.\n\
3) 2-3 safe next steps a beginner could try (non-destructive) to learn more about the target.\n\
Use short bullets and simple language suitable for a beginner.",
        ports = render_findings(findings),
    )
}
