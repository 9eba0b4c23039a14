//! # Scanner Output Parser
//!
//! A tolerant line-oriented scraper over the scanner's port table. It knows
//! nothing about columnar alignment beyond whitespace splitting; lines that
//! do not match the expected shape are skipped, never an error.

use portsage_common::finding::PortFinding;

/// Minimum whitespace-separated fields for a usable port line:
/// `port/proto state service`.
const MIN_FIELDS: usize = 3;

/// Extracts open-port findings from raw captured text, in input order.
pub fn parse(raw: &str) -> Vec<PortFinding> {
    raw.lines().filter_map(parse_line).collect()
}

/// One line qualifies only if it mentions `/tcp` and `open` (case
/// sensitive). Closed and filtered ports are silently dropped; only
/// reachable services are surfaced.
fn parse_line(line: &str) -> Option<PortFinding> {
    if !line.contains("/tcp") || !line.contains("open") {
        return None;
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    // fields[1] is the state column, already proven by the predicate and
    // not retained.
    Some(PortFinding {
        port_protocol: fields[0].to_string(),
        service: fields[2].to_string(),
        extra: fields[3..].join(" "),
    })
}
