use colored::*;
use portsage_common::finding::PortFinding;

use crate::terminal::colors;

/// Key/value rows for one finding's tree view. The state column never
/// appears here; everything rendered was already proven open.
pub fn finding_details(finding: &PortFinding) -> Vec<(String, ColoredString)> {
    let mut details: Vec<(String, ColoredString)> = vec![(
        String::from("Service"),
        finding.service.clone().color(colors::SERVICE),
    )];

    if !finding.extra.is_empty() {
        details.push((String::from("Info"), finding.extra.clone().normal()));
    }

    details
}
