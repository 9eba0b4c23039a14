//! One open network service discovered by the scan.

/// A single open-port line from the scanner output.
///
/// `extra` carries whatever version/banner text followed the service name
/// and may be empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortFinding {
    /// Port and protocol label as printed by the scanner, e.g. `80/tcp`.
    pub port_protocol: String,
    /// Service name from the scanner's service column, e.g. `http`.
    pub service: String,
    /// Remaining descriptive text, e.g. `Apache httpd 2.4.52`.
    pub extra: String,
}

impl PortFinding {
    /// Renders the finding as one bullet line for prompts and terminals.
    pub fn as_bullet(&self) -> String {
        format!("- {} {}: {}", self.port_protocol, self.service, self.extra)
    }
}
