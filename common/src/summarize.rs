//! The seam between the pipeline and whatever produces the final text.
//!
//! The pipeline only depends on this trait; the real implementation lives
//! in `portsage-ai` and talks to a remote service, tests substitute a stub.

use async_trait::async_trait;

use crate::error::Result;
use crate::finding::PortFinding;
use crate::intent::ScanMode;

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produces the human-readable explanation of the findings for one
    /// target and mode. An empty findings slice must be answered locally
    /// with a fixed sentence, without any remote call.
    async fn summarize(
        &self,
        target: &str,
        mode: ScanMode,
        findings: &[PortFinding],
    ) -> Result<String>;
}
