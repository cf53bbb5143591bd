//! Install assistant seam.

use anyhow::Result;
use async_trait::async_trait;

/// Handles the "runtime not installed" remediation path.
///
/// The assistant shows its own remediation prompt and may open an external
/// download page. Its result never branches the orchestrator: after the
/// offer, the pass always terminates — there is no in-process path to retry
/// a runtime installation within the same run.
#[async_trait]
pub trait InstallAssistant: Send + Sync {
    /// Tell the user how to install the runtime.
    async fn offer_install(&self) -> Result<()>;
}
