//! Stack controller seam.

use anyhow::Result;
use async_trait::async_trait;

use crate::types::RuntimeStatus;

/// Detects the container runtime and drives the backend stack to running.
///
/// The controller is a black box to the orchestrator: one call, one
/// [`RuntimeStatus`]. Implementations must be idempotent — calling `start`
/// again after a prior failure must not corrupt state, and it is safe to
/// call repeatedly across user retries.
///
/// An `Err` return is an unmodeled failure; the orchestrator maps it to the
/// unexpected-error terminal path.
#[async_trait]
pub trait StackController: Send + Sync {
    /// Probe the runtime and start the stack, reporting one status.
    async fn start(&self) -> Result<RuntimeStatus>;
}
