//! Readiness prober seam.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::types::ReadinessReport;

/// Polls a URL until it serves a response or a deadline expires.
///
/// The prober exposes exactly one coarse suspend/resume point: the caller
/// awaits up to `max_wait` and gets a pass/fail report. Individual poll
/// attempts are internal, and there is no cancellation — an issued probe
/// runs to completion. Implementations must return within `max_wait` plus
/// bounded overhead, never probing indefinitely.
#[async_trait]
pub trait ReadinessProber: Send + Sync {
    /// Wait until `url` answers, or until `max_wait` elapses.
    async fn wait_until_ready(&self, url: &str, max_wait: Duration) -> Result<ReadinessReport>;
}
