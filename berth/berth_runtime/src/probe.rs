//! HTTP readiness prober.
//!
//! Polls the target URL on a fixed interval until it serves a response or
//! the wait window elapses. Any HTTP response counts as an answer, whatever
//! its status; connection errors mean the service is not up yet and polling
//! continues.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use berth_core::traits::ReadinessProber;
use berth_core::types::ReadinessReport;
use tokio::time::{interval, timeout, Instant};
use tracing::debug;

/// Prober backed by plain HTTP GETs.
pub struct HttpReadinessProber {
    client: reqwest::Client,
    poll_interval: Duration,
}

impl HttpReadinessProber {
    /// Create a prober that polls every `poll_interval`.
    ///
    /// Each request is capped at the poll interval so a hung connection
    /// cannot stall the polling loop.
    pub fn new(poll_interval: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(poll_interval)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            poll_interval,
        })
    }
}

#[async_trait]
impl ReadinessProber for HttpReadinessProber {
    async fn wait_until_ready(&self, url: &str, max_wait: Duration) -> Result<ReadinessReport> {
        let started = Instant::now();

        let answered = timeout(max_wait, async {
            let mut ticker = interval(self.poll_interval);

            loop {
                ticker.tick().await;

                match self.client.get(url).send().await {
                    Ok(response) => {
                        debug!("{} answered with status {}", url, response.status());
                        return;
                    }
                    Err(err) => {
                        debug!("{} not answering yet: {}", url, err);
                    }
                }
            }
        })
        .await;

        let elapsed = started.elapsed();

        Ok(match answered {
            Ok(()) => ReadinessReport::answered(elapsed),
            Err(_) => ReadinessReport::timed_out(elapsed),
        })
    }
}
