//! Bootstrap orchestrator state machine.
//!
//! One pass runs from a clean runtime probe to a terminal outcome. The
//! orchestrator issues one collaborator call at a time, suspends until it
//! resolves, and branches on the result; it performs no I/O of its own.
//!
//! Retry on a daemon-off runtime re-enters the loop from the top — a fresh,
//! independent probe with no cached progress, unbounded and unthrottled.
//! Every other failure kind is terminal.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Error;
use berth_core::error::LaunchError;
use berth_core::traits::{
    InstallAssistant, ReadinessProber, StackController, UserPrompt, WindowShell,
};
use berth_core::types::{BootstrapOutcome, Notice, RuntimeStatus, UserDecision, WindowId};
use tracing::{error, info, warn};

use super::prompts;

/// Drives one bootstrap pass against a set of collaborators.
///
/// The orchestrator holds no mutable state: two sequential passes behave
/// identically, and a user retry is nothing more than re-entering the loop.
pub struct BootstrapOrchestrator {
    /// The single fixed local address: probed for readiness, then loaded.
    target_url: String,

    /// Maximum readiness probing window per pass.
    max_wait: Duration,

    stack: Arc<dyn StackController>,
    prober: Arc<dyn ReadinessProber>,
    prompt: Arc<dyn UserPrompt>,
    installer: Arc<dyn InstallAssistant>,
    shell: Arc<dyn WindowShell>,
}

impl BootstrapOrchestrator {
    /// Create an orchestrator over the given collaborators.
    pub fn new(
        target_url: impl Into<String>,
        max_wait: Duration,
        stack: Arc<dyn StackController>,
        prober: Arc<dyn ReadinessProber>,
        prompt: Arc<dyn UserPrompt>,
        installer: Arc<dyn InstallAssistant>,
        shell: Arc<dyn WindowShell>,
    ) -> Self {
        Self {
            target_url: target_url.into(),
            max_wait,
            stack,
            prober,
            prompt,
            installer,
            shell,
        }
    }

    /// Run one orchestration pass against `window`.
    ///
    /// The pass ends in exactly one of two outcomes: the window displays the
    /// live target URL, or the process should terminate. On a user retry the
    /// loop restarts from the runtime probe; the window is reused, never
    /// recreated.
    pub async fn run_pass(&self, window: WindowId) -> BootstrapOutcome {
        loop {
            info!("Probing container runtime and starting the stack");

            let status = match self.stack.start().await {
                Ok(status) => status,
                Err(err) => return self.fail_unexpected(err).await,
            };

            info!("Stack controller reported: {}", status);

            match status {
                RuntimeStatus::RuntimeMissing => {
                    warn!("Container runtime is not installed");

                    // Notification only; whatever the user does with the
                    // offer, this path terminates.
                    if let Err(err) = self.installer.offer_install().await {
                        error!("Install assistant failed: {:#}", err);
                    }

                    return BootstrapOutcome::Terminate(LaunchError::RuntimeMissing);
                }

                RuntimeStatus::RuntimeNotRunning => {
                    warn!("Container runtime daemon is not running");

                    let decision = match self.prompt.ask(prompts::daemon_off_prompt()).await {
                        Ok(decision) => decision,
                        Err(err) => return self.fail_unexpected(err).await,
                    };

                    match decision {
                        UserDecision::Retry => {
                            info!("User chose retry, restarting the pass");
                            continue;
                        }
                        _ => {
                            info!("User chose quit");
                            return BootstrapOutcome::Terminate(LaunchError::RuntimeNotRunning);
                        }
                    }
                }

                RuntimeStatus::StackStartFailed => {
                    error!("Stack start command failed");

                    self.show_notice(prompts::stack_failed_notice()).await;

                    return BootstrapOutcome::Terminate(LaunchError::StackStartFailed);
                }

                RuntimeStatus::Ready => {
                    info!(
                        "Stack is running, waiting up to {:?} for {}",
                        self.max_wait, self.target_url
                    );

                    let report = match self
                        .prober
                        .wait_until_ready(&self.target_url, self.max_wait)
                        .await
                    {
                        Ok(report) => report,
                        Err(err) => return self.fail_unexpected(err).await,
                    };

                    if !report.ready {
                        error!("Backend did not answer within {:?}", report.elapsed);

                        self.show_notice(prompts::readiness_timeout_notice(report.elapsed))
                            .await;

                        return BootstrapOutcome::Terminate(LaunchError::ReadinessTimeout {
                            waited: report.elapsed,
                        });
                    }

                    info!("Backend answered after {:?}", report.elapsed);

                    if let Err(err) = self.shell.navigate(window, &self.target_url).await {
                        return self.fail_unexpected(err).await;
                    }

                    return BootstrapOutcome::LaunchApp;
                }
            }
        }
    }

    /// Terminal path for any unmodeled collaborator error: log the detail,
    /// show a generic notice, terminate.
    async fn fail_unexpected(&self, err: Error) -> BootstrapOutcome {
        error!("Unexpected error during bootstrap: {:#}", err);

        self.show_notice(prompts::unexpected_notice()).await;

        BootstrapOutcome::Terminate(LaunchError::Unexpected(err))
    }

    /// Show a one-button notice. A failed notice cannot branch the pass, so
    /// it is only logged.
    async fn show_notice(&self, notice: Notice) {
        if let Err(err) = self.prompt.notify(notice).await {
            error!("Failed to show notice: {:#}", err);
        }
    }
}
