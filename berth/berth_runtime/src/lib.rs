//! Berth Runtime - bootstrap orchestration for the Berth launcher
//!
//! This crate provides the launcher's moving parts: the bootstrap
//! orchestrator state machine, the window lifecycle binding, configuration,
//! and the concrete stack controller and readiness prober. Prompting,
//! install remediation, and the window surface stay behind the trait seams
//! in `berth_core` so GUI, console, and test backends are interchangeable.

pub mod bootstrap;
pub mod config;
pub mod probe;
pub mod stack;
pub mod window;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use berth_core::traits::{
    InstallAssistant, ReadinessProber, StackController, UserPrompt, WindowShell,
};
use tracing::info;

use bootstrap::BootstrapOrchestrator;
use config::LauncherConfig;
use probe::HttpReadinessProber;
use stack::CommandStackController;
use window::WindowBinding;

/// Launcher facade that wires configuration and collaborators into a
/// window-bound orchestrator.
pub struct Launcher {
    /// Validated launcher configuration.
    pub config: LauncherConfig,

    /// Lifecycle binding holding the owned window and the orchestrator.
    pub binding: Arc<WindowBinding>,
}

impl Launcher {
    /// Create a launcher with the production stack controller and HTTP
    /// prober. The presentation collaborators come from the caller.
    pub fn new(
        config: LauncherConfig,
        prompt: Arc<dyn UserPrompt>,
        installer: Arc<dyn InstallAssistant>,
        shell: Arc<dyn WindowShell>,
    ) -> Result<Self> {
        config.validate()?;

        let stack: Arc<dyn StackController> =
            Arc::new(CommandStackController::new(config.stack.clone()));
        let prober: Arc<dyn ReadinessProber> = Arc::new(HttpReadinessProber::new(
            Duration::from_millis(config.readiness.poll_interval_ms),
        )?);

        Ok(Self::with_collaborators(
            config, stack, prober, prompt, installer, shell,
        ))
    }

    /// Create a launcher over fully substituted collaborators. Used by
    /// headless runs and tests; the state machine is unchanged.
    pub fn with_collaborators(
        config: LauncherConfig,
        stack: Arc<dyn StackController>,
        prober: Arc<dyn ReadinessProber>,
        prompt: Arc<dyn UserPrompt>,
        installer: Arc<dyn InstallAssistant>,
        shell: Arc<dyn WindowShell>,
    ) -> Self {
        info!("Initializing Berth launcher for {}", config.target_url);

        let orchestrator = Arc::new(BootstrapOrchestrator::new(
            config.target_url.clone(),
            Duration::from_secs(config.readiness.max_wait_secs),
            stack,
            prober,
            prompt,
            installer,
            shell.clone(),
        ));

        let binding = Arc::new(WindowBinding::new(
            shell,
            orchestrator,
            config.keep_alive_on_close,
        ));

        Self { config, binding }
    }
}
