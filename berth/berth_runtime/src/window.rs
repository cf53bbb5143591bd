//! Window lifecycle binding.
//!
//! Owns the single window handle and re-invokes the orchestrator from the
//! two external trigger points: process-ready (once per process lifetime)
//! and reactivation (fires only when zero windows are open). A close
//! observer clears the owned handle so reactivation can detect "zero
//! windows open" correctly.
//!
//! A pass-in-flight guard drops a trigger that fires while a pass is still
//! awaiting a prompt or probe; concurrent passes against the same window are
//! never run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use berth_core::traits::WindowShell;
use berth_core::types::{BootstrapOutcome, WindowId};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::bootstrap::BootstrapOrchestrator;

/// Binds the orchestrator to the shell's window lifecycle.
pub struct WindowBinding {
    shell: Arc<dyn WindowShell>,

    orchestrator: Arc<BootstrapOrchestrator>,

    /// The single owned window handle. Single writer: this binding.
    window: Mutex<Option<WindowId>>,

    /// Set while an orchestration pass is running.
    pass_in_flight: AtomicBool,

    /// Platform policy: keep the process alive when all windows are closed.
    keep_alive_on_close: bool,
}

impl WindowBinding {
    /// Create a binding over the shell and orchestrator.
    pub fn new(
        shell: Arc<dyn WindowShell>,
        orchestrator: Arc<BootstrapOrchestrator>,
        keep_alive_on_close: bool,
    ) -> Self {
        Self {
            shell,
            orchestrator,
            window: Mutex::new(None),
            pass_in_flight: AtomicBool::new(false),
            keep_alive_on_close,
        }
    }

    /// The currently open window, if any.
    pub fn current_window(&self) -> Option<WindowId> {
        *self.window.lock()
    }

    /// Platform policy pass-through: whether the process stays alive once
    /// every window has been closed.
    pub fn keep_alive_on_close(&self) -> bool {
        self.keep_alive_on_close
    }

    /// Process-ready trigger. Fires exactly once per process lifetime:
    /// creates the window and runs one orchestration pass.
    pub async fn handle_process_ready(&self) -> Result<Option<BootstrapOutcome>> {
        self.run_guarded().await
    }

    /// Reactivation trigger. Creates a window and runs a pass only when zero
    /// windows are currently open; otherwise it is a no-op.
    pub async fn handle_reactivate(&self) -> Result<Option<BootstrapOutcome>> {
        if self.current_window().is_some() {
            debug!("Reactivation with a window already open, nothing to do");
            return Ok(None);
        }

        self.run_guarded().await
    }

    /// Close observer. Clears the owned handle iff it matches `id`.
    pub fn handle_window_closed(&self, id: WindowId) {
        let mut window = self.window.lock();

        match *window {
            Some(current) if current == id => {
                info!("{} closed", id);
                *window = None;
            }
            _ => {
                warn!("Close event for unknown {}", id);
            }
        }
    }

    /// Run one pass under the in-flight guard. A trigger that fires while a
    /// pass is already running is dropped, not queued.
    async fn run_guarded(&self) -> Result<Option<BootstrapOutcome>> {
        if self.pass_in_flight.swap(true, Ordering::SeqCst) {
            warn!("Bootstrap pass already in flight, dropping trigger");
            return Ok(None);
        }

        let result = self.run_pass().await;

        self.pass_in_flight.store(false, Ordering::SeqCst);

        result.map(Some)
    }

    /// Reuse the open window or create one, then run the orchestrator.
    async fn run_pass(&self) -> Result<BootstrapOutcome> {
        let window = match self.current_window() {
            Some(window) => window,
            None => {
                let window = self.shell.create_window().await?;
                *self.window.lock() = Some(window);
                info!("Created {}", window);
                window
            }
        };

        Ok(self.orchestrator.run_pass(window).await)
    }
}
