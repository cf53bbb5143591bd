//! Command-backed stack controller.
//!
//! Maps three generic observations to a [`RuntimeStatus`]: is the runtime
//! program on the PATH, does the daemon-check command exit zero, does the
//! stack-up command exit zero. The commands themselves are opaque operator
//! configuration; the controller only reads exit status.
//!
//! The controller holds no state between calls, so `start` is idempotent
//! and safe to call repeatedly across user retries.

use std::env;
use std::path::Path;
use std::process::Stdio;

use anyhow::{Context, Result};
use async_trait::async_trait;
use berth_core::traits::StackController;
use berth_core::types::RuntimeStatus;
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::StackConfig;

/// Stack controller that shells out to configured commands.
pub struct CommandStackController {
    config: StackConfig,
}

impl CommandStackController {
    pub fn new(config: StackConfig) -> Self {
        Self { config }
    }

    /// Run an argv vector, reporting whether it exited zero.
    ///
    /// A command that cannot be spawned at all is an unmodeled failure and
    /// propagates as an error.
    async fn run(&self, argv: &[String]) -> Result<bool> {
        let program = argv.first().context("Empty command in stack config")?;

        debug!("Running {:?}", argv);

        let status = Command::new(program)
            .args(&argv[1..])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .context(format!("Failed to spawn {}", program))?;

        debug!("{} exited with {}", program, status);

        Ok(status.success())
    }
}

#[async_trait]
impl StackController for CommandStackController {
    async fn start(&self) -> Result<RuntimeStatus> {
        if !program_on_path(&self.config.runtime_program) {
            info!("{} not found on PATH", self.config.runtime_program);
            return Ok(RuntimeStatus::RuntimeMissing);
        }

        if !self.run(&self.config.daemon_check).await? {
            info!("Runtime daemon check failed");
            return Ok(RuntimeStatus::RuntimeNotRunning);
        }

        if !self.run(&self.config.up).await? {
            info!("Stack up command failed");
            return Ok(RuntimeStatus::StackStartFailed);
        }

        Ok(RuntimeStatus::Ready)
    }
}

/// Whether `program` resolves to an existing file, either directly or via
/// the PATH.
fn program_on_path(program: &str) -> bool {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return candidate.is_file();
    }

    env::var_os("PATH")
        .map(|paths| {
            env::split_paths(&paths).any(|dir| {
                let full = dir.join(program);
                full.is_file()
            })
        })
        .unwrap_or(false)
}
