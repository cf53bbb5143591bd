//! Configuration for the Berth launcher.
//!
//! Handles loading and validating launcher configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;
use tracing::{info, warn};

/// Errors that can occur in configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Readiness probing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessConfig {
    /// Maximum seconds to wait for the backend to answer
    #[serde(default = "default_max_wait_secs")]
    pub max_wait_secs: u64,

    /// Milliseconds between poll attempts
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_max_wait_secs() -> u64 {
    60
}

fn default_poll_interval_ms() -> u64 {
    500
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            max_wait_secs: default_max_wait_secs(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

/// Stack controller configuration.
///
/// The argv vectors are opaque to the launcher; it only observes exit
/// status. What the commands actually do is the operator's business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackConfig {
    /// Program whose presence on the PATH means the runtime is installed
    #[serde(default = "default_runtime_program")]
    pub runtime_program: String,

    /// Command that exits zero iff the runtime daemon is running
    #[serde(default = "default_daemon_check")]
    pub daemon_check: Vec<String>,

    /// Command that brings the stack up
    #[serde(default = "default_up")]
    pub up: Vec<String>,
}

fn default_runtime_program() -> String {
    "docker".to_string()
}

fn default_daemon_check() -> Vec<String> {
    vec!["docker".to_string(), "info".to_string()]
}

fn default_up() -> Vec<String> {
    vec![
        "docker".to_string(),
        "compose".to_string(),
        "up".to_string(),
        "-d".to_string(),
    ]
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            runtime_program: default_runtime_program(),
            daemon_check: default_daemon_check(),
            up: default_up(),
        }
    }
}

/// Install remediation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallConfig {
    /// Download page surfaced when the runtime is missing
    #[serde(default = "default_download_url")]
    pub download_url: String,
}

fn default_download_url() -> String {
    "https://docs.docker.com/get-docker/".to_string()
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            download_url: default_download_url(),
        }
    }
}

/// Launcher configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// The single fixed local address the backend serves on; probed for
    /// readiness and then loaded into the window
    #[serde(default = "default_target_url")]
    pub target_url: String,

    /// Readiness probing window
    #[serde(default)]
    pub readiness: ReadinessConfig,

    /// Stack controller commands
    #[serde(default)]
    pub stack: StackConfig,

    /// Install remediation
    #[serde(default)]
    pub install: InstallConfig,

    /// Platform policy: keep the process alive when all windows are closed
    #[serde(default)]
    pub keep_alive_on_close: bool,
}

fn default_target_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            target_url: default_target_url(),
            readiness: ReadinessConfig::default(),
            stack: StackConfig::default(),
            install: InstallConfig::default(),
            keep_alive_on_close: false,
        }
    }
}

impl LauncherConfig {
    /// Load configuration from a file, falling back to defaults.
    pub async fn load(path: Option<&str>) -> Result<Self> {
        let mut config = LauncherConfig::default();

        if let Some(path) = path {
            info!("Loading configuration from {}", path);

            if !Path::new(path).exists() {
                warn!("Configuration file not found: {}", path);
                return Ok(config);
            }

            let content = fs::read_to_string(path)
                .await
                .context(format!("Failed to read configuration file: {}", path))?;

            config = serde_json::from_str(&content)
                .context(format!("Failed to parse configuration file: {}", path))?;
        } else {
            info!("No configuration file specified, using defaults");
        }

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.target_url.is_empty() {
            return Err(ConfigError::Invalid("Target URL cannot be empty".to_string()).into());
        }

        if self.readiness.max_wait_secs == 0 {
            return Err(
                ConfigError::Invalid("Readiness wait window cannot be zero".to_string()).into(),
            );
        }

        if self.readiness.poll_interval_ms == 0 {
            return Err(
                ConfigError::Invalid("Poll interval cannot be zero".to_string()).into(),
            );
        }

        if self.stack.runtime_program.is_empty() {
            return Err(
                ConfigError::Invalid("Runtime program cannot be empty".to_string()).into(),
            );
        }

        if self.stack.daemon_check.is_empty() || self.stack.up.is_empty() {
            return Err(
                ConfigError::Invalid("Stack commands cannot be empty".to_string()).into(),
            );
        }

        Ok(())
    }
}
