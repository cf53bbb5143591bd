//! Console-backed collaborators.
//!
//! These stand in for the GUI layer when the launcher runs from a terminal:
//! prompts go to stdin/stdout, the install offer prints the download page,
//! and the window shell only logs what a real shell would render.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use async_trait::async_trait;
use berth_core::traits::{InstallAssistant, UserPrompt, WindowShell};
use berth_core::types::{Notice, PromptKind, PromptRequest, UserDecision, WindowId};
use tracing::{info, warn};

fn kind_marker(kind: PromptKind) -> &'static str {
    match kind {
        PromptKind::Info => "ℹ️ ",
        PromptKind::Warning => "⚠️ ",
        PromptKind::Error => "❌",
    }
}

/// Reads one trimmed line from stdin without blocking the runtime.
async fn read_line() -> Result<String> {
    tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        Ok(line.trim().to_string())
    })
    .await
    .context("Stdin reader task failed")?
}

/// Interactive prompt on stdin/stdout.
pub struct ConsolePrompt;

#[async_trait]
impl UserPrompt for ConsolePrompt {
    async fn ask(&self, request: PromptRequest) -> Result<UserDecision> {
        println!("\n{} {}", kind_marker(request.kind), request.title);
        println!("{}", request.message);

        loop {
            print!("[1] {}  [2] {} > ", request.accept.0, request.dismiss.0);
            io::stdout().flush().ok();

            match read_line().await?.as_str() {
                "1" => return Ok(request.accept.1),
                "2" => return Ok(request.dismiss.1),
                other => println!("Unrecognized choice: {:?}", other),
            }
        }
    }

    async fn notify(&self, notice: Notice) -> Result<()> {
        println!("\n{} {}", kind_marker(notice.kind), notice.title);
        println!("{}", notice.message);
        print!("Press Enter to continue...");
        io::stdout().flush().ok();

        read_line().await?;

        Ok(())
    }
}

/// Non-interactive prompt for scripted runs: every dialog resolves to its
/// dismissive choice, every notice is logged and acknowledged.
pub struct AutoPrompt;

#[async_trait]
impl UserPrompt for AutoPrompt {
    async fn ask(&self, request: PromptRequest) -> Result<UserDecision> {
        warn!(
            "Headless run, answering '{}' with '{}'",
            request.title, request.dismiss.0
        );
        Ok(request.dismiss.1)
    }

    async fn notify(&self, notice: Notice) -> Result<()> {
        warn!("Headless run, acknowledging '{}': {}", notice.title, notice.message);
        Ok(())
    }
}

/// Prints the remediation path for a missing runtime.
pub struct ConsoleInstallAssistant {
    download_url: String,
}

impl ConsoleInstallAssistant {
    pub fn new(download_url: impl Into<String>) -> Self {
        Self {
            download_url: download_url.into(),
        }
    }
}

#[async_trait]
impl InstallAssistant for ConsoleInstallAssistant {
    async fn offer_install(&self) -> Result<()> {
        println!("\n❌ No container runtime was found on this machine.");
        println!("Install one, then launch again:");
        println!("    {}", self.download_url);
        Ok(())
    }
}

/// Window shell with no window: creation and navigation are logged only.
pub struct HeadlessShell {
    next_id: AtomicU64,
}

impl HeadlessShell {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for HeadlessShell {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WindowShell for HeadlessShell {
    async fn create_window(&self) -> Result<WindowId> {
        let window = WindowId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        info!("Created headless {}", window);
        Ok(window)
    }

    async fn navigate(&self, window: WindowId, url: &str) -> Result<()> {
        info!("{} now displays {}", window, url);
        println!("\nBackend is ready: {}", url);
        Ok(())
    }
}
