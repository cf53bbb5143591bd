//! Berth launcher, console edition.
//!
//! Loads the configuration, wires console-backed collaborators into the
//! runtime, runs one bootstrap pass, and exits with the outcome's code.

mod console;

use std::process;
use std::sync::Arc;

use anyhow::Result;
use berth_core::types::BootstrapOutcome;
use berth_runtime::config::LauncherConfig;
use berth_runtime::Launcher;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use console::{AutoPrompt, ConsoleInstallAssistant, ConsolePrompt, HeadlessShell};

/// Berth - launcher for a local containerized backend
#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Path to the launcher configuration file (JSON)
    #[clap(long)]
    config: Option<String>,

    /// Answer every dialog with its terminating choice instead of reading
    /// stdin; for scripted runs
    #[clap(long)]
    headless: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => process::exit(code),
        Err(err) => {
            error!("Launcher failed: {:#}", err);
            process::exit(70);
        }
    }
}

async fn run(cli: Cli) -> Result<i32> {
    let config = LauncherConfig::load(cli.config.as_deref()).await?;

    let prompt: Arc<dyn berth_core::traits::UserPrompt> = if cli.headless {
        Arc::new(AutoPrompt)
    } else {
        Arc::new(ConsolePrompt)
    };

    let installer = Arc::new(ConsoleInstallAssistant::new(
        config.install.download_url.clone(),
    ));
    let shell = Arc::new(HeadlessShell::new());

    let launcher = Launcher::new(config, prompt, installer, shell)?;

    let outcome = launcher.binding.handle_process_ready().await?;

    if matches!(outcome, Some(BootstrapOutcome::LaunchApp)) && launcher.binding.keep_alive_on_close()
    {
        info!("Platform policy keeps the process alive once the window closes");
    }

    // The first trigger always runs a pass; None cannot happen here.
    let code = outcome.map(|o| o.exit_code()).unwrap_or(0);

    info!("Bootstrap pass finished with exit code {}", code);

    Ok(code)
}
