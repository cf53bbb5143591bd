//! # Berth Core
//!
//! `berth_core` provides the shared building blocks for the Berth launcher:
//! the data model of a bootstrap pass, the launch error taxonomy, and the
//! collaborator traits the orchestrator calls into.
//!
//! The launcher itself lives in `berth_runtime`; this crate deliberately
//! contains no I/O so that every collaborator seam can be substituted with a
//! headless or test backend.

pub mod error;
pub mod traits;
pub mod types;

pub use error::LaunchError;
pub use types::{
    BootstrapOutcome, Notice, PromptKind, PromptRequest, ReadinessReport, RuntimeStatus,
    UserDecision, WindowId,
};
