//! Bootstrap orchestration.
//!
//! The state machine that takes one pass from a clean runtime probe to a
//! terminal outcome, and the mapping from failure kinds to the dialogs the
//! user sees.

pub mod orchestrator;
pub mod prompts;

pub use orchestrator::BootstrapOrchestrator;
