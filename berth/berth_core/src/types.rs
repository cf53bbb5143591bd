//! Data model for one bootstrap orchestration pass.
//!
//! These types carry the results of collaborator calls back into the
//! orchestrator. None of them is persisted: every pass starts from a clean
//! runtime probe, and the only state carried across a retry is re-entering
//! the pass loop itself.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::LaunchError;

/// Condition of the container runtime and stack, as reported by one
/// `StackController::start` call.
///
/// Exactly one value is produced per invocation; there are no partial or
/// compound states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuntimeStatus {
    /// Runtime is up and the stack is running.
    Ready,

    /// The container runtime is not installed or not on the PATH.
    RuntimeMissing,

    /// The runtime is installed but its daemon is not running.
    RuntimeNotRunning,

    /// The stack start command failed.
    StackStartFailed,
}

impl fmt::Display for RuntimeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "Ready"),
            Self::RuntimeMissing => write!(f, "RuntimeMissing"),
            Self::RuntimeNotRunning => write!(f, "RuntimeNotRunning"),
            Self::StackStartFailed => write!(f, "StackStartFailed"),
        }
    }
}

/// Result of one readiness probing window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessReport {
    /// Whether the target URL answered before the window elapsed.
    pub ready: bool,

    /// How long the prober actually waited.
    pub elapsed: Duration,
}

impl ReadinessReport {
    /// Report a service that answered after `elapsed`.
    pub fn answered(elapsed: Duration) -> Self {
        Self {
            ready: true,
            elapsed,
        }
    }

    /// Report a probing window that elapsed without an answer.
    pub fn timed_out(elapsed: Duration) -> Self {
        Self {
            ready: false,
            elapsed,
        }
    }
}

/// Which of the two offered buttons the user pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserDecision {
    Retry,
    Quit,
    Confirm,
    Cancel,
}

/// Severity of a dialog. Determines icon and tone only, never branching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptKind {
    Info,
    Warning,
    Error,
}

/// A modal two-choice dialog.
///
/// Each prompt offers exactly two buttons; the collaborator returns the
/// [`UserDecision`] the buttons map to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptRequest {
    /// Severity of the dialog.
    pub kind: PromptKind,

    /// Dialog title.
    pub title: String,

    /// Body text shown to the user.
    pub message: String,

    /// Label and decision for the affirmative button.
    pub accept: (String, UserDecision),

    /// Label and decision for the dismissive button.
    pub dismiss: (String, UserDecision),
}

/// A single-button acknowledgement notice. Carries no decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Severity of the notice.
    pub kind: PromptKind,

    /// Notice title.
    pub title: String,

    /// Body text shown to the user.
    pub message: String,
}

/// Opaque handle for a shell window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(u64);

impl WindowId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// Final effect of one orchestration pass.
#[derive(Debug)]
pub enum BootstrapOutcome {
    /// The window has been pointed at the live target URL.
    LaunchApp,

    /// The pass resolved to a terminal failure; the process should exit.
    Terminate(LaunchError),
}

impl BootstrapOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::LaunchApp => 0,
            Self::Terminate(err) => err.exit_code(),
        }
    }
}
