//! Launch error taxonomy.
//!
//! Every collaborator failure is mapped to exactly one of these kinds at the
//! orchestrator boundary before any user-visible action is taken. Only
//! `RuntimeNotRunning` is user-recoverable in-process; every other kind
//! requires the user to act outside the application and relaunch.

use std::time::Duration;

use thiserror::Error;

/// Errors that terminate (or, for `RuntimeNotRunning`, may restart) a
/// bootstrap pass.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("container runtime is not installed")]
    RuntimeMissing,

    #[error("container runtime is installed but not running")]
    RuntimeNotRunning,

    #[error("backend stack failed to start")]
    StackStartFailed,

    #[error("backend service did not answer within {waited:?}")]
    ReadinessTimeout { waited: Duration },

    #[error("unexpected launcher error: {0}")]
    Unexpected(anyhow::Error),
}

impl From<anyhow::Error> for LaunchError {
    fn from(err: anyhow::Error) -> Self {
        Self::Unexpected(err)
    }
}

impl LaunchError {
    /// Process exit code for this failure kind.
    ///
    /// Codes are stable so that supervising scripts can distinguish "install
    /// the runtime" from "inspect the stack logs" without parsing output.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::RuntimeMissing => 10,
            Self::RuntimeNotRunning => 11,
            Self::StackStartFailed => 12,
            Self::ReadinessTimeout { .. } => 13,
            Self::Unexpected(_) => 70,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let errors = [
            LaunchError::RuntimeMissing,
            LaunchError::RuntimeNotRunning,
            LaunchError::StackStartFailed,
            LaunchError::ReadinessTimeout {
                waited: Duration::from_secs(30),
            },
            LaunchError::Unexpected(anyhow::anyhow!("boom")),
        ];

        let mut codes: Vec<i32> = errors.iter().map(|e| e.exit_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn unexpected_wraps_anyhow() {
        let err: LaunchError = anyhow::anyhow!("collaborator blew up").into();
        assert_eq!(err.exit_code(), 70);
        assert!(err.to_string().contains("collaborator blew up"));
    }
}
