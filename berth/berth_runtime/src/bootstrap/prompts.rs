//! Outcome-to-prompt mapping.
//!
//! One builder per taxonomy row. Wording lives here so the state machine
//! stays free of presentation detail; no raw error text is surfaced to the
//! user, that goes to the log.

use std::time::Duration;

use berth_core::types::{Notice, PromptKind, PromptRequest, UserDecision};

/// Two-button warning for a runtime whose daemon is off. The only dialog
/// with a retry edge.
pub fn daemon_off_prompt() -> PromptRequest {
    PromptRequest {
        kind: PromptKind::Warning,
        title: "Container runtime is not running".to_string(),
        message: "The container runtime is installed but its daemon is not running. \
                  Start it, then retry."
            .to_string(),
        accept: ("Retry".to_string(), UserDecision::Retry),
        dismiss: ("Quit".to_string(), UserDecision::Quit),
    }
}

/// One-button error notice for a failed stack start.
pub fn stack_failed_notice() -> Notice {
    Notice {
        kind: PromptKind::Error,
        title: "Backend failed to start".to_string(),
        message: "The backend stack could not be started. \
                  Inspect the container logs, then relaunch."
            .to_string(),
    }
}

/// One-button error notice for a readiness window that elapsed.
pub fn readiness_timeout_notice(waited: Duration) -> Notice {
    Notice {
        kind: PromptKind::Error,
        title: "Backend did not respond".to_string(),
        message: format!(
            "The backend stack is running but did not answer within {} seconds. \
             Check the service health, then relaunch.",
            waited.as_secs()
        ),
    }
}

/// Generic one-button error notice for an unmodeled collaborator failure.
pub fn unexpected_notice() -> Notice {
    Notice {
        kind: PromptKind::Error,
        title: "Something went wrong".to_string(),
        message: "An unexpected error occurred while starting the backend. \
                  See the launcher log for details."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daemon_off_offers_retry_and_quit() {
        let prompt = daemon_off_prompt();
        assert_eq!(prompt.kind, PromptKind::Warning);
        assert_eq!(prompt.accept.1, UserDecision::Retry);
        assert_eq!(prompt.dismiss.1, UserDecision::Quit);
    }

    #[test]
    fn notices_are_errors() {
        assert_eq!(stack_failed_notice().kind, PromptKind::Error);
        assert_eq!(
            readiness_timeout_notice(Duration::from_secs(60)).kind,
            PromptKind::Error
        );
        assert_eq!(unexpected_notice().kind, PromptKind::Error);
    }

    #[test]
    fn timeout_notice_names_the_window() {
        let notice = readiness_timeout_notice(Duration::from_secs(45));
        assert!(notice.message.contains("45 seconds"));
    }
}
