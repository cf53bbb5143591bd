//! Collaborator trait definitions.
//!
//! The orchestrator contains no I/O of its own; everything it touches —
//! starting the stack, probing the backend, prompting the user, offering a
//! runtime install, driving the window — goes through these seams so that
//! headless and test backends can be substituted without changing the state
//! machine.

pub mod install;
pub mod probe;
pub mod prompt;
pub mod shell;
pub mod stack;

pub use install::InstallAssistant;
pub use probe::ReadinessProber;
pub use prompt::UserPrompt;
pub use shell::WindowShell;
pub use stack::StackController;
