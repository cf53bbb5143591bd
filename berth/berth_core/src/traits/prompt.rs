//! User prompt seam.

use anyhow::Result;
use async_trait::async_trait;

use crate::types::{Notice, PromptRequest, UserDecision};

/// Modal dialogs shown to the user.
///
/// `ask` presents exactly two buttons and reports which was chosen; the
/// prompt's kind affects icon and severity only, never branching. `notify`
/// presents a single acknowledgement button and blocks until dismissed.
#[async_trait]
pub trait UserPrompt: Send + Sync {
    /// Show a two-choice dialog and return the chosen decision.
    async fn ask(&self, request: PromptRequest) -> Result<UserDecision>;

    /// Show a single-button notice and wait for dismissal.
    async fn notify(&self, notice: Notice) -> Result<()>;
}
