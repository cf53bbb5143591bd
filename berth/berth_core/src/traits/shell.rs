//! Window shell seam.

use anyhow::Result;
use async_trait::async_trait;

use crate::types::WindowId;

/// The GUI layer's window surface.
///
/// Window creation, placeholder styling, and rendering are plumbing outside
/// the orchestrator; it only ever creates a window and later replaces its
/// displayed content with the live target URL.
#[async_trait]
pub trait WindowShell: Send + Sync {
    /// Create the application window, initially showing a placeholder page.
    async fn create_window(&self) -> Result<WindowId>;

    /// Replace the window's displayed content with `url`.
    async fn navigate(&self, window: WindowId, url: &str) -> Result<()>;
}
