//! Paste-simulation port interface

use async_trait::async_trait;
use thiserror::Error;

/// Paste injection errors
#[derive(Debug, Clone, Error)]
pub enum PasteError {
    #[error("Failed to send paste keystroke: {0}")]
    SendFailed(String),
}

/// Port for simulating the paste key-combination in the focused window.
///
/// Fire-and-forget from the caller's point of view: recall treats the
/// outcome as best-effort.
#[async_trait]
pub trait PasteInjector: Send + Sync {
    /// Send the paste key-combination.
    async fn send_paste(&self) -> Result<(), PasteError>;
}
