//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::content::ContentEntry;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    AccessDenied(String),

    #[error("No supported clipboard format available")]
    NoSupportedFormat,

    #[error("Failed to decode clipboard text: {0}")]
    Decode(String),
}

/// Port for shared clipboard access.
///
/// `read` probes supported formats in a fixed priority order (text,
/// then image, then file list) and returns the first one available as a
/// classified entry; when nothing is classifiable it returns an
/// `Unsupported` entry rather than an error. Implementations hold the
/// platform clipboard for the duration of a single call and release it
/// on every path.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Read and classify the current clipboard content.
    async fn read(&self) -> Result<ContentEntry, ClipboardError>;

    /// Replace the clipboard content with the given text.
    async fn write(&self, value: &str) -> Result<(), ClipboardError>;

    /// Empty the clipboard.
    async fn clear(&self) -> Result<(), ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl Clipboard for Box<dyn Clipboard> {
    async fn read(&self) -> Result<ContentEntry, ClipboardError> {
        self.as_ref().read().await
    }

    async fn write(&self, value: &str) -> Result<(), ClipboardError> {
        self.as_ref().write(value).await
    }

    async fn clear(&self) -> Result<(), ClipboardError> {
        self.as_ref().clear().await
    }
}
