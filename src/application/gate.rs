//! Serialized clipboard access
//!
//! One lock covers every read, write, and clear so a recall write can
//! never interleave with a poll read. The gate also remembers the last
//! value written on behalf of a recall, letting the watcher recognize
//! its own write when the next poll observes it.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::application::ports::{Clipboard, ClipboardError};
use crate::domain::content::ContentEntry;

/// Shared handle to the clipboard, cloneable across tasks.
#[derive(Clone)]
pub struct ClipboardGate {
    inner: Arc<Mutex<GateInner>>,
}

struct GateInner {
    provider: Box<dyn Clipboard>,
    last_written: Option<String>,
}

impl ClipboardGate {
    /// Wrap a clipboard provider behind the shared lock
    pub fn new(provider: Box<dyn Clipboard>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(GateInner {
                provider,
                last_written: None,
            })),
        }
    }

    /// Read and classify the current clipboard content
    pub async fn read(&self) -> Result<ContentEntry, ClipboardError> {
        let inner = self.inner.lock().await;
        inner.provider.read().await
    }

    /// Write text to the clipboard, recording it as a self-write
    pub async fn write(&self, value: &str) -> Result<(), ClipboardError> {
        let mut inner = self.inner.lock().await;
        inner.provider.write(value).await?;
        inner.last_written = Some(value.to_string());
        Ok(())
    }

    /// Empty the clipboard
    pub async fn clear(&self) -> Result<(), ClipboardError> {
        let mut inner = self.inner.lock().await;
        inner.provider.clear().await?;
        inner.last_written = None;
        Ok(())
    }

    /// Whether `value` matches the last value this gate wrote.
    /// A poll observing it is a self-triggered observation, not a
    /// genuine external change.
    pub async fn is_self_write(&self, value: &str) -> bool {
        let inner = self.inner.lock().await;
        inner.last_written.as_deref() == Some(value)
    }
}
