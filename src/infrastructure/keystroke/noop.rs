//! No-op paste adapter for watch-only operation

use async_trait::async_trait;

use crate::application::ports::{PasteError, PasteInjector};

/// Paste adapter that does nothing
pub struct NoOpPaste;

impl NoOpPaste {
    /// Create a new no-op paste adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpPaste {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasteInjector for NoOpPaste {
    async fn send_paste(&self) -> Result<(), PasteError> {
        Ok(())
    }
}
