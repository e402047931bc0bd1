//! History clearing use case

use crate::application::gate::ClipboardGate;
use crate::application::ports::ClipboardError;
use crate::domain::history::HistoryStore;

/// Empty the history and best-effort clear the clipboard.
///
/// The store is emptied unconditionally; a clipboard clear failure is
/// returned for the caller to report as a transient status, never
/// propagated further.
pub async fn clear_history(
    store: &mut HistoryStore,
    gate: &ClipboardGate,
) -> Result<(), ClipboardError> {
    store.clear();
    gate.clear().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::application::ports::Clipboard;
    use crate::domain::content::ContentEntry;

    #[derive(Clone, Default)]
    struct CountingClipboard {
        clears: Arc<AtomicUsize>,
        fail_clear: bool,
    }

    #[async_trait]
    impl Clipboard for CountingClipboard {
        async fn read(&self) -> Result<ContentEntry, ClipboardError> {
            Ok(ContentEntry::text(""))
        }

        async fn write(&self, _value: &str) -> Result<(), ClipboardError> {
            Ok(())
        }

        async fn clear(&self) -> Result<(), ClipboardError> {
            self.clears.fetch_add(1, Ordering::SeqCst);
            if self.fail_clear {
                return Err(ClipboardError::AccessDenied("busy".to_string()));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn clears_store_and_clipboard_once() {
        let clipboard = CountingClipboard::default();
        let gate = ClipboardGate::new(Box::new(clipboard.clone()));
        let mut store = HistoryStore::new(20);
        store.observe(ContentEntry::text("alpha"));
        store.observe(ContentEntry::text("beta"));

        assert!(clear_history(&mut store, &gate).await.is_ok());

        assert!(store.is_empty());
        assert_eq!(clipboard.clears.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn store_is_emptied_even_when_clipboard_clear_fails() {
        let clipboard = CountingClipboard {
            fail_clear: true,
            ..Default::default()
        };
        let gate = ClipboardGate::new(Box::new(clipboard.clone()));
        let mut store = HistoryStore::new(20);
        store.observe(ContentEntry::text("alpha"));

        let result = clear_history(&mut store, &gate).await;

        assert!(result.is_err());
        assert!(store.is_empty());
        assert_eq!(clipboard.clears.load(Ordering::SeqCst), 1);
    }
}
