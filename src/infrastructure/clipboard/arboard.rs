//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland). Each call opens
//! the platform clipboard for its own duration; the handle is released
//! on every path when the arboard context drops.

use async_trait::async_trait;

use crate::application::ports::{Clipboard, ClipboardError};
use crate::domain::content::ContentEntry;

/// Cross-platform clipboard adapter using arboard
pub struct ArboardClipboard;

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

fn open() -> Result<arboard::Clipboard, ClipboardError> {
    arboard::Clipboard::new().map_err(|e| ClipboardError::AccessDenied(e.to_string()))
}

/// Probe formats in fixed priority order: text, image, file list.
/// Anything present but unclassifiable becomes an Unsupported entry.
fn classify(clipboard: &mut arboard::Clipboard) -> Result<ContentEntry, ClipboardError> {
    match clipboard.get_text() {
        Ok(text) => return Ok(ContentEntry::text(text)),
        Err(arboard::Error::ContentNotAvailable) => {}
        Err(arboard::Error::ConversionFailure) => {
            return Err(ClipboardError::Decode(
                "clipboard text is not valid unicode".to_string(),
            ))
        }
        Err(e) => return Err(ClipboardError::AccessDenied(e.to_string())),
    }

    match clipboard.get_image() {
        Ok(_) => return Ok(ContentEntry::image()),
        Err(arboard::Error::ContentNotAvailable) => {}
        Err(arboard::Error::ConversionFailure) => {}
        Err(e) => return Err(ClipboardError::AccessDenied(e.to_string())),
    }

    match clipboard.get().file_list() {
        Ok(paths) => {
            let names: Vec<String> = paths
                .iter()
                .map(|p| {
                    p.file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| p.to_string_lossy().into_owned())
                })
                .collect();
            return Ok(ContentEntry::file_list(names));
        }
        Err(arboard::Error::ContentNotAvailable) => {}
        Err(e) => return Err(ClipboardError::AccessDenied(e.to_string())),
    }

    Ok(ContentEntry::unsupported())
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn read(&self) -> Result<ContentEntry, ClipboardError> {
        // arboard operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let mut clipboard = open()?;
            classify(&mut clipboard)
        })
        .await
        .map_err(|e| ClipboardError::AccessDenied(format!("Task join error: {}", e)))?
    }

    async fn write(&self, value: &str) -> Result<(), ClipboardError> {
        let value = value.to_owned();

        tokio::task::spawn_blocking(move || {
            let mut clipboard = open()?;
            clipboard
                .set_text(&value)
                .map_err(|e| ClipboardError::AccessDenied(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::AccessDenied(format!("Task join error: {}", e)))?
    }

    async fn clear(&self) -> Result<(), ClipboardError> {
        tokio::task::spawn_blocking(move || {
            let mut clipboard = open()?;
            clipboard
                .clear()
                .map_err(|e| ClipboardError::AccessDenied(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::AccessDenied(format!("Task join error: {}", e)))?
    }
}
