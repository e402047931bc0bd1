//! Cross-platform paste keystroke adapter using enigo
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use async_trait::async_trait;

use crate::application::ports::{PasteError, PasteInjector};

/// Cross-platform paste adapter using enigo
pub struct EnigoPaste;

impl EnigoPaste {
    /// Create a new enigo paste adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnigoPaste {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasteInjector for EnigoPaste {
    async fn send_paste(&self) -> Result<(), PasteError> {
        // enigo operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            use enigo::{Direction, Enigo, Key, Keyboard, Settings};

            let mut enigo = Enigo::new(&Settings::default())
                .map_err(|e| PasteError::SendFailed(format!("Failed to create enigo: {}", e)))?;

            #[cfg(target_os = "macos")]
            let modifier = Key::Meta;
            #[cfg(not(target_os = "macos"))]
            let modifier = Key::Control;

            enigo
                .key(modifier, Direction::Press)
                .map_err(|e| PasteError::SendFailed(e.to_string()))?;
            let result = enigo
                .key(Key::Unicode('v'), Direction::Click)
                .map_err(|e| PasteError::SendFailed(e.to_string()));
            // Release the modifier even when the letter press failed.
            enigo
                .key(modifier, Direction::Release)
                .map_err(|e| PasteError::SendFailed(e.to_string()))?;
            result
        })
        .await
        .map_err(|e| PasteError::SendFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paste_creates_successfully() {
        let _paste = EnigoPaste::new();
    }

    #[test]
    fn paste_default_creates() {
        let _paste = EnigoPaste::default();
    }
}
