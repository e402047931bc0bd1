//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the system clipboard, keystroke injection, and
//! config storage.

pub mod clipboard;
pub mod config;
pub mod keystroke;

// Re-export adapters
pub use clipboard::{create_clipboard, ArboardClipboard};
pub use config::XdgConfigStore;
pub use keystroke::{EnigoPaste, NoOpPaste};
