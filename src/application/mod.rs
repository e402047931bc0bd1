//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod clear;
pub mod gate;
pub mod ports;
pub mod recall;
pub mod watcher;

// Re-export use cases
pub use clear::clear_history;
pub use gate::ClipboardGate;
pub use recall::{
    HoverTarget, RecallController, RecallFeedback, RecallOptions, ALREADY_COPIED_STATUS,
};
pub use watcher::{ClipboardWatcher, WatcherConfig, WatcherEvent, WatcherHandle};
