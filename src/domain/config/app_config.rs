//! Application configuration value object

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::history::DEFAULT_CAPACITY;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub capacity: Option<usize>,
    pub poll_interval_ms: Option<u64>,
    pub copy_settle_ms: Option<u64>,
    pub dwell_ms: Option<u64>,
    pub feedback_reset_ms: Option<u64>,
    pub paste: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            capacity: Some(DEFAULT_CAPACITY),
            poll_interval_ms: Some(500),
            copy_settle_ms: Some(100),
            dwell_ms: Some(1000),
            feedback_reset_ms: Some(2000),
            paste: Some(true),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            capacity: other.capacity.or(self.capacity),
            poll_interval_ms: other.poll_interval_ms.or(self.poll_interval_ms),
            copy_settle_ms: other.copy_settle_ms.or(self.copy_settle_ms),
            dwell_ms: other.dwell_ms.or(self.dwell_ms),
            feedback_reset_ms: other.feedback_reset_ms.or(self.feedback_reset_ms),
            paste: other.paste.or(self.paste),
        }
    }

    /// Get history capacity, or 20 if not set
    pub fn capacity_or_default(&self) -> usize {
        self.capacity.unwrap_or(DEFAULT_CAPACITY)
    }

    /// Get the poll interval, or 500ms if not set
    pub fn poll_interval_or_default(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.unwrap_or(500))
    }

    /// Get the post-copy settle delay, or 100ms if not set
    pub fn copy_settle_or_default(&self) -> Duration {
        Duration::from_millis(self.copy_settle_ms.unwrap_or(100))
    }

    /// Get the hover-dwell threshold, or 1000ms if not set
    pub fn dwell_or_default(&self) -> Duration {
        Duration::from_millis(self.dwell_ms.unwrap_or(1000))
    }

    /// Get the feedback reset delay, or 2000ms if not set
    pub fn feedback_reset_or_default(&self) -> Duration {
        Duration::from_millis(self.feedback_reset_ms.unwrap_or(2000))
    }

    /// Get paste setting, or true if not set
    pub fn paste_or_default(&self) -> bool {
        self.paste.unwrap_or(true)
    }
}
