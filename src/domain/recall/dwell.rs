//! Dwell tracking entity.
//!
//! State machine per hovered item:
//!   IDLE -> DWELLING (motion over an item)
//!   DWELLING -> DWELLING (motion over a different item restarts timing)
//!   DWELLING -> RECALLED (same item held for the threshold)
//!   RECALLED -> IDLE (the item's feedback reset fires)
//!
//! Duration is computed from timestamps carried by motion events; there
//! is no timer thread. Motion over an item already in RECALLED does
//! nothing until its reset returns the cycle to IDLE.

use std::time::{Duration, Instant};

/// Current dwell state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DwellState {
    #[default]
    Idle,
    Dwelling {
        key: String,
        since: Instant,
    },
    Recalled {
        key: String,
    },
}

/// Tracks continuous pointer presence over one item at a time.
#[derive(Debug)]
pub struct DwellTracker {
    threshold: Duration,
    state: DwellState,
}

impl DwellTracker {
    /// Create a tracker firing after `threshold` of continuous hover
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            state: DwellState::Idle,
        }
    }

    /// Current state (for rendering/tests)
    pub fn state(&self) -> &DwellState {
        &self.state
    }

    /// Feed a motion event over `key` at `now`.
    ///
    /// Returns true exactly when the dwell threshold is crossed for the
    /// hovered item; the tracker then holds RECALLED for that item until
    /// `on_reset` or a hover elsewhere.
    pub fn on_motion(&mut self, key: &str, now: Instant) -> bool {
        match &self.state {
            DwellState::Idle => {
                self.state = DwellState::Dwelling {
                    key: key.to_string(),
                    since: now,
                };
                false
            }
            DwellState::Dwelling {
                key: current,
                since,
            } => {
                if current != key {
                    // Moving to another item discards the previous dwell.
                    self.state = DwellState::Dwelling {
                        key: key.to_string(),
                        since: now,
                    };
                    false
                } else if now.duration_since(*since) >= self.threshold {
                    self.state = DwellState::Recalled {
                        key: key.to_string(),
                    };
                    true
                } else {
                    false
                }
            }
            DwellState::Recalled { key: current } => {
                if current != key {
                    self.state = DwellState::Dwelling {
                        key: key.to_string(),
                        since: now,
                    };
                }
                false
            }
        }
    }

    /// Pointer left the whole surface: discard dwell tracking.
    pub fn on_leave(&mut self) {
        self.state = DwellState::Idle;
    }

    /// The feedback reset for `key` fired; return the cycle to IDLE if
    /// that item is the one currently recalled.
    pub fn on_reset(&mut self, key: &str) {
        if matches!(&self.state, DwellState::Recalled { key: current } if current == key) {
            self.state = DwellState::Idle;
        }
    }
}
