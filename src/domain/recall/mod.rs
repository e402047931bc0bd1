//! Hover-dwell state machine

mod dwell;

pub use dwell::{DwellState, DwellTracker};
