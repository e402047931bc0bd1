//! Copy key-combination edge detection

mod combo;

pub use combo::{CopyComboTracker, KeyEdge};
