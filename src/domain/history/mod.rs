//! Bounded, deduplicating clipboard history

mod store;

pub use store::{HistoryStore, DEFAULT_CAPACITY};
