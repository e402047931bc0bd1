//! History store entity

use crate::domain::content::ContentEntry;

/// Default number of entries retained
pub const DEFAULT_CAPACITY: usize = 20;

/// Ordered clipboard history, most-recent first.
///
/// Capacity-bounded and deduplicating: observing a value already present
/// anywhere in the history is a no-op (the existing entry keeps its
/// position — this is not an LRU). Equality is on the full value, never
/// on a truncated display form.
#[derive(Debug)]
pub struct HistoryStore {
    entries: Vec<ContentEntry>,
    capacity: usize,
}

impl HistoryStore {
    /// Create an empty store with the given capacity (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Record an observed entry.
    ///
    /// Inserts at the front and evicts from the back when over capacity.
    /// Empty values and values already present are ignored. Returns true
    /// when the entry was inserted.
    pub fn observe(&mut self, entry: ContentEntry) -> bool {
        if entry.is_empty() {
            return false;
        }
        if self.entries.iter().any(|e| e.value() == entry.value()) {
            return false;
        }

        self.entries.insert(0, entry);
        self.entries.truncate(self.capacity);
        true
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Ordered read-only view, most-recent first
    pub fn snapshot(&self) -> &[ContentEntry] {
        &self.entries
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries retained
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
