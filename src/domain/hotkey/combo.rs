//! Edge-triggered copy-combination tracker
//!
//! Consumes raw key edges reported by an external hook and detects the
//! "letter pressed while modifier held" combination. Detection is
//! edge-triggered on the letter press, not on the modifier being held.

/// Raw key transition reported by the external key-event source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEdge {
    /// The modifier (Ctrl) went down
    ModifierDown,
    /// The modifier (Ctrl) went up
    ModifierUp,
    /// A character key was pressed
    Key(char),
}

/// Tracks modifier state and fires on each combination edge.
#[derive(Debug)]
pub struct CopyComboTracker {
    letter: char,
    modifier_held: bool,
}

impl CopyComboTracker {
    /// Track the default copy combination (modifier + 'c')
    pub fn new() -> Self {
        Self::with_letter('c')
    }

    /// Track a custom letter
    pub fn with_letter(letter: char) -> Self {
        Self {
            letter,
            modifier_held: false,
        }
    }

    /// Feed one key edge; returns true when the combination fired.
    pub fn observe(&mut self, edge: KeyEdge) -> bool {
        match edge {
            KeyEdge::ModifierDown => {
                self.modifier_held = true;
                false
            }
            KeyEdge::ModifierUp => {
                self.modifier_held = false;
                false
            }
            KeyEdge::Key(c) => self.modifier_held && c.eq_ignore_ascii_case(&self.letter),
        }
    }
}

impl Default for CopyComboTracker {
    fn default() -> Self {
        Self::new()
    }
}
