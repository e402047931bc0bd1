//! Paste keystroke adapters

mod enigo;
mod noop;

pub use self::enigo::EnigoPaste;
pub use noop::NoOpPaste;
