//! ClipRecall - clipboard history watcher with hover-to-paste recall
//!
//! This crate watches the system clipboard for changes, keeps a bounded,
//! deduplicated, most-recent-first history, and exposes a hover-dwell
//! recall action that writes a historical value back to the clipboard
//! and simulates a paste keystroke.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Content classification, the history store, the copy
//!   key-combination edge detector, and the hover-dwell state machine
//! - **Application**: Use cases and port interfaces (traits) — the
//!   serialized clipboard gate, the change-detection watcher, and the
//!   recall controller
//! - **Infrastructure**: Adapter implementations (arboard, enigo, XDG
//!   config storage)
//! - **CLI**: Command-line interface and the watch-loop runner
//!
//! Presentation is an external collaborator: a UI renders
//! [`domain::history::HistoryStore::snapshot`] and feeds pointer
//! motion/leave events into [`application::RecallController`], draining
//! its feedback channel for status text and per-item indicators.

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
