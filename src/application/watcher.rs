//! Clipboard change detection
//!
//! A cancellable background task with two trigger sources funnelling
//! into one observe path: a fixed-interval poll, and the copy
//! key-combination edge (followed by a short settle delay so the
//! clipboard content is in place before the read). Observed changes are
//! posted onto an event channel drained by the loop that owns the
//! history; the watcher never mutates shared state directly.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, sleep, MissedTickBehavior};

use crate::application::gate::ClipboardGate;
use crate::application::ports::ClipboardError;
use crate::domain::content::ContentEntry;
use crate::domain::hotkey::{CopyComboTracker, KeyEdge};

/// Events posted by the watcher
#[derive(Debug)]
pub enum WatcherEvent {
    /// The clipboard holds a value that differs from the last seen one
    Observed(ContentEntry),
    /// A read failed; the loop continues at the same cadence
    ReadFailed(ClipboardError),
}

/// Watcher timing configuration
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    /// Delay between polls
    pub poll_interval: Duration,
    /// Settle delay between a copy-combination edge and its read
    pub copy_settle: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(500),
            copy_settle: Duration::from_millis(100),
        }
    }
}

/// Clipboard change detector.
///
/// Owns the last-seen raw value; comparison against it is by value
/// equality and independent of history dedup.
pub struct ClipboardWatcher {
    gate: ClipboardGate,
    config: WatcherConfig,
    combo: CopyComboTracker,
    last_seen: Option<String>,
}

impl ClipboardWatcher {
    /// Create a watcher reading through the given gate
    pub fn new(gate: ClipboardGate, config: WatcherConfig) -> Self {
        Self {
            gate,
            config,
            combo: CopyComboTracker::new(),
            last_seen: None,
        }
    }

    /// Perform one read-and-compare step.
    ///
    /// Posts `Observed` when the value changed (unless it was this
    /// process's own recall write, which only updates last-seen) and
    /// `ReadFailed` when the read errored.
    pub async fn observe_once(&mut self, events: &mpsc::Sender<WatcherEvent>) {
        match self.gate.read().await {
            Ok(entry) => {
                if self.last_seen.as_deref() == Some(entry.value()) {
                    return;
                }
                self.last_seen = Some(entry.value().to_string());
                if self.gate.is_self_write(entry.value()).await {
                    return;
                }
                let _ = events.send(WatcherEvent::Observed(entry)).await;
            }
            Err(err) => {
                let _ = events.send(WatcherEvent::ReadFailed(err)).await;
            }
        }
    }

    /// Spawn the watch loop.
    ///
    /// `key_edges` carries raw key transitions from the external hook;
    /// the copy-combination edge triggers an immediate observation
    /// regardless of poll cadence. The returned handle stops the loop.
    pub fn spawn(
        mut self,
        mut key_edges: mpsc::Receiver<KeyEdge>,
        events: mpsc::Sender<WatcherEvent>,
    ) -> WatcherHandle {
        let (stop_tx, mut stop_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut ticker = interval(self.config.poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = stop_rx.changed() => break,
                    _ = ticker.tick() => {}
                    Some(edge) = key_edges.recv() => {
                        if !self.combo.observe(edge) {
                            continue;
                        }
                        sleep(self.config.copy_settle).await;
                    }
                }
                self.observe_once(&events).await;
            }
        });

        WatcherHandle {
            stop: stop_tx,
            task,
        }
    }
}

/// Handle for stopping a spawned watcher
pub struct WatcherHandle {
    stop: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl WatcherHandle {
    /// Signal the loop to stop and wait for it to finish
    pub async fn shutdown(self) {
        let _ = self.stop.send(true);
        let _ = self.task.await;
    }
}
