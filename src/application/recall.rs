//! Hover-triggered recall use case
//!
//! Consumes pointer motion/leave events from the presentation layer,
//! applies the dwell threshold, and on a completed dwell writes the
//! hovered value back to the clipboard and simulates the paste
//! key-combination. Feedback (status text, per-item indicator, timed
//! reset) is emitted on a channel drained by the loop that renders.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::application::gate::ClipboardGate;
use crate::application::ports::PasteInjector;
use crate::domain::config::AppConfig;
use crate::domain::content::truncate_chars;
use crate::domain::recall::DwellTracker;

/// Status text when the hovered value is already the last recalled one
pub const ALREADY_COPIED_STATUS: &str = "Content already copied.";

/// Characters of the recalled value shown in the status line
pub const STATUS_PREVIEW_CHARS: usize = 30;

/// The item under the pointer: presentation row key plus the full value
#[derive(Debug, Clone)]
pub struct HoverTarget {
    pub key: String,
    pub value: String,
}

impl HoverTarget {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Feedback events for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecallFeedback {
    /// A value was written back and pasted; indicator active for `key`
    Recalled { key: String, status: String },
    /// The value was already on the clipboard; indicator still activates
    AlreadyCopied { key: String, status: String },
    /// The write-back failed; transient status only
    WriteFailed { key: String, status: String },
    /// Pointer left the surface; status clears immediately
    StatusCleared,
    /// The reset armed for `(key, seq)` is due; confirm with
    /// [`RecallController::apply_reset`] before clearing the indicator
    ResetDue { key: String, seq: u64 },
}

/// Recall timing and behavior options
#[derive(Debug, Clone)]
pub struct RecallOptions {
    /// Continuous hover required before a recall fires
    pub dwell: Duration,
    /// Delay before status/indicator feedback resets
    pub feedback_reset: Duration,
    /// Whether to send the paste key-combination after a write-back
    pub paste: bool,
}

impl Default for RecallOptions {
    fn default() -> Self {
        Self {
            dwell: Duration::from_millis(1000),
            feedback_reset: Duration::from_millis(2000),
            paste: true,
        }
    }
}

impl RecallOptions {
    /// Build options from application config
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            dwell: config.dwell_or_default(),
            feedback_reset: config.feedback_reset_or_default(),
            paste: config.paste_or_default(),
        }
    }
}

/// Hover/dwell recall state machine.
///
/// `last_recalled` persists across hovers until the next successful
/// write-back. Each completed dwell arms a feedback reset scoped to its
/// item; a newer dwell on the same item replaces the pending reset
/// (stale resets are discarded by `apply_reset`), and a reset fires
/// even when the pointer has since moved elsewhere.
pub struct RecallController<P: PasteInjector> {
    gate: ClipboardGate,
    paste: P,
    options: RecallOptions,
    dwell: DwellTracker,
    last_recalled: Option<String>,
    resets: HashMap<String, u64>,
    next_seq: u64,
    events: mpsc::UnboundedSender<RecallFeedback>,
}

impl<P: PasteInjector> RecallController<P> {
    /// Create a controller emitting feedback on the returned channel
    pub fn new(
        gate: ClipboardGate,
        paste: P,
        options: RecallOptions,
    ) -> (Self, mpsc::UnboundedReceiver<RecallFeedback>) {
        let (events, feedback) = mpsc::unbounded_channel();
        let dwell = DwellTracker::new(options.dwell);
        (
            Self {
                gate,
                paste,
                options,
                dwell,
                last_recalled: None,
                resets: HashMap::new(),
                next_seq: 0,
                events,
            },
            feedback,
        )
    }

    /// The last value written back by a recall, if any
    pub fn last_recalled(&self) -> Option<&str> {
        self.last_recalled.as_deref()
    }

    /// Feed a pointer motion event over `target` at `now`.
    ///
    /// When the dwell threshold is crossed, performs the recall (or the
    /// already-copied short-circuit) and arms the feedback reset.
    pub async fn on_motion(&mut self, target: &HoverTarget, now: Instant) {
        if !self.dwell.on_motion(&target.key, now) {
            return;
        }

        let feedback = if self.last_recalled.as_deref() == Some(target.value.as_str()) {
            // Skip the write and paste entirely.
            RecallFeedback::AlreadyCopied {
                key: target.key.clone(),
                status: ALREADY_COPIED_STATUS.to_string(),
            }
        } else {
            match self.gate.write(&target.value).await {
                Ok(()) => {
                    if self.options.paste {
                        // Best-effort; the outcome is not observed.
                        let _ = self.paste.send_paste().await;
                    }
                    self.last_recalled = Some(target.value.clone());
                    RecallFeedback::Recalled {
                        key: target.key.clone(),
                        status: format!(
                            "Copied: {}",
                            truncate_chars(&target.value, STATUS_PREVIEW_CHARS)
                        ),
                    }
                }
                Err(err) => RecallFeedback::WriteFailed {
                    key: target.key.clone(),
                    status: format!("Recall failed: {}", err),
                },
            }
        };

        self.arm_reset(&target.key);
        let _ = self.events.send(feedback);
    }

    /// Pointer left the whole surface: dwell tracking and status clear
    /// immediately; already-armed resets still fire.
    pub fn on_leave(&mut self) {
        self.dwell.on_leave();
        let _ = self.events.send(RecallFeedback::StatusCleared);
    }

    /// Handle a due reset.
    ///
    /// Returns true when it is still the current reset for its item;
    /// the caller then clears the status and reverts the indicator. A
    /// stale sequence (replaced by a newer dwell) returns false.
    pub fn apply_reset(&mut self, key: &str, seq: u64) -> bool {
        match self.resets.get(key) {
            Some(&current) if current == seq => {
                self.resets.remove(key);
                self.dwell.on_reset(key);
                true
            }
            _ => false,
        }
    }

    fn arm_reset(&mut self, key: &str) {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.resets.insert(key.to_string(), seq);

        let events = self.events.clone();
        let key = key.to_string();
        let delay = self.options.feedback_reset;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(RecallFeedback::ResetDue { key, seq });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex as StdMutex};

    use crate::application::ports::{Clipboard, ClipboardError, PasteError};
    use crate::domain::content::ContentEntry;

    #[derive(Clone, Default)]
    struct RecordingClipboard {
        writes: Arc<StdMutex<Vec<String>>>,
        fail_writes: bool,
    }

    impl RecordingClipboard {
        fn failing() -> Self {
            Self {
                writes: Arc::default(),
                fail_writes: true,
            }
        }

        fn writes(&self) -> Vec<String> {
            self.writes.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Clipboard for RecordingClipboard {
        async fn read(&self) -> Result<ContentEntry, ClipboardError> {
            Ok(ContentEntry::text(
                self.writes.lock().unwrap().last().cloned().unwrap_or_default(),
            ))
        }

        async fn write(&self, value: &str) -> Result<(), ClipboardError> {
            if self.fail_writes {
                return Err(ClipboardError::AccessDenied("busy".to_string()));
            }
            self.writes.lock().unwrap().push(value.to_string());
            Ok(())
        }

        async fn clear(&self) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct CountingPaste {
        count: Arc<AtomicUsize>,
    }

    impl CountingPaste {
        fn count(&self) -> usize {
            self.count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PasteInjector for CountingPaste {
        async fn send_paste(&self) -> Result<(), PasteError> {
            self.count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    const DWELL: Duration = Duration::from_millis(1000);

    fn controller(
        clipboard: &RecordingClipboard,
        paste: &CountingPaste,
    ) -> (
        RecallController<CountingPaste>,
        mpsc::UnboundedReceiver<RecallFeedback>,
    ) {
        let gate = ClipboardGate::new(Box::new(clipboard.clone()));
        RecallController::new(
            gate,
            paste.clone(),
            RecallOptions {
                dwell: DWELL,
                feedback_reset: Duration::from_millis(20),
                paste: true,
            },
        )
    }

    async fn dwell_on(
        ctl: &mut RecallController<CountingPaste>,
        target: &HoverTarget,
        start: Instant,
    ) {
        ctl.on_motion(target, start).await;
        ctl.on_motion(target, start + DWELL).await;
    }

    #[tokio::test]
    async fn short_dwell_then_switch_triggers_nothing() {
        let clipboard = RecordingClipboard::default();
        let paste = CountingPaste::default();
        let (mut ctl, mut feedback) = controller(&clipboard, &paste);

        let start = Instant::now();
        ctl.on_motion(&HoverTarget::new("row-1", "alpha"), start).await;
        ctl.on_motion(
            &HoverTarget::new("row-2", "beta"),
            start + Duration::from_millis(900),
        )
        .await;

        assert!(clipboard.writes().is_empty());
        assert_eq!(paste.count(), 0);
        assert!(feedback.try_recv().is_err());
    }

    #[tokio::test]
    async fn completed_dwell_recalls_exactly_once() {
        let clipboard = RecordingClipboard::default();
        let paste = CountingPaste::default();
        let (mut ctl, mut feedback) = controller(&clipboard, &paste);

        let target = HoverTarget::new("row-1", "beta");
        let start = Instant::now();
        dwell_on(&mut ctl, &target, start).await;

        assert_eq!(clipboard.writes(), vec!["beta"]);
        assert_eq!(paste.count(), 1);
        assert_eq!(ctl.last_recalled(), Some("beta"));

        match feedback.recv().await {
            Some(RecallFeedback::Recalled { key, status }) => {
                assert_eq!(key, "row-1");
                assert_eq!(status, "Copied: beta");
            }
            other => panic!("expected Recalled, got {:?}", other),
        }

        // Continued hovering over the recalled item stays inert.
        ctl.on_motion(&target, start + DWELL * 3).await;
        assert_eq!(clipboard.writes(), vec!["beta"]);
        assert_eq!(paste.count(), 1);
    }

    #[tokio::test]
    async fn status_preview_is_truncated() {
        let clipboard = RecordingClipboard::default();
        let paste = CountingPaste::default();
        let (mut ctl, mut feedback) = controller(&clipboard, &paste);

        let long = "x".repeat(45);
        let target = HoverTarget::new("row-1", long.clone());
        dwell_on(&mut ctl, &target, Instant::now()).await;

        match feedback.recv().await {
            Some(RecallFeedback::Recalled { status, .. }) => {
                assert_eq!(status, format!("Copied: {}...", "x".repeat(30)));
            }
            other => panic!("expected Recalled, got {:?}", other),
        }
        // Dedup/recall comparison still uses the full value.
        assert_eq!(ctl.last_recalled(), Some(long.as_str()));
    }

    #[tokio::test]
    async fn second_dwell_on_last_recalled_short_circuits() {
        let clipboard = RecordingClipboard::default();
        let paste = CountingPaste::default();
        let (mut ctl, mut feedback) = controller(&clipboard, &paste);

        let target = HoverTarget::new("row-1", "beta");
        let start = Instant::now();
        dwell_on(&mut ctl, &target, start).await;
        let first = feedback.recv().await;
        assert!(matches!(first, Some(RecallFeedback::Recalled { .. })));

        // Cycle the item back to idle, then dwell again on the same value.
        let due = wait_for_reset(&mut feedback).await;
        assert!(ctl.apply_reset(&due.0, due.1));

        let later = start + DWELL * 4;
        dwell_on(&mut ctl, &target, later).await;

        assert_eq!(clipboard.writes(), vec!["beta"]); // no second write
        assert_eq!(paste.count(), 1); // no second paste
        match next_non_reset(&mut feedback).await {
            RecallFeedback::AlreadyCopied { key, status } => {
                assert_eq!(key, "row-1");
                assert_eq!(status, ALREADY_COPIED_STATUS);
            }
            other => panic!("expected AlreadyCopied, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn recall_of_different_value_replaces_last_recalled() {
        let clipboard = RecordingClipboard::default();
        let paste = CountingPaste::default();
        let (mut ctl, _feedback) = controller(&clipboard, &paste);

        let start = Instant::now();
        dwell_on(&mut ctl, &HoverTarget::new("row-1", "alpha"), start).await;
        dwell_on(
            &mut ctl,
            &HoverTarget::new("row-2", "beta"),
            start + DWELL * 2,
        )
        .await;

        assert_eq!(clipboard.writes(), vec!["alpha", "beta"]);
        assert_eq!(paste.count(), 2);
        assert_eq!(ctl.last_recalled(), Some("beta"));
    }

    #[tokio::test]
    async fn reset_fires_for_its_item_and_cycles_to_idle() {
        let clipboard = RecordingClipboard::default();
        let paste = CountingPaste::default();
        let (mut ctl, mut feedback) = controller(&clipboard, &paste);

        let target = HoverTarget::new("row-1", "alpha");
        let start = Instant::now();
        dwell_on(&mut ctl, &target, start).await;
        assert!(matches!(
            feedback.recv().await,
            Some(RecallFeedback::Recalled { .. })
        ));

        let (key, seq) = wait_for_reset(&mut feedback).await;
        assert_eq!(key, "row-1");
        assert!(ctl.apply_reset(&key, seq));
        // A reset is applied at most once.
        assert!(!ctl.apply_reset(&key, seq));
    }

    #[tokio::test]
    async fn newer_dwell_replaces_pending_reset_for_same_item() {
        let clipboard = RecordingClipboard::default();
        let paste = CountingPaste::default();
        let gate = ClipboardGate::new(Box::new(clipboard.clone()));
        // Long reset delay: the first reset is still pending when the
        // second dwell completes.
        let (mut ctl, mut feedback) = RecallController::new(
            gate,
            paste.clone(),
            RecallOptions {
                dwell: DWELL,
                feedback_reset: Duration::from_millis(30),
                paste: true,
            },
        );

        let target = HoverTarget::new("row-1", "alpha");
        let start = Instant::now();
        dwell_on(&mut ctl, &target, start).await;
        assert!(matches!(
            feedback.recv().await,
            Some(RecallFeedback::Recalled { .. })
        ));

        // Detour over another item, then a second completed dwell on
        // row-1 while its first reset is still pending.
        let mut t = start + DWELL + Duration::from_millis(1);
        ctl.on_motion(&HoverTarget::new("row-2", "beta"), t).await;
        t += Duration::from_millis(1);
        dwell_on(&mut ctl, &target, t).await;
        assert!(matches!(
            next_non_reset(&mut feedback).await,
            RecallFeedback::AlreadyCopied { .. }
        ));

        // Both armed resets fire; only the newest one applies.
        let first = wait_for_reset(&mut feedback).await;
        let second = wait_for_reset(&mut feedback).await;
        let (stale, current) = if first.1 < second.1 {
            (first, second)
        } else {
            (second, first)
        };
        assert!(!ctl.apply_reset(&stale.0, stale.1));
        assert!(ctl.apply_reset(&current.0, current.1));
    }

    #[tokio::test]
    async fn failed_write_skips_paste_and_keeps_last_recalled() {
        let clipboard = RecordingClipboard::failing();
        let paste = CountingPaste::default();
        let (mut ctl, mut feedback) = controller(&clipboard, &paste);

        dwell_on(&mut ctl, &HoverTarget::new("row-1", "alpha"), Instant::now()).await;

        assert_eq!(paste.count(), 0);
        assert_eq!(ctl.last_recalled(), None);
        assert!(matches!(
            feedback.recv().await,
            Some(RecallFeedback::WriteFailed { .. })
        ));
    }

    #[tokio::test]
    async fn paste_disabled_still_writes_back() {
        let clipboard = RecordingClipboard::default();
        let paste = CountingPaste::default();
        let gate = ClipboardGate::new(Box::new(clipboard.clone()));
        let (mut ctl, _feedback) = RecallController::new(
            gate,
            paste.clone(),
            RecallOptions {
                dwell: DWELL,
                feedback_reset: Duration::from_millis(20),
                paste: false,
            },
        );

        dwell_on(&mut ctl, &HoverTarget::new("row-1", "alpha"), Instant::now()).await;

        assert_eq!(clipboard.writes(), vec!["alpha"]);
        assert_eq!(paste.count(), 0);
    }

    #[tokio::test]
    async fn leave_clears_status_but_not_armed_resets() {
        let clipboard = RecordingClipboard::default();
        let paste = CountingPaste::default();
        let (mut ctl, mut feedback) = controller(&clipboard, &paste);

        let target = HoverTarget::new("row-1", "alpha");
        dwell_on(&mut ctl, &target, Instant::now()).await;
        assert!(matches!(
            feedback.recv().await,
            Some(RecallFeedback::Recalled { .. })
        ));

        ctl.on_leave();
        assert!(matches!(
            feedback.recv().await,
            Some(RecallFeedback::StatusCleared)
        ));

        // The reset armed before the leave still fires for its item.
        let (key, seq) = wait_for_reset(&mut feedback).await;
        assert_eq!(key, "row-1");
        assert!(ctl.apply_reset(&key, seq));
    }

    async fn wait_for_reset(
        feedback: &mut mpsc::UnboundedReceiver<RecallFeedback>,
    ) -> (String, u64) {
        loop {
            match tokio::time::timeout(Duration::from_secs(2), feedback.recv()).await {
                Ok(Some(RecallFeedback::ResetDue { key, seq })) => return (key, seq),
                Ok(Some(_)) => continue,
                other => panic!("expected ResetDue, got {:?}", other),
            }
        }
    }

    async fn next_non_reset(
        feedback: &mut mpsc::UnboundedReceiver<RecallFeedback>,
    ) -> RecallFeedback {
        loop {
            match tokio::time::timeout(Duration::from_secs(2), feedback.recv()).await {
                Ok(Some(RecallFeedback::ResetDue { .. })) => continue,
                Ok(Some(event)) => return event,
                other => panic!("expected feedback, got {:?}", other),
            }
        }
    }
}
