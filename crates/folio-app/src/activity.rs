//! Slide change log shown in the status bar

use parking_lot::Mutex;
use tracing::info;

use folio_core::{SlideChange, SlideSubscriber};

/// Remembers the latest slide change and logs every one
#[derive(Default)]
pub struct ActivityLog {
    last: Mutex<Option<SlideChange>>,
}

impl ActivityLog {
    /// Human-readable summary of the latest change
    pub fn summary(&self) -> String {
        match &*self.last.lock() {
            Some(change) => format!(
                "Slide {} of {} ({:?})",
                change.current + 1,
                change.slide_count,
                change.cause
            ),
            None => "Drag, use the arrows or the keyboard to browse".to_string(),
        }
    }
}

impl SlideSubscriber for ActivityLog {
    fn on_slide_change(&self, change: &SlideChange) {
        info!(
            previous = change.previous,
            current = change.current,
            cause = ?change.cause,
            "slide changed"
        );
        *self.last.lock() = Some(change.clone());
    }
}
