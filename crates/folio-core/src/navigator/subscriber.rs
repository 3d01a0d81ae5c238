//! Slide change subscriber trait

use super::SlideChange;

/// Trait for components that need to respond to slide changes
pub trait SlideSubscriber: Send + Sync {
    /// Called after the active slide changed
    fn on_slide_change(&self, change: &SlideChange);
}
