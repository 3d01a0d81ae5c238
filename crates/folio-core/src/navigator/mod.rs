use std::time::Duration;
use serde::{Serialize, Deserialize};

use crate::easing::Easing;

mod engine;
mod input;
mod state;
mod subscriber;
mod surface;

pub use engine::SlideNavigator;
pub use input::InputEvent;
pub use state::{Direction, NavigatorState};
pub use subscriber::SlideSubscriber;
pub use surface::{MemorySurface, SlideSurface};

/// Previous/next arrow controls of a slideshow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    Prev,
    Next,
}

/// How a new slide offset should be applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Jump straight to the offset (drag and inertia updates)
    Immediate,
    /// Tween to the offset
    Eased { duration: Duration, easing: Easing },
}

/// What triggered a slide change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideChangeCause {
    Drag,
    Autoplay,
    Keyboard,
    Control,
    Programmatic,
}

/// A committed change of the active slide
#[derive(Debug, Clone, PartialEq)]
pub struct SlideChange {
    pub previous: usize,
    pub current: usize,
    pub slide_count: usize,
    pub cause: SlideChangeCause,
}

/// Snapshot of a navigator for display
#[derive(Debug, Clone)]
pub struct NavigatorContext {
    pub state: NavigatorState,
    pub slide_count: usize,
    pub autoplay_active: bool,
}
