use std::time::Duration;

use super::Control;

/// Host input delivered to a slideshow
///
/// Positions are horizontal client coordinates; `at` is the host timestamp
/// of the sample, on the same clock the scheduler is advanced with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, at: Duration },
    PointerMove { x: f32, at: Duration },
    PointerUp,
    TouchStart { x: f32, at: Duration },
    TouchMove { x: f32, at: Duration },
    TouchEnd,
    MouseEnter,
    MouseLeave,
    ArrowLeft,
    ArrowRight,
    ControlClick(Control),
}
