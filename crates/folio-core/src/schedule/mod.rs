//! Cancellable timers and display-frame callbacks
//!
//! Slideshows never own a thread or an event loop. They arm timers through a
//! [`Scheduler`] and the host pumps due callbacks back into them once per
//! display frame.

use std::time::Duration;

mod queue;

pub use queue::TimerQueue;

/// What a timer is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Recurring autoplay advance
    Autoplay,
    /// One-shot quiet period before autoplay restarts
    Resume,
    /// Next display frame of the inertia loop
    Frame,
}

/// Handle to an armed timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub(crate) u64);

/// A timer whose deadline has passed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub id: TimerId,
    pub kind: TimerKind,
}

/// Host capability for arming and cancelling callbacks
pub trait Scheduler {
    /// Current host time
    fn now(&self) -> Duration;

    /// Fire once after `delay`
    fn set_timeout(&mut self, kind: TimerKind, delay: Duration) -> TimerId;

    /// Fire every `period` until cancelled
    fn set_interval(&mut self, kind: TimerKind, period: Duration) -> TimerId;

    /// Fire once on the next display frame
    fn request_frame(&mut self) -> TimerId;

    /// Disarm a timer, returning whether it was still armed
    fn cancel(&mut self, id: TimerId) -> bool;

    fn is_armed(&self, id: TimerId) -> bool;

    /// Number of armed timers of the given kind
    fn armed_count(&self, kind: TimerKind) -> usize;

    /// Move host time forward and start a new display frame
    fn advance(&mut self, now: Duration);

    /// Pop the next callback due at the current time, if any
    fn next_due(&mut self) -> Option<Fired>;
}
