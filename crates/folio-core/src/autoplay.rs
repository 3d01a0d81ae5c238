//! Autoplay timer pair shared by both slideshow kinds

use std::time::Duration;
use tracing::debug;

use crate::schedule::{Scheduler, TimerId, TimerKind};

/// The recurring autoplay timer plus the one-shot that restarts it
///
/// Every arming call clears the previous timer of the same kind first, so at
/// most one of each is ever armed.
#[derive(Debug, Default)]
pub(crate) struct AutoplayTimers {
    interval: Option<TimerId>,
    resume: Option<TimerId>,
}

impl AutoplayTimers {
    /// (Re)start the recurring timer, dropping any pending resume
    pub fn start<S: Scheduler>(&mut self, scheduler: &mut S, period: Duration) {
        self.pause(scheduler);
        self.interval = Some(scheduler.set_interval(TimerKind::Autoplay, period));
        debug!(?period, "autoplay started");
    }

    /// Stop autoplay immediately, including any pending restart
    pub fn pause<S: Scheduler>(&mut self, scheduler: &mut S) {
        let stopped = self.interval.take().map_or(false, |id| scheduler.cancel(id));
        if let Some(id) = self.resume.take() {
            scheduler.cancel(id);
        }
        if stopped {
            debug!("autoplay paused");
        }
    }

    /// Arm the quiet-period timer, replacing a pending one
    pub fn resume_after<S: Scheduler>(&mut self, scheduler: &mut S, delay: Duration) {
        if let Some(id) = self.resume.take() {
            scheduler.cancel(id);
        }
        self.resume = Some(scheduler.set_timeout(TimerKind::Resume, delay));
    }

    /// Whether `id` is the live recurring timer
    pub fn is_tick(&self, id: TimerId) -> bool {
        self.interval == Some(id)
    }

    /// Consume a fired resume timer; false if it was superseded
    pub fn take_resume(&mut self, id: TimerId) -> bool {
        if self.resume == Some(id) {
            self.resume = None;
            true
        } else {
            false
        }
    }

    pub fn is_running<S: Scheduler>(&self, scheduler: &S) -> bool {
        self.interval.map_or(false, |id| scheduler.is_armed(id))
    }
}
