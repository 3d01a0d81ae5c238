//! Virtual-clock scheduler

use std::collections::BTreeMap;
use std::time::Duration;

use super::{Fired, Scheduler, TimerId, TimerKind};

/// Shortest interval period; a zero period would fire forever within one pump
const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
enum Entry {
    Timer {
        kind: TimerKind,
        deadline: Duration,
        period: Option<Duration>,
    },
    Frame {
        /// Set once a frame boundary has passed since the request
        ready: bool,
    },
}

/// Scheduler driven by explicit [`Scheduler::advance`] calls
///
/// Timers fire in deadline order (ties in arming order). An interval that
/// fell several periods behind fires once and re-arms one period from now.
/// A frame requested
/// while callbacks are being pumped fires on the following `advance`, so an
/// inertia loop runs exactly one step per display frame.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    entries: BTreeMap<TimerId, Entry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, entry: Entry) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, entry);
        id
    }

    /// Earliest expired timer, ignoring frames
    fn earliest_due_timer(&self) -> Option<TimerId> {
        self.entries
            .iter()
            .filter_map(|(id, entry)| match entry {
                Entry::Timer { deadline, .. } if *deadline <= self.now => Some((*deadline, *id)),
                _ => None,
            })
            .min()
            .map(|(_, id)| id)
    }
}

impl Scheduler for TimerQueue {
    fn now(&self) -> Duration {
        self.now
    }

    fn set_timeout(&mut self, kind: TimerKind, delay: Duration) -> TimerId {
        let deadline = self.now + delay;
        self.insert(Entry::Timer {
            kind,
            deadline,
            period: None,
        })
    }

    fn set_interval(&mut self, kind: TimerKind, period: Duration) -> TimerId {
        let period = period.max(MIN_PERIOD);
        let deadline = self.now + period;
        self.insert(Entry::Timer {
            kind,
            deadline,
            period: Some(period),
        })
    }

    fn request_frame(&mut self) -> TimerId {
        self.insert(Entry::Frame { ready: false })
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        self.entries.remove(&id).is_some()
    }

    fn is_armed(&self, id: TimerId) -> bool {
        self.entries.contains_key(&id)
    }

    fn armed_count(&self, kind: TimerKind) -> usize {
        self.entries
            .values()
            .filter(|entry| match entry {
                Entry::Timer { kind: k, .. } => *k == kind,
                Entry::Frame { .. } => kind == TimerKind::Frame,
            })
            .count()
    }

    fn advance(&mut self, now: Duration) {
        // Host clocks may jitter backwards; never rewind
        self.now = self.now.max(now);
        for entry in self.entries.values_mut() {
            if let Entry::Frame { ready } = entry {
                *ready = true;
            }
        }
    }

    fn next_due(&mut self) -> Option<Fired> {
        if let Some(id) = self.earliest_due_timer() {
            let (kind, period) = match self.entries.get(&id)? {
                Entry::Timer { kind, period, .. } => (*kind, *period),
                Entry::Frame { .. } => return None,
            };
            match period {
                Some(period) => {
                    // Overdue ticks after a stall collapse into this one
                    let now = self.now;
                    if let Some(Entry::Timer { deadline, .. }) = self.entries.get_mut(&id) {
                        *deadline += period;
                        if *deadline <= now {
                            *deadline = now + period;
                        }
                    }
                }
                None => {
                    self.entries.remove(&id);
                }
            }
            return Some(Fired { id, kind });
        }

        let id = self
            .entries
            .iter()
            .find(|(_, entry)| matches!(entry, Entry::Frame { ready: true }))
            .map(|(id, _)| *id)?;
        self.entries.remove(&id);
        Some(Fired {
            id,
            kind: TimerKind::Frame,
        })
    }
}
