//! Single-shot timer driven by the event loop.
//!
//! Nothing runs in the background: the loop asks [`OneShotTimer::take_due`]
//! for the pending value each tick and hands it to whoever scheduled it.

use std::time::{Duration, Instant};

/// Identifies one scheduled value so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Pending<T> {
    handle: TimerHandle,
    deadline: Instant,
    value: T,
}

/// Holds at most one pending value; scheduling again replaces it.
#[derive(Debug)]
pub struct OneShotTimer<T> {
    pending: Option<Pending<T>>,
    next_id: u64,
}

impl<T> OneShotTimer<T> {
    pub fn new() -> Self {
        Self {
            pending: None,
            next_id: 0,
        }
    }

    pub fn schedule_after(&mut self, delay: Duration, value: T) -> TimerHandle {
        self.schedule_at(Instant::now() + delay, value)
    }

    pub fn schedule_at(&mut self, deadline: Instant, value: T) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending = Some(Pending {
            handle,
            deadline,
            value,
        });
        handle
    }

    /// Returns true if `handle` was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let matches = self.pending.as_ref().is_some_and(|p| p.handle == handle);
        if matches {
            self.pending = None;
        }
        matches
    }

    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for OneShotTimer<T> {
    fn default() -> Self {
        Self::new()
    }
}
