//! Virtual-time scheduler
//!
//! Repeating timers and one-shot delays over a monotonically advancing
//! clock. Time only moves when the owner pops due events, so tests can drive
//! it exactly and the terminal front-end can feed it wall-clock deltas.

use std::time::Duration;

/// Cancel token returned when scheduling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Timer<E> {
    id: TimerId,
    due: Duration,
    period: Option<Duration>,
    event: E,
}

/// Deterministic event scheduler
///
/// Events fire in deadline order; simultaneous deadlines fire in the order
/// they were scheduled.
#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    now: Duration,
    timers: Vec<Timer<E>>,
    next_id: u64,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            timers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    fn push(&mut self, due: Duration, period: Option<Duration>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            due,
            period,
            event,
        });
        id
    }

    /// Fire `event` every `period`, starting one period from now
    pub fn every(&mut self, period: Duration, event: E) -> TimerId {
        debug_assert!(!period.is_zero(), "zero period would never let time advance");
        self.push(self.now + period, Some(period), event)
    }

    /// Fire `event` once after `delay`
    pub fn once(&mut self, delay: Duration, event: E) -> TimerId {
        self.push(self.now + delay, None, event)
    }

    /// Stop a timer; returns false if it already fired or was cancelled
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    /// Number of scheduled timers
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Earliest deadline, if anything is scheduled
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.iter().map(|t| t.due).min()
    }

    /// Time left until the earliest deadline
    pub fn until_next(&self) -> Option<Duration> {
        self.next_due().map(|due| due.saturating_sub(self.now))
    }

    /// Move the clock forward without firing anything
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Push every overdue repeating timer past `until`
    ///
    /// Missed periods are dropped rather than replayed. Returns how many
    /// firings were skipped.
    pub fn skip_missed(&mut self, until: Duration) -> u32 {
        let mut skipped = 0;
        for timer in &mut self.timers {
            if let Some(period) = timer.period {
                while timer.due <= until {
                    timer.due += period;
                    skipped += 1;
                }
            }
        }
        skipped
    }
}

impl<E: Clone> Scheduler<E> {
    /// Pop the earliest event due at or before `until`
    ///
    /// The clock moves to that event's deadline. Repeating timers are
    /// rescheduled one period later; one-shots are removed.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, E)> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.id.0))
            .map(|(index, _)| index)?;

        let timer = &mut self.timers[index];
        self.now = self.now.max(timer.due);
        let fired = (timer.id, timer.event.clone());
        match timer.period {
            Some(period) => timer.due += period,
            None => {
                self.timers.swap_remove(index);
            }
        }
        Some(fired)
    }
}
