//! Delayed follow-up events.
//!
//! State machines return [`Scheduled`] values; the browser layer turns each
//! one into a timeout that feeds `event` back after `after`. [`Timeline`] is
//! the same contract on a virtual clock.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Scheduled<E> {
    pub after: Duration,
    pub event: E,
}

impl<E> Scheduled<E> {
    pub fn new(after: Duration, event: E) -> Self {
        Self { after, event }
    }

    pub fn map<F, U>(self, f: F) -> Scheduled<U>
    where
        F: FnOnce(E) -> U,
    {
        Scheduled {
            after: self.after,
            event: f(self.event),
        }
    }
}

/// Virtual-clock timer queue. Events due at the same instant fire in the
/// order they were scheduled, like browser timeouts with equal delays.
#[derive(Debug)]
pub struct Timeline<E> {
    now: Duration,
    seq: u64,
    pending: Vec<(Duration, u64, E)>,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            seq: 0,
            pending: Vec::new(),
        }
    }
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn schedule(&mut self, item: Scheduled<E>) {
        self.seq += 1;
        self.pending.push((self.now + item.after, self.seq, item.event));
    }

    /// Pop the earliest event due at or before the absolute `deadline` and
    /// move the clock to its due time. Call repeatedly until `None`,
    /// scheduling follow-ups in between, to replay a full run.
    pub fn next_due(&mut self, deadline: Duration) -> Option<(Duration, E)> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (at, _, _))| *at <= deadline)
            .min_by_key(|(_, (at, seq, _))| (*at, *seq))
            .map(|(idx, _)| idx)?;
        let (at, _, event) = self.pending.swap_remove(idx);
        self.now = at;
        Some((at, event))
    }

    /// Move the clock forward without firing anything past `deadline`.
    pub fn settle(&mut self, deadline: Duration) {
        if deadline > self.now {
            self.now = deadline;
        }
    }
}
