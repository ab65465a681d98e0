//! Debounce and throttle bookkeeping.
//!
//! These hold no timers. The caller arms a timeout for the returned delay
//! and reports back with the ticket; stale tickets are rejected.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Keeps only the latest value handed in during the window.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: 0,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Replace any pending value. Earlier tickets become stale.
    pub fn schedule(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// Called when the timer for `ticket` expires.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// One call of a wrapped function: its `this` and its full argument list.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation<R, A> {
    pub receiver: R,
    pub args: Vec<A>,
}

impl<R, A> Invocation<R, A> {
    pub fn new(receiver: R, args: impl IntoIterator<Item = A>) -> Self {
        Self {
            receiver,
            args: args.into_iter().collect(),
        }
    }
}

/// Lets one call through per `limit`, dropping the rest.
#[derive(Debug)]
pub struct Throttle {
    limit: Duration,
    reopens_at: Option<Duration>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            reopens_at: None,
        }
    }

    /// `now` is any monotonic clock reading, e.g. `performance.now()`.
    pub fn try_acquire(&mut self, now: Duration) -> bool {
        match self.reopens_at {
            Some(at) if now < at => false,
            _ => {
                self.reopens_at = Some(now.saturating_add(self.limit));
                true
            }
        }
    }
}

/// Convert a JS millisecond reading (possibly fractional or bogus) into a
/// `Duration`. Values too large for a `Duration` saturate.
pub fn millis(value: f64) -> Duration {
    if value.is_finite() && value > 0.0 {
        Duration::try_from_secs_f64(value / 1_000.0).unwrap_or(Duration::MAX)
    } else {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_fires() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let first = debouncer.schedule("b");
        let second = debouncer.schedule("be");
        let third = debouncer.schedule("bea");

        assert_eq!(debouncer.fire(first), None);
        assert_eq!(debouncer.fire(second), None);
        assert_eq!(debouncer.fire(third), Some("bea"));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.fire(third), None);
    }

    #[test]
    fn cancel_invalidates_pending_ticket() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        let ticket = debouncer.schedule(1);
        debouncer.cancel();
        assert_eq!(debouncer.fire(ticket), None);
    }

    #[test]
    fn throttle_drops_calls_inside_window() {
        let mut throttle = Throttle::new(Duration::from_millis(100));
        let at = |ms| Duration::from_millis(ms);
        assert!(throttle.try_acquire(at(0)));
        assert!(!throttle.try_acquire(at(50)));
        assert!(!throttle.try_acquire(at(99)));
        assert!(throttle.try_acquire(at(100)));
        assert!(!throttle.try_acquire(at(150)));
        assert!(throttle.try_acquire(at(1_000)));
    }

    #[test]
    fn millis_handles_nan_and_negative() {
        assert_eq!(millis(f64::NAN), Duration::ZERO);
        assert_eq!(millis(-5.0), Duration::ZERO);
        assert_eq!(millis(250.0), Duration::from_millis(250));
        assert_eq!(millis(1e23), Duration::MAX);
        assert_eq!(millis(f64::MAX), Duration::MAX);
    }

    #[test]
    fn throttle_with_huge_limit_stays_closed() {
        let mut throttle = Throttle::new(millis(1e23));
        assert!(throttle.try_acquire(millis(1e12)));
        assert!(!throttle.try_acquire(millis(1e15)));
    }

    #[test]
    fn debounced_invocation_keeps_receiver_and_every_argument() {
        let mut debouncer = Debouncer::new(Duration::from_millis(50));
        debouncer.schedule(Invocation::new("first", [1]));
        let ticket = debouncer.schedule(Invocation::new("panel", [1, 2, 3, 4, 5]));

        let call = debouncer.fire(ticket).expect("latest call delivered");
        assert_eq!(call.receiver, "panel");
        assert_eq!(call.args, vec![1, 2, 3, 4, 5]);
    }
}
