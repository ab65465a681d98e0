//! Toast notification lifecycle.
//!
//! `Entering → Visible → Leaving → Removed`. The reveal and the dismissal
//! are both timed from creation; removal follows the dismissal after the
//! exit transition.

use std::time::Duration;

use tracing::debug;
use trivix_types::Severity;

use crate::config::TrivixConfig;
use crate::error::UiError;
use crate::schedule::Scheduled;

pub const CONTAINER_ID: &str = "notification-container";
pub const CONTAINER_CLASS: &str = "fixed top-4 right-4 z-50 space-y-2";
pub const HIDDEN_CLASSES: [&str; 2] = ["translate-x-full", "opacity-0"];

const BASE_CLASS: &str =
    "p-4 rounded-xl backdrop-blur-xl border max-w-sm transform transition-all duration-300";

/// A message some component wants shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }
}

/// Strict severity lookup.
pub fn parse_severity(name: &str) -> Result<Severity, UiError> {
    Severity::parse(name).ok_or_else(|| UiError::UnknownSeverity(name.to_owned()))
}

/// Full class attribute for a freshly created (still hidden) toast.
pub fn toast_class(severity: Severity) -> String {
    format!(
        "notification-{} {} {} {}",
        severity.as_str(),
        BASE_CLASS,
        HIDDEN_CLASSES.join(" "),
        severity.palette()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Leaving,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastEvent {
    Reveal,
    Dismiss,
    Remove,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub notice: Notice,
    pub phase: Phase,
}

/// What the DOM has to do after a lifecycle event.
#[derive(Debug, Clone, PartialEq)]
pub enum ToastChange {
    /// Drop the hidden classes so the enter transition plays.
    Show,
    /// Put the hidden classes back; the follow-up removes the node.
    Hide(Scheduled<ToastEvent>),
    /// Detach the node.
    Detach,
}

#[derive(Debug)]
pub struct NotificationCenter {
    next_id: u64,
    live: Vec<Notification>,
    enter_delay: Duration,
    display: Duration,
    exit: Duration,
}

impl NotificationCenter {
    pub fn new(config: &TrivixConfig) -> Self {
        Self {
            next_id: 0,
            live: Vec::new(),
            enter_delay: config.notification_enter_delay(),
            display: config.notification_display(),
            exit: config.notification_exit(),
        }
    }

    /// Register a new toast. Returns its id and the two timers measured from
    /// now: reveal and dismissal.
    pub fn show(&mut self, notice: Notice) -> (NotificationId, [Scheduled<ToastEvent>; 2]) {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        debug!(id = id.0, severity = %notice.severity, "notification created");
        self.live.push(Notification {
            id,
            notice,
            phase: Phase::Entering,
        });
        (
            id,
            [
                Scheduled::new(self.enter_delay, ToastEvent::Reveal),
                Scheduled::new(self.display, ToastEvent::Dismiss),
            ],
        )
    }

    pub fn apply(&mut self, id: NotificationId, event: ToastEvent) -> Option<ToastChange> {
        let idx = self.live.iter().position(|n| n.id == id)?;
        let phase = self.live[idx].phase;
        let change = match (phase, event) {
            (Phase::Entering, ToastEvent::Reveal) => {
                self.live[idx].phase = Phase::Visible;
                ToastChange::Show
            }
            (Phase::Entering | Phase::Visible, ToastEvent::Dismiss) => {
                self.live[idx].phase = Phase::Leaving;
                ToastChange::Hide(Scheduled::new(self.exit, ToastEvent::Remove))
            }
            (Phase::Leaving, ToastEvent::Remove) => {
                self.live.remove(idx);
                debug!(id = id.0, "notification removed");
                ToastChange::Detach
            }
            _ => return None,
        };
        Some(change)
    }

    pub fn phase(&self, id: NotificationId) -> Phase {
        self.live
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.phase)
            .unwrap_or(Phase::Removed)
    }

    /// Live toasts in creation order (oldest first).
    pub fn live(&self) -> &[Notification] {
        &self.live
    }

    /// Creation to removal.
    pub fn lifetime(&self) -> Duration {
        self.display + self.exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_class_starts_hidden_with_palette() {
        let class = toast_class(Severity::Warning);
        assert!(class.starts_with("notification-warning "));
        assert!(class.contains("translate-x-full opacity-0"));
        assert!(class.ends_with("text-yellow-400"));
    }

    #[test]
    fn unknown_severity_is_an_error() {
        assert_eq!(parse_severity("Success"), Ok(Severity::Success));
        assert_eq!(
            parse_severity("critical"),
            Err(UiError::UnknownSeverity("critical".to_owned()))
        );
    }

    #[test]
    fn lifecycle_walks_through_every_phase() {
        let mut center = NotificationCenter::new(&TrivixConfig::default());
        let (id, timers) = center.show(Notice::success("saved"));
        assert_eq!(timers[0].after, Duration::from_millis(100));
        assert_eq!(timers[1].after, Duration::from_millis(5_000));
        assert_eq!(center.phase(id), Phase::Entering);

        assert_eq!(center.apply(id, ToastEvent::Reveal), Some(ToastChange::Show));
        assert_eq!(center.phase(id), Phase::Visible);

        let Some(ToastChange::Hide(follow_up)) = center.apply(id, ToastEvent::Dismiss) else {
            panic!("dismiss should hide the toast");
        };
        assert_eq!(follow_up.after, Duration::from_millis(300));
        assert_eq!(center.phase(id), Phase::Leaving);

        assert_eq!(center.apply(id, ToastEvent::Remove), Some(ToastChange::Detach));
        assert_eq!(center.phase(id), Phase::Removed);
        assert!(center.live().is_empty());
    }

    #[test]
    fn out_of_order_events_are_ignored() {
        let mut center = NotificationCenter::new(&TrivixConfig::default());
        let (id, _) = center.show(Notice::info("hello"));
        assert_eq!(center.apply(id, ToastEvent::Remove), None);
        assert_eq!(center.phase(id), Phase::Entering);
        assert_eq!(center.apply(NotificationId(99), ToastEvent::Reveal), None);
    }

    #[test]
    fn toasts_stack_newest_last_without_cap() {
        let mut center = NotificationCenter::new(&TrivixConfig::default());
        let ids: Vec<_> = (0..25)
            .map(|i| center.show(Notice::info(format!("n{i}"))).0)
            .collect();
        assert_eq!(center.live().len(), 25);
        assert_eq!(center.live().last().map(|n| n.id), ids.last().copied());
        assert_eq!(center.lifetime(), Duration::from_millis(5_300));
    }
}
