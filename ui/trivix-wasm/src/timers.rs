//! Timer glue between core `Scheduled` values and `gloo-timers`.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use trivix_core::Scheduled;

/// Browsers fire anything above `2^31 - 1` ms immediately.
pub const MAX_DELAY_MS: u32 = i32::MAX as u32;

pub fn millis(d: Duration) -> u32 {
    u32::try_from(d.as_millis()).map_or(MAX_DELAY_MS, |ms| ms.min(MAX_DELAY_MS))
}

/// Fire-and-forget timeout.
pub fn after<F>(delay: Duration, f: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(millis(delay), f).forget();
}

/// Arm a timeout that hands `item.event` to `deliver`.
pub fn schedule<E, F>(item: Scheduled<E>, deliver: F)
where
    E: 'static,
    F: FnOnce(E) + 'static,
{
    let Scheduled { after: delay, event } = item;
    after(delay, move || deliver(event));
}
