//! Navigation and scroll-effect helpers.

use crate::error::UiError;

pub const ACTIVE_LINK_CLASS: &str = "text-cyan-400";
pub const MENU_HIDDEN_CLASS: &str = "hidden";
pub const REVEAL_CLASS: &str = "animate-fade-in";

/// Exact match of the raw `href` attribute against `location.pathname`.
pub fn is_current_link(href: &str, pathname: &str) -> bool {
    href == pathname
}

/// Element id targeted by a same-page anchor. A bare `#` targets nothing.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Strict `data-speed` parse.
pub fn parse_speed(raw: &str) -> Result<f64, UiError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| UiError::InvalidSpeed(raw.to_owned()))
}

/// `data-speed` with the configured fallback for absent or bad values.
pub fn speed_or_default(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(|r| parse_speed(r).ok()).unwrap_or(default)
}

pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    format!("translateY({}px)", scroll_y * speed)
}

/// One-shot reveal bookkeeping: each element reveals at most once.
#[derive(Debug, Default)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    /// True the first time `index` is seen intersecting.
    pub fn reveal(&mut self, index: usize, intersecting: bool) -> bool {
        match self.revealed.get_mut(index) {
            Some(done) if intersecting && !*done => {
                *done = true;
                true
            }
            _ => false,
        }
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }
}
