//! Runtime timings and thresholds.
//!
//! Every field has a default, so a page can override any subset through the
//! `script#trivix-config` JSON block.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::UiError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrivixConfig {
    pub notification_enter_delay_ms: u64,
    pub notification_display_ms: u64,
    pub notification_exit_ms: u64,
    pub search_debounce_ms: u64,
    pub search_min_chars: usize,
    pub wallet_connect_latency_ms: u64,
    pub wallet_failure_reset_ms: u64,
    pub wallet_address: String,
    pub form_processing_ms: u64,
    pub form_reset_ms: u64,
    pub nft_pulse_ms: u64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub parallax_default_speed: f64,
}

impl Default for TrivixConfig {
    fn default() -> Self {
        Self {
            notification_enter_delay_ms: 100,
            notification_display_ms: 5_000,
            notification_exit_ms: 300,
            search_debounce_ms: 300,
            search_min_chars: 2,
            wallet_connect_latency_ms: 2_000,
            wallet_failure_reset_ms: 3_000,
            wallet_address: "0x1234...5678".to_owned(),
            form_processing_ms: 1_500,
            form_reset_ms: 2_000,
            nft_pulse_ms: 150,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_owned(),
            parallax_default_speed: 0.5,
        }
    }
}

impl TrivixConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: TrivixConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), UiError> {
        if self.search_debounce_ms == 0 {
            return Err(UiError::InvalidConfig(
                "search_debounce_ms must be greater than zero".to_owned(),
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(UiError::InvalidConfig(format!(
                "reveal_threshold must be within [0, 1], got {}",
                self.reveal_threshold
            )));
        }
        if !self.parallax_default_speed.is_finite() {
            return Err(UiError::InvalidConfig(
                "parallax_default_speed must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn notification_enter_delay(&self) -> Duration {
        Duration::from_millis(self.notification_enter_delay_ms)
    }

    pub fn notification_display(&self) -> Duration {
        Duration::from_millis(self.notification_display_ms)
    }

    pub fn notification_exit(&self) -> Duration {
        Duration::from_millis(self.notification_exit_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn wallet_connect_latency(&self) -> Duration {
        Duration::from_millis(self.wallet_connect_latency_ms)
    }

    pub fn wallet_failure_reset(&self) -> Duration {
        Duration::from_millis(self.wallet_failure_reset_ms)
    }

    pub fn form_processing(&self) -> Duration {
        Duration::from_millis(self.form_processing_ms)
    }

    pub fn form_reset(&self) -> Duration {
        Duration::from_millis(self.form_reset_ms)
    }

    pub fn nft_pulse(&self) -> Duration {
        Duration::from_millis(self.nft_pulse_ms)
    }
}
