//! Simulated wallet connection.
//!
//! Each `[data-wallet-connect]` button runs its own [`WalletButton`]:
//!
//! ```text
//! Idle --Click--> Connecting --Resolved(Ok)--> Connected
//!                            --Resolved(Err)--> Failed --Reset (3s)--> Idle
//! ```
//!
//! `Connected` is terminal. The button stays disabled there.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::TrivixConfig;
use crate::notify::Notice;
use crate::schedule::Scheduled;
use crate::view::{ButtonView, Tone};

pub const CONNECTED_MESSAGE: &str = "Wallet connected successfully!";
pub const FAILED_MESSAGE: &str = "Failed to connect wallet. Please try again.";

/// Wallet types the simulated connector accepts. An empty type means the
/// page did not ask for a specific one.
pub const SUPPORTED_WALLETS: [&str; 4] = ["metamask", "walletconnect", "coinbase", "phantom"];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConnectError {
    #[error("unsupported wallet type: {0}")]
    Unsupported(String),
    #[error("connection rejected: {0}")]
    Rejected(String),
}

/// Source of wallet addresses. The shipped implementation is a fixed-delay
/// simulation; a real RPC client slots in here.
#[async_trait(?Send)]
pub trait WalletConnector {
    async fn connect(&self, wallet_type: &str) -> Result<String, ConnectError>;
}

/// Outcome rule of the simulated connector, minus the latency.
pub fn simulated_outcome(wallet_type: &str, address: &str) -> Result<String, ConnectError> {
    let wallet_type = wallet_type.trim();
    if wallet_type.is_empty()
        || SUPPORTED_WALLETS
            .iter()
            .any(|w| w.eq_ignore_ascii_case(wallet_type))
    {
        Ok(address.to_owned())
    } else {
        Err(ConnectError::Unsupported(wallet_type.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletState {
    Idle,
    Connecting,
    Connected { address: String },
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    Click,
    Resolved(Result<String, ConnectError>),
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WalletEffect {
    Render(ButtonView),
    /// Run the connector and feed back `Resolved`.
    StartConnect,
    /// Show the connected address on the navigation connect button.
    MirrorNav(ButtonView),
    Notify(Notice),
    Schedule(Scheduled<WalletEvent>),
}

pub fn idle_view() -> ButtonView {
    ButtonView::new("wallet", "Connect Wallet")
}

#[derive(Debug)]
pub struct WalletButton {
    wallet_type: String,
    state: WalletState,
    failure_reset: std::time::Duration,
}

impl WalletButton {
    pub fn new(wallet_type: impl Into<String>, config: &TrivixConfig) -> Self {
        Self {
            wallet_type: wallet_type.into(),
            state: WalletState::Idle,
            failure_reset: config.wallet_failure_reset(),
        }
    }

    pub fn state(&self) -> &WalletState {
        &self.state
    }

    pub fn wallet_type(&self) -> &str {
        &self.wallet_type
    }

    pub fn handle(&mut self, event: WalletEvent) -> Vec<WalletEffect> {
        let state = std::mem::replace(&mut self.state, WalletState::Idle);
        let (next, effects) = match (state, event) {
            (WalletState::Idle, WalletEvent::Click) => (
                WalletState::Connecting,
                vec![
                    WalletEffect::Render(ButtonView::busy("Connecting...")),
                    WalletEffect::StartConnect,
                ],
            ),
            (WalletState::Connecting, WalletEvent::Resolved(Ok(address))) => {
                let effects = vec![
                    WalletEffect::Render(
                        ButtonView::new("check", "Connected")
                            .disabled(true)
                            .tone(Tone::Success),
                    ),
                    WalletEffect::MirrorNav(
                        ButtonView::new("wallet", address.clone()).tone(Tone::Success),
                    ),
                    WalletEffect::Notify(Notice::success(CONNECTED_MESSAGE)),
                ];
                (WalletState::Connected { address }, effects)
            }
            (WalletState::Connecting, WalletEvent::Resolved(Err(err))) => {
                warn!(wallet_type = %self.wallet_type, error = %err, "wallet connect failed");
                (
                    WalletState::Failed,
                    vec![
                        WalletEffect::Render(
                            ButtonView::new("x", "Failed")
                                .disabled(true)
                                .tone(Tone::Failure),
                        ),
                        WalletEffect::Notify(Notice::error(FAILED_MESSAGE)),
                        WalletEffect::Schedule(Scheduled::new(
                            self.failure_reset,
                            WalletEvent::Reset,
                        )),
                    ],
                )
            }
            (WalletState::Failed, WalletEvent::Reset) => (
                WalletState::Idle,
                vec![WalletEffect::Render(idle_view())],
            ),
            (state, event) => {
                debug!(?state, ?event, "wallet event ignored");
                (state, Vec::new())
            }
        };
        self.state = next;
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> WalletButton {
        WalletButton::new("metamask", &TrivixConfig::default())
    }

    #[test]
    fn click_enters_connecting_and_starts_connector() {
        let mut wallet = button();
        let effects = wallet.handle(WalletEvent::Click);
        assert_eq!(wallet.state(), &WalletState::Connecting);
        let WalletEffect::Render(view) = &effects[0] else {
            panic!("first effect renders");
        };
        assert_eq!(view.label, "Connecting...");
        assert!(view.disabled);
        assert_eq!(effects[1], WalletEffect::StartConnect);
    }

    #[test]
    fn repeated_clicks_while_connecting_do_nothing() {
        let mut wallet = button();
        wallet.handle(WalletEvent::Click);
        assert!(wallet.handle(WalletEvent::Click).is_empty());
        assert_eq!(wallet.state(), &WalletState::Connecting);
    }

    #[test]
    fn success_mirrors_nav_and_notifies_once() {
        let mut wallet = button();
        wallet.handle(WalletEvent::Click);
        let effects = wallet.handle(WalletEvent::Resolved(Ok("0x1234...5678".into())));
        assert_eq!(
            wallet.state(),
            &WalletState::Connected {
                address: "0x1234...5678".into()
            }
        );
        let notices: Vec<_> = effects
            .iter()
            .filter_map(|e| match e {
                WalletEffect::Notify(n) => Some(n),
                _ => None,
            })
            .collect();
        assert_eq!(notices, vec![&Notice::success(CONNECTED_MESSAGE)]);
        assert!(effects.iter().any(|e| matches!(
            e,
            WalletEffect::MirrorNav(view) if view.label == "0x1234...5678"
        )));
    }

    #[test]
    fn connected_is_terminal() {
        let mut wallet = button();
        wallet.handle(WalletEvent::Click);
        wallet.handle(WalletEvent::Resolved(Ok("addr".into())));
        assert!(wallet.handle(WalletEvent::Click).is_empty());
        assert!(wallet.handle(WalletEvent::Reset).is_empty());
    }

    #[test]
    fn failure_schedules_reset_back_to_idle() {
        let mut wallet = button();
        wallet.handle(WalletEvent::Click);
        let effects = wallet.handle(WalletEvent::Resolved(Err(ConnectError::Rejected(
            "user closed popup".into(),
        ))));
        assert_eq!(wallet.state(), &WalletState::Failed);
        assert!(effects.contains(&WalletEffect::Notify(Notice::error(FAILED_MESSAGE))));
        assert!(effects.contains(&WalletEffect::Schedule(Scheduled::new(
            std::time::Duration::from_secs(3),
            WalletEvent::Reset
        ))));

        let effects = wallet.handle(WalletEvent::Reset);
        assert_eq!(wallet.state(), &WalletState::Idle);
        assert_eq!(effects, vec![WalletEffect::Render(idle_view())]);
        assert!(!idle_view().disabled);
    }

    #[test]
    fn simulated_outcome_accepts_known_and_default_types() {
        assert_eq!(simulated_outcome("", "0xabc"), Ok("0xabc".into()));
        assert_eq!(simulated_outcome("MetaMask", "0xabc"), Ok("0xabc".into()));
        assert_eq!(
            simulated_outcome("ledger", "0xabc"),
            Err(ConnectError::Unsupported("ledger".into()))
        );
    }
}
