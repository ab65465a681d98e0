//! Target-independent logic behind the Trivix page runtime.
//!
//! Every component here is a plain state holder: transitions return the
//! effects the browser layer has to carry out, including follow-up events to
//! feed back after a delay. Nothing in this crate touches the DOM or a timer.

pub mod config;
pub mod error;
pub mod form;
pub mod nav;
pub mod nft;
pub mod notify;
pub mod player;
pub mod schedule;
pub mod search;
pub mod timing;
pub mod view;
pub mod wallet;

pub use config::TrivixConfig;
pub use error::UiError;
pub use schedule::Scheduled;
