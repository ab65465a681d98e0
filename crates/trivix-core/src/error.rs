use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum UiError {
    #[error("unknown notification severity: {0}")]
    UnknownSeverity(String),
    #[error("unknown nft action: {0}")]
    UnknownNftAction(String),
    #[error("invalid parallax speed: {0}")]
    InvalidSpeed(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        UiError::InvalidConfig(err.to_string())
    }
}
