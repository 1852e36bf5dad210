use thiserror::Error;

/// Contract violations raised by the ledger itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Reasons a requested transaction is rejected before it reaches the ledger.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("amount must be a positive number (got {0})")]
    InvalidAmount(f64),
    #[error("category `{0}` is not in the allowed list")]
    UnknownCategory(String),
}

/// Failures reported by a display surface.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("prompt failed: {0}")]
    Prompt(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    View(#[from] ViewError),
}

/// Errors raised while loading or saving tracker configuration.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
