//! Error types for the botpower tool

use thiserror::Error;

/// Core error type for botpower operations
#[derive(Error, Debug)]
pub enum BotpowerError {
    /// Outlet selector outside the accepted tokens
    #[error("invalid outlet {0:?} (expected one of: 1, 2, 3, 4, all)")]
    InvalidOutlet(String),

    /// Unknown power action
    #[error("invalid action {0:?} (expected one of: on, off, display)")]
    InvalidAction(String),
}

/// Result type alias for botpower operations
pub type Result<T> = std::result::Result<T, BotpowerError>;
