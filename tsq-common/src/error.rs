//! Common error types for Town Square

use thiserror::Error;

/// Common result type for Town Square operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the Town Square crates
///
/// The four write-gate variants (rating, review text, other input,
/// verification) carry complete, user-displayable sentences; callers show
/// them as-is and never abort on them.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rating rejected by the validation gate
    #[error("{0}")]
    InvalidRating(String),

    /// Review text rejected by the validation gate
    #[error("{0}")]
    InvalidReviewText(String),

    /// Other invalid user input (business name, deal text, category)
    #[error("{0}")]
    InvalidInput(String),

    /// Human-verification challenge not passed
    #[error("{0}")]
    VerificationFailed(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
