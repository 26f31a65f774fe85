//! Core error types for the portfolio engine.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from whatever backend implements the repository traits) are converted to
//! these types by the storage layer.

use thiserror::Error;

use crate::fx::FxError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
