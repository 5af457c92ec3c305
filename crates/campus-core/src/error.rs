//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` where they
//! surface configuration failures.

use thiserror::Error;

/// The error type for `campus-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `campus-core`.
pub type CoreResult<T> = Result<T, CoreError>;
