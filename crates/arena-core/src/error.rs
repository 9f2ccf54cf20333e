//! Core error type.
//!
//! Only construction and validation paths return errors.  Runtime update
//! operations fall back silently (unknown ids are no-ops).

use thiserror::Error;

/// The top-level error type for `arena-core`.
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unsupported simulation speed {0} (expected 0.5, 1, 2 or 4)")]
    UnsupportedSpeed(f32),
}

/// Shorthand result type for `arena-core`.
pub type ArenaResult<T> = Result<T, ArenaError>;
