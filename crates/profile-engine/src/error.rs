//! Error types for profile sweeps.

use hwm_common::ModelError;
use thiserror::Error;

/// Result type for profile operations.
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Errors that can occur while resolving or running a sweep.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The sweep selector is outside the legal set for the requested arity.
    /// Recoverable: re-invoke with a corrected option.
    #[error("invalid profile option {option}: expected one of {expected}")]
    InvalidOption { option: u8, expected: &'static str },

    /// `min > max`, or a non-positive step on a non-degenerate range.
    #[error("invalid {axis} range [{min}, {max}] with step {step}")]
    InvalidRange {
        axis: &'static str,
        min: f64,
        max: f64,
        step: f64,
    },

    /// Propagated verbatim from the model boundary. A single failing grid
    /// point aborts the whole sweep; no partial result is returned.
    #[error(transparent)]
    Model(#[from] ModelError),
}
