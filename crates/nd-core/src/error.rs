//! Engine error type.
//!
//! Every failure the engine can report is a caller error (malformed input).
//! Nothing inside the core performs I/O, so there is no recoverable failure
//! mode and no retry logic.

use thiserror::Error;

/// The single error type shared by all `nd-*` crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NdError {
    /// An update-rule name outside `bayesian`, `hbu`, `confirmation_bias`.
    #[error("unknown update rule: {0:?}")]
    InvalidRule(String),

    /// `decide` was called with a zero-length option list.
    #[error("decision requires at least one option")]
    EmptyOptions,

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `nd-*` crates.
pub type NdResult<T> = Result<T, NdError>;
