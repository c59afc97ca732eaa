//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `MqError` as one variant
//! via `#[from]`, so configuration failures surface unchanged at every layer.

use thiserror::Error;

/// The top-level error type for `mq-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MqError {
    /// The simulation parameters cannot describe a valid queue chain.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Shorthand result type for `mq-core`.
pub type MqResult<T> = Result<T, MqError>;
