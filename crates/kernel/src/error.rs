//! Error type for the SPH kernel crate.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by kernel construction, the equation of state and sampling.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller passed a value outside the operation's domain of validity
    /// (negative density, non-positive smoothing length, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is mathematically undefined for the given inputs.
    #[error("domain error: {0}")]
    Domain(String),

    /// The weighted sampler rejected the computed probability mass function.
    #[error("sampling error: {0}")]
    Sampling(String),
}
