//! Orchestration error type.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading configuration, building the initial state or
/// writing snapshots.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The domain admits no particle positions.
    #[error("domain error: {0}")]
    Domain(String),

    /// The OS random source could not seed an unseeded run.
    #[error("entropy source unavailable: {0}")]
    Entropy(String),

    /// Propagated kernel errors.
    #[error(transparent)]
    Kernel(#[from] sph_kernel::Error),

    /// Propagated I/O errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed configuration JSON.
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}
