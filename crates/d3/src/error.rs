//! Error types for the D3 engine.

use thiserror::Error;

use crate::canonical::CanonicalConfiguration;

/// Errors reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum D3Error {
    /// A textual operation name is not one of `I, R1, R2, S1, S2, S3`.
    #[error("invalid operation {name:?}: expected one of I, R1, R2, S1, S2, S3")]
    InvalidOperation {
        /// The rejected name.
        name: String,
    },

    /// A point configuration matched no catalog entry.
    #[error("no catalog entry matches configuration {configuration}")]
    LookupFailure {
        /// The canonical configuration that missed.
        configuration: CanonicalConfiguration,
    },
}

/// Result alias for engine operations.
pub type Result<T> = core::result::Result<T, D3Error>;
