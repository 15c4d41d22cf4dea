//! Error types shared across the pulseward workspace.
//!
//! Most read paths in pulseward are total: an unknown patient id yields
//! `None`, an empty window yields an empty slice. Errors are reserved for
//! genuinely fallible operations: configuration loading and store writes.

use thiserror::Error;

/// The unified error type for the pulseward workspace.
#[derive(Debug, Error)]
pub enum PulsewardError {
    /// A configuration file is unreadable, malformed, or fails validation.
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// A shared store could not complete a write.
    ///
    /// The only cause in practice is a poisoned lock, which means a writer
    /// panicked mid-mutation; the store contents can no longer be trusted.
    #[error("record store failure: {reason}")]
    Store { reason: String },
}

/// Convenience alias used throughout the pulseward crates.
pub type PulsewardResult<T> = Result<T, PulsewardError>;
