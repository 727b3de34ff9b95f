//! # Copy Errors
//!
//! Every rejection is terminal; nothing is clamped or truncated.

use thiserror::Error;

/// Errors that can occur during a bounds-checked copy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CopyError {
    /// No source buffer was supplied but a non-zero length was requested
    #[error("Null input with requested length {requested}")]
    NullInput {
        /// Requested copy length in bytes
        requested: usize,
    },

    /// Requested length plus terminator overhead does not fit the size width.
    /// Raised before any allocation.
    #[error("Size overflow: {requested} bytes (+{overhead} overhead) exceeds maximum {max}")]
    SizeOverflow {
        /// Requested copy length in bytes
        requested: usize,
        /// Fixed terminator bytes added to the allocation
        overhead: usize,
        /// Largest allocation the size width can express
        max: u128,
    },

    /// Source buffer holds fewer bytes than requested
    #[error("Source too short: requested {requested} bytes, only {available} available")]
    SourceTooShort {
        /// Requested copy length in bytes
        requested: usize,
        /// Bytes actually present in the source
        available: usize,
    },

    /// The allocator refused the destination buffer
    #[error("Allocation of {bytes} bytes failed")]
    AllocationFailed {
        /// Bytes that were requested from the allocator
        bytes: usize,
    },
}
