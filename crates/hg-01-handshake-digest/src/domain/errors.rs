//! # Handshake Digest Errors
//!
//! Error types for digest stages and the handshake digest chain.

use super::status::{HandshakeStatus, Stage};
use thiserror::Error;

/// Failure reported by a single digest stage.
///
/// The code is algorithm-specific. The validator never interprets it; any
/// `StageError` means "this stage failed".
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
#[error("digest stage failed with code {code}")]
pub struct StageError {
    /// Algorithm-specific failure code
    pub code: i32,
}

impl StageError {
    /// Stage was driven before `init` succeeded on its context.
    pub const NOT_INITIALIZED: StageError = StageError { code: -1 };

    /// Output buffer is shorter than the digest size.
    pub const OUTPUT_TOO_SHORT: StageError = StageError { code: -2 };

    /// Context handed to a type-erased stage belongs to another algorithm.
    pub const CONTEXT_MISMATCH: StageError = StageError { code: -3 };

    /// Create a stage error carrying an algorithm-specific code.
    pub const fn new(code: i32) -> Self {
        Self { code }
    }
}

/// Result of one digest stage. `Ok(())` is the single success sentinel.
pub type StageResult = Result<(), StageError>;

/// The first stage of a handshake digest chain that failed.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("{stage} stage failed (code {})", .error.code)]
pub struct StageFailure {
    /// Stage that reported the failure
    pub stage: Stage,
    /// Error returned by the stage
    #[source]
    pub error: StageError,
}

impl StageFailure {
    /// Terminal status this failure maps to.
    pub fn status(&self) -> HandshakeStatus {
        self.stage.failure_status()
    }
}

/// Errors surfaced by the handshake digest service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HandshakeDigestError {
    /// A digest stage failed; later stages were not run
    #[error("Handshake digest rejected: {0}")]
    StageFailed(#[from] StageFailure),

    /// Configured algorithm cannot be used by this service
    #[error("Unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

impl HandshakeDigestError {
    /// Terminal status for this error.
    pub fn status(&self) -> Option<HandshakeStatus> {
        match self {
            Self::StageFailed(failure) => Some(failure.status()),
            Self::UnsupportedAlgorithm(_) => None,
        }
    }
}
