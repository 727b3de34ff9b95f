//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::errors::HandshakeDigestError;
use crate::domain::status::HandshakeStatus;
use crate::domain::validator::HandshakeInputs;

/// Primary Handshake Digest API.
///
/// Every call hashes with a fresh context, so calls with identical inputs
/// return identical results.
pub trait HandshakeDigestApi {
    /// Size in bytes of digests produced by [`compute`](Self::compute).
    fn digest_size(&self) -> usize;

    /// Hash client random, server random and params, returning the digest.
    ///
    /// # Errors
    /// * `HandshakeDigestError::StageFailed` - the first stage that failed;
    ///   no later stage ran
    fn compute(&self, inputs: HandshakeInputs<'_>) -> Result<Vec<u8>, HandshakeDigestError>;

    /// Run the same chain as [`compute`](Self::compute) and return only the
    /// terminal status.
    fn status(&self, inputs: HandshakeInputs<'_>) -> HandshakeStatus;
}
