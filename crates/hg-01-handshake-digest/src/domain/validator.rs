//! # Handshake Digest Validator
//!
//! Runs `init → update(client) → update(server) → update(params) → finalize`
//! over a [`DigestStages`] reference and stops at the first failing stage.
//!
//! ## Invariant
//!
//! If stage *k* fails, stages *k+1..5* are never invoked. Each stage is a
//! `?` in [`try_validate`]; there is no path that reaches a later stage after
//! an earlier one returned an error.
//!
//! Pure orchestration: no I/O, no allocation, no logging.

use super::errors::{StageError, StageFailure};
use super::status::{HandshakeStatus, Stage};
use crate::ports::outbound::DigestStages;

/// Borrowed input buffer. `None` is an absent buffer and hashes as zero bytes.
pub type Buffer<'a> = Option<&'a [u8]>;

/// The three buffers hashed during a handshake, in hashing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandshakeInputs<'a> {
    /// Client random
    pub client: Buffer<'a>,
    /// Server random
    pub server: Buffer<'a>,
    /// Negotiated (signed) parameters
    pub params: Buffer<'a>,
}

impl<'a> HandshakeInputs<'a> {
    /// All three buffers present.
    pub fn new(client: &'a [u8], server: &'a [u8], params: &'a [u8]) -> Self {
        Self {
            client: Some(client),
            server: Some(server),
            params: Some(params),
        }
    }
}

fn bytes(buffer: Buffer<'_>) -> &[u8] {
    buffer.unwrap_or(&[])
}

fn run<T>(stage: Stage, result: Result<T, StageError>) -> Result<T, StageFailure> {
    result.map_err(|error| StageFailure { stage, error })
}

/// Run the digest chain and report the first failing stage with its
/// algorithm-specific code.
pub fn try_validate<D: DigestStages + ?Sized>(
    digest: &D,
    ctx: &mut D::Context,
    inputs: HandshakeInputs<'_>,
    out: &mut [u8],
) -> Result<(), StageFailure> {
    run(Stage::Init, digest.init(ctx))?;
    run(Stage::UpdateClient, digest.update(ctx, bytes(inputs.client)))?;
    run(Stage::UpdateServer, digest.update(ctx, bytes(inputs.server)))?;
    run(Stage::UpdateParams, digest.update(ctx, bytes(inputs.params)))?;
    run(Stage::Final, digest.finalize(ctx, out))?;
    Ok(())
}

/// Run the digest chain and return its terminal status.
///
/// An empty `out` stands for an absent output buffer; whether that is an
/// error is up to the stage reference's `finalize`.
pub fn validate<D: DigestStages + ?Sized>(
    digest: &D,
    ctx: &mut D::Context,
    client: Buffer<'_>,
    server: Buffer<'_>,
    params: Buffer<'_>,
    out: &mut [u8],
) -> HandshakeStatus {
    let inputs = HandshakeInputs {
        client,
        server,
        params,
    };
    try_validate(digest, ctx, inputs, out).into()
}

impl From<Result<(), StageFailure>> for HandshakeStatus {
    fn from(result: Result<(), StageFailure>) -> Self {
        match result {
            Ok(()) => HandshakeStatus::Success,
            Err(failure) => failure.status(),
        }
    }
}
