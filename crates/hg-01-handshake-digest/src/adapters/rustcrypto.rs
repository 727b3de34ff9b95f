//! # RustCrypto Adapter
//!
//! Drives any `digest::Digest` hash through the three-stage contract.

use std::marker::PhantomData;

use digest::Digest;

use crate::domain::errors::{StageError, StageResult};
use crate::ports::outbound::DigestStages;

/// Stage reference backed by a RustCrypto hash `H`.
///
/// The context is `None` until `init` runs and is consumed by `finalize`, so
/// updating or finalizing an uninitialized context fails with
/// [`StageError::NOT_INITIALIZED`].
pub struct RustCryptoStages<H> {
    _hash: PhantomData<fn() -> H>,
}

/// SHA-256 stages.
pub type Sha256Stages = RustCryptoStages<sha2::Sha256>;
/// SHA-384 stages.
pub type Sha384Stages = RustCryptoStages<sha2::Sha384>;
/// SHA3-256 stages.
pub type Sha3_256Stages = RustCryptoStages<sha3::Sha3_256>;

impl<H> RustCryptoStages<H> {
    /// Create the stage reference.
    pub fn new() -> Self {
        Self { _hash: PhantomData }
    }
}

impl<H> Default for RustCryptoStages<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Clone for RustCryptoStages<H> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<H> std::fmt::Debug for RustCryptoStages<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RustCryptoStages")
            .field("hash", &std::any::type_name::<H>())
            .finish()
    }
}

impl<H: Digest> DigestStages for RustCryptoStages<H> {
    type Context = Option<H>;

    fn digest_size(&self) -> usize {
        <H as Digest>::output_size()
    }

    fn new_context(&self) -> Option<H> {
        None
    }

    fn init(&self, ctx: &mut Option<H>) -> StageResult {
        *ctx = Some(<H as Digest>::new());
        Ok(())
    }

    fn update(&self, ctx: &mut Option<H>, data: &[u8]) -> StageResult {
        let hasher = ctx.as_mut().ok_or(StageError::NOT_INITIALIZED)?;
        Digest::update(hasher, data);
        Ok(())
    }

    fn finalize(&self, ctx: &mut Option<H>, out: &mut [u8]) -> StageResult {
        let size = self.digest_size();
        let dest = out.get_mut(..size).ok_or(StageError::OUTPUT_TOO_SHORT)?;
        let hasher = ctx.take().ok_or(StageError::NOT_INITIALIZED)?;
        dest.copy_from_slice(&hasher.finalize());
        Ok(())
    }
}
