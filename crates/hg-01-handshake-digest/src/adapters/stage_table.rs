//! # Stage Table
//!
//! A hash algorithm as a fixed-size table of function pointers. Individual
//! stages can be swapped out, which is how tests inject a failing `init` or
//! `finalize` into an otherwise working reference.

use std::fmt;

use crate::domain::errors::StageResult;
use crate::ports::outbound::DigestStages;

/// `init` stage signature.
pub type InitFn<C> = fn(&mut C) -> StageResult;
/// `update` stage signature.
pub type UpdateFn<C> = fn(&mut C, &[u8]) -> StageResult;
/// `finalize` stage signature.
pub type FinalizeFn<C> = fn(&mut C, &mut [u8]) -> StageResult;

/// Function-pointer stage reference over context type `C`.
pub struct StageTable<C> {
    /// Digest output size in bytes
    pub digest_size: usize,
    /// Initialize the context
    pub init: InitFn<C>,
    /// Absorb data
    pub update: UpdateFn<C>,
    /// Write the digest
    pub finalize: FinalizeFn<C>,
}

impl<C> StageTable<C> {
    /// Build a table from its three stages.
    pub fn new(
        digest_size: usize,
        init: InitFn<C>,
        update: UpdateFn<C>,
        finalize: FinalizeFn<C>,
    ) -> Self {
        Self {
            digest_size,
            init,
            update,
            finalize,
        }
    }

    /// Replace the `init` stage.
    pub fn with_init(mut self, init: InitFn<C>) -> Self {
        self.init = init;
        self
    }

    /// Replace the `update` stage.
    pub fn with_update(mut self, update: UpdateFn<C>) -> Self {
        self.update = update;
        self
    }

    /// Replace the `finalize` stage.
    pub fn with_finalize(mut self, finalize: FinalizeFn<C>) -> Self {
        self.finalize = finalize;
        self
    }
}

impl StageTable<()> {
    /// The null hash: every stage succeeds and the digest is empty.
    pub fn null() -> Self {
        Self::new(0, null_init, null_update, null_finalize)
    }
}

fn null_init(_ctx: &mut ()) -> StageResult {
    Ok(())
}

fn null_update(_ctx: &mut (), _data: &[u8]) -> StageResult {
    Ok(())
}

fn null_finalize(_ctx: &mut (), _out: &mut [u8]) -> StageResult {
    Ok(())
}

impl<C> Clone for StageTable<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for StageTable<C> {}

impl<C> fmt::Debug for StageTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StageTable")
            .field("digest_size", &self.digest_size)
            .finish_non_exhaustive()
    }
}

impl<C: Default> DigestStages for StageTable<C> {
    type Context = C;

    fn digest_size(&self) -> usize {
        self.digest_size
    }

    fn new_context(&self) -> C {
        C::default()
    }

    fn init(&self, ctx: &mut C) -> StageResult {
        (self.init)(ctx)
    }

    fn update(&self, ctx: &mut C, data: &[u8]) -> StageResult {
        (self.update)(ctx, data)
    }

    fn finalize(&self, ctx: &mut C, out: &mut [u8]) -> StageResult {
        (self.finalize)(ctx, out)
    }
}
