//! # Outbound Ports (Driven Ports / SPI)
//!
//! The capability this subsystem consumes from a hash algorithm.

use crate::domain::errors::StageResult;

/// A hash algorithm described as three fallible stages over a caller-owned
/// context.
///
/// Implementations hold no per-handshake state themselves. The context is
/// created by the caller, borrowed mutably by each stage, and must not be
/// shared between concurrent validations.
pub trait DigestStages {
    /// Opaque per-handshake digest state.
    type Context;

    /// Digest output size in bytes.
    fn digest_size(&self) -> usize;

    /// Create a fresh, uninitialized context.
    fn new_context(&self) -> Self::Context;

    /// Initialize the context.
    fn init(&self, ctx: &mut Self::Context) -> StageResult;

    /// Absorb `data` into the context.
    fn update(&self, ctx: &mut Self::Context, data: &[u8]) -> StageResult;

    /// Finish the digest and write it to the front of `out`.
    fn finalize(&self, ctx: &mut Self::Context, out: &mut [u8]) -> StageResult;
}

impl<D: DigestStages + ?Sized> DigestStages for &D {
    type Context = D::Context;

    fn digest_size(&self) -> usize {
        (**self).digest_size()
    }

    fn new_context(&self) -> Self::Context {
        (**self).new_context()
    }

    fn init(&self, ctx: &mut Self::Context) -> StageResult {
        (**self).init(ctx)
    }

    fn update(&self, ctx: &mut Self::Context, data: &[u8]) -> StageResult {
        (**self).update(ctx, data)
    }

    fn finalize(&self, ctx: &mut Self::Context, out: &mut [u8]) -> StageResult {
        (**self).finalize(ctx, out)
    }
}

impl<D: DigestStages + ?Sized> DigestStages for Box<D> {
    type Context = D::Context;

    fn digest_size(&self) -> usize {
        (**self).digest_size()
    }

    fn new_context(&self) -> Self::Context {
        (**self).new_context()
    }

    fn init(&self, ctx: &mut Self::Context) -> StageResult {
        (**self).init(ctx)
    }

    fn update(&self, ctx: &mut Self::Context, data: &[u8]) -> StageResult {
        (**self).update(ctx, data)
    }

    fn finalize(&self, ctx: &mut Self::Context, out: &mut [u8]) -> StageResult {
        (**self).finalize(ctx, out)
    }
}

/// Type-erased context for [`DynDigestStages`].
pub type BoxedContext = Box<dyn std::any::Any + Send>;

/// Object-safe stage reference with a boxed context, used when the algorithm
/// is selected at runtime.
pub type DynDigestStages = dyn DigestStages<Context = BoxedContext> + Send + Sync;
