//! # Type-Erased Stages
//!
//! Wraps a concrete stage reference so its context is carried as a
//! [`BoxedContext`]. Lets the service pick an algorithm at runtime.

use crate::domain::errors::{StageError, StageResult};
use crate::ports::outbound::{BoxedContext, DigestStages, DynDigestStages};

/// Adapter from a concrete stage reference to [`DynDigestStages`].
#[derive(Debug, Clone)]
pub struct Erased<D>(pub D);

/// Box a stage reference as a [`DynDigestStages`] trait object.
pub fn erase<D>(stages: D) -> Box<DynDigestStages>
where
    D: DigestStages + Send + Sync + 'static,
    D::Context: Send + 'static,
{
    Box::new(Erased(stages))
}

fn context<D>(ctx: &mut BoxedContext) -> Result<&mut D::Context, StageError>
where
    D: DigestStages,
    D::Context: 'static,
{
    (**ctx)
        .downcast_mut::<D::Context>()
        .ok_or(StageError::CONTEXT_MISMATCH)
}

impl<D> DigestStages for Erased<D>
where
    D: DigestStages,
    D::Context: Send + 'static,
{
    type Context = BoxedContext;

    fn digest_size(&self) -> usize {
        self.0.digest_size()
    }

    fn new_context(&self) -> BoxedContext {
        Box::new(self.0.new_context())
    }

    fn init(&self, ctx: &mut BoxedContext) -> StageResult {
        self.0.init(context::<D>(ctx)?)
    }

    fn update(&self, ctx: &mut BoxedContext, data: &[u8]) -> StageResult {
        self.0.update(context::<D>(ctx)?, data)
    }

    fn finalize(&self, ctx: &mut BoxedContext, out: &mut [u8]) -> StageResult {
        self.0.finalize(context::<D>(ctx)?, out)
    }
}
