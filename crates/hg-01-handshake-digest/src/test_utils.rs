//! Test utilities for handshake digest validation.
//!
//! [`RecordingStages`] is a stage reference that records every call it
//! receives and can be told to fail at any subset of stages. Call counts make
//! a missing early exit directly visible instead of inferring it from the
//! final status.
//!
//! # Example
//!
//! ```rust
//! use hg_01_handshake_digest::test_utils::RecordingStages;
//! use hg_01_handshake_digest::{validate, DigestStages, HandshakeStatus, Stage};
//!
//! let stub = RecordingStages::new().fail_at(Stage::UpdateClient, 2);
//! let mut ctx = stub.new_context();
//! let status = validate(&stub, &mut ctx, None, None, None, &mut []);
//!
//! assert_eq!(status, HandshakeStatus::ClientUpdateFailure);
//! assert_eq!(stub.count(Stage::UpdateServer), 0);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::errors::{StageError, StageResult};
use crate::domain::status::Stage;
use crate::ports::outbound::DigestStages;

/// Context used by [`RecordingStages`]: counts updates seen so far so each
/// update can be attributed to client, server or params.
#[derive(Debug, Default)]
pub struct RecordingContext {
    updates_seen: usize,
}

/// A stage reference that records calls and fails on demand.
#[derive(Debug, Default)]
pub struct RecordingStages {
    failures: HashMap<Stage, i32>,
    digest_size: usize,
    calls: RefCell<Vec<Stage>>,
    updates: RefCell<Vec<Vec<u8>>>,
}

impl RecordingStages {
    /// A stub where every stage succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `stage` fail with `code`.
    pub fn fail_at(mut self, stage: Stage, code: i32) -> Self {
        self.failures.insert(stage, code);
        self
    }

    /// Report `size` as the digest size and fill that many output bytes.
    pub fn with_digest_size(mut self, size: usize) -> Self {
        self.digest_size = size;
        self
    }

    /// Every call received, in order.
    pub fn calls(&self) -> Vec<Stage> {
        self.calls.borrow().clone()
    }

    /// Number of times `stage` was invoked.
    pub fn count(&self, stage: Stage) -> usize {
        self.calls.borrow().iter().filter(|s| **s == stage).count()
    }

    /// Data passed to each update call, in order.
    pub fn updates(&self) -> Vec<Vec<u8>> {
        self.updates.borrow().clone()
    }

    fn record(&self, stage: Stage) -> StageResult {
        self.calls.borrow_mut().push(stage);
        match self.failures.get(&stage) {
            Some(code) => Err(StageError::new(*code)),
            None => Ok(()),
        }
    }
}

impl DigestStages for RecordingStages {
    type Context = RecordingContext;

    fn digest_size(&self) -> usize {
        self.digest_size
    }

    fn new_context(&self) -> Self::Context {
        RecordingContext::default()
    }

    fn init(&self, ctx: &mut Self::Context) -> StageResult {
        ctx.updates_seen = 0;
        self.record(Stage::Init)
    }

    fn update(&self, ctx: &mut Self::Context, data: &[u8]) -> StageResult {
        let stage = match ctx.updates_seen {
            0 => Stage::UpdateClient,
            1 => Stage::UpdateServer,
            _ => Stage::UpdateParams,
        };
        ctx.updates_seen += 1;
        self.updates.borrow_mut().push(data.to_vec());
        self.record(stage)
    }

    fn finalize(&self, _ctx: &mut Self::Context, out: &mut [u8]) -> StageResult {
        self.record(Stage::Final)?;
        let n = self.digest_size.min(out.len());
        out[..n].fill(0xA5);
        Ok(())
    }
}
