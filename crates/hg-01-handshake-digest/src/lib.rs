//! # Handshake Digest Subsystem (HG-01)
//!
//! Computes the handshake digest over client random, server random and the
//! negotiated parameters, stopping at the first stage that fails.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Stage sequencing and status, no I/O
//! - **Ports Layer** (`ports/`): The hash capability (outbound) and public API (inbound)
//! - **Adapters Layer** (`adapters/`): Stage tables, RustCrypto hashes, type erasure
//! - **Service Layer** (`service.rs`): Wires domain logic to ports, logs outcomes
//!
//! ## Security Notes
//!
//! - **Short-circuit**: if stage *k* fails, stages *k+1..5* never run. A
//!   skipped early exit would let a partial digest pass as valid
//!   ("goto fail"); tests assert per-stage call counts to catch that.
//! - **No shared context**: every call gets a fresh context. Callers reusing
//!   one context across threads must serialize access themselves.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;
pub mod test_utils;

// Re-export public API
pub use adapters::{
    erase, Erased, RustCryptoStages, Sha256Stages, Sha384Stages, Sha3_256Stages, StageTable,
};
pub use config::{DigestAlgorithm, HandshakeDigestConfig};
pub use domain::errors::{HandshakeDigestError, StageError, StageFailure, StageResult};
pub use domain::status::{HandshakeStatus, Stage};
pub use domain::validator::{try_validate, validate, Buffer, HandshakeInputs};
pub use ports::inbound::HandshakeDigestApi;
pub use ports::outbound::{BoxedContext, DigestStages, DynDigestStages};
pub use service::HandshakeDigestService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
