//! # Adapters Layer
//!
//! Concrete [`DigestStages`](crate::ports::outbound::DigestStages) implementations:
//! - `stage_table`: fixed-size table of stage function pointers, including the null hash
//! - `rustcrypto`: any `digest::Digest` hash (SHA-256, SHA-384, SHA3-256)
//! - `erased`: boxes a stage reference behind a runtime-selected trait object

pub mod erased;
pub mod rustcrypto;
pub mod stage_table;

pub use erased::{erase, Erased};
pub use rustcrypto::{RustCryptoStages, Sha256Stages, Sha384Stages, Sha3_256Stages};
pub use stage_table::{FinalizeFn, InitFn, StageTable, UpdateFn};
