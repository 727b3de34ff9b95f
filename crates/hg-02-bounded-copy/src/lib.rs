//! # Bounded Copy Subsystem (HG-02)
//!
//! Copies a caller-specified number of bytes into a freshly allocated buffer,
//! rejecting any request whose size arithmetic would overflow the configured
//! size width or whose source is shorter than claimed.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Size widths, limits, the copy itself
//! - **Service Layer** (`service.rs`): Configured copier, logs outcomes
//!
//! ## Security Notes
//!
//! - **No over-read**: the copied length never exceeds the source length
//!   ("Heartbleed").
//! - **No wrap-around**: `requested + terminator` is computed with checked
//!   arithmetic and compared against the width maximum before allocating.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod domain;
pub mod service;

// Re-export public API
pub use config::CopyConfig;
pub use domain::copy::{safe_copy, safe_copy_terminated, safe_copy_with, BoundedBuffer, CopyLimits};
pub use domain::errors::CopyError;
pub use domain::width::{SizeWidth, SizeWidthKind};
pub use service::BoundedCopier;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
