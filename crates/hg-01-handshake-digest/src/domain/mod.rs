//! # Domain Layer
//!
//! Pure handshake digest logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod errors;
pub mod status;
pub mod validator;
