//! # Domain Layer
//!
//! Size limits and the bounds-checked copy itself. No I/O, no logging.

pub mod copy;
pub mod errors;
pub mod width;
