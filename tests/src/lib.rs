//! # Handshake-Guard Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── exploits/
//! │   └── historical/   # Famous past defects, reproduced and caught
//! │       ├── goto_fail.rs
//! │       └── heartbleed.rs
//! │
//! └── integration/      # Cross-subsystem flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p hg-tests
//!
//! # By category
//! cargo test -p hg-tests integration::
//! cargo test -p hg-tests exploits::historical::
//!
//! # Benchmarks
//! cargo bench -p hg-tests
//! ```


/// Install a quiet global subscriber once per test binary.
pub fn init_test_logging() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Another harness may already own the global subscriber.
        let _ = hg_telemetry::init_logging(&hg_telemetry::TelemetryConfig::for_testing());
    });
}
