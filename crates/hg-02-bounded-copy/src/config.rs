//! # Bounded Copy Configuration

use serde::{Deserialize, Serialize};

use crate::domain::copy::CopyLimits;
use crate::domain::width::SizeWidthKind;

/// Copier configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyConfig {
    /// Size width bounding every allocation.
    pub width: SizeWidthKind,

    /// Append a NUL terminator to every non-empty copy.
    pub nul_terminate: bool,
}

impl Default for CopyConfig {
    /// 16-bit lengths, matching TLS heartbeat payload length fields.
    fn default() -> Self {
        Self {
            width: SizeWidthKind::U16,
            nul_terminate: false,
        }
    }
}

impl CopyConfig {
    /// Create a config for testing: 8-bit sizes so limits are reachable.
    pub fn for_testing() -> Self {
        Self {
            width: SizeWidthKind::U8,
            nul_terminate: true,
        }
    }

    /// Limits derived from this configuration.
    pub fn limits(&self) -> CopyLimits {
        CopyLimits::for_kind(self.width).with_terminator(self.nul_terminate)
    }
}
