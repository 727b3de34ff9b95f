//! # Bounded Copier Service
//!
//! Wraps [`safe_copy_with`] with configured limits and logs each outcome.
//! The domain copy stays free of side effects.

use tracing::{debug, warn};

use crate::config::CopyConfig;
use crate::domain::copy::{safe_copy_with, BoundedBuffer, CopyLimits};
use crate::domain::errors::CopyError;

/// Bounds-checked copier with fixed limits.
#[derive(Clone, Debug)]
pub struct BoundedCopier {
    config: CopyConfig,
    limits: CopyLimits,
}

impl BoundedCopier {
    /// Create a copier from `config`.
    pub fn new(config: CopyConfig) -> Self {
        let limits = config.limits();
        Self { config, limits }
    }

    /// Copier configuration.
    pub fn config(&self) -> &CopyConfig {
        &self.config
    }

    /// Limits applied to every copy.
    pub fn limits(&self) -> CopyLimits {
        self.limits
    }

    /// Copy `requested` bytes from `input`.
    pub fn copy(&self, input: Option<&[u8]>, requested: usize) -> Result<BoundedBuffer, CopyError> {
        match safe_copy_with(self.limits, input, requested) {
            Ok(buf) => {
                debug!(
                    width = %self.config.width,
                    requested,
                    allocated = buf.allocated_len(),
                    "Bounded copy complete"
                );
                Ok(buf)
            }
            Err(err) => {
                warn!(
                    width = %self.config.width,
                    requested,
                    available = input.map(<[u8]>::len),
                    error = %err,
                    "Bounded copy rejected"
                );
                Err(err)
            }
        }
    }
}

impl Default for BoundedCopier {
    fn default() -> Self {
        Self::new(CopyConfig::default())
    }
}
