//! # Handshake Digest Service
//!
//! Application service layer that implements the `HandshakeDigestApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`HandshakeDigestApi`)
//! - Uses the outbound port (`DigestStages`) for hashing
//! - Delegates stage sequencing to the domain validator
//!
//! Logging lives here; the domain validator stays free of side effects.

use tracing::{debug, warn};

use crate::config::HandshakeDigestConfig;
use crate::domain::errors::{HandshakeDigestError, StageFailure};
use crate::domain::status::HandshakeStatus;
use crate::domain::validator::{try_validate, HandshakeInputs};
use crate::ports::inbound::HandshakeDigestApi;
use crate::ports::outbound::{DigestStages, DynDigestStages};

/// Handshake Digest Service.
///
/// Each call allocates a fresh context and a `digest_size()` output buffer,
/// so a single service can be shared across handshakes as long as the stage
/// reference itself is.
pub struct HandshakeDigestService<D: DigestStages> {
    stages: D,
    config: HandshakeDigestConfig,
}

impl<D: DigestStages> HandshakeDigestService<D> {
    /// Create a new handshake digest service.
    ///
    /// # Arguments
    /// * `stages` - The hash capability to drive
    /// * `config` - Logging options; `config.algorithm` is informational here
    pub fn new(stages: D, config: HandshakeDigestConfig) -> Self {
        Self { stages, config }
    }

    /// Service configuration.
    pub fn config(&self) -> &HandshakeDigestConfig {
        &self.config
    }

    /// Underlying stage reference.
    pub fn stages(&self) -> &D {
        &self.stages
    }

    fn run(&self, inputs: HandshakeInputs<'_>) -> Result<Vec<u8>, StageFailure> {
        let mut ctx = self.stages.new_context();
        let mut out = vec![0u8; self.stages.digest_size()];

        match try_validate(&self.stages, &mut ctx, inputs, &mut out) {
            Ok(()) => {
                debug!(
                    algorithm = %self.config.algorithm,
                    digest_len = out.len(),
                    "Handshake digest computed"
                );
                if self.config.log_digests {
                    debug!(digest = %hex::encode(&out), "Handshake digest value");
                }
                Ok(out)
            }
            Err(failure) => {
                warn!(
                    algorithm = %self.config.algorithm,
                    stage = %failure.stage,
                    code = failure.error.code,
                    status = %failure.status(),
                    "Handshake digest rejected"
                );
                Err(failure)
            }
        }
    }
}

impl HandshakeDigestService<Box<DynDigestStages>> {
    /// Create a service for the algorithm named in `config`.
    pub fn from_config(config: HandshakeDigestConfig) -> Self {
        Self::new(config.algorithm.stages(), config)
    }
}

impl<D: DigestStages> HandshakeDigestApi for HandshakeDigestService<D> {
    fn digest_size(&self) -> usize {
        self.stages.digest_size()
    }

    fn compute(&self, inputs: HandshakeInputs<'_>) -> Result<Vec<u8>, HandshakeDigestError> {
        Ok(self.run(inputs)?)
    }

    fn status(&self, inputs: HandshakeInputs<'_>) -> HandshakeStatus {
        self.run(inputs).map(drop).into()
    }
}
