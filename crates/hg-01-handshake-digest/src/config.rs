//! # Handshake Digest Configuration
//!
//! Algorithm selection and logging options for [`HandshakeDigestService`].
//!
//! [`HandshakeDigestService`]: crate::service::HandshakeDigestService

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::adapters::{erase, Sha256Stages, Sha384Stages, Sha3_256Stages, StageTable};
use crate::domain::errors::HandshakeDigestError;
use crate::ports::outbound::DynDigestStages;

/// Hash algorithm used for the handshake digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigestAlgorithm {
    /// Null hash: every stage succeeds, empty digest
    Null,
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA3-256
    Sha3_256,
}

impl DigestAlgorithm {
    /// Configuration name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha3_256 => "sha3_256",
        }
    }

    /// Build the stage reference for this algorithm.
    pub fn stages(self) -> Box<DynDigestStages> {
        match self {
            Self::Null => erase(StageTable::null()),
            Self::Sha256 => erase(Sha256Stages::new()),
            Self::Sha384 => erase(Sha384Stages::new()),
            Self::Sha3_256 => erase(Sha3_256Stages::new()),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = HandshakeDigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "null" => Ok(Self::Null),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha3256" => Ok(Self::Sha3_256),
            _ => Err(HandshakeDigestError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Handshake digest service configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandshakeDigestConfig {
    /// Hash algorithm used by [`HandshakeDigestService::from_config`].
    ///
    /// [`HandshakeDigestService::from_config`]: crate::service::HandshakeDigestService::from_config
    pub algorithm: DigestAlgorithm,

    /// Log computed digests (hex) at debug level.
    pub log_digests: bool,
}

impl Default for HandshakeDigestConfig {
    fn default() -> Self {
        Self {
            algorithm: DigestAlgorithm::Sha256,
            log_digests: false,
        }
    }
}

impl HandshakeDigestConfig {
    /// Create a config for testing.
    pub fn for_testing() -> Self {
        Self {
            algorithm: DigestAlgorithm::Null,
            log_digests: true,
        }
    }
}
