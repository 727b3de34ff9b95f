//! # Handshake Status
//!
//! Terminal outcome of a handshake digest run and the stages that produce it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of the handshake digest chain, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    /// `init(ctx)`
    Init,
    /// `update(ctx, client_random)`
    UpdateClient,
    /// `update(ctx, server_random)`
    UpdateServer,
    /// `update(ctx, signed_params)`
    UpdateParams,
    /// `finalize(ctx, out)`
    Final,
}

impl Stage {
    /// All stages in the order the validator runs them.
    pub const ORDER: [Stage; 5] = [
        Stage::Init,
        Stage::UpdateClient,
        Stage::UpdateServer,
        Stage::UpdateParams,
        Stage::Final,
    ];

    /// Zero-based position in [`Stage::ORDER`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Status reported when this stage is the first to fail.
    pub fn failure_status(self) -> HandshakeStatus {
        match self {
            Stage::Init => HandshakeStatus::InitFailure,
            Stage::UpdateClient => HandshakeStatus::ClientUpdateFailure,
            Stage::UpdateServer => HandshakeStatus::ServerUpdateFailure,
            Stage::UpdateParams => HandshakeStatus::ParamsUpdateFailure,
            Stage::Final => HandshakeStatus::FinalFailure,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Init => "init",
            Stage::UpdateClient => "update(client)",
            Stage::UpdateServer => "update(server)",
            Stage::UpdateParams => "update(params)",
            Stage::Final => "final",
        };
        f.write_str(name)
    }
}

/// Terminal outcome of one handshake digest run.
///
/// Exactly one value results from any invocation. Numeric codes are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum HandshakeStatus {
    /// Every stage succeeded and the digest was written.
    Success = 0,
    /// `init` failed; nothing else ran.
    InitFailure = 1,
    /// `update(client)` failed.
    ClientUpdateFailure = 2,
    /// `update(server)` failed.
    ServerUpdateFailure = 3,
    /// `update(params)` failed.
    ParamsUpdateFailure = 4,
    /// `finalize` failed.
    FinalFailure = 5,
}

impl HandshakeStatus {
    /// Stable numeric code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Parse a numeric code. Returns `None` for unknown values.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            1 => Some(Self::InitFailure),
            2 => Some(Self::ClientUpdateFailure),
            3 => Some(Self::ServerUpdateFailure),
            4 => Some(Self::ParamsUpdateFailure),
            5 => Some(Self::FinalFailure),
            _ => None,
        }
    }

    /// Upper-snake name, e.g. `UPDATE_CLIENT_FAILURE`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::InitFailure => "INIT_FAILURE",
            Self::ClientUpdateFailure => "UPDATE_CLIENT_FAILURE",
            Self::ServerUpdateFailure => "UPDATE_SERVER_FAILURE",
            Self::ParamsUpdateFailure => "UPDATE_PARAMS_FAILURE",
            Self::FinalFailure => "FINAL_FAILURE",
        }
    }

    /// `true` only for [`HandshakeStatus::Success`].
    pub fn is_success(self) -> bool {
        self == Self::Success
    }

    /// Stage whose failure produced this status, if any.
    pub fn failed_stage(self) -> Option<Stage> {
        match self {
            Self::Success => None,
            Self::InitFailure => Some(Stage::Init),
            Self::ClientUpdateFailure => Some(Stage::UpdateClient),
            Self::ServerUpdateFailure => Some(Stage::UpdateServer),
            Self::ParamsUpdateFailure => Some(Stage::UpdateParams),
            Self::FinalFailure => Some(Stage::Final),
        }
    }
}

impl fmt::Display for HandshakeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
