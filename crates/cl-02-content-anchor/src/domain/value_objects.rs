//! # Domain Value Objects
//!
//! Status encoding and configuration for content anchoring.

use serde::{Deserialize, Serialize};
use shared_types::ClauseState;

/// Content anchor state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum ContentStatus {
    /// No record yet.
    #[default]
    Uninitialized,
    /// Fingerprint recorded, registrant may still seal or revoke.
    Registered,
    /// Permanently sealed.
    Sealed,
    /// Permanently revoked.
    Revoked,
}

impl ContentStatus {
    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Sealed | Self::Revoked)
    }
}

impl ClauseState for ContentStatus {
    const CLAUSE: &'static str = "content-anchor";
    const UNINITIALIZED: Self = Self::Uninitialized;

    fn bits(self) -> u16 {
        match self {
            Self::Uninitialized => 0,
            Self::Registered => 1 << 1,
            Self::Sealed => 1 << 2,
            Self::Revoked => 1 << 3,
        }
    }

    fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0 => Some(Self::Uninitialized),
            0b0010 => Some(Self::Registered),
            0b0100 => Some(Self::Sealed),
            0b1000 => Some(Self::Revoked),
            _ => None,
        }
    }
}

impl From<ContentStatus> for u16 {
    fn from(status: ContentStatus) -> Self {
        status.bits()
    }
}

impl TryFrom<u16> for ContentStatus {
    type Error = String;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or_else(|| format!("invalid content status bits {bits:#06x}"))
    }
}

/// Content anchoring configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentAnchorConfig {
    /// Longest accepted locator in bytes.
    pub max_locator_bytes: usize,
}

impl Default for ContentAnchorConfig {
    fn default() -> Self {
        Self {
            max_locator_bytes: 2048,
        }
    }
}
