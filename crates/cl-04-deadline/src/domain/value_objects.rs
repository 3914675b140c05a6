//! # Domain Value Objects
//!
//! Action codes, derived status and configuration for deadlines.

use serde::{Deserialize, Serialize};
use shared_types::{ClauseError, ClauseState};
use std::fmt;

/// What the orchestrator should do once a deadline is enforced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DeadlineAction {
    /// No action. Only valid as the stored default.
    #[default]
    None = 0,
    /// Release escrowed value to the beneficiary.
    Release = 1,
    /// Refund escrowed value to the depositor.
    Refund = 2,
    /// Cancel the agreement.
    Cancel = 3,
    /// Escalate to dispute resolution.
    Escalate = 4,
}

impl DeadlineAction {
    /// Wire code.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for DeadlineAction {
    type Error = ClauseError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::None),
            1 => Ok(Self::Release),
            2 => Ok(Self::Refund),
            3 => Ok(Self::Cancel),
            4 => Ok(Self::Escalate),
            _ => Err(ClauseError::invalid(
                "action",
                format!("unknown action code {code}"),
            )),
        }
    }
}

impl fmt::Display for DeadlineAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Release => "release",
            Self::Refund => "refund",
            Self::Cancel => "cancel",
            Self::Escalate => "escalate",
        };
        f.write_str(name)
    }
}

/// Deadline state, derived from the stored record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeadlineStatus {
    /// Nothing set (or cleared).
    #[default]
    Unset,
    /// Set and not yet enforced.
    Pending,
    /// Enforced. Frozen forever.
    Enforced,
}

impl ClauseState for DeadlineStatus {
    const CLAUSE: &'static str = "deadline";
    const UNINITIALIZED: Self = Self::Unset;

    fn bits(self) -> u16 {
        match self {
            Self::Unset => 0,
            Self::Pending => 1 << 1,
            Self::Enforced => 1 << 2,
        }
    }

    fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0 => Some(Self::Unset),
            0b010 => Some(Self::Pending),
            0b100 => Some(Self::Enforced),
            _ => None,
        }
    }
}

/// Deadline configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineConfig {
    /// Furthest a deadline may lie ahead of the current time. `None` is
    /// unlimited.
    pub max_horizon_secs: Option<u64>,
}
