//! # Domain Value Objects
//!
//! Link status, ruling kinds and dispute terms.

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use shared_types::{Address, ClauseError, ClauseState};

/// Basis points in a whole.
pub const BASIS_POINTS: u16 = 10_000;

/// Linkage state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum LinkStatus {
    /// No arbitration module linked.
    #[default]
    Unlinked,
    /// Linked, waiting for a ruling.
    Linked,
    /// Ruling executed. Terminal.
    Resolved,
}

impl ClauseState for LinkStatus {
    const CLAUSE: &'static str = "arbitration-link";
    const UNINITIALIZED: Self = Self::Unlinked;

    fn bits(self) -> u16 {
        match self {
            Self::Unlinked => 0,
            Self::Linked => 1 << 1,
            Self::Resolved => 1 << 2,
        }
    }

    fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0 => Some(Self::Unlinked),
            0b010 => Some(Self::Linked),
            0b100 => Some(Self::Resolved),
            _ => None,
        }
    }
}

impl From<LinkStatus> for u16 {
    fn from(status: LinkStatus) -> Self {
        status.bits()
    }
}

impl TryFrom<u16> for LinkStatus {
    type Error = String;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or_else(|| format!("invalid link status bits {bits:#06x}"))
    }
}

/// Ruling reported by the arbitration module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Ruling {
    /// Full disputed amount to the claimant.
    ClaimantWins = 1,
    /// Full disputed amount to the respondent.
    RespondentWins = 2,
    /// Divided by a basis-point share.
    Split = 3,
}

impl Ruling {
    /// Wire code.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Ruling {
    type Error = ClauseError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::ClaimantWins),
            2 => Ok(Self::RespondentWins),
            3 => Ok(Self::Split),
            _ => Err(ClauseError::invalid(
                "ruling",
                format!("unknown ruling code {code}"),
            )),
        }
    }
}

/// Parties and stake of the dispute, fixed at link time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeTerms {
    /// Party that raised the dispute.
    pub claimant: Address,
    /// Party the dispute is raised against.
    pub respondent: Address,
    /// Amount at stake.
    pub disputed_amount: U256,
}

/// Amounts owed to each party after a ruling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    /// Owed to the claimant.
    pub claimant: U256,
    /// Owed to the respondent.
    pub respondent: U256,
}
