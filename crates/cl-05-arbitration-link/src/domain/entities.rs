//! # Domain Entities
//!
//! The per-instance arbitration linkage record.

use super::value_objects::{DisputeTerms, LinkStatus, Payout, Ruling};
use cl_01_instance_storage::{ClauseRecord, ClauseTag};
use serde::{Deserialize, Serialize};
use shared_types::{Address, InstanceId, Timestamp};

/// Arbitration linkage record, keyed by agreement instance id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArbitrationRecord {
    /// Current state.
    pub status: LinkStatus,
    /// Linked arbitration module, the only identity allowed to rule.
    pub module: Address,
    /// Instance id on the arbitration side.
    pub module_instance: InstanceId,
    /// Parties and stake.
    pub terms: DisputeTerms,
    /// Executed ruling.
    pub ruling: Option<Ruling>,
    /// Claimant share for a split ruling.
    pub split_basis_points: u16,
    /// Computed payout.
    pub payout: Payout,
    /// Resolution time.
    pub resolved_at: Timestamp,
}

impl ArbitrationRecord {
    /// True if `who` is the claimant or the respondent.
    pub fn is_party(&self, who: Address) -> bool {
        !who.is_zero() && (who == self.terms.claimant || who == self.terms.respondent)
    }
}

impl ClauseRecord for ArbitrationRecord {
    const TAG: ClauseTag = ClauseTag::ArbitrationLink;
}
