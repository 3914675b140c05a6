//! # Domain Entities
//!
//! The per-instance content anchoring record.

use super::value_objects::ContentStatus;
use cl_01_instance_storage::{ClauseRecord, ClauseTag};
use serde::{Deserialize, Serialize};
use shared_types::{Address, Hash, Timestamp};

/// Content anchoring record, keyed by instance id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Current state.
    pub status: ContentStatus,
    /// Content fingerprint, written once at registration.
    pub fingerprint: Hash,
    /// Optional locator, empty when absent.
    pub locator: String,
    /// Identity that registered the content.
    pub registrant: Address,
    /// Registration time.
    pub registered_at: Timestamp,
    /// Seal time, zero until sealed.
    pub sealed_at: Timestamp,
}

impl ContentRecord {
    /// True if extracts are allowed.
    pub fn is_live(&self) -> bool {
        matches!(
            self.status,
            ContentStatus::Registered | ContentStatus::Sealed
        )
    }
}

impl ClauseRecord for ContentRecord {
    const TAG: ClauseTag = ClauseTag::ContentAnchor;
}
