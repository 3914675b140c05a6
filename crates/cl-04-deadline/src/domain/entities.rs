//! # Domain Entities
//!
//! The per-(instance, index) deadline record.

use super::value_objects::{DeadlineAction, DeadlineStatus};
use cl_01_instance_storage::{ClauseRecord, ClauseTag};
use serde::{Deserialize, Serialize};
use shared_types::{Address, Timestamp};

/// Deadline record, keyed by instance id and sub-index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineRecord {
    /// Deadline time, zero when unset.
    pub deadline: Timestamp,
    /// Action to carry out on enforcement.
    pub action: DeadlineAction,
    /// Set once by enforcement, never cleared.
    pub enforced: bool,
    /// Identity allowed to modify or clear. `None` freezes the deadline.
    pub controller: Option<Address>,
}

impl DeadlineRecord {
    /// Derived state.
    pub fn status(&self) -> DeadlineStatus {
        if self.enforced {
            DeadlineStatus::Enforced
        } else if self.deadline != 0 {
            DeadlineStatus::Pending
        } else {
            DeadlineStatus::Unset
        }
    }

    /// True once a deadline was set, including after enforcement.
    pub fn is_set(&self) -> bool {
        self.deadline != 0
    }

    /// True iff set and `now` has reached the deadline.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.is_set() && now >= self.deadline
    }

    /// True iff set, expired and not yet enforced.
    pub fn can_enforce(&self, now: Timestamp) -> bool {
        self.is_expired(now) && !self.enforced
    }

    /// Seconds until the deadline. Zero if unset or expired.
    pub fn time_remaining(&self, now: Timestamp) -> u64 {
        if !self.is_set() {
            return 0;
        }
        self.deadline.saturating_sub(now)
    }

    /// True iff set without a controller.
    pub fn is_immutable(&self) -> bool {
        self.is_set() && self.controller.is_none()
    }
}

impl ClauseRecord for DeadlineRecord {
    const TAG: ClauseTag = ClauseTag::Deadline;
}
