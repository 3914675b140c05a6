//! # Inbound Ports
//!
//! API trait defining what the deadline clause can do.

use crate::domain::{DeadlineAction, DeadlineRecord, DeadlineStatus};
use cl_01_instance_storage::{InstanceStore, StorageBackend};
use shared_types::{Address, CallContext, ClauseError, InstanceId, SubIndex, Timestamp};

/// Deadline enforcement API - inbound port.
///
/// Every operation is keyed by `(instance, index)`. Reads are total and take
/// the current time explicitly.
///
/// # Check order
///
/// `set_deadline` and `modify_deadline` reject at the first failing check,
/// so a call that breaks several rules reports the earliest one:
///
/// 1. slot state: `DeadlineAlreadyEnforced`, `DeadlineAlreadySet` on set;
///    `DeadlineNotSet`, `DeadlineAlreadyEnforced` on modify
/// 2. authority: `DeadlineImmutable`, then `Unauthorized` (modify only);
///    a zero controller is `InvalidInput { field: "controller" }` (set only)
/// 3. zero deadline: `InvalidInput { field: "deadline" }`
/// 4. action byte: `InvalidInput { field: "action" }` for unknown or `None`
/// 5. horizon: `InvalidInput { field: "deadline" }` when a maximum horizon is
///    configured and exceeded
/// 6. time: `DeadlineInPast` when the deadline is not after `call.now`
///
/// Malformed input therefore wins over a past deadline. Steps 5 and 6 cannot
/// both fail for the same call.
pub trait DeadlineApi {
    // ---- configure ----

    /// Set a deadline. `controller = None` makes it immutable. Checks run in
    /// the order listed on the trait.
    #[allow(clippy::too_many_arguments)]
    fn set_deadline<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        call: &CallContext,
        instance: InstanceId,
        index: SubIndex,
        deadline: Timestamp,
        action: u8,
        controller: Option<Address>,
    ) -> Result<(), ClauseError>;

    // ---- transition ----

    /// Move a mutable deadline. Controller only, before enforcement. Checks
    /// run in the order listed on the trait.
    fn modify_deadline<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        call: &CallContext,
        instance: InstanceId,
        index: SubIndex,
        deadline: Timestamp,
        action: u8,
    ) -> Result<(), ClauseError>;

    /// Clear a mutable deadline back to unset. Controller only, before
    /// enforcement.
    fn clear_deadline<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        call: &CallContext,
        instance: InstanceId,
        index: SubIndex,
    ) -> Result<(), ClauseError>;

    /// Enforce an expired deadline. Anyone may enforce; it happens once.
    /// Returns the action to carry out.
    fn mark_enforced<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        call: &CallContext,
        instance: InstanceId,
        index: SubIndex,
    ) -> Result<DeadlineAction, ClauseError>;

    // ---- read ----

    /// Full record snapshot.
    fn record<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
        index: SubIndex,
    ) -> DeadlineRecord;

    /// Derived state.
    fn status<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
        index: SubIndex,
    ) -> DeadlineStatus {
        self.record(store, instance, index).status()
    }

    /// Deadline time, zero when unset.
    fn deadline<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
        index: SubIndex,
    ) -> Timestamp {
        self.record(store, instance, index).deadline
    }

    /// True once set.
    fn is_set<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
        index: SubIndex,
    ) -> bool {
        self.record(store, instance, index).is_set()
    }

    /// True iff set and `now ≥ deadline`.
    fn is_expired<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
        index: SubIndex,
        now: Timestamp,
    ) -> bool {
        self.record(store, instance, index).is_expired(now)
    }

    /// True iff set, expired and not enforced.
    fn can_enforce<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
        index: SubIndex,
        now: Timestamp,
    ) -> bool {
        self.record(store, instance, index).can_enforce(now)
    }

    /// `deadline - now` while unexpired, zero otherwise.
    fn time_remaining<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
        index: SubIndex,
        now: Timestamp,
    ) -> u64 {
        self.record(store, instance, index).time_remaining(now)
    }

    /// True iff set without a controller.
    fn is_immutable<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
        index: SubIndex,
    ) -> bool {
        self.record(store, instance, index).is_immutable()
    }

    /// True once enforced.
    fn is_enforced<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
        index: SubIndex,
    ) -> bool {
        self.record(store, instance, index).enforced
    }

    /// Controller, `None` when unset or immutable.
    fn controller<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
        index: SubIndex,
    ) -> Option<Address> {
        self.record(store, instance, index).controller
    }

    /// Stored action, `None` when unset.
    fn action<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
        index: SubIndex,
    ) -> DeadlineAction {
        self.record(store, instance, index).action
    }
}
