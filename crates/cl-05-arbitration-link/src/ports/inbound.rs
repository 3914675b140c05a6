//! # Inbound Ports
//!
//! The contract an agreement honors towards an external arbitration module.

use crate::domain::{ArbitrationRecord, DisputeTerms, LinkStatus, Payout};
use cl_01_instance_storage::{InstanceStore, StorageBackend};
use shared_types::{Address, CallContext, ClauseError, DelegatedAuthority, InstanceId};

/// Dispute linkage - inbound port.
///
/// One agreement instance links to at most one arbitration module instance.
/// The linked module is the only identity that may report a ruling, and it
/// may do so once.
pub trait DisputeLinkage {
    /// Link `module` and its instance id to `instance`.
    fn link_arbitration<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        authority: &DelegatedAuthority,
        instance: InstanceId,
        module: Address,
        module_instance: InstanceId,
        terms: DisputeTerms,
    ) -> Result<(), ClauseError>;

    /// Report a ruling (1 claimant wins, 2 respondent wins, 3 split).
    /// `split_basis_points` is the claimant share and must be zero unless
    /// splitting. Returns the computed payout.
    fn execute_arbitration_ruling<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        call: &CallContext,
        instance: InstanceId,
        ruling: u8,
        split_basis_points: u16,
    ) -> Result<Payout, ClauseError>;

    /// Full record snapshot.
    fn record<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> ArbitrationRecord;

    /// True iff linked, unresolved and `caller` is a party.
    fn can_initiate_arbitration<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
        caller: Address,
    ) -> bool {
        let record = self.record(store, instance);
        record.status == LinkStatus::Linked && record.is_party(caller)
    }

    /// Linked arbitration module, zero if none.
    fn arbitration_agreement<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Address {
        self.record(store, instance).module
    }

    /// Arbitration-side instance id, zero if none.
    fn arbitration_instance_id<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> InstanceId {
        self.record(store, instance).module_instance
    }

    /// `(claimant, respondent)`, zero if none.
    fn arbitration_parties<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> (Address, Address) {
        let terms = self.record(store, instance).terms;
        (terms.claimant, terms.respondent)
    }

    /// True once linked, including after resolution.
    fn has_arbitration_linked<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> bool {
        self.record(store, instance).status != LinkStatus::Unlinked
    }

    /// True once a ruling was executed.
    fn is_dispute_resolved<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> bool {
        self.record(store, instance).status == LinkStatus::Resolved
    }
}
