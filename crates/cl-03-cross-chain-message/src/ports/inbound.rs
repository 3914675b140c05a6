//! # Inbound Ports
//!
//! API trait defining what the cross-chain messaging clause can do.

use crate::domain::{CrossChainStatus, IncomingMessage, MessageRecord};
use cl_01_instance_storage::{InstanceStore, StorageBackend};
use shared_types::{
    Address, ChainSelector, ClauseError, DelegatedAuthority, Hash, InstanceId, Timestamp,
};

/// Cross-chain messaging API - inbound port.
///
/// Outbound setters run only from `Uninitialized`. Transitions that the
/// orchestrator has already authorized take a `DelegatedAuthority` instead of
/// a caller identity.
pub trait CrossChainMessageApi {
    // ---- configure ----

    /// Set the destination chain. Zero is rejected.
    fn set_destination_chain<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        instance: InstanceId,
        chain: ChainSelector,
    ) -> Result<(), ClauseError>;

    /// Set the remote agreement address. Zero is rejected.
    fn set_counterparty<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        instance: InstanceId,
        counterparty: Address,
    ) -> Result<(), ClauseError>;

    /// Set the action code.
    fn set_action<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        instance: InstanceId,
        action: u8,
    ) -> Result<(), ClauseError>;

    /// Set the content fingerprint.
    fn set_fingerprint<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        instance: InstanceId,
        fingerprint: Hash,
    ) -> Result<(), ClauseError>;

    /// Set the opaque extra payload.
    fn set_extra_payload<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        instance: InstanceId,
        payload: Vec<u8>,
    ) -> Result<(), ClauseError>;

    /// Set the controller identity. Zero is rejected.
    fn set_controller<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        instance: InstanceId,
        controller: Address,
    ) -> Result<(), ClauseError>;

    /// Move to `Pending` once chain, counterparty and controller are set.
    fn finalize_configuration<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        instance: InstanceId,
    ) -> Result<(), ClauseError>;

    // ---- transition ----

    /// Record the transport-assigned id. `Pending` → `Sent`.
    ///
    /// `sent_at` is the time the transport accepted the message, which may be
    /// later than the time `authority` was issued.
    fn mark_sent<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        authority: &DelegatedAuthority,
        instance: InstanceId,
        message_id: Hash,
        sent_at: Timestamp,
    ) -> Result<(), ClauseError>;

    /// `Sent` → `Confirmed`.
    fn mark_confirmed<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        authority: &DelegatedAuthority,
        instance: InstanceId,
    ) -> Result<(), ClauseError>;

    /// `Pending` → `Cancelled`.
    fn cancel<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        authority: &DelegatedAuthority,
        instance: InstanceId,
    ) -> Result<(), ClauseError>;

    /// Record an inbound message, exactly once per instance.
    /// `Uninitialized` → `Received`; any other status fails `AlreadyProcessed`.
    fn process_incoming<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        authority: &DelegatedAuthority,
        instance: InstanceId,
        message: IncomingMessage,
    ) -> Result<(), ClauseError>;

    // ---- extract ----

    /// Inbound action code. `Received` only.
    fn extract_action<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Result<u8, ClauseError>;

    /// Inbound extra payload. `Received` only.
    fn extract_extra_payload<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Result<Vec<u8>, ClauseError>;

    /// Inbound content fingerprint. `Received` only.
    fn extract_fingerprint<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Result<Hash, ClauseError>;

    /// Inbound sender. `Received` only.
    fn extract_source_counterparty<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Result<Address, ClauseError>;

    /// Outbound message id. `Sent` or `Confirmed` only.
    fn extract_message_id<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Result<Hash, ClauseError>;

    // ---- read ----

    /// Full record snapshot.
    fn record<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> MessageRecord;

    /// Current status.
    fn status<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> CrossChainStatus {
        self.record(store, instance).status
    }

    /// Destination or source chain.
    fn chain<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> ChainSelector {
        self.record(store, instance).chain
    }

    /// Remote agreement address.
    fn counterparty<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Address {
        self.record(store, instance).counterparty
    }

    /// Action code.
    fn action<B: StorageBackend>(&self, store: &InstanceStore<B>, instance: InstanceId) -> u8 {
        self.record(store, instance).action
    }

    /// Content fingerprint.
    fn fingerprint<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Hash {
        self.record(store, instance).fingerprint
    }

    /// Extra payload.
    fn extra_payload<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Vec<u8> {
        self.record(store, instance).extra_payload
    }

    /// Controller identity.
    fn controller<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Address {
        self.record(store, instance).controller
    }

    /// Message id, zero until sent.
    fn message_id<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Hash {
        self.record(store, instance).message_id
    }

    /// Send time.
    fn sent_at<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Timestamp {
        self.record(store, instance).sent_at
    }

    /// Receive time.
    fn received_at<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Timestamp {
        self.record(store, instance).received_at
    }

    /// True while finalized and not yet sent or cancelled.
    fn is_pending<B: StorageBackend>(&self, store: &InstanceStore<B>, instance: InstanceId) -> bool {
        self.status(store, instance) == CrossChainStatus::Pending
    }

    /// True once sent, including after confirmation.
    fn is_sent_or_later<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> bool {
        matches!(
            self.status(store, instance),
            CrossChainStatus::Sent | CrossChainStatus::Confirmed
        )
    }

    /// True once an inbound message was processed.
    fn is_received<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> bool {
        self.status(store, instance) == CrossChainStatus::Received
    }
}
