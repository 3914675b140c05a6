//! # Cross-Chain Message Service
//!
//! `CrossChainMessageClause` implements `CrossChainMessageApi` against any
//! `InstanceStore`.

use crate::domain::{
    invariant_nonzero_address, invariant_nonzero_chain, invariant_nonzero_message_id,
    invariant_payload_size, CrossChainConfig, CrossChainStatus, IncomingMessage, MessageRecord,
};
use crate::ports::CrossChainMessageApi;
use cl_01_instance_storage::{InstanceStore, StorageBackend};
use shared_bus::ClauseEvent;
use shared_types::{
    Address, ChainSelector, ClauseError, ClauseState, DelegatedAuthority, Hash, InstanceId,
    StateSet, Timestamp,
};
use tracing::{debug, info, warn};

/// Cross-chain messaging clause module.
#[derive(Clone, Debug, Default)]
pub struct CrossChainMessageClause {
    config: CrossChainConfig,
}

impl CrossChainMessageClause {
    /// Create a clause with the given configuration.
    pub fn new(config: CrossChainConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &CrossChainConfig {
        &self.config
    }

    /// Run an outbound setter. Setters only apply before finalization.
    fn configure<B, F>(
        store: &mut InstanceStore<B>,
        instance: InstanceId,
        apply: F,
    ) -> Result<(), ClauseError>
    where
        B: StorageBackend,
        F: FnOnce(&mut MessageRecord) -> Result<(), ClauseError>,
    {
        store.update(instance, None, |record: &mut MessageRecord| {
            StateSet::of([CrossChainStatus::Uninitialized]).require(record.status)?;
            apply(record)
        })
    }

    fn outbound_transition<B: StorageBackend>(
        store: &mut InstanceStore<B>,
        authority: &DelegatedAuthority,
        instance: InstanceId,
        from: CrossChainStatus,
        to: CrossChainStatus,
    ) -> Result<MessageRecord, ClauseError> {
        authority.check(instance)?;
        store.update(instance, None, |record: &mut MessageRecord| {
            StateSet::of([from]).require(record.status)?;
            record.status = to;
            Ok(record.clone())
        })
    }

    fn extract<B, T, F>(
        store: &InstanceStore<B>,
        instance: InstanceId,
        allowed: StateSet<CrossChainStatus>,
        field: F,
    ) -> Result<T, ClauseError>
    where
        B: StorageBackend,
        F: FnOnce(MessageRecord) -> T,
    {
        let record: MessageRecord = store.load(instance, None)?;
        allowed.require(record.status)?;
        Ok(field(record))
    }

    fn received() -> StateSet<CrossChainStatus> {
        StateSet::of([CrossChainStatus::Received])
    }
}

impl CrossChainMessageApi for CrossChainMessageClause {
    fn set_destination_chain<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        instance: InstanceId,
        chain: ChainSelector,
    ) -> Result<(), ClauseError> {
        Self::configure(store, instance, |record| {
            invariant_nonzero_chain("destination_chain", chain)?;
            record.chain = chain;
            Ok(())
        })
    }

    fn set_counterparty<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        instance: InstanceId,
        counterparty: Address,
    ) -> Result<(), ClauseError> {
        Self::configure(store, instance, |record| {
            invariant_nonzero_address("counterparty", counterparty)?;
            record.counterparty = counterparty;
            Ok(())
        })
    }

    fn set_action<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        instance: InstanceId,
        action: u8,
    ) -> Result<(), ClauseError> {
        Self::configure(store, instance, |record| {
            record.action = action;
            Ok(())
        })
    }

    fn set_fingerprint<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        instance: InstanceId,
        fingerprint: Hash,
    ) -> Result<(), ClauseError> {
        Self::configure(store, instance, |record| {
            record.fingerprint = fingerprint;
            Ok(())
        })
    }

    fn set_extra_payload<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        instance: InstanceId,
        payload: Vec<u8>,
    ) -> Result<(), ClauseError> {
        Self::configure(store, instance, |record| {
            invariant_payload_size(&payload, &self.config)?;
            record.extra_payload = payload;
            Ok(())
        })
    }

    fn set_controller<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        instance: InstanceId,
        controller: Address,
    ) -> Result<(), ClauseError> {
        Self::configure(store, instance, |record| {
            invariant_nonzero_address("controller", controller)?;
            record.controller = controller;
            Ok(())
        })
    }

    fn finalize_configuration<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        instance: InstanceId,
    ) -> Result<(), ClauseError> {
        let record = store.update(instance, None, |record: &mut MessageRecord| {
            StateSet::of([CrossChainStatus::Uninitialized]).require(record.status)?;
            if let Some(field) = record.missing_field() {
                return Err(ClauseError::MissingConfiguration { field });
            }
            record.status = CrossChainStatus::Pending;
            Ok(record.clone())
        })?;

        debug!(
            instance = %instance,
            destination = %record.chain,
            counterparty = %record.counterparty,
            "[cl-03] Outbound message pending"
        );
        store.emit(ClauseEvent::MessageConfigured {
            instance,
            destination_chain: record.chain,
            counterparty: record.counterparty,
            controller: record.controller,
        });
        Ok(())
    }

    fn mark_sent<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        authority: &DelegatedAuthority,
        instance: InstanceId,
        message_id: Hash,
        sent_at: Timestamp,
    ) -> Result<(), ClauseError> {
        authority.check(instance)?;
        store.update(instance, None, |record: &mut MessageRecord| {
            StateSet::of([CrossChainStatus::Pending]).require(record.status)?;
            invariant_nonzero_message_id(&message_id)?;

            record.message_id = message_id;
            record.sent_at = sent_at;
            record.status = CrossChainStatus::Sent;
            Ok(())
        })?;

        info!(
            instance = %instance,
            message_id = %message_id,
            authorized_by = %authority.authorized_by(),
            "[cl-03] Message sent"
        );
        store.emit(ClauseEvent::MessageSent {
            instance,
            message_id,
            timestamp: sent_at,
        });
        Ok(())
    }

    fn mark_confirmed<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        authority: &DelegatedAuthority,
        instance: InstanceId,
    ) -> Result<(), ClauseError> {
        let record = Self::outbound_transition(
            store,
            authority,
            instance,
            CrossChainStatus::Sent,
            CrossChainStatus::Confirmed,
        )?;

        info!(instance = %instance, message_id = %record.message_id, "[cl-03] Message confirmed");
        store.emit(ClauseEvent::MessageConfirmed {
            instance,
            message_id: record.message_id,
        });
        Ok(())
    }

    fn cancel<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        authority: &DelegatedAuthority,
        instance: InstanceId,
    ) -> Result<(), ClauseError> {
        Self::outbound_transition(
            store,
            authority,
            instance,
            CrossChainStatus::Pending,
            CrossChainStatus::Cancelled,
        )?;

        info!(instance = %instance, "[cl-03] Message cancelled");
        store.emit(ClauseEvent::MessageCancelled { instance });
        Ok(())
    }

    fn process_incoming<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        authority: &DelegatedAuthority,
        instance: InstanceId,
        message: IncomingMessage,
    ) -> Result<(), ClauseError> {
        authority.check(instance)?;
        let now = authority.now();
        let IncomingMessage {
            source_chain,
            source_counterparty,
            action,
            fingerprint,
            extra_payload,
        } = message;

        store.update(instance, None, |record: &mut MessageRecord| {
            if !record.status.is_uninitialized() {
                warn!(instance = %instance, status = ?record.status, "[cl-03] Inbound replay rejected");
                return Err(ClauseError::AlreadyProcessed {
                    instance,
                    status: record.status.bits(),
                });
            }
            invariant_nonzero_chain("source_chain", source_chain)?;
            invariant_nonzero_address("source_counterparty", source_counterparty)?;
            invariant_payload_size(&extra_payload, &self.config)?;

            record.chain = source_chain;
            record.counterparty = source_counterparty;
            record.action = action;
            record.fingerprint = fingerprint;
            record.extra_payload = extra_payload;
            record.received_at = now;
            record.status = CrossChainStatus::Received;
            Ok(())
        })?;

        info!(
            instance = %instance,
            source_chain = %source_chain,
            action,
            "[cl-03] Inbound message processed"
        );
        store.emit(ClauseEvent::MessageReceived {
            instance,
            source_chain,
            source_counterparty,
            action,
            fingerprint,
            timestamp: now,
        });
        Ok(())
    }

    fn extract_action<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Result<u8, ClauseError> {
        Self::extract(store, instance, Self::received(), |r| r.action)
    }

    fn extract_extra_payload<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Result<Vec<u8>, ClauseError> {
        Self::extract(store, instance, Self::received(), |r| r.extra_payload)
    }

    fn extract_fingerprint<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Result<Hash, ClauseError> {
        Self::extract(store, instance, Self::received(), |r| r.fingerprint)
    }

    fn extract_source_counterparty<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Result<Address, ClauseError> {
        Self::extract(store, instance, Self::received(), |r| r.counterparty)
    }

    fn extract_message_id<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Result<Hash, ClauseError> {
        let sent = StateSet::of([CrossChainStatus::Sent, CrossChainStatus::Confirmed]);
        Self::extract(store, instance, sent, |r| r.message_id)
    }

    fn record<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> MessageRecord {
        store.read(instance, None)
    }
}
