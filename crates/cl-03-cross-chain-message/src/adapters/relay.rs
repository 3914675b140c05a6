//! Message Relay Adapter
//!
//! Glues the clause to a `CrossChainTransport`:
//! - outbound: read the pending record, queue and send it, then `mark_sent`
//! - inbound: decode the delivery and run `process_incoming`
//!
//! Committed events are published on the event bus when one is attached.

use crate::domain::{
    CrossChainStatus, IncomingMessage, MessagePayload, MessageRecord, TransportError,
};
use crate::ports::{CrossChainMessageApi, CrossChainTransport, InboundDelivery, InboundReceiver};
use crate::service::CrossChainMessageClause;
use async_trait::async_trait;
use cl_01_instance_storage::{InMemoryBackend, InstanceStore, SharedInstanceStore, StorageBackend};
use shared_bus::EventPublisher;
use shared_types::{Address, ClauseError, Clock, DelegatedAuthority, Hash, InstanceId};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Drives cross-chain messages between a shared store and a transport.
pub struct MessageRelay<T: CrossChainTransport, B: StorageBackend = InMemoryBackend> {
    clause: CrossChainMessageClause,
    store: SharedInstanceStore<B>,
    transport: Arc<T>,
    clock: Arc<dyn Clock>,
    /// Identity the relay acts as when it authorizes inbound processing.
    identity: Address,
    bus: Option<Arc<dyn EventPublisher>>,
}

impl<T: CrossChainTransport, B: StorageBackend> MessageRelay<T, B> {
    /// Create a relay.
    pub fn new(
        clause: CrossChainMessageClause,
        store: SharedInstanceStore<B>,
        transport: Arc<T>,
        clock: Arc<dyn Clock>,
        identity: Address,
    ) -> Self {
        Self {
            clause,
            store,
            transport,
            clock,
            identity,
            bus: None,
        }
    }

    /// Publish committed events on `bus`.
    pub fn with_bus(mut self, bus: Arc<dyn EventPublisher>) -> Self {
        self.bus = Some(bus);
        self
    }

    /// The transport in use.
    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    /// The shared store in use.
    pub fn store(&self) -> &SharedInstanceStore<B> {
        &self.store
    }

    /// Queue and send the pending message of `instance`, paying `fee`.
    ///
    /// `authority` is the orchestrator's authorization for this instance.
    /// The store lock is not held across transport calls, so the clause is
    /// checked for `Pending` again right before `send`. If the clause still
    /// refuses `mark_sent` after the transport sent the message, the message
    /// id comes back in `TransportError::SentNotRecorded`.
    pub async fn dispatch(
        &self,
        authority: &DelegatedAuthority,
        instance: InstanceId,
        fee: u64,
    ) -> Result<Hash, TransportError> {
        authority.check(instance)?;
        let (destination, receiver, payload) = {
            let store = self.store.lock();
            let record = self.pending_record(&store, instance)?;
            let payload = MessagePayload {
                action: record.action,
                fingerprint: record.fingerprint,
                extra: record.extra_payload,
            };
            (record.chain, record.counterparty, payload.encode()?)
        };

        self.transport
            .queue(instance, destination, receiver, payload)
            .await?;
        {
            let store = self.store.lock();
            self.pending_record(&store, instance)?;
        }
        let message_id = self.transport.send(instance, fee).await?;

        let recorded = {
            let mut store = self.store.lock();
            self.clause.mark_sent(
                &mut *store,
                authority,
                instance,
                message_id,
                self.clock.now(),
            )
        };
        if let Err(reason) = recorded {
            error!(
                instance = %instance,
                message_id = %message_id,
                error = %reason,
                "[cl-03] Message sent but clause refused mark_sent"
            );
            return Err(TransportError::SentNotRecorded {
                instance,
                message_id,
                reason,
            });
        }
        self.flush().await;
        Ok(message_id)
    }

    /// Finalize a sent message on the transport and confirm it in the clause.
    pub async fn confirm(
        &self,
        authority: &DelegatedAuthority,
        instance: InstanceId,
    ) -> Result<(), TransportError> {
        authority.check(instance)?;
        self.transport.mark_processed(instance).await?;
        {
            let mut store = self.store.lock();
            self.clause.mark_confirmed(&mut *store, authority, instance)?;
        }
        self.flush().await;
        Ok(())
    }

    /// The clause record of `instance`, provided it is still `Pending`.
    fn pending_record(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Result<MessageRecord, TransportError> {
        let record = self.clause.record(store, instance);
        if record.status != CrossChainStatus::Pending {
            debug!(instance = %instance, status = ?record.status, "[cl-03] Message not pending");
            return Err(TransportError::MessageNotReady { instance });
        }
        Ok(record)
    }

    /// Publish and clear the store's pending events.
    async fn flush(&self) {
        let events = self.store.lock().drain_events();
        if let Some(bus) = &self.bus {
            bus.publish_all(events).await;
        }
    }
}

#[async_trait]
impl<T, B> InboundReceiver for MessageRelay<T, B>
where
    T: CrossChainTransport + 'static,
    B: StorageBackend + 'static,
{
    async fn receive(&self, delivery: InboundDelivery) -> Result<(), TransportError> {
        let instance = delivery.instance;
        let payload = MessagePayload::decode(&delivery.payload)?;
        let authority = DelegatedAuthority::grant(instance, self.identity, self.clock.now());

        let result = {
            let mut store = self.store.lock();
            self.clause.process_incoming(
                &mut *store,
                &authority,
                instance,
                IncomingMessage {
                    source_chain: delivery.source_chain,
                    source_counterparty: delivery.source_address,
                    action: payload.action,
                    fingerprint: payload.fingerprint,
                    extra_payload: payload.extra,
                },
            )
        };

        match result {
            Ok(()) => {
                info!(instance = %instance, "[cl-03] Delivery processed");
                self.flush().await;
                Ok(())
            }
            Err(ClauseError::AlreadyProcessed { .. }) => {
                debug!(instance = %instance, "[cl-03] Duplicate delivery");
                Err(TransportError::AlreadyProcessed { instance })
            }
            Err(e) => Err(e.into()),
        }
    }
}
