//! In-Memory Transport Adapter
//!
//! Implements `CrossChainTransport` without a network. Enforces fees, chain
//! and source allow-lists, one send per instance and inbound replay
//! protection, so relay logic can be exercised end to end.

use crate::domain::{CrossChainConfig, TransportError};
use crate::ports::{CrossChainTransport, InboundDelivery, InboundReceiver, TransportStatus};
use async_trait::async_trait;
use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use shared_types::{Address, ChainSelector, Hash, InstanceId};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Default per-message fee.
pub const DEFAULT_BASE_FEE: u64 = 1_000;

#[derive(Clone, Debug)]
struct OutboundEntry {
    destination: ChainSelector,
    receiver: Address,
    payload: Vec<u8>,
    status: TransportStatus,
    message_id: Hash,
}

/// In-memory transport for tests and simulations.
pub struct InMemoryTransport {
    config: CrossChainConfig,
    base_fee: u64,
    chain_fees: RwLock<HashMap<ChainSelector, u64>>,
    /// Allowed (source chain, sender) pairs. Empty allows every sender.
    allowed_sources: RwLock<HashSet<(ChainSelector, Address)>>,
    outbound: RwLock<HashMap<InstanceId, OutboundEntry>>,
    delivered: RwLock<HashSet<InstanceId>>,
    nonce: RwLock<u64>,
}

impl InMemoryTransport {
    /// Create a transport with the given configuration.
    pub fn new(config: CrossChainConfig) -> Self {
        Self {
            config,
            base_fee: DEFAULT_BASE_FEE,
            chain_fees: RwLock::new(HashMap::new()),
            allowed_sources: RwLock::new(HashSet::new()),
            outbound: RwLock::new(HashMap::new()),
            delivered: RwLock::new(HashSet::new()),
            nonce: RwLock::new(0),
        }
    }

    /// Override the base fee.
    pub fn with_base_fee(mut self, fee: u64) -> Self {
        self.base_fee = fee;
        self
    }

    /// Quote a specific fee for one chain.
    pub fn set_chain_fee(&self, chain: ChainSelector, fee: u64) {
        self.chain_fees.write().insert(chain, fee);
    }

    /// Allow inbound deliveries from `sender` on `chain`.
    pub fn allow_source(&self, chain: ChainSelector, sender: Address) {
        self.allowed_sources.write().insert((chain, sender));
    }

    /// Destination, receiver and payload queued for `instance`.
    pub fn queued(&self, instance: InstanceId) -> Option<(ChainSelector, Address, Vec<u8>)> {
        self.outbound
            .read()
            .get(&instance)
            .map(|e| (e.destination, e.receiver, e.payload.clone()))
    }

    fn is_source_allowed(&self, chain: ChainSelector, sender: Address) -> bool {
        let sources = self.allowed_sources.read();
        sources.is_empty() || sources.contains(&(chain, sender))
    }

    /// Hand a delivery to `receiver`, enforcing allow-lists and replay
    /// protection on the transport side.
    pub async fn deliver(
        &self,
        receiver: &dyn InboundReceiver,
        delivery: InboundDelivery,
    ) -> Result<(), TransportError> {
        let instance = delivery.instance;
        if !self.config.is_chain_allowed(delivery.source_chain) {
            return Err(TransportError::ChainNotAllowed {
                chain: delivery.source_chain,
            });
        }
        if !self.is_source_allowed(delivery.source_chain, delivery.source_address) {
            warn!(
                chain = %delivery.source_chain,
                source = %delivery.source_address,
                "[cl-03] Delivery from unknown source rejected"
            );
            return Err(TransportError::SourceNotAllowed {
                chain: delivery.source_chain,
                source_address: delivery.source_address,
            });
        }
        if self.delivered.read().contains(&instance) {
            return Err(TransportError::AlreadyProcessed { instance });
        }

        receiver.receive(delivery).await?;
        self.delivered.write().insert(instance);
        debug!(instance = %instance, "[cl-03] Delivery accepted");
        Ok(())
    }
}

impl Default for InMemoryTransport {
    fn default() -> Self {
        Self::new(CrossChainConfig::default())
    }
}

/// Derive a message id from the queued entry and a transport nonce.
fn generate_message_id(instance: InstanceId, entry: &OutboundEntry, nonce: u64) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(b"clause-chain/message-id/v1");
    hasher.update(instance.as_bytes());
    hasher.update(entry.destination.0.to_be_bytes());
    hasher.update(entry.receiver.as_bytes());
    hasher.update(&entry.payload);
    hasher.update(nonce.to_be_bytes());
    Hash::new(hasher.finalize().into())
}

#[async_trait]
impl CrossChainTransport for InMemoryTransport {
    async fn queue(
        &self,
        instance: InstanceId,
        destination: ChainSelector,
        receiver: Address,
        payload: Vec<u8>,
    ) -> Result<(), TransportError> {
        if !self.is_chain_allowed(destination) {
            return Err(TransportError::ChainNotAllowed { chain: destination });
        }
        if payload.len() > self.config.max_payload_bytes {
            return Err(TransportError::Payload(format!(
                "{} bytes exceeds limit of {}",
                payload.len(),
                self.config.max_payload_bytes
            )));
        }

        let mut outbound = self.outbound.write();
        if let Some(existing) = outbound.get(&instance) {
            if existing.status != TransportStatus::Queued {
                return Err(TransportError::AlreadySent { instance });
            }
        }
        outbound.insert(
            instance,
            OutboundEntry {
                destination,
                receiver,
                payload,
                status: TransportStatus::Queued,
                message_id: Hash::ZERO,
            },
        );
        debug!(instance = %instance, destination = %destination, "[cl-03] Message queued");
        Ok(())
    }

    async fn send(&self, instance: InstanceId, fee: u64) -> Result<Hash, TransportError> {
        let mut outbound = self.outbound.write();
        let entry = outbound
            .get_mut(&instance)
            .ok_or(TransportError::MessageNotReady { instance })?;

        match entry.status {
            TransportStatus::Queued => {}
            TransportStatus::Unknown => return Err(TransportError::MessageNotReady { instance }),
            TransportStatus::Sent | TransportStatus::Processed => {
                return Err(TransportError::AlreadySent { instance })
            }
        }

        let required = self.fee(entry.destination);
        if fee < required {
            return Err(TransportError::InsufficientFee {
                required,
                provided: fee,
            });
        }

        let nonce = {
            let mut nonce = self.nonce.write();
            *nonce += 1;
            *nonce
        };
        let message_id = generate_message_id(instance, entry, nonce);
        entry.message_id = message_id;
        entry.status = TransportStatus::Sent;

        info!(
            instance = %instance,
            message_id = %message_id,
            destination = %entry.destination,
            "[cl-03] Message handed to network"
        );
        Ok(message_id)
    }

    async fn mark_processed(&self, instance: InstanceId) -> Result<(), TransportError> {
        let mut outbound = self.outbound.write();
        let entry = outbound
            .get_mut(&instance)
            .ok_or(TransportError::UnknownMessage { instance })?;
        if entry.status != TransportStatus::Sent {
            return Err(TransportError::MessageNotReady { instance });
        }
        entry.status = TransportStatus::Processed;
        Ok(())
    }

    fn status(&self, instance: InstanceId) -> TransportStatus {
        self.outbound
            .read()
            .get(&instance)
            .map(|e| e.status)
            .unwrap_or_default()
    }

    fn fee(&self, destination: ChainSelector) -> u64 {
        self.chain_fees
            .read()
            .get(&destination)
            .copied()
            .unwrap_or(self.base_fee)
    }

    fn is_chain_allowed(&self, chain: ChainSelector) -> bool {
        self.config.is_chain_allowed(chain)
    }
}
