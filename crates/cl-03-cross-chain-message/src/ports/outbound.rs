//! # Outbound Ports
//!
//! The transport boundary. Relayer and bridge networks implement
//! `CrossChainTransport`; whatever receives deliveries implements
//! `InboundReceiver`.

use crate::domain::TransportError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared_types::{Address, ChainSelector, Hash, InstanceId};

/// Transport-side lifecycle of one instance's outbound message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportStatus {
    /// Nothing queued.
    #[default]
    Unknown,
    /// Intent recorded, not yet sent.
    Queued,
    /// Handed to the network.
    Sent,
    /// Finalized by `mark_processed`.
    Processed,
}

/// A delivery handed to the receiving side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InboundDelivery {
    /// Receiving agreement instance.
    pub instance: InstanceId,
    /// Chain the message came from.
    pub source_chain: ChainSelector,
    /// Sender on the source chain.
    pub source_address: Address,
    /// Encoded message body.
    pub payload: Vec<u8>,
}

/// Cross-chain transport - outbound port.
#[async_trait]
pub trait CrossChainTransport: Send + Sync {
    /// Record an outbound intent for `instance`.
    async fn queue(
        &self,
        instance: InstanceId,
        destination: ChainSelector,
        receiver: Address,
        payload: Vec<u8>,
    ) -> Result<(), TransportError>;

    /// Send the queued message, paying `fee`. Returns the message id.
    async fn send(&self, instance: InstanceId, fee: u64) -> Result<Hash, TransportError>;

    /// Finalize a sent message.
    async fn mark_processed(&self, instance: InstanceId) -> Result<(), TransportError>;

    /// Current transport status for `instance`.
    fn status(&self, instance: InstanceId) -> TransportStatus;

    /// Fee quoted for sending to `destination`.
    fn fee(&self, destination: ChainSelector) -> u64;

    /// Check if the transport talks to `chain`.
    fn is_chain_allowed(&self, chain: ChainSelector) -> bool;
}

/// Receiving side of a delivery - outbound port.
///
/// Implementations must fail `AlreadyProcessed` on replay.
#[async_trait]
pub trait InboundReceiver: Send + Sync {
    /// Handle one delivery.
    async fn receive(&self, delivery: InboundDelivery) -> Result<(), TransportError>;
}
