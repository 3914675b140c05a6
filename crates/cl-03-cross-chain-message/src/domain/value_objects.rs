//! # Domain Value Objects
//!
//! Status encoding, wire payload and configuration for cross-chain messages.

use super::errors::TransportError;
use serde::{Deserialize, Serialize};
use shared_types::{ChainSelector, ClauseState, Hash};

/// Cross-chain message state machine.
///
/// Outbound and inbound share this one status field per instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum CrossChainStatus {
    /// Nothing configured or received.
    #[default]
    Uninitialized,
    /// Outbound configuration finalized, waiting for send.
    Pending,
    /// Outbound cancelled before send.
    Cancelled,
    /// Handed to the transport, message id assigned.
    Sent,
    /// Delivery confirmed.
    Confirmed,
    /// Inbound message processed.
    Received,
}

impl CrossChainStatus {
    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Confirmed | Self::Received)
    }
}

impl ClauseState for CrossChainStatus {
    const CLAUSE: &'static str = "cross-chain-message";
    const UNINITIALIZED: Self = Self::Uninitialized;

    fn bits(self) -> u16 {
        match self {
            Self::Uninitialized => 0,
            Self::Pending => 1 << 1,
            Self::Cancelled => 1 << 2,
            Self::Sent => 1 << 3,
            Self::Confirmed => 1 << 4,
            Self::Received => 1 << 5,
        }
    }

    fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0 => Some(Self::Uninitialized),
            0b00_0010 => Some(Self::Pending),
            0b00_0100 => Some(Self::Cancelled),
            0b00_1000 => Some(Self::Sent),
            0b01_0000 => Some(Self::Confirmed),
            0b10_0000 => Some(Self::Received),
            _ => None,
        }
    }
}

impl From<CrossChainStatus> for u16 {
    fn from(status: CrossChainStatus) -> Self {
        status.bits()
    }
}

impl TryFrom<u16> for CrossChainStatus {
    type Error = String;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or_else(|| format!("invalid cross-chain status bits {bits:#06x}"))
    }
}

/// Body carried between agreements on different chains.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    /// Action code for the receiving agreement.
    pub action: u8,
    /// Content fingerprint the action refers to.
    pub fingerprint: Hash,
    /// Opaque application data.
    pub extra: Vec<u8>,
}

impl MessagePayload {
    /// Encode for the transport.
    pub fn encode(&self) -> Result<Vec<u8>, TransportError> {
        bincode::serialize(self).map_err(|e| TransportError::Payload(e.to_string()))
    }

    /// Decode bytes handed over by the transport.
    pub fn decode(bytes: &[u8]) -> Result<Self, TransportError> {
        bincode::deserialize(bytes).map_err(|e| TransportError::Payload(e.to_string()))
    }
}

/// Cross-chain configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossChainConfig {
    /// Largest accepted extra payload in bytes.
    pub max_payload_bytes: usize,
    /// Chains the transport will talk to. Empty allows every chain.
    pub allowed_chains: Vec<ChainSelector>,
}

impl CrossChainConfig {
    /// Check if `chain` passes the allow-list.
    pub fn is_chain_allowed(&self, chain: ChainSelector) -> bool {
        self.allowed_chains.is_empty() || self.allowed_chains.contains(&chain)
    }
}

impl Default for CrossChainConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: 30 * 1024,
            allowed_chains: Vec::new(),
        }
    }
}
