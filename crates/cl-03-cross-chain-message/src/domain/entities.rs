//! # Domain Entities
//!
//! The per-instance message record and the inbound message shape.

use super::value_objects::CrossChainStatus;
use cl_01_instance_storage::{ClauseRecord, ClauseTag};
use serde::{Deserialize, Serialize};
use shared_types::{Address, ChainSelector, Hash, Timestamp};

/// Cross-chain message record, keyed by instance id.
///
/// Fields are direction-agnostic: `chain` and `counterparty` hold the
/// destination for outbound messages and the source for inbound ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Current state.
    pub status: CrossChainStatus,
    /// Destination (outbound) or source (inbound) chain.
    pub chain: ChainSelector,
    /// Remote agreement address.
    pub counterparty: Address,
    /// Action code.
    pub action: u8,
    /// Content fingerprint.
    pub fingerprint: Hash,
    /// Opaque extra payload.
    pub extra_payload: Vec<u8>,
    /// Controller identity of an outbound message.
    pub controller: Address,
    /// Transport-assigned identifier, written once by `mark_sent`.
    pub message_id: Hash,
    /// Send time.
    pub sent_at: Timestamp,
    /// Receive time.
    pub received_at: Timestamp,
}

impl MessageRecord {
    /// First required outbound field that is still unset.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.chain.is_zero() {
            Some("destination_chain")
        } else if self.counterparty.is_zero() {
            Some("counterparty")
        } else if self.controller.is_zero() {
            Some("controller")
        } else {
            None
        }
    }
}

impl ClauseRecord for MessageRecord {
    const TAG: ClauseTag = ClauseTag::CrossChainMessage;
}

/// An inbound message as handed to `process_incoming`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncomingMessage {
    /// Chain the message came from.
    pub source_chain: ChainSelector,
    /// Sending agreement on the source chain.
    pub source_counterparty: Address,
    /// Action code.
    pub action: u8,
    /// Content fingerprint.
    pub fingerprint: Hash,
    /// Opaque extra payload.
    pub extra_payload: Vec<u8>,
}
