//! # Domain Errors
//!
//! Errors raised across the transport boundary.

use shared_types::{Address, ChainSelector, ClauseError, Hash, InstanceId};
use thiserror::Error;

/// Cross-chain transport error types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Fee paid is below the quoted fee.
    #[error("Insufficient fee: required {required}, provided {provided}")]
    InsufficientFee {
        /// Quoted fee.
        required: u64,
        /// Fee offered.
        provided: u64,
    },

    /// Nothing queued for the instance, or the clause is not ready to send.
    #[error("Message for instance {instance} not ready")]
    MessageNotReady {
        /// Instance identifier.
        instance: InstanceId,
    },

    /// The instance's message was already sent.
    #[error("Message for instance {instance} already sent")]
    AlreadySent {
        /// Instance identifier.
        instance: InstanceId,
    },

    /// Inbound replay.
    #[error("Inbound message for instance {instance} already processed")]
    AlreadyProcessed {
        /// Instance identifier.
        instance: InstanceId,
    },

    /// Chain is not on the allow-list.
    #[error("Chain {chain} not allowed")]
    ChainNotAllowed {
        /// Rejected chain.
        chain: ChainSelector,
    },

    /// Source sender is not on the allow-list.
    #[error("Source {source_address} on chain {chain} not allowed")]
    SourceNotAllowed {
        /// Source chain.
        chain: ChainSelector,
        /// Rejected sender.
        source_address: Address,
    },

    /// The transport has no record for the instance.
    #[error("No transport record for instance {instance}")]
    UnknownMessage {
        /// Instance identifier.
        instance: InstanceId,
    },

    /// The transport sent the message but the clause refused `mark_sent`.
    ///
    /// The message is on the wire and the clause record disagrees. The
    /// orchestrator reconciles using `message_id`.
    #[error("Message {message_id} for instance {instance} sent but not recorded: {reason}")]
    SentNotRecorded {
        /// Instance identifier.
        instance: InstanceId,
        /// Transport-assigned identifier of the sent message.
        message_id: Hash,
        /// Why the clause rejected the transition.
        reason: ClauseError,
    },

    /// Payload could not be encoded, decoded or is too large.
    #[error("Payload error: {0}")]
    Payload(String),

    /// The clause rejected the transition.
    #[error("Clause error: {0}")]
    Clause(#[from] ClauseError),
}
