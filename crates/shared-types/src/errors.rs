//! # Error Types
//!
//! The clause error taxonomy shared by every clause subsystem.
//!
//! All errors are synchronous and carry structured detail (offending values,
//! raw status bits, allowed-state masks) so callers can match on variants.
//! A failed operation never leaves a partial state change behind.

use crate::primitives::{Address, InstanceId, SubIndex, Timestamp};
use thiserror::Error;

/// Errors raised by the instance storage layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// A record could not be encoded for storage.
    #[error("Failed to encode {clause} record: {reason}")]
    Encode {
        /// Clause type of the record.
        clause: &'static str,
        /// Encoder message.
        reason: String,
    },

    /// Stored bytes could not be decoded into the expected record.
    #[error("Corrupt {clause} record for instance {instance}: {reason}")]
    Decode {
        /// Clause type of the record.
        clause: &'static str,
        /// Instance the record belongs to.
        instance: InstanceId,
        /// Decoder message.
        reason: String,
    },
}

/// Errors returned by clause operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClauseError {
    /// Malformed argument (zero fingerprint/address/chain, out-of-range code).
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput {
        /// Offending parameter.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// Operation attempted outside its required state.
    #[error("Wrong {clause} state: status {actual:#06x} not in allowed set {allowed:#06x}")]
    WrongState {
        /// Clause type.
        clause: &'static str,
        /// Stored status bits.
        actual: u16,
        /// Allowed-state mask (bit 0 = uninitialized).
        allowed: u16,
    },

    /// A required configuration field is still unset.
    #[error("Missing configuration: {field}")]
    MissingConfiguration {
        /// First missing field.
        field: &'static str,
    },

    /// Caller is not the authorized identity.
    #[error("Unauthorized: caller {caller} is not {expected}")]
    Unauthorized {
        /// Identity that attempted the call.
        caller: Address,
        /// Identity that is allowed to call.
        expected: Address,
    },

    /// A delegated authority scoped to another instance was presented.
    #[error("Capability for instance {granted} presented for instance {requested}")]
    CapabilityMismatch {
        /// Instance the capability was issued for.
        granted: InstanceId,
        /// Instance the operation targets.
        requested: InstanceId,
    },

    /// Inbound message for this instance was already processed (or the
    /// instance is in use by the outbound path).
    #[error("Instance {instance} already processed (status {status:#06x})")]
    AlreadyProcessed {
        /// Instance identifier.
        instance: InstanceId,
        /// Stored status bits.
        status: u16,
    },

    /// A deadline already exists under this key.
    #[error("Deadline already set for {instance}[{index}]")]
    DeadlineAlreadySet {
        /// Instance identifier.
        instance: InstanceId,
        /// Deadline sub-index.
        index: SubIndex,
    },

    /// The deadline was already enforced and is frozen.
    #[error("Deadline already enforced for {instance}[{index}]")]
    DeadlineAlreadyEnforced {
        /// Instance identifier.
        instance: InstanceId,
        /// Deadline sub-index.
        index: SubIndex,
    },

    /// No deadline is set under this key.
    #[error("Deadline not set for {instance}[{index}]")]
    DeadlineNotSet {
        /// Instance identifier.
        instance: InstanceId,
        /// Deadline sub-index.
        index: SubIndex,
    },

    /// Deadline is not after the current time.
    #[error("Deadline {deadline} is not after current time {now}")]
    DeadlineInPast {
        /// Requested deadline.
        deadline: Timestamp,
        /// Current time.
        now: Timestamp,
    },

    /// Deadline has not been reached yet.
    #[error("Deadline {deadline} not expired at {now}")]
    DeadlineNotExpired {
        /// Stored deadline.
        deadline: Timestamp,
        /// Current time.
        now: Timestamp,
    },

    /// Deadline has no controller and can never be modified or cleared.
    #[error("Deadline {instance}[{index}] is immutable")]
    DeadlineImmutable {
        /// Instance identifier.
        instance: InstanceId,
        /// Deadline sub-index.
        index: SubIndex,
    },

    /// Arbitration was already linked for this instance.
    #[error("Arbitration already linked for {instance}")]
    ArbitrationAlreadyLinked {
        /// Instance identifier.
        instance: InstanceId,
    },

    /// A ruling was already executed for this instance.
    #[error("Dispute already resolved for {instance}")]
    AlreadyResolved {
        /// Instance identifier.
        instance: InstanceId,
    },

    /// Storage layer failure.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ClauseError {
    /// Shorthand for `InvalidInput`.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Returns true for one-shot / idempotency violations.
    #[must_use]
    pub fn is_replay(&self) -> bool {
        matches!(
            self,
            Self::AlreadyProcessed { .. }
                | Self::DeadlineAlreadySet { .. }
                | Self::DeadlineAlreadyEnforced { .. }
                | Self::ArbitrationAlreadyLinked { .. }
                | Self::AlreadyResolved { .. }
        )
    }
}
