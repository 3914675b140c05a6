//! # Domain Invariants
//!
//! Input rules for cross-chain messages.

use super::value_objects::CrossChainConfig;
use shared_types::{Address, ChainSelector, ClauseError, Hash};

/// Invariant: chain selectors are never zero.
pub fn invariant_nonzero_chain(field: &'static str, chain: ChainSelector) -> Result<(), ClauseError> {
    if chain.is_zero() {
        return Err(ClauseError::invalid(field, "zero chain selector"));
    }
    Ok(())
}

/// Invariant: counterparty and controller addresses are never zero.
pub fn invariant_nonzero_address(field: &'static str, address: Address) -> Result<(), ClauseError> {
    if address.is_zero() {
        return Err(ClauseError::invalid(field, "zero address"));
    }
    Ok(())
}

/// Invariant: assigned message ids are never zero.
pub fn invariant_nonzero_message_id(message_id: &Hash) -> Result<(), ClauseError> {
    if message_id.is_zero() {
        return Err(ClauseError::invalid("message_id", "zero message id"));
    }
    Ok(())
}

/// Invariant: extra payload fits the configured bound.
pub fn invariant_payload_size(payload: &[u8], config: &CrossChainConfig) -> Result<(), ClauseError> {
    if payload.len() > config.max_payload_bytes {
        return Err(ClauseError::invalid(
            "extra_payload",
            format!(
                "{} bytes exceeds limit of {}",
                payload.len(),
                config.max_payload_bytes
            ),
        ));
    }
    Ok(())
}
