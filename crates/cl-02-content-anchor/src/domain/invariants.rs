//! # Domain Invariants
//!
//! Input rules for content anchoring.

use super::value_objects::ContentAnchorConfig;
use sha3::{Digest, Keccak256};
use shared_types::{Address, ClauseError, Hash};

/// Keccak-256 fingerprint of raw content.
pub fn fingerprint_of(content: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(content);
    Hash::new(hasher.finalize().into())
}

/// Invariant: fingerprint is never the zero value.
pub fn invariant_nonzero_fingerprint(fingerprint: &Hash) -> Result<(), ClauseError> {
    if fingerprint.is_zero() {
        return Err(ClauseError::invalid("fingerprint", "zero fingerprint"));
    }
    Ok(())
}

/// Invariant: locator fits the configured bound.
pub fn invariant_locator_length(
    locator: &str,
    config: &ContentAnchorConfig,
) -> Result<(), ClauseError> {
    if locator.len() > config.max_locator_bytes {
        return Err(ClauseError::invalid(
            "locator",
            format!(
                "{} bytes exceeds limit of {}",
                locator.len(),
                config.max_locator_bytes
            ),
        ));
    }
    Ok(())
}

/// Invariant: only the registrant may seal or revoke.
pub fn invariant_registrant(caller: Address, registrant: Address) -> Result<(), ClauseError> {
    if caller != registrant {
        return Err(ClauseError::Unauthorized {
            caller,
            expected: registrant,
        });
    }
    Ok(())
}
