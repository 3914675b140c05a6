//! # Storage Keys
//!
//! Typed composite keys. Equality on `StorageKey` is structural over all three
//! components, so keys that differ only by clause tag or only by sub-index are
//! distinct by construction.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use shared_types::{Hash, InstanceId, SubIndex};
use std::fmt;

/// Domain separator for flat slot derivation.
const SLOT_DOMAIN: &[u8] = b"clause-chain/storage/v1";

/// Clause type owning a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum ClauseTag {
    /// Content anchoring records.
    ContentAnchor = 2,
    /// Cross-chain message records.
    CrossChainMessage = 3,
    /// Deadline records (sub-indexed).
    Deadline = 4,
    /// Arbitration linkage records.
    ArbitrationLink = 5,
}

impl ClauseTag {
    /// Stable name used in logs and errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ClauseTag::ContentAnchor => "content-anchor",
            ClauseTag::CrossChainMessage => "cross-chain-message",
            ClauseTag::Deadline => "deadline",
            ClauseTag::ArbitrationLink => "arbitration-link",
        }
    }

    /// Single-byte encoding.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ClauseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Location of exactly one record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StorageKey {
    /// Owning clause type.
    pub tag: ClauseTag,
    /// Agreement instance.
    pub instance: InstanceId,
    /// Sub-index for clauses with several records per instance.
    pub sub_index: Option<SubIndex>,
}

impl StorageKey {
    /// Key for a clause with one record per instance.
    #[must_use]
    pub const fn instance(tag: ClauseTag, instance: InstanceId) -> Self {
        Self {
            tag,
            instance,
            sub_index: None,
        }
    }

    /// Key for a sub-indexed record.
    #[must_use]
    pub const fn indexed(tag: ClauseTag, instance: InstanceId, index: SubIndex) -> Self {
        Self {
            tag,
            instance,
            sub_index: Some(index),
        }
    }

    /// Fixed-width encoding: tag (1) | instance (32) | has-index (1) | index (8).
    ///
    /// Every field has a fixed width and the presence byte distinguishes
    /// `None` from `Some(0)`, so the encoding is injective.
    #[must_use]
    pub fn encode(&self) -> [u8; 42] {
        let mut out = [0u8; 42];
        out[0] = self.tag.code();
        out[1..33].copy_from_slice(self.instance.as_bytes());
        if let Some(index) = self.sub_index {
            out[33] = 1;
            out[34..42].copy_from_slice(&index.to_be_bytes());
        }
        out
    }

    /// Flat 32-byte slot for orchestrators backed by a hash-keyed store.
    #[must_use]
    pub fn slot(&self) -> Hash {
        let mut hasher = Sha256::new();
        hasher.update(SLOT_DOMAIN);
        hasher.update(self.encode());
        Hash::new(hasher.finalize().into())
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sub_index {
            Some(index) => write!(f, "{}/{}[{}]", self.tag, self.instance, index),
            None => write!(f, "{}/{}", self.tag, self.instance),
        }
    }
}
