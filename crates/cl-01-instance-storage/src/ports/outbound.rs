//! # Outbound Ports
//!
//! The storage owner that all clause modules execute against.

use crate::domain::StorageKey;

/// Key/value storage owned by the orchestrator.
///
/// Writes take `&mut self`: the platform serializes all state-mutating calls,
/// and the borrow checker enforces the same discipline in-process.
pub trait StorageBackend: Send + Sync {
    /// Raw bytes stored under `key`, if any.
    fn get(&self, key: &StorageKey) -> Option<Vec<u8>>;

    /// Store raw bytes under `key`.
    fn put(&mut self, key: StorageKey, value: Vec<u8>);

    /// Number of records written.
    fn len(&self) -> usize;

    /// True if nothing was written yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
