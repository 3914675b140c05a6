//! In-Memory Storage Adapter
//!
//! Implements `StorageBackend` with a map keyed by the typed `StorageKey`.

use crate::domain::StorageKey;
use crate::ports::StorageBackend;
use std::collections::HashMap;

/// In-memory storage owner.
#[derive(Clone, Debug, Default)]
pub struct InMemoryBackend {
    /// Encoded records by typed key.
    records: HashMap<StorageKey, Vec<u8>>,
}

impl InMemoryBackend {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over the keys written so far.
    pub fn keys(&self) -> impl Iterator<Item = &StorageKey> {
        self.records.keys()
    }
}

impl StorageBackend for InMemoryBackend {
    fn get(&self, key: &StorageKey) -> Option<Vec<u8>> {
        self.records.get(key).cloned()
    }

    fn put(&mut self, key: StorageKey, value: Vec<u8>) {
        self.records.insert(key, value);
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
