//! # Instance Store
//!
//! Typed, all-or-nothing access to per-instance clause records.

use crate::adapters::InMemoryBackend;
use crate::domain::{ClauseRecord, StorageKey};
use crate::ports::StorageBackend;
use parking_lot::Mutex;
use shared_bus::ClauseEvent;
use shared_types::{ClauseError, InstanceId, StorageError, SubIndex};
use std::sync::Arc;
use tracing::{error, trace};

/// Store shared between async tasks of one orchestrator.
pub type SharedInstanceStore<B = InMemoryBackend> = Arc<Mutex<InstanceStore<B>>>;

/// Storage owner every clause module executes against.
pub struct InstanceStore<B: StorageBackend = InMemoryBackend> {
    backend: B,
    /// Events of committed transitions, oldest first.
    pending: Vec<ClauseEvent>,
}

impl InstanceStore<InMemoryBackend> {
    /// Create a store over a fresh in-memory backend.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(InMemoryBackend::new())
    }
}

impl Default for InstanceStore<InMemoryBackend> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<B: StorageBackend> InstanceStore<B> {
    /// Create a store over `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            pending: Vec::new(),
        }
    }

    /// Wrap the store for sharing between tasks.
    pub fn into_shared(self) -> SharedInstanceStore<B> {
        Arc::new(Mutex::new(self))
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn key<R: ClauseRecord>(instance: InstanceId, sub_index: Option<SubIndex>) -> StorageKey {
        StorageKey {
            tag: R::TAG,
            instance,
            sub_index,
        }
    }

    /// Load a record, `R::default()` if it was never written.
    pub fn load<R: ClauseRecord>(
        &self,
        instance: InstanceId,
        sub_index: Option<SubIndex>,
    ) -> Result<R, StorageError> {
        let key = Self::key::<R>(instance, sub_index);
        match self.backend.get(&key) {
            None => Ok(R::default()),
            Some(bytes) => bincode::deserialize(&bytes).map_err(|e| StorageError::Decode {
                clause: R::TAG.name(),
                instance,
                reason: e.to_string(),
            }),
        }
    }

    /// Total read: a record that cannot be decoded reads as the default.
    pub fn read<R: ClauseRecord>(&self, instance: InstanceId, sub_index: Option<SubIndex>) -> R {
        self.load(instance, sub_index).unwrap_or_else(|e| {
            error!(
                error = %e,
                record = std::any::type_name::<R>(),
                "[cl-01] Unreadable record served as default"
            );
            R::default()
        })
    }

    /// Run a transition against a copy of the record and commit it only if the
    /// transition succeeds. On error storage is left untouched.
    pub fn update<R, T, F>(
        &mut self,
        instance: InstanceId,
        sub_index: Option<SubIndex>,
        transition: F,
    ) -> Result<T, ClauseError>
    where
        R: ClauseRecord,
        F: FnOnce(&mut R) -> Result<T, ClauseError>,
    {
        let mut record: R = self.load(instance, sub_index)?;
        let output = transition(&mut record)?;

        let bytes = bincode::serialize(&record).map_err(|e| StorageError::Encode {
            clause: R::TAG.name(),
            reason: e.to_string(),
        })?;
        let key = Self::key::<R>(instance, sub_index);
        trace!(key = %key, bytes = bytes.len(), "[cl-01] Record committed");
        self.backend.put(key, bytes);

        Ok(output)
    }

    /// Queue an event of a committed transition.
    pub fn emit(&mut self, event: ClauseEvent) {
        self.pending.push(event);
    }

    /// Events queued so far.
    pub fn pending_events(&self) -> &[ClauseEvent] {
        &self.pending
    }

    /// Take all queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<ClauseEvent> {
        std::mem::take(&mut self.pending)
    }
}
