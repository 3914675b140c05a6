//! # Content Anchor Service
//!
//! `ContentAnchorClause` implements `ContentAnchorApi` against any
//! `InstanceStore`. It holds configuration only; all state lives in the store.

use crate::domain::{
    fingerprint_of, invariant_locator_length, invariant_nonzero_fingerprint,
    invariant_registrant, ContentAnchorConfig, ContentRecord, ContentStatus,
};
use crate::ports::ContentAnchorApi;
use cl_01_instance_storage::{InstanceStore, StorageBackend};
use shared_bus::ClauseEvent;
use shared_types::{Address, CallContext, ClauseError, Hash, InstanceId, StateSet};
use tracing::{debug, info, warn};

/// Content anchoring clause module.
#[derive(Clone, Debug, Default)]
pub struct ContentAnchorClause {
    config: ContentAnchorConfig,
}

impl ContentAnchorClause {
    /// Create a clause with the given configuration.
    pub fn new(config: ContentAnchorConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &ContentAnchorConfig {
        &self.config
    }

    fn extractable() -> StateSet<ContentStatus> {
        StateSet::of([ContentStatus::Registered, ContentStatus::Sealed])
    }

    fn live_record<B: StorageBackend>(
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Result<ContentRecord, ClauseError> {
        let record: ContentRecord = store.load(instance, None)?;
        Self::extractable().require(record.status)?;
        Ok(record)
    }

    fn register<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        call: &CallContext,
        instance: InstanceId,
        fingerprint: Hash,
        locator: Option<&str>,
    ) -> Result<(), ClauseError> {
        let locator = locator.unwrap_or_default();

        store.update(instance, None, |record: &mut ContentRecord| {
            StateSet::of([ContentStatus::Uninitialized]).require(record.status)?;
            invariant_nonzero_fingerprint(&fingerprint)?;
            invariant_locator_length(locator, &self.config)?;

            record.status = ContentStatus::Registered;
            record.fingerprint = fingerprint;
            record.locator = locator.to_string();
            record.registrant = call.caller;
            record.registered_at = call.now;
            Ok(())
        })?;

        debug!(
            instance = %instance,
            fingerprint = %fingerprint,
            registrant = %call.caller,
            "[cl-02] Content registered"
        );
        store.emit(ClauseEvent::ContentRegistered {
            instance,
            fingerprint,
            locator: locator.to_string(),
            registrant: call.caller,
            timestamp: call.now,
        });
        Ok(())
    }

    /// Shared body of seal and revoke: registrant-only exit from `Registered`.
    fn close<B: StorageBackend>(
        store: &mut InstanceStore<B>,
        call: &CallContext,
        instance: InstanceId,
        to: ContentStatus,
    ) -> Result<Hash, ClauseError> {
        store.update(instance, None, |record: &mut ContentRecord| {
            StateSet::of([ContentStatus::Registered]).require(record.status)?;
            if let Err(e) = invariant_registrant(call.caller, record.registrant) {
                warn!(instance = %instance, caller = %call.caller, "[cl-02] Rejected non-registrant");
                return Err(e);
            }

            record.status = to;
            if to == ContentStatus::Sealed {
                record.sealed_at = call.now;
            }
            Ok(record.fingerprint)
        })
    }
}

impl ContentAnchorApi for ContentAnchorClause {
    fn intake_content<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        call: &CallContext,
        instance: InstanceId,
        content: &[u8],
        locator: Option<&str>,
    ) -> Result<Hash, ClauseError> {
        if content.is_empty() {
            return Err(ClauseError::invalid("content", "empty content"));
        }
        let fingerprint = fingerprint_of(content);
        self.register(store, call, instance, fingerprint, locator)?;
        Ok(fingerprint)
    }

    fn intake_hash<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        call: &CallContext,
        instance: InstanceId,
        fingerprint: Hash,
        locator: Option<&str>,
    ) -> Result<(), ClauseError> {
        self.register(store, call, instance, fingerprint, locator)
    }

    fn seal<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        call: &CallContext,
        instance: InstanceId,
    ) -> Result<(), ClauseError> {
        let fingerprint = Self::close(store, call, instance, ContentStatus::Sealed)?;

        info!(instance = %instance, fingerprint = %fingerprint, "[cl-02] Content sealed");
        store.emit(ClauseEvent::ContentSealed {
            instance,
            fingerprint,
            timestamp: call.now,
        });
        Ok(())
    }

    fn revoke<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        call: &CallContext,
        instance: InstanceId,
    ) -> Result<(), ClauseError> {
        let fingerprint = Self::close(store, call, instance, ContentStatus::Revoked)?;

        info!(instance = %instance, fingerprint = %fingerprint, "[cl-02] Content revoked");
        store.emit(ClauseEvent::ContentRevoked {
            instance,
            fingerprint,
            timestamp: call.now,
        });
        Ok(())
    }

    fn extract_fingerprint<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Result<Hash, ClauseError> {
        Ok(Self::live_record(store, instance)?.fingerprint)
    }

    fn extract_locator<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Result<String, ClauseError> {
        Ok(Self::live_record(store, instance)?.locator)
    }

    fn extract_registrant<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Result<Address, ClauseError> {
        Ok(Self::live_record(store, instance)?.registrant)
    }

    fn record<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> ContentRecord {
        store.read(instance, None)
    }

    fn verify<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
        candidate: &Hash,
    ) -> bool {
        let record = self.record(store, instance);
        record.is_live() && record.fingerprint == *candidate
    }

    fn verify_content<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
        content: &[u8],
    ) -> bool {
        self.verify(store, instance, &fingerprint_of(content))
    }
}
