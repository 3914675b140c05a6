//! # Inbound Ports
//!
//! API trait defining what the content anchoring clause can do.

use crate::domain::{ContentRecord, ContentStatus};
use cl_01_instance_storage::{InstanceStore, StorageBackend};
use shared_types::{Address, CallContext, ClauseError, Hash, InstanceId, Timestamp};

/// Content anchoring API - inbound port.
///
/// Operations fall into four groups: configure (`intake_*`), transition
/// (`seal`, `revoke`), extract (`extract_*`, state-gated) and read (total).
pub trait ContentAnchorApi {
    // ---- configure ----

    /// Register the Keccak-256 fingerprint of `content`. Returns the fingerprint.
    fn intake_content<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        call: &CallContext,
        instance: InstanceId,
        content: &[u8],
        locator: Option<&str>,
    ) -> Result<Hash, ClauseError>;

    /// Register a precomputed fingerprint.
    fn intake_hash<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        call: &CallContext,
        instance: InstanceId,
        fingerprint: Hash,
        locator: Option<&str>,
    ) -> Result<(), ClauseError>;

    // ---- transition ----

    /// Seal the registered content. Registrant only.
    fn seal<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        call: &CallContext,
        instance: InstanceId,
    ) -> Result<(), ClauseError>;

    /// Revoke the registered content. Registrant only.
    fn revoke<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        call: &CallContext,
        instance: InstanceId,
    ) -> Result<(), ClauseError>;

    // ---- extract ----

    /// Fingerprint for downstream use.
    fn extract_fingerprint<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Result<Hash, ClauseError>;

    /// Locator for downstream use.
    fn extract_locator<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Result<String, ClauseError>;

    /// Registrant for downstream use.
    fn extract_registrant<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Result<Address, ClauseError>;

    // ---- read ----

    /// Full record snapshot.
    fn record<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> ContentRecord;

    /// Current status.
    fn status<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> ContentStatus {
        self.record(store, instance).status
    }

    /// Stored fingerprint, zero if absent.
    fn fingerprint<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Hash {
        self.record(store, instance).fingerprint
    }

    /// Stored locator, empty if absent.
    fn locator<B: StorageBackend>(&self, store: &InstanceStore<B>, instance: InstanceId) -> String {
        self.record(store, instance).locator
    }

    /// Stored registrant, zero if absent.
    fn registrant<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Address {
        self.record(store, instance).registrant
    }

    /// Registration time, zero if absent.
    fn registered_at<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Timestamp {
        self.record(store, instance).registered_at
    }

    /// Seal time, zero unless sealed.
    fn sealed_at<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> Timestamp {
        self.record(store, instance).sealed_at
    }

    /// True only if registered or sealed and `candidate` matches exactly.
    fn verify<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
        candidate: &Hash,
    ) -> bool;

    /// `verify` against the fingerprint of raw content.
    fn verify_content<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
        content: &[u8],
    ) -> bool;
}
