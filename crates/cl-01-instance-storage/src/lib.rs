//! # CL-01 Instance Storage Isolation
//!
//! One keyed record per (clause type, instance id [, sub-index]), shared by all
//! instances a clause module serves.
//!
//! **Subsystem ID:** 1  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Every clause module executes against the same storage owner. Isolation is a
//! property of the key type, not of runtime checks:
//! - `StorageKey` is a typed composite of `ClauseTag`, `InstanceId` and an
//!   optional sub-index, so two distinct keys can never alias.
//! - A record type is bound to exactly one `ClauseTag`, so one clause can never
//!   decode another clause's bytes.
//! - Absent records read as `Default`, which is the uninitialized state.
//!
//! ## All-or-nothing writes
//!
//! `InstanceStore::update` hands a *copy* of the record to the transition and
//! writes it back only if the transition returns `Ok`. Events queued with
//! `emit` after a successful update are drained by the orchestrator.
//!
//! ## Module Structure
//!
//! ```text
//! cl-01-instance-storage/
//! ├── domain/          # ClauseTag, StorageKey, ClauseRecord
//! ├── ports/           # StorageBackend
//! ├── adapters/        # InMemoryBackend
//! └── store.rs         # InstanceStore
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod store;

// Re-exports
pub use adapters::InMemoryBackend;
pub use domain::{ClauseRecord, ClauseTag, StorageKey};
pub use ports::StorageBackend;
pub use store::{InstanceStore, SharedInstanceStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
