//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the `StorageBackend` port.

mod memory;

pub use memory::InMemoryBackend;
