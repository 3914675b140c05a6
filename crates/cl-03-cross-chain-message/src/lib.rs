//! # CL-03 Cross-Chain Messaging
//!
//! Tracks preparation, send and confirmation of an outbound message, and the
//! exactly-once processing of an inbound one, for one agreement instance.
//!
//! **Subsystem ID:** 3  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## State Machine
//!
//! ```text
//!                   ┌──finalize──→ PENDING ──mark_sent──→ SENT ──mark_confirmed──→ CONFIRMED
//! UNINITIALIZED(0) ─┤                 │
//!                   │                 └──cancel──→ CANCELLED
//!                   └──process_incoming──→ RECEIVED
//! ```
//!
//! Outbound and inbound share one status field per instance: once an
//! instance leaves `UNINITIALIZED` by either path, inbound processing fails
//! with `AlreadyProcessed`. An instance therefore carries one message in one
//! direction.
//!
//! ## Trust Boundary
//!
//! `mark_sent`, `mark_confirmed`, `cancel` and `process_incoming` take a
//! `DelegatedAuthority` issued by the orchestrator after its own access
//! control. The clause checks only that the token covers the instance.
//!
//! ## Module Structure
//!
//! ```text
//! cl-03-cross-chain-message/
//! ├── domain/          # MessageRecord, CrossChainStatus, MessagePayload, TransportError
//! ├── ports/           # CrossChainMessageApi, CrossChainTransport, InboundReceiver
//! ├── adapters/        # InMemoryTransport, MessageRelay
//! └── service.rs       # CrossChainMessageClause
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{InMemoryTransport, MessageRelay, DEFAULT_BASE_FEE};
pub use domain::{
    CrossChainConfig, CrossChainStatus, IncomingMessage, MessagePayload, MessageRecord,
    TransportError,
};
pub use ports::{
    CrossChainMessageApi, CrossChainTransport, InboundDelivery, InboundReceiver, TransportStatus,
};
pub use service::CrossChainMessageClause;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
