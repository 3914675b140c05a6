//! # CL-02 Content Anchoring
//!
//! Registers, seals or revokes a content fingerprint plus optional locator
//! for one agreement instance.
//!
//! **Subsystem ID:** 2  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## State Machine
//!
//! ```text
//! UNINITIALIZED(0) ──intake──→ REGISTERED ──seal───→ SEALED   (terminal)
//!                                   │
//!                                   └──revoke──→ REVOKED  (terminal, dead end)
//! ```
//!
//! The fingerprint is written once at registration and never changes. Seal
//! and revoke are reserved to the registrant. Extracts work only while the
//! record is `REGISTERED` or `SEALED`; reads always answer.
//!
//! ## Module Structure
//!
//! ```text
//! cl-02-content-anchor/
//! ├── domain/          # ContentRecord, ContentStatus, config, fingerprinting
//! ├── ports/           # ContentAnchorApi
//! └── service.rs       # ContentAnchorClause
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{fingerprint_of, ContentAnchorConfig, ContentRecord, ContentStatus};
pub use ports::ContentAnchorApi;
pub use service::ContentAnchorClause;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
