//! # CL-04 Deadline Enforcement
//!
//! Time-boxed obligations keyed by `(instance, index)`, so one agreement can
//! carry several independent deadlines (milestones).
//!
//! **Subsystem ID:** 4  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## State Machine (per key)
//!
//! ```text
//! UNSET ──set──→ PENDING ──mark_enforced (now ≥ deadline)──→ ENFORCED (frozen)
//!   ↑               │
//!   └────clear──────┤  (controller only)
//!                   └──modify──→ PENDING
//! ```
//!
//! ## Mutability Policy
//!
//! | Controller | modify / clear | enforce |
//! |------------|----------------|---------|
//! | `None` | never (`DeadlineImmutable`) | anyone, once expired |
//! | `Some(c)` | only `c`, before enforcement | anyone, once expired |
//!
//! Once enforced, every set/modify/clear fails `DeadlineAlreadyEnforced`.
//!
//! ## Module Structure
//!
//! ```text
//! cl-04-deadline/
//! ├── domain/          # DeadlineRecord, DeadlineAction, DeadlineStatus, config
//! ├── ports/           # DeadlineApi
//! └── service.rs       # DeadlineClause
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{DeadlineAction, DeadlineConfig, DeadlineRecord, DeadlineStatus};
pub use ports::DeadlineApi;
pub use service::DeadlineClause;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
