//! # CL-05 Arbitration Link
//!
//! The dispute-linkage boundary between an agreement instance and an external
//! arbitration module, plus the reference state machine an agreement embeds.
//!
//! **Subsystem ID:** 5  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## State Machine
//!
//! ```text
//! UNLINKED(0) ──link_arbitration──→ LINKED ──execute_arbitration_ruling──→ RESOLVED
//! ```
//!
//! Only the linked module may execute a ruling, and only once. Payouts:
//!
//! | Ruling | Claimant | Respondent |
//! |--------|----------|------------|
//! | 1 claimant wins | amount | 0 |
//! | 2 respondent wins | 0 | amount |
//! | 3 split(bps) | amount·bps/10000 | remainder |
//!
//! ## Module Structure
//!
//! ```text
//! cl-05-arbitration-link/
//! ├── domain/          # ArbitrationRecord, LinkStatus, Ruling, payout rules
//! ├── ports/           # DisputeLinkage
//! └── service.rs       # ArbitrationLinkClause
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{
    compute_payout, ArbitrationRecord, DisputeTerms, LinkStatus, Payout, Ruling, BASIS_POINTS,
};
pub use ports::DisputeLinkage;
pub use service::ArbitrationLinkClause;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
