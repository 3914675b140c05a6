//! # Shared Types Crate
//!
//! Domain primitives, the status-bit machinery, the clause error taxonomy and
//! the call context used by every clause subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-clause types are defined here.
//! - **Opaque Instances**: An `InstanceId` is chosen by the orchestrator and
//!   never interpreted by a clause.
//! - **Explicit Authority**: Transitions that trust the invoking context take a
//!   `DelegatedAuthority` token instead of reading ambient caller identity.

pub mod context;
pub mod errors;
pub mod primitives;
pub mod state;

pub use context::{CallContext, Clock, DelegatedAuthority, ManualClock, SystemClock};
pub use errors::*;
pub use primitives::*;
pub use state::{ClauseState, StateSet};
