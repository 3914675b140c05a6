//! # Ports Module
//!
//! Outbound dependency on the storage owner.

pub mod outbound;

pub use outbound::*;
