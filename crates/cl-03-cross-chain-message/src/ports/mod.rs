//! # Ports Module
//!
//! Inbound API of the clause and the outbound transport boundary.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
