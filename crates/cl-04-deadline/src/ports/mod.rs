//! # Ports Module
//!
//! Inbound API implemented by the clause.

pub mod inbound;

pub use inbound::*;
