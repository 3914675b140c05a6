//! # Ports Module
//!
//! The dispute-linkage boundary.

pub mod inbound;

pub use inbound::*;
