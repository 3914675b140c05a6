//! # Domain Module
//!
//! Storage keys and the record contract.

pub mod keys;
pub mod record;

pub use keys::*;
pub use record::*;
