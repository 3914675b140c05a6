//! # Domain Module
//!
//! Core domain types for arbitration linkage.

pub mod entities;
pub mod invariants;
pub mod value_objects;

pub use entities::*;
pub use invariants::*;
pub use value_objects::*;
