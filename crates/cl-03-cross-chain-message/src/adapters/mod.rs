//! # Adapters
//!
//! Transport implementations and the relay that drives the clause through
//! them.

pub mod memory_transport;
pub mod relay;

pub use memory_transport::{InMemoryTransport, DEFAULT_BASE_FEE};
pub use relay::MessageRelay;
