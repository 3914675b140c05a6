//! # Shared Bus - Event Bus for Clause Events
//!
//! Carries `ClauseEvent`s from the orchestrator to downstream consumers.
//!
//! ## Architecture Rules
//!
//! - Clause modules never call each other; composition happens in the
//!   orchestrator, which drains each store's pending events after a call
//!   commits and publishes them here.
//! - Events are emitted only for committed transitions, so a subscriber never
//!   observes a state change that was rolled back.
//!
//! ```text
//! ┌──────────────┐  drain_events()  ┌──────────────┐  publish()  ┌──────────────┐
//! │ InstanceStore│ ───────────────→ │ Orchestrator │ ──────────→ │  Event Bus   │
//! └──────────────┘                  └──────────────┘             └──────┬───────┘
//!                                                                       │ subscribe() / watch_instance()
//!                                                                       ▼
//!                                                                 Downstream
//! ```
//!
//! A slow subscriber that falls more than `DEFAULT_CHANNEL_CAPACITY` events
//! behind loses the oldest ones; `Subscription::missed` reports how many.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{ClauseEvent, EventFilter, EventTopic};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{Subscription, SubscriptionError};

/// Events buffered per subscriber before the oldest are overwritten.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
