//! # Event Publisher
//!
//! The orchestrator drains an `InstanceStore` after each committed call and
//! hands the events to an `EventPublisher`, oldest first.

use crate::events::{ClauseEvent, EventFilter, EventTopic};
use crate::subscriber::Subscription;
use crate::DEFAULT_CHANNEL_CAPACITY;
use async_trait::async_trait;
use shared_types::InstanceId;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::{debug, trace};

/// Clause topics in subsystem order.
const CLAUSE_TOPICS: [EventTopic; 4] = [
    EventTopic::ContentAnchor,
    EventTopic::CrossChainMessage,
    EventTopic::Deadline,
    EventTopic::Arbitration,
];

/// Sink for committed clause events.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish one event. Returns how many subscribers it reached.
    async fn publish(&self, event: ClauseEvent) -> usize;

    /// Total events published since creation.
    fn events_published(&self) -> u64;

    /// Publish events drained from a store, preserving their order.
    async fn publish_all(&self, events: Vec<ClauseEvent>) -> usize {
        let mut delivered = 0;
        for event in events {
            delivered += self.publish(event).await;
        }
        delivered
    }
}

/// Single-process bus over `tokio::sync::broadcast`.
///
/// Every subscriber sees every event; filtering by topic or instance happens
/// on the receiving side. Publishing with nobody listening is not an error,
/// the event is counted and discarded.
pub struct InMemoryEventBus {
    sender: broadcast::Sender<ClauseEvent>,
    /// Events published per clause, indexed like `CLAUSE_TOPICS`.
    per_clause: [AtomicU64; 4],
    capacity: usize,
}

impl InMemoryEventBus {
    /// Bus with `DEFAULT_CHANNEL_CAPACITY`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Bus that buffers up to `capacity` events per slow subscriber.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            per_clause: Default::default(),
            capacity,
        }
    }

    /// Subscribe with an arbitrary filter.
    #[must_use]
    pub fn subscribe(&self, filter: EventFilter) -> Subscription {
        debug!(
            topics = ?filter.topics,
            instances = filter.instances.len(),
            "[bus] Subscribed"
        );
        Subscription::new(self.sender.subscribe(), filter)
    }

    /// Subscribe to every clause event of one agreement instance.
    #[must_use]
    pub fn watch_instance(&self, instance: InstanceId) -> Subscription {
        self.subscribe(EventFilter::for_instances(vec![instance]))
    }

    /// Live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Buffer size per subscriber.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Events published by the clause behind `topic`. `All` sums every clause.
    #[must_use]
    pub fn published_by(&self, topic: EventTopic) -> u64 {
        match CLAUSE_TOPICS.iter().position(|t| *t == topic) {
            Some(slot) => self.per_clause[slot].load(Ordering::Relaxed),
            None => self.events_published(),
        }
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: ClauseEvent) -> usize {
        let topic = event.topic();
        let instance = event.instance();
        if let Some(slot) = CLAUSE_TOPICS.iter().position(|t| *t == topic) {
            self.per_clause[slot].fetch_add(1, Ordering::Relaxed);
        }

        // `send` only fails when nobody is subscribed.
        let receivers = self.sender.send(event).unwrap_or(0);
        trace!(
            instance = %instance,
            clause = ?topic,
            receivers,
            "[bus] Event published"
        );
        receivers
    }

    fn events_published(&self) -> u64 {
        self.per_clause
            .iter()
            .map(|count| count.load(Ordering::Relaxed))
            .sum()
    }
}
