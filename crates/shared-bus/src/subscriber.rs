//! # Subscriptions
//!
//! A `Subscription` receives the bus's events that pass its `EventFilter`.
//! Consumers that follow one agreement use `recv_for` to skip the events of
//! other instances without a dedicated subscription.

use crate::events::{ClauseEvent, EventFilter};
use shared_types::InstanceId;
use thiserror::Error;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tracing::warn;

/// Errors from non-blocking receives.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// The bus was dropped.
    #[error("Event bus closed")]
    Closed,
}

/// Receiving handle created by `InMemoryEventBus::subscribe`.
pub struct Subscription {
    receiver: broadcast::Receiver<ClauseEvent>,
    filter: EventFilter,
    /// Events overwritten before this subscriber read them.
    missed: u64,
}

impl Subscription {
    pub(crate) fn new(receiver: broadcast::Receiver<ClauseEvent>, filter: EventFilter) -> Self {
        Self {
            receiver,
            filter,
            missed: 0,
        }
    }

    /// Next event passing the filter. `None` once the bus is gone.
    pub async fn recv(&mut self) -> Option<ClauseEvent> {
        self.next_matching(|_| true).await
    }

    /// Next event of `instance` passing the filter. Events of other instances
    /// are consumed and discarded.
    pub async fn recv_for(&mut self, instance: InstanceId) -> Option<ClauseEvent> {
        self.next_matching(|event| event.instance() == instance).await
    }

    /// Next buffered event passing the filter, without waiting.
    pub fn try_recv(&mut self) -> Result<Option<ClauseEvent>, SubscriptionError> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) if self.filter.matches(&event) => return Ok(Some(event)),
                Ok(_) => {}
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Closed) => return Err(SubscriptionError::Closed),
                Err(TryRecvError::Lagged(count)) => self.record_lag(count),
            }
        }
    }

    /// Every buffered event of `instance` passing the filter, oldest first.
    pub fn drain_for(&mut self, instance: InstanceId) -> Vec<ClauseEvent> {
        let mut events = Vec::new();
        while let Ok(Some(event)) = self.try_recv() {
            if event.instance() == instance {
                events.push(event);
            }
        }
        events
    }

    /// Events lost to lag since the subscription was created.
    #[must_use]
    pub fn missed(&self) -> u64 {
        self.missed
    }

    /// Active filter.
    #[must_use]
    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    async fn next_matching<F>(&mut self, accept: F) -> Option<ClauseEvent>
    where
        F: Fn(&ClauseEvent) -> bool,
    {
        loop {
            match self.receiver.recv().await {
                Ok(event) if self.filter.matches(&event) && accept(&event) => return Some(event),
                Ok(_) => {}
                Err(RecvError::Closed) => return None,
                Err(RecvError::Lagged(count)) => self.record_lag(count),
            }
        }
    }

    fn record_lag(&mut self, count: u64) {
        self.missed += count;
        // A lagging consumer has lost transitions and must re-read the store.
        warn!(missed = count, total_missed = self.missed, "[bus] Subscriber lagged");
    }
}
