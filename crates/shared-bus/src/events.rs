//! # Clause Events
//!
//! Defines all event types that flow through the shared bus.
//! Clauses append these to the instance store's pending log once a transition
//! commits; the orchestrator drains and publishes them.

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use shared_types::{Address, ChainSelector, Hash, InstanceId, SubIndex, Timestamp};

/// All events that can be published to the event bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClauseEvent {
    // =========================================================================
    // CLAUSE 2: CONTENT ANCHOR
    // =========================================================================
    /// A content fingerprint was registered.
    ContentRegistered {
        /// Agreement instance.
        instance: InstanceId,
        /// Registered fingerprint.
        fingerprint: Hash,
        /// Optional locator (empty when absent).
        locator: String,
        /// Registrant identity.
        registrant: Address,
        /// Registration time.
        timestamp: Timestamp,
    },

    /// A registered fingerprint was sealed.
    ContentSealed {
        /// Agreement instance.
        instance: InstanceId,
        /// Sealed fingerprint.
        fingerprint: Hash,
        /// Seal time.
        timestamp: Timestamp,
    },

    /// A registered fingerprint was revoked.
    ContentRevoked {
        /// Agreement instance.
        instance: InstanceId,
        /// Revoked fingerprint.
        fingerprint: Hash,
        /// Revocation time.
        timestamp: Timestamp,
    },

    // =========================================================================
    // CLAUSE 3: CROSS-CHAIN MESSAGE
    // =========================================================================
    /// Outbound configuration was finalized.
    MessageConfigured {
        /// Agreement instance.
        instance: InstanceId,
        /// Destination chain.
        destination_chain: ChainSelector,
        /// Remote agreement address.
        counterparty: Address,
        /// Controller identity.
        controller: Address,
    },

    /// Outbound message handed to the transport.
    MessageSent {
        /// Agreement instance.
        instance: InstanceId,
        /// Transport-assigned identifier.
        message_id: Hash,
        /// Send time.
        timestamp: Timestamp,
    },

    /// Outbound message delivery confirmed.
    MessageConfirmed {
        /// Agreement instance.
        instance: InstanceId,
        /// Transport-assigned identifier.
        message_id: Hash,
    },

    /// Outbound message cancelled before send.
    MessageCancelled {
        /// Agreement instance.
        instance: InstanceId,
    },

    /// Inbound message processed.
    MessageReceived {
        /// Agreement instance.
        instance: InstanceId,
        /// Source chain.
        source_chain: ChainSelector,
        /// Remote sender agreement.
        source_counterparty: Address,
        /// Action code carried by the message.
        action: u8,
        /// Content fingerprint carried by the message.
        fingerprint: Hash,
        /// Receive time.
        timestamp: Timestamp,
    },

    // =========================================================================
    // CLAUSE 4: DEADLINE
    // =========================================================================
    /// A deadline was set.
    DeadlineSet {
        /// Agreement instance.
        instance: InstanceId,
        /// Deadline sub-index.
        index: SubIndex,
        /// Deadline time.
        deadline: Timestamp,
        /// Action code.
        action: u8,
        /// Controller, `None` for an immutable deadline.
        controller: Option<Address>,
    },

    /// A mutable deadline was modified by its controller.
    DeadlineModified {
        /// Agreement instance.
        instance: InstanceId,
        /// Deadline sub-index.
        index: SubIndex,
        /// New deadline time.
        deadline: Timestamp,
        /// New action code.
        action: u8,
    },

    /// A mutable deadline was cleared by its controller.
    DeadlineCleared {
        /// Agreement instance.
        instance: InstanceId,
        /// Deadline sub-index.
        index: SubIndex,
    },

    /// A deadline was enforced.
    DeadlineEnforced {
        /// Agreement instance.
        instance: InstanceId,
        /// Deadline sub-index.
        index: SubIndex,
        /// Action code to carry out.
        action: u8,
        /// Enforcement time.
        timestamp: Timestamp,
    },

    // =========================================================================
    // CLAUSE 5: ARBITRATION LINK
    // =========================================================================
    /// An arbitration module was linked to an agreement instance.
    ArbitrationLinked {
        /// Agreement instance.
        instance: InstanceId,
        /// Arbitration module address.
        module: Address,
        /// Arbitration-side instance identifier.
        module_instance: InstanceId,
    },

    /// The linked module executed its ruling.
    ArbitrationRulingExecuted {
        /// Agreement instance.
        instance: InstanceId,
        /// Ruling code (1 claimant wins, 2 respondent wins, 3 split).
        ruling: u8,
        /// Claimant share in basis points.
        split_basis_points: u16,
        /// Amount owed to the claimant.
        claimant_payout: U256,
        /// Amount owed to the respondent.
        respondent_payout: U256,
    },
}

impl ClauseEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::ContentRegistered { .. }
            | Self::ContentSealed { .. }
            | Self::ContentRevoked { .. } => EventTopic::ContentAnchor,
            Self::MessageConfigured { .. }
            | Self::MessageSent { .. }
            | Self::MessageConfirmed { .. }
            | Self::MessageCancelled { .. }
            | Self::MessageReceived { .. } => EventTopic::CrossChainMessage,
            Self::DeadlineSet { .. }
            | Self::DeadlineModified { .. }
            | Self::DeadlineCleared { .. }
            | Self::DeadlineEnforced { .. } => EventTopic::Deadline,
            Self::ArbitrationLinked { .. } | Self::ArbitrationRulingExecuted { .. } => {
                EventTopic::Arbitration
            }
        }
    }

    /// Get the originating clause subsystem ID.
    #[must_use]
    pub fn source_subsystem(&self) -> u8 {
        match self.topic() {
            EventTopic::ContentAnchor => 2,
            EventTopic::CrossChainMessage => 3,
            EventTopic::Deadline => 4,
            EventTopic::Arbitration => 5,
            EventTopic::All => 0,
        }
    }

    /// Agreement instance the event belongs to.
    #[must_use]
    pub fn instance(&self) -> InstanceId {
        match self {
            Self::ContentRegistered { instance, .. }
            | Self::ContentSealed { instance, .. }
            | Self::ContentRevoked { instance, .. }
            | Self::MessageConfigured { instance, .. }
            | Self::MessageSent { instance, .. }
            | Self::MessageConfirmed { instance, .. }
            | Self::MessageCancelled { instance }
            | Self::MessageReceived { instance, .. }
            | Self::DeadlineSet { instance, .. }
            | Self::DeadlineModified { instance, .. }
            | Self::DeadlineCleared { instance, .. }
            | Self::DeadlineEnforced { instance, .. }
            | Self::ArbitrationLinked { instance, .. }
            | Self::ArbitrationRulingExecuted { instance, .. } => *instance,
        }
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Clause 2 events.
    ContentAnchor,
    /// Clause 3 events.
    CrossChainMessage,
    /// Clause 4 events.
    Deadline,
    /// Clause 5 events.
    Arbitration,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
    /// Instances to include. Empty means all instances.
    pub instances: Vec<InstanceId>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            instances: Vec::new(),
        }
    }

    /// Create a filter for events of specific agreement instances.
    #[must_use]
    pub fn for_instances(instances: Vec<InstanceId>) -> Self {
        Self {
            topics: Vec::new(),
            instances,
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &ClauseEvent) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic());

        let instance_match = self.instances.is_empty() || self.instances.contains(&event.instance());

        topic_match && instance_match
    }
}
