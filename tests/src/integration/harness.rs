//! # Agreement Harness
//!
//! Stands in for an agreement that embeds every clause module: one instance
//! store, one manual clock, one event bus. The harness acts as the
//! orchestrator, granting capabilities and publishing committed events.

use cl_01_instance_storage::InstanceStore;
use cl_02_content_anchor::ContentAnchorClause;
use cl_03_cross_chain_message::CrossChainMessageClause;
use cl_04_deadline::DeadlineClause;
use cl_05_arbitration_link::ArbitrationLinkClause;
use clause_telemetry::{init_logging, TelemetryConfig};
use shared_bus::{EventPublisher, InMemoryEventBus, Subscription};
use shared_types::{Address, CallContext, Clock, DelegatedAuthority, InstanceId, ManualClock};
use std::sync::Arc;

/// Identity the harness acts as when it grants capabilities.
pub const ORCHESTRATOR: Address = Address::new([0xEE; 20]);

/// Install test logging once per process. Later calls are no-ops.
pub fn init_test_logging() {
    let config = TelemetryConfig {
        log_level: "warn".to_string(),
        ..TelemetryConfig::for_subsystem("00", "tests")
    };
    let _ = init_logging(&config);
}

/// All clause modules over one store.
pub struct AgreementHarness {
    /// Shared instance store.
    pub store: InstanceStore,
    /// Test clock.
    pub clock: Arc<ManualClock>,
    /// Event bus that receives committed events.
    pub bus: Arc<InMemoryEventBus>,
    /// cl-02
    pub content: ContentAnchorClause,
    /// cl-03
    pub message: CrossChainMessageClause,
    /// cl-04
    pub deadline: DeadlineClause,
    /// cl-05
    pub arbitration: ArbitrationLinkClause,
}

impl AgreementHarness {
    /// Harness with default clause configuration, clock at `start`.
    pub fn new(start: u64) -> Self {
        init_test_logging();
        Self {
            store: InstanceStore::in_memory(),
            clock: Arc::new(ManualClock::new(start)),
            bus: Arc::new(InMemoryEventBus::new()),
            content: ContentAnchorClause::default(),
            message: CrossChainMessageClause::default(),
            deadline: DeadlineClause::default(),
            arbitration: ArbitrationLinkClause::new(),
        }
    }

    /// Current harness time.
    pub fn now(&self) -> u64 {
        self.clock.now()
    }

    /// Call context for `caller` at the current time.
    pub fn call(&self, caller: Address) -> CallContext {
        CallContext::at(caller, self.clock.as_ref())
    }

    /// Capability for `instance`, granted by the orchestrator now.
    pub fn authority(&self, instance: InstanceId) -> DelegatedAuthority {
        DelegatedAuthority::grant(instance, ORCHESTRATOR, self.now())
    }

    /// Move the clock forward.
    pub fn advance(&self, secs: u64) {
        self.clock.advance(secs);
    }

    /// Subscribe to the bus for one instance's events.
    pub fn watch(&self, instance: InstanceId) -> Subscription {
        self.bus.watch_instance(instance)
    }

    /// Drain the store's committed events onto the bus.
    /// Returns how many events were published.
    pub async fn publish_pending(&mut self) -> usize {
        let events = self.store.drain_events();
        let count = events.len();
        for event in events {
            clause_telemetry::log_instance_event!(
                debug,
                "cl-tests",
                "Publishing clause event",
                event.instance(),
                source = event.source_subsystem()
            );
            self.bus.publish(event).await;
        }
        count
    }
}
