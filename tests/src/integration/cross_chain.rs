//! # Cross-Chain Message Flows
//!
//! Two agreement deployments on two chains, each with its own store, relay
//! and in-memory transport. Outbound payloads queued on chain A are delivered
//! to chain B's relay through B's transport, which enforces the source
//! allow-list and replay protection before the clause sees the message.

#[cfg(test)]
mod tests {
    use super::super::harness::{init_test_logging, ORCHESTRATOR};
    use cl_01_instance_storage::InstanceStore;
    use cl_03_cross_chain_message::{
        CrossChainMessageApi, CrossChainMessageClause, CrossChainStatus, CrossChainTransport,
        InMemoryTransport, InboundDelivery, InboundReceiver, MessagePayload, MessageRelay,
        TransportError, TransportStatus,
    };
    use shared_bus::{ClauseEvent, EventFilter, EventTopic, InMemoryEventBus};
    use shared_types::{
        Address, CallContext, ChainSelector, Clock, DelegatedAuthority, Hash, InstanceId,
        ManualClock,
    };
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;

    const T0: u64 = 1_700_000_000;
    const CHAIN_A: ChainSelector = ChainSelector(1);
    const CHAIN_B: ChainSelector = ChainSelector(2);

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Agreement deployed on chain A.
    fn agreement_a() -> Address {
        Address::new([0xAA; 20])
    }

    /// Agreement deployed on chain B.
    fn agreement_b() -> Address {
        Address::new([0xBB; 20])
    }

    fn controller() -> Address {
        Address::new([0xC1; 20])
    }

    fn outbound_instance() -> InstanceId {
        InstanceId::new([0xA0; 32])
    }

    fn inbound_instance() -> InstanceId {
        InstanceId::new([0xB0; 32])
    }

    struct Chain {
        relay: MessageRelay<InMemoryTransport>,
        bus: Arc<InMemoryEventBus>,
        clock: Arc<ManualClock>,
    }

    impl Chain {
        fn new() -> Self {
            init_test_logging();
            let bus = Arc::new(InMemoryEventBus::new());
            let clock = Arc::new(ManualClock::new(T0));
            let relay = MessageRelay::new(
                CrossChainMessageClause::default(),
                InstanceStore::in_memory().into_shared(),
                Arc::new(InMemoryTransport::default()),
                clock.clone(),
                ORCHESTRATOR,
            )
            .with_bus(bus.clone());
            Self { relay, bus, clock }
        }

        fn authority(&self, instance: InstanceId) -> DelegatedAuthority {
            DelegatedAuthority::grant(instance, ORCHESTRATOR, self.clock.now())
        }

        fn configure(&self, instance: InstanceId, action: u8, fingerprint: Hash, extra: &[u8]) {
            let clause = CrossChainMessageClause::default();
            let mut store = self.relay.store().lock();
            clause.set_destination_chain(&mut *store, instance, CHAIN_B).unwrap();
            clause.set_counterparty(&mut *store, instance, agreement_b()).unwrap();
            clause.set_controller(&mut *store, instance, controller()).unwrap();
            clause.set_action(&mut *store, instance, action).unwrap();
            clause.set_fingerprint(&mut *store, instance, fingerprint).unwrap();
            clause.set_extra_payload(&mut *store, instance, extra.to_vec()).unwrap();
            clause.finalize_configuration(&mut *store, instance).unwrap();
        }

        fn status(&self, instance: InstanceId) -> CrossChainStatus {
            CrossChainMessageClause::default().status(&*self.relay.store().lock(), instance)
        }
    }

    /// Dispatch the configured message on chain A and build the delivery
    /// chain B's transport would receive.
    async fn send_from_a(a: &Chain) -> (Hash, InboundDelivery) {
        let fee = a.relay.transport().fee(CHAIN_B);
        let message_id = a
            .relay
            .dispatch(&a.authority(outbound_instance()), outbound_instance(), fee)
            .await
            .unwrap();
        let (destination, receiver, payload) =
            a.relay.transport().queued(outbound_instance()).unwrap();
        assert_eq!(destination, CHAIN_B);
        assert_eq!(receiver, agreement_b());

        let delivery = InboundDelivery {
            instance: inbound_instance(),
            source_chain: CHAIN_A,
            source_address: agreement_a(),
            payload,
        };
        (message_id, delivery)
    }

    // =============================================================================
    // INTEGRATION TESTS: OUTBOUND → TRANSPORT → INBOUND
    // =============================================================================

    #[tokio::test]
    async fn test_round_trip_between_chains() {
        let a = Chain::new();
        let b = Chain::new();
        b.relay.transport().allow_source(CHAIN_A, agreement_a());
        let mut a_sub = a.bus.subscribe(EventFilter::topics(vec![EventTopic::CrossChainMessage]));
        let mut b_sub = b.bus.subscribe(EventFilter::all());

        let fingerprint = Hash::new([0x77; 32]);
        a.configure(outbound_instance(), 3, fingerprint, b"milestone-2");
        let (message_id, delivery) = send_from_a(&a).await;

        // Chain A saw configuration then send.
        assert!(matches!(
            a_sub.recv().await,
            Some(ClauseEvent::MessageConfigured { destination_chain, .. }) if destination_chain == CHAIN_B
        ));
        assert!(matches!(
            a_sub.recv().await,
            Some(ClauseEvent::MessageSent { message_id: id, .. }) if id == message_id
        ));
        assert_eq!(a.status(outbound_instance()), CrossChainStatus::Sent);

        // Chain B processes the delivery.
        b.clock.advance(30);
        b.relay
            .transport()
            .deliver(&b.relay, delivery)
            .await
            .unwrap();

        let clause = CrossChainMessageClause::default();
        {
            let store = b.relay.store().lock();
            assert!(clause.is_received(&*store, inbound_instance()));
            assert_eq!(clause.extract_action(&*store, inbound_instance()).unwrap(), 3);
            assert_eq!(
                clause.extract_fingerprint(&*store, inbound_instance()).unwrap(),
                fingerprint
            );
            assert_eq!(
                clause.extract_extra_payload(&*store, inbound_instance()).unwrap(),
                b"milestone-2".to_vec()
            );
            assert_eq!(
                clause.extract_source_counterparty(&*store, inbound_instance()).unwrap(),
                agreement_a()
            );
            assert_eq!(clause.chain(&*store, inbound_instance()), CHAIN_A);
            assert_eq!(clause.received_at(&*store, inbound_instance()), T0 + 30);
        }

        let event = timeout(Duration::from_millis(100), b_sub.recv())
            .await
            .expect("timeout waiting for event")
            .expect("should receive event");
        match event {
            ClauseEvent::MessageReceived {
                instance,
                source_chain,
                source_counterparty,
                action,
                ..
            } => {
                assert_eq!(instance, inbound_instance());
                assert_eq!(source_chain, CHAIN_A);
                assert_eq!(source_counterparty, agreement_a());
                assert_eq!(action, 3);
            }
            other => panic!("Expected MessageReceived, got {:?}", other),
        }

        // Chain A confirms once the transport reports processing.
        a.relay
            .confirm(&a.authority(outbound_instance()), outbound_instance())
            .await
            .unwrap();
        assert_eq!(a.status(outbound_instance()), CrossChainStatus::Confirmed);
        assert_eq!(
            a.relay.transport().status(outbound_instance()),
            TransportStatus::Processed
        );
        assert!(matches!(
            a_sub.recv().await,
            Some(ClauseEvent::MessageConfirmed { .. })
        ));
    }

    #[tokio::test]
    async fn test_replayed_delivery_is_rejected_twice_over() {
        let a = Chain::new();
        let b = Chain::new();
        a.configure(outbound_instance(), 1, Hash::new([0x01; 32]), b"");
        let (_, delivery) = send_from_a(&a).await;

        b.relay
            .transport()
            .deliver(&b.relay, delivery.clone())
            .await
            .unwrap();

        // Transport-side replay protection.
        assert!(matches!(
            b.relay.transport().deliver(&b.relay, delivery.clone()).await,
            Err(TransportError::AlreadyProcessed { .. })
        ));
        // Clause-side protection when the transport is bypassed.
        assert!(matches!(
            b.relay.receive(delivery).await,
            Err(TransportError::AlreadyProcessed { .. })
        ));
    }

    #[tokio::test]
    async fn test_unknown_source_never_reaches_clause() {
        let a = Chain::new();
        let b = Chain::new();
        b.relay.transport().allow_source(CHAIN_A, agreement_a());
        a.configure(outbound_instance(), 1, Hash::new([0x01; 32]), b"");
        let (_, mut delivery) = send_from_a(&a).await;

        delivery.source_address = Address::new([0x66; 20]);
        assert!(matches!(
            b.relay.transport().deliver(&b.relay, delivery).await,
            Err(TransportError::SourceNotAllowed { .. })
        ));
        assert_eq!(b.status(inbound_instance()), CrossChainStatus::Uninitialized);
    }

    #[tokio::test]
    async fn test_cancelled_message_cannot_dispatch() {
        let a = Chain::new();
        a.configure(outbound_instance(), 2, Hash::new([0x02; 32]), b"");
        {
            let clause = CrossChainMessageClause::default();
            let mut store = a.relay.store().lock();
            clause
                .cancel(&mut *store, &a.authority(outbound_instance()), outbound_instance())
                .unwrap();
        }
        assert_eq!(a.status(outbound_instance()), CrossChainStatus::Cancelled);

        let fee = a.relay.transport().fee(CHAIN_B);
        assert!(matches!(
            a.relay
                .dispatch(&a.authority(outbound_instance()), outbound_instance(), fee)
                .await,
            Err(TransportError::MessageNotReady { .. })
        ));
        assert_eq!(
            a.relay.transport().status(outbound_instance()),
            TransportStatus::Unknown
        );
    }

    #[tokio::test]
    async fn test_outbound_instance_cannot_also_receive() {
        let a = Chain::new();
        a.configure(outbound_instance(), 1, Hash::new([0x01; 32]), b"");

        let payload = MessagePayload {
            action: 9,
            fingerprint: Hash::new([0x09; 32]),
            extra: Vec::new(),
        };
        let delivery = InboundDelivery {
            instance: outbound_instance(),
            source_chain: CHAIN_B,
            source_address: agreement_b(),
            payload: payload.encode().unwrap(),
        };
        assert!(matches!(
            a.relay.receive(delivery).await,
            Err(TransportError::AlreadyProcessed { .. })
        ));
        assert_eq!(a.status(outbound_instance()), CrossChainStatus::Pending);
    }

    #[tokio::test]
    async fn test_foreign_capability_cannot_dispatch() {
        let a = Chain::new();
        a.configure(outbound_instance(), 1, Hash::new([0x01; 32]), b"");
        let foreign = DelegatedAuthority::from_call(
            inbound_instance(),
            &CallContext::new(controller(), T0),
        );

        let fee = a.relay.transport().fee(CHAIN_B);
        assert!(matches!(
            a.relay.dispatch(&foreign, outbound_instance(), fee).await,
            Err(TransportError::Clause(_))
        ));
        assert!(a.relay.transport().queued(outbound_instance()).is_none());
    }
}
