//! # Deadline Flows
//!
//! Time-driven enforcement through the agreement harness. The manual clock
//! stands in for block time.

#[cfg(test)]
mod tests {
    use super::super::harness::AgreementHarness;
    use cl_04_deadline::{DeadlineAction, DeadlineApi, DeadlineStatus};
    use shared_bus::{ClauseEvent, EventFilter, EventTopic};
    use shared_types::{Address, ClauseError, InstanceId};

    const T0: u64 = 1_700_000_000;
    const HOUR: u64 = 3_600;
    const DAY: u64 = 86_400;

    /// Delivery milestone.
    const DELIVERY: u64 = 0;
    /// Payment milestone.
    const PAYMENT: u64 = 1;

    fn instance() -> InstanceId {
        InstanceId::new([0x44; 32])
    }

    fn buyer() -> Address {
        Address::new([0xB1; 20])
    }

    fn seller() -> Address {
        Address::new([0x5E; 20])
    }

    fn keeper() -> Address {
        Address::new([0x6E; 20])
    }

    #[tokio::test]
    async fn test_immutable_deadline_enforced_by_keeper() {
        let mut h = AgreementHarness::new(T0);
        let mut sub = h.bus.subscribe(EventFilter::topics(vec![EventTopic::Deadline]));

        let call = h.call(buyer());
        h.deadline
            .set_deadline(&mut h.store, &call, instance(), DELIVERY, T0 + HOUR, 2, None)
            .unwrap();
        assert!(h.deadline.is_immutable(&h.store, instance(), DELIVERY));
        assert_eq!(h.deadline.time_remaining(&h.store, instance(), DELIVERY, h.now()), HOUR);

        // Nobody can move an immutable deadline.
        assert!(matches!(
            h.deadline
                .modify_deadline(&mut h.store, &call, instance(), DELIVERY, T0 + DAY, 2),
            Err(ClauseError::DeadlineImmutable { .. })
        ));

        // Too early.
        h.advance(HOUR - 1);
        let call = h.call(keeper());
        assert!(matches!(
            h.deadline.mark_enforced(&mut h.store, &call, instance(), DELIVERY),
            Err(ClauseError::DeadlineNotExpired { .. })
        ));

        // Exactly at the deadline.
        h.advance(1);
        let call = h.call(keeper());
        assert!(h.deadline.can_enforce(&h.store, instance(), DELIVERY, h.now()));
        let action = h
            .deadline
            .mark_enforced(&mut h.store, &call, instance(), DELIVERY)
            .unwrap();
        assert_eq!(action, DeadlineAction::Refund);
        assert_eq!(
            h.deadline.status(&h.store, instance(), DELIVERY),
            DeadlineStatus::Enforced
        );

        // Once only.
        assert!(matches!(
            h.deadline.mark_enforced(&mut h.store, &call, instance(), DELIVERY),
            Err(ClauseError::DeadlineAlreadyEnforced { .. })
        ));

        assert_eq!(h.publish_pending().await, 2);
        assert!(matches!(sub.recv().await, Some(ClauseEvent::DeadlineSet { controller: None, .. })));
        assert!(matches!(
            sub.recv().await,
            Some(ClauseEvent::DeadlineEnforced { action: 2, timestamp, .. }) if timestamp == T0 + HOUR
        ));
    }

    #[tokio::test]
    async fn test_milestones_are_independent() {
        let mut h = AgreementHarness::new(T0);
        let call = h.call(buyer());
        h.deadline
            .set_deadline(&mut h.store, &call, instance(), DELIVERY, T0 + HOUR, 1, None)
            .unwrap();
        h.deadline
            .set_deadline(
                &mut h.store,
                &call,
                instance(),
                PAYMENT,
                T0 + DAY,
                2,
                Some(seller()),
            )
            .unwrap();

        h.advance(2 * HOUR);
        let call = h.call(keeper());
        assert_eq!(
            h.deadline
                .mark_enforced(&mut h.store, &call, instance(), DELIVERY)
                .unwrap(),
            DeadlineAction::Release
        );

        assert!(h.deadline.is_enforced(&h.store, instance(), DELIVERY));
        assert!(!h.deadline.is_enforced(&h.store, instance(), PAYMENT));
        assert!(!h.deadline.is_expired(&h.store, instance(), PAYMENT, h.now()));
        assert_eq!(
            h.deadline.time_remaining(&h.store, instance(), PAYMENT, h.now()),
            DAY - 2 * HOUR
        );
        assert_eq!(h.deadline.controller(&h.store, instance(), PAYMENT), Some(seller()));
        assert_eq!(h.deadline.action(&h.store, instance(), PAYMENT), DeadlineAction::Refund);
    }

    #[tokio::test]
    async fn test_controller_extends_then_clears() {
        let mut h = AgreementHarness::new(T0);
        let call = h.call(buyer());
        h.deadline
            .set_deadline(
                &mut h.store,
                &call,
                instance(),
                PAYMENT,
                T0 + DAY,
                1,
                Some(seller()),
            )
            .unwrap();

        // Buyer set it but only the controller may change it.
        assert!(matches!(
            h.deadline
                .modify_deadline(&mut h.store, &call, instance(), PAYMENT, T0 + 2 * DAY, 1),
            Err(ClauseError::Unauthorized { expected, .. }) if expected == seller()
        ));

        h.advance(HOUR);
        let call = h.call(seller());
        h.deadline
            .modify_deadline(&mut h.store, &call, instance(), PAYMENT, T0 + 2 * DAY, 4)
            .unwrap();
        assert_eq!(h.deadline.deadline(&h.store, instance(), PAYMENT), T0 + 2 * DAY);
        assert_eq!(h.deadline.action(&h.store, instance(), PAYMENT), DeadlineAction::Escalate);

        // Moving it into the past is refused.
        assert!(matches!(
            h.deadline
                .modify_deadline(&mut h.store, &call, instance(), PAYMENT, T0, 4),
            Err(ClauseError::DeadlineInPast { .. })
        ));

        h.deadline
            .clear_deadline(&mut h.store, &call, instance(), PAYMENT)
            .unwrap();
        assert_eq!(h.deadline.status(&h.store, instance(), PAYMENT), DeadlineStatus::Unset);
        assert!(matches!(
            h.deadline.mark_enforced(&mut h.store, &call, instance(), PAYMENT),
            Err(ClauseError::DeadlineNotSet { .. })
        ));

        // A cleared slot can be set again.
        h.deadline
            .set_deadline(&mut h.store, &call, instance(), PAYMENT, T0 + DAY, 3, None)
            .unwrap();
        assert!(h.deadline.is_immutable(&h.store, instance(), PAYMENT));

        let events = h.store.drain_events();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[1], ClauseEvent::DeadlineModified { action: 4, .. }));
        assert!(matches!(events[2], ClauseEvent::DeadlineCleared { index: PAYMENT, .. }));
    }
}
