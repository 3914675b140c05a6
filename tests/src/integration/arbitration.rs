//! # Arbitration Flows
//!
//! An agreement anchors its terms, sets a delivery deadline, and hands a
//! dispute to an external arbitration module once the deadline passes.

#[cfg(test)]
mod tests {
    use super::super::harness::AgreementHarness;
    use cl_02_content_anchor::ContentAnchorApi;
    use cl_04_deadline::{DeadlineAction, DeadlineApi};
    use cl_05_arbitration_link::{DisputeLinkage, DisputeTerms, Ruling};
    use primitive_types::U256;
    use shared_bus::{ClauseEvent, EventFilter, EventTopic};
    use shared_types::{Address, ClauseError, InstanceId};

    const T0: u64 = 1_700_000_000;
    const WEEK: u64 = 7 * 86_400;

    fn instance() -> InstanceId {
        InstanceId::new([0x55; 32])
    }

    fn other_instance() -> InstanceId {
        InstanceId::new([0x56; 32])
    }

    fn claimant() -> Address {
        Address::new([0xC1; 20])
    }

    fn respondent() -> Address {
        Address::new([0xD2; 20])
    }

    fn arbitrator() -> Address {
        Address::new([0xAB; 20])
    }

    fn terms() -> DisputeTerms {
        DisputeTerms {
            claimant: claimant(),
            respondent: respondent(),
            disputed_amount: U256::from(2_500_000u64),
        }
    }

    #[tokio::test]
    async fn test_missed_deadline_escalates_to_split_ruling() {
        let mut h = AgreementHarness::new(T0);
        let mut sub = h.bus.subscribe(EventFilter::all());
        let mut watcher = h.watch(instance());

        // Terms anchored and sealed by the claimant. A second agreement is
        // anchored alongside and must not show up for the first.
        let call = h.call(claimant());
        h.content
            .intake_content(&mut h.store, &call, instance(), b"deliver 40 units by week 1", None)
            .unwrap();
        h.content
            .intake_content(&mut h.store, &call, other_instance(), b"unrelated terms", None)
            .unwrap();
        h.content.seal(&mut h.store, &call, instance()).unwrap();

        // Delivery deadline escalates to arbitration.
        h.deadline
            .set_deadline(&mut h.store, &call, instance(), 0, T0 + WEEK, 4, None)
            .unwrap();
        h.advance(WEEK);
        let call = h.call(respondent());
        let action = h
            .deadline
            .mark_enforced(&mut h.store, &call, instance(), 0)
            .unwrap();
        assert_eq!(action, DeadlineAction::Escalate);

        // Orchestrator links the arbitration module.
        let authority = h.authority(instance());
        h.arbitration
            .link_arbitration(
                &mut h.store,
                &authority,
                instance(),
                arbitrator(),
                other_instance(),
                terms(),
            )
            .unwrap();
        assert!(h.arbitration.can_initiate_arbitration(&h.store, instance(), claimant()));
        assert!(h.arbitration.can_initiate_arbitration(&h.store, instance(), respondent()));
        assert!(!h.arbitration.can_initiate_arbitration(&h.store, instance(), arbitrator()));

        // A party cannot rule on its own dispute.
        let call = h.call(claimant());
        assert!(matches!(
            h.arbitration
                .execute_arbitration_ruling(&mut h.store, &call, instance(), 1, 0),
            Err(ClauseError::Unauthorized { .. })
        ));

        h.advance(3 * 86_400);
        let call = h.call(arbitrator());
        let payout = h
            .arbitration
            .execute_arbitration_ruling(&mut h.store, &call, instance(), 3, 7_500)
            .unwrap();
        assert_eq!(payout.claimant, U256::from(1_875_000u64));
        assert_eq!(payout.respondent, U256::from(625_000u64));
        assert!(h.arbitration.is_dispute_resolved(&h.store, instance()));
        assert_eq!(h.arbitration.record(&h.store, instance()).ruling, Some(Ruling::Split));

        // Content anchoring is unaffected by the dispute.
        assert!(h
            .content
            .verify_content(&h.store, instance(), b"deliver 40 units by week 1"));

        assert_eq!(h.publish_pending().await, 7);
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(sub.recv_for(instance()).await.expect("event").source_subsystem());
        }
        assert_eq!(seen, vec![2, 2, 4, 4, 5, 5]);
        assert!(sub.try_recv().unwrap().is_none());

        // The instance watcher saw the same six, in the same order.
        let watched: Vec<u8> = watcher
            .drain_for(instance())
            .iter()
            .map(ClauseEvent::source_subsystem)
            .collect();
        assert_eq!(watched, seen);
        assert_eq!(watcher.missed(), 0);
        assert_eq!(h.bus.published_by(EventTopic::ContentAnchor), 3);
    }

    #[tokio::test]
    async fn test_link_is_per_instance() {
        let mut h = AgreementHarness::new(T0);
        let authority = h.authority(instance());
        h.arbitration
            .link_arbitration(
                &mut h.store,
                &authority,
                instance(),
                arbitrator(),
                other_instance(),
                terms(),
            )
            .unwrap();

        // The same capability cannot be replayed against another instance.
        assert!(matches!(
            h.arbitration.link_arbitration(
                &mut h.store,
                &authority,
                other_instance(),
                arbitrator(),
                instance(),
                terms(),
            ),
            Err(ClauseError::CapabilityMismatch { .. })
        ));
        assert!(!h.arbitration.has_arbitration_linked(&h.store, other_instance()));

        // Relinking the first instance is refused.
        assert!(matches!(
            h.arbitration.link_arbitration(
                &mut h.store,
                &authority,
                instance(),
                Address::new([0xAC; 20]),
                other_instance(),
                terms(),
            ),
            Err(ClauseError::ArbitrationAlreadyLinked { .. })
        ));
        assert_eq!(h.arbitration.arbitration_agreement(&h.store, instance()), arbitrator());
        assert_eq!(
            h.arbitration.arbitration_parties(&h.store, instance()),
            (claimant(), respondent())
        );
    }

    #[tokio::test]
    async fn test_ruling_is_final() {
        let mut h = AgreementHarness::new(T0);
        let authority = h.authority(instance());
        h.arbitration
            .link_arbitration(
                &mut h.store,
                &authority,
                instance(),
                arbitrator(),
                other_instance(),
                terms(),
            )
            .unwrap();

        let call = h.call(arbitrator());
        let payout = h
            .arbitration
            .execute_arbitration_ruling(&mut h.store, &call, instance(), 1, 0)
            .unwrap();
        assert_eq!(payout.claimant, terms().disputed_amount);
        assert!(payout.respondent.is_zero());

        assert!(matches!(
            h.arbitration
                .execute_arbitration_ruling(&mut h.store, &call, instance(), 2, 0),
            Err(ClauseError::AlreadyResolved { .. })
        ));
        let events = h.store.drain_events();
        assert!(matches!(
            events.last(),
            Some(ClauseEvent::ArbitrationRulingExecuted { ruling: 1, .. })
        ));
    }
}
