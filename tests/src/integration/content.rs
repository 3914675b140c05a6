//! # Content Anchor Flows
//!
//! Register, seal and revoke content fingerprints through the agreement
//! harness and check what subscribers observe on the bus.

#[cfg(test)]
mod tests {
    use super::super::harness::AgreementHarness;
    use cl_02_content_anchor::{fingerprint_of, ContentAnchorApi, ContentStatus};
    use shared_bus::{ClauseEvent, EventFilter, EventTopic};
    use shared_types::{Address, ClauseError, Hash, InstanceId};
    use std::time::Duration;
    use tokio::time::timeout;

    const T0: u64 = 1_700_000_000;

    fn instance() -> InstanceId {
        InstanceId::new([0x11; 32])
    }

    fn alice() -> Address {
        Address::new([0xA1; 20])
    }

    fn mallory() -> Address {
        Address::new([0x0D; 20])
    }

    // =============================================================================
    // REGISTER → SEAL → VERIFY
    // =============================================================================

    #[tokio::test]
    async fn test_register_seal_verify_flow() {
        let mut h = AgreementHarness::new(T0);
        let mut sub = h.bus.subscribe(EventFilter::topics(vec![EventTopic::ContentAnchor]));
        let doc = b"master services agreement, revision 3";

        let call = h.call(alice());
        let fingerprint = h
            .content
            .intake_content(&mut h.store, &call, instance(), doc, Some("ipfs://bafy-msa-r3"))
            .unwrap();
        assert_eq!(fingerprint, fingerprint_of(doc));
        assert_eq!(h.publish_pending().await, 1);

        let event = timeout(Duration::from_millis(100), sub.recv())
            .await
            .expect("timeout waiting for event")
            .expect("should receive event");
        match event {
            ClauseEvent::ContentRegistered {
                fingerprint: fp,
                locator,
                registrant,
                timestamp,
                ..
            } => {
                assert_eq!(fp, fingerprint);
                assert_eq!(locator, "ipfs://bafy-msa-r3");
                assert_eq!(registrant, alice());
                assert_eq!(timestamp, T0);
            }
            other => panic!("Expected ContentRegistered, got {:?}", other),
        }

        h.advance(60);
        let call = h.call(alice());
        h.content.seal(&mut h.store, &call, instance()).unwrap();
        h.publish_pending().await;

        assert_eq!(h.content.status(&h.store, instance()), ContentStatus::Sealed);
        assert_eq!(h.content.sealed_at(&h.store, instance()), T0 + 60);
        assert!(h.content.verify_content(&h.store, instance(), doc));
        assert!(!h.content.verify_content(&h.store, instance(), b"master services agreement, revision 4"));
        assert_eq!(h.content.extract_registrant(&h.store, instance()).unwrap(), alice());

        assert!(matches!(
            sub.recv().await,
            Some(ClauseEvent::ContentSealed { timestamp, .. }) if timestamp == T0 + 60
        ));
    }

    #[tokio::test]
    async fn test_revoked_content_stops_verifying() {
        let mut h = AgreementHarness::new(T0);
        let fingerprint = Hash::new([0x42; 32]);

        let call = h.call(alice());
        h.content
            .intake_hash(&mut h.store, &call, instance(), fingerprint, None)
            .unwrap();
        assert!(h.content.verify(&h.store, instance(), &fingerprint));

        h.content.revoke(&mut h.store, &call, instance()).unwrap();
        assert!(!h.content.verify(&h.store, instance(), &fingerprint));
        assert!(matches!(
            h.content.extract_fingerprint(&h.store, instance()),
            Err(ClauseError::WrongState { .. })
        ));
        // Reads stay total after revocation.
        assert_eq!(h.content.fingerprint(&h.store, instance()), fingerprint);

        assert_eq!(h.publish_pending().await, 2);
    }

    #[tokio::test]
    async fn test_stranger_cannot_close_registration() {
        let mut h = AgreementHarness::new(T0);
        let call = h.call(alice());
        h.content
            .intake_content(&mut h.store, &call, instance(), b"terms", None)
            .unwrap();
        h.store.drain_events();

        let call = h.call(mallory());
        assert!(matches!(
            h.content.seal(&mut h.store, &call, instance()),
            Err(ClauseError::Unauthorized { expected, .. }) if expected == alice()
        ));
        assert!(matches!(
            h.content.revoke(&mut h.store, &call, instance()),
            Err(ClauseError::Unauthorized { .. })
        ));
        assert_eq!(h.content.status(&h.store, instance()), ContentStatus::Registered);
        assert_eq!(h.publish_pending().await, 0);
    }
}
