//! # Instance Isolation
//!
//! Many agreement instances and every clause share one store. State written
//! for one instance or clause must never surface in another, and a rejected
//! transition must leave everything untouched.

#[cfg(test)]
mod tests {
    use super::super::harness::AgreementHarness;
    use cl_01_instance_storage::{ClauseRecord, ClauseTag, StorageBackend};
    use cl_02_content_anchor::{fingerprint_of, ContentAnchorApi, ContentRecord, ContentStatus};
    use cl_03_cross_chain_message::{CrossChainMessageApi, CrossChainStatus, MessageRecord};
    use cl_04_deadline::{DeadlineApi, DeadlineRecord, DeadlineStatus};
    use cl_05_arbitration_link::{ArbitrationRecord, DisputeLinkage, DisputeTerms};
    use primitive_types::U256;
    use rand::Rng;
    use shared_types::{Address, ChainSelector, Hash, InstanceId};
    use std::collections::HashSet;

    const T0: u64 = 1_700_000_000;

    fn random_instances(count: usize) -> Vec<InstanceId> {
        let mut rng = rand::thread_rng();
        let mut seen = HashSet::new();
        while seen.len() < count {
            let bytes: [u8; 32] = rng.gen();
            let id = InstanceId::new(bytes);
            if !id.is_zero() {
                seen.insert(id);
            }
        }
        seen.into_iter().collect()
    }

    fn registrant() -> Address {
        Address::new([0xA1; 20])
    }

    #[test]
    fn test_each_record_type_owns_its_tag() {
        let tags = [
            <ContentRecord as ClauseRecord>::TAG,
            <MessageRecord as ClauseRecord>::TAG,
            <DeadlineRecord as ClauseRecord>::TAG,
            <ArbitrationRecord as ClauseRecord>::TAG,
        ];
        let distinct: HashSet<ClauseTag> = tags.iter().copied().collect();
        assert_eq!(distinct.len(), tags.len());
        assert_eq!(
            tags,
            [
                ClauseTag::ContentAnchor,
                ClauseTag::CrossChainMessage,
                ClauseTag::Deadline,
                ClauseTag::ArbitrationLink,
            ]
        );
    }

    #[tokio::test]
    async fn test_random_instances_keep_their_own_content() {
        let mut h = AgreementHarness::new(T0);
        let instances = random_instances(64);
        let call = h.call(registrant());

        for (i, instance) in instances.iter().enumerate() {
            let doc = format!("agreement #{i}");
            h.content
                .intake_content(&mut h.store, &call, *instance, doc.as_bytes(), None)
                .unwrap();
            if i % 2 == 0 {
                h.content.seal(&mut h.store, &call, *instance).unwrap();
            }
        }

        for (i, instance) in instances.iter().enumerate() {
            let doc = format!("agreement #{i}");
            assert_eq!(h.content.fingerprint(&h.store, *instance), fingerprint_of(doc.as_bytes()));
            let expected = if i % 2 == 0 {
                ContentStatus::Sealed
            } else {
                ContentStatus::Registered
            };
            assert_eq!(h.content.status(&h.store, *instance), expected);

            // Another instance's document never verifies here.
            let other = format!("agreement #{}", (i + 1) % instances.len());
            assert!(!h.content.verify_content(&h.store, *instance, other.as_bytes()));
        }

        assert_eq!(h.store.backend().len(), instances.len());
        assert_eq!(h.publish_pending().await, instances.len() + instances.len() / 2);
    }

    #[test]
    fn test_all_clauses_share_one_instance_without_interference() {
        let mut h = AgreementHarness::new(T0);
        let instance = InstanceId::new([0x99; 32]);
        let call = h.call(registrant());
        let authority = h.authority(instance);

        h.content
            .intake_hash(&mut h.store, &call, instance, Hash::new([0x01; 32]), None)
            .unwrap();

        h.message
            .set_destination_chain(&mut h.store, instance, ChainSelector(10))
            .unwrap();
        h.message
            .set_counterparty(&mut h.store, instance, Address::new([0xCC; 20]))
            .unwrap();
        h.message
            .set_controller(&mut h.store, instance, registrant())
            .unwrap();
        h.message
            .finalize_configuration(&mut h.store, instance)
            .unwrap();

        h.deadline
            .set_deadline(&mut h.store, &call, instance, 0, T0 + 10, 1, None)
            .unwrap();
        h.deadline
            .set_deadline(&mut h.store, &call, instance, 1, T0 + 20, 2, Some(registrant()))
            .unwrap();

        h.arbitration
            .link_arbitration(
                &mut h.store,
                &authority,
                instance,
                Address::new([0xAB; 20]),
                InstanceId::new([0x98; 32]),
                DisputeTerms {
                    claimant: Address::new([0x01; 20]),
                    respondent: Address::new([0x02; 20]),
                    disputed_amount: U256::from(100u64),
                },
            )
            .unwrap();

        // One record per clause plus one per deadline index.
        assert_eq!(h.store.backend().len(), 5);

        assert_eq!(h.content.status(&h.store, instance), ContentStatus::Registered);
        assert_eq!(h.message.status(&h.store, instance), CrossChainStatus::Pending);
        assert_eq!(h.deadline.status(&h.store, instance, 0), DeadlineStatus::Pending);
        assert_eq!(h.deadline.deadline(&h.store, instance, 1), T0 + 20);
        assert!(h.arbitration.has_arbitration_linked(&h.store, instance));

        // An unused deadline index reads as unset.
        assert_eq!(h.deadline.status(&h.store, instance, 2), DeadlineStatus::Unset);
        assert_eq!(h.store.backend().len(), 5);
    }

    #[test]
    fn test_rejected_transition_leaves_store_untouched() {
        let mut h = AgreementHarness::new(T0);
        let instance = InstanceId::new([0x31; 32]);
        let call = h.call(registrant());

        assert!(h
            .content
            .intake_hash(&mut h.store, &call, instance, Hash::ZERO, None)
            .is_err());
        assert!(h
            .deadline
            .set_deadline(&mut h.store, &call, instance, 0, T0 - 1, 1, None)
            .is_err());
        assert!(h
            .message
            .finalize_configuration(&mut h.store, instance)
            .is_err());

        assert!(h.store.backend().is_empty());
        assert!(h.store.pending_events().is_empty());
        assert_eq!(h.content.status(&h.store, instance), ContentStatus::Uninitialized);
    }
}
