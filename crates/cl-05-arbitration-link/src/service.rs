//! # Arbitration Link Service
//!
//! `ArbitrationLinkClause` is the reference implementation of
//! `DisputeLinkage` an agreement embeds.

use crate::domain::{
    compute_payout, invariant_link, invariant_split, ArbitrationRecord, DisputeTerms, LinkStatus,
    Payout, Ruling,
};
use crate::ports::DisputeLinkage;
use cl_01_instance_storage::{InstanceStore, StorageBackend};
use shared_bus::ClauseEvent;
use shared_types::{Address, CallContext, ClauseError, DelegatedAuthority, InstanceId, StateSet};
use tracing::{info, warn};

/// Arbitration linkage clause module.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArbitrationLinkClause;

impl ArbitrationLinkClause {
    /// Create the clause.
    pub fn new() -> Self {
        Self
    }
}

impl DisputeLinkage for ArbitrationLinkClause {
    fn link_arbitration<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        authority: &DelegatedAuthority,
        instance: InstanceId,
        module: Address,
        module_instance: InstanceId,
        terms: DisputeTerms,
    ) -> Result<(), ClauseError> {
        authority.check(instance)?;
        store.update(instance, None, |record: &mut ArbitrationRecord| {
            if record.status != LinkStatus::Unlinked {
                return Err(ClauseError::ArbitrationAlreadyLinked { instance });
            }
            invariant_link(module, module_instance, &terms)?;

            record.status = LinkStatus::Linked;
            record.module = module;
            record.module_instance = module_instance;
            record.terms = terms;
            Ok(())
        })?;

        info!(
            instance = %instance,
            module = %module,
            module_instance = %module_instance,
            "[cl-05] Arbitration linked"
        );
        store.emit(ClauseEvent::ArbitrationLinked {
            instance,
            module,
            module_instance,
        });
        Ok(())
    }

    fn execute_arbitration_ruling<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        call: &CallContext,
        instance: InstanceId,
        ruling: u8,
        split_basis_points: u16,
    ) -> Result<Payout, ClauseError> {
        let (ruling, payout) = store.update(instance, None, |record: &mut ArbitrationRecord| {
            if record.status == LinkStatus::Resolved {
                return Err(ClauseError::AlreadyResolved { instance });
            }
            StateSet::of([LinkStatus::Linked]).require(record.status)?;
            if call.caller != record.module {
                warn!(
                    instance = %instance,
                    caller = %call.caller,
                    "[cl-05] Ruling from unlinked caller rejected"
                );
                return Err(ClauseError::Unauthorized {
                    caller: call.caller,
                    expected: record.module,
                });
            }
            let ruling = Ruling::try_from(ruling)?;
            invariant_split(ruling, split_basis_points)?;

            let payout = compute_payout(ruling, split_basis_points, record.terms.disputed_amount);
            record.status = LinkStatus::Resolved;
            record.ruling = Some(ruling);
            record.split_basis_points = split_basis_points;
            record.payout = payout;
            record.resolved_at = call.now;
            Ok((ruling, payout))
        })?;

        info!(
            instance = %instance,
            ruling = ruling.code(),
            claimant_payout = %payout.claimant,
            respondent_payout = %payout.respondent,
            "[cl-05] Ruling executed"
        );
        store.emit(ClauseEvent::ArbitrationRulingExecuted {
            instance,
            ruling: ruling.code(),
            split_basis_points,
            claimant_payout: payout.claimant,
            respondent_payout: payout.respondent,
        });
        Ok(payout)
    }

    fn record<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
    ) -> ArbitrationRecord {
        store.read(instance, None)
    }
}
