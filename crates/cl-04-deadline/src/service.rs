//! # Deadline Service
//!
//! `DeadlineClause` implements `DeadlineApi` against any `InstanceStore`.

use crate::domain::{
    invariant_controller, invariant_schedule, DeadlineAction, DeadlineConfig, DeadlineRecord,
    DeadlineStatus,
};
use crate::ports::DeadlineApi;
use cl_01_instance_storage::{InstanceStore, StorageBackend};
use shared_bus::ClauseEvent;
use shared_types::{Address, CallContext, ClauseError, InstanceId, SubIndex, Timestamp};
use tracing::{debug, info, warn};

/// Deadline enforcement clause module.
#[derive(Clone, Debug, Default)]
pub struct DeadlineClause {
    config: DeadlineConfig,
}

impl DeadlineClause {
    /// Create a clause with the given configuration.
    pub fn new(config: DeadlineConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &DeadlineConfig {
        &self.config
    }

    /// Preconditions shared by modify and clear.
    fn require_controller(
        record: &DeadlineRecord,
        call: &CallContext,
        instance: InstanceId,
        index: SubIndex,
    ) -> Result<(), ClauseError> {
        match record.status() {
            DeadlineStatus::Unset => return Err(ClauseError::DeadlineNotSet { instance, index }),
            DeadlineStatus::Enforced => {
                return Err(ClauseError::DeadlineAlreadyEnforced { instance, index })
            }
            DeadlineStatus::Pending => {}
        }
        let Some(controller) = record.controller else {
            return Err(ClauseError::DeadlineImmutable { instance, index });
        };
        if call.caller != controller {
            warn!(
                instance = %instance,
                index,
                caller = %call.caller,
                "[cl-04] Rejected non-controller"
            );
            return Err(ClauseError::Unauthorized {
                caller: call.caller,
                expected: controller,
            });
        }
        Ok(())
    }
}

impl DeadlineApi for DeadlineClause {
    #[allow(clippy::too_many_arguments)]
    fn set_deadline<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        call: &CallContext,
        instance: InstanceId,
        index: SubIndex,
        deadline: Timestamp,
        action: u8,
        controller: Option<Address>,
    ) -> Result<(), ClauseError> {
        let action = store.update(instance, Some(index), |record: &mut DeadlineRecord| {
            match record.status() {
                DeadlineStatus::Enforced => {
                    return Err(ClauseError::DeadlineAlreadyEnforced { instance, index })
                }
                DeadlineStatus::Pending => {
                    return Err(ClauseError::DeadlineAlreadySet { instance, index })
                }
                DeadlineStatus::Unset => {}
            }
            invariant_controller(controller)?;
            let action = invariant_schedule(deadline, action, call.now, &self.config)?;

            *record = DeadlineRecord {
                deadline,
                action,
                enforced: false,
                controller,
            };
            Ok(action)
        })?;

        debug!(
            instance = %instance,
            index,
            deadline,
            action = %action,
            immutable = controller.is_none(),
            "[cl-04] Deadline set"
        );
        store.emit(ClauseEvent::DeadlineSet {
            instance,
            index,
            deadline,
            action: action.code(),
            controller,
        });
        Ok(())
    }

    fn modify_deadline<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        call: &CallContext,
        instance: InstanceId,
        index: SubIndex,
        deadline: Timestamp,
        action: u8,
    ) -> Result<(), ClauseError> {
        let action = store.update(instance, Some(index), |record: &mut DeadlineRecord| {
            Self::require_controller(record, call, instance, index)?;
            let action = invariant_schedule(deadline, action, call.now, &self.config)?;
            record.deadline = deadline;
            record.action = action;
            Ok(action)
        })?;

        debug!(instance = %instance, index, deadline, action = %action, "[cl-04] Deadline modified");
        store.emit(ClauseEvent::DeadlineModified {
            instance,
            index,
            deadline,
            action: action.code(),
        });
        Ok(())
    }

    fn clear_deadline<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        call: &CallContext,
        instance: InstanceId,
        index: SubIndex,
    ) -> Result<(), ClauseError> {
        store.update(instance, Some(index), |record: &mut DeadlineRecord| {
            Self::require_controller(record, call, instance, index)?;
            *record = DeadlineRecord::default();
            Ok(())
        })?;

        debug!(instance = %instance, index, "[cl-04] Deadline cleared");
        store.emit(ClauseEvent::DeadlineCleared { instance, index });
        Ok(())
    }

    fn mark_enforced<B: StorageBackend>(
        &self,
        store: &mut InstanceStore<B>,
        call: &CallContext,
        instance: InstanceId,
        index: SubIndex,
    ) -> Result<DeadlineAction, ClauseError> {
        let action = store.update(instance, Some(index), |record: &mut DeadlineRecord| {
            match record.status() {
                DeadlineStatus::Unset => {
                    return Err(ClauseError::DeadlineNotSet { instance, index })
                }
                DeadlineStatus::Enforced => {
                    return Err(ClauseError::DeadlineAlreadyEnforced { instance, index })
                }
                DeadlineStatus::Pending => {}
            }
            if call.now < record.deadline {
                return Err(ClauseError::DeadlineNotExpired {
                    deadline: record.deadline,
                    now: call.now,
                });
            }
            record.enforced = true;
            Ok(record.action)
        })?;

        info!(
            instance = %instance,
            index,
            action = %action,
            enforcer = %call.caller,
            "[cl-04] Deadline enforced"
        );
        store.emit(ClauseEvent::DeadlineEnforced {
            instance,
            index,
            action: action.code(),
            timestamp: call.now,
        });
        Ok(action)
    }

    fn record<B: StorageBackend>(
        &self,
        store: &InstanceStore<B>,
        instance: InstanceId,
        index: SubIndex,
    ) -> DeadlineRecord {
        store.read(instance, Some(index))
    }
}
