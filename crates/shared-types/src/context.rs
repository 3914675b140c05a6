//! # Call Context
//!
//! Identity and time supplied by the execution environment for one call, plus
//! the capability token used by transitions that trust their invoker.

use crate::errors::ClauseError;
use crate::primitives::{Address, InstanceId, Timestamp};
use parking_lot::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Caller identity and current time for a single clause invocation.
///
/// The environment's clock is monotonic non-decreasing but otherwise
/// adversarial: clauses only ever compare against `now`, never assume a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallContext {
    /// Identity invoking the operation.
    pub caller: Address,
    /// Current time as agreed by the execution environment.
    pub now: Timestamp,
}

impl CallContext {
    /// Creates a context with an explicit time.
    #[must_use]
    pub const fn new(caller: Address, now: Timestamp) -> Self {
        Self { caller, now }
    }

    /// Creates a context reading the time from a clock.
    #[must_use]
    pub fn at(caller: Address, clock: &dyn Clock) -> Self {
        Self::new(caller, clock.now())
    }
}

/// Proof that the invoking context already authorized an operation on one
/// instance.
///
/// Transitions such as cross-chain `mark_sent` have no visibility into the
/// orchestrator's access control. They take this token instead of reading the
/// caller, which makes the trust boundary visible in the signature. The token
/// is scoped to a single instance; presenting it for another fails with
/// `CapabilityMismatch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelegatedAuthority {
    instance: InstanceId,
    authorized_by: Address,
    now: Timestamp,
}

impl DelegatedAuthority {
    /// Issues a capability. The issuer asserts it has performed access control
    /// for `instance` before delegating execution.
    #[must_use]
    pub const fn grant(instance: InstanceId, authorized_by: Address, now: Timestamp) -> Self {
        Self {
            instance,
            authorized_by,
            now,
        }
    }

    /// Issues a capability from an existing call context.
    #[must_use]
    pub const fn from_call(instance: InstanceId, call: &CallContext) -> Self {
        Self::grant(instance, call.caller, call.now)
    }

    /// Instance the capability covers.
    #[must_use]
    pub const fn instance(&self) -> InstanceId {
        self.instance
    }

    /// Identity that performed the authorization.
    #[must_use]
    pub const fn authorized_by(&self) -> Address {
        self.authorized_by
    }

    /// Time at which the capability was issued.
    #[must_use]
    pub const fn now(&self) -> Timestamp {
        self.now
    }

    /// Fails unless this capability covers `instance`.
    pub fn check(&self, instance: InstanceId) -> Result<(), ClauseError> {
        if self.instance != instance {
            return Err(ClauseError::CapabilityMismatch {
                granted: self.instance,
                requested: instance,
            });
        }
        Ok(())
    }
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Current Unix time in seconds.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default()
    }
}

/// Manually driven clock for tests and simulations. Never moves backwards.
#[derive(Debug, Default)]
pub struct ManualClock {
    current_time: RwLock<Timestamp>,
}

impl ManualClock {
    /// Create a clock starting at `start`.
    #[must_use]
    pub fn new(start: Timestamp) -> Self {
        Self {
            current_time: RwLock::new(start),
        }
    }

    /// Move time to `time`. Earlier values are ignored.
    pub fn set(&self, time: Timestamp) {
        let mut current = self.current_time.write();
        if time > *current {
            *current = time;
        } else if time < *current {
            tracing::debug!(requested = time, current = *current, "Ignoring clock regression");
        }
    }

    /// Advance time by `secs`.
    pub fn advance(&self, secs: u64) {
        let mut current = self.current_time.write();
        *current = current.saturating_add(secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current_time.read()
    }
}
