//! # Domain Invariants
//!
//! Schedule and authorization rules for deadlines.

use super::value_objects::{DeadlineAction, DeadlineConfig};
use shared_types::{Address, ClauseError, Timestamp};

/// Validate a requested `(deadline, action)` at time `now`.
///
/// Checks run zero deadline, action byte, horizon, then past. Malformed input
/// fails `InvalidInput` before the time-ordering check.
pub fn invariant_schedule(
    deadline: Timestamp,
    action: u8,
    now: Timestamp,
    config: &DeadlineConfig,
) -> Result<DeadlineAction, ClauseError> {
    if deadline == 0 {
        return Err(ClauseError::invalid("deadline", "zero timestamp"));
    }
    let action = DeadlineAction::try_from(action)?;
    if action == DeadlineAction::None {
        return Err(ClauseError::invalid("action", "action must not be none"));
    }
    if let Some(horizon) = config.max_horizon_secs {
        if deadline > now.saturating_add(horizon) {
            return Err(ClauseError::invalid(
                "deadline",
                format!("more than {horizon}s ahead of {now}"),
            ));
        }
    }
    if deadline <= now {
        return Err(ClauseError::DeadlineInPast { deadline, now });
    }
    Ok(action)
}

/// Invariant: a concrete controller is never the zero address.
pub fn invariant_controller(controller: Option<Address>) -> Result<(), ClauseError> {
    match controller {
        Some(address) if address.is_zero() => Err(ClauseError::invalid(
            "controller",
            "use None for an immutable deadline",
        )),
        _ => Ok(()),
    }
}
