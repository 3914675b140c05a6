//! # Domain Invariants
//!
//! Link validation and payout computation.

use super::value_objects::{DisputeTerms, Payout, Ruling, BASIS_POINTS};
use primitive_types::U256;
use shared_types::{Address, ClauseError, InstanceId};

/// Invariant: module, module instance and parties are set, parties differ.
pub fn invariant_link(
    module: Address,
    module_instance: InstanceId,
    terms: &DisputeTerms,
) -> Result<(), ClauseError> {
    if module.is_zero() {
        return Err(ClauseError::invalid("module", "zero address"));
    }
    if module_instance.is_zero() {
        return Err(ClauseError::invalid("module_instance", "zero instance id"));
    }
    if terms.claimant.is_zero() {
        return Err(ClauseError::invalid("claimant", "zero address"));
    }
    if terms.respondent.is_zero() {
        return Err(ClauseError::invalid("respondent", "zero address"));
    }
    if terms.claimant == terms.respondent {
        return Err(ClauseError::invalid(
            "respondent",
            "claimant and respondent must differ",
        ));
    }
    Ok(())
}

/// Invariant: basis points only accompany a split, and never exceed 10000.
pub fn invariant_split(ruling: Ruling, split_basis_points: u16) -> Result<(), ClauseError> {
    match ruling {
        Ruling::Split if split_basis_points > BASIS_POINTS => Err(ClauseError::invalid(
            "split_basis_points",
            format!("{split_basis_points} exceeds {BASIS_POINTS}"),
        )),
        Ruling::ClaimantWins | Ruling::RespondentWins if split_basis_points != 0 => {
            Err(ClauseError::invalid(
                "split_basis_points",
                "only a split ruling carries a share",
            ))
        }
        _ => Ok(()),
    }
}

/// Divide `amount` according to `ruling`. The respondent receives the
/// rounding remainder of a split.
pub fn compute_payout(ruling: Ruling, split_basis_points: u16, amount: U256) -> Payout {
    match ruling {
        Ruling::ClaimantWins => Payout {
            claimant: amount,
            respondent: U256::zero(),
        },
        Ruling::RespondentWins => Payout {
            claimant: U256::zero(),
            respondent: amount,
        },
        Ruling::Split => {
            let denominator = U256::from(BASIS_POINTS);
            let share = U256::from(split_basis_points.min(BASIS_POINTS));
            // amount·bps/10000 without overflowing for amounts near U256::MAX.
            let claimant =
                (amount / denominator) * share + (amount % denominator) * share / denominator;
            Payout {
                claimant,
                respondent: amount - claimant,
            }
        }
    }
}
