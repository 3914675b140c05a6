//! # Record Contract
//!
//! A clause record is a plain serialisable struct bound to one clause tag.

use super::keys::ClauseTag;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A per-instance record stored by a clause.
///
/// `Default` must be the uninitialized state: an absent record reads as
/// `R::default()` and every read answers from it.
///
/// The storage key is derived from `TAG`, so each record type needs a tag of
/// its own. Two types on one tag share slots and fail to decode each other.
pub trait ClauseRecord: Serialize + DeserializeOwned + Default + Clone {
    /// Clause type that owns records of this type.
    const TAG: ClauseTag;
}
