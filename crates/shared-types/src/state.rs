//! # Clause Status Encoding
//!
//! Every clause defines a closed set of mutually exclusive states. Each state
//! owns a distinct bit of a `u16` status field and `0` is reserved for
//! "uninitialized". Preconditions are expressed as a `StateSet`, a mask over
//! those bits, so "is the record in one of these N states" is a single AND.
//!
//! Inside a `StateSet` the uninitialized state is represented by bit 0, which
//! no stored status ever uses.

use crate::errors::ClauseError;
use std::fmt;
use std::marker::PhantomData;

/// Membership flag used for the uninitialized state inside a mask.
const UNINITIALIZED_FLAG: u16 = 1;

/// A clause status enum with a bit-per-state encoding.
pub trait ClauseState: Copy + Eq + fmt::Debug + 'static {
    /// Human-readable clause name used in errors and logs.
    const CLAUSE: &'static str;

    /// The zero state every fresh record starts in.
    const UNINITIALIZED: Self;

    /// Stored encoding of this state. `0` only for `UNINITIALIZED`.
    fn bits(self) -> u16;

    /// Decodes a stored status value.
    fn from_bits(bits: u16) -> Option<Self>;

    /// Bit used for this state inside a `StateSet`.
    fn flag(self) -> u16 {
        match self.bits() {
            0 => UNINITIALIZED_FLAG,
            bits => bits,
        }
    }

    /// Returns true for the zero state.
    fn is_uninitialized(self) -> bool {
        self.bits() == 0
    }
}

/// A set of allowed states for one clause type.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct StateSet<S> {
    mask: u16,
    _clause: PhantomData<S>,
}

impl<S: ClauseState> StateSet<S> {
    /// Builds a set from the given states.
    #[must_use]
    pub fn of<const N: usize>(states: [S; N]) -> Self {
        let mask = states.iter().fold(0u16, |mask, state| mask | state.flag());
        Self {
            mask,
            _clause: PhantomData,
        }
    }

    /// Returns true if `state` is a member.
    #[must_use]
    pub fn contains(&self, state: S) -> bool {
        self.mask & state.flag() != 0
    }

    /// Raw mask, bit 0 standing for the uninitialized state.
    #[must_use]
    pub fn mask(&self) -> u16 {
        self.mask
    }

    /// Fails with `WrongState` unless `current` is a member.
    pub fn require(&self, current: S) -> Result<(), ClauseError> {
        if self.contains(current) {
            return Ok(());
        }
        Err(ClauseError::WrongState {
            clause: S::CLAUSE,
            actual: current.bits(),
            allowed: self.mask,
        })
    }
}

impl<S: ClauseState> fmt::Debug for StateSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateSet<{}>({:#06x})", S::CLAUSE, self.mask)
    }
}
