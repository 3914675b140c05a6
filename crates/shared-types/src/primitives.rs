//! # Domain Primitives
//!
//! Fixed-width value types shared by all clauses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unix timestamp in seconds, as supplied by the execution environment.
pub type Timestamp = u64;

/// Sub-index for clauses that keep several records per instance.
pub type SubIndex = u64;

macro_rules! fixed_bytes {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            /// The all-zero value.
            pub const ZERO: Self = Self([0u8; $len]);

            /// Width in bytes.
            pub const LEN: usize = $len;

            /// Creates a value from a fixed-size array.
            #[must_use]
            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Creates a value from a slice. Returns None if wrong length.
            #[must_use]
            pub fn from_slice(slice: &[u8]) -> Option<Self> {
                <[u8; $len]>::try_from(slice).ok().map(Self)
            }

            /// Returns the underlying bytes.
            #[must_use]
            pub const fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Returns true if every byte is zero.
            #[must_use]
            pub fn is_zero(&self) -> bool {
                self.0 == [0u8; $len]
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let encoded = hex::encode(self.0);
                write!(f, "0x{}...{}", &encoded[..8], &encoded[encoded.len() - 4..])
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for [u8; $len] {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

fixed_bytes!(
    /// Opaque, orchestrator-chosen identifier of one agreement instance.
    ///
    /// Clauses never allocate or validate it; uniqueness is the caller's
    /// responsibility.
    InstanceId,
    32
);

fixed_bytes!(
    /// A 32-byte hash (content fingerprints, message identifiers).
    Hash,
    32
);

fixed_bytes!(
    /// A 20-byte account address.
    Address,
    20
);

/// Cross-chain selector identifying a destination or source ledger.
///
/// Zero is reserved for "unset".
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct ChainSelector(pub u64);

impl ChainSelector {
    /// The unset selector.
    pub const NONE: Self = Self(0);

    /// Returns true if this selector is the zero value.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for ChainSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chain:{}", self.0)
    }
}

impl fmt::Display for ChainSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ChainSelector {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
