//! Account and token addresses.

use core::fmt;

/// A 20-byte account address.
///
/// Identifies every participant the engine deals with: liquidity
/// providers, the pool's own account, token deployers and the token
/// ledgers themselves.  All byte sequences are valid addresses.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::Address;
///
/// let addr = Address::repeat_byte(7);
/// assert!(!addr.is_zero());
/// assert!(addr.to_string().starts_with("0x0707"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; 20]);

impl Address {
    /// Creates an address with every byte set to `byte`.
    #[must_use]
    pub const fn repeat_byte(byte: u8) -> Self {
        Self([byte; 20])
    }

    /// The all-zero address.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 20])
    }

    /// Returns `true` for the all-zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
