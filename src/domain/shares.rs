//! LP-share quantities.

use core::fmt;

use super::Amount;

/// A quantity of pool shares, in the share token's raw 18-decimal units.
///
/// Kept distinct from [`Amount`] so that token quantities and claims on
/// the pool cannot be mixed up in the engine's arithmetic.  The share
/// ledger stores them as plain amounts; convert with
/// [`Shares::to_amount`] and [`Shares::from_amount`] at that boundary.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::Shares;
///
/// let held = Shares::new(75);
/// let burned = Shares::new(25);
/// assert_eq!(held.checked_add(&burned), Some(Shares::new(100)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Largest representable share count.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates `Shares` from a raw value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if there are no shares.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Reads a share-ledger balance as shares.
    pub const fn from_amount(amount: Amount) -> Self {
        Self(amount.get())
    }

    /// Expresses the shares as a share-ledger amount.
    pub const fn to_amount(self) -> Amount {
        Amount::new(self.0)
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
