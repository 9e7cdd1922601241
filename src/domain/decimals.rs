//! Token decimal places.

use crate::error::AmmError;

const MAX_DECIMALS: u8 = 18;

/// Number of decimal places a token uses for its raw units.
///
/// Valid range is `0..=18`.  LP shares and both pooled tokens in the
/// reference deployment use [`Decimals::STANDARD`].
///
/// # Examples
///
/// ```
/// use pair_amm::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.factor(), 1_000_000);
/// assert!(Decimals::new(19).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimals(u8);

impl Default for Decimals {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// 18 decimal places, the native unit of the share and pair tokens.
    pub const STANDARD: Self = Self(MAX_DECIMALS);

    /// Creates a `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, AmmError> {
        if value > MAX_DECIMALS {
            return Err(AmmError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`, the raw units in one whole token.
    #[must_use]
    pub const fn factor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }

    /// Converts whole tokens to raw units.
    ///
    /// Cannot overflow: `u64::MAX * 10^18 < u128::MAX`.
    #[must_use]
    pub const fn scale_up(&self, whole: u64) -> u128 {
        (whole as u128) * self.factor()
    }
}
