//! Checked arithmetic trait for the quantity newtypes.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning inherent methods of
//! [`Amount`] and [`Shares`] into [`Result`]s with a specific
//! [`AmmError`] variant, so engine code can chain them with `?`.
//!
//! # Examples
//!
//! ```
//! use pair_amm::domain::Amount;
//! use pair_amm::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(250);
//! let payout = reserve.safe_mul_div(25, 100).expect("fits");
//! assert_eq!(payout, Amount::new(62));
//! ```

use super::mul_div;
use crate::domain::{Amount, Shares};
use crate::error::AmmError;

/// Fallible arithmetic for quantity wrapper types.
///
/// # Contract
///
/// - No panics: every failure is an `Err`.
/// - No saturation: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the sum exceeds `u128`.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// Scales the value by `numerator / denominator` at full precision,
    /// rounding down.
    ///
    /// # Errors
    ///
    /// Same as [`mul_div`].
    fn safe_mul_div(&self, numerator: u128, denominator: u128) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul_div(&self, numerator: u128, denominator: u128) -> Result<Self, AmmError> {
        mul_div(self.get(), numerator, denominator).map(Amount::new)
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("share addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("share subtraction underflow"))
    }

    #[inline]
    fn safe_mul_div(&self, numerator: u128, denominator: u128) -> Result<Self, AmmError> {
        mul_div(self.get(), numerator, denominator).map(Shares::new)
    }
}
