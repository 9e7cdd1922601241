//! Raw token amount with checked arithmetic and decimal conversion.

use core::fmt;

use super::Decimals;
use crate::error::AmmError;

/// A raw token amount in the smallest unit (wei or equivalent).
///
/// `Amount` never interprets decimals by itself.  Conversion to and from
/// human-readable strings goes through [`Amount::parse_units`] and
/// [`Amount::format_units`] with an explicit [`Decimals`].
///
/// Arithmetic methods are checked and return `None` on overflow or
/// underflow instead of panicking.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Amount, Decimals};
///
/// let a = Amount::parse_units("37.5", Decimals::STANDARD).expect("valid");
/// assert_eq!(a.get(), 37_500_000_000_000_000_000);
/// assert_eq!(a.format_units(Decimals::STANDARD), "37.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.  Used as an unlimited allowance.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates an `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying raw value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
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

    /// Parses a decimal string such as `"150"` or `"62.5"` into raw units.
    ///
    /// Surrounding whitespace is ignored.  At most `decimals` fractional
    /// digits are accepted; nothing is rounded.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] for empty input, stray characters or
    ///   too many fractional digits.
    /// - [`AmmError::Overflow`] if the value does not fit in `u128`.
    pub fn parse_units(text: &str, decimals: Decimals) -> Result<Self, AmmError> {
        let text = text.trim();
        let (whole, frac) = text.split_once('.').unwrap_or((text, ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(AmmError::InvalidAmount("empty amount"));
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) {
            return Err(AmmError::InvalidAmount(
                "amount must be digits with at most one decimal point",
            ));
        }
        if frac.len() > usize::from(decimals.get()) {
            return Err(AmmError::InvalidAmount(
                "more fractional digits than the token supports",
            ));
        }

        let mut raw: u128 = 0;
        for digit in whole.bytes().chain(frac.bytes()) {
            raw = raw
                .checked_mul(10)
                .and_then(|v| v.checked_add(u128::from(digit - b'0')))
                .ok_or(AmmError::Overflow("parsed amount exceeds u128"))?;
        }

        // frac.len() <= 18 here, so the cast is lossless.
        let padding = u32::from(decimals.get()) - frac.len() as u32;
        raw.checked_mul(10u128.pow(padding))
            .map(Self)
            .ok_or(AmmError::Overflow("parsed amount exceeds u128"))
    }

    /// Formats the amount as a decimal string without trailing zeros.
    #[must_use]
    pub fn format_units(&self, decimals: Decimals) -> String {
        let factor = decimals.factor();
        let whole = self.0 / factor;
        let frac = self.0 % factor;
        if frac == 0 {
            return whole.to_string();
        }
        let width = usize::from(decimals.get());
        let digits = format!("{frac:0width$}");
        format!("{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
