//! Full-precision `a × b / c`.
//!
//! Share and payout formulas multiply two 18-decimal quantities before
//! dividing, e.g. `reserve × shares / total`.  With 18 decimals the
//! product of two modest values already exceeds `u128`
//! (`150e18 × 100e18 ≈ 1.5e40 > 3.4e38`), so the product is formed in
//! 256 bits and only the quotient must fit back into `u128`.
//!
//! The quotient is always truncated: shares minted and amounts paid out
//! round down, so every remainder stays with the pool.

use primitive_types::U256;

use crate::error::AmmError;

/// Computes `⌊a × b / denominator⌋` with a 256-bit intermediate.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the quotient exceeds `u128::MAX`.
///
/// # Examples
///
/// ```
/// use pair_amm::math::mul_div;
///
/// let wad = 10u128.pow(18);
/// let out = mul_div(150 * wad, 25 * wad, 100 * wad).expect("fits");
/// assert_eq!(out, 37 * wad + wad / 2);
/// ```
pub fn mul_div(a: u128, b: u128, denominator: u128) -> Result<u128, AmmError> {
    if denominator == 0 {
        return Err(AmmError::DivisionByZero);
    }

    // (2^128 - 1)^2 < 2^256: the product cannot overflow.
    let product = U256::from(a) * U256::from(b);
    let quotient = product / U256::from(denominator);
    if quotient > U256::from(u128::MAX) {
        return Err(AmmError::Overflow("mul_div quotient exceeds u128"));
    }
    Ok(quotient.as_u128())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const WAD: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn exact_division() {
        let Ok(v) = mul_div(100 * WAD, 15 * WAD, 150 * WAD) else {
            panic!("expected Ok");
        };
        assert_eq!(v, 10 * WAD);
    }

    #[test]
    fn product_wider_than_u128() {
        let Ok(v) = mul_div(u128::MAX, u128::MAX, u128::MAX) else {
            panic!("expected Ok");
        };
        assert_eq!(v, u128::MAX);
    }

    #[test]
    fn truncates() {
        assert_eq!(mul_div(10, 1, 3), Ok(3));
        assert_eq!(mul_div(9, 1, 3), Ok(3));
        assert_eq!(mul_div(0, 5, 3), Ok(0));
        assert_eq!(mul_div(2, 1, 3), Ok(0));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(mul_div(1, 1, 0), Err(AmmError::DivisionByZero));
    }

    #[test]
    fn quotient_overflow() {
        assert!(matches!(
            mul_div(u128::MAX, 2, 1),
            Err(AmmError::Overflow(_))
        ));
    }

    #[test]
    fn never_exceeds_first_factor_when_ratio_at_most_one() {
        // reserve * s / total <= reserve whenever s <= total
        let reserve = 187 * WAD + 1;
        for (s, total) in [(1, 3), (2, 3), (3, 3), (WAD, 7 * WAD)] {
            let Ok(v) = mul_div(reserve, s, total) else {
                panic!("expected Ok");
            };
            assert!(v <= reserve);
        }
    }
}
