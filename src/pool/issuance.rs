//! Share issuance and redemption formulas.
//!
//! Pure functions over a [`PoolState`]; nothing here touches a ledger.
//!
//! # Deposit
//!
//! ```text
//! genesis:     minted = genesis_shares
//! subsequent:  sa = total × Δa / Ra      (rounded down)
//!              sb = total × Δb / Rb      (rounded down)
//!              minted = sa == sb ? sa : reject     (Strict)
//!              minted = min(sa, sb)                (Minimum)
//! ```
//!
//! A side whose share count does not fit in `u128` is unbounded: it never
//! equals the other side, and it never binds the minimum.
//!
//! # Withdrawal
//!
//! ```text
//! out_a = Ra × s / total    (rounded down, so out_a ≤ Ra)
//! out_b = Rb × s / total
//! ```
//!
//! Rounding down on both sides means every truncation leaves value in
//! the pool: the share price `R / total` never decreases.

use tracing::debug;

use super::PoolState;
use crate::config::ProportionPolicy;
use crate::domain::{Amount, Shares};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Shares minted for depositing `amount_a` and `amount_b` into `state`.
///
/// # Errors
///
/// - [`AmmError::ZeroAmount`] if either amount is zero, or the deposit is
///   too small to mint a single share unit.
/// - [`AmmError::ProportionMismatch`] under [`ProportionPolicy::Strict`]
///   when the two amounts imply different share counts.  An unbounded
///   side is reported as [`Shares::MAX`].
/// - [`AmmError::Overflow`] under [`ProportionPolicy::Minimum`] if both
///   share counts exceed `u128`.
pub fn deposit_shares(
    state: &PoolState,
    amount_a: Amount,
    amount_b: Amount,
    genesis_shares: Shares,
    policy: ProportionPolicy,
) -> Result<Shares, AmmError> {
    if amount_a.is_zero() {
        return Err(AmmError::ZeroAmount("token A deposit must be positive"));
    }
    if amount_b.is_zero() {
        return Err(AmmError::ZeroAmount("token B deposit must be positive"));
    }

    if state.is_empty() {
        return Ok(genesis_shares);
    }

    let total = state.total_shares();
    let shares_a = side_shares(amount_a, state.reserve_a(), total)?;
    let shares_b = side_shares(amount_b, state.reserve_b(), total)?;
    debug!(?shares_a, ?shares_b, %policy, "deposit share candidates");

    let minted = match (policy, shares_a, shares_b) {
        (ProportionPolicy::Strict, Some(a), Some(b)) if a == b => a,
        (ProportionPolicy::Strict, a, b) => {
            return Err(AmmError::ProportionMismatch {
                shares_a: a.unwrap_or(Shares::MAX),
                shares_b: b.unwrap_or(Shares::MAX),
            });
        }
        (ProportionPolicy::Minimum, Some(a), Some(b)) => a.min(b),
        (ProportionPolicy::Minimum, Some(s), None) | (ProportionPolicy::Minimum, None, Some(s)) => s,
        (ProportionPolicy::Minimum, None, None) => {
            return Err(AmmError::Overflow("deposit share count exceeds u128"));
        }
    };

    if minted.is_zero() {
        return Err(AmmError::ZeroAmount("deposit too small to mint any shares"));
    }
    Ok(minted)
}

/// `total × amount / reserve` rounded down, or `None` when it exceeds
/// `u128`.
fn side_shares(amount: Amount, reserve: Amount, total: Shares) -> Result<Option<Shares>, AmmError> {
    match total.safe_mul_div(amount.get(), reserve.get()) {
        Ok(shares) => Ok(Some(shares)),
        Err(AmmError::Overflow(_)) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Pro-rata slice of both reserves for `shares`, rounded down.
///
/// Returns zeros for an empty pool.  No bounds checks beyond arithmetic;
/// see [`withdrawal_amounts`] for the guarded version.
///
/// # Errors
///
/// [`AmmError::Overflow`] if `shares` is so far above the supply that a
/// payout would not fit in `u128`.
pub fn pro_rata(state: &PoolState, shares: Shares) -> Result<(Amount, Amount), AmmError> {
    if state.is_empty() {
        return Ok((Amount::ZERO, Amount::ZERO));
    }
    let total = state.total_shares().get();
    let out_a = state
        .reserve_a()
        .safe_mul_div(shares.get(), total)?;
    let out_b = state
        .reserve_b()
        .safe_mul_div(shares.get(), total)?;
    Ok((out_a, out_b))
}

/// Amounts paid out for burning `shares`.
///
/// # Errors
///
/// - [`AmmError::ZeroAmount`] if `shares` is zero or redeems nothing.
/// - [`AmmError::EmptyPool`] if no shares are outstanding.
/// - [`AmmError::InsufficientShares`] if `shares` exceeds the supply.
pub fn withdrawal_amounts(state: &PoolState, shares: Shares) -> Result<(Amount, Amount), AmmError> {
    if shares.is_zero() {
        return Err(AmmError::ZeroAmount("withdrawal must burn at least one share unit"));
    }
    if state.is_empty() {
        return Err(AmmError::EmptyPool);
    }
    let total = state.total_shares();
    if shares > total {
        return Err(AmmError::InsufficientShares {
            available: total,
            requested: shares,
        });
    }

    let (out_a, out_b) = pro_rata(state, shares)?;
    if out_a.is_zero() && out_b.is_zero() {
        return Err(AmmError::ZeroAmount("withdrawal too small to redeem any tokens"));
    }
    debug!(%shares, %out_a, %out_b, "withdrawal amounts");
    Ok((out_a, out_b))
}
