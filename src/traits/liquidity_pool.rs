//! Liquidity provision trait.
//!
//! [`LiquidityPool`] is the public face of a two-token pool: deposit a
//! pair of tokens for shares, burn shares for a proportional slice of
//! both reserves, and inspect reserves and share supply.
//!
//! # Share Accounting Invariant
//!
//! Total shares change **only** through [`LiquidityPool::add_liquidity`]
//! and [`LiquidityPool::remove_liquidity`], and always equal the sum of
//! all LP-share balances:
//!
//! ```text
//! total_shares = Σ share_balance[holder]   for all holders
//! ```
//!
//! # Atomicity
//!
//! Each call is one transaction.  If any step fails (a ledger rejects a
//! transfer, a guard trips, arithmetic overflows) the pool and every
//! ledger it touches are left exactly as they were.

use crate::domain::{AddLiquidityReceipt, Address, Amount, RemoveLiquidityReceipt, Shares};
use crate::error::AmmError;

/// A two-token pool issuing fungible LP shares.
///
/// # Errors
///
/// Methods that can fail return [`Result<T, AmmError>`].  Common variants:
///
/// - [`AmmError::ZeroAmount`]: a zero deposit or withdrawal.
/// - [`AmmError::ProportionMismatch`]: a deposit off the reserve ratio.
/// - [`AmmError::InsufficientShares`]: burning more than held or issued.
/// - [`AmmError::EmptyPool`]: withdrawing from an unfunded pool.
/// - Ledger errors, propagated unchanged.
pub trait LiquidityPool {
    /// Deposits `amount_a` of `token_a` and `amount_b` of `token_b` from
    /// `provider` and mints shares to them.
    ///
    /// The provider must already have approved the pool for both amounts.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if the addresses are not the pool's pair.
    /// - [`AmmError::ZeroAmount`] if either amount, or the resulting share
    ///   count, is zero.
    /// - [`AmmError::ProportionMismatch`] if the deposit is off-ratio and
    ///   the pool rejects such deposits.
    /// - [`AmmError::InsufficientBalance`] / [`AmmError::InsufficientAllowance`]
    ///   from the token ledgers.
    /// - [`AmmError::Unauthorized`] if the pool may not mint shares.
    fn add_liquidity(
        &mut self,
        provider: &Address,
        token_a: &Address,
        token_b: &Address,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<AddLiquidityReceipt, AmmError>;

    /// Burns `shares` held by `provider` and pays out the proportional
    /// part of both reserves, rounded down.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `shares` is zero or redeems nothing.
    /// - [`AmmError::EmptyPool`] if the pool holds no liquidity.
    /// - [`AmmError::InsufficientShares`] if `shares` exceeds the
    ///   provider's balance or the pool's total.
    fn remove_liquidity(
        &mut self,
        provider: &Address,
        shares: Shares,
    ) -> Result<RemoveLiquidityReceipt, AmmError>;

    /// Current `(reserve_a, reserve_b)`.
    fn reserves(&self) -> (Amount, Amount);

    /// Shares outstanding.
    #[must_use]
    fn total_shares(&self) -> Shares;
}
