//! Interface to a fungible-token ledger.
//!
//! The engine never stores token balances itself.  It drives one
//! [`FungibleLedger`] per pooled token and one for the LP share token,
//! and reads balances back through the same interface.
//!
//! # Authorization Model
//!
//! - `transfer_from` spends an allowance the owner granted to the
//!   spender with `approve`.  The engine is always the spender when it
//!   pulls deposits.
//! - `mint` requires [`Role::Minter`] on the acting account.  The check
//!   happens before any state is touched.
//! - `burn` requires the acting account to be the holder, or to hold
//!   [`Role::Minter`].
//!
//! # Failure Contract
//!
//! A method that returns `Err` must leave the ledger unchanged.

use crate::domain::{Address, Amount, Role, Token};
use crate::error::AmmError;

/// Balance, allowance, mint and burn primitives for one token.
///
/// # Errors
///
/// Mutating methods report:
///
/// - [`AmmError::InsufficientBalance`]: the debited account holds too few units.
/// - [`AmmError::InsufficientAllowance`]: the spender's allowance is too low.
/// - [`AmmError::Unauthorized`]: the acting account lacks the required role.
/// - [`AmmError::Overflow`]: a balance or the total supply would exceed `u128`.
pub trait FungibleLedger {
    /// The token this ledger manages.
    #[must_use]
    fn token(&self) -> Token;

    /// Units in existence.
    fn total_supply(&self) -> Amount;

    /// Units held by `account`.
    fn balance_of(&self, account: &Address) -> Amount;

    /// Units `spender` may still move out of `owner`'s balance.
    fn allowance(&self, owner: &Address, spender: &Address) -> Amount;

    /// Returns `true` if `account` holds `role`.
    #[must_use]
    fn has_role(&self, role: Role, account: &Address) -> bool;

    /// Sets `spender`'s allowance over `owner`'s balance to `amount`.
    ///
    /// # Errors
    ///
    /// Implementations may reject approvals for the zero address.
    fn approve(&mut self, owner: &Address, spender: &Address, amount: Amount)
        -> Result<(), AmmError>;

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// [`AmmError::InsufficientBalance`] if `from` holds less than `amount`.
    fn transfer(&mut self, from: &Address, to: &Address, amount: Amount) -> Result<(), AmmError>;

    /// Moves `amount` from `from` to `to` on behalf of `spender`,
    /// consuming allowance.
    ///
    /// # Errors
    ///
    /// [`AmmError::InsufficientAllowance`] or [`AmmError::InsufficientBalance`].
    fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), AmmError>;

    /// Creates `amount` new units in `to`'s balance.
    ///
    /// # Errors
    ///
    /// [`AmmError::Unauthorized`] if `minter` lacks [`Role::Minter`].
    fn mint(&mut self, minter: &Address, to: &Address, amount: Amount) -> Result<(), AmmError>;

    /// Destroys `amount` units from `from`'s balance.
    ///
    /// # Errors
    ///
    /// [`AmmError::Unauthorized`] or [`AmmError::InsufficientBalance`].
    fn burn(&mut self, operator: &Address, from: &Address, amount: Amount)
        -> Result<(), AmmError>;
}
