//! Unified error type for the pool engine and its ledgers.
//!
//! Every fallible operation in the crate returns [`AmmError`].  An error
//! always means the whole operation was rejected: no reserve, share or
//! balance change is visible afterwards.

use thiserror::Error;

use crate::domain::{Address, Amount, Role, Shares};

/// Errors produced by the liquidity engine, the pool state and the
/// fungible ledgers it drives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// The debited account holds fewer tokens than required.
    #[error("insufficient balance: available {available}, required {required}")]
    InsufficientBalance {
        /// Balance held by the account.
        available: Amount,
        /// Amount the operation needed.
        required: Amount,
    },

    /// The spender was not approved for enough tokens.
    #[error("insufficient allowance: available {available}, required {required}")]
    InsufficientAllowance {
        /// Remaining allowance granted to the spender.
        available: Amount,
        /// Amount the operation needed.
        required: Amount,
    },

    /// The acting account lacks the role the operation requires.
    #[error("account {account} lacks the {role} role")]
    Unauthorized {
        /// Account that attempted the operation.
        account: Address,
        /// Role that was required.
        role: Role,
    },

    /// A deposit, withdrawal or computed share count was zero.
    #[error("zero amount: {0}")]
    ZeroAmount(&'static str),

    /// A follow-up deposit does not match the current reserve ratio.
    #[error("deposit ratio mismatch: token A implies {shares_a} shares, token B implies {shares_b}")]
    ProportionMismatch {
        /// Shares implied by the token A amount.
        shares_a: Shares,
        /// Shares implied by the token B amount.
        shares_b: Shares,
    },

    /// A withdrawal asks for more shares than the holder or the pool has.
    #[error("insufficient shares: available {available}, requested {requested}")]
    InsufficientShares {
        /// Shares that could be redeemed.
        available: Shares,
        /// Shares the caller asked to redeem.
        requested: Shares,
    },

    /// The pool holds no liquidity.
    #[error("pool is empty")]
    EmptyPool,

    /// A token address is not part of the configured pair.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// Pool configuration or ledger wiring is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A human-readable amount could not be parsed.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// Decimal precision out of the supported range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A pool invariant would be broken by the pending state.
    #[error("invariant violation: {0}")]
    InvariantViolation(&'static str),

    /// A thread panicked while holding the shared engine lock.
    #[error("shared engine lock poisoned")]
    LockPoisoned,
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
