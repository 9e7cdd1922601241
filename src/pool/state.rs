//! Pool reserves and share supply.

use core::fmt;

use crate::domain::{Amount, Shares};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Lifecycle phase of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolStatus {
    /// No reserves, no shares.
    Empty,
    /// Both reserves and the share supply are positive.
    Funded,
}

impl fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Funded => write!(f, "funded"),
        }
    }
}

/// Reserves of both pooled tokens and the shares issued against them.
///
/// # Invariant
///
/// The pool is either empty or funded on all three axes:
///
/// ```text
/// reserve_a == 0  ⟺  reserve_b == 0  ⟺  total_shares == 0
/// ```
///
/// Only the engine mutates a `PoolState`; outside the crate it is
/// read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PoolState {
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
}

impl PoolState {
    /// An empty pool.
    pub const EMPTY: Self = Self {
        reserve_a: Amount::ZERO,
        reserve_b: Amount::ZERO,
        total_shares: Shares::ZERO,
    };

    /// `(reserve_a, reserve_b)`.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }

    /// Reserve of token A.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Reserve of token B.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Shares outstanding.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// `true` when no shares are outstanding.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn status(&self) -> PoolStatus {
        if self.is_empty() {
            PoolStatus::Empty
        } else {
            PoolStatus::Funded
        }
    }

    /// Checks the all-or-nothing emptiness invariant.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvariantViolation`] if exactly one or two of
    /// the three quantities are zero.
    pub fn check_invariants(&self) -> Result<(), AmmError> {
        let zeros = [
            self.reserve_a.is_zero(),
            self.reserve_b.is_zero(),
            self.total_shares.is_zero(),
        ];
        if zeros.iter().all(|z| *z) || zeros.iter().all(|z| !*z) {
            Ok(())
        } else {
            Err(AmmError::InvariantViolation(
                "reserves and share supply must be all zero or all positive",
            ))
        }
    }

    pub(crate) fn deposit(
        &mut self,
        amount_a: Amount,
        amount_b: Amount,
        minted: Shares,
    ) -> Result<(), AmmError> {
        let next = Self {
            reserve_a: self.reserve_a.safe_add(&amount_a)?,
            reserve_b: self.reserve_b.safe_add(&amount_b)?,
            total_shares: self.total_shares.safe_add(&minted)?,
        };
        *self = next;
        Ok(())
    }

    pub(crate) fn withdraw(
        &mut self,
        amount_a: Amount,
        amount_b: Amount,
        burned: Shares,
    ) -> Result<(), AmmError> {
        let next = Self {
            reserve_a: self.reserve_a.safe_sub(&amount_a)?,
            reserve_b: self.reserve_b.safe_sub(&amount_b)?,
            total_shares: self.total_shares.safe_sub(&burned)?,
        };
        *self = next;
        Ok(())
    }
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reserves ({}, {}), {} shares",
            self.reserve_a, self.reserve_b, self.total_shares
        )
    }
}
