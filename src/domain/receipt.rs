//! Outcomes of liquidity operations.

use core::fmt;

use super::{Address, Amount, Shares};

/// The outcome of a successful deposit.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Address, AddLiquidityReceipt, Amount, Shares};
///
/// let r = AddLiquidityReceipt::new(
///     Address::repeat_byte(1),
///     Amount::new(150),
///     Amount::new(250),
///     Shares::new(100),
///     true,
/// );
/// assert!(r.is_genesis());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddLiquidityReceipt {
    provider: Address,
    amount_a: Amount,
    amount_b: Amount,
    shares: Shares,
    genesis: bool,
}

impl AddLiquidityReceipt {
    /// Creates a receipt.
    #[must_use]
    pub const fn new(
        provider: Address,
        amount_a: Amount,
        amount_b: Amount,
        shares: Shares,
        genesis: bool,
    ) -> Self {
        Self {
            provider,
            amount_a,
            amount_b,
            shares,
            genesis,
        }
    }

    /// Account that supplied the tokens and received the shares.
    #[must_use]
    pub const fn provider(&self) -> Address {
        self.provider
    }

    /// Token A pulled into the pool.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Token B pulled into the pool.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Shares minted to the provider.
    #[must_use]
    pub const fn shares(&self) -> Shares {
        self.shares
    }

    /// `true` if this deposit funded an empty pool.
    #[must_use]
    pub const fn is_genesis(&self) -> bool {
        self.genesis
    }
}

impl fmt::Display for AddLiquidityReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} deposited {} A + {} B for {} shares",
            self.provider, self.amount_a, self.amount_b, self.shares
        )
    }
}

/// The outcome of a successful withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemoveLiquidityReceipt {
    provider: Address,
    shares: Shares,
    amount_a: Amount,
    amount_b: Amount,
}

impl RemoveLiquidityReceipt {
    /// Creates a receipt.
    #[must_use]
    pub const fn new(provider: Address, shares: Shares, amount_a: Amount, amount_b: Amount) -> Self {
        Self {
            provider,
            shares,
            amount_a,
            amount_b,
        }
    }

    /// Account that burned the shares and received the tokens.
    #[must_use]
    pub const fn provider(&self) -> Address {
        self.provider
    }

    /// Shares burned.
    #[must_use]
    pub const fn shares(&self) -> Shares {
        self.shares
    }

    /// Token A paid out.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Token B paid out.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Both payouts as `(amount_a, amount_b)`.
    #[must_use]
    pub const fn amounts(&self) -> (Amount, Amount) {
        (self.amount_a, self.amount_b)
    }
}

impl fmt::Display for RemoveLiquidityReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} burned {} shares for {} A + {} B",
            self.provider, self.shares, self.amount_a, self.amount_b
        )
    }
}
