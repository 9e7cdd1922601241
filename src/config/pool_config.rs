//! Immutable wiring and policy for a liquidity pool.

use core::fmt;

use crate::domain::{Address, Decimals, Shares, Token};
use crate::error::AmmError;

/// Shares minted by the first deposit into an empty pool: 100 whole
/// shares in 18-decimal units.
pub const DEFAULT_GENESIS_SHARES: Shares = Shares::new(100 * 1_000_000_000_000_000_000);

/// How the engine treats a follow-up deposit whose two amounts imply
/// different share counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProportionPolicy {
    /// Reject with [`AmmError::ProportionMismatch`] unless
    /// `total × Δa / Ra == total × Δb / Rb` (after truncation).
    #[default]
    Strict,
    /// Mint `min(total × Δa / Ra, total × Δb / Rb)` and keep the full
    /// deposit; the surplus accrues to every holder.
    Minimum,
}

impl fmt::Display for ProportionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Minimum => write!(f, "minimum"),
        }
    }
}

/// Configuration for a two-token liquidity pool.
///
/// Fixed at construction: the two pooled tokens, the LP share token, the
/// account that custodies reserves (and must hold
/// [`Role::Minter`](crate::domain::Role::Minter) on the share ledger),
/// the genesis share count and the deposit-ratio policy.
///
/// # Validation
///
/// - Token A, token B and the share token have distinct addresses.
/// - The pool account is not the zero address.
/// - The share token uses 18 decimals.
/// - Genesis shares are non-zero.
///
/// # Examples
///
/// ```
/// use pair_amm::config::{PoolConfig, ProportionPolicy, DEFAULT_GENESIS_SHARES};
/// use pair_amm::domain::{Address, Decimals, Token};
///
/// let tok = |b| Token::new(Address::repeat_byte(b), Decimals::STANDARD);
/// let cfg = PoolConfig::new(tok(0x11), tok(0x22), tok(0x33), Address::repeat_byte(0xaa))
///     .expect("valid config");
/// assert_eq!(cfg.genesis_shares(), DEFAULT_GENESIS_SHARES);
/// assert_eq!(cfg.proportion_policy(), ProportionPolicy::Strict);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    token_a: Token,
    token_b: Token,
    share_token: Token,
    pool_account: Address,
    genesis_shares: Shares,
    proportion_policy: ProportionPolicy,
}

impl PoolConfig {
    /// Creates a configuration with default genesis shares and the
    /// strict proportion policy.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if validation fails.
    pub fn new(
        token_a: Token,
        token_b: Token,
        share_token: Token,
        pool_account: Address,
    ) -> Result<Self, AmmError> {
        let config = Self {
            token_a,
            token_b,
            share_token,
            pool_account,
            genesis_shares: DEFAULT_GENESIS_SHARES,
            proportion_policy: ProportionPolicy::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the genesis share count.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `shares` is zero.
    pub fn with_genesis_shares(mut self, shares: Shares) -> Result<Self, AmmError> {
        self.genesis_shares = shares;
        self.validate()?;
        Ok(self)
    }

    /// Replaces the deposit-ratio policy.
    #[must_use]
    pub fn with_proportion_policy(mut self, policy: ProportionPolicy) -> Self {
        self.proportion_policy = policy;
        self
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] describing the first
    /// violated rule.
    pub fn validate(&self) -> Result<(), AmmError> {
        let a = self.token_a.address();
        let b = self.token_b.address();
        let s = self.share_token.address();
        if a == b {
            return Err(AmmError::InvalidConfiguration(
                "token A and token B must be distinct",
            ));
        }
        if s == a || s == b {
            return Err(AmmError::InvalidConfiguration(
                "share token must differ from the pooled tokens",
            ));
        }
        if self.pool_account.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "pool account must not be the zero address",
            ));
        }
        if self.share_token.decimals() != Decimals::STANDARD {
            return Err(AmmError::InvalidConfiguration(
                "share token must use 18 decimals",
            ));
        }
        if self.genesis_shares.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "genesis shares must be non-zero",
            ));
        }
        Ok(())
    }

    /// Pooled token A.
    #[must_use]
    pub const fn token_a(&self) -> Token {
        self.token_a
    }

    /// Pooled token B.
    #[must_use]
    pub const fn token_b(&self) -> Token {
        self.token_b
    }

    /// LP share token.
    #[must_use]
    pub const fn share_token(&self) -> Token {
        self.share_token
    }

    /// Account holding the reserves and acting as spender and minter.
    #[must_use]
    pub const fn pool_account(&self) -> Address {
        self.pool_account
    }

    /// Shares minted by a genesis deposit.
    #[must_use]
    pub const fn genesis_shares(&self) -> Shares {
        self.genesis_shares
    }

    /// Deposit-ratio policy for follow-up deposits.
    #[must_use]
    pub const fn proportion_policy(&self) -> ProportionPolicy {
        self.proportion_policy
    }
}
