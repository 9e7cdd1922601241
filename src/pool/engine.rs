//! The liquidity engine: deposits, withdrawals and share accounting.
//!
//! [`LiquidityEngine`] owns the [`PoolState`] and the three ledgers it
//! drives (token A, token B, LP shares).  Every mutating operation runs
//! as a staged transaction:
//!
//! 1. compute the deltas from the current state (pure, see
//!    [`issuance`](super::issuance)),
//! 2. apply ledger moves and the state update to **copies**,
//! 3. re-check the pool invariants on the copies,
//! 4. commit by swapping the copies in.
//!
//! A failure at any step returns before the commit, so callers never
//! observe a half-applied operation.

use tracing::{debug, info, instrument, warn};

use super::issuance::{deposit_shares, pro_rata, withdrawal_amounts};
use super::{PoolState, PoolStatus};
use crate::config::PoolConfig;
use crate::domain::{AddLiquidityReceipt, Address, Amount, RemoveLiquidityReceipt, Shares};
use crate::error::AmmError;
use crate::traits::{FungibleLedger, LiquidityPool};

#[derive(Debug, Clone, PartialEq, Eq)]
struct PairLedgers<L> {
    token_a: L,
    token_b: L,
    shares: L,
}

impl<L: FungibleLedger> PairLedgers<L> {
    /// The pool account must hold at least its tracked reserves.
    fn cover(&self, pool: &Address, state: &PoolState) -> Result<(), AmmError> {
        if self.token_a.balance_of(pool) < state.reserve_a() {
            return Err(AmmError::InvariantViolation(
                "pool holds less token A than its reserve",
            ));
        }
        if self.token_b.balance_of(pool) < state.reserve_b() {
            return Err(AmmError::InvariantViolation(
                "pool holds less token B than its reserve",
            ));
        }
        Ok(())
    }
}

/// Accounting engine for a two-token pool with fungible LP shares.
///
/// Built from a validated [`PoolConfig`] and one ledger per token.  The
/// pool account named in the config custodies the reserves, acts as the
/// spender when pulling deposits, and must hold
/// [`Role::Minter`](crate::domain::Role::Minter) on the share ledger
/// before the first deposit.
///
/// Mutating operations take `&mut self`; for concurrent callers wrap the
/// engine in a [`SharedLiquidityEngine`](super::SharedLiquidityEngine).
///
/// # Example
///
/// ```rust
/// use pair_amm::config::PoolConfig;
/// use pair_amm::domain::{Address, Decimals, Role, Shares, Token};
/// use pair_amm::ledger::TokenLedger;
/// use pair_amm::pool::LiquidityEngine;
/// use pair_amm::traits::{FungibleLedger, LiquidityPool};
///
/// let owner = Address::repeat_byte(0xa0);
/// let alice = Address::repeat_byte(0x01);
/// let pool = Address::repeat_byte(0xaa);
/// let tok = |b| Token::new(Address::repeat_byte(b), Decimals::STANDARD);
/// let (abc, def, lp) = (tok(0x11), tok(0x22), tok(0x33));
///
/// let mut ledger_a = TokenLedger::new(abc, "Token-ABC", "ABC", owner);
/// let mut ledger_b = TokenLedger::new(def, "Token-DEF", "DEF", owner);
/// let mut ledger_lp = TokenLedger::new(lp, "LP-TOKEN-ABC-DEF", "LP-ABC-DEF", owner);
/// ledger_a.mint(&owner, &alice, abc.units(150)).expect("mint");
/// ledger_b.mint(&owner, &alice, def.units(250)).expect("mint");
/// ledger_lp.grant_role(&owner, Role::Minter, &pool).expect("grant");
///
/// let config = PoolConfig::new(abc, def, lp, pool).expect("config");
/// let mut engine = LiquidityEngine::new(config, ledger_a, ledger_b, ledger_lp).expect("engine");
///
/// engine.ledger_mut(&abc.address()).expect("known").approve(&alice, &pool, abc.units(150)).expect("approve");
/// engine.ledger_mut(&def.address()).expect("known").approve(&alice, &pool, def.units(250)).expect("approve");
///
/// let receipt = engine
///     .add_liquidity(&alice, &abc.address(), &def.address(), abc.units(150), def.units(250))
///     .expect("genesis deposit");
/// assert_eq!(receipt.shares(), Shares::new(100 * 10u128.pow(18)));
/// assert_eq!(engine.reserves(), (abc.units(150), def.units(250)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiquidityEngine<L> {
    config: PoolConfig,
    state: PoolState,
    ledgers: PairLedgers<L>,
}

impl<L: FungibleLedger> LiquidityEngine<L> {
    /// Creates an empty pool over the given ledgers.
    ///
    /// # Errors
    ///
    /// - Propagates [`PoolConfig::validate`] failures.
    /// - [`AmmError::InvalidConfiguration`] if a ledger manages a token
    ///   other than the one configured for its slot, or the share ledger
    ///   already has units in circulation.
    pub fn new(config: PoolConfig, token_a: L, token_b: L, shares: L) -> Result<Self, AmmError> {
        config.validate()?;
        if token_a.token() != config.token_a() {
            return Err(AmmError::InvalidConfiguration(
                "token A ledger manages a different token",
            ));
        }
        if token_b.token() != config.token_b() {
            return Err(AmmError::InvalidConfiguration(
                "token B ledger manages a different token",
            ));
        }
        if shares.token() != config.share_token() {
            return Err(AmmError::InvalidConfiguration(
                "share ledger manages a different token",
            ));
        }
        if !shares.total_supply().is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "share ledger must start with zero supply",
            ));
        }

        info!(
            pool = %config.pool_account(),
            token_a = %config.token_a().address(),
            token_b = %config.token_b().address(),
            share_token = %config.share_token().address(),
            genesis_shares = %config.genesis_shares(),
            policy = %config.proportion_policy(),
            "liquidity engine created"
        );

        Ok(Self {
            config,
            state: PoolState::EMPTY,
            ledgers: PairLedgers {
                token_a,
                token_b,
                shares,
            },
        })
    }

    /// The pool's configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Snapshot of reserves and share supply.
    #[must_use]
    pub const fn state(&self) -> PoolState {
        self.state
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn status(&self) -> PoolStatus {
        self.state.status()
    }

    /// Ledger for token A.
    #[must_use]
    pub const fn token_a_ledger(&self) -> &L {
        &self.ledgers.token_a
    }

    /// Ledger for token B.
    #[must_use]
    pub const fn token_b_ledger(&self) -> &L {
        &self.ledgers.token_b
    }

    /// Ledger for the LP share token.
    #[must_use]
    pub const fn share_ledger(&self) -> &L {
        &self.ledgers.shares
    }

    /// Looks up the ledger managing `token`.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidToken`] if `token` is none of the pool's tokens.
    pub fn ledger(&self, token: &Address) -> Result<&L, AmmError> {
        if *token == self.config.token_a().address() {
            Ok(&self.ledgers.token_a)
        } else if *token == self.config.token_b().address() {
            Ok(&self.ledgers.token_b)
        } else if *token == self.config.share_token().address() {
            Ok(&self.ledgers.shares)
        } else {
            Err(AmmError::InvalidToken("token is not managed by this pool"))
        }
    }

    /// Mutable access to the ledger managing `token`, for approvals and
    /// other holder-side actions.
    ///
    /// Changes made here bypass the engine.  Minting shares directly, for
    /// instance, is caught by [`LiquidityEngine::check_invariants`].
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidToken`] if `token` is none of the pool's tokens.
    pub fn ledger_mut(&mut self, token: &Address) -> Result<&mut L, AmmError> {
        if *token == self.config.token_a().address() {
            Ok(&mut self.ledgers.token_a)
        } else if *token == self.config.token_b().address() {
            Ok(&mut self.ledgers.token_b)
        } else if *token == self.config.share_token().address() {
            Ok(&mut self.ledgers.shares)
        } else {
            Err(AmmError::InvalidToken("token is not managed by this pool"))
        }
    }

    /// LP shares held by `account`.
    #[must_use]
    pub fn share_of(&self, account: &Address) -> Shares {
        Shares::from_amount(self.ledgers.shares.balance_of(account))
    }

    /// Amounts `account` would receive for redeeming all its shares now.
    ///
    /// # Errors
    ///
    /// [`AmmError::Overflow`] only if the share ledger was tampered with.
    pub fn position_value(&self, account: &Address) -> Result<(Amount, Amount), AmmError> {
        pro_rata(&self.state, self.share_of(account))
    }

    /// Shares a deposit of `amount_a` token A and `amount_b` token B
    /// would mint, without executing it.
    ///
    /// # Errors
    ///
    /// Same guards as [`LiquidityPool::add_liquidity`], minus the ledger
    /// checks.
    pub fn quote_add(&self, amount_a: Amount, amount_b: Amount) -> Result<Shares, AmmError> {
        let minted = deposit_shares(
            &self.state,
            amount_a,
            amount_b,
            self.config.genesis_shares(),
            self.config.proportion_policy(),
        )?;
        debug!(%amount_a, %amount_b, %minted, "quoted deposit");
        Ok(minted)
    }

    /// Amounts burning `shares` would pay out, without executing it.
    ///
    /// # Errors
    ///
    /// Same guards as [`LiquidityPool::remove_liquidity`], minus the
    /// holder balance check.
    pub fn quote_remove(&self, shares: Shares) -> Result<(Amount, Amount), AmmError> {
        withdrawal_amounts(&self.state, shares)
    }

    /// Verifies the pool against its ledgers.
    ///
    /// - Reserves and share supply are all zero or all positive.
    /// - The share ledger's supply equals the pool's share total.
    /// - The pool account holds at least each tracked reserve.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvariantViolation`] naming the broken rule.
    pub fn check_invariants(&self) -> Result<(), AmmError> {
        self.state.check_invariants()?;
        if self.ledgers.shares.total_supply() != self.state.total_shares().to_amount() {
            return Err(AmmError::InvariantViolation(
                "share supply differs from the pool's share total",
            ));
        }
        self.ledgers.cover(&self.config.pool_account(), &self.state)
    }

    /// Maps caller-supplied token order onto the configured `(A, B)`.
    fn orient(
        &self,
        token_a: &Address,
        token_b: &Address,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<(Amount, Amount), AmmError> {
        let a = self.config.token_a().address();
        let b = self.config.token_b().address();
        if *token_a == a && *token_b == b {
            Ok((amount_a, amount_b))
        } else if *token_a == b && *token_b == a {
            Ok((amount_b, amount_a))
        } else {
            Err(AmmError::InvalidToken("tokens do not match the pool pair"))
        }
    }
}

impl<L: FungibleLedger + Clone> LiquidityEngine<L> {
    /// Runs `op` against staged copies of the state and ledgers and
    /// commits them only if `op` and the post-checks succeed.
    fn transact<T>(
        &mut self,
        op: impl FnOnce(Address, &mut PoolState, &mut PairLedgers<L>) -> Result<T, AmmError>,
    ) -> Result<T, AmmError> {
        let pool = self.config.pool_account();
        let mut state = self.state;
        let mut ledgers = self.ledgers.clone();

        let out = op(pool, &mut state, &mut ledgers)?;
        state.check_invariants()?;
        ledgers.cover(&pool, &state)?;

        self.state = state;
        self.ledgers = ledgers;
        Ok(out)
    }

    fn execute_add(
        &mut self,
        provider: &Address,
        token_a: &Address,
        token_b: &Address,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<AddLiquidityReceipt, AmmError> {
        let (amount_a, amount_b) = self.orient(token_a, token_b, amount_a, amount_b)?;
        if *provider == self.config.pool_account() {
            return Err(AmmError::InvalidConfiguration(
                "the pool account cannot provide liquidity to itself",
            ));
        }

        let genesis = self.state.is_empty();
        let minted = self.quote_add(amount_a, amount_b)?;
        let provider = *provider;

        self.transact(|pool, state, ledgers| {
            ledgers
                .token_a
                .transfer_from(&pool, &provider, &pool, amount_a)?;
            ledgers
                .token_b
                .transfer_from(&pool, &provider, &pool, amount_b)?;
            ledgers.shares.mint(&pool, &provider, minted.to_amount())?;
            state.deposit(amount_a, amount_b, minted)?;
            Ok(AddLiquidityReceipt::new(
                provider, amount_a, amount_b, minted, genesis,
            ))
        })
    }

    fn execute_remove(
        &mut self,
        provider: &Address,
        shares: Shares,
    ) -> Result<RemoveLiquidityReceipt, AmmError> {
        if *provider == self.config.pool_account() {
            return Err(AmmError::InvalidConfiguration(
                "the pool account cannot redeem liquidity from itself",
            ));
        }
        let (out_a, out_b) = withdrawal_amounts(&self.state, shares)?;

        let held = self.share_of(provider);
        if shares > held {
            return Err(AmmError::InsufficientShares {
                available: held,
                requested: shares,
            });
        }

        let provider = *provider;
        self.transact(|pool, state, ledgers| {
            ledgers.shares.burn(&pool, &provider, shares.to_amount())?;
            state.withdraw(out_a, out_b, shares)?;
            ledgers.token_a.transfer(&pool, &provider, out_a)?;
            ledgers.token_b.transfer(&pool, &provider, out_b)?;
            Ok(RemoveLiquidityReceipt::new(provider, shares, out_a, out_b))
        })
    }
}

impl<L: FungibleLedger + Clone> LiquidityPool for LiquidityEngine<L> {
    #[instrument(level = "debug", skip(self), fields(pool = %self.config.pool_account()))]
    fn add_liquidity(
        &mut self,
        provider: &Address,
        token_a: &Address,
        token_b: &Address,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<AddLiquidityReceipt, AmmError> {
        self.execute_add(provider, token_a, token_b, amount_a, amount_b)
            .inspect(|receipt| {
                info!(
                    provider = %receipt.provider(),
                    amount_a = %receipt.amount_a(),
                    amount_b = %receipt.amount_b(),
                    shares = %receipt.shares(),
                    genesis = receipt.is_genesis(),
                    state = %self.state,
                    "liquidity added"
                );
            })
            .inspect_err(|err| warn!(%provider, %err, "add_liquidity rejected"))
    }

    #[instrument(level = "debug", skip(self), fields(pool = %self.config.pool_account()))]
    fn remove_liquidity(
        &mut self,
        provider: &Address,
        shares: Shares,
    ) -> Result<RemoveLiquidityReceipt, AmmError> {
        self.execute_remove(provider, shares)
            .inspect(|receipt| {
                info!(
                    provider = %receipt.provider(),
                    shares = %receipt.shares(),
                    amount_a = %receipt.amount_a(),
                    amount_b = %receipt.amount_b(),
                    status = %self.state.status(),
                    "liquidity removed"
                );
            })
            .inspect_err(|err| warn!(%provider, %err, "remove_liquidity rejected"))
    }

    fn reserves(&self) -> (Amount, Amount) {
        self.state.reserves()
    }

    fn total_shares(&self) -> Shares {
        self.state.total_shares()
    }
}
