//! Thread-safe handle around a [`LiquidityEngine`].
//!
//! Each call takes the engine lock for the whole operation, so two
//! liquidity operations never interleave and readers only ever see
//! committed state.

use std::sync::{Arc, Mutex, MutexGuard};

use super::{LiquidityEngine, PoolState};
use crate::domain::{AddLiquidityReceipt, Address, Amount, RemoveLiquidityReceipt, Shares};
use crate::error::AmmError;
use crate::traits::{FungibleLedger, LiquidityPool};

/// A cloneable, lock-scoped handle to one engine.
///
/// # Example
///
/// ```rust
/// # use pair_amm::config::PoolConfig;
/// # use pair_amm::domain::{Address, Decimals, Token};
/// # use pair_amm::ledger::TokenLedger;
/// use pair_amm::pool::{LiquidityEngine, SharedLiquidityEngine};
/// # let owner = Address::repeat_byte(0xa0);
/// # let tok = |b| Token::new(Address::repeat_byte(b), Decimals::STANDARD);
/// # let config = PoolConfig::new(tok(1), tok(2), tok(3), Address::repeat_byte(0xaa)).expect("config");
/// # let engine = LiquidityEngine::new(
/// #     config,
/// #     TokenLedger::new(tok(1), "A", "A", owner),
/// #     TokenLedger::new(tok(2), "B", "B", owner),
/// #     TokenLedger::new(tok(3), "LP", "LP", owner),
/// # ).expect("engine");
///
/// let shared = SharedLiquidityEngine::new(engine);
/// let handle = shared.clone();
/// std::thread::spawn(move || handle.total_shares()).join().expect("thread").expect("lock");
/// ```
#[derive(Debug)]
pub struct SharedLiquidityEngine<L> {
    inner: Arc<Mutex<LiquidityEngine<L>>>,
}

impl<L> Clone for SharedLiquidityEngine<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: FungibleLedger + Clone> SharedLiquidityEngine<L> {
    /// Wraps `engine` for shared use.
    #[must_use]
    pub fn new(engine: LiquidityEngine<L>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, LiquidityEngine<L>>, AmmError> {
        self.inner.lock().map_err(|_| AmmError::LockPoisoned)
    }

    /// See [`LiquidityPool::add_liquidity`].
    ///
    /// # Errors
    ///
    /// Engine errors, or [`AmmError::LockPoisoned`].
    pub fn add_liquidity(
        &self,
        provider: &Address,
        token_a: &Address,
        token_b: &Address,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<AddLiquidityReceipt, AmmError> {
        self.lock()?
            .add_liquidity(provider, token_a, token_b, amount_a, amount_b)
    }

    /// See [`LiquidityPool::remove_liquidity`].
    ///
    /// # Errors
    ///
    /// Engine errors, or [`AmmError::LockPoisoned`].
    pub fn remove_liquidity(
        &self,
        provider: &Address,
        shares: Shares,
    ) -> Result<RemoveLiquidityReceipt, AmmError> {
        self.lock()?.remove_liquidity(provider, shares)
    }

    /// Committed `(reserve_a, reserve_b)`.
    ///
    /// # Errors
    ///
    /// [`AmmError::LockPoisoned`].
    pub fn reserves(&self) -> Result<(Amount, Amount), AmmError> {
        Ok(self.lock()?.reserves())
    }

    /// Committed share supply.
    ///
    /// # Errors
    ///
    /// [`AmmError::LockPoisoned`].
    pub fn total_shares(&self) -> Result<Shares, AmmError> {
        Ok(self.lock()?.total_shares())
    }

    /// Committed pool snapshot.
    ///
    /// # Errors
    ///
    /// [`AmmError::LockPoisoned`].
    pub fn state(&self) -> Result<PoolState, AmmError> {
        Ok(self.lock()?.state())
    }

    /// Runs `f` with exclusive access to the engine, e.g. to approve the
    /// pool on a token ledger and deposit under the same lock.
    ///
    /// # Errors
    ///
    /// [`AmmError::LockPoisoned`].
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut LiquidityEngine<L>) -> R) -> Result<R, AmmError> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }
}
