//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pair_amm::prelude::*;
//! ```

pub use crate::config::{PoolConfig, ProportionPolicy, DEFAULT_GENESIS_SHARES};
pub use crate::domain::{
    AddLiquidityReceipt, Address, Amount, Decimals, RemoveLiquidityReceipt, Role, Shares,
    Token,
};
pub use crate::error::{AmmError, Result};
pub use crate::ledger::TokenLedger;
pub use crate::math::CheckedArithmetic;
pub use crate::pool::{LiquidityEngine, PoolState, PoolStatus, SharedLiquidityEngine};
pub use crate::traits::{FungibleLedger, LiquidityPool};
