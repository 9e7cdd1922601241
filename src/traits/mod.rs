//! Core abstractions at the engine's seams.
//!
//! [`FungibleLedger`] is what the engine needs from a token ledger;
//! [`LiquidityPool`] is what callers get from the engine.

mod fungible_ledger;
mod liquidity_pool;

pub use fungible_ledger::FungibleLedger;
pub use liquidity_pool::LiquidityPool;
