//! The liquidity pool: state, share formulas and the engine.
//!
//! | Item | Role |
//! |------|------|
//! | [`PoolState`] | reserves and share supply, with the emptiness invariant |
//! | [`issuance`] | pure deposit/withdrawal formulas |
//! | [`LiquidityEngine`] | staged, all-or-nothing add/remove against the ledgers |
//! | [`SharedLiquidityEngine`] | lock-scoped handle for concurrent callers |

mod engine;
pub mod issuance;
mod shared;
mod state;

#[cfg(test)]
mod proptest_properties;

pub use engine::LiquidityEngine;
pub use shared::SharedLiquidityEngine;
pub use state::{PoolState, PoolStatus};
