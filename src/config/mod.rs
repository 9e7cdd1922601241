//! Pool configuration.
//!
//! A [`PoolConfig`] is the complete, validated blueprint handed to
//! [`LiquidityEngine::new`](crate::pool::LiquidityEngine::new).  It never
//! changes after construction.

mod pool_config;

pub use pool_config::{PoolConfig, ProportionPolicy, DEFAULT_GENESIS_SHARES};
