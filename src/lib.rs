//! # Pair AMM
//!
//! Liquidity accounting for a two-token pool: providers deposit both
//! tokens, receive fungible LP shares, and later burn those shares for a
//! proportional slice of the reserves.
//!
//! All quantities are raw integers in the token's smallest unit (18
//! decimals by default).  Products are computed in 256-bit width, and
//! every division rounds toward the pool, so the value behind one share
//! never decreases.
//!
//! # Quick Start
//!
//! ```rust
//! use pair_amm::prelude::*;
//!
//! let owner = Address::repeat_byte(0xa0);
//! let alice = Address::repeat_byte(0x01);
//! let pool = Address::repeat_byte(0xaa);
//! let tok = |b| Token::new(Address::repeat_byte(b), Decimals::STANDARD);
//! let (abc, def, lp) = (tok(0x11), tok(0x22), tok(0x33));
//!
//! // 1. Deploy the three ledgers and let the pool mint shares.
//! let mut ledger_a = TokenLedger::new(abc, "Token-ABC", "ABC", owner);
//! let mut ledger_b = TokenLedger::new(def, "Token-DEF", "DEF", owner);
//! let mut ledger_lp = TokenLedger::new(lp, "LP-TOKEN-ABC-DEF", "LP-ABC-DEF", owner);
//! ledger_a.mint(&owner, &alice, abc.units(150)).expect("mint");
//! ledger_b.mint(&owner, &alice, def.units(250)).expect("mint");
//! ledger_lp.grant_role(&owner, Role::Minter, &pool).expect("grant");
//!
//! // 2. Build the engine.
//! let config = PoolConfig::new(abc, def, lp, pool).expect("valid config");
//! let mut engine = LiquidityEngine::new(config, ledger_a, ledger_b, ledger_lp).expect("engine");
//!
//! // 3. Approve and deposit.
//! engine.ledger_mut(&abc.address()).expect("A").approve(&alice, &pool, abc.units(150)).expect("approve");
//! engine.ledger_mut(&def.address()).expect("B").approve(&alice, &pool, def.units(250)).expect("approve");
//! let added = engine
//!     .add_liquidity(&alice, &abc.address(), &def.address(), abc.units(150), def.units(250))
//!     .expect("deposit");
//! assert_eq!(lp.format(added.shares().to_amount()), "100");
//!
//! // 4. Redeem a quarter.
//! let removed = engine
//!     .remove_liquidity(&alice, Shares::from_amount(lp.units(25)))
//!     .expect("withdraw");
//! assert_eq!(abc.format(removed.amount_a()), "37.5");
//! assert_eq!(def.format(removed.amount_b()), "62.5");
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │ SharedLiquidityEngine│  Arc<Mutex<..>>, one lock per operation
//! └──────────┬───────────┘
//!            ▼
//! ┌──────────────────────┐
//! │   LiquidityEngine    │  staged add/remove, invariant checks, commit
//! └──────────┬───────────┘
//!            │ issuance formulas over PoolState
//!            ▼
//! ┌──────────────────────┐
//! │ FungibleLedger × 3   │  token A, token B, LP shares
//! └──────────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`Address`](domain::Address), [`Token`](domain::Token), receipts |
//! | [`traits`] | [`FungibleLedger`](traits::FungibleLedger) and [`LiquidityPool`](traits::LiquidityPool) |
//! | [`ledger`] | [`TokenLedger`](ledger::TokenLedger), an in-memory role-gated token ledger |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) and [`ProportionPolicy`](config::ProportionPolicy) |
//! | [`pool`]   | [`PoolState`](pool::PoolState), share formulas, [`LiquidityEngine`](pool::LiquidityEngine) |
//! | [`math`]   | Checked arithmetic and 256-bit `mul_div` |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events: `info` for committed operations,
//! `warn` for rejected ones, `debug` for ledger moves and intermediate
//! share computations.  Install any subscriber to see them.

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
