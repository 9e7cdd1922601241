//! Property-based tests for the liquidity engine.
//!
//! 1. **Conservation and atomicity**: random operation sequences never
//!    create or destroy tokens, and failed operations change nothing.
//! 2. **Share price monotonicity**: reserves per share never decrease.
//! 3. **Proportional withdrawal**: payouts are the floor of the pro-rata
//!    slice of each reserve.
//! 4. **Non-dilution**: a deposit in the current ratio is accepted under
//!    the strict policy and mints `total × h / g` shares.
//! 5. **Round trip**: deposit then withdraw never returns more than was
//!    put in.
//! 6. **Sole provider round trip**: a lone provider who redeems every
//!    share gets back exactly what they deposited.

use primitive_types::U256;
use proptest::prelude::*;

use super::fixtures::{self, Fixture, WAD};
use super::{LiquidityEngine, PoolState};
use crate::config::ProportionPolicy;
use crate::domain::{Address, Amount, Shares};
use crate::ledger::TokenLedger;
use crate::traits::{FungibleLedger, LiquidityPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const PROVIDERS: u8 = 3;
const FUNDING: u64 = 1_000_000;

fn provider(index: u8) -> Address {
    Address::repeat_byte(0x50 + index % PROVIDERS)
}

/// Engine with `PROVIDERS` accounts holding a million whole tokens each
/// and unlimited approvals to the pool.
fn funded_engine(policy: ProportionPolicy) -> Fixture {
    let mut fixture = fixtures::fixture_with_policy(policy);
    for i in 0..PROVIDERS {
        let p = provider(i);
        fixtures::fund(&mut fixture.engine, &p, FUNDING, FUNDING);
        fixtures::approve(&mut fixture.engine, &p, Amount::MAX, Amount::MAX);
    }
    fixture
}

fn add(f: &mut Fixture, who: &Address, a: u128, b: u128) -> Result<Shares, crate::error::AmmError> {
    f.engine
        .add_liquidity(
            who,
            &f.abc.address(),
            &f.def.address(),
            Amount::new(a),
            Amount::new(b),
        )
        .map(|r| r.shares())
}

/// Sum of every holder's balance on `ledger`.
fn circulating(ledger: &TokenLedger) -> u128 {
    ledger.holders().map(|(_, amount)| amount.get()).sum()
}

fn snapshot(engine: &LiquidityEngine<TokenLedger>) -> (u128, u128, u128) {
    (
        circulating(engine.token_a_ledger()),
        circulating(engine.token_b_ledger()),
        circulating(engine.share_ledger()),
    )
}

#[derive(Debug, Clone)]
enum Op {
    Add { who: u8, a: u128, b: u128 },
    AddInRatio { who: u8, per_mille: u128 },
    Remove { who: u8, per_mille: u128 },
}

/// Raw amounts from dust up to 10 000 whole tokens.
fn amount_strategy() -> impl Strategy<Value = u128> {
    prop_oneof![1u128..=1_000u128, 1u128..=10_000 * WAD]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..PROVIDERS, amount_strategy(), amount_strategy())
            .prop_map(|(who, a, b)| Op::Add { who, a, b }),
        (0..PROVIDERS, 1u128..=1_000u128).prop_map(|(who, per_mille)| Op::AddInRatio { who, per_mille }),
        (0..PROVIDERS, 1u128..=1_000u128).prop_map(|(who, per_mille)| Op::Remove { who, per_mille }),
    ]
}

fn apply(f: &mut Fixture, op: &Op) -> bool {
    match *op {
        Op::Add { who, a, b } => add(f, &provider(who), a, b).is_ok(),
        Op::AddInRatio { who, per_mille } => {
            let (ra, rb) = f.engine.reserves();
            let (a, b) = if f.engine.state().is_empty() {
                (per_mille * WAD, per_mille * WAD)
            } else {
                (ra.get() * per_mille / 1_000, rb.get() * per_mille / 1_000)
            };
            add(f, &provider(who), a, b).is_ok()
        }
        Op::Remove { who, per_mille } => {
            let p = provider(who);
            let held = f.engine.share_of(&p).get();
            let burn = Shares::new(held * per_mille / 1_000);
            f.engine.remove_liquidity(&p, burn).is_ok()
        }
    }
}

/// `num_a / den_a <= num_b / den_b`, exact.
fn ratio_le(num_a: u128, den_a: u128, num_b: u128, den_b: u128) -> bool {
    U256::from(num_a) * U256::from(den_b) <= U256::from(num_b) * U256::from(den_a)
}

// ---------------------------------------------------------------------------
// Property 1: Conservation and atomicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_conservation_and_atomicity(
        policy in prop_oneof![Just(ProportionPolicy::Strict), Just(ProportionPolicy::Minimum)],
        ops in prop::collection::vec(op_strategy(), 1..24),
    ) {
        let mut f = funded_engine(policy);
        let supply = (
            f.engine.token_a_ledger().total_supply().get(),
            f.engine.token_b_ledger().total_supply().get(),
        );

        for op in &ops {
            let before = f.engine.clone();
            let applied = apply(&mut f, op);
            if !applied {
                prop_assert_eq!(&f.engine, &before, "failed {:?} mutated the engine", op);
            }

            prop_assert!(f.engine.check_invariants().is_ok(), "invariants broken after {:?}", op);
            let (a, b, s) = snapshot(&f.engine);
            prop_assert_eq!((a, b), supply);
            prop_assert_eq!(s, f.engine.total_shares().get());
            let pool = fixtures::pool_account();
            prop_assert_eq!(
                (
                    f.engine.token_a_ledger().balance_of(&pool),
                    f.engine.token_b_ledger().balance_of(&pool),
                ),
                f.engine.reserves()
            );
            prop_assert_eq!(
                f.engine.share_ledger().total_supply(),
                f.engine.total_shares().to_amount()
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Share price monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_share_price_never_decreases(
        ops in prop::collection::vec(op_strategy(), 1..24),
    ) {
        let mut f = funded_engine(ProportionPolicy::Minimum);
        for op in &ops {
            let before = f.engine.state();
            apply(&mut f, op);
            let after = f.engine.state();
            if before.is_empty() || after.is_empty() {
                continue;
            }
            let (t0, t1) = (before.total_shares().get(), after.total_shares().get());
            prop_assert!(ratio_le(before.reserve_a().get(), t0, after.reserve_a().get(), t1));
            prop_assert!(ratio_le(before.reserve_b().get(), t0, after.reserve_b().get(), t1));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Proportional withdrawal
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_withdrawal_is_pro_rata(
        a in 1u128..=10_000 * WAD,
        b in 1u128..=10_000 * WAD,
        per_mille in 1u128..=1_000u128,
    ) {
        let mut f = funded_engine(ProportionPolicy::Strict);
        let who = provider(0);
        let Ok(minted) = add(&mut f, &who, a, b) else {
            return Ok(());
        };
        let burn = minted.get() * per_mille / 1_000;
        let total = f.engine.total_shares().get();

        let Ok(receipt) = f.engine.remove_liquidity(&who, Shares::new(burn)) else {
            return Ok(());
        };
        let expect = |reserve: u128| {
            let wide = U256::from(reserve) * U256::from(burn) / U256::from(total);
            wide.as_u128()
        };
        prop_assert_eq!(receipt.amount_a().get(), expect(a));
        prop_assert_eq!(receipt.amount_b().get(), expect(b));
        prop_assert!(f.engine.check_invariants().is_ok());
    }
}

// ---------------------------------------------------------------------------
// Property 4: Non-dilution
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_in_ratio_deposit_accepted(
        x in 1u128..=1_000u128,
        y in 1u128..=1_000u128,
        g in 1u128..=1_000u128,
        h in 1u128..=1_000u128,
    ) {
        let mut f = funded_engine(ProportionPolicy::Strict);
        let unit = WAD / 1_000;
        let genesis = add(&mut f, &provider(0), x * g * unit, y * g * unit);
        prop_assert!(genesis.is_ok(), "genesis deposit rejected: {:?}", genesis);

        let minted = add(&mut f, &provider(1), x * h * unit, y * h * unit);
        prop_assert_eq!(
            minted,
            Ok(Shares::new(genesis.map_or(0, |s| s.get()) * h / g))
        );
    }
}

// ---------------------------------------------------------------------------
// Property 5: Round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_never_profits(
        seed_a in 1u128..=10_000 * WAD,
        seed_b in 1u128..=10_000 * WAD,
        per_mille in 1u128..=1_000u128,
        skew in 1_000u128..=1_500u128,
    ) {
        let mut f = funded_engine(ProportionPolicy::Minimum);
        if add(&mut f, &provider(0), seed_a, seed_b).is_err() {
            return Ok(());
        }

        let who = provider(1);
        let (ra, rb) = f.engine.reserves();
        let a = ra.get() * per_mille / 1_000;
        let b = rb.get() * per_mille / 1_000 * skew / 1_000;
        let Ok(minted) = add(&mut f, &who, a, b) else {
            return Ok(());
        };
        let Ok(receipt) = f.engine.remove_liquidity(&who, minted) else {
            return Ok(());
        };
        prop_assert!(receipt.amount_a().get() <= a);
        prop_assert!(receipt.amount_b().get() <= b);
        prop_assert!(f.engine.check_invariants().is_ok());
    }
}

// ---------------------------------------------------------------------------
// Property 6: Sole provider round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_sole_provider_recovers_deposit(
        policy in prop_oneof![Just(ProportionPolicy::Strict), Just(ProportionPolicy::Minimum)],
        a in 1u128..=u128::from(FUNDING) * WAD,
        b in 1u128..=u128::from(FUNDING) * WAD,
    ) {
        let mut f = funded_engine(policy);
        let who = provider(0);
        let minted = add(&mut f, &who, a, b);
        prop_assert!(minted.is_ok(), "genesis deposit rejected: {:?}", minted);
        let minted = minted.map_or(Shares::ZERO, |s| s);

        let receipt = f.engine.remove_liquidity(&who, minted);
        prop_assert!(receipt.is_ok(), "full withdrawal rejected: {:?}", receipt);
        let receipt = receipt.map(|r| r.amounts());
        prop_assert_eq!(receipt, Ok((Amount::new(a), Amount::new(b))));

        prop_assert_eq!(f.engine.state(), PoolState::EMPTY);
        prop_assert_eq!(
            (
                f.engine.token_a_ledger().balance_of(&who),
                f.engine.token_b_ledger().balance_of(&who),
            ),
            (f.abc.units(FUNDING), f.def.units(FUNDING))
        );
        prop_assert!(f.engine.share_of(&who).is_zero());
    }
}
