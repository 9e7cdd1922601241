//! Liquidity lifecycle example.
//!
//! Deploys the ABC/DEF pair with its LP token, adds genesis liquidity,
//! adds a proportional follow-up deposit, shows a rejected off-ratio
//! deposit, and redeems shares until the pool is empty again.
//!
//! # Run
//!
//! ```bash
//! cargo run --example liquidity_lifecycle
//! RUST_LOG=pair_amm=debug cargo run --example liquidity_lifecycle
//! ```

use pair_amm::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Two-token liquidity pool ===\n");

    // ── 1. Accounts and tokens ──────────────────────────────────────────
    let owner = Address::repeat_byte(0xa0);
    let user1 = Address::repeat_byte(0x01);
    let user2 = Address::repeat_byte(0x02);
    let pool = Address::repeat_byte(0xaa);

    let abc = Token::new(Address::repeat_byte(0x11), Decimals::STANDARD);
    let def = Token::new(Address::repeat_byte(0x22), Decimals::STANDARD);
    let lp = Token::new(Address::repeat_byte(0x33), Decimals::STANDARD);

    // ── 2. Ledgers: fund users, let the pool mint LP shares ─────────────
    let mut ledger_a = TokenLedger::new(abc, "Token-ABC", "ABC", owner);
    let mut ledger_b = TokenLedger::new(def, "Token-DEF", "DEF", owner);
    let mut ledger_lp = TokenLedger::new(lp, "LP-TOKEN-ABC-DEF", "LP-ABC-DEF", owner);
    ledger_lp.grant_role(&owner, Role::Minter, &pool)?;
    for user in [user1, user2] {
        ledger_a.mint(&owner, &user, abc.parse("150")?)?;
        ledger_b.mint(&owner, &user, def.parse("250")?)?;
    }

    let config = PoolConfig::new(abc, def, lp, pool)?;
    let mut engine = LiquidityEngine::new(config, ledger_a, ledger_b, ledger_lp)?;
    println!("Pool account:  {pool}");
    println!("Status:        {}", engine.status());

    // ── 3. Genesis deposit: 150 ABC + 250 DEF ───────────────────────────
    engine.ledger_mut(&abc.address())?.approve(&user1, &pool, Amount::MAX)?;
    engine.ledger_mut(&def.address())?.approve(&user1, &pool, Amount::MAX)?;
    let genesis = engine.add_liquidity(
        &user1,
        &abc.address(),
        &def.address(),
        abc.parse("150")?,
        def.parse("250")?,
    )?;
    println!("\n--- Genesis deposit ---");
    println!("  Shares minted: {}", lp.format(genesis.shares().to_amount()));
    println!("  Pool state:    {}", engine.state());

    // ── 4. Proportional deposit: 15 ABC + 25 DEF ────────────────────────
    engine.ledger_mut(&abc.address())?.approve(&user2, &pool, abc.parse("30")?)?;
    engine.ledger_mut(&def.address())?.approve(&user2, &pool, def.parse("50")?)?;
    let quoted = engine.quote_add(abc.parse("15")?, def.parse("25")?)?;
    let added = engine.add_liquidity(
        &user2,
        &abc.address(),
        &def.address(),
        abc.parse("15")?,
        def.parse("25")?,
    )?;
    println!("\n--- Follow-up deposit ---");
    println!("  Quoted shares: {}", lp.format(quoted.to_amount()));
    println!("  Shares minted: {}", lp.format(added.shares().to_amount()));

    // ── 5. Off-ratio deposit is rejected atomically ─────────────────────
    let before = engine.state();
    match engine.add_liquidity(
        &user2,
        &abc.address(),
        &def.address(),
        abc.parse("15")?,
        def.parse("20")?,
    ) {
        Ok(receipt) => println!("\nUnexpectedly accepted: {receipt}"),
        Err(err) => println!("\nOff-ratio deposit rejected: {err}"),
    }
    assert_eq!(engine.state(), before);

    // ── 6. Positions ────────────────────────────────────────────────────
    println!("\n--- Positions ---");
    for (name, who) in [("user1", user1), ("user2", user2)] {
        let (a, b) = engine.position_value(&who)?;
        println!(
            "  {name}: {} shares, worth {} ABC + {} DEF",
            lp.format(engine.share_of(&who).to_amount()),
            abc.format(a),
            def.format(b)
        );
    }

    // ── 7. Withdrawals until the pool is empty ──────────────────────────
    println!("\n--- Withdrawals ---");
    for who in [user1, user2] {
        let held = engine.share_of(&who);
        let receipt = engine.remove_liquidity(&who, held)?;
        println!(
            "  {who} redeemed {} shares for {} ABC + {} DEF",
            lp.format(receipt.shares().to_amount()),
            abc.format(receipt.amount_a()),
            def.format(receipt.amount_b())
        );
    }
    engine.check_invariants()?;
    println!("\nStatus:        {}", engine.status());
    println!("Pool state:    {}", engine.state());

    Ok(())
}
