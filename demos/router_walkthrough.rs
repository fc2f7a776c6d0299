//! Router walkthrough.
//!
//! Seeds two pools, quotes and executes a two-hop swap in both directions,
//! swaps native currency in and out, and withdraws liquidity.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=hydra_router=debug cargo run --example router_walkthrough
//! ```

use hydra_router::config::RouterConfig;
use hydra_router::domain::{AccountId, Amount, AssetId, FeeTier, LiquidityRequest, Path};
use hydra_router::memory::{InMemoryLedger, InMemoryRegistry, InMemoryVenue};
use hydra_router::router::{DexRouter, ExactInSwap, ExactOutSwap, RemoveLiquidity};
use hydra_router::traits::{AssetLedger, NativeCurrency, Pool, PoolRegistry, Venue};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
router_account = "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee"
wrapped_native = "0x0909090909090909090909090909090909090909090909090909090909090909"
max_path_len = 4
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Hydra Router walkthrough ===\n");

    // ── 1. Router from TOML, empty venue at 0.30% ───────────────────────
    let config = RouterConfig::from_toml_str(CONFIG)?;
    let router = DexRouter::new(config);
    let custody = config.router_account();
    let wnat = config.wrapped_native();
    println!("Custody account:  {custody}");
    println!("Wrapped native:   {wnat}");
    println!("Max path length:  {}", config.max_path_len());

    let mut venue = InMemoryVenue::new(
        InMemoryRegistry::new(FeeTier::TIER_0_30_PERCENT),
        InMemoryLedger::new(wnat),
    );

    let usdc = AssetId::from_bytes([0x01; 32]);
    let weth = AssetId::from_bytes([0x02; 32]);
    let alice = AccountId::from_bytes([0xA1; 32]);
    let bob = AccountId::from_bytes([0xB0; 32]);

    // ── 2. Fund alice and authorize the router ──────────────────────────
    let ledger = venue.ledger_mut();
    for asset in [usdc, weth] {
        ledger.mint(asset, alice, Amount::new(10_000_000))?;
        ledger.approve(asset, alice, custody, Amount::new(10_000_000))?;
    }
    ledger.deposit_native(alice, Amount::new(5_000_000))?;

    // ── 3. Seed USDC/WETH and WETH/native ───────────────────────────────
    let usdc_weth = router.add_liquidity(
        &mut venue,
        alice,
        &LiquidityRequest::new(usdc, weth, Amount::new(1_000_000), Amount::new(2_000_000)),
    )?;
    let weth_nat = router.add_liquidity_native(
        &mut venue,
        alice,
        &LiquidityRequest::new(weth, wnat, Amount::new(2_000_000), Amount::new(4_000_000)),
    )?;
    println!("\nSeeded {} with {} shares", usdc_weth.pool, usdc_weth.liquidity);
    println!("Seeded {} with {} shares", weth_nat.pool, weth_nat.liquidity);

    // ── 4. Quote and swap USDC -> WETH -> native ────────────────────────
    let route = Path::new(vec![usdc, weth, wnat])?;
    let quoted = router.quote_amounts_out(venue.registry(), Amount::new(10_000), &route)?;
    println!("\nQuote along {route}: {:?}", quoted.as_slice());

    let swap = ExactInSwap::new(route.clone(), Amount::new(10_000), quoted.last(), bob);
    let outcome = router.swap_exact_in_for_native(&mut venue, alice, &swap)?;
    println!(
        "Sold {} USDC, bob received {} native (balance {})",
        outcome.amount_in,
        outcome.amount_out,
        venue.ledger().native_balance(bob)
    );

    // ── 5. Buy exactly 5 000 USDC with native, refunding the excess ─────
    let back = Path::new(vec![wnat, weth, usdc])?;
    let buy = ExactOutSwap::new(back, Amount::new(5_000), Amount::new(50_000), alice);
    let bought = router.swap_native_in_for_exact_out(&mut venue, alice, &buy)?;
    println!(
        "\nPaid {} native for {} USDC (attached {}, refunded {})",
        bought.amount_in,
        bought.amount_out,
        buy.max_in,
        buy.max_in.get() - bought.amount_in.get()
    );

    // ── 6. Withdraw half of the USDC/WETH position ──────────────────────
    let share = venue.registry().pool(usdc_weth.pool)?.share_asset();
    let half = Amount::new(usdc_weth.liquidity.get() / 2);
    venue.ledger_mut().approve(share, alice, custody, half)?;
    let paid = router.remove_liquidity(&mut venue, alice, &RemoveLiquidity::new(usdc, weth, half))?;
    println!(
        "\nBurned {half} shares for {} USDC and {} WETH",
        paid.amount_a, paid.amount_b
    );

    let pool = venue.registry().pool(usdc_weth.pool)?;
    let [r0, r1] = pool.reserves();
    println!("Remaining reserves: {r0} / {r1}");
    println!("\nDone.");
    Ok(())
}
