//! Property-based tests for the routing layer.
//!
//! Covers six properties:
//!
//! 1. **Canonical round-trip**: `decanonicalize(canonicalize(x, y)) == (x, y)`.
//! 2. **Liquidity bounds**: optimal amounts never exceed what was desired.
//! 3. **Inverse never undershoots**: quoting forward from `amounts_in(out)[0]`
//!    yields at least `out`.
//! 4. **Zero propagation**: once a hop quotes zero, every later hop does.
//! 5. **Quote matches execution**: executing a path of distinct pools pays
//!    exactly the last forward quote.
//! 6. **Revisited pools**: on a path crossing one pool twice, execution
//!    pays at most the quote and the router still honours the caller's
//!    bound or rolls back.

use proptest::prelude::*;

use super::{CanonicalOrder, LiquidityQuoter, PathRouter, QuoteEngine};
use crate::config::RouterConfig;
use crate::domain::{AccountId, Amount, AssetId, FeeTier, LiquidityRequest, Path, Referral};
use crate::error::RouterError;
use crate::math::CheckedArithmetic;
use crate::memory::{InMemoryLedger, InMemoryRegistry, InMemoryVenue};
use crate::router::{DexRouter, ExactInSwap, ExactOutSwap};
use crate::traits::{AssetLedger, Pool, PoolRegistry, Venue};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const CUSTODY: AccountId = AccountId::from_bytes([0xEE; 32]);
const LP: AccountId = AccountId::from_bytes([0x1D; 32]);

fn asset(b: u8) -> AssetId {
    AssetId::from_bytes([b; 32])
}

/// Chain `1 -> 2 -> ...` with one constant-product pool per hop, seeded with
/// `reserves[i]` as (reserve of asset i+1, reserve of asset i+2).
fn seeded_chain(fee: FeeTier, reserves: &[(u128, u128)]) -> (InMemoryRegistry, InMemoryLedger, Path) {
    let mut registry = InMemoryRegistry::new(fee);
    let mut ledger = InMemoryLedger::new(asset(0xFF));
    let mut assets = vec![asset(1)];

    for (i, &(rx, ry)) in reserves.iter().enumerate() {
        let Ok(hop) = u8::try_from(i) else {
            panic!("chain too long");
        };
        let (x, y) = (asset(hop + 1), asset(hop + 2));
        assets.push(y);

        let Ok(id) = registry.create_pool(x, y) else {
            panic!("create pool");
        };
        let Ok(pool) = registry.pool_mut(id) else {
            panic!("pool exists");
        };
        let Ok(order) = CanonicalOrder::new(x, y) else {
            panic!("distinct assets");
        };
        for (a, amount) in [(x, rx), (y, ry)] {
            let Ok(()) = ledger.mint(a, LP, Amount::new(amount)) else {
                panic!("mint");
            };
            let Ok(()) = ledger.approve(a, LP, pool.account(), Amount::new(amount)) else {
                panic!("approve");
            };
        }
        let Ok(_) = pool.provide_liquidity(
            &mut ledger,
            LP,
            order.canonicalize(Amount::new(rx), Amount::new(ry)),
            [Amount::ZERO; 2],
        ) else {
            panic!("seed deposit");
        };
    }

    let Ok(path) = Path::new(assets) else {
        panic!("valid path");
    };
    (registry, ledger, path)
}

fn fee_strategy() -> impl Strategy<Value = FeeTier> {
    prop_oneof![
        Just(FeeTier::ZERO),
        Just(FeeTier::TIER_0_05_PERCENT),
        Just(FeeTier::TIER_0_30_PERCENT),
        Just(FeeTier::TIER_1_00_PERCENT),
    ]
}

fn reserves_strategy() -> impl Strategy<Value = Vec<(u128, u128)>> {
    prop::collection::vec((1_000u128..1_000_000_000, 1_000u128..1_000_000_000), 1..=3)
}

// ---------------------------------------------------------------------------
// Pure helpers
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn canonical_round_trip(x in 0u8..=255, y in 0u8..=255, vx in any::<u64>(), vy in any::<u64>()) {
        prop_assume!(x != y);
        let Ok(order) = CanonicalOrder::new(asset(x), asset(y)) else {
            panic!("distinct assets");
        };
        prop_assert!(order.first() < order.second());
        prop_assert_eq!(order.decanonicalize(order.canonicalize(vx, vy)), (vx, vy));
    }

    #[test]
    fn optimal_amounts_stay_within_desired(
        reserve_a in 1u128..1_000_000_000_000,
        reserve_b in 1u128..1_000_000_000_000,
        desired_a in 1u128..1_000_000_000_000,
        desired_b in 1u128..1_000_000_000_000,
    ) {
        let request = LiquidityRequest::new(
            asset(1),
            asset(2),
            Amount::new(desired_a),
            Amount::new(desired_b),
        );
        let Ok(amounts) =
            LiquidityQuoter::optimal_amounts(Amount::new(reserve_a), Amount::new(reserve_b), &request)
        else {
            panic!("zero minimums always accept");
        };
        prop_assert!(amounts.amount_a <= request.amount_a_desired);
        prop_assert!(amounts.amount_b <= request.amount_b_desired);
        // one side is always taken in full
        prop_assert!(
            amounts.amount_a == request.amount_a_desired
                || amounts.amount_b == request.amount_b_desired
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn optimal_amounts_meet_minimums_or_name_the_short_side(
        reserve_a in 1u128..1_000_000_000_000,
        reserve_b in 1u128..1_000_000_000_000,
        desired_a in 1u128..1_000_000_000_000,
        desired_b in 1u128..1_000_000_000_000,
        min_a_pct in 0u128..=100,
        min_b_pct in 0u128..=100,
    ) {
        let request = LiquidityRequest::new(
            asset(1),
            asset(2),
            Amount::new(desired_a),
            Amount::new(desired_b),
        )
        .with_minimums(
            Amount::new(desired_a * min_a_pct / 100),
            Amount::new(desired_b * min_b_pct / 100),
        );
        match LiquidityQuoter::optimal_amounts(Amount::new(reserve_a), Amount::new(reserve_b), &request) {
            Ok(amounts) => {
                prop_assert!(amounts.amount_a >= request.amount_a_min);
                prop_assert!(amounts.amount_b >= request.amount_b_min);
                prop_assert!(amounts.amount_a <= request.amount_a_desired);
                prop_assert!(amounts.amount_b <= request.amount_b_desired);
            }
            Err(RouterError::InsufficientAAmount { optimal, minimum }) => {
                prop_assert_eq!(minimum, request.amount_a_min);
                prop_assert!(optimal < minimum);
            }
            Err(RouterError::InsufficientBAmount { optimal, minimum }) => {
                prop_assert_eq!(minimum, request.amount_b_min);
                prop_assert!(optimal < minimum);
            }
            Err(other) => panic!("unexpected error {other}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Multi-hop quoting and execution
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn inverse_quote_never_undershoots(
        fee in fee_strategy(),
        reserves in reserves_strategy(),
        out in 1u128..10_000,
    ) {
        let (registry, _, path) = seeded_chain(fee, &reserves);
        let engine = QuoteEngine::new(&registry);
        // fails when an intermediate hop would need more than its reserve
        let Ok(inverse) = engine.amounts_in(Amount::new(out), &path) else {
            return Ok(());
        };
        let Ok(forward) = engine.amounts_out(inverse.first(), &path) else {
            panic!("forward quote of a feasible input");
        };
        prop_assert!(forward.last() >= Amount::new(out));
    }

    #[test]
    fn zero_hop_propagates(
        fee in fee_strategy(),
        reserves in reserves_strategy(),
        amount_in in 0u128..50,
    ) {
        let (registry, _, path) = seeded_chain(fee, &reserves);
        let Ok(quoted) = QuoteEngine::new(&registry).amounts_out(Amount::new(amount_in), &path) else {
            panic!("forward quote");
        };
        if let Some(first_zero) = quoted.as_slice().iter().position(|a| a.is_zero()) {
            prop_assert!(quoted.as_slice()[first_zero..].iter().all(|a| a.is_zero()));
            prop_assert!(quoted.has_zero_hop());
        }
    }

    #[test]
    fn execution_pays_forward_quote(
        fee in fee_strategy(),
        reserves in reserves_strategy(),
        amount_in in 1u128..1_000_000,
    ) {
        let (mut registry, mut ledger, path) = seeded_chain(fee, &reserves);
        let Ok(quoted) = QuoteEngine::new(&registry).amounts_out(Amount::new(amount_in), &path) else {
            panic!("forward quote");
        };
        let Ok(()) = ledger.mint(path.first(), CUSTODY, Amount::new(amount_in)) else {
            panic!("fund custody");
        };
        let recipient = AccountId::from_bytes([0xB0; 32]);
        let Ok(paid) = PathRouter::new(CUSTODY).execute(
            &mut registry,
            &mut ledger,
            &path,
            Amount::new(amount_in),
            recipient,
            Referral::NONE,
        ) else {
            panic!("execute");
        };
        prop_assert_eq!(paid, quoted.last());
        prop_assert_eq!(ledger.balance_of(path.last(), recipient), quoted.last());
    }
}

// ---------------------------------------------------------------------------
// Paths that revisit a pool
// ---------------------------------------------------------------------------

const TRADER: AccountId = AccountId::from_bytes([0x7A; 32]);

/// Triangle 1/2, 2/3, 3/1 seeded through the router, with `TRADER` funded
/// in asset 1 and the route `1 -> 2 -> 3 -> 1 -> 2` crossing pool 1/2
/// twice in the same direction.
fn triangle(fee: FeeTier, reserves: [(u128, u128); 3]) -> (DexRouter, InMemoryVenue, Path) {
    let router = DexRouter::new(RouterConfig::new(CUSTODY, asset(0xFF)));
    let mut venue = InMemoryVenue::new(InMemoryRegistry::new(fee), InMemoryLedger::new(asset(0xFF)));
    let ledger = venue.ledger_mut();
    for (who, amount) in [(LP, u128::from(u64::MAX)), (TRADER, 1_000_000_000_000)] {
        for a in [1, 2, 3] {
            let Ok(()) = ledger.mint(asset(a), who, Amount::new(amount)) else {
                panic!("mint");
            };
            let Ok(()) = ledger.approve(asset(a), who, CUSTODY, Amount::new(amount)) else {
                panic!("approve");
            };
        }
    }
    for ((x, y), (rx, ry)) in [(1, 2), (2, 3), (3, 1)].into_iter().zip(reserves) {
        let request = LiquidityRequest::new(asset(x), asset(y), Amount::new(rx), Amount::new(ry));
        let Ok(_) = router.add_liquidity(&mut venue, LP, &request) else {
            panic!("seed pool");
        };
    }
    (router, venue, path(&[1, 2, 3, 1, 2]))
}

fn path(bytes: &[u8]) -> Path {
    let Ok(p) = Path::new(bytes.iter().map(|b| asset(*b)).collect()) else {
        panic!("valid path");
    };
    p
}

fn triangle_reserves() -> impl Strategy<Value = [(u128, u128); 3]> {
    let side = || (100_000u128..10_000_000, 100_000u128..10_000_000);
    (side(), side(), side()).prop_map(|(a, b, c)| [a, b, c])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn revisiting_path_never_beats_forward_quote(
        fee in fee_strategy(),
        reserves in triangle_reserves(),
        amount_in in 1u128..1_000_000,
    ) {
        let (_, mut venue, route) = triangle(fee, reserves);
        let (registry, ledger) = venue.split_mut();
        let Ok(quoted) = QuoteEngine::new(&*registry).amounts_out(Amount::new(amount_in), &route) else {
            panic!("forward quote");
        };
        let Ok(()) = ledger.mint(route.first(), CUSTODY, Amount::new(amount_in)) else {
            panic!("fund custody");
        };
        let Ok(paid) = PathRouter::new(CUSTODY).execute(
            registry,
            ledger,
            &route,
            Amount::new(amount_in),
            TRADER,
            Referral::NONE,
        ) else {
            panic!("execute");
        };
        prop_assert!(paid <= quoted.last());
    }

    #[test]
    fn exact_in_over_revisiting_path_honours_min_out(
        fee in fee_strategy(),
        reserves in triangle_reserves(),
        amount_in in 1u128..1_000_000,
        min_pct in 0u128..=100,
    ) {
        let (router, mut venue, route) = triangle(fee, reserves);
        let Ok(quoted) = router.quote_amounts_out(venue.registry(), Amount::new(amount_in), &route) else {
            panic!("forward quote");
        };
        let min_out = Amount::new(quoted.last().get() * min_pct / 100);
        let before = venue.clone();
        let held = venue.ledger().balance_of(route.last(), TRADER);

        let swap = ExactInSwap::new(route.clone(), Amount::new(amount_in), min_out, TRADER);
        match router.swap_exact_in(&mut venue, TRADER, &swap) {
            Ok(outcome) => {
                prop_assert!(outcome.amount_out >= min_out);
                let Ok(received) = venue.ledger().balance_of(route.last(), TRADER).safe_sub(&held) else {
                    panic!("balance only grows");
                };
                prop_assert_eq!(received, outcome.amount_out);
            }
            Err(RouterError::InsufficientOutputAmount { quoted: realized, minimum }) => {
                prop_assert_eq!(minimum, min_out);
                prop_assert!(realized < minimum);
                prop_assert_eq!(&venue, &before);
            }
            Err(other) => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn exact_out_over_revisiting_path_delivers_or_rolls_back(
        fee in fee_strategy(),
        reserves in triangle_reserves(),
        amount_out in 1u128..50_000,
    ) {
        let (router, mut venue, route) = triangle(fee, reserves);
        let before = venue.clone();
        let swap = ExactOutSwap::new(route, Amount::new(amount_out), Amount::new(1_000_000_000_000), TRADER);
        match router.swap_exact_out(&mut venue, TRADER, &swap) {
            Ok(outcome) => prop_assert!(outcome.amount_out >= Amount::new(amount_out)),
            Err(_) => prop_assert_eq!(&venue, &before),
        }
    }
}
