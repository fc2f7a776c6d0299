//! The user-facing router.
//!
//! [`DexRouter`] is the only entrypoint callers need.  It validates
//! requests, quotes them with the [`routing`](crate::routing) components
//! and runs them against a [`Venue`](crate::traits::Venue) atomically.
//!
//! | Entrypoint | Input | Output |
//! |------------|-------|--------|
//! | [`swap_exact_in`](DexRouter::swap_exact_in) | exact, allowance | at least `min_out` |
//! | [`swap_exact_out`](DexRouter::swap_exact_out) | at most `max_in`, allowance | exact |
//! | [`swap_exact_native_in`](DexRouter::swap_exact_native_in) | exact, native | at least `min_out` |
//! | [`swap_native_in_for_exact_out`](DexRouter::swap_native_in_for_exact_out) | at most `max_in`, native, refunded | exact |
//! | [`swap_exact_in_for_native`](DexRouter::swap_exact_in_for_native) | exact, allowance | at least `min_out`, native |
//! | [`swap_in_for_exact_native`](DexRouter::swap_in_for_exact_native) | at most `max_in`, allowance | exact, native |
//! | [`add_liquidity`](DexRouter::add_liquidity) | ratio-optimal pair | pool shares |
//! | [`add_liquidity_native`](DexRouter::add_liquidity_native) | B as native, refunded | pool shares |
//! | [`remove_liquidity`](DexRouter::remove_liquidity) | pool shares | both assets |
//! | [`remove_liquidity_native`](DexRouter::remove_liquidity_native) | pool shares | A, and B as native |

mod dex_router;
mod liquidity;
mod params;

pub use dex_router::DexRouter;
pub use params::{AddLiquidityOutcome, ExactInSwap, ExactOutSwap, RemoveLiquidity, SwapOutcome};
