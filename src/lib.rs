//! # Hydra Router
//!
//! Multi-hop swap router for constant-product pools: quote a path, swap
//! along it with slippage protection, and add or remove liquidity at the
//! pool's current ratio.
//!
//! The router never owns state beyond its configuration.  Pools, balances
//! and native currency live behind capability traits, so the same router
//! drives the in-memory venue shipped in [`memory`] or any host that
//! implements [`Venue`](traits::Venue).
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! hydra-router = "0.1"
//! ```
//!
//! ## Seed a pool and swap through it
//!
//! ```rust
//! use hydra_router::config::RouterConfig;
//! use hydra_router::domain::{AccountId, Amount, AssetId, FeeTier, LiquidityRequest, Path};
//! use hydra_router::memory::{InMemoryLedger, InMemoryRegistry, InMemoryVenue};
//! use hydra_router::router::{DexRouter, ExactInSwap};
//! use hydra_router::traits::{AssetLedger, Venue};
//!
//! let custody = AccountId::from_bytes([0xEE; 32]);
//! let alice = AccountId::from_bytes([0xA1; 32]);
//! let wnat = AssetId::from_bytes([0x09; 32]);
//! let usdc = AssetId::from_bytes([0x01; 32]);
//! let weth = AssetId::from_bytes([0x02; 32]);
//!
//! // 1. A router and an empty venue charging 0.30% per swap
//! let router = DexRouter::new(RouterConfig::new(custody, wnat));
//! let mut venue = InMemoryVenue::new(
//!     InMemoryRegistry::new(FeeTier::TIER_0_30_PERCENT),
//!     InMemoryLedger::new(wnat),
//! );
//!
//! // 2. Fund alice and let the router pull from her
//! let ledger = venue.ledger_mut();
//! for asset in [usdc, weth] {
//!     ledger.mint(asset, alice, Amount::new(5_000_000)).expect("mint");
//!     ledger.approve(asset, alice, custody, Amount::new(5_000_000)).expect("approve");
//! }
//!
//! // 3. First deposit creates the pool
//! let deposit = LiquidityRequest::new(usdc, weth, Amount::new(1_000_000), Amount::new(2_000_000));
//! router.add_liquidity(&mut venue, alice, &deposit).expect("deposit");
//!
//! // 4. Quote, then swap with the quote as the bound
//! let path = Path::direct(usdc, weth).expect("distinct");
//! let quoted = router
//!     .quote_amounts_out(venue.registry(), Amount::new(1_000), &path)
//!     .expect("quote");
//! assert_eq!(quoted.last(), Amount::new(1_992));
//!
//! let swap = ExactInSwap::new(path, Amount::new(1_000), quoted.last(), alice);
//! let outcome = router.swap_exact_in(&mut venue, alice, &swap).expect("swap");
//! assert_eq!(outcome.amount_out, Amount::new(1_992));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   DexRouter   │  validation, slippage bounds, native wrapping
//! └──────┬───────┘
//!        │ checkpoint / rollback
//!        ▼
//! ┌──────────────┐
//! │   Routing     │  QuoteEngine, PathRouter, LiquidityQuoter, CanonicalOrder
//! └──────┬───────┘
//!        │ Pool + PoolRegistry + AssetLedger traits
//!        ▼
//! ┌──────────────┐
//! │    Venue      │  InMemoryVenue, or a host implementation
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │    Domain     │  Amount, AssetId, Path, FeeTier, QuotedAmounts, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Path`](domain::Path), [`FeeTier`](domain::FeeTier), etc. |
//! | [`traits`] | Capability seams: [`Pool`](traits::Pool), [`PoolRegistry`](traits::PoolRegistry), [`AssetLedger`](traits::AssetLedger), [`Venue`](traits::Venue) |
//! | [`config`] | [`RouterConfig`](config::RouterConfig) and [`ConstantProductConfig`](config::ConstantProductConfig), TOML-loadable |
//! | [`routing`] | Quoting, hop execution and liquidity ratio math |
//! | [`router`] | [`DexRouter`](router::DexRouter) entrypoints |
//! | [`pools`]  | [`ConstantProductPool`](pools::ConstantProductPool) |
//! | [`memory`] | In-memory ledger, registry and venue |
//! | [`math`]   | Checked arithmetic and `mul_div` |
//! | [`error`]  | [`RouterError`](error::RouterError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod memory;
pub mod pools;
pub mod prelude;
pub mod router;
pub mod routing;
pub mod traits;
