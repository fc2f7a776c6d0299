//! Capability traits the router depends on.
//!
//! The router is written against these contracts only: [`Pool`] and
//! [`PoolRegistry`] for liquidity venues, [`AssetLedger`] and
//! [`NativeCurrency`] for funds, and [`Venue`] for bundling them into one
//! atomic unit of work.  [`FromConfig`] is how registries build pools.
//!
//! The [`memory`](crate::memory) module provides in-memory implementations
//! of all of them.

mod asset_ledger;
mod from_config;
mod pool;
mod registry;
mod venue;

pub use asset_ledger::{AssetLedger, NativeCurrency};
pub use from_config::FromConfig;
pub use pool::Pool;
pub use registry::PoolRegistry;
pub use venue::Venue;
