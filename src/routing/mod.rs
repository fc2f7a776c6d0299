//! The routing core.
//!
//! Four components, leaf-first:
//!
//! | Component | Role |
//! |-----------|------|
//! | [`CanonicalOrder`] | Fixes slot order for an asset pair |
//! | [`LiquidityQuoter`] | Ratio-respecting deposit amounts |
//! | [`QuoteEngine`] | Forward and inverse multi-hop quotes (read-only) |
//! | [`PathRouter`] | Hop-by-hop swap execution |
//!
//! None of them holds state between calls.  They reach pools and funds
//! only through the [`traits`](crate::traits) capabilities, and the
//! [`router`](crate::router) entrypoints compose them.

mod canonical;
mod liquidity_quoter;
mod path_router;
mod quote_engine;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;
#[cfg(test)]
pub(crate) mod test_support;

pub use canonical::CanonicalOrder;
pub use liquidity_quoter::LiquidityQuoter;
pub use path_router::PathRouter;
pub use quote_engine::QuoteEngine;
