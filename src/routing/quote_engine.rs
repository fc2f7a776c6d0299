//! Non-mutating multi-hop price quotes.
//!
//! The quote engine is the read-only mirror of
//! [`PathRouter`](super::PathRouter).  It walks a [`Path`] asking each
//! hop's pool for a quote and never moves funds.
//!
//! | Direction | Seed | Per hop |
//! |-----------|------|---------|
//! | forward ([`QuoteEngine::amounts_out`]) | `amounts[0] = amount_in` | `amounts[k+1] = projected_return(amounts[k])` |
//! | inverse ([`QuoteEngine::amounts_in`])  | `amounts[last] = amount_out` | `amounts[k] = required_input(amounts[k+1])` |
//!
//! Quotes reflect pool state at call time only.  Nothing guarantees that a
//! later execution sees the same prices; the caller's slippage bound is the
//! only protection against movement in between.

use tracing::debug;

use crate::domain::{Amount, AssetId, Path, QuotedAmounts};
use crate::error::RouterError;
use crate::traits::{Pool, PoolRegistry};

/// Quotes paths against a registry without mutating it.
///
/// # Examples
///
/// See the `router_walkthrough` example for an end-to-end quote against
/// in-memory pools.
#[derive(Debug, Clone, Copy)]
pub struct QuoteEngine<'a, R: ?Sized> {
    registry: &'a R,
}

impl<'a, R> QuoteEngine<'a, R>
where
    R: PoolRegistry + ?Sized,
{
    /// Creates an engine reading from `registry`.
    #[must_use]
    pub const fn new(registry: &'a R) -> Self {
        Self { registry }
    }

    /// Forward quote of a single hop.
    ///
    /// # Errors
    ///
    /// - [`RouterError::PoolNotFound`] if the pair has no pool.
    /// - Any error from [`Pool::projected_return`].
    pub fn quote_out(
        &self,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
    ) -> Result<Amount, RouterError> {
        self.registry
            .require_pool(asset_in, asset_out)?
            .projected_return(asset_in, asset_out, amount_in)
    }

    /// Inverse quote of a single hop.
    ///
    /// # Errors
    ///
    /// - [`RouterError::PoolNotFound`] if the pair has no pool.
    /// - Any error from [`Pool::required_input`].
    pub fn quote_in(
        &self,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_out: Amount,
    ) -> Result<Amount, RouterError> {
        self.registry
            .require_pool(asset_in, asset_out)?
            .required_input(asset_in, asset_out, amount_out)
    }

    /// Amount of every asset along `path` when `amount_in` enters it.
    ///
    /// The result has `path.len()` entries; the first is `amount_in` and
    /// the last is the path output.  A hop quoted at zero propagates zero
    /// to every later hop.
    ///
    /// # Errors
    ///
    /// - [`RouterError::PoolNotFound`] if any hop has no pool.
    /// - Any error from [`Pool::projected_return`].
    pub fn amounts_out(&self, amount_in: Amount, path: &Path) -> Result<QuotedAmounts, RouterError> {
        let mut amounts = Vec::with_capacity(path.len());
        amounts.push(amount_in);
        let mut running = amount_in;
        for hop in path.hops() {
            running = self.quote_out(hop.asset_in, hop.asset_out, running)?;
            amounts.push(running);
        }
        debug!(%path, %amount_in, amount_out = %running, "forward quote");
        Ok(QuotedAmounts::from_vec(amounts))
    }

    /// Amount of every asset along `path` needed to receive `amount_out`
    /// of its last asset.
    ///
    /// Walks the hops last to first.  The result has `path.len()` entries;
    /// the first is the required path input and the last is `amount_out`.
    ///
    /// # Errors
    ///
    /// - [`RouterError::PoolNotFound`] if any hop has no pool.
    /// - Any error from [`Pool::required_input`], typically when a hop
    ///   cannot deliver the amount asked of it.
    pub fn amounts_in(&self, amount_out: Amount, path: &Path) -> Result<QuotedAmounts, RouterError> {
        let mut amounts = vec![Amount::ZERO; path.len()];
        let last = amounts.len() - 1;
        amounts[last] = amount_out;
        for hop in path.hops().rev() {
            amounts[hop.index] = self.quote_in(hop.asset_in, hop.asset_out, amounts[hop.index + 1])?;
        }
        debug!(%path, amount_in = %amounts[0], %amount_out, "inverse quote");
        Ok(QuotedAmounts::from_vec(amounts))
    }
}
