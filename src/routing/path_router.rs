//! Sequential multi-hop swap execution.
//!
//! # Algorithm
//!
//! For every hop `k` of the path, in order:
//!
//! 1. Resolve the pool for `(path[k], path[k+1])`.
//! 2. Ask it for `projected_return(running)`.
//! 3. If the projection is zero, skip the hop: nothing moves and the
//!    running amount is zero for the rest of the path.
//! 4. Otherwise approve the pool's account for `running`, call
//!    [`Pool::execute_swap`] with `min_out = 0` and carry the realized
//!    output forward.
//!
//! Input funds are expected in the router's custody account before
//! [`PathRouter::execute`] is called.  Intermediate hops pay back into
//! custody; only the final hop pays the recipient.
//!
//! No per-hop minimum is enforced.  Callers bound the whole path once, at
//! the boundary, before execution starts.

use tracing::{debug, warn};

use crate::domain::{AccountId, Amount, Path, Referral, SwapOrder};
use crate::error::RouterError;
use crate::traits::{AssetLedger, Pool, PoolRegistry};

/// Executes swaps hop by hop out of a custody account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathRouter {
    custody: AccountId,
}

impl PathRouter {
    /// Creates a router paying and receiving intermediate hops through
    /// `custody`.
    #[must_use]
    pub const fn new(custody: AccountId) -> Self {
        Self { custody }
    }

    /// The custody account.
    #[must_use]
    pub const fn custody(&self) -> AccountId {
        self.custody
    }

    /// Swaps `amount_in` of `path.first()` held in custody along `path`,
    /// paying the output to `recipient`.
    ///
    /// Returns the final running amount, which is zero if any hop was
    /// skipped.
    ///
    /// # Errors
    ///
    /// - [`RouterError::PoolNotFound`] if a hop has no pool.
    /// - Any error from the pool or the ledger.  The caller is responsible
    ///   for rolling back funds already moved by earlier hops.
    pub fn execute<R, L>(
        &self,
        registry: &mut R,
        ledger: &mut L,
        path: &Path,
        amount_in: Amount,
        recipient: AccountId,
        referral: Referral,
    ) -> Result<Amount, RouterError>
    where
        R: PoolRegistry + ?Sized,
        L: AssetLedger + ?Sized,
    {
        let last_hop = path.hop_count() - 1;
        let mut running = amount_in;

        for hop in path.hops() {
            let id = registry
                .resolve_pool(hop.asset_in, hop.asset_out)
                .ok_or(RouterError::PoolNotFound)?;

            if running.is_zero() {
                warn!(hop = hop.index, pool = %id, "skipping hop after zero output");
                continue;
            }

            let pool = registry.pool_mut(id)?;
            let projected = pool.projected_return(hop.asset_in, hop.asset_out, running)?;
            if projected.is_zero() {
                warn!(
                    hop = hop.index,
                    pool = %id,
                    amount_in = %running,
                    "pool projects zero output, skipping hop"
                );
                running = Amount::ZERO;
                continue;
            }

            let hop_recipient = if hop.index == last_hop {
                recipient
            } else {
                self.custody
            };
            let order = SwapOrder {
                asset_in: hop.asset_in,
                asset_out: hop.asset_out,
                amount_in: running,
                min_out: Amount::ZERO,
                payer: self.custody,
                recipient: hop_recipient,
                referral,
            };

            ledger.approve(hop.asset_in, self.custody, pool.account(), running)?;
            let realized = pool.execute_swap(ledger, &order)?;
            debug!(
                hop = hop.index,
                pool = %id,
                asset_in = %hop.asset_in,
                asset_out = %hop.asset_out,
                amount_in = %running,
                amount_out = %realized,
                "hop executed"
            );
            running = realized;
        }

        Ok(running)
    }
}
