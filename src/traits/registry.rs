//! Lookup and creation of pools by asset pair.

use super::Pool;
use crate::domain::{AssetId, PoolId};
use crate::error::RouterError;

/// Registry mapping unordered asset pairs to pools.
///
/// `resolve_pool(x, y)` and `resolve_pool(y, x)` must return the same
/// handle.  Swaps require the pool to exist; liquidity provision creates it
/// on demand through [`create_pool`](Self::create_pool).
pub trait PoolRegistry {
    /// Concrete pool type held by the registry.
    type Pool: Pool;

    /// Returns the pool registered for `{x, y}`, if any.
    #[must_use]
    fn resolve_pool(&self, x: AssetId, y: AssetId) -> Option<PoolId>;

    /// Creates and registers an empty pool for `{x, y}`.
    ///
    /// # Errors
    ///
    /// - [`RouterError::DegenerateOrder`] if `x == y`.
    /// - [`RouterError::ExternalCallFailure`] if a pool already exists or
    ///   the registry refuses the pair.
    fn create_pool(&mut self, x: AssetId, y: AssetId) -> Result<PoolId, RouterError>;

    /// Shared access to a registered pool.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::PoolNotFound`] for an unknown handle.
    fn pool(&self, id: PoolId) -> Result<&Self::Pool, RouterError>;

    /// Exclusive access to a registered pool.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::PoolNotFound`] for an unknown handle.
    fn pool_mut(&mut self, id: PoolId) -> Result<&mut Self::Pool, RouterError>;

    /// Resolves `{x, y}`, creating the pool if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`create_pool`](Self::create_pool).
    fn resolve_or_create(&mut self, x: AssetId, y: AssetId) -> Result<PoolId, RouterError> {
        match self.resolve_pool(x, y) {
            Some(id) => Ok(id),
            None => self.create_pool(x, y),
        }
    }

    /// Resolves `{x, y}` and fails if no pool exists.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::PoolNotFound`] if the pair has no pool.
    fn require_pool(&self, x: AssetId, y: AssetId) -> Result<&Self::Pool, RouterError> {
        let id = self.resolve_pool(x, y).ok_or(RouterError::PoolNotFound)?;
        self.pool(id)
    }
}
