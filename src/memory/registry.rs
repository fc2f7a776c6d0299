//! In-memory pool registry.

use std::collections::BTreeMap;

use tracing::info;

use crate::config::ConstantProductConfig;
use crate::domain::{AccountId, AssetId, FeeTier, PoolId};
use crate::error::RouterError;
use crate::pools::ConstantProductPool;
use crate::routing::CanonicalOrder;
use crate::traits::{FromConfig, PoolRegistry};

const ACCOUNT_TAG: [u8; 4] = *b"pool";
const SHARE_TAG: [u8; 4] = *b"lpsh";

fn tagged(tag: [u8; 4], id: PoolId) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[..4].copy_from_slice(&tag);
    bytes[24..].copy_from_slice(&id.get().to_be_bytes());
    bytes
}

/// Registry of [`ConstantProductPool`]s keyed by canonical asset pair.
///
/// Pools are created on demand with the registry's fee tier.  Each pool is
/// given a reserve account and a share asset derived from its [`PoolId`],
/// so identifiers are stable across snapshots and rollbacks.
///
/// # Examples
///
/// ```
/// use hydra_router::domain::{AssetId, FeeTier};
/// use hydra_router::memory::InMemoryRegistry;
/// use hydra_router::traits::PoolRegistry;
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// let weth = AssetId::from_bytes([2u8; 32]);
///
/// let mut registry = InMemoryRegistry::new(FeeTier::TIER_0_30_PERCENT);
/// let id = registry.create_pool(weth, usdc).expect("new pair");
/// assert_eq!(registry.resolve_pool(usdc, weth), Some(id));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryRegistry {
    fee_tier: FeeTier,
    pools: Vec<ConstantProductPool>,
    index: BTreeMap<[AssetId; 2], PoolId>,
}

impl InMemoryRegistry {
    /// Creates an empty registry whose pools charge `fee_tier`.
    #[must_use]
    pub fn new(fee_tier: FeeTier) -> Self {
        Self {
            fee_tier,
            pools: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// Fee tier of newly created pools.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// `true` if no pool has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Iterates over the registered pools in creation order.
    pub fn pools(&self) -> impl Iterator<Item = (PoolId, &ConstantProductPool)> {
        self.pools
            .iter()
            .enumerate()
            .map(|(i, pool)| (PoolId::new(i as u64), pool))
    }
}

impl PoolRegistry for InMemoryRegistry {
    type Pool = ConstantProductPool;

    fn resolve_pool(&self, x: AssetId, y: AssetId) -> Option<PoolId> {
        let order = CanonicalOrder::new(x, y).ok()?;
        self.index.get(&order.assets()).copied()
    }

    fn create_pool(&mut self, x: AssetId, y: AssetId) -> Result<PoolId, RouterError> {
        let order = CanonicalOrder::new(x, y)?;
        if self.index.contains_key(&order.assets()) {
            return Err(RouterError::ExternalCallFailure("pool already exists"));
        }

        let id = PoolId::new(self.pools.len() as u64);
        let account = AccountId::from_bytes(tagged(ACCOUNT_TAG, id));
        let share_asset = AssetId::from_bytes(tagged(SHARE_TAG, id));
        let config = ConstantProductConfig::new(order, self.fee_tier, account, share_asset)?;
        let pool = ConstantProductPool::from_config(&config)?;

        self.pools.push(pool);
        self.index.insert(order.assets(), id);
        info!(pool = %id, asset_0 = %order.first(), asset_1 = %order.second(), fee = %self.fee_tier, "pool created");
        Ok(id)
    }

    fn pool(&self, id: PoolId) -> Result<&ConstantProductPool, RouterError> {
        usize::try_from(id.get())
            .ok()
            .and_then(|i| self.pools.get(i))
            .ok_or(RouterError::PoolNotFound)
    }

    fn pool_mut(&mut self, id: PoolId) -> Result<&mut ConstantProductPool, RouterError> {
        usize::try_from(id.get())
            .ok()
            .and_then(|i| self.pools.get_mut(i))
            .ok_or(RouterError::PoolNotFound)
    }
}
