//! Configuration for constant-product reference pools.

use crate::domain::{AccountId, AssetId, FeeTier};
use crate::error::RouterError;
use crate::routing::CanonicalOrder;

/// Blueprint of a constant-product pool (`x · y = k`).
///
/// Defines the immutable parameters of a pool: its asset pair, fee tier,
/// the ledger account holding its reserves and the asset representing its
/// shares.  Pools start empty; the first deposit sets the price.
///
/// # Validation
///
/// - The pair is validated at [`CanonicalOrder`] construction time.
/// - The share asset must differ from both pool assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantProductConfig {
    order: CanonicalOrder,
    fee_tier: FeeTier,
    account: AccountId,
    share_asset: AssetId,
}

impl ConstantProductConfig {
    /// Creates a new `ConstantProductConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidConfiguration`] if `share_asset` is
    /// one of the pool assets.
    pub fn new(
        order: CanonicalOrder,
        fee_tier: FeeTier,
        account: AccountId,
        share_asset: AssetId,
    ) -> Result<Self, RouterError> {
        let config = Self {
            order,
            fee_tier,
            account,
            share_asset,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidConfiguration`] if `share_asset` is
    /// one of the pool assets.
    pub fn validate(&self) -> Result<(), RouterError> {
        if self.order.contains(self.share_asset) {
            return Err(RouterError::InvalidConfiguration(
                "share asset must differ from pool assets",
            ));
        }
        Ok(())
    }

    /// Returns the canonical asset pair.
    #[must_use]
    pub const fn order(&self) -> CanonicalOrder {
        self.order
    }

    /// Returns the fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Returns the reserve account.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Returns the share asset.
    #[must_use]
    pub const fn share_asset(&self) -> AssetId {
        self.share_asset
    }
}
