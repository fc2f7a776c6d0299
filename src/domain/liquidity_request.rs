//! Liquidity provision requests and their ratio-adjusted results.

use super::{Amount, AssetId};
use crate::error::{Result, RouterError};

/// What a liquidity provider is willing to deposit into the pool for
/// `(asset_a, asset_b)`.
///
/// The desired amounts are upper bounds; the minimums are the slippage
/// protection applied after the deposit is fitted to the pool's reserve
/// ratio.  Assets are given in the caller's order, not canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiquidityRequest {
    /// First asset, in caller order.
    pub asset_a: AssetId,
    /// Second asset, in caller order.
    pub asset_b: AssetId,
    /// Most of asset A the caller will deposit.
    pub amount_a_desired: Amount,
    /// Most of asset B the caller will deposit.
    pub amount_b_desired: Amount,
    /// Least of asset A the caller accepts to deposit.
    pub amount_a_min: Amount,
    /// Least of asset B the caller accepts to deposit.
    pub amount_b_min: Amount,
}

impl LiquidityRequest {
    /// Builds a request with no slippage protection (both minimums zero).
    #[must_use]
    pub const fn new(
        asset_a: AssetId,
        asset_b: AssetId,
        amount_a_desired: Amount,
        amount_b_desired: Amount,
    ) -> Self {
        Self {
            asset_a,
            asset_b,
            amount_a_desired,
            amount_b_desired,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
        }
    }

    /// Sets the minimum accepted deposits.
    #[must_use]
    pub const fn with_minimums(mut self, amount_a_min: Amount, amount_b_min: Amount) -> Self {
        self.amount_a_min = amount_a_min;
        self.amount_b_min = amount_b_min;
        self
    }

    /// Checks the request is well formed.
    ///
    /// # Errors
    ///
    /// - [`RouterError::DegenerateOrder`] if both assets are the same.
    /// - [`RouterError::ZeroAmount`] if either desired amount is zero.
    pub fn validate(&self) -> Result<()> {
        if self.asset_a == self.asset_b {
            return Err(RouterError::DegenerateOrder);
        }
        if self.amount_a_desired.is_zero() {
            return Err(RouterError::ZeroAmount("amount_a_desired"));
        }
        if self.amount_b_desired.is_zero() {
            return Err(RouterError::ZeroAmount("amount_b_desired"));
        }
        Ok(())
    }
}

/// Deposit amounts fitted to the pool ratio, in caller order.
///
/// Always satisfies `amount_a ≤ amount_a_desired` and
/// `amount_b ≤ amount_b_desired` of the request it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiquidityAmounts {
    /// Amount of asset A to deposit.
    pub amount_a: Amount,
    /// Amount of asset B to deposit.
    pub amount_b: Amount,
}
