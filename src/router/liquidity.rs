//! Liquidity entrypoints.
//!
//! Deposits are sized by [`LiquidityQuoter`] in the caller's asset order
//! and handed to the pool in canonical slot order; withdrawals go the
//! other way.  [`CanonicalOrder`] is the only place either conversion
//! happens.
//!
//! The pool may take slightly less than the quoted amounts when its share
//! math rounds; whatever it leaves in custody is returned to the caller
//! within the same call.

use tracing::info;

use super::dex_router::{DexRouter, Funding};
use super::params::{AddLiquidityOutcome, RemoveLiquidity};
use crate::domain::{AccountId, Amount, LiquidityAmounts, LiquidityRequest};
use crate::error::RouterError;
use crate::math::CheckedArithmetic;
use crate::routing::{CanonicalOrder, LiquidityQuoter};
use crate::traits::{AssetLedger, Pool, PoolRegistry, Venue};

impl DexRouter {
    /// Deposits into the pool of `{request.asset_a, request.asset_b}`,
    /// creating it if needed, and credits the minted shares to `caller`.
    ///
    /// Both assets are pulled from `caller` by allowance.
    ///
    /// # Errors
    ///
    /// - [`RouterError::DegenerateOrder`] / [`RouterError::ZeroAmount`] for
    ///   a malformed request.
    /// - [`RouterError::InsufficientAAmount`] /
    ///   [`RouterError::InsufficientBAmount`] if the ratio-optimal amounts
    ///   miss the request's minimums.
    /// - [`RouterError::InvariantViolation`] if the ratio math is
    ///   inconsistent.
    /// - [`RouterError::ExternalCallFailure`] if a pool or ledger call
    ///   fails.  The venue is rolled back, including any pool created by
    ///   the call.
    pub fn add_liquidity<V: Venue>(
        &self,
        venue: &mut V,
        caller: AccountId,
        request: &LiquidityRequest,
    ) -> Result<AddLiquidityOutcome, RouterError> {
        self.deposit(venue, caller, request, false, "add_liquidity")
    }

    /// Like [`add_liquidity`](Self::add_liquidity) with asset B paid in
    /// attached native value.
    ///
    /// `request.asset_b` must be the wrapped-native asset and
    /// `request.amount_b_desired` is the value attached; the part the
    /// quoter does not use is refunded.
    ///
    /// # Errors
    ///
    /// As [`add_liquidity`](Self::add_liquidity), plus
    /// [`RouterError::NativeAssetMismatch`] if asset B is not the
    /// wrapped-native asset.
    pub fn add_liquidity_native<V: Venue>(
        &self,
        venue: &mut V,
        caller: AccountId,
        request: &LiquidityRequest,
    ) -> Result<AddLiquidityOutcome, RouterError> {
        self.deposit(venue, caller, request, true, "add_liquidity_native")
    }

    /// Burns `params.liquidity` shares pulled from `caller` and pays both
    /// assets to `caller`.
    ///
    /// # Errors
    ///
    /// - [`RouterError::DegenerateOrder`] / [`RouterError::ZeroAmount`] for
    ///   malformed parameters.
    /// - [`RouterError::PoolNotFound`] if the pair has no pool.
    /// - [`RouterError::ExternalCallFailure`] if the pool pays less than a
    ///   minimum or a ledger call fails.
    pub fn remove_liquidity<V: Venue>(
        &self,
        venue: &mut V,
        caller: AccountId,
        params: &RemoveLiquidity,
    ) -> Result<LiquidityAmounts, RouterError> {
        self.withdraw(venue, caller, params, false, "remove_liquidity")
    }

    /// Like [`remove_liquidity`](Self::remove_liquidity), paying asset B
    /// out as native currency.
    ///
    /// # Errors
    ///
    /// As [`remove_liquidity`](Self::remove_liquidity), plus
    /// [`RouterError::NativeAssetMismatch`] if asset B is not the
    /// wrapped-native asset.
    pub fn remove_liquidity_native<V: Venue>(
        &self,
        venue: &mut V,
        caller: AccountId,
        params: &RemoveLiquidity,
    ) -> Result<LiquidityAmounts, RouterError> {
        self.withdraw(venue, caller, params, true, "remove_liquidity_native")
    }

    fn deposit<V: Venue>(
        &self,
        venue: &mut V,
        caller: AccountId,
        request: &LiquidityRequest,
        native_b: bool,
        operation: &'static str,
    ) -> Result<AddLiquidityOutcome, RouterError> {
        if native_b && request.asset_b != self.config().wrapped_native() {
            return Err(RouterError::NativeAssetMismatch(
                "asset B must be the wrapped-native asset",
            ));
        }
        request.validate()?;
        let order = CanonicalOrder::new(request.asset_a, request.asset_b)?;
        let custody = self.custody();
        let (asset_a, asset_b) = (request.asset_a, request.asset_b);

        let outcome = Self::atomic(venue, operation, |venue| {
            let (registry, ledger) = venue.split_mut();
            let (id, amounts) = LiquidityQuoter::quote(registry, request)?;

            let held_a = ledger.balance_of(asset_a, custody);
            let held_b = ledger.balance_of(asset_b, custody);
            self.fund(ledger, caller, asset_a, amounts.amount_a, Funding::Allowance)?;
            let funding_b = if native_b {
                Funding::Native {
                    attached: request.amount_b_desired,
                }
            } else {
                Funding::Allowance
            };
            self.fund(ledger, caller, asset_b, amounts.amount_b, funding_b)?;

            let pool = registry.pool_mut(id)?;
            let pool_account = pool.account();
            let share_asset = pool.share_asset();
            ledger.approve(asset_a, custody, pool_account, amounts.amount_a)?;
            ledger.approve(asset_b, custody, pool_account, amounts.amount_b)?;
            let liquidity = pool.provide_liquidity(
                ledger,
                custody,
                order.canonicalize(amounts.amount_a, amounts.amount_b),
                order.canonicalize(request.amount_a_min, request.amount_b_min),
            )?;
            ledger.approve(asset_a, custody, pool_account, Amount::ZERO)?;
            ledger.approve(asset_b, custody, pool_account, Amount::ZERO)?;

            let unused_a = ledger.balance_of(asset_a, custody).safe_sub(&held_a)?;
            let unused_b = ledger.balance_of(asset_b, custody).safe_sub(&held_b)?;
            self.deliver(ledger, asset_a, unused_a, caller, false)?;
            self.deliver(ledger, asset_b, unused_b, caller, native_b)?;
            ledger.transfer(share_asset, custody, caller, liquidity)?;

            Ok(AddLiquidityOutcome {
                pool: id,
                amount_a: amounts.amount_a.safe_sub(&unused_a)?,
                amount_b: amounts.amount_b.safe_sub(&unused_b)?,
                liquidity,
            })
        })?;

        info!(
            operation,
            pool = %outcome.pool,
            amount_a = %outcome.amount_a,
            amount_b = %outcome.amount_b,
            liquidity = %outcome.liquidity,
            %caller,
            "liquidity added"
        );
        Ok(outcome)
    }

    fn withdraw<V: Venue>(
        &self,
        venue: &mut V,
        caller: AccountId,
        params: &RemoveLiquidity,
        native_b: bool,
        operation: &'static str,
    ) -> Result<LiquidityAmounts, RouterError> {
        if native_b && params.asset_b != self.config().wrapped_native() {
            return Err(RouterError::NativeAssetMismatch(
                "asset B must be the wrapped-native asset",
            ));
        }
        let order = CanonicalOrder::new(params.asset_a, params.asset_b)?;
        if params.liquidity.is_zero() {
            return Err(RouterError::ZeroAmount("liquidity"));
        }
        let custody = self.custody();

        let amounts = Self::atomic(venue, operation, |venue| {
            let (registry, ledger) = venue.split_mut();
            let id = registry
                .resolve_pool(params.asset_a, params.asset_b)
                .ok_or(RouterError::PoolNotFound)?;
            let pool = registry.pool_mut(id)?;

            ledger.transfer_from(pool.share_asset(), custody, caller, custody, params.liquidity)?;
            let paid = pool.remove_liquidity(
                ledger,
                custody,
                params.liquidity,
                order.canonicalize(params.amount_a_min, params.amount_b_min),
            )?;
            let (amount_a, amount_b) = order.decanonicalize(paid);

            self.deliver(ledger, params.asset_a, amount_a, caller, false)?;
            self.deliver(ledger, params.asset_b, amount_b, caller, native_b)?;
            Ok(LiquidityAmounts { amount_a, amount_b })
        })?;

        info!(
            operation,
            liquidity = %params.liquidity,
            amount_a = %amounts.amount_a,
            amount_b = %amounts.amount_b,
            %caller,
            "liquidity removed"
        );
        Ok(amounts)
    }
}
