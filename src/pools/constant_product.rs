//! Constant Product reference pool (Uniswap V2 style).
//!
//! The swap invariant is `x × y = k` where `x` and `y` are the reserves
//! of the two assets.  Fees are deducted from the input amount **before**
//! the pricing formula is applied.
//!
//! # Forward Quote (asset in → asset out)
//!
//! 1. `fee = ceil(amount_in × fee_bps / 10 000)`
//! 2. `net_input = amount_in − fee`
//! 3. `amount_out = floor(reserve_out × net_input / (reserve_in + net_input))`
//!
//! # Inverse Quote
//!
//! 1. `net_input = ceil(reserve_in × amount_out / (reserve_out − amount_out))`
//! 2. `amount_in = ceil(net_input × 10 000 / (10 000 − fee_bps))`
//!
//! Both roundings favour the pool, so feeding an inverse quote forward
//! always yields at least the requested output.
//!
//! # Shares
//!
//! Pool shares are an asset of the ledger.  The first deposit mints
//! `√(amount_0 × amount_1)`; later deposits mint
//! `min(Δ0 × S / R0, Δ1 × S / R1)` and take only the amounts that back the
//! minted shares.
//!
//! # Invariant
//!
//! After every swap, `k_after ≥ k_before` because the fee component
//! increases reserves without a corresponding output.

use tracing::debug;

use crate::config::ConstantProductConfig;
use crate::domain::{AccountId, Amount, AssetId, FeeTier, Rounding, SwapOrder, BPS_DENOMINATOR};
use crate::error::RouterError;
use crate::math::{mul_div, CheckedArithmetic};
use crate::routing::CanonicalOrder;
use crate::traits::{AssetLedger, FromConfig, Pool};

/// A constant-product pool (`x · y = k`) holding its reserves in a ledger
/// account.
///
/// Created from a [`ConstantProductConfig`] via [`FromConfig`].  A new pool
/// is empty: it quotes zero for every swap until the first deposit.
///
/// # State
///
/// - `reserves`: balances of both assets in slot order (fees included)
/// - `accumulated_fees`: lifetime fee counters in slot order
///
/// The outstanding share count lives in the ledger as the total supply of
/// [`share_asset`](Pool::share_asset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantProductPool {
    order: CanonicalOrder,
    fee_tier: FeeTier,
    account: AccountId,
    share_asset: AssetId,
    reserves: [Amount; 2],
    accumulated_fees: [Amount; 2],
}

impl ConstantProductPool {
    /// Returns both reserves in slot order.
    #[must_use]
    pub const fn reserves(&self) -> [Amount; 2] {
        self.reserves
    }

    /// Returns the lifetime fees collected, in slot order.
    #[must_use]
    pub const fn accumulated_fees(&self) -> [Amount; 2] {
        self.accumulated_fees
    }

    /// Returns the fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Returns the canonical asset pair.
    #[must_use]
    pub const fn order(&self) -> CanonicalOrder {
        self.order
    }

    /// Integer square root via Newton's method.
    fn isqrt(n: u128) -> u128 {
        if n == 0 {
            return 0;
        }
        let mut x = n;
        let mut y = x.div_ceil(2);
        while y < x {
            x = y;
            y = (x + n / x) / 2;
        }
        x
    }

    /// Slots of `(asset_in, asset_out)`.
    fn direction(&self, asset_in: AssetId, asset_out: AssetId) -> Result<(usize, usize), RouterError> {
        let slot_in = self.order.slot_of(asset_in)?;
        let slot_out = self.order.slot_of(asset_out)?;
        if slot_in == slot_out {
            return Err(RouterError::ExternalCallFailure(
                "cannot swap an asset for itself",
            ));
        }
        Ok((slot_in, slot_out))
    }

    /// Computes the exact-in swap output and fee.
    ///
    /// Returns zero output when the pool is empty or the input is too
    /// small to buy one unit after fees.
    fn compute_exact_in(
        &self,
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<(Amount, Amount), RouterError> {
        if amount_in.is_zero() || reserve_in.is_zero() || reserve_out.is_zero() {
            return Ok((Amount::ZERO, Amount::ZERO));
        }

        // round up to favour the pool
        let fee = self.fee_tier.apply(amount_in, Rounding::Up)?;
        let net_input = amount_in.safe_sub(&fee)?;
        if net_input.is_zero() {
            return Ok((Amount::ZERO, fee));
        }

        let denominator = reserve_in.safe_add(&net_input)?;
        let amount_out = mul_div(reserve_out, net_input, denominator, Rounding::Down)?;
        Ok((amount_out, fee))
    }

    /// Computes the input needed for `amount_out`.
    fn compute_exact_out(
        &self,
        amount_out: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount, RouterError> {
        if amount_out.is_zero() {
            return Ok(Amount::ZERO);
        }
        if amount_out >= reserve_out || reserve_in.is_zero() {
            return Err(RouterError::ExternalCallFailure(
                "insufficient reserves for requested output",
            ));
        }

        let remaining = reserve_out.safe_sub(&amount_out)?;
        let net_input = mul_div(reserve_in, amount_out, remaining, Rounding::Up)?;

        let complement = self.fee_tier.complement();
        if complement == 0 {
            return Err(RouterError::InvalidConfiguration(
                "100% fee makes swap impossible",
            ));
        }
        mul_div(
            net_input,
            Amount::new(u128::from(BPS_DENOMINATOR)),
            Amount::new(u128::from(complement)),
            Rounding::Up,
        )
    }

    /// Amounts (slot order) backing `minted` shares out of `supply`,
    /// rounded up.
    fn backing(&self, minted: Amount, supply: Amount) -> Result<[Amount; 2], RouterError> {
        Ok([
            mul_div(minted, self.reserves[0], supply, Rounding::Up)?,
            mul_div(minted, self.reserves[1], supply, Rounding::Up)?,
        ])
    }
}

impl FromConfig<ConstantProductConfig> for ConstantProductPool {
    /// Creates an empty pool from the given configuration.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`ConstantProductConfig::validate`].
    fn from_config(config: &ConstantProductConfig) -> Result<Self, RouterError> {
        config.validate()?;
        Ok(Self {
            order: config.order(),
            fee_tier: config.fee_tier(),
            account: config.account(),
            share_asset: config.share_asset(),
            reserves: [Amount::ZERO; 2],
            accumulated_fees: [Amount::ZERO; 2],
        })
    }
}

impl Pool for ConstantProductPool {
    fn assets(&self) -> [AssetId; 2] {
        self.order.assets()
    }

    fn share_asset(&self) -> AssetId {
        self.share_asset
    }

    fn account(&self) -> AccountId {
        self.account
    }

    fn addable_balance(&self, asset: AssetId) -> Result<Amount, RouterError> {
        Ok(self.reserves[self.order.slot_of(asset)?])
    }

    fn removable_balance(&self, asset: AssetId) -> Result<Amount, RouterError> {
        Ok(self.reserves[self.order.slot_of(asset)?])
    }

    fn projected_return(
        &self,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
    ) -> Result<Amount, RouterError> {
        let (i, o) = self.direction(asset_in, asset_out)?;
        let (amount_out, _) = self.compute_exact_in(amount_in, self.reserves[i], self.reserves[o])?;
        Ok(amount_out)
    }

    fn required_input(
        &self,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_out: Amount,
    ) -> Result<Amount, RouterError> {
        let (i, o) = self.direction(asset_in, asset_out)?;
        self.compute_exact_out(amount_out, self.reserves[i], self.reserves[o])
    }

    /// Executes one swap.
    ///
    /// The referral tag is accepted and ignored.
    ///
    /// # Errors
    ///
    /// - [`RouterError::ExternalCallFailure`] if the output is zero or
    ///   below `order.min_out`, or a ledger transfer fails.
    /// - [`RouterError::Overflow`] if any arithmetic overflows.
    fn execute_swap<L>(&mut self, ledger: &mut L, order: &SwapOrder) -> Result<Amount, RouterError>
    where
        L: AssetLedger + ?Sized,
    {
        let (i, o) = self.direction(order.asset_in, order.asset_out)?;
        let (amount_out, fee) =
            self.compute_exact_in(order.amount_in, self.reserves[i], self.reserves[o])?;
        if amount_out.is_zero() {
            return Err(RouterError::ExternalCallFailure("swap produces no output"));
        }
        if amount_out < order.min_out {
            return Err(RouterError::ExternalCallFailure("output below minimum"));
        }

        let new_reserve_in = self.reserves[i].safe_add(&order.amount_in)?;
        let new_reserve_out = self.reserves[o].safe_sub(&amount_out)?;
        let new_fees = self.accumulated_fees[i].safe_add(&fee)?;

        ledger.transfer_from(
            order.asset_in,
            self.account,
            order.payer,
            self.account,
            order.amount_in,
        )?;
        ledger.transfer(order.asset_out, self.account, order.recipient, amount_out)?;

        self.reserves[i] = new_reserve_in;
        self.reserves[o] = new_reserve_out;
        self.accumulated_fees[i] = new_fees;
        debug!(
            account = %self.account,
            amount_in = %order.amount_in,
            %amount_out,
            %fee,
            "constant-product swap"
        );
        Ok(amount_out)
    }

    /// Adds liquidity.
    ///
    /// For the first deposit (no shares outstanding), shares equal
    /// `√(amount_0 × amount_1)` and both amounts are taken in full.  Later
    /// deposits mint `min(Δ0 × S / R0, Δ1 × S / R1)` shares and take only
    /// the amounts backing them.
    ///
    /// # Errors
    ///
    /// - [`RouterError::ExternalCallFailure`] if the first deposit lacks
    ///   one side, the deposit is too small to mint a share, a taken
    ///   amount is below its minimum, or a ledger operation fails.
    /// - [`RouterError::Overflow`] if arithmetic overflows.
    fn provide_liquidity<L>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        amounts: [Amount; 2],
        min_amounts: [Amount; 2],
    ) -> Result<Amount, RouterError>
    where
        L: AssetLedger + ?Sized,
    {
        let supply = ledger.total_supply(self.share_asset);

        let (minted, taken) = if supply.is_zero() {
            if amounts[0].is_zero() || amounts[1].is_zero() {
                return Err(RouterError::ExternalCallFailure(
                    "first deposit requires both assets",
                ));
            }
            let product = amounts[0].safe_mul(&amounts[1])?;
            (Amount::new(Self::isqrt(product.get())), amounts)
        } else {
            let share_0 = mul_div(amounts[0], supply, self.reserves[0], Rounding::Down)?;
            let share_1 = mul_div(amounts[1], supply, self.reserves[1], Rounding::Down)?;
            let minted = share_0.min(share_1);
            (minted, self.backing(minted, supply)?)
        };

        if minted.is_zero() {
            return Err(RouterError::ExternalCallFailure(
                "deposit too small to mint liquidity",
            ));
        }
        if taken[0] < min_amounts[0] || taken[1] < min_amounts[1] {
            return Err(RouterError::ExternalCallFailure("deposit below minimum"));
        }

        let new_reserves = [
            self.reserves[0].safe_add(&taken[0])?,
            self.reserves[1].safe_add(&taken[1])?,
        ];
        for (asset, amount) in self.order.assets().into_iter().zip(taken) {
            ledger.transfer_from(asset, self.account, provider, self.account, amount)?;
        }
        ledger.mint(self.share_asset, provider, minted)?;
        self.reserves = new_reserves;

        debug!(
            account = %self.account,
            %provider,
            amount_0 = %taken[0],
            amount_1 = %taken[1],
            %minted,
            "liquidity added"
        );
        Ok(minted)
    }

    /// Removes liquidity.
    ///
    /// Pays the proportional share of both reserves:
    /// `amount_i = reserve_i × liquidity / supply`, rounded down.
    ///
    /// # Errors
    ///
    /// - [`RouterError::ExternalCallFailure`] if `liquidity` is zero or
    ///   exceeds the supply, a paid amount is below its minimum, or a ledger
    ///   operation fails.
    /// - [`RouterError::Overflow`] if arithmetic overflows.
    fn remove_liquidity<L>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        liquidity: Amount,
        min_amounts: [Amount; 2],
    ) -> Result<[Amount; 2], RouterError>
    where
        L: AssetLedger + ?Sized,
    {
        if liquidity.is_zero() {
            return Err(RouterError::ExternalCallFailure(
                "cannot remove zero liquidity",
            ));
        }
        let supply = ledger.total_supply(self.share_asset);
        if liquidity > supply {
            return Err(RouterError::ExternalCallFailure(
                "liquidity exceeds outstanding shares",
            ));
        }

        // round down to favour the pool
        let paid = [
            mul_div(self.reserves[0], liquidity, supply, Rounding::Down)?,
            mul_div(self.reserves[1], liquidity, supply, Rounding::Down)?,
        ];
        if paid[0] < min_amounts[0] || paid[1] < min_amounts[1] {
            return Err(RouterError::ExternalCallFailure("withdrawal below minimum"));
        }

        let new_reserves = [
            self.reserves[0].safe_sub(&paid[0])?,
            self.reserves[1].safe_sub(&paid[1])?,
        ];
        ledger.burn(self.share_asset, provider, liquidity)?;
        for (asset, amount) in self.order.assets().into_iter().zip(paid) {
            ledger.transfer(asset, self.account, provider, amount)?;
        }
        self.reserves = new_reserves;

        debug!(
            account = %self.account,
            %provider,
            %liquidity,
            amount_0 = %paid[0],
            amount_1 = %paid[1],
            "liquidity removed"
        );
        Ok(paid)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Referral;
    use crate::memory::InMemoryLedger;

    // -- helpers --------------------------------------------------------------

    fn asset_a() -> AssetId {
        AssetId::from_bytes([1u8; 32])
    }

    fn asset_b() -> AssetId {
        AssetId::from_bytes([2u8; 32])
    }

    fn share() -> AssetId {
        AssetId::from_bytes([0x5Au8; 32])
    }

    fn pool_account() -> AccountId {
        AccountId::from_bytes([0x50u8; 32])
    }

    fn lp() -> AccountId {
        AccountId::from_bytes([0x11u8; 32])
    }

    fn trader() -> AccountId {
        AccountId::from_bytes([0x22u8; 32])
    }

    fn empty_pool(fee: FeeTier) -> ConstantProductPool {
        let Ok(order) = CanonicalOrder::new(asset_b(), asset_a()) else {
            panic!("expected valid pair");
        };
        let Ok(cfg) = ConstantProductConfig::new(order, fee, pool_account(), share()) else {
            panic!("expected valid config");
        };
        let Ok(pool) = ConstantProductPool::from_config(&cfg) else {
            panic!("expected valid pool");
        };
        pool
    }

    fn mint(ledger: &mut InMemoryLedger, asset: AssetId, to: AccountId, amount: u128) {
        let Ok(()) = ledger.mint(asset, to, Amount::new(amount)) else {
            panic!("mint");
        };
    }

    fn approve(ledger: &mut InMemoryLedger, asset: AssetId, owner: AccountId, amount: u128) {
        let Ok(()) = ledger.approve(asset, owner, pool_account(), Amount::new(amount)) else {
            panic!("approve");
        };
    }

    /// Pool seeded by `lp` with reserves `(ra, rb)`.
    fn make_pool(fee: FeeTier, ra: u128, rb: u128) -> (ConstantProductPool, InMemoryLedger) {
        let mut pool = empty_pool(fee);
        let mut ledger = InMemoryLedger::new(AssetId::from_bytes([0xFF; 32]));
        mint(&mut ledger, asset_a(), lp(), ra);
        mint(&mut ledger, asset_b(), lp(), rb);
        approve(&mut ledger, asset_a(), lp(), ra);
        approve(&mut ledger, asset_b(), lp(), rb);
        let Ok(_) = pool.provide_liquidity(
            &mut ledger,
            lp(),
            [Amount::new(ra), Amount::new(rb)],
            [Amount::ZERO; 2],
        ) else {
            panic!("seed deposit");
        };
        (pool, ledger)
    }

    fn order(asset_in: AssetId, asset_out: AssetId, amount_in: u128) -> SwapOrder {
        SwapOrder {
            asset_in,
            asset_out,
            amount_in: Amount::new(amount_in),
            min_out: Amount::ZERO,
            payer: trader(),
            recipient: trader(),
            referral: Referral::NONE,
        }
    }

    fn swap(
        pool: &mut ConstantProductPool,
        ledger: &mut InMemoryLedger,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: u128,
    ) -> Result<Amount, RouterError> {
        mint(ledger, asset_in, trader(), amount_in);
        approve(ledger, asset_in, trader(), amount_in);
        pool.execute_swap(ledger, &order(asset_in, asset_out, amount_in))
    }

    // -- construction ---------------------------------------------------------

    #[test]
    fn from_config_is_empty() {
        let pool = empty_pool(FeeTier::TIER_0_30_PERCENT);
        assert_eq!(pool.reserves(), [Amount::ZERO; 2]);
        assert_eq!(pool.assets(), [asset_a(), asset_b()]);
        assert_eq!(
            pool.projected_return(asset_a(), asset_b(), Amount::new(1_000)),
            Ok(Amount::ZERO)
        );
    }

    #[test]
    fn first_deposit_mints_sqrt() {
        let (_, ledger) = make_pool(FeeTier::TIER_0_30_PERCENT, 1_000_000, 1_000_000);
        // sqrt(1e6 * 1e6) = 1e6
        assert_eq!(ledger.total_supply(share()), Amount::new(1_000_000));
        assert_eq!(ledger.balance_of(share(), lp()), Amount::new(1_000_000));
        assert_eq!(ledger.balance_of(asset_a(), pool_account()), Amount::new(1_000_000));
    }

    // -- quotes -----------------------------------------------------------------

    #[test]
    fn projected_return_a_to_b() {
        let (pool, _) = make_pool(FeeTier::TIER_0_30_PERCENT, 1_000_000, 2_000_000);
        // fee = 3, net = 997, out = 2_000_000 * 997 / 1_000_997 = 1992
        assert_eq!(
            pool.projected_return(asset_a(), asset_b(), Amount::new(1_000)),
            Ok(Amount::new(1_992))
        );
    }

    #[test]
    fn tiny_input_projects_zero() {
        let (pool, _) = make_pool(FeeTier::TIER_0_30_PERCENT, 1_000_000, 1_000);
        // fee = ceil(0.003) = 1, net = 0
        assert_eq!(
            pool.projected_return(asset_a(), asset_b(), Amount::new(1)),
            Ok(Amount::ZERO)
        );
    }

    #[test]
    fn required_input_rounds_in_pools_favour() {
        let (pool, _) = make_pool(FeeTier::TIER_0_30_PERCENT, 1_000_000, 2_000_000);
        for desired in [1u128, 7, 1_000, 123_456, 1_999_999] {
            let Ok(needed) = pool.required_input(asset_a(), asset_b(), Amount::new(desired)) else {
                panic!("expected Ok");
            };
            let Ok(out) = pool.projected_return(asset_a(), asset_b(), needed) else {
                panic!("expected Ok");
            };
            assert!(out >= Amount::new(desired), "{desired}: got {out}");
        }
    }

    #[test]
    fn required_input_rejects_draining_output() {
        let (pool, _) = make_pool(FeeTier::TIER_0_30_PERCENT, 1_000, 2_000);
        assert!(pool.required_input(asset_a(), asset_b(), Amount::new(2_000)).is_err());
        assert!(pool.required_input(asset_a(), asset_b(), Amount::new(2_001)).is_err());
    }

    #[test]
    fn foreign_or_identical_assets_rejected() {
        let (pool, _) = make_pool(FeeTier::ZERO, 1_000, 1_000);
        let foreign = AssetId::from_bytes([99u8; 32]);
        assert!(pool.projected_return(foreign, asset_b(), Amount::new(1)).is_err());
        assert!(pool.projected_return(asset_a(), asset_a(), Amount::new(1)).is_err());
        assert!(pool.addable_balance(foreign).is_err());
    }

    // -- swaps -------------------------------------------------------------------

    #[test]
    fn swap_moves_funds_and_reserves() {
        let (mut pool, mut ledger) = make_pool(FeeTier::TIER_0_30_PERCENT, 1_000_000, 2_000_000);
        let Ok(out) = swap(&mut pool, &mut ledger, asset_a(), asset_b(), 1_000) else {
            panic!("expected Ok");
        };
        assert_eq!(out, Amount::new(1_992));
        assert_eq!(ledger.balance_of(asset_b(), trader()), Amount::new(1_992));
        assert_eq!(ledger.balance_of(asset_a(), trader()), Amount::ZERO);
        assert_eq!(pool.reserves(), [Amount::new(1_001_000), Amount::new(1_998_008)]);
        assert_eq!(pool.accumulated_fees(), [Amount::new(3), Amount::ZERO]);
    }

    #[test]
    fn swap_b_to_a() {
        let (mut pool, mut ledger) = make_pool(FeeTier::TIER_0_30_PERCENT, 1_000_000, 2_000_000);
        let Ok(out) = swap(&mut pool, &mut ledger, asset_b(), asset_a(), 2_000) else {
            panic!("expected Ok");
        };
        assert!(out.get() > 0);
        assert!(pool.reserves()[1] > Amount::new(2_000_000));
        assert!(pool.reserves()[0] < Amount::new(1_000_000));
    }

    #[test]
    fn swap_without_approval_fails_and_keeps_reserves() {
        let (mut pool, mut ledger) = make_pool(FeeTier::TIER_0_30_PERCENT, 1_000, 1_000);
        mint(&mut ledger, asset_a(), trader(), 100);
        let before = pool.clone();
        assert!(pool
            .execute_swap(&mut ledger, &order(asset_a(), asset_b(), 100))
            .is_err());
        assert_eq!(pool, before);
    }

    #[test]
    fn swap_min_out_enforced() {
        let (mut pool, mut ledger) = make_pool(FeeTier::TIER_0_30_PERCENT, 1_000_000, 2_000_000);
        mint(&mut ledger, asset_a(), trader(), 1_000);
        approve(&mut ledger, asset_a(), trader(), 1_000);
        let mut o = order(asset_a(), asset_b(), 1_000);
        o.min_out = Amount::new(1_993);
        assert_eq!(
            pool.execute_swap(&mut ledger, &o),
            Err(RouterError::ExternalCallFailure("output below minimum"))
        );
    }

    #[test]
    fn invariant_k_preserved_over_multiple_swaps() {
        let (mut pool, mut ledger) = make_pool(FeeTier::TIER_0_30_PERCENT, 1_000_000, 2_000_000);
        let k = |p: &ConstantProductPool| p.reserves()[0].get() * p.reserves()[1].get();
        let k_initial = k(&pool);

        for _ in 0..5 {
            let Ok(_) = swap(&mut pool, &mut ledger, asset_a(), asset_b(), 1_000) else {
                panic!("expected Ok");
            };
        }
        for _ in 0..5 {
            let Ok(_) = swap(&mut pool, &mut ledger, asset_b(), asset_a(), 1_000) else {
                panic!("expected Ok");
            };
        }
        assert!(k(&pool) >= k_initial);
    }

    // -- liquidity ---------------------------------------------------------------

    #[test]
    fn proportional_deposit_takes_backing_only() {
        let (mut pool, mut ledger) = make_pool(FeeTier::ZERO, 1_000, 4_000);
        // supply = sqrt(4e6) = 2000
        let provider = AccountId::from_bytes([0x33; 32]);
        mint(&mut ledger, asset_a(), provider, 100);
        mint(&mut ledger, asset_b(), provider, 1_000);
        approve(&mut ledger, asset_a(), provider, 100);
        approve(&mut ledger, asset_b(), provider, 1_000);

        let Ok(minted) = pool.provide_liquidity(
            &mut ledger,
            provider,
            [Amount::new(100), Amount::new(1_000)],
            [Amount::ZERO; 2],
        ) else {
            panic!("expected Ok");
        };
        // min(100 * 2000 / 1000, 1000 * 2000 / 4000) = 200
        assert_eq!(minted, Amount::new(200));
        // backing: 200 * 1000 / 2000 = 100, 200 * 4000 / 2000 = 400
        assert_eq!(ledger.balance_of(asset_b(), provider), Amount::new(600));
        assert_eq!(pool.reserves(), [Amount::new(1_100), Amount::new(4_400)]);
    }

    #[test]
    fn deposit_minimum_enforced() {
        let (mut pool, mut ledger) = make_pool(FeeTier::ZERO, 1_000, 4_000);
        let provider = AccountId::from_bytes([0x33; 32]);
        mint(&mut ledger, asset_a(), provider, 100);
        mint(&mut ledger, asset_b(), provider, 1_000);
        approve(&mut ledger, asset_a(), provider, 100);
        approve(&mut ledger, asset_b(), provider, 1_000);
        assert_eq!(
            pool.provide_liquidity(
                &mut ledger,
                provider,
                [Amount::new(100), Amount::new(1_000)],
                [Amount::ZERO, Amount::new(401)],
            ),
            Err(RouterError::ExternalCallFailure("deposit below minimum"))
        );
    }

    #[test]
    fn one_sided_first_deposit_rejected() {
        let mut pool = empty_pool(FeeTier::ZERO);
        let mut ledger = InMemoryLedger::new(AssetId::from_bytes([0xFF; 32]));
        assert!(pool
            .provide_liquidity(&mut ledger, lp(), [Amount::new(10), Amount::ZERO], [Amount::ZERO; 2])
            .is_err());
    }

    #[test]
    fn remove_liquidity_proportional() {
        let (mut pool, mut ledger) = make_pool(FeeTier::ZERO, 1_000, 4_000);
        let Ok(paid) = pool.remove_liquidity(&mut ledger, lp(), Amount::new(500), [Amount::ZERO; 2])
        else {
            panic!("expected Ok");
        };
        // 500 / 2000 of each reserve
        assert_eq!(paid, [Amount::new(250), Amount::new(1_000)]);
        assert_eq!(ledger.total_supply(share()), Amount::new(1_500));
        assert_eq!(pool.reserves(), [Amount::new(750), Amount::new(3_000)]);
        assert_eq!(ledger.balance_of(asset_a(), lp()), Amount::new(250));
    }

    #[test]
    fn remove_all_liquidity_empties_pool() {
        let (mut pool, mut ledger) = make_pool(FeeTier::ZERO, 1_000, 4_000);
        let Ok(_) = pool.remove_liquidity(&mut ledger, lp(), Amount::new(2_000), [Amount::ZERO; 2])
        else {
            panic!("expected Ok");
        };
        assert_eq!(pool.reserves(), [Amount::ZERO; 2]);
        assert_eq!(ledger.total_supply(share()), Amount::ZERO);
    }

    #[test]
    fn remove_rejects_bad_amounts() {
        let (mut pool, mut ledger) = make_pool(FeeTier::ZERO, 1_000, 4_000);
        assert!(pool
            .remove_liquidity(&mut ledger, lp(), Amount::ZERO, [Amount::ZERO; 2])
            .is_err());
        assert!(pool
            .remove_liquidity(&mut ledger, lp(), Amount::new(2_001), [Amount::ZERO; 2])
            .is_err());
        assert_eq!(
            pool.remove_liquidity(
                &mut ledger,
                lp(),
                Amount::new(500),
                [Amount::new(251), Amount::ZERO]
            ),
            Err(RouterError::ExternalCallFailure("withdrawal below minimum"))
        );
    }

    #[test]
    fn isqrt_values() {
        assert_eq!(ConstantProductPool::isqrt(0), 0);
        assert_eq!(ConstantProductPool::isqrt(1), 1);
        assert_eq!(ConstantProductPool::isqrt(15), 3);
        assert_eq!(ConstantProductPool::isqrt(16), 4);
        assert_eq!(ConstantProductPool::isqrt(u128::MAX), u64::MAX as u128);
    }
}
