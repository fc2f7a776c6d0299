//! Scripted collaborators for unit-testing the routing components.
//!
//! [`FixedRatePool`] prices every hop with a fixed rational rate, which
//! makes expected quotes easy to compute by hand, and can be told to
//! reject execution.  [`StubRegistry`] stores them in a `Vec`.

use crate::domain::{AccountId, Amount, AssetId, PoolId, Rounding, SwapOrder};
use crate::error::RouterError;
use crate::math::{mul_div, CheckedArithmetic};
use crate::routing::CanonicalOrder;
use crate::traits::{AssetLedger, Pool, PoolRegistry};

pub(crate) fn asset(b: u8) -> AssetId {
    AssetId::from_bytes([b; 32])
}

pub(crate) fn account(b: u8) -> AccountId {
    AccountId::from_bytes([b; 32])
}

/// Pool quoting `out = in * num / den` from `x` to `y` and the reciprocal
/// rate from `y` to `x`.
#[derive(Debug, Clone)]
pub(crate) struct FixedRatePool {
    x: AssetId,
    y: AssetId,
    num: u128,
    den: u128,
    reserves: (Amount, Amount),
    account: AccountId,
    pub fail_execution: bool,
}

impl FixedRatePool {
    pub(crate) fn new(x: AssetId, y: AssetId, num: u128, den: u128) -> Self {
        let mut tag = x.as_bytes();
        tag[0] ^= y.as_bytes()[0].wrapping_add(0x80);
        Self {
            x,
            y,
            num,
            den,
            reserves: (Amount::ZERO, Amount::ZERO),
            account: AccountId::from_bytes(tag),
            fail_execution: false,
        }
    }

    /// Reserves reported by the liquidity view, as `(x, y)`.
    pub(crate) fn with_reserves(mut self, x: u128, y: u128) -> Self {
        self.reserves = (Amount::new(x), Amount::new(y));
        self
    }

    pub(crate) fn failing(mut self) -> Self {
        self.fail_execution = true;
        self
    }

    fn rate(&self, asset_in: AssetId, asset_out: AssetId) -> Result<(Amount, Amount), RouterError> {
        if asset_in == self.x && asset_out == self.y {
            Ok((Amount::new(self.num), Amount::new(self.den)))
        } else if asset_in == self.y && asset_out == self.x {
            Ok((Amount::new(self.den), Amount::new(self.num)))
        } else {
            Err(RouterError::ExternalCallFailure("asset pair not served"))
        }
    }

    fn reserve(&self, asset: AssetId) -> Result<Amount, RouterError> {
        if asset == self.x {
            Ok(self.reserves.0)
        } else if asset == self.y {
            Ok(self.reserves.1)
        } else {
            Err(RouterError::ExternalCallFailure("asset not in pool"))
        }
    }
}

impl Pool for FixedRatePool {
    fn assets(&self) -> [AssetId; 2] {
        match CanonicalOrder::new(self.x, self.y) {
            Ok(order) => order.assets(),
            Err(_) => [self.x, self.y],
        }
    }

    fn share_asset(&self) -> AssetId {
        AssetId::from_bytes(self.account.as_bytes())
    }

    fn account(&self) -> AccountId {
        self.account
    }

    fn addable_balance(&self, asset: AssetId) -> Result<Amount, RouterError> {
        self.reserve(asset)
    }

    fn removable_balance(&self, asset: AssetId) -> Result<Amount, RouterError> {
        self.reserve(asset)
    }

    fn projected_return(
        &self,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
    ) -> Result<Amount, RouterError> {
        let (num, den) = self.rate(asset_in, asset_out)?;
        if num.is_zero() {
            return Ok(Amount::ZERO);
        }
        mul_div(amount_in, num, den, Rounding::Down)
    }

    fn required_input(
        &self,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_out: Amount,
    ) -> Result<Amount, RouterError> {
        let (num, den) = self.rate(asset_in, asset_out)?;
        if num.is_zero() {
            return Err(RouterError::ExternalCallFailure("pool pays nothing"));
        }
        mul_div(amount_out, den, num, Rounding::Up)
    }

    fn execute_swap<L>(&mut self, ledger: &mut L, order: &SwapOrder) -> Result<Amount, RouterError>
    where
        L: AssetLedger + ?Sized,
    {
        if self.fail_execution {
            return Err(RouterError::ExternalCallFailure("scripted swap failure"));
        }
        let out = self.projected_return(order.asset_in, order.asset_out, order.amount_in)?;
        if out < order.min_out {
            return Err(RouterError::ExternalCallFailure("output below minimum"));
        }
        ledger.transfer_from(order.asset_in, self.account, order.payer, self.account, order.amount_in)?;
        ledger.transfer(order.asset_out, self.account, order.recipient, out)?;
        Ok(out)
    }

    fn provide_liquidity<L>(
        &mut self,
        _ledger: &mut L,
        _provider: AccountId,
        amounts: [Amount; 2],
        _min_amounts: [Amount; 2],
    ) -> Result<Amount, RouterError>
    where
        L: AssetLedger + ?Sized,
    {
        amounts[0].safe_add(&amounts[1])
    }

    fn remove_liquidity<L>(
        &mut self,
        _ledger: &mut L,
        _provider: AccountId,
        _liquidity: Amount,
        _min_amounts: [Amount; 2],
    ) -> Result<[Amount; 2], RouterError>
    where
        L: AssetLedger + ?Sized,
    {
        Err(RouterError::ExternalCallFailure("not supported by stub"))
    }
}

/// Registry over a `Vec` of [`FixedRatePool`]s.
#[derive(Debug, Clone, Default)]
pub(crate) struct StubRegistry {
    pools: Vec<FixedRatePool>,
}

impl StubRegistry {
    pub(crate) fn insert(&mut self, pool: FixedRatePool) -> PoolId {
        self.pools.push(pool);
        PoolId::new(self.pools.len() as u64 - 1)
    }
}

impl PoolRegistry for StubRegistry {
    type Pool = FixedRatePool;

    fn resolve_pool(&self, x: AssetId, y: AssetId) -> Option<PoolId> {
        self.pools
            .iter()
            .position(|p| (p.x == x && p.y == y) || (p.x == y && p.y == x))
            .map(|i| PoolId::new(i as u64))
    }

    fn create_pool(&mut self, x: AssetId, y: AssetId) -> Result<PoolId, RouterError> {
        CanonicalOrder::new(x, y)?;
        if self.resolve_pool(x, y).is_some() {
            return Err(RouterError::ExternalCallFailure("pool already exists"));
        }
        Ok(self.insert(FixedRatePool::new(x, y, 1, 1)))
    }

    fn pool(&self, id: PoolId) -> Result<&FixedRatePool, RouterError> {
        self.pools
            .get(id.get() as usize)
            .ok_or(RouterError::PoolNotFound)
    }

    fn pool_mut(&mut self, id: PoolId) -> Result<&mut FixedRatePool, RouterError> {
        self.pools
            .get_mut(id.get() as usize)
            .ok_or(RouterError::PoolNotFound)
    }
}
