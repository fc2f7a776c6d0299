//! In-memory asset ledger.

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::RouterError;
use crate::math::CheckedArithmetic;
use crate::traits::{AssetLedger, NativeCurrency};

/// Balances, allowances and native currency held in ordered maps.
///
/// Missing entries read as zero and zeroed entries are removed, so two
/// ledgers holding the same funds compare equal.
///
/// Accounts can be [frozen](Self::freeze): every transfer, approval,
/// wrap or unwrap touching a frozen account fails with
/// [`RouterError::ExternalCallFailure`].  Minting and burning ignore the
/// freeze so that tests can seed and inspect balances freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryLedger {
    wrapped_native: AssetId,
    balances: BTreeMap<(AssetId, AccountId), Amount>,
    allowances: BTreeMap<(AssetId, AccountId, AccountId), Amount>,
    supply: BTreeMap<AssetId, Amount>,
    native: BTreeMap<AccountId, Amount>,
    frozen: BTreeSet<AccountId>,
}

impl InMemoryLedger {
    /// Creates an empty ledger whose native currency wraps into
    /// `wrapped_native`.
    #[must_use]
    pub fn new(wrapped_native: AssetId) -> Self {
        Self {
            wrapped_native,
            balances: BTreeMap::new(),
            allowances: BTreeMap::new(),
            supply: BTreeMap::new(),
            native: BTreeMap::new(),
            frozen: BTreeSet::new(),
        }
    }

    /// Credits `amount` of native currency to `owner` out of thin air.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Overflow`] if the balance would overflow.
    pub fn deposit_native(&mut self, owner: AccountId, amount: Amount) -> Result<(), RouterError> {
        let balance = self.native_balance(owner).safe_add(&amount)?;
        Self::store(&mut self.native, owner, balance);
        Ok(())
    }

    /// Makes `account` unable to send or receive funds.
    pub fn freeze(&mut self, account: AccountId) {
        self.frozen.insert(account);
    }

    /// Lifts a freeze placed by [`freeze`](Self::freeze).
    pub fn unfreeze(&mut self, account: AccountId) {
        self.frozen.remove(&account);
    }

    /// `true` if `account` is frozen.
    #[must_use]
    pub fn is_frozen(&self, account: AccountId) -> bool {
        self.frozen.contains(&account)
    }

    fn ensure_active(&self, account: AccountId) -> Result<(), RouterError> {
        if self.is_frozen(account) {
            return Err(RouterError::ExternalCallFailure("account is frozen"));
        }
        Ok(())
    }

    fn store<K: Ord>(map: &mut BTreeMap<K, Amount>, key: K, value: Amount) {
        if value.is_zero() {
            map.remove(&key);
        } else {
            map.insert(key, value);
        }
    }

    fn debit(&mut self, asset: AssetId, from: AccountId, amount: Amount) -> Result<(), RouterError> {
        let balance = self
            .balance_of(asset, from)
            .safe_sub(&amount)
            .map_err(|_| RouterError::ExternalCallFailure("insufficient balance"))?;
        Self::store(&mut self.balances, (asset, from), balance);
        Ok(())
    }

    fn credit(&mut self, asset: AssetId, to: AccountId, amount: Amount) -> Result<(), RouterError> {
        let balance = self.balance_of(asset, to).safe_add(&amount)?;
        Self::store(&mut self.balances, (asset, to), balance);
        Ok(())
    }
}

impl AssetLedger for InMemoryLedger {
    fn balance_of(&self, asset: AssetId, owner: AccountId) -> Amount {
        self.balances
            .get(&(asset, owner))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn allowance(&self, asset: AssetId, owner: AccountId, spender: AccountId) -> Amount {
        self.allowances
            .get(&(asset, owner, spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn transfer(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError> {
        self.ensure_active(from)?;
        self.ensure_active(to)?;
        self.debit(asset, from, amount)?;
        self.credit(asset, to, amount)?;
        trace!(%asset, %from, %to, %amount, "transfer");
        Ok(())
    }

    fn approve(
        &mut self,
        asset: AssetId,
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError> {
        self.ensure_active(owner)?;
        Self::store(&mut self.allowances, (asset, owner, spender), amount);
        Ok(())
    }

    fn transfer_from(
        &mut self,
        asset: AssetId,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError> {
        let remaining = self
            .allowance(asset, from, spender)
            .safe_sub(&amount)
            .map_err(|_| RouterError::ExternalCallFailure("insufficient allowance"))?;
        self.transfer(asset, from, to, amount)?;
        Self::store(&mut self.allowances, (asset, from, spender), remaining);
        Ok(())
    }

    fn mint(&mut self, asset: AssetId, to: AccountId, amount: Amount) -> Result<(), RouterError> {
        let supply = self.total_supply(asset).safe_add(&amount)?;
        self.credit(asset, to, amount)?;
        Self::store(&mut self.supply, asset, supply);
        Ok(())
    }

    fn burn(&mut self, asset: AssetId, from: AccountId, amount: Amount) -> Result<(), RouterError> {
        let supply = self
            .total_supply(asset)
            .safe_sub(&amount)
            .map_err(|_| RouterError::ExternalCallFailure("burn exceeds supply"))?;
        self.debit(asset, from, amount)?;
        Self::store(&mut self.supply, asset, supply);
        Ok(())
    }

    fn total_supply(&self, asset: AssetId) -> Amount {
        self.supply.get(&asset).copied().unwrap_or(Amount::ZERO)
    }
}

impl NativeCurrency for InMemoryLedger {
    fn wrapped_asset(&self) -> AssetId {
        self.wrapped_native
    }

    fn native_balance(&self, owner: AccountId) -> Amount {
        self.native.get(&owner).copied().unwrap_or(Amount::ZERO)
    }

    fn transfer_native(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError> {
        self.ensure_active(from)?;
        self.ensure_active(to)?;
        let from_balance = self
            .native_balance(from)
            .safe_sub(&amount)
            .map_err(|_| RouterError::ExternalCallFailure("insufficient native balance"))?;
        Self::store(&mut self.native, from, from_balance);
        let to_balance = self.native_balance(to).safe_add(&amount)?;
        Self::store(&mut self.native, to, to_balance);
        Ok(())
    }

    fn wrap(&mut self, owner: AccountId, amount: Amount) -> Result<(), RouterError> {
        self.ensure_active(owner)?;
        let native = self
            .native_balance(owner)
            .safe_sub(&amount)
            .map_err(|_| RouterError::ExternalCallFailure("insufficient native balance"))?;
        self.mint(self.wrapped_native, owner, amount)?;
        Self::store(&mut self.native, owner, native);
        Ok(())
    }

    fn unwrap(&mut self, owner: AccountId, amount: Amount) -> Result<(), RouterError> {
        self.ensure_active(owner)?;
        let native = self.native_balance(owner).safe_add(&amount)?;
        self.burn(self.wrapped_native, owner, amount)?;
        Self::store(&mut self.native, owner, native);
        Ok(())
    }
}
