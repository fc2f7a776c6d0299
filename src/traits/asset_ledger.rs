//! Fungible-asset and native-currency capabilities.
//!
//! [`AssetLedger`] models a set of fungible assets with ERC-20 style
//! balances and allowances.  [`NativeCurrency`] models the chain's native
//! currency and its 1:1 wrapped representation, which is itself an asset
//! of the ledger.
//!
//! Every operation either succeeds completely or returns an error that the
//! router treats as fatal to the enclosing call.

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::RouterError;

/// Balances and allowances of fungible assets.
pub trait AssetLedger {
    /// Balance of `owner` in `asset`.
    #[must_use]
    fn balance_of(&self, asset: AssetId, owner: AccountId) -> Amount;

    /// Amount of `asset` that `spender` may still move out of `owner`.
    #[must_use]
    fn allowance(&self, asset: AssetId, owner: AccountId, spender: AccountId) -> Amount;

    /// Moves `amount` of `asset` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::ExternalCallFailure`] if `from` holds too
    /// little or either account may not transact.
    fn transfer(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError>;

    /// Sets the allowance of `spender` over `owner`'s `asset` to `amount`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::ExternalCallFailure`] if `owner` may not
    /// transact.
    fn approve(
        &mut self,
        asset: AssetId,
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError>;

    /// Moves `amount` of `asset` from `from` to `to` on behalf of
    /// `spender`, consuming allowance.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::ExternalCallFailure`] if the allowance or the
    /// balance is insufficient, or either account may not transact.
    fn transfer_from(
        &mut self,
        asset: AssetId,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError>;

    /// Creates `amount` of `asset` in `to`.  Used by pools to issue shares.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Overflow`] if the balance would overflow.
    fn mint(&mut self, asset: AssetId, to: AccountId, amount: Amount) -> Result<(), RouterError>;

    /// Destroys `amount` of `asset` held by `from`.  Used by pools to
    /// redeem shares.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::ExternalCallFailure`] if `from` holds too
    /// little.
    fn burn(&mut self, asset: AssetId, from: AccountId, amount: Amount) -> Result<(), RouterError>;

    /// Total outstanding supply of `asset`.
    #[must_use]
    fn total_supply(&self, asset: AssetId) -> Amount;
}

/// The native currency and its wrapped asset.
pub trait NativeCurrency {
    /// The ledger asset that wraps the native currency 1:1.
    #[must_use]
    fn wrapped_asset(&self) -> AssetId;

    /// Native balance of `owner`.
    #[must_use]
    fn native_balance(&self, owner: AccountId) -> Amount;

    /// Moves native currency between accounts.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::ExternalCallFailure`] if `from` holds too
    /// little or either account may not transact.
    fn transfer_native(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError>;

    /// Converts `amount` of `owner`'s native currency into the wrapped
    /// asset.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::ExternalCallFailure`] if `owner` holds too
    /// little native currency.
    fn wrap(&mut self, owner: AccountId, amount: Amount) -> Result<(), RouterError>;

    /// Converts `amount` of `owner`'s wrapped asset back into native
    /// currency.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::ExternalCallFailure`] if `owner` holds too
    /// little of the wrapped asset.
    fn unwrap(&mut self, owner: AccountId, amount: Amount) -> Result<(), RouterError>;
}
