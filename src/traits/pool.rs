//! Capability surface of a two-asset liquidity pool.
//!
//! The router never sees a pool's pricing curve.  It depends on [`Pool`]
//! by contract only:
//!
//! 1. **Reserve view**: [`Pool::addable_balance`] and
//!    [`Pool::removable_balance`] feed the liquidity ratio math.
//! 2. **Quotes**: [`Pool::projected_return`] (forward) and
//!    [`Pool::required_input`] (inverse) feed the quote engine.  Both are
//!    pure reads.
//! 3. **Mutations**: [`Pool::execute_swap`], [`Pool::provide_liquidity`]
//!    and [`Pool::remove_liquidity`] move funds through an
//!    [`AssetLedger`].
//!
//! # Quote Contract
//!
//! For any `amount_out` the pool can deliver:
//!
//! ```text
//! projected_return(a, b, required_input(a, b, amount_out)) >= amount_out
//! ```
//!
//! i.e. inverse quotes round in the pool's favour.  The router relies on
//! this to guarantee that an exact-output swap never delivers less than
//! requested.
//!
//! # Slot Order
//!
//! Two-element amount arrays passed to and returned from the liquidity
//! methods are in canonical slot order: slot 0 belongs to the smaller
//! [`AssetId`] (see [`CanonicalOrder`](crate::routing::CanonicalOrder)).

use super::AssetLedger;
use crate::domain::{AccountId, Amount, AssetId, SwapOrder};
use crate::error::RouterError;

/// A two-asset pool the router can quote against and trade through.
///
/// # Errors
///
/// Implementations report every failure as a [`RouterError`]; the usual
/// variants are [`RouterError::ExternalCallFailure`] for a rejected call
/// (unknown asset, minimum not met, insufficient reserves) and
/// [`RouterError::Overflow`] for arithmetic overflow.
pub trait Pool {
    /// The two assets of the pool, in canonical slot order.
    #[must_use]
    fn assets(&self) -> [AssetId; 2];

    /// The asset representing shares of this pool.
    #[must_use]
    fn share_asset(&self) -> AssetId;

    /// The ledger account holding the pool's reserves.
    ///
    /// Callers approve this account before asking the pool to pull funds.
    #[must_use]
    fn account(&self) -> AccountId;

    /// Reserve of `asset` as seen by a liquidity provider adding funds.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::ExternalCallFailure`] if `asset` is not in
    /// the pool.
    fn addable_balance(&self, asset: AssetId) -> Result<Amount, RouterError>;

    /// Reserve of `asset` as seen by a liquidity provider removing funds.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::ExternalCallFailure`] if `asset` is not in
    /// the pool.
    fn removable_balance(&self, asset: AssetId) -> Result<Amount, RouterError>;

    /// Output the pool would pay for `amount_in` of `asset_in`.
    ///
    /// Pure read.  May return zero when the input is too small to buy a
    /// single unit of output, or when the pool has no reserves.
    ///
    /// # Errors
    ///
    /// - [`RouterError::ExternalCallFailure`] if either asset is foreign.
    /// - [`RouterError::Overflow`] on arithmetic overflow.
    fn projected_return(
        &self,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
    ) -> Result<Amount, RouterError>;

    /// Input of `asset_in` needed to receive at least `amount_out` of
    /// `asset_out`.
    ///
    /// Pure read; the inverse of [`projected_return`](Self::projected_return)
    /// rounded in the pool's favour.
    ///
    /// # Errors
    ///
    /// - [`RouterError::ExternalCallFailure`] if either asset is foreign or
    ///   `amount_out` is not below the output reserve.
    /// - [`RouterError::Overflow`] on arithmetic overflow.
    fn required_input(
        &self,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_out: Amount,
    ) -> Result<Amount, RouterError>;

    /// Executes one swap, moving funds through `ledger`.
    ///
    /// Pulls `order.amount_in` from `order.payer` with `transfer_from`
    /// (the payer must have approved [`account`](Self::account)) and pays
    /// the output to `order.recipient`.
    ///
    /// # Returns
    ///
    /// The amount of `order.asset_out` actually paid.
    ///
    /// # Errors
    ///
    /// - [`RouterError::ExternalCallFailure`] if the output is below
    ///   `order.min_out` or any ledger transfer fails.
    /// - [`RouterError::Overflow`] on arithmetic overflow.
    fn execute_swap<L>(&mut self, ledger: &mut L, order: &SwapOrder) -> Result<Amount, RouterError>
    where
        L: AssetLedger + ?Sized;

    /// Deposits `amounts` (slot order) pulled from `provider` and mints
    /// shares to `provider`.
    ///
    /// The pool may deposit less than offered to preserve its ratio; it
    /// fails if it would deposit less than `min_amounts` in either slot.
    ///
    /// # Returns
    ///
    /// The number of shares minted.
    ///
    /// # Errors
    ///
    /// - [`RouterError::ExternalCallFailure`] if a minimum is not met or a
    ///   ledger operation fails.
    /// - [`RouterError::Overflow`] on arithmetic overflow.
    fn provide_liquidity<L>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        amounts: [Amount; 2],
        min_amounts: [Amount; 2],
    ) -> Result<Amount, RouterError>
    where
        L: AssetLedger + ?Sized;

    /// Burns `liquidity` shares held by `provider` and pays the
    /// proportional reserves to `provider`.
    ///
    /// # Returns
    ///
    /// The amounts paid, in slot order.
    ///
    /// # Errors
    ///
    /// - [`RouterError::ExternalCallFailure`] if a minimum is not met, the
    ///   provider holds too few shares, or a ledger operation fails.
    /// - [`RouterError::Overflow`] on arithmetic overflow.
    fn remove_liquidity<L>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        liquidity: Amount,
        min_amounts: [Amount; 2],
    ) -> Result<[Amount; 2], RouterError>
    where
        L: AssetLedger + ?Sized;
}
