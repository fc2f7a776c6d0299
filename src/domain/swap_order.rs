//! Instruction passed to a pool for one executed hop.

use super::{AccountId, Amount, AssetId, Referral};

/// Everything a [`Pool`](crate::traits::Pool) needs to execute one swap.
///
/// The pool pulls `amount_in` of `asset_in` from `payer` (which must have
/// approved the pool's account beforehand), and pays the output to
/// `recipient`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapOrder {
    /// Asset sold.
    pub asset_in: AssetId,
    /// Asset bought.
    pub asset_out: AssetId,
    /// Exact amount of `asset_in` pulled from `payer`.
    pub amount_in: Amount,
    /// Least output the pool may deliver.
    pub min_out: Amount,
    /// Account funding the swap.
    pub payer: AccountId,
    /// Account receiving the output.
    pub recipient: AccountId,
    /// Opaque referral tag.
    pub referral: Referral,
}
