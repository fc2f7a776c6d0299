//! Entrypoint parameters and outcomes.

use crate::domain::{AccountId, Amount, AssetId, Path, PoolId, QuotedAmounts, Referral};

/// Swap an exact input along a path for at least `min_out`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactInSwap {
    /// Assets traded through, input first.
    pub path: Path,
    /// Exact amount of `path.first()` sold.
    pub amount_in: Amount,
    /// Least amount of `path.last()` accepted.
    pub min_out: Amount,
    /// Account receiving the output.
    pub recipient: AccountId,
    /// Forwarded to every pool, uninterpreted.
    pub referral: Referral,
}

impl ExactInSwap {
    /// Creates a swap with no referral.
    #[must_use]
    pub const fn new(path: Path, amount_in: Amount, min_out: Amount, recipient: AccountId) -> Self {
        Self {
            path,
            amount_in,
            min_out,
            recipient,
            referral: Referral::NONE,
        }
    }

    /// Sets the referral.
    #[must_use]
    pub fn with_referral(mut self, referral: Referral) -> Self {
        self.referral = referral;
        self
    }
}

/// Swap at most `max_in` along a path for an exact output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactOutSwap {
    /// Assets traded through, input first.
    pub path: Path,
    /// Exact amount of `path.last()` wanted.
    pub amount_out: Amount,
    /// Most amount of `path.first()` the caller will pay.  For native-input
    /// swaps this is also the native value attached to the call.
    pub max_in: Amount,
    /// Account receiving the output.
    pub recipient: AccountId,
    /// Forwarded to every pool, uninterpreted.
    pub referral: Referral,
}

impl ExactOutSwap {
    /// Creates a swap with no referral.
    #[must_use]
    pub const fn new(path: Path, amount_out: Amount, max_in: Amount, recipient: AccountId) -> Self {
        Self {
            path,
            amount_out,
            max_in,
            recipient,
            referral: Referral::NONE,
        }
    }

    /// Sets the referral.
    #[must_use]
    pub fn with_referral(mut self, referral: Referral) -> Self {
        self.referral = referral;
        self
    }
}

/// Result of a completed swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOutcome {
    /// Amount of the input asset taken from the caller.
    pub amount_in: Amount,
    /// Amount of the output asset delivered to the recipient.
    pub amount_out: Amount,
    /// The boundary quote the call was validated against.
    pub quoted: QuotedAmounts,
}

/// Burn pool shares of `{asset_a, asset_b}` for at least the given
/// minimums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemoveLiquidity {
    /// First asset, as the caller names it.
    pub asset_a: AssetId,
    /// Second asset, as the caller names it.
    pub asset_b: AssetId,
    /// Shares to burn.
    pub liquidity: Amount,
    /// Least amount of `asset_a` accepted.
    pub amount_a_min: Amount,
    /// Least amount of `asset_b` accepted.
    pub amount_b_min: Amount,
}

impl RemoveLiquidity {
    /// Creates a removal with zero minimums.
    #[must_use]
    pub const fn new(asset_a: AssetId, asset_b: AssetId, liquidity: Amount) -> Self {
        Self {
            asset_a,
            asset_b,
            liquidity,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
        }
    }

    /// Sets both minimums.
    #[must_use]
    pub const fn with_minimums(mut self, amount_a_min: Amount, amount_b_min: Amount) -> Self {
        self.amount_a_min = amount_a_min;
        self.amount_b_min = amount_b_min;
        self
    }
}

/// Result of a completed liquidity deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddLiquidityOutcome {
    /// Pool that received the deposit.
    pub pool: PoolId,
    /// Amount of asset A deposited.
    pub amount_a: Amount,
    /// Amount of asset B deposited.
    pub amount_b: Amount,
    /// Shares credited to the caller.
    pub liquidity: Amount,
}
