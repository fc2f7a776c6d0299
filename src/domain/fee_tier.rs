//! Pool swap fee expressed in basis points.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::{Result, RouterError};

/// Basis-point denominator (10 000 bp = 100%).
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Fee charged on the input side of every swap, in basis points.
///
/// A valid tier is strictly below 100%: a pool that keeps the entire input
/// can never produce output, and its inverse quote is undefined.
///
/// # Examples
///
/// ```
/// use hydra_router::domain::{Amount, FeeTier, Rounding};
///
/// let tier = FeeTier::TIER_0_30_PERCENT;
/// assert_eq!(tier.apply(Amount::new(10_000), Rounding::Up), Ok(Amount::new(30)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FeeTier(u32);

impl FeeTier {
    /// No fee.
    pub const ZERO: Self = Self(0);

    /// 0.05% fee (5 bp).
    pub const TIER_0_05_PERCENT: Self = Self(5);

    /// 0.30% fee (30 bp).
    pub const TIER_0_30_PERCENT: Self = Self(30);

    /// 1.00% fee (100 bp).
    pub const TIER_1_00_PERCENT: Self = Self(100);

    /// Creates a fee tier from raw basis points.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidConfiguration`] if `bps` is 100% or more.
    pub const fn new(bps: u32) -> Result<Self> {
        if bps >= BPS_DENOMINATOR {
            return Err(RouterError::InvalidConfiguration(
                "fee tier must be below 100%",
            ));
        }
        Ok(Self(bps))
    }

    /// Returns the raw basis points.
    #[must_use]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns `10 000 − bps`, the share of the input that reaches the curve.
    #[must_use]
    pub const fn complement(&self) -> u32 {
        BPS_DENOMINATOR - self.0
    }

    /// Computes `amount × bps / 10 000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Overflow`] if the multiplication overflows.
    pub const fn apply(&self, amount: Amount, rounding: Rounding) -> Result<Amount> {
        let Some(product) = amount.get().checked_mul(self.0 as u128) else {
            return Err(RouterError::Overflow("fee product overflow"));
        };
        let denominator = BPS_DENOMINATOR as u128;
        let q = product / denominator;
        match rounding {
            Rounding::Up if product % denominator != 0 => Ok(Amount::new(q + 1)),
            _ => Ok(Amount::new(q)),
        }
    }
}

impl TryFrom<u32> for FeeTier {
    type Error = RouterError;

    fn try_from(bps: u32) -> Result<Self> {
        Self::new(bps)
    }
}

impl From<FeeTier> for u32 {
    fn from(tier: FeeTier) -> Self {
        tier.0
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bp", self.0)
    }
}
