//! Ratio-respecting liquidity amounts.
//!
//! A deposit into a pool with reserves must match the reserve ratio, or
//! the depositor donates value to existing share holders.  Given the
//! caller's desired and minimum amounts, [`LiquidityQuoter`] picks the
//! largest deposit that fits the ratio without exceeding either desired
//! amount.
//!
//! # Policy
//!
//! ```text
//! reserves (0, 0)             => (a_desired, b_desired)
//! b_opt = a_desired * rB / rA
//! b_opt <= b_desired          => (a_desired, b_opt)      require b_opt >= b_min
//! otherwise
//!   a_opt = b_desired * rA / rB                          require a_opt <= a_desired
//!                             => (a_opt, b_desired)      require a_opt >= a_min
//! ```
//!
//! Both divisions truncate toward zero.

use tracing::debug;

use crate::domain::{Amount, LiquidityAmounts, LiquidityRequest, PoolId, Rounding};
use crate::error::RouterError;
use crate::math::mul_div;
use crate::traits::{Pool, PoolRegistry};

/// Computes deposit amounts for liquidity provision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LiquidityQuoter;

impl LiquidityQuoter {
    /// Fits `request` to the reserves `(reserve_a, reserve_b)`, given in
    /// the request's asset order.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InsufficientBAmount`] if the ratio-optimal B is
    ///   below `amount_b_min`.
    /// - [`RouterError::InsufficientAAmount`] if the ratio-optimal A is
    ///   below `amount_a_min`.
    /// - [`RouterError::InvariantViolation`] if the flipped branch yields
    ///   more A than desired.
    /// - [`RouterError::DivisionByZero`] if only `reserve_a` is zero, and
    ///   [`RouterError::Overflow`] on overflow.
    pub fn optimal_amounts(
        reserve_a: Amount,
        reserve_b: Amount,
        request: &LiquidityRequest,
    ) -> Result<LiquidityAmounts, RouterError> {
        let LiquidityRequest {
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
            ..
        } = *request;

        if reserve_a.is_zero() && reserve_b.is_zero() {
            return Ok(LiquidityAmounts {
                amount_a: amount_a_desired,
                amount_b: amount_b_desired,
            });
        }

        let amount_b_optimal = mul_div(amount_a_desired, reserve_b, reserve_a, Rounding::Down)?;
        if amount_b_optimal <= amount_b_desired {
            if amount_b_optimal < amount_b_min {
                return Err(RouterError::InsufficientBAmount {
                    optimal: amount_b_optimal,
                    minimum: amount_b_min,
                });
            }
            return Ok(LiquidityAmounts {
                amount_a: amount_a_desired,
                amount_b: amount_b_optimal,
            });
        }

        let amount_a_optimal = mul_div(amount_b_desired, reserve_a, reserve_b, Rounding::Down)?;
        if amount_a_optimal > amount_a_desired {
            return Err(RouterError::InvariantViolation(
                "optimal A exceeds desired A after ratio flip",
            ));
        }
        if amount_a_optimal < amount_a_min {
            return Err(RouterError::InsufficientAAmount {
                optimal: amount_a_optimal,
                minimum: amount_a_min,
            });
        }
        Ok(LiquidityAmounts {
            amount_a: amount_a_optimal,
            amount_b: amount_b_desired,
        })
    }

    /// Resolves (creating if needed) the pool for the request's pair and
    /// fits the request to its reserves.
    ///
    /// The reserve of asset A is read with
    /// [`Pool::addable_balance`] and that of asset B with
    /// [`Pool::removable_balance`].
    ///
    /// # Errors
    ///
    /// - [`RouterError::DegenerateOrder`] / [`RouterError::ZeroAmount`] for
    ///   a malformed request.
    /// - Anything [`optimal_amounts`](Self::optimal_amounts) or the registry
    ///   returns.
    pub fn quote<R>(
        registry: &mut R,
        request: &LiquidityRequest,
    ) -> Result<(PoolId, LiquidityAmounts), RouterError>
    where
        R: PoolRegistry + ?Sized,
    {
        request.validate()?;
        let id = registry.resolve_or_create(request.asset_a, request.asset_b)?;
        let pool = registry.pool(id)?;
        let reserve_a = pool.addable_balance(request.asset_a)?;
        let reserve_b = pool.removable_balance(request.asset_b)?;

        let amounts = Self::optimal_amounts(reserve_a, reserve_b, request)?;
        debug!(
            pool = %id,
            %reserve_a,
            %reserve_b,
            amount_a = %amounts.amount_a,
            amount_b = %amounts.amount_b,
            "liquidity quoted"
        );
        Ok((id, amounts))
    }

    /// Like [`quote`](Self::quote) but never creates a pool: a pair with
    /// no pool is quoted as empty.
    ///
    /// # Errors
    ///
    /// Same as [`quote`](Self::quote), minus registry creation failures.
    pub fn preview<R>(registry: &R, request: &LiquidityRequest) -> Result<LiquidityAmounts, RouterError>
    where
        R: PoolRegistry + ?Sized,
    {
        request.validate()?;
        let (reserve_a, reserve_b) = match registry.resolve_pool(request.asset_a, request.asset_b) {
            Some(id) => {
                let pool = registry.pool(id)?;
                (
                    pool.addable_balance(request.asset_a)?,
                    pool.removable_balance(request.asset_b)?,
                )
            }
            None => (Amount::ZERO, Amount::ZERO),
        };
        Self::optimal_amounts(reserve_a, reserve_b, request)
    }
}
