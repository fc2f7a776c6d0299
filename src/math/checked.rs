//! Checked arithmetic for [`Amount`].
//!
//! The [`CheckedArithmetic`] trait lifts the `Option`-returning methods of
//! [`Amount`] into [`Result<Amount, RouterError>`](crate::error::RouterError)
//! so they compose with `?`.  [`mul_div`] is the one ratio primitive every
//! quote and liquidity computation is built on.
//!
//! # Examples
//!
//! ```
//! use hydra_router::domain::{Amount, Rounding};
//! use hydra_router::math::{mul_div, CheckedArithmetic};
//!
//! let sum = Amount::new(100).safe_add(&Amount::new(200));
//! assert_eq!(sum, Ok(Amount::new(300)));
//!
//! // 50 * 200 / 100, truncated
//! let optimal = mul_div(Amount::new(50), Amount::new(200), Amount::new(100), Rounding::Down);
//! assert_eq!(optimal, Ok(Amount::new(100)));
//! ```

use crate::domain::{Amount, Rounding};
use crate::error::RouterError;

/// Fallible arithmetic on amounts.
///
/// # Contract
///
/// - **No panics**: every error condition produces `Err`.
/// - **No saturation**: saturation hides bugs; errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Overflow`] on overflow.
    fn safe_add(&self, other: &Self) -> Result<Self, RouterError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Overflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, RouterError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Overflow`] on overflow.
    fn safe_mul(&self, other: &Self) -> Result<Self, RouterError>;

    /// Checked division with explicit [`Rounding`].
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, RouterError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, RouterError> {
        self.checked_add(other)
            .ok_or(RouterError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, RouterError> {
        self.checked_sub(other)
            .ok_or(RouterError::Overflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, RouterError> {
        self.checked_mul(other)
            .ok_or(RouterError::Overflow("amount multiplication overflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, RouterError> {
        self.checked_div(other, rounding)
            .ok_or(RouterError::DivisionByZero)
    }
}

/// Computes `a × b / c` with checked multiplication and explicit rounding.
///
/// The product is formed first, so the result is exact up to the final
/// division.  This is the ratio primitive behind liquidity quoting
/// (`desired × reserve_out / reserve_in`).
///
/// # Errors
///
/// - [`RouterError::Overflow`] if `a × b` does not fit in `u128`.
/// - [`RouterError::DivisionByZero`] if `c` is zero.
pub fn mul_div(a: Amount, b: Amount, c: Amount, rounding: Rounding) -> Result<Amount, RouterError> {
    if c.is_zero() {
        return Err(RouterError::DivisionByZero);
    }
    a.safe_mul(&b)?.safe_div(&c, rounding)
}
