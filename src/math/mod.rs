//! Checked integer arithmetic for quoting and liquidity math.
//!
//! All computation in the crate is integer arithmetic on `u128` with
//! explicit rounding.  Division truncates toward zero unless a caller asks
//! for [`Rounding::Up`](crate::domain::Rounding::Up); overflow is an error,
//! never a wrap or a saturation.

mod checked;

pub use checked::{mul_div, CheckedArithmetic};
