//! Direction of integer division.

/// How a quotient is rounded when the division is inexact.
///
/// Every quantity the router hands back to a caller is rounded against the
/// caller: outputs [`Down`](Self::Down), required inputs [`Up`](Self::Up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Toward positive infinity.
    Up,
    /// Toward zero.
    Down,
}

impl Rounding {
    /// `numerator / denominator` rounded in this direction, or `None` when
    /// `denominator` is zero.
    #[must_use]
    pub const fn divide(self, numerator: u128, denominator: u128) -> Option<u128> {
        if denominator == 0 {
            return None;
        }
        let quotient = numerator / denominator;
        match self {
            // a non-zero remainder implies quotient < u128::MAX
            Self::Up if numerator % denominator != 0 => Some(quotient + 1),
            Self::Up | Self::Down => Some(quotient),
        }
    }
}
