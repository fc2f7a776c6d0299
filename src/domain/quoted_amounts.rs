//! Per-asset amounts along a quoted path.

use super::Amount;

/// The amount of each asset of a path, as produced by
/// [`QuoteEngine`](crate::routing::QuoteEngine).
///
/// `amounts[0]` is the path input and the last element the path output;
/// the length always equals the path length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuotedAmounts(Vec<Amount>);

impl QuotedAmounts {
    pub(crate) fn from_vec(amounts: Vec<Amount>) -> Self {
        Self(amounts)
    }

    /// Amount entering the path.
    #[must_use]
    pub fn first(&self) -> Amount {
        self.0.first().copied().unwrap_or(Amount::ZERO)
    }

    /// Amount leaving the path.
    #[must_use]
    pub fn last(&self) -> Amount {
        self.0.last().copied().unwrap_or(Amount::ZERO)
    }

    /// Amount at position `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Amount> {
        self.0.get(index).copied()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All entries in path order.
    #[must_use]
    pub fn as_slice(&self) -> &[Amount] {
        &self.0
    }

    /// `true` if any hop along the path is quoted at zero.
    #[must_use]
    pub fn has_zero_hop(&self) -> bool {
        self.0.iter().skip(1).any(Amount::is_zero)
    }
}

impl From<QuotedAmounts> for Vec<Amount> {
    fn from(q: QuotedAmounts) -> Self {
        q.0
    }
}
