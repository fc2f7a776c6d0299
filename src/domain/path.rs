//! Swap paths and their hops.

use core::fmt;

use super::AssetId;
use crate::error::{Result, RouterError};

/// One pairwise exchange of a [`Path`]: `asset_in → asset_out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hop {
    /// Position of the hop in its path, starting at 0.
    pub index: usize,
    /// Asset sold on this hop.
    pub asset_in: AssetId,
    /// Asset bought on this hop.
    pub asset_out: AssetId,
}

/// An ordered sequence of assets describing a chain of swaps from
/// `path[0]` to `path[len − 1]`.
///
/// # Invariants
///
/// - At least two assets.
/// - No two consecutive assets are equal, so every hop names a real pair.
///
/// Non-consecutive repeats (`A → B → A`) are allowed; whether a pool exists
/// for each hop is checked when the path is quoted.
///
/// # Examples
///
/// ```
/// use hydra_router::domain::{AssetId, Path};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
/// let c = AssetId::from_bytes([3u8; 32]);
///
/// let path = Path::new(vec![a, b, c]).expect("valid path");
/// assert_eq!(path.hop_count(), 2);
/// assert_eq!(path.first(), a);
/// assert_eq!(path.last(), c);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path(Vec<AssetId>);

impl Path {
    /// Builds a validated path.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidPath`] if fewer than two assets are given.
    /// - [`RouterError::DegenerateOrder`] if two consecutive assets are equal.
    pub fn new(assets: Vec<AssetId>) -> Result<Self> {
        if assets.len() < 2 {
            return Err(RouterError::InvalidPath("path needs at least two assets"));
        }
        if assets.windows(2).any(|w| w[0] == w[1]) {
            return Err(RouterError::DegenerateOrder);
        }
        Ok(Self(assets))
    }

    /// Convenience constructor for a single-hop path.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::DegenerateOrder`] if `from == to`.
    pub fn direct(from: AssetId, to: AssetId) -> Result<Self> {
        Self::new(vec![from, to])
    }

    /// Number of assets in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a validly constructed path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of hops (`len − 1`).
    #[must_use]
    pub fn hop_count(&self) -> usize {
        self.0.len() - 1
    }

    /// The asset the path starts from.
    #[must_use]
    pub fn first(&self) -> AssetId {
        self.0[0]
    }

    /// The asset the path delivers.
    #[must_use]
    pub fn last(&self) -> AssetId {
        self.0[self.0.len() - 1]
    }

    /// The assets in order.
    #[must_use]
    pub fn assets(&self) -> &[AssetId] {
        &self.0
    }

    /// Iterates the hops from source to destination.
    pub fn hops(&self) -> impl DoubleEndedIterator<Item = Hop> + ExactSizeIterator + '_ {
        self.0.windows(2).enumerate().map(|(index, w)| Hop {
            index,
            asset_in: w[0],
            asset_out: w[1],
        })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, asset) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{asset}")?;
        }
        Ok(())
    }
}
