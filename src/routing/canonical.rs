//! Canonical slot order for an unordered asset pair.

use crate::domain::AssetId;
use crate::error::RouterError;

/// Deterministic ordering of two distinct assets.
///
/// For the unordered pair `{x, y}`, slot 0 always belongs to the smaller
/// [`AssetId`] and slot 1 to the larger.  Every two-element amount array
/// exchanged with a pool is laid out in this order, and this type is the
/// only place the ordering is decided.
///
/// `CanonicalOrder` also remembers which way round the caller named the
/// pair, so per-asset values can be moved into slot order
/// ([`canonicalize`](Self::canonicalize)) and back
/// ([`decanonicalize`](Self::decanonicalize)).
///
/// # Examples
///
/// ```
/// use hydra_router::domain::AssetId;
/// use hydra_router::routing::CanonicalOrder;
///
/// let weth = AssetId::from_bytes([9u8; 32]);
/// let usdc = AssetId::from_bytes([1u8; 32]);
///
/// let order = CanonicalOrder::new(weth, usdc).expect("distinct assets");
/// assert_eq!(order.first(), usdc);
///
/// // values given as (weth, usdc) land as [usdc, weth]
/// let slots = order.canonicalize(10u128, 20u128);
/// assert_eq!(slots, [20, 10]);
/// assert_eq!(order.decanonicalize(slots), (10, 20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalOrder {
    first: AssetId,
    second: AssetId,
    flipped: bool,
}

impl CanonicalOrder {
    /// Orders the pair `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::DegenerateOrder`] if `x == y`.
    pub fn new(x: AssetId, y: AssetId) -> Result<Self, RouterError> {
        if x == y {
            return Err(RouterError::DegenerateOrder);
        }
        let flipped = y < x;
        let (first, second) = if flipped { (y, x) } else { (x, y) };
        Ok(Self {
            first,
            second,
            flipped,
        })
    }

    /// The asset owning slot 0.
    #[must_use]
    pub const fn first(&self) -> AssetId {
        self.first
    }

    /// The asset owning slot 1.
    #[must_use]
    pub const fn second(&self) -> AssetId {
        self.second
    }

    /// Both assets in slot order.
    #[must_use]
    pub const fn assets(&self) -> [AssetId; 2] {
        [self.first, self.second]
    }

    /// `true` if the pair was given larger-first.
    #[must_use]
    pub const fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Moves `(v_x, v_y)`, indexed by the assets as given to
    /// [`new`](Self::new), into slot order.
    pub fn canonicalize<T>(&self, v_x: T, v_y: T) -> [T; 2] {
        if self.flipped {
            [v_y, v_x]
        } else {
            [v_x, v_y]
        }
    }

    /// Inverse of [`canonicalize`](Self::canonicalize): recovers
    /// `(v_x, v_y)` from slot-ordered values.
    pub fn decanonicalize<T>(&self, slots: [T; 2]) -> (T, T) {
        let [s0, s1] = slots;
        if self.flipped {
            (s1, s0)
        } else {
            (s0, s1)
        }
    }

    /// `true` if `asset` is one of the pair.
    #[must_use]
    pub fn contains(&self, asset: AssetId) -> bool {
        asset == self.first || asset == self.second
    }

    /// Slot index (0 or 1) owned by `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::ExternalCallFailure`] if `asset` is not part
    /// of the pair.
    pub fn slot_of(&self, asset: AssetId) -> Result<usize, RouterError> {
        if asset == self.first {
            Ok(0)
        } else if asset == self.second {
            Ok(1)
        } else {
            Err(RouterError::ExternalCallFailure("asset is not part of this pair"))
        }
    }

    /// The counterpart of `asset` in the pair.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::ExternalCallFailure`] if `asset` is not part
    /// of the pair.
    pub fn other(&self, asset: AssetId) -> Result<AssetId, RouterError> {
        match self.slot_of(asset)? {
            0 => Ok(self.second),
            _ => Ok(self.first),
        }
    }
}
