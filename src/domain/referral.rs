//! Opaque referral identifier forwarded to pools.

/// Referral tag attached to a swap.
///
/// The router never interprets it; every hop of a path forwards the same
/// tag to [`Pool::execute_swap`](crate::traits::Pool::execute_swap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Referral([u8; 32]);

impl Referral {
    /// No referral.
    pub const NONE: Self = Self([0u8; 32]);

    /// Creates a referral tag from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns `true` for [`Referral::NONE`].
    #[must_use]
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}
