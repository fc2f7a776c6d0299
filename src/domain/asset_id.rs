//! Chain-agnostic asset identifier.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouterError;

/// Identifier of a fungible asset.
///
/// Wraps a fixed-size `[u8; 32]`.  The derived `Ord` is byte-lexicographic
/// and is the total order used to canonicalize asset pairs, so it must
/// never change.
///
/// The textual form is `0x` followed by 64 hex digits.
///
/// # Examples
///
/// ```
/// use hydra_router::domain::AssetId;
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// let parsed: AssetId = usdc.to_string().parse().expect("round trip");
/// assert_eq!(parsed, usdc);
/// assert!(AssetId::from_bytes([0u8; 32]) < usdc);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetId(0x{})", hex::encode(self.0))
    }
}

impl FromStr for AssetId {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| RouterError::InvalidConfiguration("asset id must be 32 hex bytes"))?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for AssetId {
    type Error = RouterError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<AssetId> for String {
    fn from(id: AssetId) -> Self {
        id.to_string()
    }
}
