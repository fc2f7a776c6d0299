//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_router::prelude::*;
//! ```

// Domain types
pub use crate::domain::{
    AccountId, Amount, AssetId, FeeTier, LiquidityAmounts, LiquidityRequest, Path, PoolId,
    QuotedAmounts, Referral, Rounding,
};

// Capability traits
pub use crate::traits::{AssetLedger, FromConfig, NativeCurrency, Pool, PoolRegistry, Venue};

// Math utilities
pub use crate::math::CheckedArithmetic;

// Configuration
pub use crate::config::{ConstantProductConfig, RouterConfig};

// Router
pub use crate::router::{
    AddLiquidityOutcome, DexRouter, ExactInSwap, ExactOutSwap, RemoveLiquidity, SwapOutcome,
};

// In-memory venue
pub use crate::memory::{InMemoryLedger, InMemoryRegistry, InMemoryVenue};

// Error types
pub use crate::error::{Result, RouterError};
