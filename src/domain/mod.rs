//! Value types shared by the router and its collaborators.
//!
//! Identifiers ([`AssetId`], [`AccountId`], [`PoolId`], [`Referral`]),
//! the checked [`Amount`] with explicit [`Rounding`], swap [`Path`]s, and
//! the request/result records that flow between the routing components.

mod account_id;
mod amount;
mod asset_id;
mod fee_tier;
mod liquidity_request;
mod path;
mod pool_id;
mod quoted_amounts;
mod referral;
mod rounding;
mod swap_order;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use fee_tier::{FeeTier, BPS_DENOMINATOR};
pub use liquidity_request::{LiquidityAmounts, LiquidityRequest};
pub use path::{Hop, Path};
pub use pool_id::PoolId;
pub use quoted_amounts::QuotedAmounts;
pub use referral::Referral;
pub use rounding::Rounding;
pub use swap_order::SwapOrder;
