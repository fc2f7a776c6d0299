//! Reference pool implementations.
//!
//! The router depends on pools only through [`Pool`](crate::traits::Pool);
//! the implementations here exist so the router can be exercised end to
//! end.
//!
//! # Pool Types
//!
//! | Pool | Style | Blueprint |
//! |------|-------|-----------|
//! | [`ConstantProductPool`] | Uniswap V2 | [`ConstantProductConfig`](crate::config::ConstantProductConfig) |

pub mod constant_product;

pub use constant_product::ConstantProductPool;
