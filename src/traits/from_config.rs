//! Construction of pools from a validated configuration.
//!
//! [`FromConfig`] gives registries a uniform way to build a pool from its
//! blueprint without knowing the concrete constructor:
//!
//! ```text
//! InMemoryRegistry::create_pool(x, y)
//!     => ConstantProductConfig::new(pair, fee, account, share_asset)
//!     => ConstantProductPool::from_config(&config)
//! ```
//!
//! Implementations validate the configuration; a successfully constructed
//! pool is empty and ready to accept its first deposit.

use crate::error::RouterError;

/// Builds `Self` from a configuration of type `C`.
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidConfiguration`] (or a more specific
    /// variant) if the configuration is inconsistent.
    fn from_config(config: &C) -> Result<Self, RouterError>
    where
        Self: Sized;
}
