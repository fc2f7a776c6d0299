//! Router and pool configuration.
//!
//! - [`RouterConfig`] holds the parameters of a
//!   [`DexRouter`](crate::router::DexRouter) and can be loaded from TOML.
//! - [`ConstantProductConfig`] is the blueprint the in-memory registry
//!   hands to [`FromConfig`](crate::traits::FromConfig) when it creates a
//!   pool.
//!
//! Loading errors are reported as [`ConfigError`]; validation failures on
//! already-typed values use [`RouterError`].

mod constant_product;
mod router;

pub use constant_product::ConstantProductConfig;
pub use router::{RouterConfig, DEFAULT_MAX_PATH_LEN};

use crate::error::RouterError;

/// Error loading a configuration document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid TOML or does not match the schema.
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered.
    #[error("render error: {0}")]
    Render(#[from] toml::ser::Error),

    /// The document parsed but its values are inconsistent.
    #[error("validation error: {0}")]
    Invalid(#[from] RouterError),
}
