//! Router configuration.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::domain::{AccountId, AssetId, Path};
use crate::error::RouterError;

/// Default upper bound on the number of assets in a swap path.
pub const DEFAULT_MAX_PATH_LEN: usize = 8;

fn default_max_path_len() -> usize {
    DEFAULT_MAX_PATH_LEN
}

/// Immutable parameters of a [`DexRouter`](crate::router::DexRouter).
///
/// # Fields
///
/// - `router_account`: custody account holding funds between hops.
/// - `wrapped_native`: the asset the native currency wraps into; native
///   entrypoints require paths to start or end here.
/// - `max_path_len`: longest accepted path, in assets.
///
/// # Validation
///
/// - `max_path_len` must be at least 2.
///
/// # TOML
///
/// ```toml
/// router_account = "0xeeee…"   # 64 hex digits
/// wrapped_native = "0x0909…"
/// max_path_len = 4             # optional, defaults to 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    router_account: AccountId,
    wrapped_native: AssetId,
    #[serde(default = "default_max_path_len")]
    max_path_len: usize,
}

impl RouterConfig {
    /// Creates a configuration with the default path length bound.
    #[must_use]
    pub const fn new(router_account: AccountId, wrapped_native: AssetId) -> Self {
        Self {
            router_account,
            wrapped_native,
            max_path_len: DEFAULT_MAX_PATH_LEN,
        }
    }

    /// Replaces the path length bound.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidConfiguration`] if `max_path_len < 2`.
    pub fn with_max_path_len(mut self, max_path_len: usize) -> Result<Self, RouterError> {
        self.max_path_len = max_path_len;
        self.validate()?;
        Ok(self)
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Parse`] for malformed TOML or identifiers.
    /// - [`ConfigError::Invalid`] if the parsed values fail validation.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Render`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidConfiguration`] if `max_path_len < 2`.
    pub const fn validate(&self) -> Result<(), RouterError> {
        if self.max_path_len < 2 {
            return Err(RouterError::InvalidConfiguration(
                "max_path_len must allow at least one hop",
            ));
        }
        Ok(())
    }

    /// Checks `path` against the length bound.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidPath`] if the path is too long.
    pub fn check_path(&self, path: &Path) -> Result<(), RouterError> {
        if path.len() > self.max_path_len {
            return Err(RouterError::InvalidPath("path exceeds maximum length"));
        }
        Ok(())
    }

    /// Returns the custody account.
    #[must_use]
    pub const fn router_account(&self) -> AccountId {
        self.router_account
    }

    /// Returns the wrapped-native asset.
    #[must_use]
    pub const fn wrapped_native(&self) -> AssetId {
        self.wrapped_native
    }

    /// Returns the path length bound.
    #[must_use]
    pub const fn max_path_len(&self) -> usize {
        self.max_path_len
    }
}
