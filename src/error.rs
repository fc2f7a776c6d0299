//! Unified error types for the router.
//!
//! Every fallible operation in the crate returns [`RouterError`].  Each
//! variant belongs to exactly one [`ErrorKind`], so callers can decide how
//! to react (re-quote, widen a slippage bound, report a defect) without
//! matching on every variant.
//!
//! Errors are never partial: an entrypoint that returns `Err` has rolled
//! the venue back to the state it had before the call.

use crate::domain::Amount;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, RouterError>;

/// Broad category of a [`RouterError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input: degenerate path, zero amount, identical pair assets.
    Validation,
    /// A caller-supplied bound was not met.
    Slippage,
    /// An internally asserted property failed.  Not user-recoverable.
    InvariantViolation,
    /// Checked integer arithmetic overflowed or divided by zero.
    Arithmetic,
    /// A pool, asset or registry call failed.
    ExternalCall,
}

/// The error type for every router operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    /// The swap path is malformed.
    #[error("invalid path: {0}")]
    InvalidPath(&'static str),

    /// An amount that must be non-zero was zero.
    #[error("zero amount: {0}")]
    ZeroAmount(&'static str),

    /// A pair was built from two identical assets.
    #[error("pair requires two distinct assets")]
    DegenerateOrder,

    /// No pool is registered for a hop of a swap path.
    #[error("no pool registered for pair")]
    PoolNotFound,

    /// Router or pool configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A native-currency entrypoint was given a path or pair that does not
    /// involve the wrapped-native asset where required.
    #[error("native asset mismatch: {0}")]
    NativeAssetMismatch(&'static str),

    /// The quoted path output is below the caller's minimum.
    #[error("insufficient output amount: quoted {quoted}, minimum {minimum}")]
    InsufficientOutputAmount {
        /// Output the path would deliver.
        quoted: Amount,
        /// Caller's minimum.
        minimum: Amount,
    },

    /// The quoted path input exceeds the caller's maximum.
    #[error("excessive input amount: required {required}, maximum {maximum}")]
    ExcessiveInputAmount {
        /// Input the path requires.
        required: Amount,
        /// Caller's maximum.
        maximum: Amount,
    },

    /// The ratio-optimal amount of asset A is below the caller's minimum.
    #[error("insufficient A amount: optimal {optimal}, minimum {minimum}")]
    InsufficientAAmount {
        /// Ratio-optimal amount of asset A.
        optimal: Amount,
        /// Caller's minimum for asset A.
        minimum: Amount,
    },

    /// The ratio-optimal amount of asset B is below the caller's minimum.
    #[error("insufficient B amount: optimal {optimal}, minimum {minimum}")]
    InsufficientBAmount {
        /// Ratio-optimal amount of asset B.
        optimal: Amount,
        /// Caller's minimum for asset B.
        minimum: Amount,
    },

    /// An internal monotonicity property failed.
    #[error("invariant violation: {0}")]
    InvariantViolation(&'static str),

    /// Checked arithmetic overflowed.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Checked division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A collaborator (pool, asset, registry) rejected the call.
    #[error("external call failed: {0}")]
    ExternalCallFailure(&'static str),
}

impl RouterError {
    /// Returns the category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPath(_)
            | Self::ZeroAmount(_)
            | Self::DegenerateOrder
            | Self::PoolNotFound
            | Self::InvalidConfiguration(_)
            | Self::NativeAssetMismatch(_) => ErrorKind::Validation,
            Self::InsufficientOutputAmount { .. }
            | Self::ExcessiveInputAmount { .. }
            | Self::InsufficientAAmount { .. }
            | Self::InsufficientBAmount { .. } => ErrorKind::Slippage,
            Self::InvariantViolation(_) => ErrorKind::InvariantViolation,
            Self::Overflow(_) | Self::DivisionByZero => ErrorKind::Arithmetic,
            Self::ExternalCallFailure(_) => ErrorKind::ExternalCall,
        }
    }

    /// Returns `true` if the caller can recover by adjusting its inputs
    /// (re-quoting, widening bounds, fixing the path).
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation | ErrorKind::Slippage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_categorized() {
        assert_eq!(RouterError::InvalidPath("x").kind(), ErrorKind::Validation);
        assert_eq!(RouterError::DegenerateOrder.kind(), ErrorKind::Validation);
        assert_eq!(RouterError::PoolNotFound.kind(), ErrorKind::Validation);
        assert_eq!(
            RouterError::NativeAssetMismatch("x").kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            RouterError::InsufficientOutputAmount {
                quoted: Amount::ZERO,
                minimum: Amount::new(1),
            }
            .kind(),
            ErrorKind::Slippage
        );
        assert_eq!(
            RouterError::InvariantViolation("x").kind(),
            ErrorKind::InvariantViolation
        );
        assert_eq!(RouterError::DivisionByZero.kind(), ErrorKind::Arithmetic);
        assert_eq!(
            RouterError::ExternalCallFailure("x").kind(),
            ErrorKind::ExternalCall
        );
    }

    #[test]
    fn recoverability() {
        assert!(RouterError::ZeroAmount("amount_in").is_recoverable());
        assert!(RouterError::ExcessiveInputAmount {
            required: Amount::new(2),
            maximum: Amount::new(1),
        }
        .is_recoverable());
        assert!(!RouterError::InvariantViolation("ratio").is_recoverable());
        assert!(!RouterError::ExternalCallFailure("pool").is_recoverable());
    }

    #[test]
    fn display_includes_amounts() {
        let e = RouterError::InsufficientBAmount {
            optimal: Amount::new(10),
            minimum: Amount::new(20),
        };
        assert_eq!(e.to_string(), "insufficient B amount: optimal 10, minimum 20");
    }
}
