//! Swap and quote entrypoints.
//!
//! Every swap entrypoint follows the same shape:
//!
//! 1. Validate the path against the [`RouterConfig`] and, for native
//!    variants, the wrapped-native asset.
//! 2. Quote the path with [`QuoteEngine`] and enforce the caller's bound at
//!    the path boundary (`min_out` on the last element for exact-input,
//!    `max_in` on the first for exact-output).
//! 3. Inside one venue checkpoint: pull the input into custody, run
//!    [`PathRouter`], and forward native output if requested.
//!
//! Any failure in step 3 rolls the venue back, so a failed call moves no
//! funds.
//!
//! Quoting and execution see the same venue state within one call.
//! Between two calls nothing is guaranteed: a quote obtained with
//! [`DexRouter::quote_amounts_out`] may be stale by the time a swap runs,
//! and the caller's bound is the only protection.

use tracing::{debug, info, warn};

use super::params::{ExactInSwap, ExactOutSwap, SwapOutcome};
use crate::config::RouterConfig;
use crate::domain::{AccountId, Amount, AssetId, Path, QuotedAmounts};
use crate::error::RouterError;
use crate::math::CheckedArithmetic;
use crate::routing::{PathRouter, QuoteEngine};
use crate::traits::{AssetLedger, NativeCurrency, PoolRegistry, Venue};

/// How the caller pays for the first asset of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Funding {
    /// Pulled with `transfer_from`; the caller has approved the router.
    Allowance,
    /// Native value attached to the call, wrapped on entry.  Whatever is
    /// not used is refunded.
    Native {
        /// Value attached by the caller.
        attached: Amount,
    },
}

/// The router: stateless apart from its configuration.
///
/// All entrypoints borrow a [`Venue`] mutably for the duration of the call
/// and act on behalf of `caller`.  The caller authorizes the router's
/// custody account ([`RouterConfig::router_account`]) to pull assets with
/// `approve`; native value is attached by passing its amount.
///
/// # Examples
///
/// ```
/// use hydra_router::config::RouterConfig;
/// use hydra_router::domain::{AccountId, Amount, AssetId, FeeTier, LiquidityRequest, Path};
/// use hydra_router::memory::{InMemoryLedger, InMemoryRegistry, InMemoryVenue};
/// use hydra_router::router::{DexRouter, ExactInSwap};
/// use hydra_router::traits::AssetLedger;
///
/// let custody = AccountId::from_bytes([0xEE; 32]);
/// let alice = AccountId::from_bytes([0xA1; 32]);
/// let wnat = AssetId::from_bytes([0x09; 32]);
/// let usdc = AssetId::from_bytes([0x01; 32]);
/// let weth = AssetId::from_bytes([0x02; 32]);
///
/// let router = DexRouter::new(RouterConfig::new(custody, wnat));
/// let mut venue = InMemoryVenue::new(
///     InMemoryRegistry::new(FeeTier::TIER_0_30_PERCENT),
///     InMemoryLedger::new(wnat),
/// );
/// let ledger = venue.ledger_mut();
/// for asset in [usdc, weth] {
///     ledger.mint(asset, alice, Amount::new(2_000_000)).expect("mint");
///     ledger.approve(asset, alice, custody, Amount::new(2_000_000)).expect("approve");
/// }
///
/// let deposit = LiquidityRequest::new(usdc, weth, Amount::new(1_000_000), Amount::new(1_000_000));
/// router.add_liquidity(&mut venue, alice, &deposit).expect("deposit");
///
/// let path = Path::direct(usdc, weth).expect("distinct");
/// let swap = ExactInSwap::new(path, Amount::new(10_000), Amount::new(9_000), alice);
/// let outcome = router.swap_exact_in(&mut venue, alice, &swap).expect("swap");
/// assert_eq!(outcome.amount_out, outcome.quoted.last());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DexRouter {
    config: RouterConfig,
}

impl DexRouter {
    /// Creates a router with `config`.
    #[must_use]
    pub const fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub(super) const fn custody(&self) -> AccountId {
        self.config.router_account()
    }

    pub(super) const fn path_router(&self) -> PathRouter {
        PathRouter::new(self.config.router_account())
    }

    // -- quotes -----------------------------------------------------------------

    /// Forward quote of `path` for `amount_in`.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidPath`] if the path exceeds the configured
    ///   length.
    /// - Anything [`QuoteEngine::amounts_out`] returns.
    pub fn quote_amounts_out<R>(
        &self,
        registry: &R,
        amount_in: Amount,
        path: &Path,
    ) -> Result<QuotedAmounts, RouterError>
    where
        R: PoolRegistry + ?Sized,
    {
        self.config.check_path(path)?;
        QuoteEngine::new(registry).amounts_out(amount_in, path)
    }

    /// Inverse quote of `path` for `amount_out`.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidPath`] if the path exceeds the configured
    ///   length.
    /// - Anything [`QuoteEngine::amounts_in`] returns.
    pub fn quote_amounts_in<R>(
        &self,
        registry: &R,
        amount_out: Amount,
        path: &Path,
    ) -> Result<QuotedAmounts, RouterError>
    where
        R: PoolRegistry + ?Sized,
    {
        self.config.check_path(path)?;
        QuoteEngine::new(registry).amounts_in(amount_out, path)
    }

    // -- token swaps --------------------------------------------------------------

    /// Sells exactly `swap.amount_in` of `swap.path.first()` for at least
    /// `swap.min_out` of `swap.path.last()`.
    ///
    /// # Errors
    ///
    /// - [`RouterError::ZeroAmount`] if `amount_in` is zero.
    /// - [`RouterError::InsufficientOutputAmount`] if the quoted output, or
    ///   the output actually realized, is below `min_out`.  The two differ
    ///   when the path trades through the same pool more than once.
    /// - [`RouterError::PoolNotFound`] / [`RouterError::InvalidPath`] for a
    ///   bad path.
    /// - [`RouterError::ExternalCallFailure`] if a pool or ledger call
    ///   fails; the venue is rolled back.
    ///
    /// # Zero-output hops
    ///
    /// A hop whose pool would pay nothing is skipped and every later hop
    /// carries zero.  `min_out` is then the only guard: with
    /// `min_out = 0` the call succeeds, delivers nothing, and the input
    /// stays in the router's custody account.  Always pass a non-zero
    /// `min_out`.
    pub fn swap_exact_in<V: Venue>(
        &self,
        venue: &mut V,
        caller: AccountId,
        swap: &ExactInSwap,
    ) -> Result<SwapOutcome, RouterError> {
        self.exact_in(venue, caller, swap, Funding::Allowance, false, "swap_exact_in")
    }

    /// Buys exactly `swap.amount_out` of `swap.path.last()` for at most
    /// `swap.max_in` of `swap.path.first()`.
    ///
    /// # Errors
    ///
    /// - [`RouterError::ZeroAmount`] if `amount_out` is zero.
    /// - [`RouterError::ExcessiveInputAmount`] if the quoted input exceeds
    ///   `max_in`.
    /// - [`RouterError::InsufficientOutputAmount`] if execution realizes
    ///   less than `amount_out`, as on a path that trades through the same
    ///   pool more than once.
    /// - [`RouterError::ExternalCallFailure`] if a hop cannot deliver the
    ///   requested amount, or a pool or ledger call fails.
    pub fn swap_exact_out<V: Venue>(
        &self,
        venue: &mut V,
        caller: AccountId,
        swap: &ExactOutSwap,
    ) -> Result<SwapOutcome, RouterError> {
        self.exact_out(venue, caller, swap, false, false, "swap_exact_out")
    }

    // -- native swaps -------------------------------------------------------------

    /// Like [`swap_exact_in`](Self::swap_exact_in), paying with
    /// `swap.amount_in` of attached native value.
    ///
    /// # Errors
    ///
    /// As [`swap_exact_in`](Self::swap_exact_in), plus
    /// [`RouterError::NativeAssetMismatch`] if the path does not start at
    /// the wrapped-native asset.
    pub fn swap_exact_native_in<V: Venue>(
        &self,
        venue: &mut V,
        caller: AccountId,
        swap: &ExactInSwap,
    ) -> Result<SwapOutcome, RouterError> {
        let funding = Funding::Native {
            attached: swap.amount_in,
        };
        self.exact_in(venue, caller, swap, funding, false, "swap_exact_native_in")
    }

    /// Like [`swap_exact_out`](Self::swap_exact_out), paying with attached
    /// native value.
    ///
    /// `swap.max_in` is the value attached; the part not needed by the
    /// quote is refunded to `caller`.
    ///
    /// # Errors
    ///
    /// As [`swap_exact_out`](Self::swap_exact_out), plus
    /// [`RouterError::NativeAssetMismatch`] if the path does not start at
    /// the wrapped-native asset.
    pub fn swap_native_in_for_exact_out<V: Venue>(
        &self,
        venue: &mut V,
        caller: AccountId,
        swap: &ExactOutSwap,
    ) -> Result<SwapOutcome, RouterError> {
        self.exact_out(venue, caller, swap, true, false, "swap_native_in_for_exact_out")
    }

    /// Like [`swap_exact_in`](Self::swap_exact_in), delivering the output
    /// as native currency.
    ///
    /// # Errors
    ///
    /// As [`swap_exact_in`](Self::swap_exact_in), plus
    /// [`RouterError::NativeAssetMismatch`] if the path does not end at the
    /// wrapped-native asset.
    pub fn swap_exact_in_for_native<V: Venue>(
        &self,
        venue: &mut V,
        caller: AccountId,
        swap: &ExactInSwap,
    ) -> Result<SwapOutcome, RouterError> {
        self.exact_in(venue, caller, swap, Funding::Allowance, true, "swap_exact_in_for_native")
    }

    /// Like [`swap_exact_out`](Self::swap_exact_out), delivering the output
    /// as native currency.
    ///
    /// # Errors
    ///
    /// As [`swap_exact_out`](Self::swap_exact_out), plus
    /// [`RouterError::NativeAssetMismatch`] if the path does not end at the
    /// wrapped-native asset.
    pub fn swap_in_for_exact_native<V: Venue>(
        &self,
        venue: &mut V,
        caller: AccountId,
        swap: &ExactOutSwap,
    ) -> Result<SwapOutcome, RouterError> {
        self.exact_out(venue, caller, swap, false, true, "swap_in_for_exact_native")
    }

    // -- shared flow ----------------------------------------------------------------

    fn exact_in<V: Venue>(
        &self,
        venue: &mut V,
        caller: AccountId,
        swap: &ExactInSwap,
        funding: Funding,
        native_out: bool,
        operation: &'static str,
    ) -> Result<SwapOutcome, RouterError> {
        let native_in = matches!(funding, Funding::Native { .. });
        self.check_native_path(&swap.path, native_in, native_out)?;
        if swap.amount_in.is_zero() {
            return Err(RouterError::ZeroAmount("amount_in"));
        }

        let quoted = self.quote_amounts_out(venue.registry(), swap.amount_in, &swap.path)?;
        if quoted.last() < swap.min_out {
            return Err(RouterError::InsufficientOutputAmount {
                quoted: quoted.last(),
                minimum: swap.min_out,
            });
        }
        if quoted.has_zero_hop() {
            warn!(operation, path = %swap.path, "quoted path contains a zero-output hop");
        }

        let hop_recipient = if native_out {
            self.custody()
        } else {
            swap.recipient
        };
        let amount_out = Self::atomic(venue, operation, |venue| {
            let (registry, ledger) = venue.split_mut();
            self.fund(ledger, caller, swap.path.first(), swap.amount_in, funding)?;
            let out = self.path_router().execute(
                registry,
                ledger,
                &swap.path,
                swap.amount_in,
                hop_recipient,
                swap.referral,
            )?;
            // a path that revisits a pool realizes less than its quote
            Self::check_realized(out, swap.min_out)?;
            if native_out {
                self.deliver(ledger, swap.path.last(), out, swap.recipient, true)?;
            }
            Ok(out)
        })?;

        info!(
            operation,
            path = %swap.path,
            amount_in = %swap.amount_in,
            %amount_out,
            recipient = %swap.recipient,
            "swap completed"
        );
        Ok(SwapOutcome {
            amount_in: swap.amount_in,
            amount_out,
            quoted,
        })
    }

    fn exact_out<V: Venue>(
        &self,
        venue: &mut V,
        caller: AccountId,
        swap: &ExactOutSwap,
        native_in: bool,
        native_out: bool,
        operation: &'static str,
    ) -> Result<SwapOutcome, RouterError> {
        self.check_native_path(&swap.path, native_in, native_out)?;
        if swap.amount_out.is_zero() {
            return Err(RouterError::ZeroAmount("amount_out"));
        }

        let quoted = self.quote_amounts_in(venue.registry(), swap.amount_out, &swap.path)?;
        let amount_in = quoted.first();
        if amount_in > swap.max_in {
            return Err(RouterError::ExcessiveInputAmount {
                required: amount_in,
                maximum: swap.max_in,
            });
        }

        let funding = if native_in {
            Funding::Native {
                attached: swap.max_in,
            }
        } else {
            Funding::Allowance
        };
        let hop_recipient = if native_out {
            self.custody()
        } else {
            swap.recipient
        };
        let amount_out = Self::atomic(venue, operation, |venue| {
            let (registry, ledger) = venue.split_mut();
            self.fund(ledger, caller, swap.path.first(), amount_in, funding)?;
            let out = self.path_router().execute(
                registry,
                ledger,
                &swap.path,
                amount_in,
                hop_recipient,
                swap.referral,
            )?;
            Self::check_realized(out, swap.amount_out)?;
            if native_out {
                self.deliver(ledger, swap.path.last(), out, swap.recipient, true)?;
            }
            Ok(out)
        })?;

        info!(
            operation,
            path = %swap.path,
            %amount_in,
            %amount_out,
            recipient = %swap.recipient,
            "swap completed"
        );
        Ok(SwapOutcome {
            amount_in,
            amount_out,
            quoted,
        })
    }

    /// Holds the executed output to the caller's bound.
    fn check_realized(out: Amount, minimum: Amount) -> Result<(), RouterError> {
        if out < minimum {
            return Err(RouterError::InsufficientOutputAmount {
                quoted: out,
                minimum,
            });
        }
        Ok(())
    }

    /// Runs `body` inside a venue checkpoint, rolling back on error.
    pub(super) fn atomic<V, T, F>(venue: &mut V, operation: &'static str, body: F) -> Result<T, RouterError>
    where
        V: Venue,
        F: FnOnce(&mut V) -> Result<T, RouterError>,
    {
        let checkpoint = venue.checkpoint();
        match body(venue) {
            Ok(value) => Ok(value),
            Err(error) => {
                venue.rollback(checkpoint);
                warn!(operation, %error, "call failed, venue rolled back");
                Err(error)
            }
        }
    }

    fn check_native_path(&self, path: &Path, native_in: bool, native_out: bool) -> Result<(), RouterError> {
        self.config.check_path(path)?;
        if native_in && path.first() != self.config.wrapped_native() {
            return Err(RouterError::NativeAssetMismatch(
                "path must start at the wrapped-native asset",
            ));
        }
        if native_out && path.last() != self.config.wrapped_native() {
            return Err(RouterError::NativeAssetMismatch(
                "path must end at the wrapped-native asset",
            ));
        }
        Ok(())
    }

    fn ensure_wrapped<L>(&self, ledger: &L) -> Result<(), RouterError>
    where
        L: NativeCurrency + ?Sized,
    {
        if ledger.wrapped_asset() != self.config.wrapped_native() {
            return Err(RouterError::InvalidConfiguration(
                "router and ledger disagree on the wrapped-native asset",
            ));
        }
        Ok(())
    }

    /// Moves `amount` of `asset` from `caller` into custody.
    pub(super) fn fund<L>(
        &self,
        ledger: &mut L,
        caller: AccountId,
        asset: AssetId,
        amount: Amount,
        funding: Funding,
    ) -> Result<(), RouterError>
    where
        L: AssetLedger + NativeCurrency + ?Sized,
    {
        let custody = self.custody();
        match funding {
            Funding::Allowance => ledger.transfer_from(asset, custody, caller, custody, amount),
            Funding::Native { attached } => {
                self.ensure_wrapped(ledger)?;
                if amount > attached {
                    return Err(RouterError::ExcessiveInputAmount {
                        required: amount,
                        maximum: attached,
                    });
                }
                ledger.transfer_native(caller, custody, attached)?;
                ledger.wrap(custody, amount)?;
                let refund = attached.safe_sub(&amount)?;
                if !refund.is_zero() {
                    ledger.transfer_native(custody, caller, refund)?;
                    debug!(%caller, %refund, "unused native value refunded");
                }
                Ok(())
            }
        }
    }

    /// Pays `amount` of `asset` out of custody, unwrapping first when
    /// `native` is set.
    pub(super) fn deliver<L>(
        &self,
        ledger: &mut L,
        asset: AssetId,
        amount: Amount,
        recipient: AccountId,
        native: bool,
    ) -> Result<(), RouterError>
    where
        L: AssetLedger + NativeCurrency + ?Sized,
    {
        if amount.is_zero() {
            return Ok(());
        }
        let custody = self.custody();
        if native {
            self.ensure_wrapped(ledger)?;
            ledger.unwrap(custody, amount)?;
            ledger.transfer_native(custody, recipient, amount)
        } else {
            ledger.transfer(asset, custody, recipient, amount)
        }
    }
}
