//! In-memory collaborators.
//!
//! Implementations of every capability trait, suitable for tests, demos
//! and simulations:
//!
//! - [`InMemoryLedger`]: [`AssetLedger`](crate::traits::AssetLedger) and
//!   [`NativeCurrency`](crate::traits::NativeCurrency) over ordered maps,
//!   with account freezing for fault injection.
//! - [`InMemoryRegistry`]: [`PoolRegistry`](crate::traits::PoolRegistry)
//!   creating [`ConstantProductPool`](crate::pools::ConstantProductPool)s
//!   on demand.
//! - [`InMemoryVenue`]: [`Venue`](crate::traits::Venue) with clone-based
//!   checkpoints.

mod ledger;
mod registry;
mod venue;

pub use ledger::InMemoryLedger;
pub use registry::InMemoryRegistry;
pub use venue::{InMemoryVenue, Snapshot};
