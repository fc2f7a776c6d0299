//! The substrate a router call runs against.
//!
//! A [`Venue`] bundles one [`PoolRegistry`] and one ledger and makes every
//! router entrypoint atomic: the router takes a [`Venue::checkpoint`]
//! before its first mutation and calls [`Venue::rollback`] if anything
//! fails afterwards.  How the checkpoint is represented (a snapshot, a
//! journal, a storage transaction) is the venue's business.

use super::{AssetLedger, NativeCurrency, PoolRegistry};

/// Registry, ledger and atomicity for one unit of work.
pub trait Venue {
    /// Registry type.
    type Registry: PoolRegistry;
    /// Ledger type, also providing the native currency.
    type Ledger: AssetLedger + NativeCurrency;
    /// Opaque restore point.
    type Checkpoint;

    /// Shared access to the registry.
    #[must_use]
    fn registry(&self) -> &Self::Registry;

    /// Shared access to the ledger.
    #[must_use]
    fn ledger(&self) -> &Self::Ledger;

    /// Simultaneous exclusive access to registry and ledger.
    ///
    /// Pools live in the registry but move funds in the ledger, so a swap
    /// needs both at once.
    fn split_mut(&mut self) -> (&mut Self::Registry, &mut Self::Ledger);

    /// Records the current state.
    #[must_use]
    fn checkpoint(&self) -> Self::Checkpoint;

    /// Restores the state recorded by `checkpoint`, discarding every
    /// change made since.
    fn rollback(&mut self, checkpoint: Self::Checkpoint);
}
