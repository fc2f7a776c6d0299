//! Snapshot-based in-memory venue.

use super::{InMemoryLedger, InMemoryRegistry};
use crate::traits::Venue;

/// Restore point of an [`InMemoryVenue`]: a full copy of its state.
#[derive(Debug, Clone)]
pub struct Snapshot {
    registry: InMemoryRegistry,
    ledger: InMemoryLedger,
}

/// An [`InMemoryRegistry`] and an [`InMemoryLedger`] forming one atomic
/// unit.
///
/// Checkpoints clone both halves; rollback swaps the clones back in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryVenue {
    registry: InMemoryRegistry,
    ledger: InMemoryLedger,
}

impl InMemoryVenue {
    /// Bundles `registry` and `ledger`.
    #[must_use]
    pub const fn new(registry: InMemoryRegistry, ledger: InMemoryLedger) -> Self {
        Self { registry, ledger }
    }

    /// Exclusive access to the registry, for seeding.
    pub fn registry_mut(&mut self) -> &mut InMemoryRegistry {
        &mut self.registry
    }

    /// Exclusive access to the ledger, for seeding and freezing accounts.
    pub fn ledger_mut(&mut self) -> &mut InMemoryLedger {
        &mut self.ledger
    }
}

impl Venue for InMemoryVenue {
    type Registry = InMemoryRegistry;
    type Ledger = InMemoryLedger;
    type Checkpoint = Snapshot;

    fn registry(&self) -> &InMemoryRegistry {
        &self.registry
    }

    fn ledger(&self) -> &InMemoryLedger {
        &self.ledger
    }

    fn split_mut(&mut self) -> (&mut InMemoryRegistry, &mut InMemoryLedger) {
        (&mut self.registry, &mut self.ledger)
    }

    fn checkpoint(&self) -> Snapshot {
        Snapshot {
            registry: self.registry.clone(),
            ledger: self.ledger.clone(),
        }
    }

    fn rollback(&mut self, checkpoint: Snapshot) {
        self.registry = checkpoint.registry;
        self.ledger = checkpoint.ledger;
    }
}
