//! Analysis session state
//!
//! A `Session` owns the membership index and interaction ledger for one
//! run. The orchestrating caller constructs it explicitly and passes it by
//! reference to ingestion and analysis; nothing here is module-level state.
//! Single-threaded by design: ingestion completes before analysis starts,
//! and the bidirectional index invariant is not safe under unsynchronized
//! concurrent writes.

mod ledger;
mod membership;

pub use ledger::InteractionLedger;
pub use membership::MembershipIndex;

/// Accumulated state for one ingest-then-analyze run.
#[derive(Debug, Default)]
pub struct Session {
    membership: MembershipIndex,
    ledger: InteractionLedger,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn membership(&self) -> &MembershipIndex {
        &self.membership
    }

    pub fn membership_mut(&mut self) -> &mut MembershipIndex {
        &mut self.membership
    }

    pub fn ledger(&self) -> &InteractionLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut InteractionLedger {
        &mut self.ledger
    }
}
