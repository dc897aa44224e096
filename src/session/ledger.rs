//! Append-only per-user interaction ledger
//!
//! Each entry records one directed reply from the ledger owner to another
//! user. Entries are kept in arrival order; timestamps are carried through
//! but never used for ordering.

use crate::models::InteractionEvent;
use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
pub struct InteractionLedger {
    entries: FxHashMap<String, Vec<InteractionEvent>>,
}

impl InteractionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to `source_user`'s ledger.
    pub fn record(&mut self, source_user: &str, event: InteractionEvent) {
        self.entries
            .entry(source_user.to_string())
            .or_default()
            .push(event);
    }

    /// All events for a user, empty for unseen users.
    pub fn events_of(&self, user: &str) -> &[InteractionEvent] {
        self.entries.get(user).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of the user's events that took place in `community`.
    ///
    /// Only the community field is inspected; the interaction's direction
    /// does not matter for weighting.
    pub fn count_in(&self, user: &str, community: &str) -> usize {
        self.events_of(user)
            .iter()
            .filter(|e| e.community == community)
            .count()
    }

    pub fn total_events(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
