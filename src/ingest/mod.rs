//! Observation ingestor
//!
//! The boundary between raw activity records and session state. All
//! validation happens here: malformed observations are rejected with an
//! explicit error the caller can log-and-skip or abort on, and sentinel
//! (deleted/anonymous) users make the call a silent no-op. Once records
//! pass this boundary the analyzer can assume a well-formed index.

use crate::models::{ActivityRecord, ActivityRole, InteractionEvent, InteractionKind};
use crate::session::Session;
use thiserror::Error;
use tracing::debug;

/// Default sentinel values marking deleted or anonymized authors
pub const DEFAULT_SENTINELS: &[&str] = &["[deleted]", "[removed]"];

/// Errors raised at the ingestion boundary
#[derive(Error, Debug)]
pub enum IngestError {
    /// The record is structurally present but unusable (empty author or
    /// community). The record is dropped; the caller decides visibility.
    #[error("invalid observation: {0}")]
    InvalidObservation(String),
}

/// What happened to one ingested item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Recorded,
    /// The author (or, for interactions, either end) was a sentinel
    SkippedSentinel,
}

/// Running totals for one ingestion pass
#[derive(Debug, Default, Clone)]
pub struct IngestStats {
    pub records: usize,
    pub activities_recorded: usize,
    pub interactions_recorded: usize,
    pub skipped_sentinel: usize,
    pub invalid: usize,
    pub malformed: usize,
}

impl IngestStats {
    pub fn summary(&self) -> String {
        format!(
            "{} records ({} activities, {} interactions, {} sentinel-skipped, {} invalid, {} malformed)",
            self.records,
            self.activities_recorded,
            self.interactions_recorded,
            self.skipped_sentinel,
            self.invalid,
            self.malformed
        )
    }
}

/// Applies activity records to a session.
///
/// Holds only the sentinel configuration; the session is owned by the
/// caller and passed by reference to every call.
#[derive(Debug)]
pub struct Ingestor {
    sentinels: Vec<String>,
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::new()
    }
}

impl Ingestor {
    pub fn new() -> Self {
        Self {
            sentinels: DEFAULT_SENTINELS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_sentinels(sentinels: Vec<String>) -> Self {
        Self { sentinels }
    }

    fn is_sentinel(&self, name: &str) -> bool {
        self.sentinels.iter().any(|s| s == name)
    }

    /// Record that `user` was active in `community`.
    ///
    /// Sentinel users are skipped without error. Repeated calls with the
    /// same pair are no-ops on the index, though each call represents one
    /// activity instance.
    pub fn record_activity(
        &self,
        session: &mut Session,
        user: &str,
        community: &str,
        role: ActivityRole,
    ) -> Result<Outcome, IngestError> {
        if user.is_empty() {
            return Err(IngestError::InvalidObservation("empty author".into()));
        }
        if community.is_empty() {
            return Err(IngestError::InvalidObservation("empty community".into()));
        }
        if self.is_sentinel(user) {
            return Ok(Outcome::SkippedSentinel);
        }
        debug!(user, community, %role, "recording activity");
        session.membership_mut().add(user, community);
        Ok(Outcome::Recorded)
    }

    /// Record a directed reply from `source_user` to `target_user`.
    ///
    /// Skipped when either end is a sentinel. Does not imply
    /// `record_activity`; callers ingesting raw records do both.
    pub fn record_interaction(
        &self,
        session: &mut Session,
        source_user: &str,
        target_user: &str,
        community: &str,
        timestamp: i64,
    ) -> Result<Outcome, IngestError> {
        if source_user.is_empty() || target_user.is_empty() {
            return Err(IngestError::InvalidObservation("empty interaction user".into()));
        }
        if community.is_empty() {
            return Err(IngestError::InvalidObservation("empty community".into()));
        }
        if self.is_sentinel(source_user) || self.is_sentinel(target_user) {
            return Ok(Outcome::SkippedSentinel);
        }
        session.ledger_mut().record(
            source_user,
            InteractionEvent {
                target_user: target_user.to_string(),
                community: community.to_string(),
                timestamp,
                kind: InteractionKind::Reply,
            },
        );
        Ok(Outcome::Recorded)
    }

    /// Apply one normalized record: membership always, plus an interaction
    /// when the record carries a usable reply target and timestamp.
    pub fn ingest_record(
        &self,
        session: &mut Session,
        record: &ActivityRecord,
        stats: &mut IngestStats,
    ) -> Result<(), IngestError> {
        stats.records += 1;
        match self.record_activity(session, &record.author, &record.community, record.role) {
            Ok(Outcome::Recorded) => stats.activities_recorded += 1,
            Ok(Outcome::SkippedSentinel) => stats.skipped_sentinel += 1,
            Err(e) => {
                stats.invalid += 1;
                return Err(e);
            }
        }

        if let (Some(parent), Some(ts)) = (&record.parent_author, record.created_utc) {
            if !parent.is_empty() {
                match self.record_interaction(
                    session,
                    &record.author,
                    parent,
                    &record.community,
                    ts,
                )? {
                    Outcome::Recorded => stats.interactions_recorded += 1,
                    Outcome::SkippedSentinel => {}
                }
            }
        }
        Ok(())
    }
}
