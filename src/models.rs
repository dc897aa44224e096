//! Core data models for Crosstalk
//!
//! These models are used throughout the codebase for representing
//! normalized activity records, interaction events, and derived
//! overlap-analysis results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The `interaction_type` value stamped on every pair-connection row.
///
/// The output schema reserves the column for future interaction kinds
/// (cross-posts, mentions); today every row is derived from shared
/// multi-community membership.
pub const MULTI_COMMUNITY_USER: &str = "multi_community_user";

/// Role a user played in one observed activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityRole {
    /// Authored a top-level post
    PostAuthor,
    /// Commented on a post or another comment
    Commenter,
}

impl std::fmt::Display for ActivityRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityRole::PostAuthor => write!(f, "post_author"),
            ActivityRole::Commenter => write!(f, "commenter"),
        }
    }
}

/// One normalized activity record as produced by the upstream fetch client.
///
/// Body text, scores, and other metadata never reach the core; the storage
/// sink consumes those directly. `parent_author` and `created_utc` are only
/// present for comments that replied to an identifiable author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub author: String,
    pub community: String,
    pub role: ActivityRole,
    #[serde(default)]
    pub parent_author: Option<String>,
    #[serde(default)]
    pub created_utc: Option<i64>,
}

/// Kind of a recorded user-to-user interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    /// A comment replying to another user's post or comment
    Reply,
}

/// A directed interaction from the ledger owner to another user.
///
/// Immutable once recorded. Ledger order is arrival order, not
/// chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub target_user: String,
    pub community: String,
    pub timestamp: i64,
    pub kind: InteractionKind,
}

/// One pair-connection output row: a multi-community user bridging two
/// communities.
///
/// `community_a < community_b` under lexicographic order, so the unordered
/// pair appears exactly once per user. Rows are not aggregated across users;
/// several users sharing a pair produce several rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairConnection {
    pub user: String,
    pub community_a: String,
    pub community_b: String,
    pub interaction_type: String,
    /// Sum of the user's ledger entries in either community
    pub interaction_count: usize,
    pub first_interaction: Option<i64>,
    pub last_interaction: Option<i64>,
}

impl PairConnection {
    /// Build a row for one (user, canonical pair) combination.
    ///
    /// `first_interaction`/`last_interaction` are reserved columns and stay
    /// unset, matching the output schema.
    pub fn new(
        user: impl Into<String>,
        community_a: impl Into<String>,
        community_b: impl Into<String>,
        interaction_count: usize,
    ) -> Self {
        Self {
            user: user.into(),
            community_a: community_a.into(),
            community_b: community_b.into(),
            interaction_type: MULTI_COMMUNITY_USER.to_string(),
            interaction_count,
            first_interaction: None,
            last_interaction: None,
        }
    }
}

/// Derived statistics for one community
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityStats {
    pub community: String,
    pub total_users: usize,
    /// Members also active in at least one other community
    pub multi_community_users: usize,
    /// `multi_community_users / total_users`, kept at full precision here;
    /// reporters round to 3 decimals. Exactly 0.0 for an empty community.
    pub interconnection_ratio: f64,
    pub connected_communities_count: usize,
    /// Sorted list of communities reachable through shared users
    pub connected_communities: Vec<String>,
}

/// Full output of one analysis pass over a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlapReport {
    pub generated_at: DateTime<Utc>,
    pub total_communities: usize,
    pub total_users: usize,
    pub multi_community_users: usize,
    pub connections: Vec<PairConnection>,
    pub community_stats: Vec<CommunityStats>,
}
