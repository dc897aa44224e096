//! Overlap analysis over an ingested session
//!
//! Both passes are full recomputations over current session state; nothing
//! is updated incrementally. Running them twice on an unmutated session
//! yields identical output.

mod overlap;
mod stats;

pub use overlap::pair_connections;
pub use stats::community_stats;

use crate::models::OverlapReport;
use crate::session::Session;
use chrono::Utc;
use tracing::info;

/// Run the full analysis: pair connections, community statistics, and
/// session-level summary counts.
pub fn analyze(session: &Session) -> OverlapReport {
    let connections = pair_connections(session);
    let community_stats = community_stats(session);

    let membership = session.membership();
    let multi_community_users = membership
        .all_users()
        .filter(|u| membership.is_multi_community(u))
        .count();

    info!(
        communities = membership.community_count(),
        users = membership.user_count(),
        multi_community_users,
        connections = connections.len(),
        "analysis complete"
    );

    OverlapReport {
        generated_at: Utc::now(),
        total_communities: membership.community_count(),
        total_users: membership.user_count(),
        multi_community_users,
        connections,
        community_stats,
    }
}
