//! Per-community interconnection statistics

use crate::models::CommunityStats;
use crate::session::Session;
use std::collections::BTreeSet;
use tracing::debug;

/// Compute statistics for every observed community, in lexicographic order.
///
/// Covers single-community communities too: they report a zero ratio and an
/// empty connected set. The ratio is exactly 0.0 for a community with no
/// users rather than an error.
pub fn community_stats(session: &Session) -> Vec<CommunityStats> {
    let membership = session.membership();

    let mut communities: Vec<&str> = membership.all_communities().collect();
    communities.sort_unstable();

    let mut stats = Vec::with_capacity(communities.len());
    for community in communities {
        let users = membership.users_of(community);

        let mut multi_count = 0;
        let mut connected: BTreeSet<&str> = BTreeSet::new();
        for user in users {
            if membership.is_multi_community(user) {
                multi_count += 1;
                connected.extend(
                    membership
                        .communities_of(user)
                        .iter()
                        .map(String::as_str)
                        .filter(|c| *c != community),
                );
            }
        }

        let ratio = if users.is_empty() {
            0.0
        } else {
            multi_count as f64 / users.len() as f64
        };
        debug!(community, total_users = users.len(), multi_count, "community stats");

        stats.push(CommunityStats {
            community: community.to_string(),
            total_users: users.len(),
            multi_community_users: multi_count,
            interconnection_ratio: ratio,
            connected_communities_count: connected.len(),
            connected_communities: connected.iter().map(|c| c.to_string()).collect(),
        });
    }
    stats
}
