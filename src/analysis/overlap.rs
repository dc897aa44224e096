//! Cross-community overlap analysis
//!
//! Finds users active in more than one community and emits one
//! pair-connection row per (user, community pair), weighted by the user's
//! recorded interactions in either community of the pair.

use crate::models::PairConnection;
use crate::session::Session;
use tracing::{debug, info};

/// Enumerate pair-connection rows for every multi-community user.
///
/// Users are visited in lexicographic order and each user's communities are
/// already lexicographically ordered, so for every row `community_a <
/// community_b` and the output is deterministic for a given session. Rows
/// with zero interactions are still emitted; shared membership alone is a
/// connection. A pure read of session state: no failure modes, and
/// repeated runs over an unmutated session yield identical output.
pub fn pair_connections(session: &Session) -> Vec<PairConnection> {
    let membership = session.membership();
    let ledger = session.ledger();

    let mut multi_users: Vec<&str> = membership
        .all_users()
        .filter(|u| membership.is_multi_community(u))
        .collect();
    multi_users.sort_unstable();

    info!(
        multi_community_users = multi_users.len(),
        "analyzing community interconnections"
    );

    let mut rows = Vec::new();
    for user in multi_users {
        let communities: Vec<&String> = membership.communities_of(user).iter().collect();
        for (i, a) in communities.iter().enumerate() {
            for b in &communities[i + 1..] {
                let weight = ledger.count_in(user, a) + ledger.count_in(user, b);
                debug!(user, community_a = %a, community_b = %b, weight, "pair connection");
                rows.push(PairConnection::new(user, a.as_str(), b.as_str(), weight));
            }
        }
    }
    rows
}
