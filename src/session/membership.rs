//! Bidirectional user/community membership index
//!
//! Both directions of the mapping are updated inside a single mutation
//! entry point so they cannot diverge: `u ∈ users_of(c)` holds exactly when
//! `c ∈ communities_of(u)`. Lookups on unseen keys behave as empty sets.

use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

static EMPTY: BTreeSet<String> = BTreeSet::new();

/// In-memory user↔community index.
///
/// Communities are created implicitly on first observed activity. There is
/// no removal operation; the index only grows during a session. Sets are
/// ordered so enumeration is deterministic without extra sorting.
#[derive(Debug, Default)]
pub struct MembershipIndex {
    user_communities: FxHashMap<String, BTreeSet<String>>,
    community_users: FxHashMap<String, BTreeSet<String>>,
}

impl MembershipIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `user` was active in `community`.
    ///
    /// The only mutation entry point; both directions are inserted here.
    /// Idempotent: repeating a pair leaves the index unchanged.
    pub fn add(&mut self, user: &str, community: &str) {
        self.user_communities
            .entry(user.to_string())
            .or_default()
            .insert(community.to_string());
        self.community_users
            .entry(community.to_string())
            .or_default()
            .insert(user.to_string());
    }

    /// Communities the user has been seen in (empty for unseen users)
    pub fn communities_of(&self, user: &str) -> &BTreeSet<String> {
        self.user_communities.get(user).unwrap_or(&EMPTY)
    }

    /// Users seen in the community (empty for unseen communities)
    pub fn users_of(&self, community: &str) -> &BTreeSet<String> {
        self.community_users.get(community).unwrap_or(&EMPTY)
    }

    /// Whether the user has been active in more than one community
    pub fn is_multi_community(&self, user: &str) -> bool {
        self.communities_of(user).len() > 1
    }

    pub fn all_users(&self) -> impl Iterator<Item = &str> {
        self.user_communities.keys().map(String::as_str)
    }

    pub fn all_communities(&self) -> impl Iterator<Item = &str> {
        self.community_users.keys().map(String::as_str)
    }

    pub fn user_count(&self) -> usize {
        self.user_communities.len()
    }

    pub fn community_count(&self) -> usize {
        self.community_users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_maintains_both_directions() {
        let mut index = MembershipIndex::new();
        index.add("u1", "alpha");
        index.add("u1", "beta");
        index.add("u2", "alpha");

        assert!(index.communities_of("u1").contains("alpha"));
        assert!(index.communities_of("u1").contains("beta"));
        assert!(index.users_of("alpha").contains("u1"));
        assert!(index.users_of("alpha").contains("u2"));
        assert!(index.users_of("beta").contains("u1"));
        assert!(!index.users_of("beta").contains("u2"));
    }

    #[test]
    fn bidirectional_invariant_holds_for_every_entry() {
        let mut index = MembershipIndex::new();
        for (u, c) in [("u1", "a"), ("u1", "b"), ("u2", "b"), ("u3", "c")] {
            index.add(u, c);
        }
        for user in index.all_users().map(str::to_string).collect::<Vec<_>>() {
            for community in index.communities_of(&user) {
                assert!(index.users_of(community).contains(&user));
            }
        }
        for community in index.all_communities().map(str::to_string).collect::<Vec<_>>() {
            for user in index.users_of(&community) {
                assert!(index.communities_of(user).contains(&community));
            }
        }
    }

    #[test]
    fn add_is_idempotent() {
        let mut index = MembershipIndex::new();
        index.add("u1", "alpha");
        index.add("u1", "alpha");
        index.add("u1", "alpha");
        assert_eq!(index.communities_of("u1").len(), 1);
        assert_eq!(index.users_of("alpha").len(), 1);
        assert_eq!(index.user_count(), 1);
        assert_eq!(index.community_count(), 1);
    }

    #[test]
    fn unseen_keys_are_empty_not_errors() {
        let index = MembershipIndex::new();
        assert!(index.communities_of("nobody").is_empty());
        assert!(index.users_of("nowhere").is_empty());
        assert!(!index.is_multi_community("nobody"));
    }

    #[test]
    fn community_sets_are_lexicographically_ordered() {
        let mut index = MembershipIndex::new();
        index.add("u1", "zeta");
        index.add("u1", "alpha");
        index.add("u1", "mid");
        let ordered: Vec<_> = index.communities_of("u1").iter().cloned().collect();
        assert_eq!(ordered, vec!["alpha", "mid", "zeta"]);
    }
}
