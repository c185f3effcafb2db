use std::collections::{BTreeMap, HashSet};

use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::social::closure::ClosureEngine;
use crate::social::relation::RelationStore;
use crate::social::user::User;

/// How many hops the friends-of-friends source looks past the target's followings.
pub const DEFAULT_DEPTH: usize = 1;

/// Where a recommendation came from. Sources are merged in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// Follows the target.
    Follower,
    /// Followed by someone the target follows.
    FriendOfFriend,
    /// Connected to the target through some path.
    Circle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub user: User,
    pub source: Source,
}

/// Recommendations for `target` using the default chain depth.
#[must_use]
pub fn recommend(relation: &RelationStore, target: &str) -> Vec<User> {
    recommend_with_depth(relation, target, DEFAULT_DEPTH)
}

#[must_use]
pub fn recommend_with_depth(relation: &RelationStore, target: &str, depth: usize) -> Vec<User> {
    explain(relation, target, depth)
        .into_iter()
        .map(|it| it.user)
        .collect()
}

/// Recommendations for every user in `users`, computed in parallel against
/// one shared relation. `pb` is advanced once per user.
#[must_use]
pub fn recommend_all(
    relation: &RelationStore,
    users: &[User],
    depth: usize,
    pb: ProgressBar,
) -> BTreeMap<User, Vec<User>> {
    users
        .par_iter()
        .progress_with(pb)
        .map(|user| (user.clone(), recommend_with_depth(relation, user.as_str(), depth)))
        .collect()
}

/// Recommendations for `target`, each tagged with its source.
///
/// Followers come first, then the followings chain `depth` hops out, then the
/// rest of the target's circle. The target and the users it already follows
/// are never included, and each user appears once, at its first occurrence.
#[must_use]
pub fn explain(relation: &RelationStore, target: &str, depth: usize) -> Vec<Recommendation> {
    let followings = relation.followings_of(target);
    let mut seen = HashSet::new();
    let mut recommendations = Vec::new();

    let mut push = |candidates: Vec<User>, source: Source| {
        for user in candidates {
            if user == *target || followings.contains(&user) || !seen.insert(user.clone()) {
                continue;
            }
            recommendations.push(Recommendation { user, source });
        }
    };

    push(relation.followed_by(target), Source::Follower);
    push(
        relation.followings_followed(target, depth),
        Source::FriendOfFriend,
    );
    push(
        ClosureEngine::new(relation)
            .classes()
            .class_of(target)
            .map(<[User]>::to_vec)
            .unwrap_or_default(),
        Source::Circle,
    );

    recommendations
}

#[cfg(test)]
mod tests {
    use indicatif::ProgressBar;

    use crate::social::recommend::{
        explain, recommend, recommend_all, recommend_with_depth, Source,
    };
    use crate::social::relation::tests::{sample_relation, users};
    use crate::social::relation::RelationStore;

    #[test]
    fn test_recommend_merges_sources_in_order() {
        let rel = sample_relation();
        assert_eq!(recommend(&rel, "A"), users(&["J", "E", "I", "G"]));
        assert_eq!(recommend(&rel, "B"), users(&["A", "G", "J"]));
        assert_eq!(recommend(&rel, "E"), users(&["B", "G", "A", "I", "J"]));
        assert_eq!(recommend(&rel, "J"), users(&["B", "E", "G", "I"]));
    }

    #[test]
    fn test_recommend_excludes_self_and_followings() {
        let rel = sample_relation();
        let recommended = recommend(&rel, "C");
        assert!(recommended.is_empty());

        for target in rel.nodes() {
            let recommended = recommend(&rel, target.as_str());
            let followings = rel.followings_of(target.as_str());
            for user in &recommended {
                assert_ne!(*user, target);
                assert!(!followings.contains(user));
            }
        }
    }

    #[test]
    fn test_recommend_has_no_duplicates() {
        let rel = [("t", "a"), ("t", "b"), ("a", "x"), ("b", "x"), ("x", "t")]
            .into_iter()
            .collect::<RelationStore>();
        assert_eq!(recommend(&rel, "t"), users(&["x"]));
    }

    #[test]
    fn test_unknown_or_isolated_user_gets_nothing() {
        let rel = sample_relation();
        assert!(recommend(&rel, "F").is_empty());
        assert!(recommend(&rel, "nobody").is_empty());
    }

    #[test]
    fn test_depth_changes_chain_source() {
        let rel = sample_relation();
        assert_eq!(recommend_with_depth(&rel, "J", 2), users(&["E", "I", "B", "G"]));
        // Depth 0 only yields users the target already follows.
        assert_eq!(recommend_with_depth(&rel, "J", 0), users(&["B", "E", "G", "I"]));
    }

    #[test]
    fn test_explain_tags_sources() {
        let rel = sample_relation();
        let explained = explain(&rel, "A", 1);
        let sources = explained.iter().map(|it| it.source).collect::<Vec<_>>();
        assert_eq!(
            sources,
            vec![
                Source::Follower,
                Source::FriendOfFriend,
                Source::FriendOfFriend,
                Source::Circle
            ]
        );
        assert_eq!(explained[0].user, "J");
    }

    #[test]
    fn test_recommend_all_matches_single_queries() {
        let rel = sample_relation();
        let mut everyone = rel.nodes();
        everyone.push("nobody".into());

        for depth in [0, 1, 2] {
            let all = recommend_all(&rel, &everyone, depth, ProgressBar::hidden());
            assert_eq!(all.len(), everyone.len());
            for user in &everyone {
                assert_eq!(
                    all[user],
                    recommend_with_depth(&rel, user.as_str(), depth),
                    "{user} at depth {depth}"
                );
            }
        }
    }
}
