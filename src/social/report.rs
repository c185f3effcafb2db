use std::collections::BTreeMap;

use crate::social::circles::Circle;
use crate::social::recommend::{Recommendation, Source};
use crate::social::user::User;

fn join(users: &[User]) -> String {
    users
        .iter()
        .map(User::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

#[must_use]
pub fn following(followings: &[User]) -> String {
    if followings.is_empty() {
        "This user is not following anyone.".to_string()
    } else {
        format!("Following list: {}", join(followings))
    }
}

#[must_use]
pub fn recommendations(recommended: &[User]) -> String {
    if recommended.is_empty() {
        "No suitable friend recommendations for this user.".to_string()
    } else {
        format!("Recommended friends: {}", join(recommended))
    }
}

fn source_label(source: Source) -> &'static str {
    match source {
        Source::Follower => "follows you",
        Source::FriendOfFriend => "followed by someone you follow",
        Source::Circle => "in your circle",
    }
}

#[must_use]
pub fn explained(recommended: &[Recommendation]) -> String {
    if recommended.is_empty() {
        return recommendations(&[]);
    }

    std::iter::once("Recommended friends:".to_string())
        .chain(
            recommended
                .iter()
                .map(|Recommendation { user, source }| {
                    format!("  {user} ({})", source_label(*source))
                }),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per user; users without recommendations get `-`.
#[must_use]
pub fn all_recommendations(all: &BTreeMap<User, Vec<User>>) -> String {
    all.iter()
        .map(|(user, recommended)| {
            if recommended.is_empty() {
                format!("{user}: -")
            } else {
                format!("{user}: {}", join(recommended))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn circles(circles: &[Circle]) -> String {
    circles
        .iter()
        .enumerate()
        .map(|(idx, circle)| {
            format!(
                "Circle {} ({} members): {}",
                idx + 1,
                circle.len(),
                join(circle.members())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::social::circles::circles_by_traversal;
    use crate::social::recommend::{explain, recommend};
    use crate::social::relation::tests::{sample_relation, users};
    use crate::social::report;

    #[test]
    fn test_following_lines() {
        let rel = sample_relation();
        assert_eq!(report::following(rel.followings_of("B")), "Following list: E,I");
        assert_eq!(
            report::following(rel.followings_of("F")),
            "This user is not following anyone."
        );
    }

    #[test]
    fn test_recommendation_lines() {
        let rel = sample_relation();
        assert_eq!(
            report::recommendations(&recommend(&rel, "A")),
            "Recommended friends: J,E,I,G"
        );
        assert_eq!(
            report::recommendations(&recommend(&rel, "C")),
            "No suitable friend recommendations for this user."
        );
        assert_eq!(
            report::explained(&explain(&rel, "B", 1)),
            "Recommended friends:\n  A (follows you)\n  G (in your circle)\n  J (in your circle)"
        );
        assert_eq!(
            report::explained(&explain(&rel, "C", 1)),
            "No suitable friend recommendations for this user."
        );
    }

    #[test]
    fn test_circle_lines() {
        let rel = sample_relation();
        let everyone = users(&["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]);
        assert_eq!(
            report::circles(&circles_by_traversal(&rel, &everyone)),
            "Circle 1 (6 members): A,B,E,G,I,J\nCircle 2 (3 members): C,D,H\nCircle 3 (1 members): F"
        );
    }

    #[test]
    fn test_all_recommendations_lines() {
        let rel = sample_relation();
        let all = users(&["C", "A"])
            .into_iter()
            .map(|user| {
                let recommended = recommend(&rel, user.as_str());
                (user, recommended)
            })
            .collect::<BTreeMap<_, _>>();
        assert_eq!(report::all_recommendations(&all), "A: J,E,I,G\nC: -");
    }
}
