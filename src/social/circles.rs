//! Partitioning users into circles.
//!
//! Two users share a circle when a chain of follow edges, taken in either
//! direction, connects them. The traversal form walks an undirected view of the
//! relation; the closure form reads the closure's equivalence classes. Both
//! only see the users they are given, so they produce the same partition.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::social::closure::ClosureEngine;
use crate::social::relation::RelationStore;
use crate::social::user::User;

/// One circle: its members, sorted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Circle(Vec<User>);

impl Circle {
    fn new(mut members: Vec<User>) -> Self {
        members.sort();
        members.dedup();
        Self(members)
    }

    #[must_use]
    pub fn members(&self) -> &[User] {
        &self.0
    }

    #[must_use]
    pub fn smallest(&self) -> Option<&User> {
        self.0.first()
    }

    #[must_use]
    pub fn contains(&self, user: &str) -> bool {
        self.0.iter().any(|it| it == user)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Circle> for Vec<User> {
    fn from(value: Circle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum CircleMethod {
    /// Depth-first search over the undirected follow graph.
    #[default]
    Traversal,
    /// Equivalence classes of the symmetric-transitive closure.
    Closure,
}

#[must_use]
pub fn circles(relation: &RelationStore, users: &[User], method: CircleMethod) -> Vec<Circle> {
    match method {
        CircleMethod::Traversal => circles_by_traversal(relation, users),
        CircleMethod::Closure => circles_by_closure(relation, users),
    }
}

fn sorted_by_smallest(mut circles: Vec<Circle>) -> Vec<Circle> {
    circles.sort_by(|a, b| a.smallest().cmp(&b.smallest()));
    circles
}

/// Connected components of the undirected follow graph over `users`.
///
/// Edges to users outside `users` are ignored.
#[must_use]
pub fn circles_by_traversal(relation: &RelationStore, users: &[User]) -> Vec<Circle> {
    let mut graph = users
        .iter()
        .map(|user| (user.clone(), BTreeSet::new()))
        .collect::<HashMap<User, BTreeSet<User>>>();

    for user in users {
        for friend in relation.followings_of(user.as_str()) {
            if !graph.contains_key(friend) {
                continue;
            }
            if let Some(neighbours) = graph.get_mut(user) {
                neighbours.insert(friend.clone());
            }
            if let Some(neighbours) = graph.get_mut(friend) {
                neighbours.insert(user.clone());
            }
        }
    }

    let mut visited = HashSet::new();
    let mut circles = Vec::new();

    for user in users {
        if visited.contains(user) {
            continue;
        }

        let mut stack = vec![user.clone()];
        let mut members = Vec::new();
        while let Some(current) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            if let Some(neighbours) = graph.get(&current) {
                stack.extend(
                    neighbours
                        .iter()
                        .filter(|it| !visited.contains(*it))
                        .cloned(),
                );
            }
            members.push(current);
        }
        circles.push(Circle::new(members));
    }

    sorted_by_smallest(circles)
}

/// Equivalence classes of the closure of the relation restricted to `users`.
///
/// A user without edges forms a circle on its own.
#[must_use]
pub fn circles_by_closure(relation: &RelationStore, users: &[User]) -> Vec<Circle> {
    let restricted = relation.restricted_to(users);
    let classes = ClosureEngine::new(&restricted).classes();

    let mut seen = HashSet::new();
    let circles = users
        .iter()
        .map(|user| match classes.class_of(user.as_str()) {
            Some(class) => Circle::new(class.to_vec()),
            None => Circle::new(vec![user.clone()]),
        })
        .filter(|circle| seen.insert(circle.clone()))
        .collect();

    sorted_by_smallest(circles)
}

#[cfg(test)]
mod tests {
    use crate::social::circles::{
        circles, circles_by_closure, circles_by_traversal, Circle, CircleMethod,
    };
    use crate::social::relation::tests::{sample_relation, users};
    use crate::social::relation::RelationStore;

    fn names(circles: &[Circle]) -> Vec<Vec<&str>> {
        circles
            .iter()
            .map(|circle| circle.members().iter().map(|it| it.as_str()).collect())
            .collect()
    }

    fn all_users() -> Vec<crate::social::user::User> {
        users(&["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"])
    }

    #[test]
    fn test_sample_relation_circles() {
        let rel = sample_relation();
        let expected = vec![
            vec!["A", "B", "E", "G", "I", "J"],
            vec!["C", "D", "H"],
            vec!["F"],
        ];
        assert_eq!(names(&circles_by_traversal(&rel, &all_users())), expected);
        assert_eq!(names(&circles_by_closure(&rel, &all_users())), expected);
    }

    #[test]
    fn test_caller_order_does_not_change_partition() {
        let rel = sample_relation();
        let mut reversed = all_users();
        reversed.reverse();
        assert_eq!(
            circles_by_traversal(&rel, &reversed),
            circles_by_traversal(&rel, &all_users())
        );
        assert_eq!(
            circles_by_closure(&rel, &reversed),
            circles_by_traversal(&rel, &all_users())
        );
    }

    #[test]
    fn test_every_user_in_exactly_one_circle() {
        let rel = sample_relation();
        let mut everyone = all_users();
        everyone.push("K".into());

        for method in [CircleMethod::Traversal, CircleMethod::Closure] {
            let result = circles(&rel, &everyone, method);
            for user in &everyone {
                let count = result
                    .iter()
                    .filter(|circle| circle.contains(user.as_str()))
                    .count();
                assert_eq!(count, 1, "{user} in {count} circles with {method:?}");
            }
            assert!(result.contains(&Circle::new(vec!["K".into()])));
        }
    }

    #[test]
    fn test_target_only_user_joins_its_follower() {
        let rel = [("a", "b")].into_iter().collect::<RelationStore>();
        let everyone = users(&["b", "a"]);
        assert_eq!(names(&circles_by_traversal(&rel, &everyone)), vec![vec!["a", "b"]]);
        assert_eq!(names(&circles_by_closure(&rel, &everyone)), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_forms_ignore_users_outside_the_list() {
        let rel = [("a", "x"), ("b", "x")]
            .into_iter()
            .collect::<RelationStore>();
        let listed = users(&["a", "b"]);
        let expected = vec![vec!["a"], vec!["b"]];
        assert_eq!(names(&circles_by_traversal(&rel, &listed)), expected);
        assert_eq!(names(&circles_by_closure(&rel, &listed)), expected);
    }

    #[test]
    fn test_forms_agree_on_chains_and_cycles() {
        let rel = [
            ("p", "q"),
            ("q", "r"),
            ("r", "p"),
            ("s", "t"),
            ("u", "t"),
            ("v", "v"),
        ]
        .into_iter()
        .collect::<RelationStore>();
        let everyone = users(&["v", "u", "t", "s", "r", "q", "p", "w"]);

        let traversal = circles_by_traversal(&rel, &everyone);
        assert_eq!(traversal, circles_by_closure(&rel, &everyone));
        assert_eq!(
            names(&traversal),
            vec![vec!["p", "q", "r"], vec!["s", "t", "u"], vec!["v"], vec!["w"]]
        );
    }

    #[test]
    fn test_transitively_connected_users_share_a_circle() {
        let rel = [("a", "b"), ("c", "b"), ("c", "d")]
            .into_iter()
            .collect::<RelationStore>();
        let result = circles_by_closure(&rel, &users(&["a", "b", "c", "d"]));
        assert_eq!(result.len(), 1);
        assert!(result[0].contains("a") && result[0].contains("d"));
    }
}
