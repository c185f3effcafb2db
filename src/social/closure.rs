//! Mutual reachability over the follow relation.
//!
//! The follow edges are made symmetric, closed transitively with Warshall's
//! algorithm over a boolean matrix indexed by the sorted node list, and then
//! regrouped into one equivalence class per user.

use std::collections::{HashMap, HashSet};

use crate::social::relation::{EdgeList, RelationStore};
use crate::social::user::User;

/// Adds `(y, x)` for every `(x, y)` whose reverse is not already listed.
#[must_use]
pub fn symmetric(edges: &[(User, User)]) -> EdgeList {
    let present = edges.iter().collect::<HashSet<_>>();
    let reversed = edges
        .iter()
        .filter(|(x, y)| !present.contains(&(y.clone(), x.clone())))
        .map(|(x, y)| (y.clone(), x.clone()))
        .collect::<Vec<_>>();

    let mut symmetric = edges.to_vec();
    symmetric.extend(reversed);
    symmetric
}

/// Boolean reachability matrix over a fixed, ordered node list.
#[derive(Debug, Clone)]
pub struct Reachability {
    nodes: Vec<User>,
    reach: Vec<Vec<bool>>,
}

impl Reachability {
    /// Builds the adjacency matrix of `edges` over `nodes` and closes it.
    ///
    /// Edges naming a user outside `nodes` are ignored.
    #[must_use]
    pub fn new(nodes: Vec<User>, edges: &[(User, User)]) -> Self {
        let n = nodes.len();
        let position = nodes
            .iter()
            .enumerate()
            .map(|(idx, user)| (user.clone(), idx))
            .collect::<HashMap<_, _>>();

        let mut reach = vec![vec![false; n]; n];
        for (x, y) in edges {
            if let (Some(&i), Some(&j)) = (position.get(x), position.get(y)) {
                reach[i][j] = true;
            }
        }

        let mut ret = Self { nodes, reach };
        ret.warshall();
        ret
    }

    // k must stay the outermost loop.
    fn warshall(&mut self) {
        let n = self.nodes.len();
        for k in 0..n {
            // Row k cannot change during pass k: reach[k][j] |= reach[k][k] && reach[k][j].
            let via = self.reach[k].clone();
            for i in 0..n {
                if !self.reach[i][k] {
                    continue;
                }
                for j in 0..n {
                    self.reach[i][j] = self.reach[i][j] || via[j];
                }
            }
        }
    }

    #[must_use]
    pub fn nodes(&self) -> &[User] {
        &self.nodes
    }

    #[must_use]
    pub fn reaches(&self, from: &str, to: &str) -> bool {
        let i = self.nodes.iter().position(|it| it == from);
        let j = self.nodes.iter().position(|it| it == to);
        match (i, j) {
            (Some(i), Some(j)) => self.reach[i][j],
            _ => false,
        }
    }

    /// Every reachable pair, row by row in node order.
    #[must_use]
    pub fn edges(&self) -> EdgeList {
        let n = self.nodes.len();
        (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .filter(|&(i, j)| self.reach[i][j])
            .map(|(i, j)| (self.nodes[i].clone(), self.nodes[j].clone()))
            .collect()
    }
}

/// Transitive closure of `edges` over `nodes`.
#[must_use]
pub fn transitive(nodes: &[User], edges: &[(User, User)]) -> EdgeList {
    Reachability::new(nodes.to_vec(), edges).edges()
}

/// User → the users it reaches, grouped from a closed edge list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquivalenceClasses {
    classes: HashMap<User, Vec<User>>,
}

impl EquivalenceClasses {
    /// Groups `edges` by their left side, keeping the order targets appear in.
    #[must_use]
    pub fn unflatten(edges: &[(User, User)]) -> Self {
        let mut classes: HashMap<User, Vec<User>> = HashMap::new();
        for (left, right) in edges {
            classes.entry(left.clone()).or_default().push(right.clone());
        }
        Self { classes }
    }

    /// `None` when `user` has no edges at all.
    #[must_use]
    pub fn class_of(&self, user: &str) -> Option<&[User]> {
        self.classes.get(user).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&User, &[User])> {
        self.classes
            .iter()
            .map(|(user, class)| (user, class.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Derives the symmetric-transitive closure of a relation on demand.
///
/// Nothing is cached: every call recomputes from the relation as it is now.
#[derive(Debug, Clone, Copy)]
pub struct ClosureEngine<'a> {
    relation: &'a RelationStore,
}

impl<'a> ClosureEngine<'a> {
    #[must_use]
    pub fn new(relation: &'a RelationStore) -> Self {
        Self { relation }
    }

    #[must_use]
    pub fn reachability(&self) -> Reachability {
        Reachability::new(self.relation.nodes(), &symmetric(&self.relation.edges()))
    }

    /// The closure as an edge list.
    #[must_use]
    pub fn closure(&self) -> EdgeList {
        self.reachability().edges()
    }

    #[must_use]
    pub fn classes(&self) -> EquivalenceClasses {
        EquivalenceClasses::unflatten(&self.closure())
    }
}
