use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use crate::social::user::User;
use crate::social::vertex::Vertex;

/// Flattened `(source, target)` view of a relation.
pub type EdgeList = Vec<(User, User)>;

/// The directed follow relation of one session.
///
/// Sources are kept in the order they were first seen; every query that walks
/// the relation ("relation iteration order") uses that order.
#[derive(Debug, Clone, Default)]
pub struct RelationStore {
    vertices: Vec<Vertex>,
    index: HashMap<User, usize>,
}

impl RelationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, user: User) -> &mut Vertex {
        let idx = if let Some(&idx) = self.index.get(&user) {
            idx
        } else {
            let idx = self.vertices.len();
            self.index.insert(user.clone(), idx);
            self.vertices.push(Vertex::new(user));
            idx
        };
        &mut self.vertices[idx]
    }

    /// Makes `user` a known source with no followings, if it isn't one already.
    pub fn register(&mut self, user: impl Into<User>) {
        self.entry(user.into());
    }

    /// Records that `source` follows each of `targets`.
    ///
    /// Targets already followed are skipped, so repeating a call changes
    /// nothing. The source entry is created even when `targets` is empty.
    pub fn follow<I, T>(&mut self, source: impl Into<User>, targets: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<User>,
    {
        let vertex = self.entry(source.into());
        for target in targets {
            vertex.add(target.into());
        }
    }

    /// Users `user` follows, in the order they were followed.
    #[must_use]
    pub fn followings_of(&self, user: &str) -> &[User] {
        self.index
            .get(user)
            .map(|&idx| self.vertices[idx].followings())
            .unwrap_or_default()
    }

    /// Every source that follows `user`.
    ///
    /// This is a scan over all edges; no reverse index is kept.
    #[must_use]
    pub fn followed_by(&self, user: &str) -> Vec<User> {
        self.vertices
            .iter()
            .filter(|vertex| vertex.follows(user))
            .map(|vertex| vertex.user.clone())
            .collect()
    }

    /// The followings of `user`'s followings, `depth` hops further out.
    ///
    /// Depth 0 is `followings_of(user)` itself. Each level concatenates the
    /// followings of every user on the previous level in order, duplicates
    /// included. Users who follow nobody simply end their chain.
    #[must_use]
    pub fn followings_followed(&self, user: &str, depth: usize) -> Vec<User> {
        let mut chain = Vec::new();
        let mut worklist = VecDeque::from([(User::from(user), depth)]);

        while let Some((current, remaining)) = worklist.pop_front() {
            let followings = self.followings_of(current.as_str());
            if remaining == 0 {
                chain.extend(followings.iter().cloned());
            } else {
                worklist.extend(
                    followings
                        .iter()
                        .map(|following| (following.clone(), remaining - 1)),
                );
            }
        }

        chain
    }

    /// Sorted union of every source and every target.
    #[must_use]
    pub fn nodes(&self) -> Vec<User> {
        self.vertices
            .iter()
            .flat_map(|vertex| std::iter::once(&vertex.user).chain(vertex.followings()))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// One `(source, target)` pair per follow edge.
    #[must_use]
    pub fn edges(&self) -> EdgeList {
        self.vertices
            .iter()
            .flat_map(|vertex| {
                vertex
                    .followings()
                    .iter()
                    .map(|target| (vertex.user.clone(), target.clone()))
            })
            .collect()
    }

    pub fn sources(&self) -> impl Iterator<Item = &User> {
        self.vertices.iter().map(|vertex| &vertex.user)
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices
            .iter()
            .map(|vertex| vertex.followings().len())
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The sub-relation induced by `users`: sources and targets outside the
    /// set are dropped.
    #[must_use]
    pub fn restricted_to(&self, users: &[User]) -> Self {
        let keep = users.iter().collect::<HashSet<_>>();
        let mut restricted = Self::new();
        for vertex in self.vertices.iter().filter(|it| keep.contains(&it.user)) {
            restricted.follow(
                vertex.user.clone(),
                vertex
                    .followings()
                    .iter()
                    .filter(|target| keep.contains(target))
                    .cloned(),
            );
        }
        restricted
    }
}

impl<S, T> FromIterator<(S, T)> for RelationStore
where
    S: Into<User>,
    T: Into<User>,
{
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (source, target) in iter {
            store.follow(source, [target]);
        }
        store
    }
}
