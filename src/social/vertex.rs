use std::collections::HashSet;

use crate::social::user::User;

/// One follow source and the users it follows.
///
/// `followings` keeps insertion order; `lookup` mirrors it for constant-time
/// membership checks, so a target never appears twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub user: User,
    followings: Vec<User>,
    lookup: HashSet<User>,
}

impl Vertex {
    pub fn new(user: impl Into<User>) -> Self {
        Self {
            user: user.into(),
            followings: Vec::new(),
            lookup: HashSet::new(),
        }
    }

    /// Appends `other` unless it is already followed. Returns whether it was added.
    pub fn add(&mut self, other: User) -> bool {
        if self.lookup.contains(&other) {
            return false;
        }
        self.lookup.insert(other.clone());
        self.followings.push(other);
        true
    }

    #[inline]
    #[must_use]
    pub fn follows(&self, other: &str) -> bool {
        self.lookup.contains(other)
    }

    #[inline]
    #[must_use]
    pub fn followings(&self) -> &[User] {
        &self.followings
    }
}
