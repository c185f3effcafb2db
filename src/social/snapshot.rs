//! The RON input a session is built from.
//!
//! ```ron
//! (
//!     users: ["A", "B", "C"],
//!     follows: [("A", "B"), ("B", "C")],
//! )
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::social::error::{Error, Result};
use crate::social::relation::RelationStore;
use crate::social::user::User;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Every user of the session, in the order circles are searched from.
    #[serde(default)]
    pub users: Vec<User>,
    /// `(follower, followed)` pairs, applied in order.
    #[serde(default)]
    pub follows: Vec<(User, User)>,
}

impl Snapshot {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let snapshot: Self = ron::from_str(&text).map_err(|source| Error::Parse {
            source,
            path: path.to_path_buf(),
        })?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Rejects empty identifiers anywhere in the snapshot.
    pub fn validate(&self) -> Result<()> {
        let empty = self.users.iter().any(User::is_empty)
            || self
                .follows
                .iter()
                .any(|(source, target)| source.is_empty() || target.is_empty());
        if empty {
            return Err(Error::EmptyUser);
        }
        Ok(())
    }

    /// Users named in `follows` but missing from `users` are appended after
    /// the declared ones, in first-seen order.
    #[must_use]
    pub fn all_users(&self) -> Vec<User> {
        let mut all = self.users.clone();
        let mut seen = self.users.iter().cloned().collect::<HashSet<_>>();
        for (source, target) in &self.follows {
            for user in [source, target] {
                if seen.insert(user.clone()) {
                    all.push(user.clone());
                }
            }
        }
        all
    }

    /// Registers every declared user, then applies the follow pairs.
    #[must_use]
    pub fn to_relation(&self) -> RelationStore {
        let mut relation = RelationStore::new();
        for user in &self.users {
            relation.register(user.clone());
        }
        for (source, target) in &self.follows {
            relation.follow(source.clone(), [target.clone()]);
        }
        relation
    }
}
