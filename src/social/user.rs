use std::borrow::Borrow;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A user identifier.
///
/// Identifiers are opaque and case-sensitive; two users are the same user when
/// their strings are equal. Ordering is lexicographic on the string, which is
/// what circles and closure indexing sort by.
#[derive(Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct User(Arc<str>);

impl User {
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Clone for User {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl Display for User {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for User {
    #[inline]
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for User {
    #[inline]
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<&String> for User {
    #[inline]
    fn from(value: &String) -> Self {
        Self(value.as_str().into())
    }
}

impl From<Arc<str>> for User {
    #[inline]
    fn from(value: Arc<str>) -> Self {
        Self(value)
    }
}

impl From<&User> for User {
    #[inline]
    fn from(value: &User) -> Self {
        value.clone()
    }
}

impl From<User> for Arc<str> {
    #[inline]
    fn from(value: User) -> Self {
        value.0
    }
}

impl AsRef<str> for User {
    #[inline]
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl Borrow<str> for User {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for User {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for User {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}
