use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::social::circles::CircleMethod;
use crate::social::error::{Error, Result};
use crate::social::recommend::DEFAULT_DEPTH;

/// Looked up in the working directory when no settings path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "follow-circles.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Hops past the target's followings for friends-of-friends.
    pub depth: usize,
    pub method: CircleMethod,
    pub progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            method: CircleMethod::default(),
            progress: true,
        }
    }
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            source,
            path: path.to_path_buf(),
        })?;
        ron::from_str(&text).map_err(|source| Error::Parse {
            source,
            path: path.to_path_buf(),
        })
    }

    /// Loads `explicit` if given, otherwise the default file when it exists,
    /// otherwise the defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let fallback = PathBuf::from(DEFAULT_SETTINGS_FILE);
        if fs::metadata(&fallback).is_ok() {
            Self::load(fallback)
        } else {
            Ok(Self::default())
        }
    }
}
