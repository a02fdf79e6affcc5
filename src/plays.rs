//! Plays

use std::fmt;

use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Category of a play, which decides how its performances are charged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum PlayCategory {
    /// Tragedy
    Tragedy,

    /// Comedy
    Comedy,

    /// Any category the billing rules don't know how to charge, kept verbatim.
    Other(String),
}

impl From<String> for PlayCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "tragedy" => Self::Tragedy,
            "comedy" => Self::Comedy,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for PlayCategory {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl fmt::Display for PlayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tragedy => f.write_str("tragedy"),
            Self::Comedy => f.write_str("comedy"),
            Self::Other(other) => f.write_str(other),
        }
    }
}

/// Catalog entry for a play
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Play {
    /// Play name
    pub name: String,

    /// Play category
    #[serde(rename = "type")]
    pub category: PlayCategory,
}

impl Play {
    /// Create a new play.
    pub fn new(name: impl Into<String>, category: impl Into<PlayCategory>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }
}

/// Plays keyed by their play ID.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct PlayCatalog {
    plays: FxHashMap<String, Play>,
}

impl PlayCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a play under the given ID, replacing any previous entry.
    pub fn insert(&mut self, play_id: impl Into<String>, play: Play) -> Option<Play> {
        self.plays.insert(play_id.into(), play)
    }

    /// Look up a play by ID.
    pub fn get(&self, play_id: &str) -> Option<&Play> {
        self.plays.get(play_id)
    }

    /// Number of plays in the catalog.
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Whether the catalog has no plays.
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Play)> for PlayCatalog {
    fn from_iter<I: IntoIterator<Item = (K, Play)>>(iter: I) -> Self {
        Self {
            plays: iter
                .into_iter()
                .map(|(play_id, play)| (play_id.into(), play))
                .collect(),
        }
    }
}
