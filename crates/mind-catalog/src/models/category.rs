//! Category label used for grouping topics and scoring affinity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A topic category label.
///
/// Categories come from a small closed set in the shipped dataset, but the
/// engine only ever compares labels, so any string is accepted on load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Create a category from a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The display label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Labels used by the bundled dataset.
    pub fn defaults() -> Vec<Self> {
        [
            "Science",
            "Health",
            "Environment",
            "Technology",
            "Society",
            "Economy",
            "Politics",
        ]
        .into_iter()
        .map(Self::new)
        .collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
