//! Validated, immutable topic catalog.

use crate::error::{Result, Violation};
use crate::models::Topic;
use std::collections::HashSet;
use std::ops::Deref;
use std::path::Path;

/// An ordered collection of topics that passed load-time validation.
///
/// Guarantees: at least one topic, unique ids, and at least one section
/// per topic. Ranking code takes `&[Topic]` and stays total on empty
/// input, so the catalog derefs to a slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    topics: Vec<Topic>,
}

impl Catalog {
    /// Validate topics and build a catalog.
    pub fn new(topics: Vec<Topic>) -> Result<Self> {
        validate(&topics)?;
        Ok(Self { topics })
    }

    /// Parse a JSON array of topics.
    pub fn from_json(json: &str) -> Result<Self> {
        let topics: Vec<Topic> = serde_json::from_str(json)?;
        Self::new(topics)
    }

    /// Load a JSON array of topics from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&data)?;
        tracing::info!(path = %path.display(), topics = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// All topics in presentation order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Look up a topic by id.
    pub fn get(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    /// Index of a topic in presentation order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.topics.iter().position(|t| t.id == id)
    }

    /// Whether the catalog contains a topic id.
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }
}

impl Deref for Catalog {
    type Target = [Topic];

    fn deref(&self) -> &[Topic] {
        &self.topics
    }
}

/// Check the structural invariants of a topic list.
pub fn validate(topics: &[Topic]) -> std::result::Result<(), Violation> {
    if topics.is_empty() {
        return Err(Violation::Empty);
    }

    let mut seen = HashSet::with_capacity(topics.len());
    for topic in topics {
        if !seen.insert(topic.id.as_str()) {
            return Err(Violation::DuplicateId(topic.id.clone()));
        }
        if topic.sections.is_empty() {
            return Err(Violation::NoSections(topic.id.clone()));
        }
    }

    Ok(())
}
