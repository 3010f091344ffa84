//! In-memory snapshot of one user's interactions.

use crate::error::{Error, Result};
use crate::interactions::{InteractionStore, InteractionView};
use serde::{Deserialize, Deserializer, Serialize};

/// Everything the app remembers about a user.
///
/// Id lists keep insertion order so UI lists enumerate stably. Toggling a
/// flag on appends the id; toggling it off removes it. Each id appears at
/// most once per list; repeats in stored data are dropped on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    #[serde(default, deserialize_with = "unique_ids")]
    pub liked_topics: Vec<String>,

    #[serde(default, deserialize_with = "unique_ids")]
    pub favorited_topics: Vec<String>,

    #[serde(default, deserialize_with = "unique_ids")]
    pub completed_topics: Vec<String>,

    #[serde(default)]
    pub points: u32,
}

impl UserData {
    /// Empty state for a first launch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Like the given topics in order.
    pub fn with_liked<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            insert(&mut self.liked_topics, id.into());
        }
        self
    }

    /// Builder: Favorite the given topics in order.
    pub fn with_favorited<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            insert(&mut self.favorited_topics, id.into());
        }
        self
    }

    /// Builder: Complete the given topics in order.
    pub fn with_completed<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            insert(&mut self.completed_topics, id.into());
        }
        self
    }

    /// Builder: Set points.
    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }
}

fn insert(list: &mut Vec<String>, id: String) -> bool {
    if list.contains(&id) {
        false
    } else {
        list.push(id);
        true
    }
}

fn unique_ids<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids = Vec::<String>::deserialize(deserializer)?;
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        insert(&mut unique, id);
    }
    Ok(unique)
}

fn toggle(list: &mut Vec<String>, id: &str) -> bool {
    if let Some(pos) = list.iter().position(|x| x == id) {
        list.remove(pos);
        false
    } else {
        list.push(id.to_string());
        true
    }
}

impl InteractionView for UserData {
    fn is_liked(&self, id: &str) -> bool {
        self.liked_topics.iter().any(|x| x == id)
    }

    fn is_favorited(&self, id: &str) -> bool {
        self.favorited_topics.iter().any(|x| x == id)
    }

    fn is_completed(&self, id: &str) -> bool {
        self.completed_topics.iter().any(|x| x == id)
    }

    fn liked_topics(&self) -> &[String] {
        &self.liked_topics
    }

    fn favorited_topics(&self) -> &[String] {
        &self.favorited_topics
    }

    fn completed_topics(&self) -> &[String] {
        &self.completed_topics
    }

    fn points(&self) -> u32 {
        self.points
    }
}

impl InteractionStore for UserData {
    fn toggle_like(&mut self, id: &str) -> Result<bool> {
        Ok(toggle(&mut self.liked_topics, id))
    }

    fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        Ok(toggle(&mut self.favorited_topics, id))
    }

    fn mark_completed(&mut self, id: &str) -> Result<bool> {
        Ok(insert(&mut self.completed_topics, id.to_string()))
    }

    fn add_points(&mut self, n: u32) -> Result<u32> {
        if n == 0 {
            return Err(Error::ZeroPoints);
        }
        self.points = self.points.saturating_add(n);
        Ok(self.points)
    }
}
