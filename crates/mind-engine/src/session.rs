//! Reading session: the Home screen cursor over topics and sections.
//!
//! Tapping advances one section. Tapping on the last section completes the
//! topic and moves on to the next one. Points are awarded only the first
//! time a topic is completed, so re-reading never inflates the total.

use crate::config::EngineConfig;
use crate::error::{Error, Result};
use mind_catalog::{Catalog, Section, Topic};
use mind_store::InteractionStore;
use serde::{Deserialize, Serialize};

/// Result of a tap on the current card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advance {
    /// Moved to the next section of the same topic
    NextSection { section_index: usize },

    /// Finished the last section of a topic
    Completed {
        topic_id: String,
        points_awarded: u32,
        /// False when this was the last topic of the catalog
        moved_to_next: bool,
    },
}

/// Position of the reader inside the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingSession {
    topic_index: usize,
    section_index: usize,
}

impl ReadingSession {
    /// Start on the first section of the first topic.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on the first section of the topic with `id`.
    pub fn at(catalog: &Catalog, id: &str) -> Result<Self> {
        let topic_index = catalog
            .position(id)
            .ok_or_else(|| Error::UnknownTopic(id.to_string()))?;
        Ok(Self {
            topic_index,
            section_index: 0,
        })
    }

    /// Move the cursor to the first section of the topic with `id`.
    pub fn jump_to(&mut self, catalog: &Catalog, id: &str) -> Result<()> {
        *self = Self::at(catalog, id)?;
        Ok(())
    }

    pub fn topic_index(&self) -> usize {
        self.topic_index
    }

    pub fn section_index(&self) -> usize {
        self.section_index
    }

    /// Topic and section under the cursor.
    pub fn current<'a>(&self, catalog: &'a Catalog) -> Option<(&'a Topic, &'a Section)> {
        let topic = catalog.topics().get(self.topic_index)?;
        let section = topic.sections.get(self.section_index)?;
        Some((topic, section))
    }

    /// `(current section number, section count)` for the segment bar.
    pub fn section_progress(&self, catalog: &Catalog) -> Option<(usize, usize)> {
        let topic = catalog.topics().get(self.topic_index)?;
        Some((self.section_index + 1, topic.section_count()))
    }

    /// Handle a tap: next section, or complete the topic on the last one.
    pub fn advance_section<S>(
        &mut self,
        catalog: &Catalog,
        store: &mut S,
        config: &EngineConfig,
    ) -> Result<Advance>
    where
        S: InteractionStore + ?Sized,
    {
        let topic = catalog
            .topics()
            .get(self.topic_index)
            .ok_or(Error::OutOfRange {
                topic_index: self.topic_index,
            })?;

        if self.section_index + 1 < topic.section_count() {
            self.section_index += 1;
            return Ok(Advance::NextSection {
                section_index: self.section_index,
            });
        }

        let newly_completed = store.complete_topic(&topic.id, config.points_per_completion)?;
        let points_awarded = if newly_completed {
            config.points_per_completion
        } else {
            0
        };

        let moved_to_next = self.next_topic(catalog);
        tracing::info!(
            topic = %topic.id,
            newly_completed,
            points_awarded,
            "Finished topic"
        );

        Ok(Advance::Completed {
            topic_id: topic.id.clone(),
            points_awarded,
            moved_to_next,
        })
    }

    /// Swipe forward. Returns false at the end of the catalog.
    pub fn next_topic(&mut self, catalog: &Catalog) -> bool {
        if self.topic_index + 1 < catalog.len() {
            self.topic_index += 1;
            self.section_index = 0;
            true
        } else {
            false
        }
    }

    /// Swipe back. Returns false at the start of the catalog.
    pub fn prev_topic(&mut self) -> bool {
        if self.topic_index > 0 {
            self.topic_index -= 1;
            self.section_index = 0;
            true
        } else {
            false
        }
    }
}
