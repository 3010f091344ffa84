//! Category affinity derived from likes and completions.
//!
//! # Scoring
//!
//! Walking the catalog in order, each topic contributes to its category:
//! - liked → +2
//! - completed → +1
//!
//! A topic that is both liked and completed contributes 3. Categories with
//! no interaction get no entry at all.
//!
//! # Ranking
//!
//! Categories are sorted by descending score with a stable sort. Equal
//! scores keep the order in which the categories first picked up a score
//! during the catalog walk.

use crate::ordering::stable_sort_desc_by_key;
use mind_catalog::{Category, Topic};
use mind_store::InteractionView;
use serde::Serialize;

/// Weight of a like.
pub const LIKE_WEIGHT: u32 = 2;

/// Weight of a completion.
pub const COMPLETION_WEIGHT: u32 = 1;

/// Accumulated affinity for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: u32,
}

/// Categories ranked by user affinity, strongest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryPreferences {
    ranked: Vec<CategoryScore>,
}

impl CategoryPreferences {
    /// True when the user has not liked or completed anything yet.
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Number of ranked categories.
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// Ranked entries with their scores.
    pub fn scores(&self) -> &[CategoryScore] {
        &self.ranked
    }

    /// Category labels, strongest first.
    pub fn categories(&self) -> impl Iterator<Item = &Category> + '_ {
        self.ranked.iter().map(|s| &s.category)
    }

    /// Zero-based rank of a category, if it has any affinity.
    pub fn rank_of(&self, category: &Category) -> Option<usize> {
        self.ranked.iter().position(|s| &s.category == category)
    }

    /// Score of a category, if it has any affinity.
    pub fn score_of(&self, category: &Category) -> Option<u32> {
        self.ranked
            .iter()
            .find(|s| &s.category == category)
            .map(|s| s.score)
    }
}

/// Rank categories by affinity.
pub fn compute_category_preferences<I>(topics: &[Topic], interactions: &I) -> CategoryPreferences
where
    I: InteractionView + ?Sized,
{
    let mut ranked: Vec<CategoryScore> = Vec::new();

    for topic in topics {
        let mut weight = 0;
        if interactions.is_liked(&topic.id) {
            weight += LIKE_WEIGHT;
        }
        if interactions.is_completed(&topic.id) {
            weight += COMPLETION_WEIGHT;
        }
        if weight == 0 {
            continue;
        }

        match ranked.iter_mut().find(|s| s.category == topic.category) {
            Some(entry) => entry.score += weight,
            None => ranked.push(CategoryScore {
                category: topic.category.clone(),
                score: weight,
            }),
        }
    }

    stable_sort_desc_by_key(&mut ranked, |s| s.score);

    tracing::debug!(categories = ranked.len(), "Computed category preferences");
    CategoryPreferences { ranked }
}
