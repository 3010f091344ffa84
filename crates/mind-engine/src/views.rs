//! Per-screen view models handed to the presentation layer.

use crate::affinity::compute_category_preferences;
use crate::config::EngineConfig;
use crate::progress::{
    category_stats, completions_needed, compute_level_with, exploration_percent, is_unlocked,
    level_progress_percent, unlock_progress_percent, CategoryStat,
};
use crate::recommend::{category_chips, compute_discover_feed, recommend_with_preferences};
use mind_catalog::{Category, Topic};
use mind_store::InteractionView;
use serde::Serialize;

/// Explore screen: unlock gate plus recommended and discover feeds.
#[derive(Debug, Clone, Serialize)]
pub struct ExploreView<'a> {
    pub unlocked: bool,
    pub unlock_percent: f64,
    pub completed_count: usize,
    pub unlock_threshold: usize,
    pub completions_needed: usize,
    pub recommended: Vec<&'a Topic>,
    pub discover: Vec<&'a Topic>,
    pub categories: Vec<&'a Category>,
}

/// Aggregate counters shown on the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub liked: usize,
    pub favorited: usize,
    pub completed: usize,
    pub catalog_size: usize,
}

/// Insights/profile screen.
#[derive(Debug, Clone, Serialize)]
pub struct InsightsView<'a> {
    pub level: u32,
    pub next_level: u32,
    pub points: u32,
    /// Points earned inside the current level
    pub points_in_level: u32,
    pub points_per_level: u32,
    pub level_progress_percent: f64,
    pub category_stats: Vec<CategoryStat>,
    /// Most recently completed first
    pub recently_completed: Vec<&'a Topic>,
    pub exploration_percent: f64,
    pub totals: Totals,
}

/// Library screen: favorited topics in catalog order.
#[derive(Debug, Clone, Serialize)]
pub struct LibraryView<'a> {
    pub saved: Vec<&'a Topic>,
}

/// Build the Explore view model.
///
/// Feeds are filled in even while locked; the presentation decides what
/// to reveal.
pub fn explore_view<'a, I>(
    topics: &'a [Topic],
    interactions: &I,
    config: &EngineConfig,
) -> ExploreView<'a>
where
    I: InteractionView + ?Sized,
{
    let completed_count = interactions.completed_topics().len();
    let preferences = compute_category_preferences(topics, interactions);
    let recommended =
        recommend_with_preferences(topics, interactions, &preferences, config.recommended_count);
    let discover = compute_discover_feed(topics, interactions, &recommended);

    ExploreView {
        unlocked: is_unlocked(completed_count, config.unlock_threshold),
        unlock_percent: unlock_progress_percent(completed_count, config.unlock_threshold),
        completed_count,
        unlock_threshold: config.unlock_threshold,
        completions_needed: completions_needed(completed_count, config.unlock_threshold),
        recommended,
        discover,
        categories: category_chips(topics),
    }
}

/// Build the Insights view model.
pub fn insights_view<'a, I>(
    topics: &'a [Topic],
    interactions: &I,
    config: &EngineConfig,
) -> InsightsView<'a>
where
    I: InteractionView + ?Sized,
{
    let points = interactions.points();
    let level = compute_level_with(points, config.points_per_level);
    let completed = interactions.completed_topics();

    InsightsView {
        level: level.level,
        next_level: level.next_level(),
        points,
        points_in_level: level.progress_in_level,
        points_per_level: config.points_per_level,
        level_progress_percent: level_progress_percent(&level, config.points_per_level),
        category_stats: category_stats(topics, interactions),
        recently_completed: recently_completed(topics, completed, config.recent_limit),
        exploration_percent: exploration_percent(completed.len(), topics.len()),
        totals: Totals {
            liked: interactions.liked_topics().len(),
            favorited: interactions.favorited_topics().len(),
            completed: completed.len(),
            catalog_size: topics.len(),
        },
    }
}

/// Build the Library view model.
pub fn library_view<'a, I>(topics: &'a [Topic], interactions: &I) -> LibraryView<'a>
where
    I: InteractionView + ?Sized,
{
    LibraryView {
        saved: topics
            .iter()
            .filter(|t| interactions.is_favorited(&t.id))
            .collect(),
    }
}

fn recently_completed<'a>(
    topics: &'a [Topic],
    completed: &[String],
    limit: usize,
) -> Vec<&'a Topic> {
    completed
        .iter()
        .rev()
        .filter_map(|id| {
            let topic = topics.iter().find(|t| &t.id == id);
            if topic.is_none() {
                tracing::warn!(topic = %id, "Completed topic missing from catalog");
            }
            topic
        })
        .take(limit)
        .collect()
}

/// Progress summary handed to the external share sheet.
pub fn share_message(level: u32, points: u32, completed: usize) -> String {
    format!(
        "I'm level {} on Critical Mind with {} clarity points.\n\n\
         I've explored {} controversial topics to sharpen my critical thinking.",
        level, points, completed
    )
}
