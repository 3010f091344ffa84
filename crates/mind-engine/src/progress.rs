//! Progress model: levels, unlock gate, and per-category completion.
//!
//! Everything here is a pure function of the catalog and an interaction
//! snapshot. Nothing is cached between calls.

use crate::config::POINTS_PER_LEVEL;
use mind_catalog::{Category, Topic};
use mind_store::InteractionView;
use serde::Serialize;

/// Level reached for a point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Level {
    /// 1-based level
    pub level: u32,
    /// Points earned inside the current level
    pub progress_in_level: u32,
}

impl Level {
    /// The level being worked towards.
    pub const fn next_level(&self) -> u32 {
        self.level + 1
    }
}

/// Level for a point total at 100 points per level.
///
/// ```
/// use mind_engine::compute_level;
///
/// let level = compute_level(250);
/// assert_eq!((level.level, level.progress_in_level), (3, 50));
/// ```
pub const fn compute_level(points: u32) -> Level {
    compute_level_with(points, POINTS_PER_LEVEL)
}

/// Level for a point total with a custom level size.
///
/// A zero level size never levels up.
pub const fn compute_level_with(points: u32, points_per_level: u32) -> Level {
    if points_per_level == 0 {
        return Level {
            level: 1,
            progress_in_level: 0,
        };
    }
    Level {
        level: points / points_per_level + 1,
        progress_in_level: points % points_per_level,
    }
}

/// Share of the current level completed, in percent.
pub fn level_progress_percent(level: &Level, points_per_level: u32) -> f64 {
    if points_per_level == 0 {
        return 0.0;
    }
    level.progress_in_level as f64 * 100.0 / points_per_level as f64
}

/// Whether enough topics are completed to open the Explore feed.
pub const fn is_unlocked(completed_count: usize, threshold: usize) -> bool {
    completed_count >= threshold
}

/// Completions still missing before unlock.
pub const fn completions_needed(completed_count: usize, threshold: usize) -> usize {
    if completed_count >= threshold {
        0
    } else {
        threshold - completed_count
    }
}

/// Unlock progress in `[0, 100]`. A zero threshold counts as unlocked.
pub fn unlock_progress_percent(completed_count: usize, threshold: usize) -> f64 {
    if threshold == 0 {
        return 100.0;
    }
    (completed_count as f64 * 100.0 / threshold as f64).min(100.0)
}

/// Overall share of the catalog completed, in `[0, 100]`.
pub fn exploration_percent(completed_count: usize, catalog_size: usize) -> f64 {
    if catalog_size == 0 {
        return 0.0;
    }
    (completed_count as f64 * 100.0 / catalog_size as f64).min(100.0)
}

/// Completion count for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStat {
    pub category: Category,
    pub completed: usize,
    pub total: usize,
}

impl CategoryStat {
    /// Completed share in percent, 0 for an empty category.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 * 100.0 / self.total as f64
        }
    }
}

/// One entry per distinct category, in first-seen catalog order.
pub fn category_stats<I>(topics: &[Topic], interactions: &I) -> Vec<CategoryStat>
where
    I: InteractionView + ?Sized,
{
    let mut stats: Vec<CategoryStat> = Vec::new();

    for topic in topics {
        let idx = match stats.iter().position(|s| s.category == topic.category) {
            Some(idx) => idx,
            None => {
                stats.push(CategoryStat {
                    category: topic.category.clone(),
                    completed: 0,
                    total: 0,
                });
                stats.len() - 1
            }
        };

        let entry = &mut stats[idx];
        entry.total += 1;
        if interactions.is_completed(&topic.id) {
            entry.completed += 1;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use mind_store::UserData;

    fn topic(id: &str, category: &str) -> Topic {
        Topic::new(id, id, category).with_section("s", "t")
    }

    #[test]
    fn level_boundaries() {
        assert_eq!(compute_level(0), Level { level: 1, progress_in_level: 0 });
        assert_eq!(compute_level(99), Level { level: 1, progress_in_level: 99 });
        assert_eq!(compute_level(100), Level { level: 2, progress_in_level: 0 });
        assert_eq!(compute_level(250), Level { level: 3, progress_in_level: 50 });
        assert_eq!(compute_level(250).next_level(), 4);
    }

    #[test]
    fn custom_level_size() {
        assert_eq!(compute_level_with(25, 10), Level { level: 3, progress_in_level: 5 });
        assert_eq!(compute_level_with(500, 0), Level { level: 1, progress_in_level: 0 });
        assert_eq!(level_progress_percent(&compute_level_with(25, 50), 50), 50.0);
    }

    #[test]
    fn unlock_gate() {
        assert!(!is_unlocked(0, 2));
        assert!(!is_unlocked(1, 2));
        assert!(is_unlocked(2, 2));
        assert!(is_unlocked(3, 2));
        assert_eq!(completions_needed(0, 2), 2);
        assert_eq!(completions_needed(5, 2), 0);
    }

    #[test]
    fn unlock_percent_is_clamped() {
        assert_eq!(unlock_progress_percent(0, 2), 0.0);
        assert_eq!(unlock_progress_percent(1, 2), 50.0);
        assert_eq!(unlock_progress_percent(2, 2), 100.0);
        assert_eq!(unlock_progress_percent(3, 2), 100.0);
        assert_eq!(unlock_progress_percent(0, 0), 100.0);
    }

    #[test]
    fn exploration_percent_handles_empty_catalog() {
        assert_eq!(exploration_percent(0, 0), 0.0);
        assert_eq!(exploration_percent(1, 4), 25.0);
    }

    #[test]
    fn stats_group_in_first_seen_order() {
        let topics = vec![
            topic("a", "Health"),
            topic("b", "Science"),
            topic("c", "Health"),
            topic("d", "Politics"),
        ];
        let data = UserData::new().with_completed(["c", "d", "ghost"]);

        let stats = category_stats(&topics, &data);
        let summary: Vec<_> = stats
            .iter()
            .map(|s| (s.category.as_str(), s.completed, s.total))
            .collect();

        assert_eq!(
            summary,
            vec![("Health", 1, 2), ("Science", 0, 1), ("Politics", 1, 1)]
        );
        assert_eq!(stats[0].percent(), 50.0);
    }

    #[test]
    fn stats_of_empty_catalog() {
        assert!(category_stats(&[], &UserData::new()).is_empty());
    }
}
