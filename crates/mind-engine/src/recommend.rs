//! Recommended feed, discover feed, and category chips.
//!
//! # Recommended
//!
//! Only topics not yet completed are candidates. Without any affinity the
//! feed falls back to popularity (descending view count). Otherwise each
//! candidate scores `rank_len - rank_index` for a ranked category and 0 for
//! an unranked one, and candidates sort by score, then view count, then
//! catalog order.
//!
//! # Discover
//!
//! Everything not recommended: unfinished topics first, completed topics
//! last, each group in catalog order. Together the two feeds cover the
//! catalog exactly once.

use crate::affinity::{compute_category_preferences, CategoryPreferences};
use crate::ordering::{first_seen, stable_sort_desc_by_key};
use mind_catalog::{Category, Topic};
use mind_store::InteractionView;
use std::collections::HashSet;

/// Pick up to `count` topics for the recommended feed.
pub fn compute_recommended<'a, I>(
    topics: &'a [Topic],
    interactions: &I,
    count: usize,
) -> Vec<&'a Topic>
where
    I: InteractionView + ?Sized,
{
    let preferences = compute_category_preferences(topics, interactions);
    recommend_with_preferences(topics, interactions, &preferences, count)
}

/// Same as [`compute_recommended`] with preferences computed by the caller.
pub fn recommend_with_preferences<'a, I>(
    topics: &'a [Topic],
    interactions: &I,
    preferences: &CategoryPreferences,
    count: usize,
) -> Vec<&'a Topic>
where
    I: InteractionView + ?Sized,
{
    let mut candidates: Vec<&Topic> = topics
        .iter()
        .filter(|t| !interactions.is_completed(&t.id))
        .collect();

    if preferences.is_empty() {
        stable_sort_desc_by_key(&mut candidates, |t| t.view_count);
    } else {
        let rank_len = preferences.len();
        stable_sort_desc_by_key(&mut candidates, |t| {
            let score = preferences
                .rank_of(&t.category)
                .map_or(0, |idx| rank_len - idx);
            (score, t.view_count)
        });
    }

    candidates.truncate(count);
    candidates
}

/// Catalog minus `recommended`, completed topics sunk to the bottom.
pub fn compute_discover_feed<'a, I>(
    topics: &'a [Topic],
    interactions: &I,
    recommended: &[&Topic],
) -> Vec<&'a Topic>
where
    I: InteractionView + ?Sized,
{
    let recommended_ids: HashSet<&str> = recommended.iter().map(|t| t.id.as_str()).collect();

    let (completed, open): (Vec<&Topic>, Vec<&Topic>) = topics
        .iter()
        .filter(|t| !recommended_ids.contains(t.id.as_str()))
        .partition(|t| interactions.is_completed(&t.id));

    open.into_iter().chain(completed).collect()
}

/// Distinct categories in first-seen catalog order.
pub fn category_chips(topics: &[Topic]) -> Vec<&Category> {
    first_seen(topics.iter().map(|t| &t.category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mind_store::UserData;

    fn topic(id: &str, category: &str, views: u64) -> Topic {
        Topic::new(id, id, category)
            .with_section("s", "t")
            .with_view_count(views)
    }

    fn ids(topics: &[&Topic]) -> Vec<String> {
        topics.iter().map(|t| t.id.clone()).collect()
    }

    fn catalog() -> Vec<Topic> {
        vec![
            topic("s1", "Science", 500),
            topic("h1", "Health", 900),
            topic("e1", "Economy", 700),
            topic("s2", "Science", 100),
            topic("h2", "Health", 300),
            topic("p1", "Politics", 900),
        ]
    }

    #[test]
    fn popularity_fallback_without_affinity() {
        let topics = catalog();
        let rec = compute_recommended(&topics, &UserData::new(), 3);
        // h1 and p1 tie at 900; h1 comes first in the catalog
        assert_eq!(ids(&rec), vec!["h1", "p1", "e1"]);
    }

    #[test]
    fn ranked_categories_first() {
        let topics = catalog();
        let data = UserData::new().with_liked(["s1"]).with_completed(["h2"]);
        // Science 2, Health 1
        let rec = compute_recommended(&topics, &data, 3);
        assert_eq!(ids(&rec), vec!["s1", "s2", "h1"]);
    }

    #[test]
    fn unranked_categories_break_ties_by_views() {
        let topics = catalog();
        let data = UserData::new().with_completed(["s1", "s2", "h1", "h2"]);
        // Only e1 and p1 remain, both unranked (score 0)
        let rec = compute_recommended(&topics, &data, 3);
        assert_eq!(ids(&rec), vec!["p1", "e1"]);
    }

    #[test]
    fn everything_completed_recommends_nothing() {
        let topics = catalog();
        let all: Vec<_> = topics.iter().map(|t| t.id.clone()).collect();
        let data = UserData::new().with_completed(all);
        assert!(compute_recommended(&topics, &data, 3).is_empty());
    }

    #[test]
    fn count_limits_length() {
        let topics = catalog();
        assert_eq!(compute_recommended(&topics, &UserData::new(), 1).len(), 1);
        assert!(compute_recommended(&topics, &UserData::new(), 0).is_empty());
    }

    #[test]
    fn discover_excludes_recommended_and_sinks_completed() {
        let topics = catalog();
        let data = UserData::new().with_liked(["s1"]).with_completed(["h2", "s1"]);
        let rec = compute_recommended(&topics, &data, 3);
        let discover = compute_discover_feed(&topics, &data, &rec);

        assert_eq!(ids(&rec), vec!["s2", "h1", "p1"]);
        assert_eq!(ids(&discover), vec!["e1", "s1", "h2"]);
    }

    #[test]
    fn empty_catalog_yields_empty_outputs() {
        let data = UserData::new().with_liked(["x"]);
        let rec = compute_recommended(&[], &data, 3);
        assert!(rec.is_empty());
        assert!(compute_discover_feed(&[], &data, &rec).is_empty());
        assert!(category_chips(&[]).is_empty());
    }

    #[test]
    fn chips_in_first_seen_order() {
        let topics = catalog();
        let chips: Vec<_> = category_chips(&topics).iter().map(|c| c.as_str()).collect();
        assert_eq!(chips, vec!["Science", "Health", "Economy", "Politics"]);
    }
}
