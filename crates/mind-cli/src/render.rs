//! Plain-text rendering of the view models.

use mind_catalog::Topic;
use mind_engine::{ExploreView, InsightsView, LibraryView};
use mind_store::InteractionView;
use std::fmt::Write;

fn topic_line<I: InteractionView + ?Sized>(out: &mut String, topic: &Topic, interactions: &I) {
    let mut marks = String::new();
    if interactions.is_completed(&topic.id) {
        marks.push_str(" [done]");
    }
    if interactions.is_liked(&topic.id) {
        marks.push_str(" [liked]");
    }
    if interactions.is_favorited(&topic.id) {
        marks.push_str(" [saved]");
    }
    let _ = writeln!(
        out,
        "  {:<28} {:<12} {:>7} views  {} sections{}",
        topic.id,
        topic.category,
        topic.view_count,
        topic.section_count(),
        marks
    );
}

pub fn explore<I: InteractionView + ?Sized>(view: &ExploreView<'_>, interactions: &I) -> String {
    let mut out = String::new();

    if !view.unlocked {
        let _ = writeln!(
            out,
            "Explore is locked: complete {} more topic(s) ({}/{}, {:.0}%)",
            view.completions_needed,
            view.completed_count,
            view.unlock_threshold,
            view.unlock_percent
        );
        return out;
    }

    let chips: Vec<&str> = view.categories.iter().map(|c| c.as_str()).collect();
    let _ = writeln!(out, "Categories: {}", chips.join(", "));

    if !view.recommended.is_empty() {
        let _ = writeln!(out, "\nRecommended for you:");
        for topic in &view.recommended {
            topic_line(&mut out, topic, interactions);
        }
    }

    let _ = writeln!(out, "\nAll topics:");
    for topic in &view.discover {
        topic_line(&mut out, topic, interactions);
    }

    out
}

pub fn insights(view: &InsightsView<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Level {}  ({} points)", view.level, view.points);
    let _ = writeln!(
        out,
        "  {}/{} points towards level {} ({:.0}%)",
        view.points_in_level, view.points_per_level, view.next_level, view.level_progress_percent
    );
    let _ = writeln!(
        out,
        "Completed {}  Liked {}  Saved {}  Available {}",
        view.totals.completed, view.totals.liked, view.totals.favorited, view.totals.catalog_size
    );
    let _ = writeln!(out, "Overall exploration: {:.0}%", view.exploration_percent);

    let _ = writeln!(out, "\nBy category:");
    for stat in &view.category_stats {
        let _ = writeln!(
            out,
            "  {:<12} {}/{} ({:.0}%)",
            stat.category,
            stat.completed,
            stat.total,
            stat.percent()
        );
    }

    if !view.recently_completed.is_empty() {
        let _ = writeln!(out, "\nRecently explored:");
        for topic in &view.recently_completed {
            let _ = writeln!(out, "  {} ({})", topic.title, topic.category);
        }
    }

    out
}

pub fn library<I: InteractionView + ?Sized>(view: &LibraryView<'_>, interactions: &I) -> String {
    let mut out = String::new();
    let n = view.saved.len();
    let _ = writeln!(out, "{} saved topic{}", n, if n == 1 { "" } else { "s" });
    for topic in &view.saved {
        topic_line(&mut out, topic, interactions);
    }
    out
}
