//! Critical Mind Engine
//!
//! Content ranking and progress scoring over a topic catalog and a user's
//! interaction history.
//!
//! # Core Insight
//!
//! Every derived value is a pure function of `(catalog, interactions)`.
//! The engine holds no state between calls, so the presentation layer can
//! recompute on every render and tests can fabricate any snapshot.
//!
//! # Components
//!
//! - **Progress**: level from points, unlock gate, per-category completion
//! - **Affinity**: category scores (liked = 2, completed = 1), stable-ranked
//! - **Recommend**: recommended feed (≤ 3), discover feed, category chips
//! - **Views**: Explore / Insights / Library view models
//! - **Session**: Home screen cursor that completes topics and awards points
//!
//! # Example
//!
//! ```
//! use mind_catalog::Topic;
//! use mind_engine::{compute_category_preferences, compute_recommended};
//! use mind_store::UserData;
//!
//! let topics = vec![
//!     Topic::new("a", "A", "Science").with_section("s", "t"),
//!     Topic::new("b", "B", "Health").with_section("s", "t").with_view_count(9),
//! ];
//! let data = UserData::new().with_liked(["a"]);
//!
//! let prefs = compute_category_preferences(&topics, &data);
//! assert_eq!(prefs.categories().next().map(|c| c.as_str()), Some("Science"));
//!
//! let rec = compute_recommended(&topics, &data, 3);
//! assert_eq!(rec[0].id, "a");
//! ```

pub mod affinity;
pub mod config;
pub mod error;
pub mod ordering;
pub mod progress;
pub mod recommend;
pub mod session;
pub mod views;

pub use affinity::{
    compute_category_preferences, CategoryPreferences, CategoryScore, COMPLETION_WEIGHT,
    LIKE_WEIGHT,
};
pub use config::{
    EngineConfig, POINTS_PER_COMPLETION, POINTS_PER_LEVEL, RECENT_LIMIT, RECOMMENDED_COUNT,
    UNLOCK_THRESHOLD,
};
pub use error::{Error, Result};
pub use progress::{
    category_stats, completions_needed, compute_level, compute_level_with, exploration_percent,
    is_unlocked, level_progress_percent, unlock_progress_percent, CategoryStat, Level,
};
pub use recommend::{
    category_chips, compute_discover_feed, compute_recommended, recommend_with_preferences,
};
pub use session::{Advance, ReadingSession};
pub use views::{
    explore_view, insights_view, library_view, share_message, ExploreView, InsightsView,
    LibraryView, Totals,
};
