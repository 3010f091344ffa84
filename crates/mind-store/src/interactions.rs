//! The query/mutate contract shared by every interaction store.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Flags a user holds for a single topic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub liked: bool,
    pub favorited: bool,
    /// Monotonic: once set it never reverts
    pub completed: bool,
}

/// Read-only view of a user's interactions.
///
/// This is all the ranking and progress code needs. Implementations must
/// answer every call in one derivation pass from the same state.
pub trait InteractionView {
    /// Whether the topic is liked.
    fn is_liked(&self, id: &str) -> bool;

    /// Whether the topic is favorited.
    fn is_favorited(&self, id: &str) -> bool;

    /// Whether the topic is completed.
    fn is_completed(&self, id: &str) -> bool;

    /// Liked topic ids in toggle order.
    fn liked_topics(&self) -> &[String];

    /// Favorited topic ids in toggle order.
    fn favorited_topics(&self) -> &[String];

    /// Completed topic ids in completion order.
    fn completed_topics(&self) -> &[String];

    /// Accumulated points.
    fn points(&self) -> u32;

    /// All flags for one topic.
    fn record(&self, id: &str) -> InteractionRecord {
        InteractionRecord {
            liked: self.is_liked(id),
            favorited: self.is_favorited(id),
            completed: self.is_completed(id),
        }
    }
}

/// Mutations applied by user actions.
///
/// Writes are expected to be serialized by the host's event loop, which
/// `&mut self` enforces.
pub trait InteractionStore: InteractionView {
    /// Flip the liked flag, returning the new value.
    fn toggle_like(&mut self, id: &str) -> Result<bool>;

    /// Flip the favorited flag, returning the new value.
    fn toggle_favorite(&mut self, id: &str) -> Result<bool>;

    /// Mark a topic completed. Returns `true` only if it was not completed
    /// before. Never touches points.
    fn mark_completed(&mut self, id: &str) -> Result<bool>;

    /// Add a positive number of points, returning the new total.
    fn add_points(&mut self, n: u32) -> Result<u32>;

    /// Mark a topic completed and, if it was not completed before, award
    /// `points`. Returns whether the topic was newly completed.
    ///
    /// Persistent stores override this to write both changes at once.
    fn complete_topic(&mut self, id: &str, points: u32) -> Result<bool> {
        let newly = self.mark_completed(id)?;
        if newly && points > 0 {
            self.add_points(points)?;
        }
        Ok(newly)
    }
}
