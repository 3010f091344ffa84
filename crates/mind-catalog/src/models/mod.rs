//! Content models for the catalog.
//!
//! - [`Topic`] - A unit of content made of ordered sections
//! - [`Section`] - One card of a topic
//! - [`Category`] - Grouping label used for affinity scoring

mod category;
mod topic;

pub use category::Category;
pub use topic::{Section, Topic};
