//! Topic model - a unit of content made of ordered sections.

use super::category::Category;
use serde::{Deserialize, Serialize};

/// One card of a topic: a heading and its body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading
    pub title: String,

    /// Body text
    pub text: String,
}

impl Section {
    /// Create a new section.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// A topic presented as a stack of swipeable section cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Unique, stable identifier
    pub id: String,

    /// Display title
    pub title: String,

    /// Category used for filtering and affinity scoring
    pub category: Category,

    /// Sections in presentation order
    #[serde(default)]
    pub sections: Vec<Section>,

    /// Popularity counter, only used as a ranking fallback
    #[serde(default, alias = "viewCount")]
    pub view_count: u64,
}

impl Topic {
    /// Create a new topic with no sections.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<Category>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            sections: Vec::new(),
            view_count: 0,
        }
    }

    /// Builder: Add a section.
    pub fn with_section(mut self, title: impl Into<String>, text: impl Into<String>) -> Self {
        self.sections.push(Section::new(title, text));
        self
    }

    /// Builder: Set view count.
    pub fn with_view_count(mut self, view_count: u64) -> Self {
        self.view_count = view_count;
        self
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Short preview taken from the first section's body.
    pub fn preview(&self) -> Option<&str> {
        self.sections.first().map(|s| s.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let topic = Topic::new("t1", "Nuclear power", "Environment")
            .with_section("Intro", "Is it green?")
            .with_section("Costs", "Who pays?")
            .with_view_count(42);

        assert_eq!(topic.id, "t1");
        assert_eq!(topic.category.as_str(), "Environment");
        assert_eq!(topic.section_count(), 2);
        assert_eq!(topic.view_count, 42);
        assert_eq!(topic.preview(), Some("Is it green?"));
    }

    #[test]
    fn accepts_camel_case_view_count() {
        let json = r#"{
            "id": "t1",
            "title": "Vaccines",
            "category": "Health",
            "sections": [{"title": "A", "text": "B"}],
            "viewCount": 1200
        }"#;
        let topic: Topic = serde_json::from_str(json).unwrap();
        assert_eq!(topic.view_count, 1200);
        assert_eq!(topic.sections[0], Section::new("A", "B"));
    }

    #[test]
    fn missing_view_count_defaults_to_zero() {
        let json = r#"{"id": "t1", "title": "T", "category": "Science"}"#;
        let topic: Topic = serde_json::from_str(json).unwrap();
        assert_eq!(topic.view_count, 0);
        assert!(topic.sections.is_empty());
        assert_eq!(topic.preview(), None);
    }
}
