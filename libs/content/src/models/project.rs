//! Project model

use serde::{Deserialize, Serialize};

/// Portfolio project entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    /// Display order is significant
    pub tech_stack: Vec<String>,
    /// Free-form, e.g. "AI" or "Web3 / FinTech"
    pub category: String,
    pub image_url: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    /// Ascending display position
    #[serde(default)]
    pub order: i32,
}

impl Project {
    /// Create a project with the required fields; everything else takes its default
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            long_description: None,
            tech_stack: Vec::new(),
            category: category.into(),
            image_url: None,
            live_url: None,
            github_url: None,
            featured: false,
            order: 0,
        }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }
}
