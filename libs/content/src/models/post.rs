//! Blog post model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Blog/social post entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub image_urls: Option<Vec<String>>,
    pub hashtags: Option<Vec<String>>,
    /// Undated posts sort as the oldest
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub likes: i32,
}

impl Post {
    /// Create an undated post with no images or hashtags
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            image_url: None,
            image_urls: None,
            hashtags: None,
            created_at: None,
            likes: 0,
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Images to render for the post
    ///
    /// `image_urls` takes precedence over the single `image_url` when present.
    pub fn gallery(&self) -> Vec<&str> {
        match &self.image_urls {
            Some(urls) if !urls.is_empty() => urls.iter().map(String::as_str).collect(),
            _ => self.image_url.as_deref().into_iter().collect(),
        }
    }
}
