//! Application state shared across handlers

use std::sync::Arc;

use content::{ContentRepository, profile::Profile};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ContentRepository>,
    pub profile: Arc<Profile>,
}

impl AppState {
    pub fn new(repository: Arc<dyn ContentRepository>, profile: Profile) -> Self {
        Self {
            repository,
            profile: Arc::new(profile),
        }
    }
}
