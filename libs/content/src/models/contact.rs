//! Contact message model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact message entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    /// Assigned by the repository at creation
    pub created_at: DateTime<Utc>,
}

/// New contact message payload
///
/// Carries no id or timestamp: both are assigned by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

impl ContactMessage {
    /// Build a stored message from a payload, a generated id and the creation time
    pub fn from_new(id: String, new_message: NewContactMessage, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new_message.name,
            email: new_message.email,
            subject: new_message.subject,
            message: new_message.message,
            created_at,
        }
    }
}
