//! API models for request and response payloads

use content::models::NewContactMessage;
use content::profile::SkillCategory;
use serde::{Deserialize, Serialize};

use crate::{
    error::FieldError,
    validation::{validate_email, validate_message, validate_name},
};

/// Request for the contact form
///
/// Unknown fields (such as a caller-chosen `id` or `createdAt`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

impl ContactRequest {
    /// Validate the request and turn it into a repository payload
    ///
    /// A blank subject is treated as no subject.
    pub fn validate(self) -> Result<NewContactMessage, Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Err(msg) = validate_name(&self.name) {
            errors.push(FieldError::new("name", msg));
        }
        if let Err(msg) = validate_email(&self.email) {
            errors.push(FieldError::new("email", msg));
        }
        if let Err(msg) = validate_message(&self.message) {
            errors.push(FieldError::new("message", msg));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewContactMessage {
            name: self.name,
            email: self.email,
            subject: self.subject.filter(|subject| !subject.trim().is_empty()),
            message: self.message,
        })
    }
}

/// Response for an accepted contact message
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    pub id: String,
}

/// Query parameters for skill listing
#[derive(Debug, Clone, Deserialize)]
pub struct SkillQuery {
    /// Only return skills in this category
    pub category: Option<SkillCategory>,
}
