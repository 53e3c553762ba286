//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

/// Validate a contact name
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.chars().count() < 2 {
        return Err("Name must be at least 2 characters".to_string());
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Please enter a valid email".to_string());
    }

    Ok(())
}

/// Validate a contact message body
pub fn validate_message(message: &str) -> Result<(), String> {
    if message.chars().count() < 10 {
        return Err("Message must be at least 10 characters".to_string());
    }

    Ok(())
}
