//! User model and related functionality

use serde::{Deserialize, Serialize};

/// User entity
///
/// The password is stored exactly as supplied and is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// New user creation payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl User {
    /// Build a user from a creation payload and a generated id
    pub fn from_new(id: String, new_user: NewUser) -> Self {
        Self {
            id,
            username: new_user.username,
            password: new_user.password,
        }
    }
}
