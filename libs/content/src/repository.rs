//! Repository contract for site content
//!
//! The HTTP service only ever talks to [`ContentRepository`]; the in-memory
//! backend in [`memory`] is the one shipped today.

use async_trait::async_trait;

use crate::error::RepositoryResult;
use crate::models::{ContactMessage, NewContactMessage, NewUser, Post, Project, User};

pub mod memory;

/// Content persistence contract.
///
/// Lookups that match nothing return `Ok(None)`. List operations return owned
/// snapshots in the order defined by [`crate::ordering`].
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Finds a user by id.
    async fn get_user(&self, id: &str) -> RepositoryResult<Option<User>>;

    /// Finds the first user, in insertion order, whose username matches exactly.
    async fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;

    /// Stores a new user under a generated id.
    ///
    /// Usernames are not checked for uniqueness.
    async fn create_user(&self, user: NewUser) -> RepositoryResult<User>;

    /// Returns all projects, ascending by `order`.
    async fn get_projects(&self) -> RepositoryResult<Vec<Project>>;

    /// Finds a project by id.
    async fn get_project(&self, id: &str) -> RepositoryResult<Option<Project>>;

    /// Returns featured projects, in the same order as [`Self::get_projects`].
    async fn get_featured_projects(&self) -> RepositoryResult<Vec<Project>>;

    /// Returns all posts, most recent first.
    async fn get_posts(&self) -> RepositoryResult<Vec<Post>>;

    /// Finds a post by id.
    async fn get_post(&self, id: &str) -> RepositoryResult<Option<Post>>;

    /// Stores a contact message with a generated id and the current time.
    async fn create_contact_message(
        &self,
        message: NewContactMessage,
    ) -> RepositoryResult<ContactMessage>;
}
