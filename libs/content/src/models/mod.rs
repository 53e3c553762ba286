//! Content models

pub mod contact;
pub mod post;
pub mod project;
pub mod user;

// Re-export for convenience
pub use contact::{ContactMessage, NewContactMessage};
pub use post::Post;
pub use project::Project;
pub use user::{NewUser, User};
