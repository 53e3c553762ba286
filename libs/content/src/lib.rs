//! Content library for the portfolio site
//!
//! This crate owns the site's content model (users, projects, posts and
//! contact messages), the repository contract used by the HTTP service, an
//! in-memory implementation of that contract seeded with the portfolio
//! fixture, and the read-only profile content shown on the about page.

pub mod error;
pub mod ids;
pub mod models;
pub mod ordering;
pub mod profile;
pub mod repository;
pub mod seed;

pub use error::{RepositoryError, RepositoryResult};
pub use repository::{ContentRepository, memory::InMemoryContentRepository};

/// Example usage of the in-memory repository
///
/// ```rust,no_run
/// use content::{ContentRepository, InMemoryContentRepository};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let repository = InMemoryContentRepository::new();
///     for project in repository.get_projects().await? {
///         println!("{} (order {})", project.title, project.order);
///     }
///     Ok(())
/// }
/// ```
pub fn example_usage() {}
