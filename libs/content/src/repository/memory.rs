//! In-memory content repository
//!
//! State lives for the lifetime of the process and is discarded on shutdown.
//! Each collection sits behind its own lock; reads hand out clones so callers
//! never hold references into the store.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::{
    error::RepositoryResult,
    ids::{IdGenerator, UuidIdGenerator},
    models::{ContactMessage, NewContactMessage, NewUser, Post, Project, User},
    ordering,
    repository::ContentRepository,
    seed::Seed,
};

/// Keyed collection that remembers insertion order
#[derive(Debug)]
struct Collection<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Clone> Collection<T> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert or replace; a replaced entity keeps its original position
    fn upsert(&mut self, id: String, entity: T) {
        if let Some(&pos) = self.index.get(&id) {
            if let Some(slot) = self.entries.get_mut(pos) {
                *slot = entity;
                return;
            }
        }
        self.index.insert(id, self.entries.len());
        self.entries.push(entity);
    }

    fn get(&self, id: &str) -> Option<T> {
        self.index
            .get(id)
            .and_then(|&pos| self.entries.get(pos))
            .cloned()
    }

    fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.entries.iter().find(|entity| predicate(entity)).cloned()
    }

    fn snapshot(&self) -> Vec<T> {
        self.entries.clone()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

struct Store {
    users: RwLock<Collection<User>>,
    projects: RwLock<Collection<Project>>,
    posts: RwLock<Collection<Post>>,
    contact_messages: RwLock<Collection<ContactMessage>>,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock + Send + Sync>,
}

/// Thread-safe in-memory content repository.
///
/// Clones share the same store; every call to [`InMemoryContentRepository::new`]
/// or [`InMemoryContentRepositoryBuilder::build`] creates an independent one.
#[derive(Clone)]
pub struct InMemoryContentRepository {
    store: Arc<Store>,
}

impl fmt::Debug for InMemoryContentRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryContentRepository").finish_non_exhaustive()
    }
}

impl Default for InMemoryContentRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryContentRepository {
    /// Create a repository seeded with the portfolio content, UUID ids and the system clock
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start configuring a repository
    pub fn builder() -> InMemoryContentRepositoryBuilder {
        InMemoryContentRepositoryBuilder::default()
    }

    /// Number of contact messages received so far
    pub async fn contact_message_count(&self) -> usize {
        self.store.contact_messages.read().await.len()
    }
}

/// Builder for [`InMemoryContentRepository`]
pub struct InMemoryContentRepositoryBuilder {
    seed: Seed,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock + Send + Sync>,
}

impl Default for InMemoryContentRepositoryBuilder {
    fn default() -> Self {
        Self {
            seed: Seed::portfolio(),
            ids: Box::new(UuidIdGenerator),
            clock: Box::new(DefaultClock),
        }
    }
}

impl InMemoryContentRepositoryBuilder {
    /// Replace the portfolio seed
    pub fn seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Use a custom id generator for users and contact messages
    pub fn id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Use a custom clock for contact message timestamps
    pub fn clock(mut self, clock: impl Clock + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Build the repository, loading the seed
    pub fn build(self) -> InMemoryContentRepository {
        let mut projects = Collection::new();
        for project in self.seed.projects {
            projects.upsert(project.id.clone(), project);
        }

        let mut posts = Collection::new();
        for post in self.seed.posts {
            posts.upsert(post.id.clone(), post);
        }

        info!(
            projects = projects.len(),
            posts = posts.len(),
            "Content repository seeded"
        );

        InMemoryContentRepository {
            store: Arc::new(Store {
                users: RwLock::new(Collection::new()),
                projects: RwLock::new(projects),
                posts: RwLock::new(posts),
                contact_messages: RwLock::new(Collection::new()),
                ids: self.ids,
                clock: self.clock,
            }),
        }
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn get_user(&self, id: &str) -> RepositoryResult<Option<User>> {
        Ok(self.store.users.read().await.get(id))
    }

    async fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>> {
        let users = self.store.users.read().await;
        Ok(users.find(|user| user.username == username))
    }

    async fn create_user(&self, new_user: NewUser) -> RepositoryResult<User> {
        info!("Creating new user: {}", new_user.username);

        let user = User::from_new(self.store.ids.generate(), new_user);
        self.store
            .users
            .write()
            .await
            .upsert(user.id.clone(), user.clone());

        Ok(user)
    }

    async fn get_projects(&self) -> RepositoryResult<Vec<Project>> {
        let mut projects = self.store.projects.read().await.snapshot();
        ordering::sort_for_display(&mut projects);
        debug!(count = projects.len(), "Listing projects");
        Ok(projects)
    }

    async fn get_project(&self, id: &str) -> RepositoryResult<Option<Project>> {
        debug!("Finding project by ID: {}", id);
        Ok(self.store.projects.read().await.get(id))
    }

    async fn get_featured_projects(&self) -> RepositoryResult<Vec<Project>> {
        let projects = self.get_projects().await?;
        Ok(ordering::featured_only(projects))
    }

    async fn get_posts(&self) -> RepositoryResult<Vec<Post>> {
        let mut posts = self.store.posts.read().await.snapshot();
        ordering::sort_newest_first(&mut posts);
        debug!(count = posts.len(), "Listing posts");
        Ok(posts)
    }

    async fn get_post(&self, id: &str) -> RepositoryResult<Option<Post>> {
        debug!("Finding post by ID: {}", id);
        Ok(self.store.posts.read().await.get(id))
    }

    async fn create_contact_message(
        &self,
        new_message: NewContactMessage,
    ) -> RepositoryResult<ContactMessage> {
        let message = ContactMessage::from_new(
            self.store.ids.generate(),
            new_message,
            self.store.clock.utc(),
        );
        info!(id = %message.id, "Storing contact message from {}", message.email);

        self.store
            .contact_messages
            .write()
            .await
            .upsert(message.id.clone(), message.clone());

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdGenerator;
    use chrono::{TimeZone, Utc};

    fn project_ids(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.id.as_str()).collect()
    }

    fn empty_repository() -> InMemoryContentRepository {
        InMemoryContentRepository::builder()
            .seed(Seed::empty())
            .id_generator(SequentialIdGenerator::new("id"))
            .build()
    }

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: "b".to_string(),
        }
    }

    fn new_message(subject: Option<&str>) -> NewContactMessage {
        NewContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: subject.map(str::to_string),
            message: "Hello there, nice portfolio!".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_user() -> RepositoryResult<()> {
        let repository = InMemoryContentRepository::builder().seed(Seed::empty()).build();

        let created = repository.create_user(new_user("a")).await?;
        let fetched = repository.get_user(&created.id).await?;

        assert!(!created.id.is_empty());
        assert_eq!(created.username, "a");
        assert_eq!(created.password, "b");
        assert_eq!(fetched, Some(created));
        Ok(())
    }

    #[tokio::test]
    async fn test_sequential_users_get_distinct_ids() -> RepositoryResult<()> {
        let repository = InMemoryContentRepository::builder().seed(Seed::empty()).build();

        let first = repository.create_user(new_user("a")).await?;
        let second = repository.create_user(new_user("a")).await?;

        assert_ne!(first.id, second.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_usernames_are_permitted() -> RepositoryResult<()> {
        let repository = empty_repository();

        let first = repository.create_user(new_user("edwin")).await?;
        let second = repository.create_user(new_user("edwin")).await?;
        let found = repository.get_user_by_username("edwin").await?;

        assert_eq!(first.id, "id-1");
        assert_eq!(second.id, "id-2");
        assert_eq!(found.map(|u| u.id), Some("id-1".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn test_username_lookup_is_case_sensitive() -> RepositoryResult<()> {
        let repository = empty_repository();
        repository.create_user(new_user("Edwin")).await?;

        assert!(repository.get_user_by_username("edwin").await?.is_none());
        assert!(repository.get_user_by_username("Edwin").await?.is_some());
        assert!(repository.get_user("missing").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_contact_message_is_stamped_and_stored() -> RepositoryResult<()> {
        let repository = empty_repository();
        let before = Utc::now();

        let message = repository.create_contact_message(new_message(None)).await?;

        assert_eq!(message.id, "id-1");
        assert!(message.created_at >= before);
        assert_eq!(message.subject, None);
        assert_eq!(repository.contact_message_count().await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_contact_messages_get_unique_ids() -> RepositoryResult<()> {
        let repository = InMemoryContentRepository::builder().seed(Seed::empty()).build();

        let first = repository.create_contact_message(new_message(Some("Hi"))).await?;
        let second = repository.create_contact_message(new_message(None)).await?;

        assert_ne!(first.id, second.id);
        assert_eq!(first.subject.as_deref(), Some("Hi"));
        assert_eq!(repository.contact_message_count().await, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_entities_are_none() -> RepositoryResult<()> {
        let repository = InMemoryContentRepository::new();

        assert!(repository.get_project("does-not-exist").await?.is_none());
        assert!(repository.get_post("does-not-exist").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_projects_sorted_and_featured_subset() -> RepositoryResult<()> {
        let repository = InMemoryContentRepository::builder()
            .seed(
                Seed::empty()
                    .with_project(Project::new("p1", "One", "", "AI").with_order(2))
                    .with_project(Project::new("p2", "Two", "", "AI").with_order(1).with_featured(true)),
            )
            .build();

        assert_eq!(project_ids(&repository.get_projects().await?), vec!["p2", "p1"]);
        assert_eq!(project_ids(&repository.get_featured_projects().await?), vec!["p2"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_equal_order_keeps_insertion_order() -> RepositoryResult<()> {
        let repository = InMemoryContentRepository::builder()
            .seed(
                Seed::empty()
                    .with_project(Project::new("z", "", "", "AI").with_featured(true))
                    .with_project(Project::new("a", "", "", "AI"))
                    .with_project(Project::new("m", "", "", "AI").with_featured(true)),
            )
            .build();

        let projects = repository.get_projects().await?;
        let featured = repository.get_featured_projects().await?;

        assert_eq!(project_ids(&projects), vec!["z", "a", "m"]);
        assert_eq!(project_ids(&featured), vec!["z", "m"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_reseeding_an_id_replaces_in_place() -> RepositoryResult<()> {
        let repository = InMemoryContentRepository::builder()
            .seed(
                Seed::empty()
                    .with_project(Project::new("p1", "Old", "", "AI"))
                    .with_project(Project::new("p2", "", "", "AI"))
                    .with_project(Project::new("p1", "New", "", "AI")),
            )
            .build();

        let projects = repository.get_projects().await?;

        assert_eq!(project_ids(&projects), vec!["p1", "p2"]);
        assert_eq!(projects[0].title, "New");
        Ok(())
    }

    #[tokio::test]
    async fn test_posts_newest_first() -> RepositoryResult<()> {
        let repository = InMemoryContentRepository::builder()
            .seed(
                Seed::empty()
                    .with_post(Post::new("a", "", "").with_created_at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()))
                    .with_post(Post::new("b", "", "").with_created_at(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap())),
            )
            .build();

        let posts = repository.get_posts().await?;
        let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, vec!["b", "a"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_returned_entities_are_copies() -> RepositoryResult<()> {
        let repository = InMemoryContentRepository::new();

        let mut projects = repository.get_projects().await?;
        projects[0].title = "Tampered".to_string();
        projects.clear();

        let again = repository.get_projects().await?;
        assert_eq!(again.len(), 3);
        assert_ne!(again[0].title, "Tampered");
        Ok(())
    }

    #[tokio::test]
    async fn test_clones_share_state() -> RepositoryResult<()> {
        let repository = empty_repository();
        let handle = repository.clone();

        let user = handle.create_user(new_user("shared")).await?;

        assert_eq!(repository.get_user(&user.id).await?, Some(user));
        Ok(())
    }

    #[tokio::test]
    async fn test_portfolio_seed_is_loaded() -> RepositoryResult<()> {
        let repository = InMemoryContentRepository::new();

        let projects = repository.get_projects().await?;
        let posts = repository.get_posts().await?;

        assert_eq!(projects[0].id, "intellitutor-ai");
        assert_eq!(posts.first().map(|p| p.id.as_str()), Some("post-1"));
        assert!(repository.get_post("post-2").await?.is_some());
        Ok(())
    }
}
