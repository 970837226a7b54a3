//! In-memory entity store backing the dashboard.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use crate::config::DashboardConfig;
use crate::error::{Entity, StoreError};
use crate::models::{NewPost, NewUser, Post, PostPatch, User, UserPatch};
use crate::seed;

/// The owned store for both record collections.
///
/// Constructed once at application start and injected into consumers; clones
/// share the same underlying collections. Every operation sleeps for its
/// configured latency before touching the data, purely so a frontend can
/// demonstrate pending states. Reads return snapshot copies — mutating a
/// returned record does not write back.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    users: Arc<Mutex<Vec<User>>>,
    posts: Arc<Mutex<Vec<Post>>>,
    config: DashboardConfig,
}

impl MemoryStore {
    /// Create a store per the given config, seeding the sample fixtures
    /// unless `[seed] enabled = false`.
    pub fn new(config: DashboardConfig) -> Self {
        let (users, posts) = if config.seed.enabled {
            (seed::users(), seed::posts())
        } else {
            (Vec::new(), Vec::new())
        };
        Self {
            users: Arc::new(Mutex::new(users)),
            posts: Arc::new(Mutex::new(posts)),
            config,
        }
    }

    /// Empty store with zero latency, for tests and programmatic setups.
    pub fn empty() -> Self {
        Self::new(DashboardConfig::default().with_zero_latency().without_seed())
    }

    async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    // --- Users ---

    /// Snapshot of all users, in insertion order.
    pub async fn list_users(&self) -> Vec<User> {
        self.pause(self.config.latency.list_delay()).await;
        self.users.lock().unwrap().clone()
    }

    /// Look up a user by id.
    pub async fn get_user(&self, id: &str) -> Option<User> {
        self.pause(self.config.latency.get_delay()).await;
        self.users.lock().unwrap().iter().find(|u| u.id == id).cloned()
    }

    /// Look up a user by exact email match.
    pub async fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.pause(self.config.latency.get_delay()).await;
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    /// Append a new user with a fresh id.
    ///
    /// Email uniqueness is not checked, matching the rest of the contract:
    /// it is an assumed invariant, not an enforced one.
    pub async fn create_user(&self, new: NewUser) -> User {
        self.pause(self.config.latency.write_delay()).await;
        let user = User {
            id: fresh_id(),
            name: new.name,
            email: new.email,
            role: new.role,
            status: new.status,
            last_active: new.last_active,
        };
        self.users.lock().unwrap().push(user.clone());
        tracing::info!("Created user {}", user.id);
        user
    }

    /// Merge a patch over an existing user.
    pub async fn update_user(&self, id: &str, patch: UserPatch) -> Result<User, StoreError> {
        self.pause(self.config.latency.write_delay()).await;
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| StoreError::not_found(Entity::User, id))?;
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(role) = patch.role {
            user.role = role;
        }
        if let Some(status) = patch.status {
            user.status = status;
        }
        if let Some(last_active) = patch.last_active {
            user.last_active = last_active;
        }
        tracing::info!("Updated user {}", id);
        Ok(user.clone())
    }

    /// Remove a user by id.
    pub async fn delete_user(&self, id: &str) -> Result<(), StoreError> {
        self.pause(self.config.latency.write_delay()).await;
        let mut users = self.users.lock().unwrap();
        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| StoreError::not_found(Entity::User, id))?;
        users.remove(index);
        tracing::info!("Deleted user {}", id);
        Ok(())
    }

    // --- Posts ---

    /// Snapshot of all posts, in insertion order.
    pub async fn list_posts(&self) -> Vec<Post> {
        self.pause(self.config.latency.list_delay()).await;
        self.posts.lock().unwrap().clone()
    }

    /// Look up a post by id.
    pub async fn get_post(&self, id: &str) -> Option<Post> {
        self.pause(self.config.latency.get_delay()).await;
        self.posts.lock().unwrap().iter().find(|p| p.id == id).cloned()
    }

    /// Append a new post with a fresh id and current timestamps.
    ///
    /// The author id is a weak reference — it is not checked against the
    /// users collection.
    pub async fn create_post(&self, new: NewPost) -> Post {
        self.pause(self.config.latency.write_delay()).await;
        let now = Utc::now();
        let post = Post {
            id: fresh_id(),
            title: new.title,
            content: new.content,
            status: new.status,
            author_id: new.author_id,
            created_at: now,
            updated_at: now,
        };
        self.posts.lock().unwrap().push(post.clone());
        tracing::info!("Created post {}", post.id);
        post
    }

    /// Merge a patch over an existing post and refresh `updated_at`.
    pub async fn update_post(&self, id: &str, patch: PostPatch) -> Result<Post, StoreError> {
        self.pause(self.config.latency.write_delay()).await;
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found(Entity::Post, id))?;
        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(content) = patch.content {
            post.content = content;
        }
        if let Some(status) = patch.status {
            post.status = status;
        }
        if let Some(author_id) = patch.author_id {
            post.author_id = author_id;
        }
        post.updated_at = Utc::now();
        tracing::info!("Updated post {}", id);
        Ok(post.clone())
    }

    /// Remove a post by id.
    pub async fn delete_post(&self, id: &str) -> Result<(), StoreError> {
        self.pause(self.config.latency.write_delay()).await;
        let mut posts = self.posts.lock().unwrap();
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found(Entity::Post, id))?;
        posts.remove(index);
        tracing::info!("Deleted post {}", id);
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

/// Fresh collision-free id for a record created this session.
fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PostStatus, Role, UserStatus};

    fn seeded() -> MemoryStore {
        MemoryStore::new(DashboardConfig::default().with_zero_latency())
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "X".to_string(),
            email: email.to_string(),
            role: Role::Viewer,
            status: UserStatus::Active,
            last_active: "just now".to_string(),
        }
    }

    fn new_post(title: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: "Body".to_string(),
            status: PostStatus::Draft,
            author_id: "1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_seeded_store_contents() {
        let store = seeded();
        assert_eq!(store.list_users().await.len(), 4);
        assert_eq!(store.list_posts().await.len(), 3);

        let admin = store.find_user_by_email("admin@cms.com").await.unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert!(store.find_user_by_email("nobody@x.com").await.is_none());
    }

    #[tokio::test]
    async fn test_empty_store_starts_blank() {
        let store = MemoryStore::empty();
        assert!(store.list_users().await.is_empty());
        assert!(store.list_posts().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_user_then_get_round_trips() {
        let store = MemoryStore::empty();
        let created = store.create_user(new_user("x@x.com")).await;

        let fetched = store.get_user(&created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.email, "x@x.com");

        let matching: Vec<_> = store
            .list_users()
            .await
            .into_iter()
            .filter(|u| u.email == "x@x.com")
            .collect();
        assert_eq!(matching.len(), 1);
    }

    #[tokio::test]
    async fn test_create_post_sets_equal_timestamps() {
        let store = MemoryStore::empty();
        let post = store.create_post(new_post("Hello")).await;
        assert_eq!(post.created_at, post.updated_at);

        let fetched = store.get_post(&post.id).await.unwrap();
        assert_eq!(fetched, post);
    }

    #[tokio::test]
    async fn test_created_ids_are_distinct() {
        let store = MemoryStore::empty();
        let a = store.create_post(new_post("A")).await;
        let b = store.create_post(new_post("B")).await;
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_update_user_merges_without_dropping_fields() {
        let store = seeded();
        let patch = UserPatch {
            name: Some("Renamed".to_string()),
            ..UserPatch::default()
        };
        let updated = store.update_user("2", patch).await.unwrap();
        assert_eq!(updated.name, "Renamed");
        // Untouched fields survive the merge.
        assert_eq!(updated.email, "editor@cms.com");
        assert_eq!(updated.role, Role::Editor);
        assert_eq!(updated.status, UserStatus::Active);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let store = MemoryStore::empty();
        let err = store.update_user("999", UserPatch::default()).await.unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound {
                entity: Entity::User,
                id: "999".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_update_post_refreshes_updated_at() {
        let store = seeded();
        let before = store.get_post("1").await.unwrap();
        let patch = PostPatch {
            status: Some(PostStatus::Draft),
            ..PostPatch::default()
        };
        let updated = store.update_post("1", patch).await.unwrap();
        assert_eq!(updated.status, PostStatus::Draft);
        assert_eq!(updated.title, before.title);
        assert_eq!(updated.created_at, before.created_at);
        assert!(updated.updated_at > before.updated_at);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one_and_second_delete_fails() {
        let store = seeded();
        store.delete_post("2").await.unwrap();
        assert_eq!(store.list_posts().await.len(), 2);
        assert!(store.get_post("2").await.is_none());

        let err = store.delete_post("2").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_returns_snapshot_not_live_view() {
        let store = seeded();
        let mut snapshot = store.list_users().await;
        snapshot.clear();
        assert_eq!(store.list_users().await.len(), 4);
    }

    #[tokio::test]
    async fn test_clones_share_collections() {
        let store = MemoryStore::empty();
        let clone = store.clone();
        clone.create_user(new_user("shared@x.com")).await;
        assert_eq!(store.list_users().await.len(), 1);
    }
}
