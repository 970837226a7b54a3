//! Single-slot session holder.

use std::sync::{Arc, Mutex};

use store::{MemoryStore, User};

/// Holds the one currently-authenticated user, if any.
///
/// Constructed once at application start with the store it resolves logins
/// against; clones share the slot. State lives only in memory — a reload
/// starts logged out.
#[derive(Clone, Debug)]
pub struct Session {
    store: MemoryStore,
    current: Arc<Mutex<Option<User>>>,
}

impl Session {
    pub fn new(store: MemoryStore) -> Self {
        Self {
            store,
            current: Arc::new(Mutex::new(None)),
        }
    }

    /// Attempt a login by exact email match.
    ///
    /// The password is accepted but never checked against anything — this is
    /// mock authentication for a demo, not a real credential flow. On a
    /// match the slot is filled and the user returned; on a miss the slot is
    /// left as it was and `None` returned. Failure is a value, not an error.
    pub async fn login(&self, email: &str, _password: &str) -> Option<User> {
        match self.store.find_user_by_email(email).await {
            Some(user) => {
                tracing::info!("Login: {} ({})", user.name, user.email);
                *self.current.lock().unwrap() = Some(user.clone());
                Some(user)
            }
            None => {
                tracing::warn!("Login failed for {}", email);
                None
            }
        }
    }

    /// Clear the slot unconditionally.
    pub fn logout(&self) {
        *self.current.lock().unwrap() = None;
    }

    /// Snapshot of the current user, or `None` when logged out.
    pub fn current_user(&self) -> Option<User> {
        self.current.lock().unwrap().clone()
    }
}
