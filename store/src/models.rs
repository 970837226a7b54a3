//! # Domain models for users and posts
//!
//! Defines the record types held by [`crate::MemoryStore`] and the partial
//! types used to create and patch them. Everything here is
//! `Serialize + Deserialize` so records can cross an API boundary unchanged.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A dashboard account. Carries a stable string `id`, display `name`, `email` (the login key — uniqueness is assumed, never enforced), a [`Role`], an active/inactive [`UserStatus`], and a free-form `last_active` display string. |
//! | [`Post`] | A content entry. Carries `id`, `title`, body `content`, a draft/published [`PostStatus`], an `author_id` (weak reference to a user id, not validated), and `created_at`/`updated_at` timestamps. |
//! | [`NewUser`] / [`NewPost`] | Creation payloads — the record minus the store-assigned fields (`id`, and for posts the timestamps). |
//! | [`UserPatch`] / [`PostPatch`] | Partial updates. Only `Some` fields are merged; `None` leaves the existing value untouched. |
//!
//! ## Enumerations
//!
//! [`Role`] is the closed set `admin | editor | viewer` and [`Role::parse`]
//! maps arbitrary strings into it case-insensitively, returning `None` for
//! anything else so callers can fail closed. [`UserStatus`] and
//! [`PostStatus`] serialize as their lowercase names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role, determining permitted actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl Role {
    /// Parse a role from a string, case-insensitively.
    ///
    /// Returns `None` for anything outside the closed set, so lookups keyed
    /// on untrusted strings can treat an unknown role as having no
    /// permissions at all.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "editor" => Some(Self::Editor),
            "viewer" => Some(Self::Viewer),
            _ => None,
        }
    }

    /// Lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Viewer => "viewer",
        }
    }
}

/// Whether an account is currently active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

/// Publication state of a post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

/// A dashboard user account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Login key. Uniqueness within the collection is assumed, not enforced.
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    /// Free-form display string, e.g. "2 hours ago".
    pub last_active: String,
}

/// A content post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    /// Weak reference to a user id; existence is not validated.
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation; always >= `created_at`.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a user — everything except the assigned id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub last_active: String,
}

/// Payload for creating a post — the store assigns id and timestamps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    pub author_id: String,
}

/// Partial update for a user. `None` fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
    pub last_active: Option<String>,
}

/// Partial update for a post. `None` fields keep their current value.
/// Timestamps are managed by the store and cannot be patched directly.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<PostStatus>,
    pub author_id: Option<String>,
}
