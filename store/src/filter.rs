//! # List filtering — search and categorical predicates
//!
//! Pure derivations of a visible subset from a collection: a
//! case-insensitive substring query over the record's text fields plus
//! zero or more exact-match categorical selections. Input order is
//! preserved and nothing is sorted; filtering an already-filtered result
//! with the same filter yields the same set.
//!
//! [`Selection`] is the typed rendition of the UI's `"all"` sentinel: the
//! `All` variant disables a categorical predicate entirely, `Only(value)`
//! requires an exact match.

use serde::{Deserialize, Serialize};

use crate::models::{Post, PostStatus, Role, User, UserStatus};

/// A categorical filter: match everything, or exactly one value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection<T> {
    All,
    Only(T),
}

// Manual impl: the derive would demand `T: Default`, which the status and
// role enums deliberately do not have.
impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// Whether a record's value passes this selection.
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

/// Filter over the posts collection: title search plus status.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PostFilter {
    /// Case-insensitive substring matched against the title.
    /// Empty matches everything.
    pub query: String,
    pub status: Selection<PostStatus>,
}

/// Filter over the users collection: name/email search plus role and status.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserFilter {
    /// Case-insensitive substring matched against name or email.
    /// Empty matches everything.
    pub query: String,
    pub role: Selection<Role>,
    pub status: Selection<UserStatus>,
}

/// Posts whose title contains the query and whose status passes the
/// selection, in input order.
pub fn filter_posts(posts: &[Post], filter: &PostFilter) -> Vec<Post> {
    let query = filter.query.to_lowercase();
    posts
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&query))
        .filter(|p| filter.status.matches(&p.status))
        .cloned()
        .collect()
}

/// Users whose name or email contains the query and whose role and status
/// pass the selections, in input order.
pub fn filter_users(users: &[User], filter: &UserFilter) -> Vec<User> {
    let query = filter.query.to_lowercase();
    users
        .iter()
        .filter(|u| {
            u.name.to_lowercase().contains(&query) || u.email.to_lowercase().contains(&query)
        })
        .filter(|u| filter.role.matches(&u.role))
        .filter(|u| filter.status.matches(&u.status))
        .cloned()
        .collect()
}
