//! Sample fixtures loaded at startup when seeding is enabled.
//!
//! The ids are small literal strings so demo logins and cross-references
//! stay predictable; store-assigned ids for new records are UUIDs and never
//! collide with these.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Post, PostStatus, Role, User, UserStatus};

/// The four sample accounts, including the `admin@cms.com` demo login.
pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@cms.com".to_string(),
            role: Role::Admin,
            status: UserStatus::Active,
            last_active: "2 hours ago".to_string(),
        },
        User {
            id: "2".to_string(),
            name: "Editor John".to_string(),
            email: "editor@cms.com".to_string(),
            role: Role::Editor,
            status: UserStatus::Active,
            last_active: "1 day ago".to_string(),
        },
        User {
            id: "3".to_string(),
            name: "Viewer Jane".to_string(),
            email: "viewer@cms.com".to_string(),
            role: Role::Viewer,
            status: UserStatus::Inactive,
            last_active: "1 week ago".to_string(),
        },
        User {
            id: "4".to_string(),
            name: "David Brown".to_string(),
            email: "david@example.com".to_string(),
            role: Role::Editor,
            status: UserStatus::Active,
            last_active: "3 hours ago".to_string(),
        },
    ]
}

/// The three sample posts. Author ids reference the sample users.
pub fn posts() -> Vec<Post> {
    vec![
        Post {
            id: "1".to_string(),
            title: "Getting Started with React".to_string(),
            content: "React is a powerful library for building user interfaces. It allows \
                      developers to create reusable components and manage application state \
                      efficiently."
                .to_string(),
            status: PostStatus::Published,
            author_id: "1".to_string(),
            created_at: ts(2024, 1, 15, 10, 0),
            updated_at: ts(2024, 1, 15, 10, 0),
        },
        Post {
            id: "2".to_string(),
            title: "TypeScript Best Practices".to_string(),
            content: "TypeScript adds static typing to JavaScript, helping catch errors during \
                      development. This article covers essential patterns and practices for \
                      TypeScript development."
                .to_string(),
            status: PostStatus::Draft,
            author_id: "2".to_string(),
            created_at: ts(2024, 1, 20, 14, 30),
            updated_at: ts(2024, 1, 20, 14, 30),
        },
        Post {
            id: "3".to_string(),
            title: "Building Scalable Applications".to_string(),
            content: "Learn how to architect applications that can grow with your business \
                      needs. We cover design patterns, code organization, and performance \
                      optimization."
                .to_string(),
            status: PostStatus::Published,
            author_id: "1".to_string(),
            created_at: ts(2024, 1, 25, 9, 15),
            updated_at: ts(2024, 1, 25, 9, 15),
        },
    ]
}

fn ts(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    // Literal fixture dates, always valid.
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let users = users();
        let posts = posts();
        assert_eq!(users.len(), 4);
        assert_eq!(posts.len(), 3);
        assert!(users.iter().any(|u| u.email == "admin@cms.com" && u.role == Role::Admin));
        assert!(posts.iter().all(|p| p.created_at == p.updated_at));
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let mut user_ids: Vec<_> = users().into_iter().map(|u| u.id).collect();
        user_ids.sort();
        user_ids.dedup();
        assert_eq!(user_ids.len(), 4);
    }
}
