//! Dashboard headline numbers, derived on demand from the collections.

use serde::{Deserialize, Serialize};

use crate::models::{Post, PostStatus, Role, User, UserStatus};

/// Counts shown on the dashboard landing view. Recomputed per render;
/// nothing is cached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_posts: usize,
    pub published_posts: usize,
    pub draft_posts: usize,
    pub total_users: usize,
    pub active_users: usize,
    pub admin_users: usize,
}

impl DashboardStats {
    /// Derive the counts from snapshots of both collections.
    pub fn derive(posts: &[Post], users: &[User]) -> Self {
        Self {
            total_posts: posts.len(),
            published_posts: posts
                .iter()
                .filter(|p| p.status == PostStatus::Published)
                .count(),
            draft_posts: posts.iter().filter(|p| p.status == PostStatus::Draft).count(),
            total_users: users.len(),
            active_users: users
                .iter()
                .filter(|u| u.status == UserStatus::Active)
                .count(),
            admin_users: users.iter().filter(|u| u.role == Role::Admin).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_stats_over_seed_data() {
        let stats = DashboardStats::derive(&seed::posts(), &seed::users());
        assert_eq!(
            stats,
            DashboardStats {
                total_posts: 3,
                published_posts: 2,
                draft_posts: 1,
                total_users: 4,
                active_users: 3,
                admin_users: 1,
            }
        );
    }

    #[test]
    fn test_stats_over_empty_collections() {
        assert_eq!(DashboardStats::derive(&[], &[]), DashboardStats::default());
    }
}
