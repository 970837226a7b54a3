pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod seed;
pub mod stats;

mod memory;
pub use memory::MemoryStore;

pub use config::DashboardConfig;
pub use error::{Entity, StoreError};
pub use filter::{filter_posts, filter_users, PostFilter, Selection, UserFilter};
pub use models::{
    NewPost, NewUser, Post, PostPatch, PostStatus, Role, User, UserPatch, UserStatus,
};
pub use stats::DashboardStats;
