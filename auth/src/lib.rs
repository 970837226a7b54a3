//! # Auth crate — roles, permissions, and the session slot
//!
//! Everything the dashboard needs to answer "who is logged in" and "may
//! they do this":
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`permissions`] | Static role → allowed-action table, exhaustively matched over the closed [`store::Role`] enum, with a fail-closed string lookup for untyped role tags |
//! | [`session`] | The single mutable slot holding the current user; login resolves an email through the store, logout clears the slot |

pub mod permissions;
pub mod session;

pub use permissions::{allowed_actions, has_permission, role_can, Action, ALL_ACTIONS};
pub use session::Session;
