//! # Role-based permissions
//!
//! A static, side-effect-free mapping from role to allowed actions:
//!
//! | role   | actions |
//! |--------|---------|
//! | admin  | create, read, update, delete, manage_users |
//! | editor | create, read, update |
//! | viewer | read |
//!
//! [`Role`] is a closed enum, so [`allowed_actions`] is exhaustive and the
//! compiler keeps the table total. Strings from outside the type system go
//! through [`role_can`], which denies anything that does not parse to a
//! known role — absence of a mapping is denial, never an error.

use serde::{Deserialize, Serialize};
use store::Role;

/// The closed set of actions a role may be granted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    ManageUsers,
}

/// All actions, for table-driven checks in tests and UIs.
pub const ALL_ACTIONS: [Action; 5] = [
    Action::Create,
    Action::Read,
    Action::Update,
    Action::Delete,
    Action::ManageUsers,
];

/// The actions granted to a role.
pub fn allowed_actions(role: Role) -> &'static [Action] {
    match role {
        Role::Admin => &[
            Action::Create,
            Action::Read,
            Action::Update,
            Action::Delete,
            Action::ManageUsers,
        ],
        Role::Editor => &[Action::Create, Action::Read, Action::Update],
        Role::Viewer => &[Action::Read],
    }
}

/// May `role` perform `action`?
pub fn has_permission(role: Role, action: Action) -> bool {
    allowed_actions(role).contains(&action)
}

/// String-keyed permission check for callers holding an untyped role tag.
/// Unknown roles get nothing (fail closed).
pub fn role_can(role: &str, action: Action) -> bool {
    Role::parse(role).is_some_and(|r| has_permission(r, action))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_gets_every_action() {
        for action in ALL_ACTIONS {
            assert!(has_permission(Role::Admin, action));
        }
    }

    #[test]
    fn test_editor_cannot_delete_or_manage_users() {
        assert!(has_permission(Role::Editor, Action::Create));
        assert!(has_permission(Role::Editor, Action::Read));
        assert!(has_permission(Role::Editor, Action::Update));
        assert!(!has_permission(Role::Editor, Action::Delete));
        assert!(!has_permission(Role::Editor, Action::ManageUsers));
    }

    #[test]
    fn test_viewer_is_read_only() {
        for action in ALL_ACTIONS {
            assert_eq!(
                has_permission(Role::Viewer, action),
                action == Action::Read
            );
        }
    }

    #[test]
    fn test_unknown_role_string_is_denied_everything() {
        for action in ALL_ACTIONS {
            assert!(!role_can("superuser", action));
            assert!(!role_can("", action));
        }
    }

    #[test]
    fn test_role_can_parses_known_roles() {
        assert!(role_can("Admin", Action::ManageUsers));
        assert!(role_can("viewer", Action::Read));
        assert!(!role_can("viewer", Action::Create));
    }
}
