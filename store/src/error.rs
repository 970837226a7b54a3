//! Store error types.

use std::fmt;

use thiserror::Error;

/// Which collection a store operation was aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    User,
    Post,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// The single domain error: an id-keyed lookup missed during update/delete.
///
/// Reads (`list_*`, `get_*`, `find_user_by_email`) never fail; a missing id
/// there is `None`, not an error.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: String },
}

impl StoreError {
    pub(crate) fn not_found(entity: Entity, id: &str) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity_and_id() {
        let err = StoreError::not_found(Entity::Post, "42");
        assert_eq!(err.to_string(), "post not found: 42");
    }
}
