//! Domain Layer - Core Entity Trait
//!
//! Every board entity carries a string id that is unique within its scope.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// Find an entity by id in an ordered list
pub fn find_by_id<'a, E: Entity>(entities: &'a [E], id: &str) -> Option<&'a E> {
    entities.iter().find(|e| e.id() == id)
}

/// Position of an entity in an ordered list
pub fn position_of<E: Entity>(entities: &[E], id: &str) -> Option<usize> {
    entities.iter().position(|e| e.id() == id)
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    Conflict(String),
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Named(&'static str);

    impl Entity for Named {
        fn id(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_find_and_position() {
        let list = vec![Named("a"), Named("b"), Named("c")];
        assert_eq!(find_by_id(&list, "b").map(|n| n.0), Some("b"));
        assert_eq!(position_of(&list, "c"), Some(2));
        assert!(find_by_id(&list, "z").is_none());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::InvalidInput("bad status".to_string());
        assert_eq!(err.to_string(), "Invalid input: bad status");
    }
}
