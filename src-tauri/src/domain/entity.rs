//! Domain Layer - Core Entity Trait
//!
//! Shared contract for the store's row types. Every entity has a
//! database-assigned integer identity.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors. Commands flatten these to strings and the
/// frontend shows that text verbatim, so the messages are user-facing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    Conflict(String),
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(what) => write!(f, "not found: {}", what),
            DomainError::InvalidInput(why) => write!(f, "invalid input: {}", why),
            DomainError::Conflict(why) => write!(f, "conflict: {}", why),
            DomainError::Internal(why) => write!(f, "internal error: {}", why),
        }
    }
}

impl std::error::Error for DomainError {}
