//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::user::{EmailAddress, User};
use crate::domain::validation::{UserChanges, ValidatedCreateUser};

/// Persistence errors raised by user repository adapters.
///
/// A uniqueness violation on `email` is its own variant so callers can
/// answer it differently from an outage or a broken query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user store connection failed: {message}")]
    Connection {
        /// Human-readable summary of the connection failure.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("user store query failed: {message}")]
    Query {
        /// Human-readable summary of the query failure.
        message: String,
    },
    /// Insert or update collided with the unique `email` constraint.
    #[error("a user with this email is already stored")]
    DuplicateEmail,
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Driven port adapting a single-table user store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new record and return it with the store-assigned id and
    /// timestamps.
    async fn insert(&self, user: &ValidatedCreateUser) -> Result<User, UserPersistenceError>;

    /// Fetch all records ordered by id.
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a record by email.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Apply the supplied fields to an existing record, refreshing
    /// `updated_at`. Returns `None` when no row matched the id.
    async fn update(
        &self,
        id: i32,
        changes: &UserChanges,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Delete a record by identifier, reporting whether a row was removed.
    async fn delete_by_id(&self, id: i32) -> Result<bool, UserPersistenceError>;
}
