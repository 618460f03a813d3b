//! Driving port for read-only user lookups.

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::user::{EmailAddress, User};

/// Read-side use cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return all records; an empty list is a valid success.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Look up a record by id. Absence is an expected outcome, not a
    /// failure, so it is reported as `Ok(None)`.
    async fn find_user(&self, id: i32) -> Result<Option<User>, Error>;

    /// Look up a record by its unique email, with the same absence
    /// semantics as [`find_user`](Self::find_user).
    async fn find_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>, Error>;
}
