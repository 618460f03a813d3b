//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::user::User;
use crate::domain::validation::{CreateUserRequest, UpdateUserRequest};

/// Write-side use cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Validate and persist a new record, returning it with the generated
    /// id and timestamps.
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error>;

    /// Apply a validated partial update to an existing record.
    async fn update_user(&self, id: i32, request: UpdateUserRequest) -> Result<User, Error>;

    /// Delete a record by id; fails with not-found when nothing matched.
    async fn delete_user(&self, id: i32) -> Result<(), Error>;
}
