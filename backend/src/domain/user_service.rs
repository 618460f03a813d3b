//! Record service orchestrating validation and persistence.
//!
//! Implements the driving ports over any [`UserRepository`]. Every failure
//! is returned as a domain [`Error`] value; the store's uniqueness
//! constraint is the only concurrency control, so two racing creates with
//! the same email resolve here as one success and one conflict.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::error::Error;
use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::user::{EmailAddress, User};
use crate::domain::validation::{
    self, CreateUserRequest, FieldError, UpdateUserRequest,
};

/// Service implementing the five record operations.
pub struct UserService<R> {
    repository: Arc<R>,
}

impl<R> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: UserRepository> UserService<R> {
    fn validation_failed(errors: Vec<FieldError>) -> Error {
        Error::invalid_request("Validation failed").with_details(json!({ "errors": errors }))
    }

    fn map_persistence_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::DuplicateEmail => {
                Error::conflict("User with this email already exists")
            }
            UserPersistenceError::Connection { message } => {
                Error::service_unavailable(format!("user store unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Error::internal(format!("user store error: {message}"))
            }
        }
    }
}

#[async_trait]
impl<R: UserRepository> UsersQuery for UserService<R> {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .find_all()
            .await
            .map_err(Self::map_persistence_error)
    }

    async fn find_user(&self, id: i32) -> Result<Option<User>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)
    }

    async fn find_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>, Error> {
        self.repository
            .find_by_email(email)
            .await
            .map_err(Self::map_persistence_error)
    }
}

#[async_trait]
impl<R: UserRepository> UsersCommand for UserService<R> {
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error> {
        let validated = validation::decode_create(&request).map_err(Self::validation_failed)?;
        self.repository
            .insert(&validated)
            .await
            .map_err(Self::map_persistence_error)
    }

    async fn update_user(&self, id: i32, request: UpdateUserRequest) -> Result<User, Error> {
        let existing = self
            .repository
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?;
        if existing.is_none() {
            return Err(Error::not_found("User not found"));
        }

        let changes = validation::decode_update(&request).map_err(Self::validation_failed)?;
        let updated = self
            .repository
            .update(id, &changes)
            .await
            .map_err(Self::map_persistence_error)?;

        // The row can vanish between the lookup and the update.
        updated.ok_or_else(|| Error::not_found("User not found"))
    }

    async fn delete_user(&self, id: i32) -> Result<(), Error> {
        let removed = self
            .repository
            .delete_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?;
        if removed {
            Ok(())
        } else {
            Err(Error::not_found("User not found"))
        }
    }
}
