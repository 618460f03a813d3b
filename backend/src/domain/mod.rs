//! Domain primitives, validation, and the record service.
//!
//! Purpose: define strongly typed domain entities and the use cases exposed
//! to inbound adapters. Failures are values (`Result<_, Error>`); nothing in
//! this layer panics or performs I/O beyond awaiting the repository port.
//!
//! Public surface:
//! - [`User`] — the persisted user record.
//! - [`Error`] / [`ErrorCode`] — transport-agnostic failure payload.
//! - [`UserService`] — orchestrates validation and persistence.
//! - [`ports`] — driving and driven port traits.

pub mod error;
pub mod ports;
pub mod user;
pub mod user_service;
pub mod validation;

pub use self::error::{Error, ErrorCode};
pub use self::user::{EmailAddress, User, UserName, UserValidationError};
pub use self::user_service::UserService;
pub use self::validation::{
    CreateUserRequest, FieldError, UpdateUserRequest, UserChanges, ValidatedCreateUser,
};
