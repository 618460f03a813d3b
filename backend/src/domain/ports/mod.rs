//! Driving and driven ports for the record service.
//!
//! Inbound adapters depend on [`UsersQuery`] and [`UsersCommand`]; outbound
//! adapters implement [`UserRepository`]. Keeping both sides behind traits
//! lets the HTTP layer and the service be tested without a database.

pub mod user_repository;
pub mod users_command;
pub mod users_query;

pub use self::user_repository::{UserPersistenceError, UserRepository};
pub use self::users_command::UsersCommand;
pub use self::users_query::UsersQuery;

#[cfg(test)]
pub use self::user_repository::MockUserRepository;
#[cfg(test)]
pub use self::users_command::MockUsersCommand;
#[cfg(test)]
pub use self::users_query::MockUsersQuery;
