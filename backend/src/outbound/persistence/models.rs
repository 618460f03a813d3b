//! Row types mapping the `users` table to and from domain values.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::ports::UserPersistenceError;
use crate::domain::{EmailAddress, User, UserName};

use super::schema::users;

/// Queryable row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRow {
    /// Convert a stored row into the domain entity.
    ///
    /// Rows are only written through the validated insert and update
    /// paths, so a refinement failure here means the table was modified
    /// out of band; it is reported as a query error.
    pub(crate) fn into_user(self) -> Result<User, UserPersistenceError> {
        let email = EmailAddress::new(self.email)
            .map_err(|err| UserPersistenceError::query(format!("stored email rejected: {err}")))?;
        let name = UserName::new(self.name)
            .map_err(|err| UserPersistenceError::query(format!("stored name rejected: {err}")))?;
        Ok(User::new(
            self.id,
            email,
            name,
            self.created_at,
            self.updated_at,
        ))
    }
}

/// Insertable row for new user records; id and timestamps come from the
/// database defaults.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub email: &'a str,
    pub name: &'a str,
}

/// Changeset for partial updates. `None` fields are skipped by Diesel, so
/// unsupplied request fields never touch the stored columns.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserRowChanges<'a> {
    pub email: Option<&'a str>,
    pub name: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}
