//! User record entity and field refinement rules.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors raised by the field newtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserValidationError {
    /// The email failed the refinement rule.
    InvalidEmail,
    /// The name length is outside `[1, 100]`.
    InvalidName,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail => write!(f, "Invalid email format"),
            Self::InvalidName => write!(f, "Name must be between 1 and 100 characters"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Maximum allowed length for a user name.
pub const NAME_MAX: usize = 100;

/// Contact email, unique across all records.
///
/// The refinement is deliberately coarse: the address must contain `@` and
/// `.` and be longer than 5 characters. The client form applies the same
/// rule, so keep the two in step rather than tightening either side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`] from owned input.
    pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(value.into())
    }

    fn from_owned(value: String) -> Result<Self, UserValidationError> {
        let acceptable =
            value.contains('@') && value.contains('.') && value.chars().count() > 5;
        if acceptable {
            Ok(Self(value))
        } else {
            Err(UserValidationError::InvalidEmail)
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Human readable name, between 1 and 100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`] from owned input.
    pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(value.into())
    }

    fn from_owned(value: String) -> Result<Self, UserValidationError> {
        let length = value.chars().count();
        if (1..=NAME_MAX).contains(&length) {
            Ok(Self(value))
        } else {
            Err(UserValidationError::InvalidName)
        }
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Persisted user record.
///
/// ## Invariants
/// - `id` is assigned by the store on creation and never changes.
/// - `email` satisfies the refinement rule and is unique across records.
/// - `updated_at` is refreshed on every successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(example = 1)]
    id: i32,
    #[schema(value_type = String, example = "ada@example.com")]
    email: EmailAddress,
    #[schema(value_type = String, example = "Ada Lovelace")]
    name: UserName,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Build a [`User`] from validated components.
    pub fn new(
        id: i32,
        email: EmailAddress,
        name: UserName,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            name,
            created_at,
            updated_at,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Unique contact email.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Display name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Creation timestamp, set once by the store.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last mutation timestamp.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("test@example.com")]
    #[case("user.name@domain.co.uk")]
    #[case("123@numbers.com")]
    #[case("user-name@domain.org")]
    #[case("test+tag@example.com")]
    fn email_accepts_addresses_with_at_dot_and_length(#[case] value: &str) {
        assert!(EmailAddress::new(value).is_ok());
    }

    #[rstest]
    #[case::no_at("test.example.com")]
    #[case::no_dot("test@examplecom")]
    #[case::too_short("a@b.c")]
    #[case::empty("")]
    fn email_rejects_addresses_missing_a_rule(#[case] value: &str) {
        assert_eq!(
            EmailAddress::new(value),
            Err(UserValidationError::InvalidEmail)
        );
    }

    #[rstest]
    fn email_rule_does_not_require_a_realistic_tld() {
        // The check is a heuristic, not RFC grammar.
        assert!(EmailAddress::new("x@y.z42").is_ok());
    }

    #[rstest]
    #[case("A")]
    #[case("John Doe")]
    #[case("User123")]
    #[case("Test-User")]
    fn name_accepts_lengths_within_bounds(#[case] value: &str) {
        assert!(UserName::new(value).is_ok());
    }

    #[rstest]
    fn name_accepts_exactly_one_hundred_characters() {
        assert!(UserName::new("A".repeat(100)).is_ok());
    }

    #[rstest]
    fn name_rejects_empty_and_overlong_values() {
        assert_eq!(UserName::new(""), Err(UserValidationError::InvalidName));
        assert_eq!(
            UserName::new("A".repeat(101)),
            Err(UserValidationError::InvalidName)
        );
    }

    #[rstest]
    fn validation_messages_match_the_client_copy() {
        assert_eq!(
            UserValidationError::InvalidEmail.to_string(),
            "Invalid email format"
        );
        assert_eq!(
            UserValidationError::InvalidName.to_string(),
            "Name must be between 1 and 100 characters"
        );
    }

    #[rstest]
    fn user_serialises_with_camel_case_timestamps() {
        let user = User::new(
            1,
            EmailAddress::new("a@b.com").expect("valid email"),
            UserName::new("A").expect("valid name"),
            Utc::now(),
            Utc::now(),
        );

        let value = serde_json::to_value(&user).expect("serialise user");
        assert_eq!(value.get("id").and_then(serde_json::Value::as_i64), Some(1));
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
