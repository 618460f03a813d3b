//! Request decoding for create and update payloads.
//!
//! Both decoders are pure and deterministic: they take the raw request
//! shape and return either fully validated values or an ordered list of
//! field errors, so one response can report every offending field. Both
//! payload fields are optional at the serde level; the create decoder, not
//! the deserialiser, reports missing fields so they land in the same list.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::user::{EmailAddress, UserName};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Path of the offending field, e.g. `email`.
    #[schema(example = "email")]
    pub field: String,
    /// Human-readable description of the failure.
    #[schema(example = "Invalid email format")]
    pub message: String,
}

impl FieldError {
    /// Build a field error from a field path and message.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Raw payload for `POST /users`. Both fields are required; absence is
/// reported as a field error by [`decode_create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Contact email, unique across records.
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    /// Display name, 1 to 100 characters.
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
}

/// Raw payload for `PUT /users/{id}`. Every field is independently
/// optional; absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    /// Replacement email, validated when present.
    pub email: Option<String>,
    /// Replacement name, validated when present.
    pub name: Option<String>,
}

/// Validated output of [`decode_create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCreateUser {
    /// Refined email.
    pub email: EmailAddress,
    /// Refined name.
    pub name: UserName,
}

/// Validated output of [`decode_update`]; `None` fields are not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    /// New email, if supplied.
    pub email: Option<EmailAddress>,
    /// New name, if supplied.
    pub name: Option<UserName>,
}

impl UserChanges {
    /// True when the request supplied no fields at all.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none()
    }
}

fn decode_email(raw: &str, errors: &mut Vec<FieldError>) -> Option<EmailAddress> {
    match EmailAddress::new(raw) {
        Ok(email) => Some(email),
        Err(err) => {
            errors.push(FieldError::new("email", err.to_string()));
            None
        }
    }
}

fn decode_name(raw: &str, errors: &mut Vec<FieldError>) -> Option<UserName> {
    match UserName::new(raw) {
        Ok(name) => Some(name),
        Err(err) => {
            errors.push(FieldError::new("name", err.to_string()));
            None
        }
    }
}

/// Decode a create payload, reporting errors in field order.
pub fn decode_create(request: &CreateUserRequest) -> Result<ValidatedCreateUser, Vec<FieldError>> {
    let mut errors = Vec::new();

    let email = match &request.email {
        Some(raw) => decode_email(raw, &mut errors),
        None => {
            errors.push(FieldError::new("email", "email is required"));
            None
        }
    };
    let name = match &request.name {
        Some(raw) => decode_name(raw, &mut errors),
        None => {
            errors.push(FieldError::new("name", "name is required"));
            None
        }
    };

    match (email, name) {
        (Some(email), Some(name)) => Ok(ValidatedCreateUser { email, name }),
        _ => Err(errors),
    }
}

/// Decode an update payload. Absent fields are valid; present fields use
/// the same refinement rules as [`decode_create`].
pub fn decode_update(request: &UpdateUserRequest) -> Result<UserChanges, Vec<FieldError>> {
    let mut errors = Vec::new();

    let email = request
        .email
        .as_deref()
        .and_then(|raw| decode_email(raw, &mut errors));
    let name = request
        .name
        .as_deref()
        .and_then(|raw| decode_name(raw, &mut errors));

    if errors.is_empty() {
        Ok(UserChanges { email, name })
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn create_request(email: &str, name: &str) -> CreateUserRequest {
        CreateUserRequest {
            email: Some(email.into()),
            name: Some(name.into()),
        }
    }

    #[rstest]
    fn decode_create_accepts_a_valid_payload() {
        let validated =
            decode_create(&create_request("a@b.com", "A")).expect("payload is valid");

        assert_eq!(validated.email.as_ref(), "a@b.com");
        assert_eq!(validated.name.as_ref(), "A");
    }

    #[rstest]
    fn decode_create_lists_both_invalid_fields_in_order() {
        let errors = decode_create(&create_request("bad", "")).expect_err("both fields invalid");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first().map(|e| e.field.as_str()), Some("email"));
        assert_eq!(
            errors.first().map(|e| e.message.as_str()),
            Some("Invalid email format")
        );
        assert_eq!(errors.get(1).map(|e| e.field.as_str()), Some("name"));
        assert_eq!(
            errors.get(1).map(|e| e.message.as_str()),
            Some("Name must be between 1 and 100 characters")
        );
    }

    #[rstest]
    fn decode_create_reports_missing_fields() {
        let errors = decode_create(&CreateUserRequest::default()).expect_err("fields missing");

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "name"]);
        assert_eq!(
            errors.first().map(|e| e.message.as_str()),
            Some("email is required")
        );
    }

    #[rstest]
    fn decode_create_is_deterministic() {
        let request = create_request("bad", "");
        assert_eq!(decode_create(&request), decode_create(&request));
    }

    #[rstest]
    fn decode_update_accepts_an_empty_payload() {
        let changes = decode_update(&UpdateUserRequest::default()).expect("absence is valid");
        assert!(changes.is_empty());
    }

    #[rstest]
    fn decode_update_validates_only_supplied_fields() {
        let request = UpdateUserRequest {
            email: None,
            name: Some("New".into()),
        };

        let changes = decode_update(&request).expect("name is valid");
        assert!(changes.email.is_none());
        assert_eq!(changes.name.as_ref().map(AsRef::as_ref), Some("New"));
    }

    #[rstest]
    #[case(Some("no-at-sign"), None, "email")]
    #[case(None, Some(""), "name")]
    fn decode_update_rejects_invalid_supplied_fields(
        #[case] email: Option<&str>,
        #[case] name: Option<&str>,
        #[case] expected_field: &str,
    ) {
        let request = UpdateUserRequest {
            email: email.map(Into::into),
            name: name.map(Into::into),
        };

        let errors = decode_update(&request).expect_err("supplied field invalid");
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.first().map(|e| e.field.as_str()),
            Some(expected_field)
        );
    }
}
