//! Registration input and the result shape shared by both remote calls.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Values collected by the sign-up form.
///
/// The `validate` attributes are the form's schema; see [`crate::validate`]
/// for how failures are turned into per-field messages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegistrationInput {
    #[validate(
        length(min = 1, code = "required", message = "email is a required field"),
        email(message = "email must be a valid email")
    )]
    pub email: String,

    #[validate(length(min = 1, code = "required", message = "username is a required field"))]
    pub username: String,

    #[validate(length(min = 1, code = "required", message = "password is a required field"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "passwords don't match"))]
    pub confirm_password: String,
}

impl RegistrationInput {
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Username => &self.username,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Username => self.username = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
    }
}

/// A single form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Username,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields, in display order.
    pub const ALL: [Field; 4] = [
        Field::Email,
        Field::Username,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Wire name, matching the serialized [`RegistrationInput`] keys.
    pub fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Username => "username",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm_password",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// Result of a registration or sign-in call.
///
/// Both collaborators answer with an optional error descriptor; `{}` means
/// success.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthResponse {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }

    /// The error message, if any. An empty message counts as no error.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}
