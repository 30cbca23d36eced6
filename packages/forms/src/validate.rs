//! Turns the `validator` schema on [`RegistrationInput`] into one message per
//! field.

use std::collections::BTreeMap;

use validator::{Validate, ValidationError};

use crate::input::{Field, RegistrationInput};

/// Per-field validation messages. Empty means the input is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

/// Validate the input against the form schema.
pub fn validate(input: &RegistrationInput) -> Result<(), FieldErrors> {
    let Err(errors) = input.validate() else {
        return Ok(());
    };

    let mut out = FieldErrors::new();
    for (name, field_errors) in errors.field_errors() {
        let Some(field) = Field::from_name(&name) else {
            continue;
        };
        // "required" beats format errors on the same field.
        let chosen = field_errors
            .iter()
            .find(|e| e.code == "required")
            .or_else(|| field_errors.first());
        if let Some(error) = chosen {
            out.insert(field, message_for(field, error));
        }
    }
    Err(out)
}

fn message_for(field: Field, error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => format!("{} is invalid", field.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(email: &str, username: &str, password: &str, confirm: &str) -> RegistrationInput {
        RegistrationInput::new(email, username, password, confirm)
    }

    #[test]
    fn test_valid_input() {
        assert!(validate(&input("a@b.com", "alice", "p1", "p1")).is_ok());
    }

    #[test]
    fn test_password_mismatch() {
        let errors = validate(&input("a@b.com", "alice", "p1", "p2")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::ConfirmPassword),
            Some("passwords don't match")
        );
    }

    #[test]
    fn test_empty_form_reports_required_fields() {
        let errors = validate(&RegistrationInput::default()).unwrap_err();
        assert_eq!(errors.get(Field::Email), Some("email is a required field"));
        assert_eq!(
            errors.get(Field::Username),
            Some("username is a required field")
        );
        assert_eq!(
            errors.get(Field::Password),
            Some("password is a required field")
        );
        // Both passwords empty still match.
        assert_eq!(errors.get(Field::ConfirmPassword), None);
    }

    #[test]
    fn test_malformed_email() {
        let errors = validate(&input("not-an-email", "alice", "p1", "p1")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some("email must be a valid email"));
    }

    #[test]
    fn test_confirm_is_checked_against_current_password() {
        let mut candidate = input("a@b.com", "alice", "p1", "p1");
        assert!(validate(&candidate).is_ok());

        candidate.password = "changed".to_string();
        let errors = validate(&candidate).unwrap_err();
        assert_eq!(
            errors.get(Field::ConfirmPassword),
            Some("passwords don't match")
        );
    }

    #[test]
    fn test_whitespace_username_is_not_trimmed() {
        assert!(validate(&input("a@b.com", " ", "p1", "p1")).is_ok());
    }
}
