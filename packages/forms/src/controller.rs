//! # Form controller
//!
//! [`FormState`] is the sign-up page's local state: the four field values,
//! the current per-field errors and where the submission is in its
//! lifecycle. The UI keeps one in a `Signal` and re-renders from it.
//!
//! Validation is lazy until the first submit attempt. After that every edit
//! re-runs the whole schema, so fixing a field clears its message and a
//! password change immediately re-checks the confirmation.
//!
//! ```text
//! Idle ──begin_submit──▶ (validate) ──invalid──▶ Idle (with errors)
//!                             │
//!                             └──valid──▶ Registering ──▶ SigningIn ──▶ Navigated
//!                                             │              │
//!                                             └──────────────┴──error──▶ Idle
//! ```

use crate::error::SubmitBlocked;
use crate::flow::SubmitOutcome;
use crate::input::{Field, RegistrationInput};
use crate::validate::{validate, FieldErrors};

/// Where the current submission attempt stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Registering,
    SigningIn,
    Navigated,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    values: RegistrationInput,
    errors: FieldErrors,
    status: FormStatus,
    submit_count: u32,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: RegistrationInput) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    pub fn values(&self) -> &RegistrationInput {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Update a field. Once a submission has been attempted the schema is
    /// re-run and all errors are replaced.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value.into());
        if self.submit_count > 0 {
            self.revalidate();
        }
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// True from a successful `begin_submit` until the attempt resolves.
    /// Stays true after navigation so the button never re-enables.
    pub fn is_submitting(&self) -> bool {
        self.status != FormStatus::Idle
    }

    /// Validate and, if clean, move to `Registering` and hand back a snapshot
    /// of the input to submit.
    pub fn begin_submit(&mut self) -> Result<RegistrationInput, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::Busy);
        }
        self.submit_count += 1;
        if !self.revalidate() {
            return Err(SubmitBlocked::Invalid(self.errors.clone()));
        }
        self.status = FormStatus::Registering;
        Ok(self.values.clone())
    }

    pub fn set_status(&mut self, status: FormStatus) {
        self.status = status;
    }

    /// Settle the attempt. Values are kept on failure for correction.
    pub fn finish_submit(&mut self, outcome: &SubmitOutcome) {
        self.status = if outcome.is_success() {
            FormStatus::Navigated
        } else {
            FormStatus::Idle
        };
    }

    fn revalidate(&mut self) -> bool {
        match validate(&self.values) {
            Ok(()) => {
                self.errors = FieldErrors::new();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }
}
