//! # Forms crate — sign-up form state, validation and submit flow
//!
//! UI-free logic behind the sign-up page. Nothing here touches Dioxus, so the
//! whole crate is testable with plain `#[test]` / `#[tokio::test]`.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`input`] | [`RegistrationInput`], [`Field`] and the shared [`AuthResponse`] wire shape |
//! | [`validate`] | Declarative schema (`validator` derive) and [`FieldErrors`] |
//! | [`controller`] | [`FormState`]: values, errors, status and the double-submit guard |
//! | [`flow`] | [`SignUpFlow`]: register → sign in → notify + navigate |
//! | [`config`] | [`SignUpConfig`]: messages, destination, provider, toast duration |

pub mod config;
pub mod controller;
pub mod error;
pub mod flow;
pub mod input;
pub mod validate;

pub use config::SignUpConfig;
pub use controller::{FormState, FormStatus};
pub use error::{ServiceError, SubmitBlocked};
pub use flow::{
    Destination, Navigator, NoticeKind, Notifier, RegistrationService, SessionService,
    SignInOptions, SignUpFlow, SubmitOutcome,
};
pub use input::{AuthResponse, Field, RegistrationInput};
pub use validate::FieldErrors;
