//! Wire shapes exchanged with the authentication backend.

use forms::{AuthResponse, RegistrationInput};
use serde::Serialize;

/// Providers the backend accepts for `sign_in`.
pub const SUPPORTED_PROVIDERS: &[&str] = &["credentials"];

pub fn is_supported_provider(provider: &str) -> bool {
    SUPPORTED_PROVIDERS.contains(&provider)
}

/// Body of `POST {backend}/sign-in`: the provider, the redirect flag and the
/// form fields flattened alongside.
#[derive(Debug, Serialize)]
pub struct SignInRequest<'a> {
    pub provider: &'a str,
    pub redirect: bool,
    #[serde(flatten)]
    pub input: &'a RegistrationInput,
}

/// Interpret a backend reply.
///
/// Returns `None` when the reply says nothing usable: a failure status
/// without an error message, or a body that isn't an [`AuthResponse`].
pub fn decode_response(status: u16, body: &str) -> Option<AuthResponse> {
    let success = (200..300).contains(&status);

    if body.trim().is_empty() {
        return success.then(AuthResponse::ok);
    }

    let response: AuthResponse = serde_json::from_str(body).ok()?;
    if success || response.error_message().is_some() {
        Some(response)
    } else {
        None
    }
}
