//! # API crate — server functions behind the sign-up page
//!
//! Defines the two Dioxus server functions the sign-up form calls. Each is
//! compiled twice: once with the server logic (behind
//! `#[cfg(feature = "server")]`) and once as a thin client stub that
//! forwards the call over HTTP.
//!
//! | Function | Route | Purpose |
//! |----------|-------|---------|
//! | [`register`] | `POST /api/auth/register` | Create an account |
//! | [`sign_in`] | `POST /api/auth/sign-in` | Establish a session for credentials |
//!
//! The server side owns no accounts or sessions itself; both calls are
//! forwarded to the external authentication backend configured in
//! [`settings`]. A returned `{ "error": ... }` travels back to the client as
//! an [`AuthResponse`]; anything else (unreachable backend, timeout,
//! undecodable reply) becomes a `ServerFnError`.

use dioxus::prelude::*;

pub mod auth;
#[cfg(feature = "server")]
pub mod settings;

pub use forms::{AuthResponse, RegistrationInput};

/// Register a new account with the authentication backend.
#[cfg(feature = "server")]
#[post("/api/auth/register")]
pub async fn register(input: RegistrationInput) -> Result<AuthResponse, ServerFnError> {
    let backend = auth::get_backend()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    backend
        .register(&input)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(input: RegistrationInput) -> Result<AuthResponse, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Sign in with the given provider. `redirect` is passed through to the
/// backend; the sign-up page always sends `false`.
#[cfg(feature = "server")]
#[post("/api/auth/sign-in")]
pub async fn sign_in(
    provider: String,
    input: RegistrationInput,
    redirect: bool,
) -> Result<AuthResponse, ServerFnError> {
    let backend = auth::get_backend()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    backend
        .sign_in(&provider, &input, redirect)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-in")]
pub async fn sign_in(
    provider: String,
    input: RegistrationInput,
    redirect: bool,
) -> Result<AuthResponse, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
