//! Collaborator implementations backed by the `api` server functions.

use dioxus::prelude::*;
use forms::{
    AuthResponse, RegistrationInput, RegistrationService, ServiceError, SessionService,
    SignInOptions,
};

/// Registration through `POST /api/auth/register`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerRegistration;

impl RegistrationService for ServerRegistration {
    async fn register(&self, input: &RegistrationInput) -> Result<AuthResponse, ServiceError> {
        api::register(input.clone()).await.map_err(service_error)
    }
}

/// Sign-in through `POST /api/auth/sign-in`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerSession;

impl SessionService for ServerSession {
    async fn sign_in(
        &self,
        provider: &str,
        input: &RegistrationInput,
        options: SignInOptions,
    ) -> Result<AuthResponse, ServiceError> {
        api::sign_in(provider.to_string(), input.clone(), options.redirect)
            .await
            .map_err(service_error)
    }
}

fn service_error(e: ServerFnError) -> ServiceError {
    match e {
        ServerFnError::Request(_) => ServiceError::Transport(e.to_string()),
        _ => ServiceError::Server(e.to_string()),
    }
}
