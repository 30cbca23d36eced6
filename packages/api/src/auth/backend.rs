//! # HTTP client for the external authentication backend
//!
//! [`AuthBackend`] forwards registration and sign-in to the service that
//! actually owns accounts and sessions. It is a lazy, process-wide singleton
//! ([`get_backend`]) built from [`Settings`] on first use.
//!
//! Every request carries the configured timeout, so a stalled backend
//! surfaces as an error instead of leaving the form submitting forever.
//!
//! Errors keep the backend URL out of their message: it ends up in the
//! user's toast. The full error is logged here instead.

use forms::{AuthResponse, RegistrationInput};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::OnceCell;

use super::response::{decode_response, is_supported_provider, SignInRequest};
use crate::settings::{Backend, Settings};

static BACKEND: OnceCell<AuthBackend> = OnceCell::const_new();

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("auth backend request failed: {0}")]
    Http(reqwest::Error),
    #[error("auth backend returned {0}")]
    Status(StatusCode),
    #[error("invalid settings: {0}")]
    Config(#[from] config::ConfigError),
}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        BackendError::Http(e.without_url())
    }
}

/// Get or initialize the shared backend client.
pub async fn get_backend() -> Result<&'static AuthBackend, BackendError> {
    BACKEND
        .get_or_try_init(|| async {
            dotenvy::dotenv().ok();
            let settings = Settings::new()?;
            AuthBackend::new(&settings.backend)
        })
        .await
}

#[derive(Debug, Clone)]
pub struct AuthBackend {
    client: Client,
    base_url: String,
}

impl AuthBackend {
    pub fn new(settings: &Backend) -> Result<Self, BackendError> {
        let client = reqwest::ClientBuilder::new()
            .timeout(settings.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: settings.url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn register(&self, input: &RegistrationInput) -> Result<AuthResponse, BackendError> {
        self.post("register", input).await
    }

    pub async fn sign_in(
        &self,
        provider: &str,
        input: &RegistrationInput,
        redirect: bool,
    ) -> Result<AuthResponse, BackendError> {
        if !is_supported_provider(provider) {
            return Ok(AuthResponse::failed(format!(
                "Unsupported sign-in provider: {}",
                provider
            )));
        }

        let request = SignInRequest {
            provider,
            redirect,
            input,
        };
        self.post("sign-in", &request).await
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<AuthResponse, BackendError> {
        let url = self.endpoint(path);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .inspect_err(|e| tracing::error!("Auth backend {} unreachable: {}", url, e))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .inspect_err(|e| tracing::error!("Auth backend {} reply unreadable: {}", url, e))?;

        decode_response(status.as_u16(), &text).ok_or_else(|| {
            tracing::error!("Auth backend {} answered {} with {:?}", url, status, text);
            BackendError::Status(status)
        })
    }
}
