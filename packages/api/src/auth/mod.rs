//! Authentication backend access.

mod response;
pub use response::{decode_response, is_supported_provider, SignInRequest, SUPPORTED_PROVIDERS};

#[cfg(feature = "server")]
mod backend;
#[cfg(feature = "server")]
pub use backend::{get_backend, AuthBackend, BackendError};
