use thiserror::Error;

use crate::validate::FieldErrors;

/// A remote call failed outright instead of returning an error descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request never produced a response (network, timeout, decoding).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a failure of its own.
    #[error("server error: {0}")]
    Server(String),
}

/// Why [`FormState::begin_submit`](crate::FormState::begin_submit) refused
/// to start a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    Busy,
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),
}
