//! Error taxonomy for auth operations.
//!
//! ERROR HANDLING
//! ==============
//! Every error is terminal for the attempt that produced it and is shown to
//! the user as an error message; none is retried and none is fatal.
//! - [`ValidationError`]: local precondition failed, no request was sent.
//! - [`CallError::Service`]: the auth service answered with a non-2xx status.
//! - [`CallError::Transport`]: the request never completed.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::controller::Action;

pub const CONNECTION_ERROR_TEXT: &str = "Connection error. Please check your internet.";

/// Client-side precondition failure. The display text is the user message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Passwords do not match!")]
    Mismatch,
    #[error("Password must be at least 6 characters!")]
    TooShort,
    #[error("Please enter your email first!")]
    MissingEmail,
    #[error("Please enter the OTP code!")]
    MissingOtp,
}

/// Failure of an issued request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CallError {
    /// Non-success HTTP status, with the server's `message` field if it sent one.
    #[error("auth service returned {status}")]
    Service { status: u16, message: Option<String> },
    /// Offline, DNS failure, timeout, or an abandoned request.
    #[error("transport failure: {0}")]
    Transport(String),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Call(#[from] CallError),
}

impl AuthError {
    /// Text shown to the user when `action` fails with this error.
    #[must_use]
    pub fn user_message(&self, action: Action) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Call(CallError::Service { message: Some(text), .. }) => text.clone(),
            Self::Call(CallError::Service { message: None, .. }) => action.failure_fallback().to_owned(),
            Self::Call(CallError::Transport(_)) => CONNECTION_ERROR_TEXT.to_owned(),
        }
    }
}
