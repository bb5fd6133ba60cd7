//! HTTP contract with the auth service.
//!
//! All three calls are `POST` with a JSON body. A 2xx status is success and
//! the response body is ignored; anything else is a service error whose
//! optional `message` field is shown to the user.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

use crate::controller::Action;
use crate::error::CallError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterBody {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OtpBody {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
    pub otp: String,
}

/// A request the host must send on the controller's behalf. Serializes as
/// the bare body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AuthRequest {
    Register(RegisterBody),
    RequestOtp(OtpBody),
    Login(LoginBody),
}

impl AuthRequest {
    #[must_use]
    pub fn action(&self) -> Action {
        match self {
            Self::Register(_) => Action::Register,
            Self::RequestOtp(_) => Action::RequestOtp,
            Self::Login(_) => Action::Login,
        }
    }

    #[must_use]
    pub fn path(&self) -> &'static str {
        self.action().path()
    }

    /// Serialize the body to JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; the bodies are plain strings so this does
    /// not fail in practice.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Full URL under `base_url`.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        endpoint_url(base_url, self.path())
    }
}

/// Join a base URL and an absolute path without doubling the slash.
#[must_use]
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Extract a non-empty `message` field from an error response body.
#[must_use]
pub fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(_) => return None,
    };
    parsed.message.filter(|text| !text.is_empty())
}

/// Map a finished HTTP exchange onto the call outcome.
///
/// # Errors
///
/// Returns [`CallError::Service`] for any status outside `200..=299`.
pub fn classify(status: u16, body: &str) -> Result<(), CallError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(CallError::Service { status, message: error_message(body) })
}
