//! REST calls to the auth service.
//!
//! Browser (`csr`): real HTTP via `gloo-net`.
//! Native builds: every call fails with a transport error, since the
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result<(), CallError>` that the controller turns into a
//! user message; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use controller::CallError;
use controller::wire::AuthRequest;

#[cfg(any(test, not(feature = "csr")))]
const UNAVAILABLE: &str = "auth API is only reachable from the browser";

#[cfg(any(test, feature = "csr"))]
fn transport(err: impl std::fmt::Display) -> CallError {
    CallError::Transport(err.to_string())
}

/// `POST` `request` to its endpoint under `base_url`.
///
/// # Errors
///
/// [`CallError::Service`] for a non-2xx response, [`CallError::Transport`] if
/// the request could not be sent or completed.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub async fn send(base_url: &str, request: &AuthRequest) -> Result<(), CallError> {
    #[cfg(feature = "csr")]
    {
        let url = request.url(base_url);
        log::debug!("POST {url}");
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let status = resp.status();
        if resp.ok() {
            return controller::wire::classify(status, "");
        }
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("could not read error body from {url}: {e}");
                String::new()
            }
        };
        log::info!("{} returned {status}", request.path());
        controller::wire::classify(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(CallError::Transport(UNAVAILABLE.to_owned()))
    }
}
