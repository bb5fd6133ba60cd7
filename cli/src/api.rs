//! HTTP transport for the auth endpoints.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;
use std::time::Duration;

use controller::CallError;
use controller::wire::{AuthRequest, classify};

/// Something that can carry an [`AuthRequest`] to the auth service.
///
/// The driver spawns every call onto the runtime, so implementations must be
/// cheap to clone and their futures `Send`.
pub trait AuthApi: Clone + Send + Sync + 'static {
    fn send(&self, request: AuthRequest) -> impl Future<Output = Result<(), CallError>> + Send;
}

#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl AuthApi for HttpAuthApi {
    async fn send(&self, request: AuthRequest) -> Result<(), CallError> {
        let url = request.url(&self.base_url);
        tracing::debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status.is_success() {
            return classify(status.as_u16(), "");
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read error body");
                String::new()
            }
        };
        tracing::info!(path = request.path(), status = status.as_u16(), "auth service rejected request");
        classify(status.as_u16(), &body)
    }
}

fn transport(err: reqwest::Error) -> CallError {
    CallError::Transport(err.to_string())
}
