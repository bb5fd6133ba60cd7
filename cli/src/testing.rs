//! Test doubles shared by the cli unit tests.

use std::sync::{Arc, Mutex};

use controller::CallError;
use controller::wire::AuthRequest;

use crate::api::AuthApi;

#[derive(Clone)]
pub enum Reply {
    Outcome(Result<(), CallError>),
    Panic,
}

#[derive(Clone)]
pub struct StubApi {
    reply: Reply,
    sent: Arc<Mutex<Vec<AuthRequest>>>,
}

impl StubApi {
    pub fn replying(outcome: Result<(), CallError>) -> Self {
        Self { reply: Reply::Outcome(outcome), sent: Arc::default() }
    }

    pub fn panicking() -> Self {
        Self { reply: Reply::Panic, sent: Arc::default() }
    }

    pub fn sent(&self) -> Vec<AuthRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl AuthApi for StubApi {
    async fn send(&self, request: AuthRequest) -> Result<(), CallError> {
        self.sent.lock().unwrap().push(request);
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        match &self.reply {
            Reply::Outcome(outcome) => outcome.clone(),
            Reply::Panic => panic!("stub transport blew up"),
        }
    }
}
