//! Completion guard for issued requests.
//!
//! The controller marks an action busy when it emits `Effect::Call` and only
//! releases it on `Event::Completed`. Hosts hold an [`InFlight`] for the
//! duration of the request: [`InFlight::finish`] reports the real outcome,
//! and dropping the guard unfinished (a panic, an abandoned future) reports a
//! transport failure instead, so the busy flag cannot leak.

#[cfg(test)]
#[path = "inflight_test.rs"]
mod inflight_test;

use crate::controller::{Action, Completion};
use crate::error::CallError;

pub const ABANDONED: &str = "request abandoned before completion";

pub struct InFlight<F>
where
    F: FnOnce(Completion),
{
    action: Action,
    sink: Option<F>,
}

impl<F> InFlight<F>
where
    F: FnOnce(Completion),
{
    pub fn new(action: Action, sink: F) -> Self {
        Self { action, sink: Some(sink) }
    }

    #[must_use]
    pub fn action(&self) -> Action {
        self.action
    }

    /// Deliver the outcome of the request.
    pub fn finish(mut self, outcome: Result<(), CallError>) {
        self.deliver(outcome);
    }

    fn deliver(&mut self, outcome: Result<(), CallError>) {
        if let Some(sink) = self.sink.take() {
            sink(Completion { action: self.action, outcome });
        }
    }
}

impl<F> Drop for InFlight<F>
where
    F: FnOnce(Completion),
{
    fn drop(&mut self) {
        if self.sink.is_some() {
            log::warn!("{:?} request dropped without a result", self.action);
            self.deliver(Err(CallError::Transport(ABANDONED.to_owned())));
        }
    }
}
