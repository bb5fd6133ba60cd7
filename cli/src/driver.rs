//! Runs the controller inside a tokio runtime.
//!
//! Effects become tasks: timers sleep then post `TimerFired`, calls go
//! through an [`AuthApi`] and post `Completed`. Everything funnels back into
//! one channel that [`Driver::run_until_settled`] drains.

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;

use std::collections::HashMap;

use controller::form::Field;
use controller::inflight::InFlight;
use controller::message::Message;
use controller::session::{self, SessionStore};
use controller::timer::TimerId;
use controller::{Controller, Effect, Event};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::AuthApi;

pub struct Driver<S, A> {
    ctl: Controller,
    store: S,
    api: A,
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    timers: HashMap<TimerId, JoinHandle<()>>,
    last_shown: Option<TimerId>,
    transcript: Vec<Message>,
    echo: bool,
}

impl<S, A> Driver<S, A>
where
    S: SessionStore,
    A: AuthApi,
{
    pub fn new(store: S, api: A) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            ctl: Controller::new(),
            store,
            api,
            tx,
            rx,
            timers: HashMap::new(),
            last_shown: None,
            transcript: Vec::new(),
            echo: true,
        }
    }

    /// Stop printing messages as they appear. They are still recorded.
    #[cfg(test)]
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.ctl
    }

    #[cfg(test)]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every message shown so far, oldest first.
    #[must_use]
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Restore the persisted session.
    pub fn start(&mut self) {
        let stored = self.store.get();
        self.dispatch(Event::Started { stored });
    }

    pub fn fill(&mut self, fields: &[(Field, &str)]) {
        for &(field, value) in fields {
            self.dispatch(Event::Edit { field, value: value.to_owned() });
        }
    }

    pub fn dispatch(&mut self, event: Event) {
        if let Event::TimerFired(id) = &event {
            self.timers.remove(id);
        }
        for effect in self.ctl.handle(event) {
            self.run(effect);
        }
        self.record_message();
    }

    /// Feed events back until no call is outstanding and no view transition
    /// is pending. Message dismiss timers left over are aborted.
    pub async fn run_until_settled(&mut self) {
        while !self.ctl.is_settled() {
            let Some(event) = self.rx.recv().await else {
                break;
            };
            self.dispatch(event);
        }
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
    }

    fn run(&mut self, effect: Effect) {
        if session::apply(&mut self.store, &effect) {
            return;
        }
        match effect {
            Effect::Schedule(schedule) => {
                let tx = self.tx.clone();
                let handle = tokio::spawn(async move {
                    tokio::time::sleep(schedule.after).await;
                    if tx.send(Event::TimerFired(schedule.id)).is_err() {
                        tracing::debug!(timer = %schedule.id, "driver gone before timer fired");
                    }
                });
                if let Some(previous) = self.timers.insert(schedule.id, handle) {
                    previous.abort();
                }
            }
            Effect::Cancel(id) => {
                if let Some(handle) = self.timers.remove(&id) {
                    handle.abort();
                }
            }
            Effect::Call(request) => {
                let api = self.api.clone();
                let tx = self.tx.clone();
                let action = request.action();
                tracing::debug!(?action, "issuing request");
                tokio::spawn(async move {
                    let guard = InFlight::new(action, move |completion| {
                        if tx.send(Event::Completed(completion)).is_err() {
                            tracing::debug!(?action, "driver gone before completion");
                        }
                    });
                    let outcome = api.send(request).await;
                    guard.finish(outcome);
                });
            }
            Effect::FocusOtp => tracing::debug!("otp focus requested"),
            Effect::PersistSession(_) | Effect::ClearSession => {}
        }
    }

    fn record_message(&mut self) {
        let shown = self.ctl.shown();
        let current = shown.map(|s| s.timer);
        if current == self.last_shown {
            return;
        }
        self.last_shown = current;
        if let Some(shown) = shown {
            if self.echo {
                println!("{}", render(&shown.message));
            }
            self.transcript.push(shown.message.clone());
        }
    }
}

/// One line of terminal output for a message.
#[must_use]
pub fn render(message: &Message) -> String {
    format!("[{}] {}", message.severity.as_str(), message.text)
}
