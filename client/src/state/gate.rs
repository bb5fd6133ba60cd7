//! Reactive handle around the auth controller.
//!
//! DESIGN
//! ======
//! The whole UI state is one `RwSignal<Controller>`. Components read it
//! through [`Gate::with`] and report input through [`Gate::dispatch`], which
//! runs the controller and then carries out its effects:
//! - storage effects go to `localStorage`,
//! - `Call` spawns the HTTP request under an `InFlight` guard,
//! - `Schedule`/`Cancel` drive `gloo-timers` sleeps keyed by timer id,
//! - `FocusOtp` focuses the OTP input.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use controller::form::Field;
use controller::inflight::InFlight;
use controller::session::{self, SessionStore};
use controller::timer::{Schedule, TimerId};
use controller::wire::AuthRequest;
use controller::{Controller, Effect, Event};
use leptos::prelude::{RwSignal, Update, With};

use crate::util::storage::BrowserSessionStore;

#[cfg(feature = "csr")]
thread_local! {
    /// Timers that are still allowed to fire. Cancelling removes the id.
    static LIVE_TIMERS: std::cell::RefCell<std::collections::HashSet<TimerId>> =
        std::cell::RefCell::new(std::collections::HashSet::new());
}

#[derive(Clone, Copy)]
pub struct Gate {
    state: RwSignal<Controller>,
}

impl Default for Gate {
    fn default() -> Self {
        Self::new()
    }
}

impl Gate {
    pub fn new() -> Self {
        Self { state: RwSignal::new(Controller::new()) }
    }

    /// Restore any persisted session. Call once, before the first render, so
    /// a logged-in user never sees the auth tabs flash.
    pub fn start(self) {
        let stored = BrowserSessionStore.get();
        if let Some(session) = &stored {
            log::info!("restoring session for {}", session.email);
        }
        self.dispatch(Event::Started { stored });
    }

    /// Read the controller, tracking the read in the current reactive scope.
    pub fn with<T>(self, f: impl FnOnce(&Controller) -> T) -> T {
        self.state.with(f)
    }

    pub fn dispatch(self, event: Event) {
        let Some(effects) = self.state.try_update(|ctl| ctl.handle(event)) else {
            log::warn!("controller signal disposed; dropping event");
            return;
        };
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(self, effect: Effect) {
        if session::apply(&mut BrowserSessionStore, &effect) {
            return;
        }
        match effect {
            Effect::Schedule(schedule) => self.start_timer(schedule),
            Effect::Cancel(id) => stop_timer(id),
            Effect::Call(request) => self.call(request),
            Effect::FocusOtp => crate::util::dom::focus(Field::LoginOtp.dom_id()),
            Effect::PersistSession(_) | Effect::ClearSession => {}
        }
    }

    fn call(self, request: AuthRequest) {
        let guard = InFlight::new(request.action(), move |completion| {
            self.dispatch(Event::Completed(completion));
        });
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::send(crate::config::api_base_url(), &request).await;
            guard.finish(outcome);
        });
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("no browser; {:?} dropped", request.action());
            drop(guard);
        }
    }

    fn start_timer(self, schedule: Schedule) {
        #[cfg(feature = "csr")]
        {
            let id = schedule.id;
            LIVE_TIMERS.with(|live| live.borrow_mut().insert(id));
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(schedule.after).await;
                if LIVE_TIMERS.with(|live| live.borrow_mut().remove(&id)) {
                    self.dispatch(Event::TimerFired(id));
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("no browser; {} not started", schedule.id);
        }
    }
}

fn stop_timer(id: TimerId) {
    #[cfg(feature = "csr")]
    LIVE_TIMERS.with(|live| live.borrow_mut().remove(&id));
    #[cfg(not(feature = "csr"))]
    log::debug!("no browser; {id} had nothing to stop");
}
