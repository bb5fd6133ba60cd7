//! The view/session state machine.
//!
//! ARCHITECTURE
//! ============
//! [`Controller::handle`] takes one [`Event`], mutates state, and returns the
//! [`Effect`]s the host must carry out. It never blocks and never performs
//! I/O, so every transition is unit-testable without a browser.
//!
//! View states are `Auth { tab }` and `Dashboard { email }`:
//! - `Auth -> Dashboard` one second after a successful login,
//! - `Dashboard -> Auth { Login }` on logout,
//! - `Auth -> Auth { other }` on tab selection,
//! - startup goes straight to `Dashboard` when a session is stored.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::collections::BTreeMap;

use crate::consts::{OPEN_DASHBOARD_DELAY, OPEN_LOGIN_DELAY};
use crate::error::{AuthError, CallError, ValidationError};
use crate::form::{Field, LoginForm, RegisterForm};
use crate::message::{Message, MessagePresenter, Shown};
use crate::session::Session;
use crate::tab::Tab;
use crate::timer::{Schedule, TimerId, TimerKind, Timers};
use crate::wire::AuthRequest;

/// The three network-backed operations. Each has its own busy flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    Register,
    RequestOtp,
    Login,
}

impl Action {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Register => "/auth/register",
            Self::RequestOtp => "/auth/request-otp",
            Self::Login => "/auth/login",
        }
    }

    #[must_use]
    pub fn success_text(self) -> &'static str {
        match self {
            Self::Register => "Registration successful! You can now login.",
            Self::RequestOtp => "OTP sent to your email! Check your inbox.",
            Self::Login => "Login successful!",
        }
    }

    /// Shown when the service fails without a message of its own.
    #[must_use]
    pub fn failure_fallback(self) -> &'static str {
        match self {
            Self::Register => "Registration failed. Please try again.",
            Self::RequestOtp => "Failed to send OTP. Please try again.",
            Self::Login => "Login failed. Check your credentials.",
        }
    }
}

pub const LOGOUT_TEXT: &str = "You have been logged out.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    Auth { tab: Tab },
    Dashboard { email: String },
}

impl Default for View {
    fn default() -> Self {
        Self::Auth { tab: Tab::Login }
    }
}

/// Result of an issued request, fed back by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub action: Action,
    pub outcome: Result<(), CallError>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Startup, carrying whatever the session store returned.
    Started { stored: Option<Session> },
    SelectTab(Tab),
    Edit { field: Field, value: String },
    SubmitRegister,
    RequestOtp,
    SubmitLogin,
    Logout,
    DismissMessage,
    TimerFired(TimerId),
    Completed(Completion),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Start a timer; answer with `Event::TimerFired(id)` when it elapses.
    Schedule(Schedule),
    /// Stop a timer started earlier.
    Cancel(TimerId),
    /// Send a request; answer with `Event::Completed`.
    Call(AuthRequest),
    PersistSession(Session),
    ClearSession,
    /// Move keyboard focus to the OTP input.
    FocusOtp,
}

#[derive(Clone, Debug, Default)]
pub struct Controller {
    view: View,
    login: LoginForm,
    register: RegisterForm,
    presenter: MessagePresenter,
    timers: Timers,
    /// Requests in flight, keyed by action; the value is what was submitted.
    in_flight: BTreeMap<Action, AuthRequest>,
}

impl Controller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    #[must_use]
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Active tab, or `None` while the dashboard is shown.
    #[must_use]
    pub fn active_tab(&self) -> Option<Tab> {
        match self.view {
            View::Auth { tab } => Some(tab),
            View::Dashboard { .. } => None,
        }
    }

    #[must_use]
    pub fn dashboard_email(&self) -> Option<&str> {
        match &self.view {
            View::Dashboard { email } => Some(email),
            View::Auth { .. } => None,
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&Message> {
        self.presenter.current().map(|shown| &shown.message)
    }

    /// Visible message with the id of its dismissal timer.
    #[must_use]
    pub fn shown(&self) -> Option<&Shown> {
        self.presenter.current()
    }

    #[must_use]
    pub fn login_form(&self) -> &LoginForm {
        &self.login
    }

    #[must_use]
    pub fn register_form(&self) -> &RegisterForm {
        &self.register
    }

    #[must_use]
    pub fn is_busy(&self, action: Action) -> bool {
        self.in_flight.contains_key(&action)
    }

    #[must_use]
    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    /// No request in flight and no view transition waiting on a delay.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.in_flight.is_empty() && self.timers.count_where(TimerKind::is_transition) == 0
    }

    // --- Events ---

    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event {
            Event::Started { stored } => self.restore(stored, &mut effects),
            Event::SelectTab(tab) => self.select_tab(tab, &mut effects),
            Event::Edit { field, value } => self.edit(field, value),
            Event::SubmitRegister => self.submit_register(&mut effects),
            Event::RequestOtp => self.request_otp(&mut effects),
            Event::SubmitLogin => self.submit_login(&mut effects),
            Event::Logout => self.logout(&mut effects),
            Event::DismissMessage => self.presenter.hide(&mut self.timers, &mut effects),
            Event::TimerFired(id) => self.fire(id, &mut effects),
            Event::Completed(completion) => self.complete(completion, &mut effects),
        }
        effects
    }

    fn restore(&mut self, stored: Option<Session>, effects: &mut Vec<Effect>) {
        if let Some(session) = stored {
            self.show_dashboard(session.email, effects);
        }
    }

    fn select_tab(&mut self, tab: Tab, effects: &mut Vec<Effect>) {
        let View::Auth { tab: active } = &mut self.view else {
            log::debug!("tab selection ignored while the dashboard is shown");
            return;
        };
        *active = tab;
        self.presenter.hide(&mut self.timers, effects);
    }

    fn edit(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::LoginEmail => &mut self.login.email,
            Field::LoginPassword => &mut self.login.password,
            Field::LoginOtp => &mut self.login.otp,
            Field::RegisterEmail => &mut self.register.email,
            Field::RegisterPassword => &mut self.register.password,
            Field::RegisterConfirm => &mut self.register.confirm_password,
        };
        *slot = value;
    }

    fn submit_register(&mut self, effects: &mut Vec<Effect>) {
        let request = self.register.register_request().map(AuthRequest::Register);
        self.issue(Action::Register, request, effects);
    }

    fn request_otp(&mut self, effects: &mut Vec<Effect>) {
        let request = self.login.otp_request().map(AuthRequest::RequestOtp);
        self.issue(Action::RequestOtp, request, effects);
    }

    fn submit_login(&mut self, effects: &mut Vec<Effect>) {
        let request = self.login.login_request().map(AuthRequest::Login);
        self.issue(Action::Login, request, effects);
    }

    /// Shared front half of every network action: guard, validate, mark busy, call.
    fn issue(
        &mut self,
        action: Action,
        request: Result<AuthRequest, ValidationError>,
        effects: &mut Vec<Effect>,
    ) {
        if !matches!(self.view, View::Auth { .. }) {
            log::debug!("{action:?} ignored while the dashboard is shown");
            return;
        }
        if self.in_flight.contains_key(&action) {
            log::debug!("{action:?} already in flight; ignoring repeat submission");
            return;
        }
        if action == Action::Login && self.dashboard_pending() {
            log::debug!("login ignored: dashboard already opening");
            return;
        }
        match request {
            Ok(request) => {
                self.in_flight.insert(action, request.clone());
                effects.push(Effect::Call(request));
            }
            Err(err) => {
                let text = AuthError::from(err).user_message(action);
                self.presenter.show(Message::error(text), &mut self.timers, effects);
            }
        }
    }

    fn complete(&mut self, completion: Completion, effects: &mut Vec<Effect>) {
        let Completion { action, outcome } = completion;
        let Some(submitted) = self.in_flight.remove(&action) else {
            log::debug!("{action:?} completed with nothing in flight; ignoring");
            return;
        };

        if let Err(err) = outcome {
            let text = AuthError::from(err).user_message(action);
            self.presenter.show(Message::error(text), &mut self.timers, effects);
            return;
        }

        self.presenter.show(Message::success(action.success_text()), &mut self.timers, effects);
        match submitted {
            AuthRequest::Register(body) => {
                self.register.clear();
                let kind = TimerKind::OpenLogin { email: body.email };
                effects.push(Effect::Schedule(self.timers.schedule(kind, OPEN_LOGIN_DELAY)));
            }
            AuthRequest::RequestOtp(_) => effects.push(Effect::FocusOtp),
            AuthRequest::Login(body) => {
                effects.push(Effect::PersistSession(Session::new(body.email.clone())));
                let kind = TimerKind::OpenDashboard { email: body.email };
                effects.push(Effect::Schedule(self.timers.schedule(kind, OPEN_DASHBOARD_DELAY)));
            }
        }
    }

    fn fire(&mut self, id: TimerId, effects: &mut Vec<Effect>) {
        let Some(kind) = self.timers.fire(id) else {
            log::debug!("{id} fired after being cancelled; ignoring");
            return;
        };
        match kind {
            TimerKind::DismissMessage => {
                self.presenter.expire(id);
            }
            TimerKind::OpenLogin { email } => {
                if matches!(self.view, View::Auth { .. }) {
                    self.select_tab(Tab::Login, effects);
                    self.login.email = email;
                }
            }
            TimerKind::OpenDashboard { email } => self.show_dashboard(email, effects),
        }
    }

    fn dashboard_pending(&self) -> bool {
        self.timers.count_where(|kind| matches!(kind, TimerKind::OpenDashboard { .. })) > 0
    }

    fn show_dashboard(&mut self, email: String, effects: &mut Vec<Effect>) {
        self.presenter.hide(&mut self.timers, effects);
        self.login.clear();
        self.view = View::Dashboard { email };
    }

    fn logout(&mut self, effects: &mut Vec<Effect>) {
        if !matches!(self.view, View::Dashboard { .. }) {
            log::debug!("logout ignored: no dashboard shown");
            return;
        }
        effects.push(Effect::ClearSession);
        for id in self.timers.cancel_where(TimerKind::is_transition) {
            effects.push(Effect::Cancel(id));
        }
        self.view = View::Auth { tab: Tab::Login };
        self.login.clear();
        self.register.clear();
        self.presenter.show(Message::info(LOGOUT_TEXT), &mut self.timers, effects);
    }
}
