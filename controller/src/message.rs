//! Auto-dismissing status line.
//!
//! At most one message is visible. Showing a new one cancels the previous
//! dismissal timer before scheduling its own, so no more than one
//! `DismissMessage` timer is ever pending.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use crate::consts::MESSAGE_TTL;
use crate::controller::Effect;
use crate::timer::{TimerId, TimerKind, Timers};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// CSS modifier / log label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
}

impl Message {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self { text: text.into(), severity }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Info)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Error)
    }
}

/// A visible message together with the timer that will hide it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shown {
    pub message: Message,
    pub timer: TimerId,
}

#[derive(Clone, Debug, Default)]
pub struct MessagePresenter {
    current: Option<Shown>,
}

impl MessagePresenter {
    #[must_use]
    pub fn current(&self) -> Option<&Shown> {
        self.current.as_ref()
    }

    /// Replace whatever is shown with `message` and restart the dismissal timer.
    pub fn show(&mut self, message: Message, timers: &mut Timers, effects: &mut Vec<Effect>) {
        self.hide(timers, effects);
        let schedule = timers.schedule(TimerKind::DismissMessage, MESSAGE_TTL);
        effects.push(Effect::Schedule(schedule));
        self.current = Some(Shown { message, timer: schedule.id });
    }

    /// Clear the display and cancel its pending dismissal.
    pub fn hide(&mut self, timers: &mut Timers, effects: &mut Vec<Effect>) {
        if let Some(shown) = self.current.take() {
            if timers.cancel(shown.timer) {
                effects.push(Effect::Cancel(shown.timer));
            }
        }
    }

    /// Dismissal timer `id` fired. Only the timer of the current message hides it.
    pub fn expire(&mut self, id: TimerId) -> bool {
        match &self.current {
            Some(shown) if shown.timer == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}
