//! Pending timer registry.
//!
//! DESIGN
//! ======
//! The controller never sleeps. It allocates a [`TimerId`], records what the
//! timer is for, and asks the host to wake it with `Event::TimerFired(id)`.
//! Cancelling removes the record, so a late wake-up for a cancelled id finds
//! nothing and is ignored. Ids are never reused.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Opaque handle for a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// What happens when a timer fires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// Hide the message this timer was started for.
    DismissMessage,
    /// Switch to the login tab and pre-fill its email.
    OpenLogin { email: String },
    /// Show the dashboard for a freshly logged-in user.
    OpenDashboard { email: String },
}

impl TimerKind {
    /// Transition delays keep the flow "unsettled"; message dismissal does not.
    #[must_use]
    pub fn is_transition(&self) -> bool {
        !matches!(self, Self::DismissMessage)
    }
}

/// Request to the host to start a timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schedule {
    pub id: TimerId,
    pub after: Duration,
}

#[derive(Clone, Debug, Default)]
pub struct Timers {
    next: u64,
    pending: BTreeMap<TimerId, TimerKind>,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new pending timer and return the host request for it.
    pub fn schedule(&mut self, kind: TimerKind, after: Duration) -> Schedule {
        self.next += 1;
        let id = TimerId(self.next);
        self.pending.insert(id, kind);
        Schedule { id, after }
    }

    /// Forget a pending timer. Returns `false` if it was not pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.pending.remove(&id).is_some()
    }

    /// Consume a fired timer. `None` means it was cancelled or already fired.
    pub fn fire(&mut self, id: TimerId) -> Option<TimerKind> {
        self.pending.remove(&id)
    }

    #[must_use]
    pub fn get(&self, id: TimerId) -> Option<&TimerKind> {
        self.pending.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of pending timers of a given kind class.
    #[must_use]
    pub fn count_where(&self, pred: impl Fn(&TimerKind) -> bool) -> usize {
        self.pending.values().filter(|kind| pred(kind)).count()
    }

    /// Forget every pending timer whose kind matches. Returns the ids removed.
    pub fn cancel_where(&mut self, pred: impl Fn(&TimerKind) -> bool) -> Vec<TimerId> {
        let ids: Vec<TimerId> =
            self.pending.iter().filter(|(_, kind)| pred(kind)).map(|(id, _)| *id).collect();
        for id in &ids {
            self.pending.remove(id);
        }
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = (TimerId, &TimerKind)> {
        self.pending.iter().map(|(id, kind)| (*id, kind))
    }
}
