//! Persisted session record and its storage seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The presence of a stored session is the only "logged in" signal that
//! survives a reload. Hosts provide a [`SessionStore`]: browser
//! `localStorage` in `client`, a JSON file in `cli`, [`MemorySessionStore`]
//! in tests. All of them share the JSON encoding below.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::controller::Effect;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
}

impl Session {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }
}

/// Durable single-record session repository.
pub trait SessionStore {
    /// Stored session, or `None` when absent or unreadable.
    fn get(&self) -> Option<Session>;
    fn set(&mut self, session: &Session);
    fn clear(&mut self);
}

/// Encode a session the way every store persists it.
#[must_use]
pub fn encode(session: &Session) -> String {
    serde_json::json!({ "email": session.email }).to_string()
}

/// Decode a stored record. A record that parses is a session, whatever the
/// email holds; anything unparsable counts as logged out.
#[must_use]
pub fn decode(raw: &str) -> Option<Session> {
    match serde_json::from_str::<Session>(raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("stored session is malformed ({e}); treating as logged out");
            None
        }
    }
}

/// Apply a storage effect to `store`. Returns `false` for non-storage effects.
pub fn apply<S: SessionStore + ?Sized>(store: &mut S, effect: &Effect) -> bool {
    match effect {
        Effect::PersistSession(session) => {
            store.set(session);
            true
        }
        Effect::ClearSession => {
            store.clear();
            true
        }
        _ => false,
    }
}

/// In-memory store holding the raw encoded record.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    raw: Option<String>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an arbitrary raw record.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { raw: Some(raw.into()) }
    }

    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Session> {
        self.raw.as_deref().and_then(decode)
    }

    fn set(&mut self, session: &Session) {
        self.raw = Some(encode(session));
    }

    fn clear(&mut self) {
        self.raw = None;
    }
}
