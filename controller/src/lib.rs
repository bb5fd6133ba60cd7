//! View/session controller for the Bonsai auth client.
//!
//! This crate holds every decision the auth UI makes and none of its I/O. A
//! host (the Leptos `client` in the browser, or the `cli` in a terminal) feeds
//! user input, timer expirations, and network completions in as
//! [`controller::Event`]s and executes the [`controller::Effect`]s that come
//! back: persisting or clearing the session, issuing HTTP calls, scheduling
//! and cancelling timers, moving focus.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Top-level state machine ([`controller::Controller`]) |
//! | [`tab`] | Closed tab enumeration for the auth view |
//! | [`message`] | Auto-dismissing status line |
//! | [`timer`] | Pending timer registry with explicit ids |
//! | [`form`] | Login/register form state and local validation |
//! | [`session`] | Persisted session record and the [`session::SessionStore`] seam |
//! | [`wire`] | Request bodies, endpoints, and response classification |
//! | [`error`] | Validation / service / transport error taxonomy |
//! | [`inflight`] | Guard that always reports a completion for an issued call |
//! | [`consts`] | Delays and storage key |

pub mod consts;
pub mod controller;
pub mod error;
pub mod form;
pub mod inflight;
pub mod message;
pub mod session;
pub mod tab;
pub mod timer;
pub mod wire;

pub use controller::{Action, Completion, Controller, Effect, Event, View};
pub use error::{AuthError, CallError, ValidationError};
pub use session::{Session, SessionStore};
