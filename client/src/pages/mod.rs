//! The two top-level views.
//!
//! ARCHITECTURE
//! ============
//! `App` shows exactly one of these, chosen by the controller's view state;
//! there is no router.

pub mod auth;
pub mod dashboard;
