//! Networking.
//!
//! `api` issues the three auth calls; the wire schema and response
//! classification live in `controller::wire`.

pub mod api;
