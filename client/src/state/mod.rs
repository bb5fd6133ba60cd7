//! Shared client-side state.
//!
//! DESIGN
//! ======
//! A single [`gate::Gate`] is provided via context; every component reads
//! and updates auth state through it.

pub mod gate;
