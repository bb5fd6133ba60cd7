//! Browser environment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps `web-sys` glue out of pages and components so those stay declarative.

pub mod dom;
pub mod storage;
