//! Reusable view pieces shared by the pages.

pub mod message_bar;
pub mod tab_bar;
