//! Command implementations for lintent
//!
//! Each command is implemented in its own module.

pub mod apply;
pub mod config;
pub mod list;
pub mod messages;
