//! lintent - Linter Intentions Library
//!
//! Turns the fix solutions attached to linter messages into selectable
//! intentions at a cursor position, and applies the one a user picks.

pub mod app;
pub mod cli;
pub mod error;
pub mod models;
pub mod services;

pub use error::{LintentError, LintentResult};
pub use models::{Intention, Message, Position, Solution};
pub use services::IntentionCollector;
