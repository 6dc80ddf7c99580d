//! Data models for lintent
//!
//! Contains core type definitions used throughout the application.

pub mod config;
pub mod intention;
pub mod message;
pub mod position;

// Re-export commonly used types
pub use config::LintentConfig;
pub use intention::{ApplyOutcome, BASE_PRIORITY, FIX_ICON, Intention};
pub use message::{Fix, Message, Severity, Solution, SolutionFormat};
pub use position::{Position, Range, RangeBoundary};
