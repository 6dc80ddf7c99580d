//! Error types for lintent

use std::path::PathBuf;

use thiserror::Error;

use crate::models::position::Position;

pub type LintentResult<T> = std::result::Result<T, LintentError>;

#[derive(Debug, Error)]
pub enum LintentError {
    #[error("{0}")]
    Message(#[from] MessageError),

    #[error("{0}")]
    Fix(#[from] FixError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum MessageError {
    #[error("Messages file not found: {0}. Point --messages at a linter output file.")]
    NotFound(PathBuf),

    #[error("Invalid messages file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum FixError {
    #[error("Position {position} is outside {document} ({lines} lines)")]
    OutOfBounds {
        document: PathBuf,
        position: Position,
        lines: usize,
    },

    #[error("Document is not open: {0}")]
    UnknownDocument(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FixError {
    /// Whether retrying after reloading the document could succeed
    pub fn is_stale_document(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
