//! Diagnostic messages reported by linters

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::position::Range;

/// Solution format version that carries structured solutions
pub const STRUCTURED_VERSION: u32 = 2;

/// One reported problem in a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawMessage", into = "RawMessage")]
pub struct Message {
    pub file: PathBuf,
    pub range: Option<Range>,
    pub severity: Severity,
    pub excerpt: String,
    pub linter_name: Option<String>,
    pub solutions: SolutionFormat,
}

impl Message {
    pub fn new(file: impl Into<PathBuf>, range: Option<Range>, severity: Severity) -> Self {
        Self {
            file: file.into(),
            range,
            severity,
            excerpt: String::new(),
            linter_name: None,
            solutions: SolutionFormat::Structured(Vec::new()),
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn with_linter(mut self, name: impl Into<String>) -> Self {
        self.linter_name = Some(name.into());
        self
    }

    pub fn with_solutions(mut self, solutions: Vec<Solution>) -> Self {
        self.solutions = SolutionFormat::Structured(solutions);
        self
    }

    pub fn legacy(mut self) -> Self {
        self.solutions = SolutionFormat::Legacy;
        self
    }

    pub fn linter_display_name(&self) -> &str {
        self.linter_name.as_deref().unwrap_or("Linter")
    }
}

/// Severity levels reported by linters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" | "e" => Ok(Self::Error),
            "warning" | "warn" | "w" => Ok(Self::Warning),
            "info" | "information" | "i" => Ok(Self::Info),
            _ => Err(format!(
                "Unknown severity: '{}'. Valid: error, warning, info",
                s
            )),
        }
    }
}

/// Solutions attached to a message, tagged by the format that produced them.
///
/// Only `Structured` solutions become intentions; `Legacy` messages are kept
/// so they can still be listed, but they never yield fixes.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SolutionFormat {
    #[default]
    Legacy,
    Structured(Vec<Solution>),
}

impl SolutionFormat {
    pub fn solutions(&self) -> &[Solution] {
        match self {
            Self::Legacy => &[],
            Self::Structured(solutions) => solutions,
        }
    }

    pub fn has_solutions(&self) -> bool {
        !self.solutions().is_empty()
    }

    pub fn version(&self) -> u32 {
        match self {
            Self::Legacy => 1,
            Self::Structured(_) => STRUCTURED_VERSION,
        }
    }
}

/// A proposed fix for a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(flatten)]
    pub fix: Fix,
}

impl Solution {
    pub fn new(fix: Fix) -> Self {
        Self {
            title: None,
            priority: None,
            fix,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Text replacement carried by a solution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix {
    pub position: Range,
    /// Text expected at `position`; the fix is refused when it differs
    #[serde(
        default,
        alias = "currentText",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_text: Option<String>,
    #[serde(alias = "replaceWith")]
    pub replace_with: String,
}

impl Fix {
    pub fn replace(position: Range, replace_with: impl Into<String>) -> Self {
        Self {
            position,
            current_text: None,
            replace_with: replace_with.into(),
        }
    }

    pub fn expecting(mut self, current_text: impl Into<String>) -> Self {
        self.current_text = Some(current_text.into());
        self
    }
}

/// On-disk shape of a message
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawMessage {
    file: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    range: Option<Range>,
    severity: Severity,
    #[serde(default)]
    excerpt: String,
    #[serde(
        default,
        alias = "linterName",
        skip_serializing_if = "Option::is_none"
    )]
    linter_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    solutions: Vec<Solution>,
}

impl From<RawMessage> for Message {
    fn from(raw: RawMessage) -> Self {
        let solutions = match raw.version {
            Some(STRUCTURED_VERSION) => SolutionFormat::Structured(raw.solutions),
            _ => SolutionFormat::Legacy,
        };
        Self {
            file: raw.file,
            range: raw.range,
            severity: raw.severity,
            excerpt: raw.excerpt,
            linter_name: raw.linter_name,
            solutions,
        }
    }
}

impl From<Message> for RawMessage {
    fn from(message: Message) -> Self {
        let version = Some(message.solutions.version());
        let solutions = match message.solutions {
            SolutionFormat::Legacy => Vec::new(),
            SolutionFormat::Structured(solutions) => solutions,
        };
        Self {
            file: message.file,
            range: message.range,
            severity: message.severity,
            excerpt: message.excerpt,
            linter_name: message.linter_name,
            version,
            solutions,
        }
    }
}
