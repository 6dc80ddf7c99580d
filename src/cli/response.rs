//! Response types for CLI output
//!
//! All types implement Serialize for consistent JSON output.

use std::path::Path;

use serde::Serialize;

use crate::models::intention::{ApplyOutcome, Intention};
use crate::models::message::{Fix, Message};
use crate::models::position::Range;

/// Location in a file (relative path by default, 1-indexed)
#[derive(Debug, Clone, Serialize)]
pub struct LocationOutput {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl LocationOutput {
    /// Create from absolute path, converting to relative if within root
    pub fn from_path(path: &Path, line: u32, column: u32, root: &Path) -> Self {
        let file = path
            .strip_prefix(root)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| path.display().to_string());

        Self { file, line, column }
    }
}

/// 1-indexed range output
#[derive(Debug, Clone, Serialize)]
pub struct RangeOutput {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl From<&Range> for RangeOutput {
    fn from(range: &Range) -> Self {
        let (start_line, start_column) = range.start.to_display();
        let (end_line, end_column) = range.end.to_display();
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IntentionOutput {
    pub index: usize,
    pub title: String,
    pub icon: String,
    pub priority: i32,
}

impl IntentionOutput {
    pub fn new(index: usize, intention: &Intention<'_>) -> Self {
        Self {
            index,
            title: intention.title.clone(),
            icon: intention.icon.to_string(),
            priority: intention.priority,
        }
    }
}

/// Response for list command
#[derive(Debug, Serialize)]
pub struct IntentionsResponse {
    pub location: LocationOutput,
    pub count: usize,
    pub intentions: Vec<IntentionOutput>,
}

#[derive(Debug, Serialize)]
pub struct FixOutput {
    pub range: RangeOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_text: Option<String>,
    pub replace_with: String,
}

impl From<&Fix> for FixOutput {
    fn from(fix: &Fix) -> Self {
        Self {
            range: RangeOutput::from(&fix.position),
            current_text: fix.current_text.clone(),
            replace_with: fix.replace_with.clone(),
        }
    }
}

/// Response for apply command
#[derive(Debug, Serialize)]
pub struct ApplyResponse {
    pub intention: String,
    pub dry_run: bool,
    pub file: String,
    pub outcome: ApplyOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageOutput {
    pub severity: String,
    pub excerpt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linter: Option<String>,
    pub version: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fixes: Vec<FixOutput>,
}

impl From<&Message> for MessageOutput {
    fn from(message: &Message) -> Self {
        Self {
            severity: message.severity.to_string(),
            excerpt: message.excerpt.clone(),
            range: message.range.as_ref().map(RangeOutput::from),
            linter: message.linter_name.clone(),
            version: message.solutions.version(),
            fixes: message
                .solutions
                .solutions()
                .iter()
                .map(|s| FixOutput::from(&s.fix))
                .collect(),
        }
    }
}

/// Response for messages command
#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub file: String,
    pub count: usize,
    pub messages: Vec<MessageOutput>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::message::{Severity, Solution};
    use crate::models::position::Position;

    #[test]
    fn test_range_output_is_one_indexed() {
        let range = Range::new(Position::new(0, 0), Position::new(2, 7));
        let out = RangeOutput::from(&range);
        assert_eq!((out.start_line, out.start_column), (1, 1));
        assert_eq!((out.end_line, out.end_column), (3, 8));
    }

    #[test]
    fn test_message_output_lists_fixes() {
        let message = Message::new("/a.js", None, Severity::Warning)
            .with_excerpt("Unexpected var")
            .with_solutions(vec![Solution::new(
                Fix::replace(Range::default(), "let").expecting("var"),
            )]);
        let value = serde_json::to_value(MessageOutput::from(&message)).unwrap();
        assert_eq!(value["severity"], "warning");
        assert_eq!(value["version"], 2);
        assert_eq!(value["fixes"][0]["current_text"], "var");
        assert!(value.get("range").is_none());
    }

    #[test]
    fn test_message_output_at_max_line() {
        let json = r#"{"file": "/a.js", "severity": "error",
            "range": {"start": {"line": 4294967295, "character": 0}, "end": {"line": 4294967295, "character": 4294967295}}}"#;
        let message: Message = serde_json::from_str(json).unwrap();
        let out = MessageOutput::from(&message);
        let range = out.range.unwrap();
        assert_eq!((range.start_line, range.start_column), (u32::MAX, 1));
        assert_eq!((range.end_line, range.end_column), (u32::MAX, u32::MAX));
    }
}
