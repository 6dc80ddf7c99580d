//! Fix application
//!
//! Appliers realise a solution's text replacement in a document. The collector
//! never calls these directly; an intention's activation does.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::FixError;
use crate::models::intention::ApplyOutcome;
use crate::models::message::{Fix, Solution};
use crate::models::position::Position;
use crate::services::intentions::normalize_path;

/// Applies one solution to one document
pub trait FixApplier {
    fn apply_fix(&self, document: &Path, solution: &Solution) -> Result<ApplyOutcome, FixError>;
}

/// Apply `fix` to `text`, returning the outcome and the resulting text.
///
/// When the fix names the text it expects and the document disagrees, nothing
/// is changed and the original text is returned alongside `TextMismatch`.
pub fn apply_fix_to_text(
    document: &Path,
    text: &str,
    fix: &Fix,
) -> Result<(ApplyOutcome, String), FixError> {
    let range = fix.position.ordered();
    let start = offset_at(document, text, range.start)?;
    let end = offset_at(document, text, range.end)?;

    let actual = &text[start..end];
    if let Some(expected) = fix.current_text.as_deref()
        && expected != actual
    {
        tracing::warn!(
            document = %document.display(),
            expected,
            actual,
            "Not applying fix because text did not match the expected one"
        );
        return Ok((
            ApplyOutcome::TextMismatch {
                expected: expected.to_string(),
                actual: actual.to_string(),
            },
            text.to_string(),
        ));
    }

    let mut result = String::with_capacity(text.len() + fix.replace_with.len());
    result.push_str(&text[..start]);
    result.push_str(&fix.replace_with);
    result.push_str(&text[end..]);
    Ok((ApplyOutcome::Applied, result))
}

/// Byte offset of `position`; columns past the end of a line clamp to its end.
fn offset_at(document: &Path, text: &str, position: Position) -> Result<usize, FixError> {
    let mut line_start = 0;
    for (index, raw_line) in text.split('\n').enumerate() {
        if index == position.line as usize {
            let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
            let column = line
                .char_indices()
                .nth(position.character as usize)
                .map_or(line.len(), |(i, _)| i);
            return Ok(line_start + column);
        }
        line_start += raw_line.len() + 1;
    }

    Err(FixError::OutOfBounds {
        document: document.to_path_buf(),
        position,
        lines: text.split('\n').count(),
    })
}

/// Applies fixes to files on disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFixApplier;

impl FixApplier for FileFixApplier {
    fn apply_fix(&self, document: &Path, solution: &Solution) -> Result<ApplyOutcome, FixError> {
        let content = std::fs::read_to_string(document)?;
        let (outcome, result) = apply_fix_to_text(document, &content, &solution.fix)?;
        if outcome.is_applied() {
            std::fs::write(document, result)?;
            tracing::debug!(document = %document.display(), "Applied fix");
        }
        Ok(outcome)
    }
}

/// Applies fixes to in-memory documents
#[derive(Debug, Default)]
pub struct BufferFixApplier {
    documents: RefCell<HashMap<PathBuf, String>>,
}

impl BufferFixApplier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self, document: impl AsRef<Path>, text: impl Into<String>) {
        self.documents
            .borrow_mut()
            .insert(normalize_path(document.as_ref()), text.into());
    }

    pub fn text(&self, document: &Path) -> Option<String> {
        self.documents
            .borrow()
            .get(&normalize_path(document))
            .cloned()
    }
}

impl FixApplier for BufferFixApplier {
    fn apply_fix(&self, document: &Path, solution: &Solution) -> Result<ApplyOutcome, FixError> {
        let key = normalize_path(document);
        let mut documents = self.documents.borrow_mut();
        let text = documents
            .get_mut(&key)
            .ok_or_else(|| FixError::UnknownDocument(document.to_path_buf()))?;

        let (outcome, result) = apply_fix_to_text(document, text, &solution.fix)?;
        *text = result;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::position::Range;
    use tokio_test::{assert_err, assert_ok};

    fn fix(sl: u32, sc: u32, el: u32, ec: u32, with: &str) -> Fix {
        Fix::replace(
            Range::new(Position::new(sl, sc), Position::new(el, ec)),
            with,
        )
    }

    fn apply(text: &str, fix: &Fix) -> (ApplyOutcome, String) {
        assert_ok!(apply_fix_to_text(Path::new("/doc"), text, fix))
    }

    #[test]
    fn test_insert_at_end_of_line() {
        let (outcome, text) = apply("let a = 1\nlet b = 2\n", &fix(0, 9, 0, 9, ";"));
        assert!(outcome.is_applied());
        assert_eq!(text, "let a = 1;\nlet b = 2\n");
    }

    #[test]
    fn test_replace_across_lines() {
        let (_, text) = apply("one\ntwo\nthree", &fix(0, 1, 2, 2, "-"));
        assert_eq!(text, "o-ree");
    }

    #[test]
    fn test_columns_count_characters() {
        let (_, text) = apply("é = ü", &fix(0, 4, 0, 5, "ö"));
        assert_eq!(text, "é = ö");
    }

    #[test]
    fn test_crlf_line_end_is_not_replaced() {
        let (_, text) = apply("abc\r\ndef", &fix(0, 10, 0, 10, "!"));
        assert_eq!(text, "abc!\r\ndef");
    }

    #[test]
    fn test_current_text_match_applies() {
        let f = fix(0, 0, 0, 3, "let").expecting("var");
        let (outcome, text) = apply("var x", &f);
        assert!(outcome.is_applied());
        assert_eq!(text, "let x");
    }

    #[test]
    fn test_current_text_mismatch_leaves_text() {
        let f = fix(0, 0, 0, 3, "let").expecting("var");
        let (outcome, text) = apply("const x", &f);
        assert_eq!(
            outcome,
            ApplyOutcome::TextMismatch {
                expected: "var".to_string(),
                actual: "con".to_string(),
            }
        );
        assert_eq!(text, "const x");
    }

    #[test]
    fn test_line_out_of_bounds() {
        let err = assert_err!(apply_fix_to_text(
            Path::new("/doc"),
            "one line",
            &fix(4, 0, 4, 0, "x")
        ));
        assert!(matches!(err, FixError::OutOfBounds { lines: 1, .. }));
    }

    #[test]
    fn test_insert_on_trailing_empty_line() {
        let (_, text) = apply("a\n", &fix(1, 0, 1, 0, "b\n"));
        assert_eq!(text, "a\nb\n");
    }

    #[test]
    fn test_buffer_applier() {
        let applier = BufferFixApplier::new();
        applier.open("/src/./a.js", "a = 1");
        let solution = Solution::new(fix(0, 5, 0, 5, ";"));

        let outcome = assert_ok!(applier.apply_fix(Path::new("/src/a.js"), &solution));
        assert!(outcome.is_applied());
        assert_eq!(applier.text(Path::new("/src/a.js")).as_deref(), Some("a = 1;"));

        let err = assert_err!(applier.apply_fix(Path::new("/missing.js"), &solution));
        assert!(matches!(err, FixError::UnknownDocument(_)));
    }

    #[test]
    fn test_file_applier_writes_only_when_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.js");
        std::fs::write(&path, "var x = 1\n").unwrap();

        let mismatch = Solution::new(fix(0, 0, 0, 3, "let").expecting("const"));
        let outcome = assert_ok!(FileFixApplier.apply_fix(&path, &mismatch));
        assert!(!outcome.is_applied());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "var x = 1\n");

        let good = Solution::new(fix(0, 0, 0, 3, "let").expecting("var"));
        let outcome = assert_ok!(FileFixApplier.apply_fix(&path, &good));
        assert!(outcome.is_applied());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "let x = 1\n");
    }

    #[test]
    fn test_file_applier_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let solution = Solution::new(fix(0, 0, 0, 0, "x"));
        let err = assert_err!(FileFixApplier.apply_fix(&dir.path().join("nope.js"), &solution));
        assert!(matches!(err, FixError::Io(_)));
    }
}
