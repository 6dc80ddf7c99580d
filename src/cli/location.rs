//! Location parsing for CLI commands

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::models::position::Position;
use crate::services::intentions::normalize_path;

/// A `file:line[:column]` argument, 1-indexed as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLocation {
    pub file: PathBuf,
    pub line: u32,
    pub column: u32,
}

impl ParsedLocation {
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            bail!("Location cannot be empty");
        }

        let (file_part, rest) = split_path_and_position(input)?;
        let (line, column) = parse_position(rest)?;

        Ok(Self {
            file: PathBuf::from(file_part),
            line,
            column,
        })
    }

    /// Anchor a relative file at `root`, normalising `.` and `..` lexically
    pub fn resolve(&self, root: &Path) -> Self {
        let file = if self.file.is_absolute() {
            self.file.clone()
        } else {
            root.join(&self.file)
        };
        Self {
            file: normalize_path(&file),
            ..self.clone()
        }
    }

    /// 0-indexed cursor position
    pub fn position(&self) -> Position {
        Position::from_cli(self.line, self.column)
    }
}

/// Split at the first `:` followed by a digit, skipping a Windows drive prefix.
fn split_path_and_position(input: &str) -> Result<(&str, &str)> {
    let bytes = input.as_bytes();
    let is_windows = bytes.len() > 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic();
    let search_start = if is_windows { 2 } else { 0 };

    for (byte_idx, ch) in input[search_start..].char_indices() {
        if ch != ':' {
            continue;
        }
        let split = search_start + byte_idx;
        match input[split + 1..].chars().next() {
            Some(c) if c.is_ascii_digit() => return Ok((&input[..split], &input[split + 1..])),
            Some('-') => bail!(
                "Invalid line number: negative values not allowed. Line numbers are 1-indexed positive integers.\nExample: src/main.js:10:5"
            ),
            _ => {}
        }
    }

    bail!("Invalid location format. Expected: file:line[:column]\nExample: src/main.js:10:5")
}

fn parse_position(rest: &str) -> Result<(u32, u32)> {
    let (line_str, column_str) = match rest.split_once(':') {
        Some((line, column)) => (line, Some(column)),
        None => (rest, None),
    };

    let line: u32 = line_str.parse().map_err(|_| {
        anyhow::anyhow!(
            "Invalid line number '{}': must be a positive integer (1-indexed)",
            line_str
        )
    })?;
    let column: u32 = match column_str {
        Some(col) => col.parse().map_err(|_| {
            anyhow::anyhow!(
                "Invalid column number '{}': must be a positive integer (1-indexed)",
                col
            )
        })?,
        None => 1,
    };

    if line == 0 {
        bail!("Line number must be >= 1 (got 0). Line numbers are 1-indexed.");
    }
    if column == 0 {
        bail!("Column number must be >= 1 (got 0). Column numbers are 1-indexed.");
    }

    Ok((line, column))
}

impl std::fmt::Display for ParsedLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_location() {
        let loc = ParsedLocation::parse("src/a.js:10:5").unwrap();
        assert_eq!(loc.file, PathBuf::from("src/a.js"));
        assert_eq!((loc.line, loc.column), (10, 5));
        assert_eq!(loc.position(), Position::new(9, 4));
    }

    #[test]
    fn test_parse_without_column() {
        let loc = ParsedLocation::parse("src/a.js:3").unwrap();
        assert_eq!(loc.column, 1);
        assert_eq!(loc.position(), Position::new(2, 0));
    }

    #[test]
    fn test_parse_windows_path() {
        let loc = ParsedLocation::parse("C:\\work\\a.js:10:5").unwrap();
        assert_eq!(loc.file, PathBuf::from("C:\\work\\a.js"));
        assert_eq!(loc.line, 10);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(ParsedLocation::parse("").is_err());
        assert!(ParsedLocation::parse("a.js").is_err());
        assert!(ParsedLocation::parse("a.js:0:1").is_err());
        assert!(ParsedLocation::parse("a.js:1:0").is_err());
        assert!(ParsedLocation::parse("a.js:1:x").is_err());
    }

    #[test]
    fn test_parse_negative_line() {
        let err = ParsedLocation::parse("a.js:-5:1").unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_resolve_against_root() {
        let loc = ParsedLocation::parse("./src/../a.js:1:2").unwrap();
        let resolved = loc.resolve(Path::new("/project"));
        assert_eq!(resolved.file, PathBuf::from("/project/a.js"));
        assert_eq!(resolved.column, 2);

        let absolute = ParsedLocation::parse("/elsewhere/b.js:1").unwrap();
        assert_eq!(
            absolute.resolve(Path::new("/project")).file,
            PathBuf::from("/elsewhere/b.js")
        );
    }

    #[test]
    fn test_display() {
        let loc = ParsedLocation::parse("src/a.js:10:5").unwrap();
        assert_eq!(loc.to_string(), "src/a.js:10:5");
    }
}
