//! Document coordinates
//!
//! Positions and ranges are 0-indexed, the same convention linters use on the
//! wire. CLI input is 1-indexed and converted at the edge.

use serde::{Deserialize, Serialize};

/// Position within a document (0-indexed)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }

    /// Convert 1-indexed CLI input to a 0-indexed position
    pub fn from_cli(line: u32, column: u32) -> Self {
        Self {
            line: line.saturating_sub(1),
            character: column.saturating_sub(1),
        }
    }

    /// Convert to 1-indexed display coordinates
    pub fn to_display(&self) -> (u32, u32) {
        (self.line.saturating_add(1), self.character.saturating_add(1))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

/// Whether a position sitting exactly on `Range::end` counts as inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RangeBoundary {
    #[default]
    Inclusive,
    Exclusive,
}

impl std::fmt::Display for RangeBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inclusive => write!(f, "inclusive"),
            Self::Exclusive => write!(f, "exclusive"),
        }
    }
}

impl std::str::FromStr for RangeBoundary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inclusive" | "closed" => Ok(Self::Inclusive),
            "exclusive" | "half-open" => Ok(Self::Exclusive),
            _ => Err(format!(
                "Unknown range boundary: '{}'. Valid: inclusive, exclusive",
                s
            )),
        }
    }
}

/// Range within a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Same range with `start <= end`
    pub fn ordered(&self) -> Self {
        if self.end < self.start {
            Self::new(self.end, self.start)
        } else {
            *self
        }
    }

    /// Start is always inclusive; `boundary` decides the end.
    pub fn contains(&self, position: Position, boundary: RangeBoundary) -> bool {
        let range = self.ordered();
        if position < range.start {
            return false;
        }
        match boundary {
            RangeBoundary::Inclusive => position <= range.end,
            RangeBoundary::Exclusive => position < range.end,
        }
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
