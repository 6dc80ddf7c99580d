//! Intention collection
//!
//! Turns the pending linter messages of a document into the fix actions that
//! apply at a cursor position. The collector only reads messages; deciding
//! which messages belong to a document, how a message maps to a range, and how
//! a fix lands in the document are delegated to collaborators so the logic
//! runs without any host editor.

use std::path::{Component, Path, PathBuf};

use crate::models::intention::{BASE_PRIORITY, Intention};
use crate::models::message::{Message, SolutionFormat};
use crate::models::position::{Position, Range, RangeBoundary};
use crate::services::fix::FixApplier;

/// Grammar scope matching every file type
pub const ALL_GRAMMARS: &str = "*";

/// Selects the messages that belong to a document
pub trait PathFilter {
    fn filter<'m>(&self, messages: &'m [Message], document: &Path) -> Vec<&'m Message>;
}

/// Maps a message to the range it covers and tests cursor containment
pub trait RangeTest {
    fn range_of(&self, message: &Message) -> Option<Range>;

    fn contains(&self, range: &Range, position: Position) -> bool;
}

/// Compares paths after lexical normalisation, without touching the filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedPathFilter;

impl PathFilter for NormalizedPathFilter {
    fn filter<'m>(&self, messages: &'m [Message], document: &Path) -> Vec<&'m Message> {
        let target = normalize_path(document);
        messages
            .iter()
            .filter(|m| normalize_path(&m.file) == target)
            .collect()
    }
}

/// Uses the message's own range with a configurable end boundary
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageRangeTest {
    pub boundary: RangeBoundary,
}

impl MessageRangeTest {
    pub fn new(boundary: RangeBoundary) -> Self {
        Self { boundary }
    }
}

impl RangeTest for MessageRangeTest {
    fn range_of(&self, message: &Message) -> Option<Range> {
        message.range
    }

    fn contains(&self, range: &Range, position: Position) -> bool {
        range.contains(position, self.boundary)
    }
}

/// Holds the latest message snapshot and answers intention queries against it
pub struct IntentionCollector<F = NormalizedPathFilter, R = MessageRangeTest> {
    messages: Vec<Message>,
    grammar_scopes: Vec<String>,
    path_filter: F,
    range_test: R,
}

impl IntentionCollector {
    pub fn new() -> Self {
        Self::with_collaborators(NormalizedPathFilter, MessageRangeTest::default())
    }

    pub fn with_boundary(boundary: RangeBoundary) -> Self {
        Self::with_collaborators(NormalizedPathFilter, MessageRangeTest::new(boundary))
    }
}

impl Default for IntentionCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: PathFilter, R: RangeTest> IntentionCollector<F, R> {
    pub fn with_collaborators(path_filter: F, range_test: R) -> Self {
        Self {
            messages: Vec::new(),
            grammar_scopes: vec![ALL_GRAMMARS.to_string()],
            path_filter,
            range_test,
        }
    }

    pub fn grammar_scopes(&self) -> &[String] {
        &self.grammar_scopes
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Replace the held snapshot wholesale.
    pub fn update(&mut self, messages: Vec<Message>) {
        tracing::debug!(
            previous = self.messages.len(),
            current = messages.len(),
            "Replacing message snapshot"
        );
        self.messages = messages;
    }

    /// Intentions applicable at `position` in `document`.
    ///
    /// Results keep message order, then solution order. Messages without
    /// solutions, without a range, not covering the position, or carrying
    /// legacy solutions contribute nothing.
    pub fn get_intentions<'a, A>(
        &'a self,
        document: &'a Path,
        position: Position,
        applier: &'a A,
    ) -> Vec<Intention<'a>>
    where
        A: FixApplier + ?Sized,
    {
        let mut intentions = Vec::new();

        for message in self.path_filter.filter(&self.messages, document) {
            if !message.solutions.has_solutions() {
                continue;
            }
            let in_range = self
                .range_test
                .range_of(message)
                .is_some_and(|range| self.range_test.contains(&range, position));
            if !in_range {
                continue;
            }
            let SolutionFormat::Structured(solutions) = &message.solutions else {
                continue;
            };

            let linter_name = message.linter_display_name();
            intentions.extend(solutions.iter().map(|solution| {
                let priority = solution
                    .priority
                    .map_or(BASE_PRIORITY, |p| p.saturating_add(BASE_PRIORITY));
                let title = solution
                    .title
                    .clone()
                    .unwrap_or_else(|| format!("Fix {} issue", linter_name));
                Intention::new(title, priority, move || {
                    applier.apply_fix(document, solution)
                })
            }));
        }

        intentions
    }
}

/// Lexically normalise a path: drop `.` components and fold `..` into its parent.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
