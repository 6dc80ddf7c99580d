//! Intentions: selectable fix actions offered at a cursor position

use serde::Serialize;

use crate::error::FixError;

/// Priority every intention starts from; a solution's own priority is added on top.
pub const BASE_PRIORITY: i32 = 200;

/// Icon identifier shown next to fix intentions
pub const FIX_ICON: &str = "tools";

type Activation<'a> = Box<dyn Fn() -> Result<ApplyOutcome, FixError> + 'a>;

/// A UI-facing action built from exactly one solution of one message.
///
/// Intentions borrow the collector, the queried document path and the fix
/// applier, so they live only as long as the menu that shows them.
pub struct Intention<'a> {
    pub title: String,
    pub icon: &'static str,
    pub priority: i32,
    selected: Activation<'a>,
}

impl<'a> Intention<'a> {
    pub fn new(
        title: String,
        priority: i32,
        selected: impl Fn() -> Result<ApplyOutcome, FixError> + 'a,
    ) -> Self {
        Self {
            title,
            icon: FIX_ICON,
            priority,
            selected: Box::new(selected),
        }
    }

    /// Apply the underlying solution to the document it was queried for.
    pub fn select(&self) -> Result<ApplyOutcome, FixError> {
        (self.selected)()
    }
}

impl std::fmt::Debug for Intention<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Intention")
            .field("title", &self.title)
            .field("icon", &self.icon)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Intention<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.icon == other.icon && self.priority == other.priority
    }
}

/// Result of applying a fix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ApplyOutcome {
    Applied,
    /// The document no longer holds the text the fix was computed against
    TextMismatch { expected: String, actual: String },
}

impl ApplyOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::path::PathBuf;

    #[test]
    fn test_select_runs_activation() {
        let calls = Cell::new(0);
        let intention = Intention::new("Fix it".to_string(), BASE_PRIORITY, || {
            calls.set(calls.get() + 1);
            Ok(ApplyOutcome::Applied)
        });

        assert_eq!(intention.icon, FIX_ICON);
        assert!(intention.select().unwrap().is_applied());
        assert!(intention.select().unwrap().is_applied());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_select_propagates_errors() {
        let intention = Intention::new("Fix it".to_string(), 200, || {
            Err(FixError::UnknownDocument(PathBuf::from("/scratch.js")))
        });
        let err = intention.select().unwrap_err();
        assert!(err.to_string().contains("/scratch.js"));
    }

    #[test]
    fn test_equality_ignores_activation() {
        let a = Intention::new("A".to_string(), 210, || Ok(ApplyOutcome::Applied));
        let b = Intention::new("A".to_string(), 210, || {
            Err(FixError::UnknownDocument(PathBuf::from("/never.js")))
        });
        let c = Intention::new("A".to_string(), 200, || Ok(ApplyOutcome::Applied));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(format!("{a:?}").contains("priority: 210"));
    }

    #[test]
    fn test_outcome_serializes_with_status() {
        let value = serde_json::to_value(ApplyOutcome::TextMismatch {
            expected: "a".to_string(),
            actual: "b".to_string(),
        })
        .unwrap();
        assert_eq!(value["status"], "text_mismatch");
        assert_eq!(value["expected"], "a");
    }
}
