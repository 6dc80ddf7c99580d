//! Apply command implementation
//!
//! Selects one intention at a position and runs it. Without `--execute` the
//! fix is applied to an in-memory copy and the result is shown instead.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use crate::app::App;
use crate::cli::ParsedLocation;
use crate::cli::commands::list::arrange;
use crate::cli::response::ApplyResponse;
use crate::models::intention::ApplyOutcome;
use crate::models::position::Position;
use crate::services::fix::{BufferFixApplier, FileFixApplier, FixApplier};
use crate::services::intentions::IntentionCollector;

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// File path with position (file:line[:column])
    pub location: String,

    /// Intention index from `list` (0-based)
    #[arg(long, default_value_t = 0)]
    pub index: usize,

    /// Index into the priority-sorted list
    #[arg(long)]
    pub sort: bool,

    /// Actually write the change (default: dry-run)
    #[arg(long)]
    pub execute: bool,
}

/// What selecting an intention produced
struct Selection {
    title: String,
    outcome: ApplyOutcome,
}

pub async fn execute(args: ApplyArgs, app: &App) -> Result<()> {
    let ctx = &app.output;
    let loc = ParsedLocation::parse(&args.location)?.resolve(app.root());
    tracing::debug!(location = %loc, execute = args.execute, "Applying intention");

    let collector = match app.collector().await {
        Ok(c) => c,
        Err(e) => {
            ctx.print_error(&e.to_string());
            return Ok(());
        }
    };
    let sort = args.sort || app.config().intentions.sort_by_priority;

    let (selection, preview) = if args.execute {
        let selection = select(
            &collector,
            &loc.file,
            loc.position(),
            &FileFixApplier,
            sort,
            args.index,
        );
        (selection, None)
    } else {
        let content = match tokio::fs::read_to_string(&loc.file).await {
            Ok(c) => c,
            Err(e) => {
                ctx.print_error(&format!("Failed to read {}: {}", loc.file.display(), e));
                return Ok(());
            }
        };
        let buffer = BufferFixApplier::new();
        buffer.open(&loc.file, content);
        let selection = select(
            &collector,
            &loc.file,
            loc.position(),
            &buffer,
            sort,
            args.index,
        );
        (selection, buffer.text(&loc.file))
    };

    match selection {
        Ok(selection) => {
            let dry_run = !args.execute;
            let preview = preview.filter(|_| dry_run && selection.outcome.is_applied());
            ctx.print_success_flat(ApplyResponse {
                intention: selection.title,
                dry_run,
                file: ctx.relative_path(&loc.file),
                outcome: selection.outcome,
                preview,
            });
        }
        Err(e) => ctx.print_error(&e),
    }

    Ok(())
}

fn select<A: FixApplier>(
    collector: &IntentionCollector,
    document: &Path,
    position: Position,
    applier: &A,
    sort: bool,
    index: usize,
) -> Result<Selection, String> {
    let intentions = arrange(collector.get_intentions(document, position, applier), sort);
    if intentions.is_empty() {
        return Err("No intentions available at this position".to_string());
    }

    let intention = intentions.get(index).ok_or_else(|| {
        format!(
            "Intention index out of range. Available: 0-{}",
            intentions.len() - 1
        )
    })?;

    tracing::debug!(title = %intention.title, priority = intention.priority, "Selected intention");
    let outcome = intention.select().map_err(|e| {
        if e.is_stale_document() {
            format!("{}. The file changed since linting; rerun the linter.", e)
        } else {
            e.to_string()
        }
    })?;
    Ok(Selection {
        title: intention.title.clone(),
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::message::{Fix, Message, Severity, Solution};
    use crate::models::position::Range;

    fn collector() -> IntentionCollector {
        let span = Range::new(Position::new(0, 0), Position::new(0, 3));
        let message = Message::new("/a.js", Some(span), Severity::Warning).with_solutions(vec![
            Solution::new(Fix::replace(span, "let").expecting("var")).with_title("Use let"),
            Solution::new(Fix::replace(span, "const").expecting("var"))
                .with_title("Use const")
                .with_priority(5),
        ]);
        let mut collector = IntentionCollector::new();
        collector.update(vec![message]);
        collector
    }

    #[test]
    fn test_select_by_index() {
        let collector = collector();
        let buffer = BufferFixApplier::new();
        buffer.open("/a.js", "var x = 1;");

        let selection =
            select(&collector, Path::new("/a.js"), Position::new(0, 1), &buffer, false, 0).unwrap();
        assert_eq!(selection.title, "Use let");
        assert!(selection.outcome.is_applied());
        assert_eq!(buffer.text(Path::new("/a.js")).as_deref(), Some("let x = 1;"));
    }

    #[test]
    fn test_select_sorted_index() {
        let collector = collector();
        let buffer = BufferFixApplier::new();
        buffer.open("/a.js", "var x = 1;");

        let selection =
            select(&collector, Path::new("/a.js"), Position::new(0, 1), &buffer, true, 0).unwrap();
        assert_eq!(selection.title, "Use const");
        assert_eq!(buffer.text(Path::new("/a.js")).as_deref(), Some("const x = 1;"));
    }

    #[test]
    fn test_select_errors() {
        let collector = collector();
        let buffer = BufferFixApplier::new();

        let err = select(&collector, Path::new("/a.js"), Position::new(4, 0), &buffer, false, 0)
            .err()
            .unwrap();
        assert!(err.contains("No intentions"));

        let err = select(&collector, Path::new("/a.js"), Position::new(0, 0), &buffer, false, 7)
            .err()
            .unwrap();
        assert!(err.contains("0-1"));

        // Document never opened in the buffer
        let err = select(&collector, Path::new("/a.js"), Position::new(0, 0), &buffer, false, 0)
            .err()
            .unwrap();
        assert!(err.contains("not open"));
    }

    #[test]
    fn test_select_reports_stale_messages() {
        let span = Range::new(Position::new(5, 0), Position::new(5, 3));
        let message = Message::new("/a.js", Some(span), Severity::Error)
            .with_solutions(vec![Solution::new(Fix::replace(span, "let"))]);
        let mut collector = IntentionCollector::new();
        collector.update(vec![message]);

        let buffer = BufferFixApplier::new();
        buffer.open("/a.js", "var x = 1;");

        let err = select(&collector, Path::new("/a.js"), Position::new(5, 1), &buffer, false, 0)
            .err()
            .unwrap();
        assert!(err.contains("outside /a.js"));
        assert!(err.contains("rerun the linter"));
    }
}
