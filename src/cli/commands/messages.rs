//! Messages command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::app::App;
use crate::cli::response::{MessageOutput, MessagesResponse};
use crate::models::message::{Message, Severity};
use crate::services::intentions::{NormalizedPathFilter, PathFilter, normalize_path};

#[derive(Args, Debug)]
pub struct MessagesArgs {
    /// File path to show messages for
    pub file: PathBuf,

    /// Filter by severity (error, warning, info)
    #[arg(long, short = 's', value_delimiter = ',')]
    pub severity: Option<Vec<String>>,

    /// Only messages that carry fixes
    #[arg(long)]
    pub fixable: bool,
}

pub async fn execute(args: MessagesArgs, app: &App) -> Result<()> {
    let ctx = &app.output;

    let abs_file = normalize_path(&app.root().join(&args.file));

    let severity_filter = match args.severity.as_deref().map(parse_severities).transpose() {
        Ok(filter) => filter,
        Err(e) => {
            ctx.print_error(&e);
            return Ok(());
        }
    };

    match app.load_messages().await {
        Ok(messages) => {
            let selected: Vec<&Message> = NormalizedPathFilter
                .filter(&messages, &abs_file)
                .into_iter()
                .filter(|m| {
                    if let Some(ref filter) = severity_filter
                        && !filter.contains(&m.severity)
                    {
                        return false;
                    }
                    !args.fixable || m.solutions.has_solutions()
                })
                .collect();

            let response = MessagesResponse {
                file: ctx.relative_path(&abs_file),
                count: selected.len(),
                messages: selected.into_iter().map(MessageOutput::from).collect(),
            };
            ctx.print_success_flat(response);
        }
        Err(e) => ctx.print_error(&e.to_string()),
    }

    Ok(())
}

fn parse_severities(values: &[String]) -> Result<Vec<Severity>, String> {
    values.iter().map(|s| s.parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_severities() {
        let parsed = parse_severities(&["error".to_string(), "warn".to_string()]).unwrap();
        assert_eq!(parsed, vec![Severity::Error, Severity::Warning]);
    }

    #[test]
    fn test_unknown_severity_is_rejected() {
        let err = parse_severities(&["error".to_string(), "hint".to_string()]).unwrap_err();
        assert!(err.contains("'hint'"));
    }
}
