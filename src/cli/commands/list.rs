//! List command implementation
//!
//! Shows the fix intentions available at a cursor position.

use anyhow::Result;
use clap::Args;

use crate::app::App;
use crate::cli::ParsedLocation;
use crate::cli::response::{IntentionOutput, IntentionsResponse, LocationOutput};
use crate::models::intention::Intention;
use crate::services::fix::FileFixApplier;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// File path with position (file:line[:column])
    pub location: String,

    /// Sort by descending priority
    #[arg(long)]
    pub sort: bool,
}

pub async fn execute(args: ListArgs, app: &App) -> Result<()> {
    let ctx = &app.output;
    let loc = ParsedLocation::parse(&args.location)?.resolve(app.root());

    let collector = match app.collector().await {
        Ok(c) => c,
        Err(e) => {
            ctx.print_error(&e.to_string());
            return Ok(());
        }
    };

    let sort = args.sort || app.config().intentions.sort_by_priority;
    let intentions = arrange(
        collector.get_intentions(&loc.file, loc.position(), &FileFixApplier),
        sort,
    );

    let response = IntentionsResponse {
        location: LocationOutput::from_path(&loc.file, loc.line, loc.column, ctx.root()),
        count: intentions.len(),
        intentions: intentions
            .iter()
            .enumerate()
            .map(|(i, intention)| IntentionOutput::new(i, intention))
            .collect(),
    };
    ctx.print_success_flat(response);

    Ok(())
}

/// Order intentions for display; sorting is stable so ties keep collector order.
pub(crate) fn arrange(mut intentions: Vec<Intention<'_>>, sort: bool) -> Vec<Intention<'_>> {
    if sort {
        intentions.sort_by(|a, b| b.priority.cmp(&a.priority));
    }
    intentions
}
