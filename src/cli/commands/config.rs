//! Config command implementation
//!
//! Inspect and manage global and project configuration files.

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::app::App;
use crate::cli::OutputContext;
use crate::models::config::LintentConfig;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Initialize configuration file
    Init {
        /// Initialize global config (~/.config/lintent)
        #[arg(long)]
        global: bool,

        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration
    Show {
        /// Show global config only
        #[arg(long)]
        global: bool,
    },

    /// Show config file path
    Path {
        /// Show global config path
        #[arg(long)]
        global: bool,
    },

    /// Edit configuration with default editor
    Edit {
        /// Edit global config
        #[arg(long)]
        global: bool,
    },
}

#[derive(Serialize)]
struct ConfigInitResponse {
    status: String,
    path: String,
    level: &'static str,
}

#[derive(Serialize)]
struct ConfigShowResponse {
    level: &'static str,
    config: serde_json::Value,
}

#[derive(Serialize)]
struct ConfigPathResponse {
    level: &'static str,
    path: String,
    exists: bool,
}

#[derive(Serialize)]
struct ConfigEditResponse {
    status: String,
    path: String,
}

fn config_to_json(config: &LintentConfig) -> serde_json::Value {
    serde_json::json!({
        "intentions": {
            "range_boundary": config.intentions.range_boundary.to_string(),
            "sort_by_priority": config.intentions.sort_by_priority,
        },
        "messages": {
            "path": config.messages.path.display().to_string(),
        },
        "output": {
            "pretty": config.output.pretty,
        },
    })
}

/// Global paths stay absolute; project paths are shown relative to the root
fn display_path(ctx: &OutputContext, path: &Path, global: bool) -> String {
    if global {
        path.display().to_string()
    } else {
        ctx.relative_path(path)
    }
}

fn level(global: bool) -> &'static str {
    if global { "global" } else { "project" }
}

pub async fn execute(args: ConfigArgs, app: &App) -> Result<()> {
    let ctx = &app.output;
    let service = &app.config_service;

    match args.command {
        ConfigCommand::Init { global, force } => match service.init(global, force).await {
            Ok(path) => ctx.print_success_flat(ConfigInitResponse {
                status: "created".to_string(),
                path: display_path(ctx, &path, global),
                level: level(global),
            }),
            Err(e) => ctx.print_error(&e.to_string()),
        },

        ConfigCommand::Show { global } => match service.load(global).await {
            Ok(config) => ctx.print_success_flat(ConfigShowResponse {
                level: if global { "global" } else { "merged" },
                config: config_to_json(&config),
            }),
            Err(e) => ctx.print_error(&e.to_string()),
        },

        ConfigCommand::Path { global } => {
            let path = service.config_path(global);
            ctx.print_success_flat(ConfigPathResponse {
                level: level(global),
                path: display_path(ctx, &path, global),
                exists: path.exists(),
            });
        }

        ConfigCommand::Edit { global } => match service.edit(global).await {
            Ok(path) => ctx.print_success_flat(ConfigEditResponse {
                status: "opened".to_string(),
                path: display_path(ctx, &path, global),
            }),
            Err(e) => ctx.print_error(&e.to_string()),
        },
    }

    Ok(())
}
