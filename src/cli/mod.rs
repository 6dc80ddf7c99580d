//! CLI module for lintent
//!
//! Provides command-line interface using clap derive macros.

pub mod commands;
pub mod location;
pub mod output;
pub mod response;

use std::path::PathBuf;

pub use location::ParsedLocation;
pub use output::OutputContext;

use clap::{Parser, Subcommand};

use commands::{
    apply::ApplyArgs, config::ConfigArgs, list::ListArgs, messages::MessagesArgs,
};

const LONG_ABOUT: &str = r#"
lintent - fix intentions from linter output

Reads the messages a linter reported (a JSON array) and offers the fixes that
apply at a cursor position.

QUICK START:
  1. Save linter output:      eslint-to-lintent > .lintent/messages.json
  2. List fixes at a cursor:  lintent list src/app.js:10:5
  3. Preview a fix:           lintent apply src/app.js:10:5 --index 0
  4. Apply it:                lintent apply src/app.js:10:5 --index 0 --execute

MESSAGE FORMAT:
  [{"file": "src/app.js", "severity": "error", "excerpt": "Missing semicolon",
    "linter_name": "ESLint", "version": 2,
    "range": {"start": {"line": 9, "character": 0}, "end": {"line": 9, "character": 12}},
    "solutions": [{"title": "Add semicolon", "priority": 10,
      "position": {"start": {"line": 9, "character": 12}, "end": {"line": 9, "character": 12}},
      "replace_with": ";"}]}]
"#;

/// lintent - fix intentions from linter output
#[derive(Parser, Debug)]
#[command(name = "lintent")]
#[command(author, version, about, long_about = LONG_ABOUT)]
#[command(propagate_version = true)]
#[command(after_help = "Use 'lintent <COMMAND> --help' for more information about a command.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Linter messages file ('-' reads stdin)
    #[arg(long, short = 'm', global = true, env = "LINTENT_MESSAGES")]
    pub messages: Option<PathBuf>,

    /// Verbose output (show debug info)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List fix intentions at a position
    List(ListArgs),

    /// Apply a fix intention at a position
    Apply(ApplyArgs),

    /// Show linter messages for a file
    Messages(MessagesArgs),

    /// Configuration management
    Config(ConfigArgs),
}
