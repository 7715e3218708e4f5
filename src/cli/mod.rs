//! CLI argument parsing for promptgrade
//!
//! Global flags: --config, --locale, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod args;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use promptgrade_core::catalog::Locale;
pub use promptgrade_core::format::OutputFormat;

pub use args::{BatchArgs, ConfigArgs, ScoreArgs};
use parse::{parse_format, parse_locale};

/// Promptgrade - rubric-based prompt quality scorer
#[derive(Parser, Debug)]
#[command(name = "promptgrade")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ./promptgrade.toml, then the global config)
    #[arg(long, global = true, env = "PROMPTGRADE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Rubric locale, overriding the configuration (ko, en)
    #[arg(long, global = true, value_parser = parse_locale)]
    pub locale: Option<Locale>,

    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace, or a full directive)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one prompt and suggest improvements
    Score(ScoreArgs),

    /// Score every row of a JSON Lines file or a directory of prompts
    Batch(BatchArgs),

    /// Show the evidence catalog behind the rubric
    Catalog,

    /// Show or save the effective configuration
    Config(ConfigArgs),
}
