//! Command-line argument model

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::apply::ApplyArgs;
use crate::cli::commands::calc::CalcArgs;
use crate::cli::commands::check::CheckArgs;
use crate::cli::commands::completions::CompletionsArgs;
use crate::cli::commands::config::ConfigCommands;
use crate::cli::commands::presets::PresetsCommands;

#[derive(Parser, Debug)]
#[command(name = "basesize")]
#[command(version, about = "Derive the base (stock) size of a part from its bounding box")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Directory holding settings.yaml, presets.yaml, ...
    #[arg(long, global = true, env = "BASESIZE_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Directory for the usage counter (appdata.json)
    #[arg(long, global = true, env = "BASESIZE_DATA_DIR", value_name = "DIR", hide = true)]
    pub data_dir: Option<PathBuf>,

    /// Logon name to act as (default: USERNAME / USER)
    #[arg(long, global = true, value_name = "LOGON")]
    pub user: Option<String>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Text for single results, a table for lists
    Auto,
    Text,
    Table,
    Yaml,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate a base size from three extents
    Calc(CalcArgs),

    /// Calculate and save the base size of a part file
    Apply(ApplyArgs),

    /// Inspect the preset catalog
    #[command(subcommand)]
    Presets(PresetsCommands),

    /// Validate a base size against a preset's pattern
    Check(CheckArgs),

    /// Manage the configuration directory
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
