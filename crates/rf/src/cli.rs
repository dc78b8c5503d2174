//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the rf CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use repo_filter_rs::Operator;

/// rf - filter repository names with pattern sets
#[derive(Parser, Debug)]
#[command(name = "rf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use this config file instead of ~/.config/rf/config.toml
    #[arg(long, global = true, env = "RF_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the items that pass the filters
    #[command(alias = "f")]
    Filter {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print the items that do NOT pass instead
        #[arg(long)]
        invert: bool,

        /// Print only the number of printed items
        #[arg(long)]
        count: bool,
    },

    /// Show every item with its pass/fail result
    #[command(alias = "c")]
    Check {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List configured presets
    Presets,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Inputs and filter options shared by `filter` and `check`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Items to test (default: read one per line from --input or stdin)
    pub items: Vec<String>,

    /// Read items from a file ("-" for stdin)
    #[arg(short, long, conflicts_with = "items")]
    pub input: Option<PathBuf>,

    /// Delimited pattern, e.g. "/^web-/" or "#-api$#i" (repeatable)
    #[arg(short, long = "pattern", action = clap::ArgAction::Append)]
    pub patterns: Vec<String>,

    /// Configured preset to include (repeatable)
    #[arg(short = 'P', long = "preset", action = clap::ArgAction::Append)]
    pub presets: Vec<String>,

    /// How patterns and presets combine (default: from config, else "and")
    #[arg(short, long, value_enum)]
    pub operator: Option<OperatorArg>,
}

/// Logical operator accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OperatorArg {
    And,
    Or,
    Xor,
}

impl From<OperatorArg> for Operator {
    fn from(arg: OperatorArg) -> Self {
        match arg {
            OperatorArg::And => Operator::And,
            OperatorArg::Or => Operator::Or,
            OperatorArg::Xor => Operator::Xor,
        }
    }
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Show config file path
    Path,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Supported shells for completions
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}
