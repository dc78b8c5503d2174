//! Command dispatch module for routing CLI commands to their handlers.

use crate::cli::{Cli, Commands, ConfigCommands, FilterArgs, Shell};
use crate::commands::{self, CommandContext, CommandError, Result};

/// A parsed command ready to run.
pub enum Dispatch<'a> {
    Filter {
        filter: &'a FilterArgs,
        invert: bool,
        count: bool,
    },
    Check(&'a FilterArgs),
    Presets,
    Config(&'a Option<ConfigCommands>),
    Completions(Shell),
    Help,
}

impl<'a> Dispatch<'a> {
    /// Creates a dispatch from the CLI command.
    pub fn from_cli(cli: &'a Cli) -> Self {
        match &cli.command {
            Some(Commands::Filter {
                filter,
                invert,
                count,
            }) => Self::Filter {
                filter,
                invert: *invert,
                count: *count,
            },
            Some(Commands::Check { filter }) => Self::Check(filter),
            Some(Commands::Presets) => Self::Presets,
            Some(Commands::Config { command }) => Self::Config(command),
            Some(Commands::Completions { shell }) => Self::Completions(*shell),
            None => Self::Help,
        }
    }

    /// Runs the command.
    pub fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Filter {
                filter,
                invert,
                count,
            } => {
                let opts = commands::filter::FilterOptions {
                    filter: *filter,
                    invert: *invert,
                    count: *count,
                };
                commands::filter::execute(ctx, &opts)
            }
            Self::Check(filter) => commands::check::execute(ctx, filter),
            Self::Presets => commands::presets::execute(ctx),
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(*shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("rf - filter repository names with pattern sets");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
        Some(ConfigCommands::Init { force }) => commands::config::execute_init(ctx, *force),
    }
}
