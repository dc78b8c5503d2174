use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::{CommandContext, CommandError};
use dispatch::Dispatch;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{error_json:#}");
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(error_exit_status(&e))
        }
    }
}

fn run(cli: &Cli) -> commands::Result<()> {
    let ctx = CommandContext::from_cli(cli);
    Dispatch::from_cli(cli).execute(&ctx)
}

/// Installs the stderr log subscriber.
///
/// `--verbose` shows debug events, `--quiet` only errors; `RUST_LOG`
/// overrides both.
fn init_tracing(cli: &Cli) {
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else if cli.quiet {
        tracing::Level::ERROR
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Filter(_) => "FILTER_ERROR",
        CommandError::Preset(_) => "PRESET_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit status for an error.
fn error_exit_status(e: &CommandError) -> u8 {
    match e {
        CommandError::Filter(_) => 1,
        CommandError::Json(_) => 1,
        CommandError::Io(_) => 3,
        CommandError::Config(_) => 5,
        CommandError::Preset(_) => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repo_filter_rs::FilterError;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            error_code(&CommandError::Filter(FilterError::XorCapacity)),
            "FILTER_ERROR"
        );
        assert_eq!(
            error_code(&CommandError::Preset("missing".into())),
            "PRESET_ERROR"
        );
        assert_eq!(
            error_code(&CommandError::Config("bad".into())),
            "CONFIG_ERROR"
        );
    }

    #[test]
    fn test_exit_statuses() {
        assert_eq!(
            error_exit_status(&CommandError::Filter(FilterError::XorCapacity)),
            1
        );
        assert_eq!(
            error_exit_status(&CommandError::Io(std::io::Error::other("boom"))),
            3
        );
        assert_eq!(
            error_exit_status(&CommandError::Preset("missing".into())),
            5
        );
    }

    #[test]
    fn test_filter_error_message() {
        let e = CommandError::from(FilterError::XorCapacity);
        assert_eq!(
            e.to_string(),
            "filter error: an XOR filter set can contain only 2 filters"
        );
    }
}
