//! Main execution logic

use clap::Parser;
use tracing::debug;

use crate::cli::Args;
use crate::config::Config;
use crate::errors::RestedError;
use crate::export::run_export;
use crate::status::ExitStatus;

/// Main entry point for the CLI.
///
/// Handles configuration loading, argument parsing, and dispatch to the
/// export pipeline.
pub fn run(args: Vec<String>) -> ExitStatus {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {}", e);
            Config::default()
        }
    };

    let merged_args = merge_default_options(args, &config);

    let parsed = match Args::try_parse_from(&merged_args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    init_tracing(parsed.verbose);
    debug!(collection = %parsed.collection.display(), "Parsed arguments");

    match dispatch(&parsed) {
        Ok(status) => status,
        Err(e) => handle_error(e, parsed.traceback),
    }
}

fn dispatch(args: &Args) -> Result<ExitStatus, RestedError> {
    let format = args.format.ok_or_else(|| {
        RestedError::Argument("--format is required (postman or har)".to_string())
    })?;

    run_export(args, format)
}

/// Insert default options from config after the program name
fn merge_default_options(args: Vec<String>, config: &Config) -> Vec<String> {
    if config.default_options.is_empty() {
        return args;
    }

    let mut merged = Vec::with_capacity(args.len() + config.default_options.len());
    let mut rest = args.into_iter();

    if let Some(program) = rest.next() {
        merged.push(program);
    }
    merged.extend(config.default_options.iter().cloned());
    merged.extend(rest);
    merged
}

/// Initialize the tracing subscriber from the verbosity count
///
/// The RESTED_EXPORT_LOG env var overrides the flag-derived filter.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default_filter = match verbose {
        0 => "rested_export=warn",
        1 => "rested_export=info",
        _ => "rested_export=debug",
    };

    let filter = EnvFilter::try_from_env("RESTED_EXPORT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn handle_error(error: RestedError, traceback: bool) -> ExitStatus {
    if traceback {
        eprintln!("Error: {:?}", error);
    } else {
        eprintln!("Error: {}", error);
    }
    ExitStatus::Error
}
