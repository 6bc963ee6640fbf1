//! CLI argument definitions using clap
//!
//! This module defines all command-line arguments for rested-export.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::export::ExportFormat;

/// rested-export - Export RESTED collections to Postman or HAR
#[derive(Parser, Debug, Clone)]
#[command(name = "rested-export", version, about, long_about = None)]
pub struct Args {
    // =========================================================================
    // POSITIONAL ARGUMENTS
    // =========================================================================

    /// Path to the collection file to export
    #[arg(value_name = "COLLECTION")]
    pub collection: PathBuf,

    // =========================================================================
    // EXPORT OPTIONS
    // =========================================================================

    /// Target format
    #[arg(short = 'f', long = "format", value_name = "FORMAT", value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file (defaults to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Single-line JSON output
    #[arg(long = "compact", action = ArgAction::SetTrue)]
    pub compact: bool,

    // =========================================================================
    // DIAGNOSTICS
    // =========================================================================

    /// Verbose output. Use -vv for even more verbose
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Show tracebacks on error
    #[arg(long = "traceback", action = ArgAction::SetTrue)]
    pub traceback: bool,
}
