//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `a11yscan scan <url>` - Scan a website and write the consolidated report

mod scan;

pub use scan::ScanCommand;

use clap::{Parser, Subcommand};

/// a11yscan - A resumable website accessibility scanner.
///
/// Crawls a site, records resumable scan state under the chosen output
/// directory, and consolidates the results into a single HTML report.
#[derive(Parser, Debug)]
#[command(name = "a11yscan")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A resumable website accessibility scanner", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a website and write the consolidated report
    #[command(alias = "s")]
    Scan(ScanCommand),
}
