//! Scan subcommand implementation.
//!
//! Handles the `a11yscan scan <url>` command: validates the target, builds
//! [`ScanArguments`], wires the default collaborators, and hands off to the
//! command runner.

use crate::crawler::LocalCrawlEngine;
use crate::error::{CliError, CliResult};
use crate::report::SummaryReportGenerator;
use crate::runner::CrawlerCommandRunner;
use crate::types::ScanArguments;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use url::Url;

/// Scan a website and write the consolidated report.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Root URL of the website to scan
    #[arg(value_name = "URL")]
    pub url: String,

    /// Output directory for crawl state and the report
    #[arg(short, long, default_value = "a11yscan-output")]
    pub output: PathBuf,

    /// Discard the prior scan result and start over
    #[arg(long, conflicts_with = "continue_scan")]
    pub restart: bool,

    /// Continue the prior scan for the last URL provided
    #[arg(long = "continue")]
    pub continue_scan: bool,

    /// Simulate user interactions while crawling
    #[arg(long)]
    pub simulate: bool,

    /// CSS selector for elements to interact with (repeatable)
    #[arg(long = "selector", value_name = "SELECTOR")]
    pub selectors: Vec<String>,

    /// Maximum number of URLs to crawl
    #[arg(long, default_value = "100")]
    pub max_urls: usize,

    /// Capture a page snapshot for each scanned URL
    #[arg(long)]
    pub snapshot: bool,

    /// Memory budget for the crawl engine in megabytes
    #[arg(long, value_name = "MB")]
    pub memory_mbytes: Option<u64>,

    /// Let the crawl engine print its own console output
    #[arg(long = "no-silent")]
    pub no_silent: bool,

    /// File with additional URLs to include in the crawl
    #[arg(long, value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// URL already known to be part of the site (repeatable)
    #[arg(long = "existing-url", value_name = "URL")]
    pub existing_urls: Vec<String>,

    /// URL pattern that limits which discovered links are followed (repeatable)
    #[arg(long = "discovery-pattern", value_name = "PATTERN")]
    pub discovery_patterns: Vec<String>,
}

impl ScanCommand {
    /// Execute the scan command.
    pub async fn execute(&self) -> CliResult<()> {
        let args = self.to_arguments()?;

        let engine = Arc::new(LocalCrawlEngine::new());
        let generator = Arc::new(SummaryReportGenerator::new(&args.output));
        let runner = CrawlerCommandRunner::with_defaults(engine, generator);

        runner.run_command(&args).await
    }

    /// Validate inputs and build the run's immutable arguments.
    pub fn to_arguments(&self) -> CliResult<ScanArguments> {
        let parsed = Url::parse(&self.url)
            .map_err(|e| CliError::InvalidArgument(format!("invalid URL '{}': {}", self.url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CliError::InvalidArgument(format!(
                "unsupported URL scheme '{}': expected http or https",
                parsed.scheme()
            )));
        }

        Ok(ScanArguments {
            url: self.url.clone(),
            output: self.output.clone(),
            restart: self.restart,
            continue_scan: self.continue_scan,
            simulate: self.simulate,
            selectors: self.selectors.clone(),
            max_urls: self.max_urls,
            snapshot: self.snapshot,
            memory_mbytes: self.memory_mbytes,
            silent_mode: !self.no_silent,
            input_file: self.input_file.clone(),
            existing_urls: self.existing_urls.clone(),
            discovery_patterns: self.discovery_patterns.clone(),
        })
    }
}
