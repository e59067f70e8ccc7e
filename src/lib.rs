//! # a11yscan - A Resumable Website Accessibility Scanner
//!
//! a11yscan coordinates a single end-to-end accessibility scan of a website:
//! it decides whether a scan may proceed given prior on-disk state, drives a
//! crawl engine over the target site, and consolidates the crawl output into
//! one human-readable report at a deterministic location.
//!
//! ## Features
//!
//! - **Resumable Scans**: Prior output blocks a bare rerun; the operator picks
//!   `--continue` to resume or `--restart` to start over
//! - **Pluggable Collaborators**: Crawl engine, report generator, and report
//!   writer are trait seams injected at construction
//! - **Deterministic Reports**: One `index.html` per output directory,
//!   overwritten on rewrite rather than duplicated
//! - **Fail-Fast Pipeline**: Errors past the precondition check propagate
//!   unmodified; resumability lives entirely in the engine's on-disk state
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use a11yscan::crawler::LocalCrawlEngine;
//! use a11yscan::report::SummaryReportGenerator;
//! use a11yscan::runner::CrawlerCommandRunner;
//! use a11yscan::types::ScanArguments;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = ScanArguments::new("https://example.com", "/tmp/run1");
//!     let runner = CrawlerCommandRunner::with_defaults(
//!         Arc::new(LocalCrawlEngine::new()),
//!         Arc::new(SummaryReportGenerator::new(&args.output)),
//!     );
//!     runner.run_command(&args).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`types`] - Scan arguments and the session time window
//! - [`runner`] - Prior-state guard and lifecycle sequencing
//! - [`crawler`] - Crawl engine contract and orchestration
//! - [`report`] - Report generation and persistence contracts
//! - [`error`] - Comprehensive error types
//! - [`output`] - Operator-facing progress lines

pub mod cli;
pub mod crawler;
pub mod error;
pub mod output;
pub mod report;
pub mod runner;
pub mod types;

// Re-export commonly used types
pub use crawler::{CrawlEngine, CrawlOptions, CrawlOrchestrator, LocalCrawlEngine};
pub use error::{CliError, ReportError, ScanError};
pub use report::{DiskReportWriter, ReportGenerator, ReportWriter, SummaryReportGenerator};
pub use runner::{CrawlerCommandRunner, ScanStateGuard};
pub use types::{ScanArguments, ScanSession};
