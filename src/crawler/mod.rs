//! Crawl engine contract and orchestration.
//!
//! The engine itself is opaque to this crate: it receives a [`CrawlOptions`]
//! assembled 1:1 from the caller's [`ScanArguments`], walks the site, and
//! leaves its artifacts under the output directory. [`CrawlOrchestrator`]
//! owns exactly one piece of state, the wall-clock window the crawl ran in.

pub mod local;

use crate::error::ScanResult;
use crate::types::{ScanArguments, ScanSession};
use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

pub use local::LocalCrawlEngine;

/// Configuration handed to the crawl engine for one run.
///
/// Field-for-field mirror of the engine's consumed contract; the orchestrator
/// never interprets these values, it only forwards them.
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Root URL the crawl starts from.
    pub base_url: String,
    /// Simulate user interactions on each page.
    pub simulate: bool,
    /// CSS selectors for simulated interactions.
    pub selectors: Vec<String>,
    /// Directory the engine writes its artifacts under.
    pub local_output_dir: PathBuf,
    /// Upper bound on requests issued by the crawl.
    pub max_requests_per_crawl: usize,
    /// Discard prior crawl state before starting.
    pub restart_crawl: bool,
    /// Capture a page snapshot per scanned URL.
    pub snapshot: bool,
    /// Memory budget in megabytes, engine default when absent.
    pub memory_mbytes: Option<u64>,
    /// Suppress the engine's own console output.
    pub silent_mode: bool,
    /// File with additional URLs to crawl.
    pub input_file: Option<PathBuf>,
    /// URLs seeded into the crawl queue up front.
    pub existing_urls: Vec<String>,
    /// Patterns limiting which discovered links are followed.
    pub discovery_patterns: Vec<String>,
}

impl CrawlOptions {
    /// Assemble engine options from scan arguments, field for field.
    pub fn from_args(args: &ScanArguments) -> Self {
        Self {
            base_url: args.url.clone(),
            simulate: args.simulate,
            selectors: args.selectors.clone(),
            local_output_dir: args.output.clone(),
            max_requests_per_crawl: args.max_urls,
            restart_crawl: args.restart,
            snapshot: args.snapshot,
            memory_mbytes: args.memory_mbytes,
            silent_mode: args.silent_mode,
            input_file: args.input_file.clone(),
            existing_urls: args.existing_urls.clone(),
            discovery_patterns: args.discovery_patterns.clone(),
        }
    }
}

/// Trait for crawl engine implementations.
///
/// Implementations may be internally concurrent; from the caller's point of
/// view `crawl` suspends until the whole crawl is finished. Errors propagate
/// unmodified, and any resumability lives in the engine's own on-disk state.
#[async_trait]
pub trait CrawlEngine: Send + Sync {
    /// Run one crawl to completion.
    async fn crawl(&self, options: CrawlOptions) -> ScanResult<()>;
}

/// A shared crawl engine handle for dynamic dispatch.
pub type SharedCrawlEngine = Arc<dyn CrawlEngine>;

/// Drives one crawl and records its time window.
///
/// Precondition sequencing (the prior-state guard) is the caller's job; the
/// orchestrator assumes it may run. It performs no retry and no cleanup on
/// failure.
pub struct CrawlOrchestrator {
    engine: SharedCrawlEngine,
}

impl CrawlOrchestrator {
    /// Create an orchestrator over the given engine.
    pub fn new(engine: SharedCrawlEngine) -> Self {
        Self { engine }
    }

    /// Run the crawl described by `args`, returning the session window.
    ///
    /// `started_at` is captured strictly before the engine call and `ended_at`
    /// strictly after it returns.
    pub async fn run(&self, args: &ScanArguments) -> ScanResult<ScanSession> {
        let options = CrawlOptions::from_args(args);
        debug!(url = %options.base_url, output = %options.local_output_dir.display(), "starting crawl");

        let started_at = Utc::now();
        self.engine.crawl(options).await?;
        let ended_at = Utc::now();

        debug!(secs = (ended_at - started_at).num_seconds(), "crawl finished");
        Ok(ScanSession {
            url: args.url.clone(),
            started_at,
            ended_at,
        })
    }
}
