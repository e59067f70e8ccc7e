//! Core type definitions for scan runs.
//!
//! [`ScanArguments`] carries everything the caller decided about a run and is
//! read-only once the run starts. [`ScanSession`] is the wall-clock window a
//! crawl actually covered, produced by the orchestrator and consumed by the
//! report generator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Caller-supplied arguments for a single scan run.
///
/// Exactly one of three things is being requested: a fresh run (output
/// directory absent), a resumed run (`continue_scan`), or a restart
/// (`restart`). Everything else passes through to the crawl engine untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanArguments {
    /// Root URL of the site to scan.
    pub url: String,
    /// Directory that receives crawl artifacts and the final report.
    pub output: PathBuf,
    /// Discard prior on-disk scan state and start over.
    pub restart: bool,
    /// Resume the prior scan instead of starting over.
    pub continue_scan: bool,
    /// Simulate user interactions while crawling.
    pub simulate: bool,
    /// CSS selectors for elements to interact with during simulation.
    pub selectors: Vec<String>,
    /// Maximum number of URLs the crawl may request.
    pub max_urls: usize,
    /// Capture a page snapshot for each scanned URL.
    pub snapshot: bool,
    /// Memory budget for the crawl engine, in megabytes.
    pub memory_mbytes: Option<u64>,
    /// Suppress the crawl engine's own console output.
    pub silent_mode: bool,
    /// File with additional URLs to include in the crawl.
    pub input_file: Option<PathBuf>,
    /// URLs already known to the caller, seeded into the crawl queue.
    pub existing_urls: Vec<String>,
    /// URL patterns that limit which discovered links are followed.
    pub discovery_patterns: Vec<String>,
}

impl ScanArguments {
    /// Create arguments for a plain fresh run with defaults for all tuning.
    pub fn new(url: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            output: output.into(),
            restart: false,
            continue_scan: false,
            simulate: false,
            selectors: Vec::new(),
            max_urls: 100,
            snapshot: false,
            memory_mbytes: None,
            silent_mode: true,
            input_file: None,
            existing_urls: Vec::new(),
            discovery_patterns: Vec::new(),
        }
    }

    /// Request that prior on-disk state be discarded.
    pub fn with_restart(mut self) -> Self {
        self.restart = true;
        self
    }

    /// Request that the prior scan be resumed.
    pub fn with_continue(mut self) -> Self {
        self.continue_scan = true;
        self
    }
}

/// The wall-clock window one crawl actually ran in.
///
/// `started_at` is captured strictly before the crawl engine is invoked and
/// `ended_at` strictly after it returns, so the pair bounds every artifact the
/// crawl produced. Purely ephemeral; crawl progress persistence belongs to the
/// engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSession {
    /// Root URL the crawl covered.
    pub url: String,
    /// When the crawl was invoked.
    pub started_at: DateTime<Utc>,
    /// When the crawl returned.
    pub ended_at: DateTime<Utc>,
}

impl ScanSession {
    /// Duration of the crawl in whole seconds.
    pub fn duration_secs(&self) -> i64 {
        (self.ended_at - self.started_at).num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_arguments_defaults() {
        let args = ScanArguments::new("https://example.com", "/tmp/out");
        assert!(!args.restart);
        assert!(!args.continue_scan);
        assert_eq!(args.max_urls, 100);
        assert!(args.selectors.is_empty());
    }

    #[test]
    fn test_arguments_builders() {
        let args = ScanArguments::new("https://example.com", "/tmp/out").with_restart();
        assert!(args.restart);
        assert!(!args.continue_scan);

        let args = ScanArguments::new("https://example.com", "/tmp/out").with_continue();
        assert!(args.continue_scan);
    }

    #[test]
    fn test_session_duration() {
        let started_at = Utc::now();
        let session = ScanSession {
            url: "https://example.com".to_string(),
            started_at,
            ended_at: started_at + Duration::seconds(42),
        };
        assert_eq!(session.duration_secs(), 42);
    }

    #[test]
    fn test_arguments_serialization() {
        let args = ScanArguments::new("https://example.com", "/tmp/out");
        let json = serde_json::to_string(&args).unwrap();
        let parsed: ScanArguments = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.url, args.url);
        assert_eq!(parsed.output, args.output);
    }
}
