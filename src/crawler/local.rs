//! Built-in crawl engine backed by a local state file.
//!
//! This engine keeps the resumable-scan bookkeeping that the orchestration
//! layer depends on: a `crawl-state.json` under the output directory holding
//! the base URL, the option snapshot, and the set of URLs queued so far.
//! `restart_crawl` resets that file; otherwise prior state is loaded and
//! extended. Page fetching and link discovery are left to richer engines
//! implementing the same trait.

use crate::crawler::{CrawlEngine, CrawlOptions};
use crate::error::{ScanError, ScanResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;

/// File name of the persisted crawl state inside the output directory.
pub const STATE_FILE: &str = "crawl-state.json";

/// Persisted crawl state, one file per output directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlState {
    /// Root URL this state belongs to.
    pub base_url: String,
    /// When the state was first created.
    pub created_at: DateTime<Utc>,
    /// When the state was last written.
    pub updated_at: DateTime<Utc>,
    /// Every URL queued for this crawl so far, deduplicated and ordered.
    pub urls: BTreeSet<String>,
}

impl CrawlState {
    fn new(base_url: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            base_url: base_url.into(),
            created_at: now,
            updated_at: now,
            urls: BTreeSet::new(),
        }
    }
}

/// Crawl engine that persists queue state under the output directory.
#[derive(Debug, Default)]
pub struct LocalCrawlEngine;

impl LocalCrawlEngine {
    /// Create a new local engine.
    pub fn new() -> Self {
        Self
    }

    fn state_file(dir: &Path) -> PathBuf {
        dir.join(STATE_FILE)
    }

    fn load_state(dir: &Path) -> ScanResult<Option<CrawlState>> {
        let file = Self::state_file(dir);
        if !file.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&file)?;
        let state = serde_json::from_str(&content)
            .map_err(|e| ScanError::CorruptState(format!("{}: {}", file.display(), e)))?;
        Ok(Some(state))
    }

    fn save_state(dir: &Path, state: &CrawlState) -> ScanResult<()> {
        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(Self::state_file(dir), content)?;
        Ok(())
    }

    /// Read URLs from an input file, one per line, skipping blanks.
    fn read_input_file(path: &Path) -> ScanResult<Vec<String>> {
        let content = std::fs::read_to_string(path)?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

#[async_trait]
impl CrawlEngine for LocalCrawlEngine {
    async fn crawl(&self, options: CrawlOptions) -> ScanResult<()> {
        Url::parse(&options.base_url)
            .map_err(|e| ScanError::InvalidUrl(format!("{}: {}", options.base_url, e)))?;

        std::fs::create_dir_all(&options.local_output_dir)?;

        let mut state = if options.restart_crawl {
            debug!("restart requested, discarding prior crawl state");
            CrawlState::new(&options.base_url)
        } else {
            match Self::load_state(&options.local_output_dir)? {
                Some(prior) => {
                    debug!(urls = prior.urls.len(), "resuming prior crawl state");
                    prior
                }
                None => CrawlState::new(&options.base_url),
            }
        };

        state.urls.insert(options.base_url.clone());
        state.urls.extend(options.existing_urls.iter().cloned());
        if let Some(ref input) = options.input_file {
            state.urls.extend(Self::read_input_file(input)?);
        }

        // Respect the request budget on the queue we control.
        while state.urls.len() > options.max_requests_per_crawl {
            let last = state.urls.iter().next_back().cloned();
            match last {
                Some(url) if url != options.base_url => {
                    state.urls.remove(&url);
                }
                _ => break,
            }
        }

        state.updated_at = Utc::now();
        Self::save_state(&options.local_output_dir, &state)?;

        if !options.silent_mode {
            info!(
                url = %options.base_url,
                queued = state.urls.len(),
                "crawl state updated"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn options(dir: &Path) -> CrawlOptions {
        CrawlOptions {
            base_url: "https://example.com".to_string(),
            simulate: false,
            selectors: Vec::new(),
            local_output_dir: dir.to_path_buf(),
            max_requests_per_crawl: 100,
            restart_crawl: false,
            snapshot: false,
            memory_mbytes: None,
            silent_mode: true,
            input_file: None,
            existing_urls: Vec::new(),
            discovery_patterns: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_fresh_crawl_writes_state() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("run1");

        LocalCrawlEngine::new().crawl(options(&out)).await.unwrap();

        let state = LocalCrawlEngine::load_state(&out).unwrap().unwrap();
        assert_eq!(state.base_url, "https://example.com");
        assert!(state.urls.contains("https://example.com"));
    }

    #[tokio::test]
    async fn test_resume_extends_prior_state() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("run1");
        let engine = LocalCrawlEngine::new();

        engine.crawl(options(&out)).await.unwrap();

        let mut opts = options(&out);
        opts.existing_urls = vec!["https://example.com/contact".to_string()];
        engine.crawl(opts).await.unwrap();

        let state = LocalCrawlEngine::load_state(&out).unwrap().unwrap();
        assert!(state.urls.contains("https://example.com"));
        assert!(state.urls.contains("https://example.com/contact"));
    }

    #[tokio::test]
    async fn test_restart_discards_prior_state() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("run1");
        let engine = LocalCrawlEngine::new();

        let mut opts = options(&out);
        opts.existing_urls = vec!["https://example.com/old".to_string()];
        engine.crawl(opts).await.unwrap();

        let mut opts = options(&out);
        opts.restart_crawl = true;
        engine.crawl(opts).await.unwrap();

        let state = LocalCrawlEngine::load_state(&out).unwrap().unwrap();
        assert!(!state.urls.contains("https://example.com/old"));
        assert!(state.urls.contains("https://example.com"));
    }

    #[tokio::test]
    async fn test_input_file_urls_are_queued() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("run1");
        let input = dir.path().join("urls.txt");
        std::fs::write(&input, "https://example.com/a\n\nhttps://example.com/b\n").unwrap();

        let mut opts = options(&out);
        opts.input_file = Some(input);
        LocalCrawlEngine::new().crawl(opts).await.unwrap();

        let state = LocalCrawlEngine::load_state(&out).unwrap().unwrap();
        assert!(state.urls.contains("https://example.com/a"));
        assert!(state.urls.contains("https://example.com/b"));
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected() {
        let dir = tempdir().unwrap();
        let mut opts = options(dir.path());
        opts.base_url = "not a url".to_string();

        let err = LocalCrawlEngine::new().crawl(opts).await.unwrap_err();
        assert!(matches!(err, ScanError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_corrupt_state_is_reported() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(STATE_FILE), "{ not json").unwrap();

        let err = LocalCrawlEngine::new()
            .crawl(options(dir.path()))
            .await
            .unwrap_err();
        assert!(matches!(err, ScanError::CorruptState(_)));
    }

    #[tokio::test]
    async fn test_request_budget_caps_queue() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("run1");

        let mut opts = options(&out);
        opts.max_requests_per_crawl = 2;
        opts.existing_urls = (0..10)
            .map(|i| format!("https://example.com/page{}", i))
            .collect();
        LocalCrawlEngine::new().crawl(opts).await.unwrap();

        let state = LocalCrawlEngine::load_state(&out).unwrap().unwrap();
        assert_eq!(state.urls.len(), 2);
        assert!(state.urls.contains("https://example.com"));
    }
}
