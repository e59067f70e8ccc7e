//! Consolidated HTML summary generator.
//!
//! Renders a small self-contained page over the crawl's on-disk state: the
//! scanned URL, the session window, and how many URLs the crawl queued.
//! Rule-level findings belong to richer generators behind the same trait.

use crate::crawler::local::{CrawlState, STATE_FILE};
use crate::error::{ReportError, ReportResult};
use crate::report::ReportGenerator;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Generates the consolidated summary report from local crawl state.
#[derive(Debug)]
pub struct SummaryReportGenerator {
    output_dir: PathBuf,
}

impl SummaryReportGenerator {
    /// Create a generator reading crawl state under `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn load_state(&self) -> ReportResult<Option<CrawlState>> {
        let file = self.output_dir.join(STATE_FILE);
        if !file.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&file)?;
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| ReportError::GenerationFailed(format!("{}: {}", file.display(), e)))
    }
}

#[async_trait]
impl ReportGenerator for SummaryReportGenerator {
    async fn generate_report(
        &self,
        url: &str,
        scan_started: DateTime<Utc>,
        scan_ended: DateTime<Utc>,
    ) -> ReportResult<String> {
        let queued = self.load_state()?.map_or(0, |state| state.urls.len());
        let duration = (scan_ended - scan_started).num_seconds();

        Ok(format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head><meta charset=\"utf-8\"><title>Accessibility scan summary</title></head>\n\
             <body>\n\
             <h1>Accessibility scan summary</h1>\n\
             <ul>\n\
             <li>Target: {url}</li>\n\
             <li>Scan started: {started}</li>\n\
             <li>Scan ended: {ended}</li>\n\
             <li>Duration: {duration}s</li>\n\
             <li>URLs queued: {queued}</li>\n\
             </ul>\n\
             </body>\n\
             </html>\n",
            url = url,
            started = scan_started.to_rfc3339(),
            ended = scan_ended.to_rfc3339(),
            duration = duration,
            queued = queued,
        ))
    }
}
