//! Report generation and persistence contracts.
//!
//! Two seams: [`ReportGenerator`] turns a scan session's URL and time window
//! into consolidated report content, and [`ReportWriter`] persists content to
//! a named file under an output directory. Both are consumed through traits so
//! the runner can be exercised without a renderer or a disk.

pub mod disk_writer;
pub mod summary;

use crate::error::ReportResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use disk_writer::DiskReportWriter;
pub use summary::SummaryReportGenerator;

/// Produces consolidated report content for one scan window.
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    /// Generate report content covering `url` between `scan_started` and
    /// `scan_ended`.
    async fn generate_report(
        &self,
        url: &str,
        scan_started: DateTime<Utc>,
        scan_ended: DateTime<Utc>,
    ) -> ReportResult<String>;
}

/// Persists report content under an output directory.
#[async_trait]
pub trait ReportWriter: Send + Sync {
    /// Write `content` as `<dir>/<base_name>.<extension>`, returning the
    /// resolved path. Writing twice with the same inputs overwrites.
    async fn write_to_directory(
        &self,
        dir: &Path,
        base_name: &str,
        extension: &str,
        content: &str,
    ) -> ReportResult<PathBuf>;
}

/// Shared trait objects for constructor injection.
pub type SharedReportGenerator = Arc<dyn ReportGenerator>;
/// Shared writer handle.
pub type SharedReportWriter = Arc<dyn ReportWriter>;
