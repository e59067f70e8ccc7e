//! Error types for a11yscan.
//!
//! Uses `thiserror` for ergonomic error definitions.

use thiserror::Error;

/// Errors raised by the crawl engine or its orchestration.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Crawl failed: {0}")]
    CrawlFailed(String),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("Crawl state is corrupt: {0}")]
    CorruptState(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while generating or persisting the consolidated report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Report generation failed: {0}")]
    GenerationFailed(String),

    #[error("Failed to write report: {0}")]
    WriteFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error type for CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for crawl operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Result type alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
