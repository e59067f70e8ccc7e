//! Disk-backed report writer.

use crate::error::{ReportError, ReportResult};
use crate::report::ReportWriter;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes report files under an output directory.
///
/// The target path is a pure function of `(dir, base_name, extension)`, so
/// repeated writes for the same run land on the same file and overwrite it.
#[derive(Debug, Default)]
pub struct DiskReportWriter;

impl DiskReportWriter {
    /// Create a new disk writer.
    pub fn new() -> Self {
        Self
    }

    /// Compose the deterministic report path for the given inputs.
    pub fn report_path(dir: &Path, base_name: &str, extension: &str) -> PathBuf {
        dir.join(format!("{}.{}", base_name, extension))
    }
}

#[async_trait]
impl ReportWriter for DiskReportWriter {
    async fn write_to_directory(
        &self,
        dir: &Path,
        base_name: &str,
        extension: &str,
        content: &str,
    ) -> ReportResult<PathBuf> {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| ReportError::WriteFailed(format!("{}: {}", dir.display(), e)))?;

        let path = Self::report_path(dir, base_name, extension);
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| ReportError::WriteFailed(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), bytes = content.len(), "report written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_report_path_is_deterministic() {
        let path = DiskReportWriter::report_path(Path::new("/tmp/run1"), "index", "html");
        assert_eq!(path, PathBuf::from("/tmp/run1/index.html"));
    }

    #[tokio::test]
    async fn test_write_creates_directory_and_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("run1");

        let path = DiskReportWriter::new()
            .write_to_directory(&out, "index", "html", "<html></html>")
            .await
            .unwrap();

        assert_eq!(path, out.join("index.html"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[tokio::test]
    async fn test_second_write_overwrites() {
        let dir = tempdir().unwrap();
        let writer = DiskReportWriter::new();

        let first = writer
            .write_to_directory(dir.path(), "index", "html", "first")
            .await
            .unwrap();
        let second = writer
            .write_to_directory(dir.path(), "index", "html", "second")
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(std::fs::read_to_string(&second).unwrap(), "second");
    }
}
