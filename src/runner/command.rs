//! Full scan lifecycle: guard, crawl, consolidate, write.

use crate::crawler::{CrawlOrchestrator, SharedCrawlEngine};
use crate::error::CliResult;
use crate::output;
use crate::report::{DiskReportWriter, SharedReportGenerator, SharedReportWriter};
use crate::runner::guard::ScanStateGuard;
use crate::types::ScanArguments;
use std::sync::Arc;
use tracing::info;

/// Base file name of the consolidated report.
pub const REPORT_BASE_NAME: &str = "index";
/// File extension of the consolidated report.
pub const REPORT_EXTENSION: &str = "html";

/// Runs one scan end to end.
///
/// Strictly sequential: the guard is evaluated once, then crawl, report
/// generation, and the disk write each complete before the next begins. A
/// rejected run terminates after a guidance line and is not an error; every
/// failure past the guard propagates unmodified to the caller.
pub struct CrawlerCommandRunner {
    guard: ScanStateGuard,
    orchestrator: CrawlOrchestrator,
    generator: SharedReportGenerator,
    writer: SharedReportWriter,
}

impl CrawlerCommandRunner {
    /// Compose a runner from its collaborators.
    pub fn new(
        guard: ScanStateGuard,
        engine: SharedCrawlEngine,
        generator: SharedReportGenerator,
        writer: SharedReportWriter,
    ) -> Self {
        Self {
            guard,
            orchestrator: CrawlOrchestrator::new(engine),
            generator,
            writer,
        }
    }

    /// Compose a runner with the real filesystem guard and the disk writer.
    pub fn with_defaults(engine: SharedCrawlEngine, generator: SharedReportGenerator) -> Self {
        Self::new(
            ScanStateGuard::with_fs(),
            engine,
            generator,
            Arc::new(DiskReportWriter::new()),
        )
    }

    /// Run the full scan lifecycle for `args`.
    pub async fn run_command(&self, args: &ScanArguments) -> CliResult<()> {
        if !self.guard.can_proceed(args) {
            output::print_resume_guidance();
            return Ok(());
        }

        output::print_info(&format!(
            "Starting scanning the website under the URL {}",
            args.url
        ));
        let session = self.orchestrator.run(args).await?;

        output::print_info("Generating summary scan report...");
        let content = self
            .generator
            .generate_report(&args.url, session.started_at, session.ended_at)
            .await?;
        let location = self
            .writer
            .write_to_directory(&args.output, REPORT_BASE_NAME, REPORT_EXTENSION, &content)
            .await?;

        info!(location = %location.display(), "scan complete");
        output::print_success(&format!(
            "Summary report was saved as {}",
            location.display()
        ));
        Ok(())
    }
}
