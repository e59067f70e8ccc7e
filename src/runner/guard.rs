//! Prior-scan-state guard.

use crate::types::ScanArguments;
use std::path::Path;
use std::sync::Arc;

/// Existence test for a directory path.
///
/// The filesystem hides behind this seam so the guard can be exercised
/// without real disk state.
pub trait DirectoryProbe: Send + Sync {
    /// True if `path` exists on disk.
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Default)]
pub struct FsProbe;

impl DirectoryProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Decides whether a new scan run may start.
///
/// The only state signal is whether the output directory exists; contents are
/// never inspected, so a directory created for unrelated reasons also blocks a
/// bare run. That coarseness is intended: ambiguous prior state always forces
/// an explicit `--continue` or `--restart` decision from the operator.
pub struct ScanStateGuard {
    probe: Arc<dyn DirectoryProbe>,
}

impl ScanStateGuard {
    /// Create a guard using the given probe.
    pub fn new(probe: Arc<dyn DirectoryProbe>) -> Self {
        Self { probe }
    }

    /// Create a guard over the real filesystem.
    pub fn with_fs() -> Self {
        Self::new(Arc::new(FsProbe))
    }

    /// True if the run may proceed. Pure predicate, no side effects.
    pub fn can_proceed(&self, args: &ScanArguments) -> bool {
        !self.probe.exists(&args.output) || args.restart || args.continue_scan
    }
}
