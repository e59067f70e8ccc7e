//! Scan lifecycle sequencing.
//!
//! [`ScanStateGuard`] decides whether a run may proceed given prior on-disk
//! output; [`CrawlerCommandRunner`] composes guard, crawl orchestration, and
//! report consolidation into the full lifecycle.

pub mod command;
pub mod guard;

pub use command::CrawlerCommandRunner;
pub use guard::{DirectoryProbe, FsProbe, ScanStateGuard};
