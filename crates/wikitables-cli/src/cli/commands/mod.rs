//! Drivers for the two input modes.

mod batch;
mod single;

pub use batch::{run_batch, run_batch_with};
pub use single::run_single;

use anyhow::Result;
use std::path::Path;
use wikitables_core::fetch::PageSource;
use wikitables_core::progress::ProgressObserver;
use wikitables_core::scrape::{scrape_target, ScrapeError, TargetReport};

/// Run one already-validated Target and print its outcome.
///
/// Fetch failures are printed and returned as `Ok(None)`; filesystem errors
/// abort the run.
pub(crate) fn process_target(
    url: &str,
    source: &dyn PageSource,
    out_root: &Path,
    progress: &mut dyn ProgressObserver,
) -> Result<Option<TargetReport>> {
    match scrape_target(url, source, out_root, progress) {
        Ok(report) => {
            println!(
                "\nScraping completed for '{}'. {} table(s) extracted.",
                report.url,
                report.table_count()
            );
            Ok(Some(report))
        }
        Err(ScrapeError::Fetch(e)) => {
            tracing::warn!(url, "fetch failed: {}", e);
            println!("Error: {e}");
            Ok(None)
        }
        Err(e @ ScrapeError::Io { .. }) => Err(e.into()),
    }
}
