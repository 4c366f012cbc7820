//! `wikitables --file <PATH>`: one URL per line, processed in order.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;
use wikitables_core::fetch::PageSource;
use wikitables_core::progress::ProgressObserver;
use wikitables_core::target::is_valid_target;

use super::process_target;

/// What happened to the lines of a batch file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Targets whose tables were written.
    pub processed: usize,
    /// Valid Targets whose fetch failed.
    pub failed: usize,
    /// Lines rejected by validation, in file order.
    pub invalid: Vec<String>,
}

/// Read `path` and process every line as a Target.
///
/// Each line is validated exactly as written, without its line terminator;
/// blank and whitespace-padded lines are rejected. Invalid lines are reported
/// and skipped without pausing; after each valid Target the run sleeps for
/// `pause`.
pub fn run_batch(
    path: &Path,
    source: &dyn PageSource,
    out_root: &Path,
    pause: Duration,
    progress: &mut dyn ProgressObserver,
) -> Result<BatchSummary> {
    run_batch_with(path, source, out_root, pause, progress, &mut |d| {
        if !d.is_zero() {
            thread::sleep(d);
        }
    })
}

/// [`run_batch`] with the pause delegated to `sleep`.
pub fn run_batch_with(
    path: &Path,
    source: &dyn PageSource,
    out_root: &Path,
    pause: Duration,
    progress: &mut dyn ProgressObserver,
    sleep: &mut dyn FnMut(Duration),
) -> Result<BatchSummary> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read the URL file '{}'", path.display()))?;

    let mut summary = BatchSummary::default();
    for url in text.lines() {
        if !is_valid_target(url) {
            println!("Error: Invalid Wikipedia page URL '{url}'");
            summary.invalid.push(url.to_string());
            continue;
        }

        match process_target(url, source, out_root, progress)? {
            Some(_) => summary.processed += 1,
            None => summary.failed += 1,
        }
        sleep(pause);
        println!();
    }

    Ok(summary)
}
