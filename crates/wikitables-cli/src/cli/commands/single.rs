//! `wikitables --url <URL>`: one article.

use anyhow::{bail, Result};
use std::path::Path;
use wikitables_core::fetch::PageSource;
use wikitables_core::progress::ProgressObserver;
use wikitables_core::scrape::TargetReport;
use wikitables_core::target::is_valid_target;

use super::process_target;

/// Validate and process a single URL. An invalid URL is a fatal error and
/// nothing is created on disk.
pub fn run_single(
    url: &str,
    source: &dyn PageSource,
    out_root: &Path,
    progress: &mut dyn ProgressObserver,
) -> Result<Option<TargetReport>> {
    if !is_valid_target(url) {
        bail!("Invalid Wikipedia page URL '{url}'.");
    }
    process_target(url, source, out_root, progress)
}
