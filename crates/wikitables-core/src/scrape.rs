//! Single-Target pipeline: fetch → extract → write one file per table.

use crate::extract::{extract_tables, ExtractedTable};
use crate::fetch::{FetchError, PageSource};
use crate::output;
use crate::progress::{ProgressObserver, TableProgress};
use crate::target::output_dir_name;
use std::path::{Path, PathBuf};

/// Why a Target could not be processed.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// The page could not be retrieved. Reported; the run continues.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Local filesystem failure. Fatal for the whole run.
    #[error("failed to write '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of a successfully processed Target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
    pub url: String,
    /// Directory holding this Target's table files.
    pub dir: PathBuf,
    /// Paths written, in table order (same-named tables appear once per write).
    pub files: Vec<PathBuf>,
}

impl TargetReport {
    pub fn table_count(&self) -> usize {
        self.files.len()
    }
}

/// Process one Target: create its output directory under `out_root`, fetch
/// the page, and write every table to its own file.
///
/// The directory is created before the fetch, so a failed fetch leaves it
/// behind (empty unless an earlier run wrote to it).
pub fn scrape_target(
    url: &str,
    source: &dyn PageSource,
    out_root: &Path,
    progress: &mut dyn ProgressObserver,
) -> Result<TargetReport, ScrapeError> {
    let dir = out_root.join(output_dir_name(url));
    output::ensure_dir(&dir).map_err(|source| ScrapeError::Io {
        path: dir.clone(),
        source,
    })?;

    let html = source.fetch(url)?;
    let tables = extract_tables(&html);
    tracing::info!(url, tables = tables.len(), dir = %dir.display(), "page parsed");

    let files = write_tables(&dir, url, &tables, progress)?;
    Ok(TargetReport {
        url: url.to_string(),
        dir,
        files,
    })
}

fn write_tables(
    dir: &Path,
    url: &str,
    tables: &[ExtractedTable],
    progress: &mut dyn ProgressObserver,
) -> Result<Vec<PathBuf>, ScrapeError> {
    let total = tables.len();
    progress.start(url, total);

    let mut files = Vec::with_capacity(total);
    for (i, table) in tables.iter().enumerate() {
        let stem = output::table_file_stem(table);
        let path = output::write_table(dir, &stem, table).map_err(|source| ScrapeError::Io {
            path: output::table_path(dir, &stem),
            source,
        })?;
        files.push(path);
        progress.table_written(TableProgress {
            current: i + 1,
            total,
            heading: &table.heading,
        });
    }

    progress.finish();
    Ok(files)
}
