//! Per-table progress reporting for one Target.

/// Snapshot passed to observers after each table file is written.
#[derive(Debug, Clone, Copy)]
pub struct TableProgress<'a> {
    /// Tables written so far for this Target (1-based after the first write).
    pub current: usize,
    /// Number of tables found on the page.
    pub total: usize,
    /// Heading of the table just written.
    pub heading: &'a str,
}

/// Receives progress while a Target's tables are written.
pub trait ProgressObserver {
    /// Called once per Target after the page is parsed, before any table is written.
    fn start(&mut self, _url: &str, _total: usize) {}

    /// Called after each table file is written.
    fn table_written(&mut self, progress: TableProgress<'_>);

    /// Called once after the last table of the Target.
    fn finish(&mut self) {}
}

/// Observer that ignores everything (headless use and tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn table_written(&mut self, _progress: TableProgress<'_>) {}
}
