//! Console progress bar, one per Target.

use indicatif::{ProgressBar, ProgressStyle};
use wikitables_core::progress::{ProgressObserver, TableProgress};

const TEMPLATE: &str = "{prefix} [{bar:40.cyan/blue}] {pos}/{len} {msg}";

#[derive(Default)]
pub struct ConsoleProgress {
    bar: Option<ProgressBar>,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressObserver for ConsoleProgress {
    fn start(&mut self, url: &str, total: usize) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        bar.set_prefix(format!("Scraping Tables for '{url}'"));
        self.bar = Some(bar);
    }

    fn table_written(&mut self, progress: TableProgress<'_>) {
        if let Some(bar) = &self.bar {
            bar.set_position(progress.current as u64);
            bar.set_message(format!("Table: {}", progress.heading.trim()));
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}
