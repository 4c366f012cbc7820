//! CLI for wikitables.

mod args;
mod commands;
mod progress;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use wikitables_core::config::{self, ConfigOverrides, ScrapeConfig};
use wikitables_core::fetch::HttpFetcher;
use wikitables_core::logging;
use wikitables_core::progress::{NoProgress, ProgressObserver};

use commands::{run_batch, run_single};
use progress::ConsoleProgress;

/// Export every table on an English Wikipedia article to CSV files.
#[derive(Debug, Parser)]
#[command(name = "wikitables")]
#[command(version)]
#[command(about = "Scrape Wikipedia tables into one CSV file per table", long_about = None)]
pub struct Cli {
    /// URL of the Wikipedia page.
    #[arg(long)]
    pub url: Option<String>,

    /// Path to a file containing multiple URLs (one per line). Takes precedence over --url.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Timeout for the HTTP request, in seconds [default: 15].
    #[arg(
        long,
        short = 'T',
        value_name = "SECONDS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,

    /// User-Agent header value (also accepted as -UA).
    #[arg(long = "user_agent", visible_alias = "user-agent", value_name = "STRING")]
    pub user_agent: Option<String>,

    /// Directory under which per-article folders are created [default: current directory].
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Pause between URLs in --file mode, in milliseconds [default: 1000].
    #[arg(long, value_name = "MILLIS")]
    pub pause_ms: Option<u64>,

    /// TOML file with defaults for timeout_secs, user_agent, pause_ms and out_dir.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Diagnostic log filter written to stderr (e.g. "info", "wikitables_core=debug").
    #[arg(long, value_name = "FILTER", default_value = logging::DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Do not draw progress bars.
    #[arg(long, short)]
    pub quiet: bool,
}

/// Which Targets this run processes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Single(String),
    Batch(PathBuf),
}

impl Cli {
    /// `--file` wins when both inputs are given.
    pub fn input_mode(&self) -> Option<InputMode> {
        match (&self.file, &self.url) {
            (Some(path), _) => Some(InputMode::Batch(path.clone())),
            (None, Some(url)) => Some(InputMode::Single(url.clone())),
            (None, None) => None,
        }
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            timeout_secs: self.timeout,
            user_agent: self.user_agent.clone(),
            pause_ms: self.pause_ms,
            out_dir: self.out_dir.clone(),
        }
    }

    /// Defaults, then the `--config` file, then command-line flags.
    pub fn resolve_config(&self) -> Result<ScrapeConfig> {
        let base = match &self.config {
            Some(path) => config::load_from_path(path)?,
            None => ScrapeConfig::default(),
        };
        Ok(base.with_overrides(self.overrides()))
    }
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse_from(args::normalize_args(std::env::args_os()));
    logging::init_logging(&cli.log_level)?;

    let cfg = cli.resolve_config()?;
    tracing::debug!("resolved config: {:?}", cfg);

    let Some(mode) = cli.input_mode() else {
        bail!("Please provide either --url or --file argument.");
    };

    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let out_root = cfg.out_root(&cwd);
    let fetcher = HttpFetcher::new(cfg.timeout(), cfg.user_agent.clone());

    let mut console;
    let mut silent = NoProgress;
    let progress: &mut dyn ProgressObserver = if cli.quiet {
        &mut silent
    } else {
        console = ConsoleProgress::new();
        &mut console
    };

    match mode {
        InputMode::Single(url) => {
            run_single(&url, &fetcher, &out_root, progress)?;
        }
        InputMode::Batch(path) => {
            let summary = run_batch(&path, &fetcher, &out_root, cfg.pause(), progress)?;
            tracing::info!(
                processed = summary.processed,
                failed = summary.failed,
                invalid = summary.invalid.len(),
                "batch finished"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
