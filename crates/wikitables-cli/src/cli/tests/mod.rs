//! CLI tests: argument parsing and the single/batch drivers.

use super::{args, Cli};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args::normalize_args(args.iter().copied())).unwrap()
}
