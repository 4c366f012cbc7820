pub mod config;
pub mod logging;

pub mod extract;
pub mod fetch;
pub mod output;
pub mod progress;
pub mod scrape;
pub mod target;
