//! Wikipedia article URL shape check.

use regex::Regex;
use std::sync::LazyLock;

static ARTICLE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://en\.wikipedia\.org/wiki/[\w()]+").expect("article URL pattern is valid")
});

/// Returns true if `url` starts with an English Wikipedia article URL.
///
/// Only the prefix is checked: anything after the first run of word
/// characters or parentheses (fragments, query strings, further path
/// segments) is accepted as-is.
pub fn is_valid_target(url: &str) -> bool {
    ARTICLE_URL.is_match(url)
}
