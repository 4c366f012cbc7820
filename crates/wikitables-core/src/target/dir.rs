//! Output directory name derivation from a Target's URL path.

/// Directory name used when the URL has an empty path.
pub const ROOT_DIR_NAME: &str = "root";

/// Derives the per-Target directory name from the URL path: leading and
/// trailing slashes stripped, inner slashes replaced with `-`.
///
/// The path is taken verbatim from the input: no percent-encoding or
/// decoding, no dot-segment resolution. Query, fragment and `;params` on the
/// last segment are dropped.
///
/// # Examples
///
/// - `https://en.wikipedia.org/wiki/Foo` → `"wiki-Foo"`
/// - `https://en.wikipedia.org/` → `"root"`
pub fn output_dir_name(url: &str) -> String {
    let name = raw_path(url).trim_matches('/').replace('/', "-");
    if name.is_empty() {
        ROOT_DIR_NAME.to_string()
    } else {
        name
    }
}

/// Path component of `url` as written.
fn raw_path(url: &str) -> &str {
    let rest = match url.find("://") {
        Some(i) => {
            let after_scheme = &url[i + 3..];
            match after_scheme.find(|c| matches!(c, '/' | '?' | '#')) {
                Some(j) => &after_scheme[j..],
                None => "",
            }
        }
        None => url,
    };
    let path = match rest.find(|c| matches!(c, '?' | '#')) {
        Some(end) => &rest[..end],
        None => rest,
    };
    let last_segment = path.rfind('/').unwrap_or(0);
    match path[last_segment..].find(';') {
        Some(k) => &path[..last_segment + k],
        None => path,
    }
}
