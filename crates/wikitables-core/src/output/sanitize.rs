//! Heading → file name sanitization.

/// Characters that are reserved in file names on at least one common platform.
pub const RESERVED_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Sanitizes a table heading for use as a file name stem.
///
/// - Removes every `< > : " / \ | ? *`
/// - Trims leading/trailing whitespace and dots
///
/// No length limit, case folding or collision handling is applied. The
/// result may be empty.
pub fn sanitize_file_name(heading: &str) -> String {
    let stripped: String = heading
        .chars()
        .filter(|c| !RESERVED_CHARS.contains(c))
        .collect();
    stripped
        .trim_matches(|c: char| c.is_whitespace() || c == '.')
        .to_string()
}
