//! Comma-separated record encoding with minimal quoting.

use std::io::{self, Write};

pub const DELIMITER: char = ',';
pub const QUOTE: char = '"';
pub const RECORD_TERMINATOR: &str = "\r\n";

fn needs_quotes(field: &str) -> bool {
    field.contains(DELIMITER) || field.contains(QUOTE) || field.contains('\n') || field.contains('\r')
}

/// Write one record. Fields with a delimiter, quote or line break are quoted
/// and embedded quotes are doubled.
///
/// A record made of a single empty field is written as `""` so it reads back
/// differently from an empty record.
pub fn write_record<W: Write>(mut w: W, record: &[String]) -> io::Result<()> {
    if let [only] = record {
        if only.is_empty() {
            write!(w, "{QUOTE}{QUOTE}")?;
            return w.write_all(RECORD_TERMINATOR.as_bytes());
        }
    }

    let mut first = true;
    for field in record {
        if !first {
            write!(w, "{DELIMITER}")?;
        } else {
            first = false;
        }
        if needs_quotes(field) {
            let escaped = field.replace(QUOTE, "\"\"");
            write!(w, "{QUOTE}{escaped}{QUOTE}")?;
        } else {
            w.write_all(field.as_bytes())?;
        }
    }
    w.write_all(RECORD_TERMINATOR.as_bytes())
}

/// Minimal reader for files produced by [`write_record`]. Test-only.
#[cfg(test)]
pub(crate) fn parse_records(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => {
                in_quotes = true;
                quoted = true;
            }
            ',' if !in_quotes => {
                record.push(std::mem::take(&mut field));
                quoted = false;
            }
            '\r' | '\n' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                if !field.is_empty() || quoted || !record.is_empty() {
                    record.push(std::mem::take(&mut field));
                }
                records.push(std::mem::take(&mut record));
                quoted = false;
            }
            _ => field.push(ch),
        }
    }
    if !field.is_empty() || quoted || !record.is_empty() {
        record.push(field);
        records.push(record);
    }
    records
}
