//! Table files on disk.
//!
//! Each table becomes `<dir>/<stem>.csv`, UTF-8, comma-delimited, one record
//! per row. An existing file with the same name is overwritten.

mod delimited;
mod sanitize;

pub use delimited::{write_record, DELIMITER, RECORD_TERMINATOR};
pub use sanitize::{sanitize_file_name, RESERVED_CHARS};

use crate::extract::ExtractedTable;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// File extension for table files.
pub const TABLE_EXTENSION: &str = "csv";

/// Path of the table file for `stem` inside `dir`.
pub fn table_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{stem}.{TABLE_EXTENSION}"))
}

/// File stem for a table: its sanitized heading. A heading that sanitizes to
/// nothing yields an empty stem, so the file is named `.csv`.
pub fn table_file_stem(table: &ExtractedTable) -> String {
    sanitize_file_name(&table.heading)
}

/// Create `dir` and its parents if missing. Idempotent.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Write all rows of `table` to `<dir>/<stem>.csv`, replacing any existing file.
pub fn write_table(dir: &Path, stem: &str, table: &ExtractedTable) -> io::Result<PathBuf> {
    let path = table_path(dir, stem);
    let mut w = BufWriter::new(File::create(&path)?);
    for row in &table.rows {
        write_record(&mut w, row)?;
    }
    w.flush()?;
    tracing::debug!(path = %path.display(), rows = table.rows.len(), "table written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(index: usize, heading: &str, rows: &[&[&str]]) -> ExtractedTable {
        ExtractedTable {
            index,
            heading: heading.to_string(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn written_file_reads_back_as_same_rows() {
        let dir = tempfile::tempdir().unwrap();
        let t = table(
            1,
            "Cities",
            &[
                &["City", "Population", "Note"],
                &["Paris", "2,148,000", "capital of \"France\""],
                &[],
                &["Zürich", "", "multi\nline"],
                &[""],
            ],
        );
        let path = write_table(dir.path(), "Cities", &t).unwrap();
        assert_eq!(path, dir.path().join("Cities.csv"));

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(delimited::parse_records(&text), t.rows);
    }

    #[test]
    fn table_without_rows_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(dir.path(), "Empty", &table(1, "Empty", &[])).unwrap();
        assert_eq!(fs::read(&path).unwrap().len(), 0);
    }

    #[test]
    fn same_stem_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        write_table(dir.path(), "Results", &table(1, "Results", &[&["old"], &["rows"]])).unwrap();
        let path = write_table(dir.path(), "Results", &table(2, "Results", &[&["new"]])).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "new\r\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn file_stem_is_sanitized_heading() {
        assert_eq!(
            table_file_stem(&table(1, "Population by Year", &[])),
            "Population by Year"
        );
        assert_eq!(table_file_stem(&table(4, " Votes: 2020. ", &[])), "Votes 2020");
        assert_eq!(table_file_stem(&table(3, "Table 3", &[])), "Table 3");
        assert_eq!(table_file_stem(&table(7, " ?? ", &[])), "");
    }

    #[test]
    fn empty_stem_writes_bare_extension() {
        let dir = tempfile::tempdir().unwrap();
        let t = table(2, "???", &[&["x"]]);
        let path = write_table(dir.path(), &table_file_stem(&t), &t).unwrap();
        assert_eq!(path, dir.path().join(".csv"));
        assert_eq!(fs::read_to_string(path).unwrap(), "x\r\n");
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("a").join("wiki-Foo");
        ensure_dir(&dir).unwrap();
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }
}
