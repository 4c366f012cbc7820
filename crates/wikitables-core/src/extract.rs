//! Table extraction from page markup.
//!
//! The document is parsed with `scraper` (html5ever), so malformed markup is
//! repaired the way a browser would: implicit `<tbody>` elements are inserted
//! and unclosed cells are closed. Every `<table>` is returned in document
//! order, nested ones included, each as its own entry.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table"));
static CAPTION: LazyLock<Selector> = LazyLock::new(|| selector("caption"));
static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

/// One `<table>` from the page: its heading and its rows of cell text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTable {
    /// 1-based position among all tables on the page.
    pub index: usize,
    /// Caption text, or `"Table {index}"` when the table has no caption.
    pub heading: String,
    pub rows: Vec<Vec<String>>,
}

impl ExtractedTable {
    /// Fallback label for the table at 1-based `index`.
    pub fn positional_label(index: usize) -> String {
        format!("Table {index}")
    }
}

/// Parse `html` and extract every table in document order.
pub fn extract_tables(html: &str) -> Vec<ExtractedTable> {
    let document = Html::parse_document(html);
    let tables: Vec<ExtractedTable> = document
        .select(&TABLE)
        .enumerate()
        .map(|(i, table)| extract_table(i + 1, table))
        .collect();
    tracing::debug!(count = tables.len(), "tables extracted");
    tables
}

fn extract_table(index: usize, table: ElementRef<'_>) -> ExtractedTable {
    let caption = table.select(&CAPTION).next().map(text_of);
    let rows = table.select(&ROW).map(row_cells).collect();

    ExtractedTable {
        index,
        heading: caption.unwrap_or_else(|| ExtractedTable::positional_label(index)),
        rows,
    }
}

/// Trimmed text of each `<th>`/`<td>` that is a direct child of `row`.
fn row_cells(row: ElementRef<'_>) -> Vec<String> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "th" | "td"))
        .map(|cell| text_of(cell).trim().to_string())
        .collect()
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}
