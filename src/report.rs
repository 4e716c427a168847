//! Plain text report renderer.
//!
//! Produces the two-section review listing: body paragraphs first, then every
//! table flattened to one line per row.

use crate::model::{Document, Row};
use std::io::{self, Write};

/// Header line for the paragraph section.
pub const PARAGRAPHS_HEADER: &str = "=== PARÁGRAFOS ===";

/// Header line for the table section.
pub const TABLES_HEADER: &str = "=== TABLAS ===";

/// Render the report for a document as a String.
///
/// Output format:
/// - `=== PARÁGRAFOS ===`, then the trimmed text of every non-blank body
///   paragraph, one per line, in document order. Whitespace-only paragraphs
///   produce no line.
/// - A blank line, then `=== TABLAS ===`.
/// - For each table, 1-based: `-- Tabla {i} --`, then one line per row with
///   the cells joined by `" | "`. Cell text is trimmed and inner newlines are
///   replaced with single spaces, so no row line ever contains a raw newline.
///   Blank cells are NOT filtered: a row keeps one segment per cell.
pub fn render_report(doc: &Document) -> String {
    let mut output = String::new();

    output.push_str(PARAGRAPHS_HEADER);
    output.push('\n');
    for para in doc.paragraphs() {
        let text = para.plain_text();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            output.push_str(trimmed);
            output.push('\n');
        }
    }

    output.push('\n');
    output.push_str(TABLES_HEADER);
    output.push('\n');
    for (i, table) in doc.tables().enumerate() {
        output.push_str(&format!("-- Tabla {} --\n", i + 1));
        for row in &table.rows {
            output.push_str(&row_line(row));
            output.push('\n');
        }
    }

    output
}

/// Write the report for a document to the given writer.
pub fn write_report<W: Write>(doc: &Document, out: &mut W) -> io::Result<()> {
    out.write_all(render_report(doc).as_bytes())
}

/// Flatten a table row to a single line: trimmed cell text with newlines
/// collapsed to spaces, joined by `" | "`.
fn row_line(row: &Row) -> String {
    row.cells
        .iter()
        .map(|cell| cell.plain_text().trim().replace('\n', " "))
        .collect::<Vec<_>>()
        .join(" | ")
}
