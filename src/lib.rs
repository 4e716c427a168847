//! # rubrica
//!
//! Extract paragraphs and tables from DOCX rubric documents for review.
//!
//! This library parses a Word (.docx) document into a read-only model of
//! body paragraphs and tables, and renders a plain text report listing the
//! non-blank paragraphs followed by every table flattened to one line per
//! row.
//!
//! ## Quick Start
//!
//! ```no_run
//! use rubrica::{parse_file, render_report};
//!
//! let doc = parse_file("RÚBRICA DE EVALUACIÓN_dashboard.docx")?;
//! println!("{}", render_report(&doc));
//! # Ok::<(), rubrica::Error>(())
//! ```
//!
//! ## Model access
//!
//! ```no_run
//! let doc = rubrica::parse_file("document.docx")?;
//! for para in doc.paragraphs() {
//!     println!("{}", para.plain_text());
//! }
//! println!("tables: {}", doc.tables().count());
//! # Ok::<(), rubrica::Error>(())
//! ```

pub mod container;
pub mod docx;
pub mod error;
pub mod model;
pub mod report;

// Re-exports
pub use container::DocxContainer;
pub use docx::DocxParser;
pub use error::{Error, Result};
pub use model::{Block, Cell, Document, Paragraph, Row, Table, TextRun};
pub use report::{render_report, write_report, PARAGRAPHS_HEADER, TABLES_HEADER};

use std::path::Path;

/// Parse a .docx file and return a Document model.
///
/// # Example
///
/// ```no_run
/// use rubrica::parse_file;
///
/// let doc = parse_file("document.docx")?;
/// println!("paragraphs: {}", doc.paragraphs().count());
/// # Ok::<(), rubrica::Error>(())
/// ```
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document> {
    let mut parser = DocxParser::open(path)?;
    parser.parse()
}

/// Parse a .docx document from bytes.
///
/// # Example
///
/// ```no_run
/// use rubrica::parse_bytes;
///
/// let data = std::fs::read("document.docx")?;
/// let doc = parse_bytes(&data)?;
/// # Ok::<(), rubrica::Error>(())
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let mut parser = DocxParser::from_bytes(data.to_vec())?;
    parser.parse()
}

/// Extract plain text from a .docx file.
pub fn extract_text(path: impl AsRef<Path>) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(doc.plain_text())
}
