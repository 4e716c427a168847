//! Document model structures.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A body-level content block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    /// A paragraph of text
    Paragraph(Paragraph),
    /// A table
    Table(Table),
}

/// A parsed Word document.
///
/// Holds the body-level blocks in document order. Paragraphs inside table
/// cells belong to their [`crate::Cell`] and are not repeated here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Body content blocks
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paragraph to the document body.
    pub fn add_paragraph(&mut self, para: Paragraph) {
        self.blocks.push(Block::Paragraph(para));
    }

    /// Add a table to the document body.
    pub fn add_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    /// Iterate over body-level paragraphs in document order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    /// Iterate over body-level tables in document order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Check if the document has no content blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Extract all text content as a single string.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for block in &self.blocks {
            match block {
                Block::Paragraph(para) => {
                    text.push_str(&para.plain_text());
                    text.push('\n');
                }
                Block::Table(table) => {
                    text.push_str(&table.plain_text());
                    text.push('\n');
                }
            }
        }
        text.trim().to_string()
    }

    /// Convert to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert to JSON string (compact).
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, Row};

    #[test]
    fn test_document_creation() {
        let mut doc = Document::new();
        assert!(doc.is_empty());

        doc.add_paragraph(Paragraph::with_text("Hello, World!"));
        assert!(!doc.is_empty());
        assert_eq!(doc.paragraphs().count(), 1);
        assert_eq!(doc.tables().count(), 0);
    }

    #[test]
    fn test_order_preserved_across_kinds() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("before"));
        doc.add_table(Table::new());
        doc.add_paragraph(Paragraph::with_text("after"));

        assert_eq!(doc.blocks.len(), 3);
        let texts: Vec<String> = doc.paragraphs().map(|p| p.plain_text()).collect();
        assert_eq!(texts, vec!["before", "after"]);
        assert_eq!(doc.tables().count(), 1);
    }

    #[test]
    fn test_plain_text_extraction() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("Intro"));

        let mut table = Table::new();
        let mut row = Row::new();
        row.add_cell(Cell::with_text("a"));
        row.add_cell(Cell::with_text("b"));
        table.add_row(row);
        doc.add_table(table);

        assert_eq!(doc.plain_text(), "Intro\na\tb");
    }

    #[test]
    fn test_json_serialization() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("Test"));

        let json = doc.to_json_compact().unwrap();
        assert!(json.contains("\"type\":\"Paragraph\""));
        assert!(json.contains("Test"));
    }
}
