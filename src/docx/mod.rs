//! DOCX (Word) document parser.
//!
//! Parses the WordprocessingML body of a .docx package into the document
//! model: body-level paragraphs and tables, in document order.

mod parser;

pub use parser::DocxParser;
