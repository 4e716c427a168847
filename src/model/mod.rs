//! Read-only document model.
//!
//! This module defines the data structures that represent a parsed Word
//! document. The parser converts WordprocessingML into these structures, and
//! the report renderer reads them back out. Nothing mutates a document after
//! parsing.

mod document;
mod paragraph;
mod table;

pub use document::*;
pub use paragraph::*;
pub use table::*;
