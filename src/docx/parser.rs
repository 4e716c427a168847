//! DOCX parser implementation.

use crate::container::DocxContainer;
use crate::error::{Error, Result};
use crate::model::{Cell, Document, Paragraph, Row, Table, TextRun};

use quick_xml::events::{BytesStart, Event};

/// Parser for DOCX (Word) documents.
pub struct DocxParser {
    container: DocxContainer,
}

impl DocxParser {
    /// Open a DOCX file for parsing.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let container = DocxContainer::open(path)?;
        Ok(Self { container })
    }

    /// Create a parser from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = DocxContainer::from_bytes(data)?;
        Ok(Self { container })
    }

    /// Parse the document and return a Document model.
    pub fn parse(&mut self) -> Result<Document> {
        self.parse_document_xml()
    }

    /// Parse the main document.xml content.
    ///
    /// Body-level `w:p` and outermost `w:tbl` elements are collected as XML
    /// fragments and re-parsed individually; this keeps paragraph state and
    /// table state from bleeding into each other.
    fn parse_document_xml(&mut self) -> Result<Document> {
        let xml = self.container.read_xml("word/document.xml")?;
        let mut doc = Document::new();

        let mut reader = quick_xml::Reader::from_str(&xml);
        // Don't trim text - run text must reach the fragment parsers intact
        reader.config_mut().trim_text(false);

        let mut buf = Vec::new();
        let mut in_body = false;
        let mut in_paragraph = false;
        let mut paragraph_xml = String::new();
        let mut table_xml = String::new();
        let mut table_depth: u32 = 0; // nested table depth within the fragment

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    let name = e.name();
                    match name.as_ref() {
                        b"w:body" => {
                            in_body = true;
                        }
                        b"w:p" if in_body && table_depth == 0 => {
                            in_paragraph = true;
                            paragraph_xml.clear();
                            push_start_tag(&mut paragraph_xml, e);
                        }
                        b"w:tbl" if in_body => {
                            if table_depth == 0 {
                                table_xml.clear();
                            }
                            table_depth += 1;
                            push_start_tag(&mut table_xml, e);
                        }
                        _ => {
                            if in_paragraph {
                                push_start_tag(&mut paragraph_xml, e);
                            } else if table_depth > 0 {
                                push_start_tag(&mut table_xml, e);
                            }
                        }
                    }
                }
                Ok(Event::Empty(ref e)) => {
                    if in_paragraph {
                        push_empty_tag(&mut paragraph_xml, e);
                    } else if table_depth > 0 {
                        push_empty_tag(&mut table_xml, e);
                    } else if in_body && e.name().as_ref() == b"w:p" {
                        // Self-closing paragraph element
                        doc.add_paragraph(Paragraph::new());
                    }
                }
                Ok(Event::Text(ref e)) => {
                    if in_paragraph {
                        let text = e.unescape().unwrap_or_default();
                        paragraph_xml.push_str(&escape_xml(&text));
                    } else if table_depth > 0 {
                        let text = e.unescape().unwrap_or_default();
                        table_xml.push_str(&escape_xml(&text));
                    }
                }
                Ok(Event::End(ref e)) => {
                    let name = e.name();
                    match name.as_ref() {
                        b"w:body" => {
                            in_body = false;
                        }
                        b"w:p" if in_paragraph && table_depth == 0 => {
                            paragraph_xml.push_str("</w:p>");
                            doc.add_paragraph(parse_paragraph(&paragraph_xml)?);
                            in_paragraph = false;
                        }
                        b"w:tbl" if table_depth > 0 => {
                            table_xml.push_str("</w:tbl>");
                            table_depth -= 1;
                            if table_depth == 0 {
                                doc.add_table(parse_table(&table_xml)?);
                            }
                        }
                        _ => {
                            if in_paragraph {
                                push_end_tag(&mut paragraph_xml, name.as_ref());
                            } else if table_depth > 0 {
                                push_end_tag(&mut table_xml, name.as_ref());
                            }
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(doc)
    }
}

/// Parse a single `w:p` fragment into a Paragraph.
fn parse_paragraph(xml: &str) -> Result<Paragraph> {
    let mut para = Paragraph::new();
    let mut reader = quick_xml::Reader::from_str(xml);
    // Don't trim text - preserve whitespace from xml:space="preserve" elements
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut in_run = false;
    let mut in_text = false; // w:t elements (regular text)
    let mut in_instr_text = false; // w:instrText elements (field codes to skip)

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"w:r" => in_run = true,
                b"w:t" => in_text = true,
                b"w:instrText" => in_instr_text = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"w:br" | b"w:cr" if in_run => para.add_run(TextRun::plain("\n")),
                b"w:tab" if in_run => para.add_run(TextRun::plain("\t")),
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                // Only extract text from w:t elements, skip w:instrText
                if in_run && in_text && !in_instr_text {
                    let text = e.unescape().unwrap_or_default().to_string();
                    if !text.is_empty() {
                        para.add_run(TextRun::plain(text));
                    }
                }
            }
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:r" => in_run = false,
                b"w:t" => in_text = false,
                b"w:instrText" => in_instr_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(para)
}

/// Parse a `w:tbl` fragment into a Table.
///
/// Every `w:tr` becomes a row and every `w:tc` a cell, in document order.
/// Cell paragraphs are kept in order, including empty ones. Tables nested
/// inside a cell are skipped entirely: only top-level tables are enumerated
/// by the document model.
fn parse_table(xml: &str) -> Result<Table> {
    let mut table = Table::new();
    let mut reader = quick_xml::Reader::from_str(xml);
    // Don't trim text - preserve whitespace from xml:space="preserve" elements
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut in_cell = false;
    let mut in_run = false;
    let mut in_text = false;
    let mut in_instr_text = false;
    let mut current_row: Option<Row> = None;
    let mut cell_paragraphs: Vec<Paragraph> = Vec::new();
    let mut current_paragraph: Option<Paragraph> = None;

    // 0 = main table level, 1+ = inside a nested table being skipped
    let mut nested_depth: u32 = 0;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = e.name();

                if nested_depth > 0 {
                    if name.as_ref() == b"w:tbl" {
                        nested_depth += 1;
                    }
                    continue;
                }

                match name.as_ref() {
                    b"w:tbl" if in_cell => {
                        nested_depth = 1;
                    }
                    b"w:tr" => {
                        current_row = Some(Row::new());
                    }
                    b"w:tc" => {
                        in_cell = true;
                        cell_paragraphs.clear();
                    }
                    b"w:p" if in_cell => {
                        current_paragraph = Some(Paragraph::new());
                    }
                    b"w:r" if current_paragraph.is_some() => in_run = true,
                    b"w:t" => in_text = true,
                    b"w:instrText" => in_instr_text = true,
                    _ => {}
                }
            }
            Ok(Event::Empty(ref e)) => {
                if nested_depth > 0 {
                    continue;
                }
                match e.name().as_ref() {
                    b"w:p" if in_cell => {
                        // Self-closing paragraph element
                        cell_paragraphs.push(Paragraph::new());
                    }
                    b"w:br" | b"w:cr" if in_run => {
                        if let Some(ref mut para) = current_paragraph {
                            para.add_run(TextRun::plain("\n"));
                        }
                    }
                    b"w:tab" if in_run => {
                        if let Some(ref mut para) = current_paragraph {
                            para.add_run(TextRun::plain("\t"));
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Text(ref e)) => {
                if nested_depth > 0 {
                    continue;
                }
                if in_run && in_text && !in_instr_text {
                    let text = e.unescape().unwrap_or_default().to_string();
                    if !text.is_empty() {
                        if let Some(ref mut para) = current_paragraph {
                            para.add_run(TextRun::plain(text));
                        }
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.name();

                if nested_depth > 0 {
                    if name.as_ref() == b"w:tbl" {
                        nested_depth -= 1;
                    }
                    continue;
                }

                match name.as_ref() {
                    b"w:tr" => {
                        if let Some(row) = current_row.take() {
                            table.add_row(row);
                        }
                    }
                    b"w:tc" => {
                        let cell = Cell {
                            content: std::mem::take(&mut cell_paragraphs),
                        };
                        if let Some(ref mut row) = current_row {
                            row.add_cell(cell);
                        }
                        in_cell = false;
                    }
                    b"w:p" if in_cell => {
                        if let Some(para) = current_paragraph.take() {
                            cell_paragraphs.push(para);
                        }
                    }
                    b"w:r" => in_run = false,
                    b"w:t" => in_text = false,
                    b"w:instrText" => in_instr_text = false,
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(table)
}

/// Append a start tag (with attributes) to a fragment buffer.
fn push_start_tag(dst: &mut String, e: &BytesStart) {
    dst.push('<');
    dst.push_str(&String::from_utf8_lossy(e.name().as_ref()));
    push_attributes(dst, e);
    dst.push('>');
}

/// Append a self-closing tag (with attributes) to a fragment buffer.
fn push_empty_tag(dst: &mut String, e: &BytesStart) {
    dst.push('<');
    dst.push_str(&String::from_utf8_lossy(e.name().as_ref()));
    push_attributes(dst, e);
    dst.push_str("/>");
}

/// Append an end tag to a fragment buffer.
fn push_end_tag(dst: &mut String, name: &[u8]) {
    dst.push_str("</");
    dst.push_str(&String::from_utf8_lossy(name));
    dst.push('>');
}

fn push_attributes(dst: &mut String, e: &BytesStart) {
    for attr in e.attributes().flatten() {
        dst.push(' ');
        dst.push_str(&String::from_utf8_lossy(attr.key.as_ref()));
        dst.push_str("=\"");
        dst.push_str(&String::from_utf8_lossy(&attr.value));
        dst.push('"');
    }
}

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
