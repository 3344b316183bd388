//! The document-body destination.
//!
//! Text is collected into runs whose formatting is a snapshot of the property
//! table; a run continues as long as the snapshot does not change. `\par`
//! (delivered as a `"\n"` substitution) ends a paragraph. Paragraphs marked
//! `\intbl` are gathered into cells at `\cell`, cells into rows at `\row`, and
//! the table is closed by the first paragraph outside it.

use super::text::{TextAccumulator, code_page_of};
use super::{ControlEvent, Destination, TextChunk};
use crate::model::{
    Alignment, Cell, DocumentElement, FontRef, Formatting, Paragraph, ParagraphContent, Row,
    RowProperties, Table,
};
use crate::property::{PropertyKey, PropertyTable};
use std::collections::HashMap;

/// Collects paragraphs and tables of the document body.
#[derive(Debug)]
pub struct DocumentSink {
    elements: Vec<DocumentElement>,
    paragraph: ParagraphContent,
    pending: TextAccumulator,
    pending_format: Formatting,
    table: Table,
    row: Row,
    cell: Vec<ParagraphContent>,
    boundaries: Vec<i32>,
    font_code_pages: HashMap<FontRef, u32>,
    default_code_page: u32,
    version: Option<i32>,
    code_page: Option<u32>,
    default_font: Option<FontRef>,
}

impl DocumentSink {
    pub fn new(default_code_page: u32) -> Self {
        Self {
            elements: Vec::new(),
            paragraph: ParagraphContent::default(),
            pending: TextAccumulator::new(),
            pending_format: Formatting::default(),
            table: Table::new(),
            row: Row::new(),
            cell: Vec::new(),
            boundaries: Vec::new(),
            font_code_pages: HashMap::new(),
            default_code_page,
            version: None,
            code_page: None,
            default_font: None,
        }
    }

    /// Code pages declared by the font table, used for text in those fonts.
    pub fn set_font_code_pages(&mut self, code_pages: HashMap<FontRef, u32>) {
        self.font_code_pages = code_pages;
    }

    /// `\rtfN` version, if seen.
    #[inline]
    pub fn version(&self) -> Option<i32> {
        self.version
    }

    /// Code page declared by the document header.
    #[inline]
    pub fn code_page(&self) -> Option<u32> {
        self.code_page
    }

    /// Default font declared with `\deff`.
    #[inline]
    pub fn default_font(&self) -> Option<FontRef> {
        self.default_font
    }

    /// Elements completed so far.
    #[inline]
    pub fn elements(&self) -> &[DocumentElement] {
        &self.elements
    }

    /// Finish pending content and return all elements.
    pub fn into_elements(mut self) -> Vec<DocumentElement> {
        self.flush_run();
        if !self.paragraph.is_empty() {
            let paragraph = std::mem::take(&mut self.paragraph);
            self.push_paragraph(paragraph);
        }
        if !self.cell.is_empty() || self.row.cell_count() > 0 {
            tracing::debug!("table row not closed by \\row");
            self.finish_row(&PropertyTable::new());
        }
        self.flush_table();
        self.elements
    }

    fn text_code_page(&self, properties: &PropertyTable) -> u32 {
        properties
            .int(PropertyKey::FontIndex)
            .and_then(|f| FontRef::try_from(f).ok())
            .and_then(|f| self.font_code_pages.get(&f).copied())
            .unwrap_or_else(|| code_page_of(properties, self.default_code_page))
    }

    fn switch_format(&mut self, properties: &PropertyTable) {
        let format = Formatting::from_properties(properties);
        if format != self.pending_format {
            self.flush_run();
            self.pending_format = format;
        }
    }

    fn flush_run(&mut self) {
        if !self.pending.is_empty() {
            let text = self.pending.take();
            self.paragraph.push_text(&text, self.pending_format);
        }
    }

    fn end_paragraph(&mut self, properties: &PropertyTable) {
        self.flush_run();
        let mut paragraph = std::mem::take(&mut self.paragraph);
        paragraph.properties = Paragraph::from_properties(properties);
        self.push_paragraph(paragraph);
    }

    fn push_paragraph(&mut self, paragraph: ParagraphContent) {
        if paragraph.properties.in_table {
            self.cell.push(paragraph);
        } else {
            self.flush_table();
            self.elements.push(DocumentElement::Paragraph(paragraph));
        }
    }

    fn finish_cell(&mut self, properties: &PropertyTable) {
        self.flush_run();
        if !self.paragraph.is_empty() || self.cell.is_empty() {
            let mut paragraph = std::mem::take(&mut self.paragraph);
            paragraph.properties = Paragraph::from_properties(properties);
            paragraph.properties.in_table = true;
            self.cell.push(paragraph);
        }
        self.row.add_cell(Cell::new(std::mem::take(&mut self.cell)));
    }

    fn finish_row(&mut self, properties: &PropertyTable) {
        if !self.cell.is_empty() || !self.paragraph.is_empty() {
            self.finish_cell(properties);
        }
        let row_properties = RowProperties {
            left: properties.int_or(PropertyKey::RowLeft, 0),
            gap: properties.int_or(PropertyKey::RowGap, 0),
            height: properties.int_or(PropertyKey::RowHeight, 0),
            header: properties.flag(PropertyKey::RowHeader),
            alignment: match properties.int_or(PropertyKey::RowAlignment, 0) {
                1 => Alignment::Right,
                2 => Alignment::Center,
                _ => Alignment::Left,
            },
        };
        let mut row = Row::with_properties(row_properties);
        let cells = std::mem::take(&mut self.row);
        for (index, cell) in cells.cells().iter().enumerate() {
            let cell = match self.boundaries.get(index) {
                Some(&boundary) => cell.clone().with_boundary(boundary),
                None => cell.clone(),
            };
            row.add_cell(cell);
        }
        self.table.add_row(row);
    }

    fn flush_table(&mut self) {
        if !self.table.is_empty() {
            let table = std::mem::take(&mut self.table);
            tracing::trace!(rows = table.row_count(), "table");
            self.elements.push(DocumentElement::Table(table));
        }
    }
}

impl Default for DocumentSink {
    fn default() -> Self {
        Self::new(1252)
    }
}

impl Destination for DocumentSink {
    fn on_control_word(&mut self, event: &ControlEvent, properties: &PropertyTable) {
        match event.name() {
            "rtf" => self.version = event.parameter,
            "ansi" | "mac" | "pc" | "pca" | "ansicpg" => {
                self.code_page = Some(code_page_of(properties, self.default_code_page));
            },
            "deff" => self.default_font = event.parameter.and_then(|f| FontRef::try_from(f).ok()),
            "trowd" => self.boundaries.clear(),
            "cellx" => {
                if let Some(boundary) = event.parameter {
                    self.boundaries.push(boundary);
                }
            },
            "cell" | "nestcell" => self.finish_cell(properties),
            "row" | "nestrow" => self.finish_row(properties),
            _ => {},
        }
    }

    fn on_text(&mut self, chunk: TextChunk<'_>, properties: &PropertyTable) {
        match chunk {
            TextChunk::Bytes(bytes) => {
                self.switch_format(properties);
                let code_page = self.text_code_page(properties);
                self.pending.push_bytes(bytes, code_page);
            },
            TextChunk::Unicode(text) => {
                let mut parts = text.split('\n');
                if let Some(first) = parts.next()
                    && !first.is_empty()
                {
                    self.switch_format(properties);
                    self.pending.push_str(first);
                }
                for part in parts {
                    self.end_paragraph(properties);
                    if !part.is_empty() {
                        self.switch_format(properties);
                        self.pending.push_str(part);
                    }
                }
            },
            TextChunk::Binary(payload) => {
                tracing::debug!(len = payload.len(), "binary data in document body ignored");
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserOptions;
    use crate::destination::{SinkId, SinkSet};
    use crate::interpreter::Interpreter;
    use crate::lexer::Lexer;
    use crate::model::UnderlineStyle;

    impl SinkSet for DocumentSink {
        fn sink(&mut self, id: SinkId) -> Option<&mut dyn Destination> {
            match id {
                SinkId::Document => Some(self),
                _ => None,
            }
        }
    }

    fn parse(input: &[u8]) -> Vec<DocumentElement> {
        let mut sink = DocumentSink::default();
        Interpreter::new(&mut sink, ParserOptions::default())
            .run(Lexer::new(input))
            .unwrap();
        sink.into_elements()
    }

    fn paragraphs(elements: &[DocumentElement]) -> Vec<&ParagraphContent> {
        elements
            .iter()
            .filter_map(|e| match e {
                DocumentElement::Paragraph(p) => Some(p),
                DocumentElement::Table(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_runs_and_paragraphs() {
        let elements = parse(br"{\rtf1\ansi\b Hello\b0  World\par\qc\ul centred\ulnone  text\par tail}");
        let paras = paragraphs(&elements);
        assert_eq!(paras.len(), 3);

        let first = paras[0];
        assert_eq!(first.runs().len(), 2);
        assert_eq!(first.runs()[0].text(), "Hello");
        assert!(first.runs()[0].bold());
        assert_eq!(first.runs()[1].text(), " World");
        assert!(!first.runs()[1].bold());

        let second = paras[1];
        assert_eq!(second.properties.alignment, Alignment::Center);
        assert_eq!(second.runs()[0].formatting.underline, UnderlineStyle::Single);
        assert_eq!(second.text(), "centred text");

        assert_eq!(paras[2].text(), "tail");
    }

    #[test]
    fn test_group_scoped_formatting() {
        let elements = parse(br"{\rtf1 a{\i b}c\par}");
        let para = paragraphs(&elements)[0];
        let texts: Vec<(&str, bool)> = para.runs().iter().map(|r| (r.text(), r.italic())).collect();
        assert_eq!(texts, vec![("a", false), ("b", true), ("c", false)]);
    }

    #[test]
    fn test_symbols_in_text() {
        let elements = parse(br"{\rtf1 a\tab b\line c\~d\emdash\par}");
        assert_eq!(paragraphs(&elements)[0].text(), "a\tb\u{2028}c\u{a0}d\u{2014}");
    }

    #[test]
    fn test_table() {
        let elements = parse(
            br"{\rtf1\trowd\trgaph108\cellx1000\cellx2000\pard\intbl A1\cell B1\cell\row\trowd\cellx1000\cellx2000\pard\intbl A2\cell B\par 2\cell\row\pard after\par}",
        );
        assert_eq!(elements.len(), 2);
        let DocumentElement::Table(table) = &elements[0] else {
            panic!("expected a table first");
        };
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0].properties.gap, 108);
        assert_eq!(table.rows()[0].cells()[1].right_boundary, Some(2000));
        assert_eq!(table.rows()[1].cells()[1].paragraphs().len(), 2);
        assert_eq!(table.text(), "A1\tB1\nA2\tB\n2");
        assert_eq!(paragraphs(&elements)[0].text(), "after");
    }

    #[test]
    fn test_font_code_page_decoding() {
        let mut sink = DocumentSink::default();
        sink.set_font_code_pages(HashMap::from([(1, 1251)]));
        Interpreter::new(&mut sink, ParserOptions::default())
            .run(Lexer::new(br"{\rtf1\ansi \'e0{\f1 \'e0}\par}"))
            .unwrap();
        assert_eq!(sink.code_page(), Some(1252));
        assert_eq!(sink.version(), Some(1));
        let elements = sink.into_elements();
        assert_eq!(paragraphs(&elements)[0].text(), "\u{e0}\u{430}");
    }

    #[test]
    fn test_trailing_text_without_par() {
        let elements = parse(br"{\rtf1 only}");
        assert_eq!(paragraphs(&elements)[0].text(), "only");
    }
}
