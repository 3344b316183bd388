//! RTF documents.
//!
//! [`RtfDocument`] runs the interpreter over an input with every concrete
//! destination attached and keeps what they collected: body elements, the
//! font, color and style tables, lists, metadata and pictures.

use crate::config::ParserOptions;
use crate::destination::color::ColorTableSink;
use crate::destination::document::DocumentSink;
use crate::destination::font::FontTableSink;
use crate::destination::info::InfoSink;
use crate::destination::list::{ListOverrideSink, ListTableSink};
use crate::destination::picture::PictureSink;
use crate::destination::stylesheet::StyleSheetSink;
use crate::destination::{Destination, SinkId, SinkSet};
use crate::detection::detect_rtf;
use crate::error::{RtfError, RtfResult};
use crate::interpreter::{Diagnostic, Interpreter};
use crate::lexer::Lexer;
use crate::model::{
    ColorTable, DocumentElement, DocumentInfo, FontRef, FontTable, ListLevel, ListOverrideTable,
    ListTable, Paragraph, ParagraphContent, Picture, StyleSheet, Table,
};
use std::io::Read;
use std::path::Path;

/// Every concrete destination of a document, addressed by [`SinkId`].
#[derive(Debug)]
pub struct DocumentSinks {
    pub document: DocumentSink,
    pub fonts: FontTableSink,
    pub colors: ColorTableSink,
    pub styles: StyleSheetSink,
    pub lists: ListTableSink,
    pub overrides: ListOverrideSink,
    pub info: InfoSink,
    pub pictures: PictureSink,
}

impl DocumentSinks {
    /// Create the sinks, decoding undeclared text in `default_code_page`.
    pub fn new(default_code_page: u32) -> Self {
        Self {
            document: DocumentSink::new(default_code_page),
            fonts: FontTableSink::new(default_code_page),
            colors: ColorTableSink::new(),
            styles: StyleSheetSink::new(default_code_page),
            lists: ListTableSink::new(default_code_page),
            overrides: ListOverrideSink::new(),
            info: InfoSink::new(default_code_page),
            pictures: PictureSink::new(),
        }
    }
}

impl Default for DocumentSinks {
    fn default() -> Self {
        Self::new(1252)
    }
}

impl SinkSet for DocumentSinks {
    fn sink(&mut self, id: SinkId) -> Option<&mut dyn Destination> {
        match id {
            SinkId::Document => {
                // Body text in a font with its own charset decodes in that code page
                if let Some(code_pages) = self.fonts.take_code_pages_if_changed() {
                    self.document.set_font_code_pages(code_pages);
                }
                Some(&mut self.document)
            },
            SinkId::FontTable => Some(&mut self.fonts),
            SinkId::ColorTable => Some(&mut self.colors),
            SinkId::StyleSheet => Some(&mut self.styles),
            SinkId::ListTable => Some(&mut self.lists),
            SinkId::ListOverrideTable => Some(&mut self.overrides),
            SinkId::Info => Some(&mut self.info),
            SinkId::Picture => Some(&mut self.pictures),
            SinkId::Null | SinkId::Named(_) => None,
        }
    }
}

/// A parsed RTF document.
///
/// # Examples
///
/// ```rust
/// use rtfkit::RtfDocument;
///
/// let doc = RtfDocument::parse(r"{\rtf1\ansi{\fonttbl{\f0 Arial;}}\b Hello\b0  World\par}")?;
/// assert_eq!(doc.text(), "Hello World");
/// assert_eq!(doc.fonts().get(0).map(|f| f.name.as_str()), Some("Arial"));
/// assert!(doc.paragraphs()[0].runs()[0].bold());
/// # Ok::<(), rtfkit::RtfError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RtfDocument {
    info: DocumentInfo,
    fonts: FontTable,
    colors: ColorTable,
    stylesheet: StyleSheet,
    lists: ListTable,
    list_overrides: ListOverrideTable,
    elements: Vec<DocumentElement>,
    pictures: Vec<Picture>,
    diagnostics: Vec<Diagnostic>,
    code_page: Option<u32>,
    default_font: Option<FontRef>,
    version: Option<i32>,
}

impl RtfDocument {
    /// Create an empty document, to be filled and written out.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse RTF text.
    pub fn parse(input: &str) -> RtfResult<Self> {
        Self::parse_with_options(input.as_bytes(), &ParserOptions::default())
    }

    /// Parse RTF bytes.
    pub fn from_bytes(bytes: &[u8]) -> RtfResult<Self> {
        Self::parse_with_options(bytes, &ParserOptions::default())
    }

    /// Read the whole stream and parse it.
    pub fn from_reader<R: Read>(mut reader: R) -> RtfResult<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// Open and parse an RTF file.
    pub fn open<P: AsRef<Path>>(path: P) -> RtfResult<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Parse RTF bytes with explicit options.
    pub fn parse_with_options(bytes: &[u8], options: &ParserOptions) -> RtfResult<Self> {
        let signature = detect_rtf(bytes);
        if options.require_header && signature.is_none() {
            return Err(RtfError::NotRtf);
        }

        let mut sinks = DocumentSinks::new(u32::from(options.default_code_page));
        let diagnostics = {
            let mut interpreter = Interpreter::new(&mut sinks, options.clone());
            interpreter.run(Lexer::new(bytes))?;
            interpreter.take_diagnostics()
        };
        if !diagnostics.is_empty() {
            tracing::debug!(count = diagnostics.len(), "parsed with diagnostics");
        }

        let DocumentSinks {
            document,
            fonts,
            colors,
            styles,
            lists,
            overrides,
            info,
            pictures,
        } = sinks;
        let code_page = document.code_page();
        let default_font = document.default_font();
        let version = document.version().or(signature.and_then(|s| s.version));

        Ok(Self {
            info: info.into_info(),
            fonts: fonts.into_fonts(),
            colors: colors.into_colors(),
            stylesheet: styles.into_styles(),
            lists: lists.into_lists(),
            list_overrides: overrides.into_overrides(),
            elements: document.into_elements(),
            pictures: pictures.into_pictures(),
            diagnostics,
            code_page,
            default_font,
            version,
        })
    }

    #[inline]
    pub fn info(&self) -> &DocumentInfo {
        &self.info
    }

    #[inline]
    pub fn info_mut(&mut self) -> &mut DocumentInfo {
        &mut self.info
    }

    #[inline]
    pub fn fonts(&self) -> &FontTable {
        &self.fonts
    }

    #[inline]
    pub fn fonts_mut(&mut self) -> &mut FontTable {
        &mut self.fonts
    }

    #[inline]
    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    #[inline]
    pub fn colors_mut(&mut self) -> &mut ColorTable {
        &mut self.colors
    }

    #[inline]
    pub fn stylesheet(&self) -> &StyleSheet {
        &self.stylesheet
    }

    #[inline]
    pub fn stylesheet_mut(&mut self) -> &mut StyleSheet {
        &mut self.stylesheet
    }

    #[inline]
    pub fn lists(&self) -> &ListTable {
        &self.lists
    }

    #[inline]
    pub fn lists_mut(&mut self) -> &mut ListTable {
        &mut self.lists
    }

    #[inline]
    pub fn list_overrides(&self) -> &ListOverrideTable {
        &self.list_overrides
    }

    #[inline]
    pub fn list_overrides_mut(&mut self) -> &mut ListOverrideTable {
        &mut self.list_overrides
    }

    /// Body paragraphs and tables in document order.
    #[inline]
    pub fn elements(&self) -> &[DocumentElement] {
        &self.elements
    }

    /// Append a paragraph to the body.
    pub fn add_paragraph(&mut self, paragraph: ParagraphContent) {
        self.elements.push(DocumentElement::Paragraph(paragraph));
    }

    /// Append a table to the body.
    pub fn add_table(&mut self, table: Table) {
        self.elements.push(DocumentElement::Table(table));
    }

    #[inline]
    pub fn pictures(&self) -> &[Picture] {
        &self.pictures
    }

    /// Unknown words, unrecognized destinations and skipped groups met
    /// while parsing.
    #[inline]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Code page declared by `\ansi`, `\mac`, `\pc`, `\pca` or `\ansicpg`.
    #[inline]
    pub fn code_page(&self) -> Option<u32> {
        self.code_page
    }

    /// Default font declared with `\deff`.
    #[inline]
    pub fn default_font(&self) -> Option<FontRef> {
        self.default_font
    }

    /// `\rtfN` version.
    #[inline]
    pub fn version(&self) -> Option<i32> {
        self.version
    }

    /// Top-level paragraphs, excluding those inside tables.
    pub fn paragraphs(&self) -> Vec<&ParagraphContent> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                DocumentElement::Paragraph(paragraph) => Some(paragraph),
                DocumentElement::Table(_) => None,
            })
            .collect()
    }

    /// Tables in document order.
    pub fn tables(&self) -> Vec<&Table> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                DocumentElement::Table(table) => Some(table),
                DocumentElement::Paragraph(_) => None,
            })
            .collect()
    }

    /// Plain text of the body: paragraphs separated by newlines, tables as
    /// tab-separated rows.
    pub fn text(&self) -> String {
        self.elements
            .iter()
            .map(|element| match element {
                DocumentElement::Paragraph(paragraph) => paragraph.text(),
                DocumentElement::Table(table) => table.text(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Resolve the list level a paragraph belongs to: `\ls` selects an
    /// override, the override names a list, `\ilvl` picks the level.
    pub fn list_level_for(&self, paragraph: &Paragraph) -> Option<&ListLevel> {
        let membership = paragraph.list?;
        let entry = self.list_overrides.get(membership.override_index)?;
        self.lists.get(entry.list_id)?.get_level(membership.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FontFamily, ImageType, ListLevelType, StyleType};

    const SAMPLE: &str = concat!(
        r"{\rtf1\ansi\ansicpg1252\deff0",
        r"{\fonttbl{\f0\froman\fcharset0 Times New Roman;}{\f1\fswiss Arial;}}",
        r"{\colortbl;\red255\green0\blue0;}",
        r"{\stylesheet{\s0 Normal;}{\s1\sbasedon0\b heading 1;}}",
        r"{\*\listtable{\list\listtemplateid5{\listlevel\levelnfc23{\leveltext\'01\'95;}{\levelnumbers;}\li720}\listid9}}",
        r"{\*\listoverridetable{\listoverride\listid9\listoverridecount0\ls1}}",
        r"{\info{\title Sample}{\author Ann}}",
        r"{\*\unknowndest ignored}",
        r"\pard\s1 Heading\par",
        r"\pard\ls1\ilvl0 Item\par",
        r"{\pict\pngblip\picw1\pich1 89504e470d0a1a0a}",
        r"\pard\f1\cf1 Red Arial\par",
        r"}"
    );

    #[test]
    fn test_parse_sample() {
        let doc = RtfDocument::parse(SAMPLE).unwrap();
        assert_eq!(doc.version(), Some(1));
        assert_eq!(doc.code_page(), Some(1252));
        assert_eq!(doc.default_font(), Some(0));

        assert_eq!(doc.fonts().len(), 2);
        assert_eq!(doc.fonts().get(1).unwrap().family, FontFamily::Swiss);
        assert_eq!(doc.colors().len(), 2);
        assert!(doc.colors().is_auto(0));
        assert_eq!(doc.stylesheet().get(StyleType::Paragraph, 1).unwrap().name, "heading 1");
        assert_eq!(doc.info().title.as_deref(), Some("Sample"));
        assert_eq!(doc.pictures().len(), 1);
        assert_eq!(doc.pictures()[0].image_type, ImageType::Png);
        assert!(doc.diagnostics().iter().any(
            |d| matches!(d, Diagnostic::SkippedGroup { name, .. } if name == "unknowndest")
        ));

        let paragraphs = doc.paragraphs();
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[0].properties.style, Some(1));
        let red = &paragraphs[2].runs()[0];
        assert_eq!(red.formatting.font_ref, 1);
        assert_eq!(red.formatting.color_ref, 1);
        assert_eq!(doc.text(), "Heading\nItem\nRed Arial");
    }

    #[test]
    fn test_list_level_for() {
        let doc = RtfDocument::parse(SAMPLE).unwrap();
        let paragraphs = doc.paragraphs();
        let level = doc.list_level_for(&paragraphs[1].properties).unwrap();
        assert_eq!(level.level_type, ListLevelType::Bullet);
        assert_eq!(level.indent, 720);
        assert_eq!(level.number_text, "\u{2022}");
        assert!(doc.list_level_for(&paragraphs[0].properties).is_none());
    }

    #[test]
    fn test_unknown_word_keeps_text() {
        let doc = RtfDocument::parse(r"{\rtf1{\mystery Test} shown}").unwrap();
        assert_eq!(doc.text(), "Test shown");
        assert!(matches!(
            doc.diagnostics(),
            [Diagnostic::UnknownControlWord { name, .. }] if name == "mystery"
        ));
    }

    #[test]
    fn test_require_header() {
        let options = ParserOptions::new().with_require_header(true);
        let err = RtfDocument::parse_with_options(b"Hello {\\b world}", &options).unwrap_err();
        assert!(matches!(err, RtfError::NotRtf));

        let doc = RtfDocument::parse_with_options(b"Hello {\\b world}", &ParserOptions::default()).unwrap();
        assert_eq!(doc.text(), "Hello world");
        assert_eq!(doc.version(), None);
    }

    #[test]
    fn test_fatal_errors_surface() {
        let err = RtfDocument::parse(r"{\rtf1 text").unwrap_err();
        assert!(matches!(err, RtfError::UnbalancedGroup { depth: 1, .. }));
    }

    #[test]
    fn test_font_charset_decodes_body() {
        let doc = RtfDocument::from_bytes(
            b"{\\rtf1\\ansi{\\fonttbl{\\f0 Arial;}{\\f1\\fcharset204 Arial Cyr;}}\\f1 \\'cf\\'f0\\'e8\\f0  \\'e9\\par}",
        )
        .unwrap();
        assert_eq!(doc.text(), "\u{41f}\u{440}\u{438} \u{e9}");
    }

    #[test]
    fn test_from_reader() {
        let doc = RtfDocument::from_reader(std::io::Cursor::new(b"{\\rtf1 Hi\\par}".to_vec())).unwrap();
        assert_eq!(doc.text(), "Hi");
    }

    #[test]
    fn test_open_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.rtf");
        std::fs::write(&path, SAMPLE).unwrap();
        let doc = RtfDocument::open(&path).unwrap();
        assert_eq!(doc, RtfDocument::parse(SAMPLE).unwrap());

        let missing = RtfDocument::open(dir.path().join("missing.rtf")).unwrap_err();
        assert!(matches!(missing, RtfError::Io(_)));
    }
}
