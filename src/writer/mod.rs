//! RTF writer.
//!
//! Control words are spelled through the catalog, so a word is written with
//! the affixes it is read with (`\*\` for ignorable destinations, a trailing
//! space delimiter for alphabetic words). Text is escaped as it is written:
//! `\`, `{` and `}` are quoted, newlines and tabs become `\par` and `\tab`,
//! and non-ASCII characters are written as `\'hh` when the target code page
//! can represent them, otherwise as `\uN?`.
//!
//! # Examples
//!
//! ```rust
//! use rtfkit::{RtfDocument, RtfWriter, WriterOptions};
//!
//! let doc = RtfDocument::parse(r"{\rtf1\ansi\b Hello\b0  World\par}")?;
//!
//! let mut out = Vec::new();
//! RtfWriter::with_options(&mut out, WriterOptions::new().with_generator(None))
//!     .write_document(&doc)?;
//!
//! let reread = RtfDocument::from_bytes(&out)?;
//! assert_eq!(reread.elements(), doc.elements());
//! # Ok::<(), rtfkit::RtfError>(())
//! ```

mod header;

use crate::catalog;
use crate::config::WriterOptions;
use crate::document::RtfDocument;
use crate::encoding::encoding_or_default;
use crate::error::RtfResult;
use crate::model::{
    Alignment, DocumentElement, FontRef, Formatting, Paragraph, ParagraphContent, Picture, Row,
    Table, UnderlineStyle, VerticalPosition,
};
use encoding_rs::{Encoding, UTF_8};
use std::collections::HashMap;
use std::io::Write;

/// Field instruction of a table of contents: headings 1 to 5, hyperlinked.
const TOC_INSTRUCTION: &str = r#"TOC \\f \\h \\u \\o "1-5" "#;

/// Cell width used when a cell carries no `\cellx` boundary (2 inches).
const DEFAULT_CELL_WIDTH: i32 = 2880;

/// RTF document writer.
pub struct RtfWriter<W: Write> {
    writer: W,
    options: WriterOptions,
    /// Encoded output not yet handed to `writer`
    buffer: Vec<u8>,
    /// Encoding of the ANSI code page
    encoding: &'static Encoding,
    /// Font used when a run names none (`\deff`)
    default_font: FontRef,
    /// Fonts whose charset selects a code page of their own
    font_code_pages: HashMap<FontRef, u32>,
}

impl<W: Write> RtfWriter<W> {
    /// Create a new RTF writer.
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, WriterOptions::default())
    }

    /// Create a new RTF writer with options.
    pub fn with_options(writer: W, options: WriterOptions) -> Self {
        let encoding = encoding_or_default(u32::from(options.code_page));
        let default_font = options.default_font;
        Self {
            writer,
            options,
            buffer: Vec::with_capacity(256),
            encoding,
            default_font,
            font_code_pages: HashMap::new(),
        }
    }

    #[inline]
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> RtfResult<W> {
        self.flush()?;
        Ok(self.writer)
    }

    /// Hand buffered output to the underlying writer and flush it.
    pub fn flush(&mut self) -> RtfResult<()> {
        self.drain()?;
        self.writer.flush()?;
        Ok(())
    }

    fn drain(&mut self) -> RtfResult<()> {
        if !self.buffer.is_empty() {
            self.writer.write_all(&self.buffer)?;
            self.buffer.clear();
        }
        Ok(())
    }

    /// Write a complete document: header tables, metadata, body, pictures.
    pub fn write_document(&mut self, doc: &RtfDocument) -> RtfResult<()> {
        self.write_header(doc)?;

        for element in doc.elements() {
            match element {
                DocumentElement::Paragraph(paragraph) => {
                    self.write_paragraph(paragraph, false, "par")?;
                },
                DocumentElement::Table(table) => self.write_table(table)?,
            }
            self.line_break();
        }
        for picture in doc.pictures() {
            self.write_picture(picture)?;
        }

        self.close_group();
        self.flush()
    }

    /// Write a control word, spelled as the catalog spells it.
    pub fn write_control_word(&mut self, name: &str, parameter: Option<i32>) -> RtfResult<()> {
        self.push_word(name, parameter);
        self.drain()
    }

    /// Write text, escaped for RTF.
    pub fn write_text(&mut self, text: &str) -> RtfResult<()> {
        self.push_text(text, self.encoding);
        self.drain()
    }

    /// End the section: `\sect` followed by `\sectd` to restore section
    /// defaults.
    pub fn write_section_break(&mut self) -> RtfResult<()> {
        self.push_word("sect", None);
        self.push_word("sectd", None);
        self.line_break();
        self.drain()
    }

    /// Write a table of contents field. Readers show `default_text` (or the
    /// configured placeholder) until the field is updated.
    pub fn write_table_of_contents(&mut self, default_text: Option<&str>) -> RtfResult<()> {
        let text = default_text
            .map(str::to_string)
            .unwrap_or_else(|| self.options.toc_default_text.clone());

        self.open_group();
        self.push_word("field", None);
        self.open_group();
        self.push_word("fldinst", None);
        self.buffer.extend_from_slice(TOC_INSTRUCTION.as_bytes());
        self.close_group();
        self.open_group();
        self.push_word("fldrslt", None);
        self.push_text(&text, self.encoding);
        self.close_group();
        self.close_group();
        self.line_break();
        self.drain()
    }

    /// Write a `\pict` group with hex-encoded data.
    pub fn write_picture(&mut self, picture: &Picture) -> RtfResult<()> {
        self.open_group();
        self.push_word("pict", None);
        if let Some(word) = picture.image_type.control_word() {
            self.push_word(word, None);
        }
        let dimensions = [
            ("picw", picture.width),
            ("pich", picture.height),
            ("picwgoal", picture.goal_width),
            ("pichgoal", picture.goal_height),
            ("picscalex", picture.scale_x),
            ("picscaley", picture.scale_y),
        ];
        for (word, value) in dimensions {
            if let Some(value) = value {
                self.push_word(word, Some(value));
            }
        }
        for (i, chunk) in picture.data().chunks(64).enumerate() {
            if i > 0 {
                self.buffer.push(b'\n');
            }
            for &byte in chunk {
                push_hex(&mut self.buffer, byte);
            }
        }
        self.close_group();
        self.drain()
    }

    fn write_paragraph(&mut self, paragraph: &ParagraphContent, in_table: bool, end: &str) -> RtfResult<()> {
        self.push_word("pard", None);
        if in_table {
            self.push_word("intbl", None);
        }
        self.push_paragraph_properties(&paragraph.properties);

        for run in paragraph.runs() {
            self.open_group();
            self.push_formatting(&run.formatting);
            let encoding = self.run_encoding(run.formatting.font_ref);
            self.push_text(run.text(), encoding);
            self.close_group();
        }
        self.push_word(end, None);
        self.drain()
    }

    fn write_table(&mut self, table: &Table) -> RtfResult<()> {
        for row in table.rows() {
            self.write_row(row)?;
            self.line_break();
        }
        self.drain()
    }

    fn write_row(&mut self, row: &Row) -> RtfResult<()> {
        let properties = &row.properties;
        self.push_word("trowd", None);
        if properties.gap != 0 {
            self.push_word("trgaph", Some(properties.gap));
        }
        if properties.left != 0 {
            self.push_word("trleft", Some(properties.left));
        }
        if properties.height != 0 {
            self.push_word("trrh", Some(properties.height));
        }
        if properties.header {
            self.push_word("trhdr", None);
        }
        match properties.alignment {
            Alignment::Right => self.push_word("trqr", None),
            Alignment::Center => self.push_word("trqc", None),
            _ => {},
        }

        let mut boundary = properties.left;
        for cell in row.cells() {
            boundary = cell.right_boundary.unwrap_or(boundary.saturating_add(DEFAULT_CELL_WIDTH));
            self.push_word("cellx", Some(boundary));
        }

        for cell in row.cells() {
            match cell.paragraphs().split_last() {
                Some((last, rest)) => {
                    for paragraph in rest {
                        self.write_paragraph(paragraph, true, "par")?;
                    }
                    self.write_paragraph(last, true, "cell")?;
                },
                None => {
                    self.push_word("pard", None);
                    self.push_word("intbl", None);
                    self.push_word("cell", None);
                },
            }
        }
        self.push_word("row", None);
        self.drain()
    }

    fn push_paragraph_properties(&mut self, paragraph: &Paragraph) {
        if let Some(style) = paragraph.style {
            self.push_word("s", Some(i32::from(style)));
        }
        if paragraph.alignment != Alignment::Left {
            self.push_word(paragraph.alignment.control_word(), None);
        }

        let spacing = &paragraph.spacing;
        if spacing.before != 0 {
            self.push_word("sb", Some(spacing.before));
        }
        if spacing.after != 0 {
            self.push_word("sa", Some(spacing.after));
        }
        if spacing.line != 0 {
            self.push_word("sl", Some(spacing.line));
        }
        if spacing.line_multiple {
            self.push_word("slmult", Some(1));
        }

        let indentation = &paragraph.indentation;
        if indentation.left != 0 {
            self.push_word("li", Some(indentation.left));
        }
        if indentation.right != 0 {
            self.push_word("ri", Some(indentation.right));
        }
        if indentation.first_line != 0 {
            self.push_word("fi", Some(indentation.first_line));
        }

        let flags = [
            ("keep", paragraph.keep_together),
            ("keepn", paragraph.keep_next),
            ("pagebb", paragraph.page_break_before),
            ("widctlpar", paragraph.widow_control),
            ("rtlpar", paragraph.right_to_left),
        ];
        for (word, set) in flags {
            if set {
                self.push_word(word, None);
            }
        }
        if let Some(level) = paragraph.outline_level {
            self.push_word("outlinelevel", Some(i32::from(level)));
        }
        if let Some(list) = paragraph.list {
            self.push_word("ls", Some(list.override_index));
            self.push_word("ilvl", Some(i32::from(list.level)));
        }
    }

    /// Character formatting relative to the defaults a reader starts from.
    fn push_formatting(&mut self, formatting: &Formatting) {
        if let Some(style) = formatting.style {
            self.push_word("cs", Some(i32::from(style)));
        }
        if formatting.font_ref != self.default_font {
            self.push_word("f", Some(i32::from(formatting.font_ref)));
        }
        if formatting.font_size.get() != 24 {
            self.push_word("fs", Some(i32::from(formatting.font_size.get())));
        }
        if formatting.color_ref != 0 {
            self.push_word("cf", Some(i32::from(formatting.color_ref)));
        }
        let colors = [
            ("cb", formatting.background_color),
            ("highlight", formatting.highlight_color),
            ("ulc", formatting.underline_color),
        ];
        for (word, color) in colors {
            if let Some(color) = color {
                self.push_word(word, Some(i32::from(color)));
            }
        }

        let toggles = [
            ("b", formatting.bold),
            ("i", formatting.italic),
            ("strike", formatting.strike),
            ("striked", formatting.double_strike),
            ("scaps", formatting.smallcaps),
            ("caps", formatting.all_caps),
            ("v", formatting.hidden),
            ("outl", formatting.outline),
            ("shad", formatting.shadow),
            ("embo", formatting.emboss),
            ("impr", formatting.imprint),
        ];
        for (word, set) in toggles {
            if set {
                self.push_word(word, None);
            }
        }
        if formatting.underline != UnderlineStyle::None {
            self.push_word(formatting.underline.control_word(), None);
        }
        match formatting.vertical {
            VerticalPosition::Baseline => {},
            VerticalPosition::Superscript => self.push_word("super", None),
            VerticalPosition::Subscript => self.push_word("sub", None),
        }

        if formatting.char_spacing != 0 {
            self.push_word("expndtw", Some(formatting.char_spacing));
        }
        if formatting.char_scale != 100 {
            self.push_word("charscalex", Some(formatting.char_scale));
        }
        if formatting.kerning != 0 {
            self.push_word("kerning", Some(formatting.kerning));
        }
        match formatting.baseline_offset {
            0 => {},
            offset if offset > 0 => self.push_word("up", Some(offset)),
            offset => self.push_word("dn", Some(offset.saturating_neg())),
        }
        if let Some(language) = formatting.language {
            self.push_word("lang", Some(i32::from(language)));
        }
    }

    fn push_word(&mut self, name: &str, parameter: Option<i32>) {
        match catalog::get(name) {
            Some(descriptor) => descriptor.encode_into(&mut self.buffer, parameter),
            None => {
                tracing::debug!(name, "writing uncatalogued control word");
                self.buffer.push(b'\\');
                self.buffer.extend_from_slice(name.as_bytes());
                if let Some(value) = parameter {
                    let mut digits = itoa::Buffer::new();
                    self.buffer.extend_from_slice(digits.format(value).as_bytes());
                }
                self.buffer.push(b' ');
            },
        }
    }

    /// `\*` followed by the word, unless the catalog already spells it with
    /// the ignorable prefix.
    fn push_ignorable(&mut self, name: &str, parameter: Option<i32>) {
        if !catalog::lookup(name).is_extended() {
            self.buffer.extend_from_slice(b"\\*");
        }
        self.push_word(name, parameter);
    }

    fn push_text(&mut self, text: &str, encoding: &'static Encoding) {
        for c in text.chars() {
            match c {
                '\\' | '{' | '}' => {
                    self.buffer.push(b'\\');
                    self.buffer.push(c as u8);
                },
                '\n' => self.push_word("par", None),
                '\t' => self.push_word("tab", None),
                '\u{2028}' => self.push_word("line", None),
                '\u{000C}' => self.push_word("page", None),
                '\r' => {},
                ' '..='~' => self.buffer.push(c as u8),
                c => self.push_char(c, encoding),
            }
        }
    }

    fn push_char(&mut self, c: char, encoding: &'static Encoding) {
        if encoding != UTF_8 && !c.is_ascii() {
            let mut utf8 = [0u8; 4];
            let (bytes, _, unmappable) = encoding.encode(c.encode_utf8(&mut utf8));
            if !unmappable {
                for &byte in bytes.iter() {
                    self.buffer.extend_from_slice(b"\\'");
                    push_hex(&mut self.buffer, byte);
                }
                return;
            }
        }

        let mut units = [0u16; 2];
        for &unit in c.encode_utf16(&mut units).iter() {
            // \u takes a signed 16-bit value
            let mut digits = itoa::Buffer::new();
            self.buffer.extend_from_slice(b"\\u");
            self.buffer
                .extend_from_slice(digits.format(unit as i16).as_bytes());
            self.buffer.push(b'?');
        }
    }

    /// Encoding for text in `font`: the font's own code page when its charset
    /// declares one, the document code page otherwise.
    fn run_encoding(&self, font: FontRef) -> &'static Encoding {
        self.font_code_pages
            .get(&font)
            .map_or(self.encoding, |&code_page| encoding_or_default(code_page))
    }

    #[inline]
    fn open_group(&mut self) {
        self.buffer.push(b'{');
    }

    #[inline]
    fn close_group(&mut self) {
        self.buffer.push(b'}');
    }

    #[inline]
    fn line_break(&mut self) {
        if self.options.line_breaks {
            self.buffer.extend_from_slice(b"\r\n");
        }
    }
}

fn push_hex(out: &mut Vec<u8>, byte: u8) {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";
    out.push(DIGITS[usize::from(byte >> 4)]);
    out.push(DIGITS[usize::from(byte & 0x0F)]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn written(f: impl FnOnce(&mut RtfWriter<&mut Vec<u8>>) -> RtfResult<()>) -> String {
        let mut out = Vec::new();
        let mut writer = RtfWriter::new(&mut out);
        f(&mut writer).unwrap();
        writer.flush().unwrap();
        drop(writer);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_control_words_use_catalog_affixes() {
        let result = written(|w| {
            w.write_control_word("b", None)?;
            w.write_control_word("fs", Some(28))?;
            w.write_control_word("listtable", None)?;
            w.write_control_word("~", None)?;
            w.write_control_word("foo", Some(3))
        });
        assert_eq!(result, "\\b \\fs28 \\*\\listtable \\~\\foo3 ");
    }

    #[test]
    fn test_text_escaping() {
        let result = written(|w| w.write_text("a{b}\\c\n\td\u{e9}\u{4e2d}\u{1F600}"));
        assert_eq!(
            result,
            "a\\{b\\}\\\\c\\par \\tab d\\'e9\\u20013?\\u-10179?\\u-8704?"
        );
    }

    #[test]
    fn test_text_in_other_code_page() {
        let mut out = Vec::new();
        let mut writer = RtfWriter::with_options(&mut out, WriterOptions::new().with_code_page(1251));
        writer.write_text("\u{41f}\u{e9}").unwrap();
        drop(writer);
        assert_eq!(out, b"\\'cf\\u233?");
    }

    #[test]
    fn test_section_break() {
        assert_eq!(written(|w| w.write_section_break()), "\\sect \\sectd ");
    }

    #[test]
    fn test_table_of_contents() {
        let toc = written(|w| w.write_table_of_contents(None));
        assert_eq!(
            toc,
            "{\\field {\\*\\fldinst TOC \\\\f \\\\h \\\\u \\\\o \"1-5\" }{\\fldrslt Update this field to build the table of contents.}}"
        );

        let custom = written(|w| w.write_table_of_contents(Some("Contents")));
        let doc = RtfDocument::parse(&format!("{{\\rtf1 {custom}\\par}}")).unwrap();
        assert_eq!(doc.text(), "Contents");
    }

    #[test]
    fn test_header_blocks() {
        let doc = RtfDocument::parse(r"{\rtf1\ansi{\info{\title T}{\*\password 1a2b}}x\par}").unwrap();
        let mut out = Vec::new();
        RtfWriter::new(&mut out).write_document(&doc).unwrap();
        let result = String::from_utf8(out).unwrap();

        assert!(result.starts_with("{\\rtf1 \\ansi \\ansicpg1252 \\deff0 \\deftab720 "));
        assert!(result.contains("{\\info {\\title T}{\\*\\password 1a2b}}"));
        assert!(result.contains(concat!("{\\*\\generator rtfkit ", env!("CARGO_PKG_VERSION"), ";}")));
        assert!(result.contains("\\ftnbj \\ftnstart1 \\ftnrscont \\ftnnar {\\*\\ftnsep \\chftnsep }"));
        assert!(result.ends_with("\\pard {x}\\par }"));
    }

    const ROUND_TRIP: &str = concat!(
        r"{\rtf1\ansi\ansicpg1252\deff0",
        r"{\fonttbl{\f0\froman\fcharset0 Times New Roman;}{\f1\fswiss\fcharset204\fprq2 Arial Cyr;}}",
        r"{\colortbl;\red255\green0\blue0;\red0\green0\blue255;}",
        r"{\stylesheet{\ql Normal;}{\s1\sbasedon0\snext0\qc\b\fs32 heading 1;}{\*\cs10\additive\i Emphasis;}}",
        r"{\*\listtable{\list\listtemplateid12\listhybrid{\listlevel\levelnfc0\leveljc0\levelfollow0\levelstartat1{\leveltext\'02\'00.;}{\levelnumbers\'01;}\fi-360\li720}{\listname Steps;}\listid3}}",
        r"{\*\listoverridetable{\listoverride\listid3\listoverridecount0\ls1}}",
        r"{\info{\title Caf\'e9 report}{\author Ann}{\creatim\yr2024\mo2\dy29\hr13\min5\sec7}{\nofpages2}}",
        r"\pard\s1\qc Heading\par",
        r"\pard\ls1\ilvl0\fi-360\li720 {\b Bold} plain {\f1 \'cf\'f0\'e8} \u8364? end\par",
        r"\trowd\trgaph108\trleft-108\cellx2000\cellx4000\pard\intbl A1\cell\pard\intbl {\i B1}\par second\cell\row",
        r"\pard\sb120\sa120\keepn {\ul\cf2 tab\tab and \{braces\} \\ slash}\par",
        r"{\pict\pngblip\picw4\pich4 89504e470d0a1a0a}",
        r"}"
    );

    #[test]
    fn test_round_trip() {
        let doc = RtfDocument::parse(ROUND_TRIP).unwrap();
        assert_eq!(doc.paragraphs().len(), 3);
        assert_eq!(doc.tables().len(), 1);

        let mut out = Vec::new();
        RtfWriter::with_options(&mut out, WriterOptions::new().with_generator(None).with_line_breaks(true))
            .write_document(&doc)
            .unwrap();
        let reread = RtfDocument::from_bytes(&out).unwrap();

        assert_eq!(reread.version(), Some(1));
        assert_eq!(reread.code_page(), Some(1252));
        assert_eq!(reread.fonts(), doc.fonts());
        assert_eq!(reread.colors(), doc.colors());
        assert_eq!(reread.stylesheet(), doc.stylesheet());
        assert_eq!(reread.lists(), doc.lists());
        assert_eq!(reread.list_overrides(), doc.list_overrides());
        assert_eq!(reread.info(), doc.info());
        assert_eq!(reread.pictures(), doc.pictures());
        assert_eq!(reread.elements(), doc.elements());
        assert_eq!(
            reread.text(),
            "Heading\nBold plain \u{41f}\u{440}\u{438} \u{20ac} end\nA1\tB1\nsecond\ntab\tand {braces} \\ slash"
        );
    }

    #[test]
    fn test_extreme_offsets_round_trip() {
        let doc = RtfDocument::parse(concat!(
            r"{\rtf1\trowd\trleft2147483000\pard\intbl A\cell B\cell\row",
            r"\pard {\up-2147483648\dn1 low} z\par}"
        ))
        .unwrap();
        let mut out = Vec::new();
        RtfWriter::new(&mut out).write_document(&doc).unwrap();
        let result = String::from_utf8_lossy(&out).into_owned();
        assert!(result.contains(r"\trleft2147483000 \cellx2147483647 \cellx2147483647 "));
        assert!(result.contains(r"\dn2147483647 low"));

        let reread = RtfDocument::from_bytes(&out).unwrap();
        assert_eq!(reread.tables()[0].rows()[0].cell_count(), 2);
        assert_eq!(reread.text(), doc.text());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_text_survives_writing(text in "[a-zA-Z0-9 {};.\\\\\u{e9}\u{20ac}\u{4e2d}\u{1F600}\t]{0,40}") {
            let mut out = b"{\\rtf1 ".to_vec();
            let mut writer = RtfWriter::new(&mut out);
            writer.write_text(&text).unwrap();
            drop(writer);
            out.push(b'}');

            let doc = RtfDocument::from_bytes(&out).unwrap();
            prop_assert_eq!(doc.text(), text);
        }
    }
}
