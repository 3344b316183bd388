//! Formatting and content types of an interpreted RTF document.

use crate::property::{PropertyKey, PropertyTable};
use std::collections::BTreeMap;
use std::num::NonZeroU16;

/// Font reference (index into font table).
pub type FontRef = u16;

/// Color reference (index into color table).
pub type ColorRef = u16;

/// Style reference (`\s`, `\cs`, `\ds`, `\ts` number).
pub type StyleRef = u16;

/// RTF color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    /// Red component (0-255)
    pub red: u8,
    /// Green component (0-255)
    pub green: u8,
    /// Blue component (0-255)
    pub blue: u8,
}

impl Color {
    /// Create a new color.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Black color.
    #[inline]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// White color.
    #[inline]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }
}

/// Color table containing document colors.
///
/// An entry of `None` is the "auto" color, which RTF writes as an empty
/// entry (usually the first one).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTable {
    colors: Vec<Option<Color>>,
}

impl ColorTable {
    /// Create a new color table.
    #[inline]
    pub fn new() -> Self {
        Self { colors: Vec::new() }
    }

    /// Add a color to the table and return its index.
    #[inline]
    pub fn add(&mut self, color: Color) -> ColorRef {
        self.push(Some(color))
    }

    /// Add the auto color and return its index.
    #[inline]
    pub fn add_auto(&mut self) -> ColorRef {
        self.push(None)
    }

    fn push(&mut self, entry: Option<Color>) -> ColorRef {
        let index = self.colors.len() as ColorRef;
        self.colors.push(entry);
        index
    }

    /// Get a color by reference. The auto color reads as `None`.
    #[inline]
    pub fn get(&self, color_ref: ColorRef) -> Option<&Color> {
        self.colors.get(color_ref as usize).and_then(Option::as_ref)
    }

    /// Whether the entry at `color_ref` is the auto color.
    #[inline]
    pub fn is_auto(&self, color_ref: ColorRef) -> bool {
        matches!(self.colors.get(color_ref as usize), Some(None))
    }

    /// All entries, in table order.
    #[inline]
    pub fn entries(&self) -> &[Option<Color>] {
        &self.colors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Font family categories (`\fnil` .. `\fbidi`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    /// Nil (unknown or default)
    #[default]
    Nil,
    /// Roman (serif) fonts
    Roman,
    /// Swiss (sans-serif) fonts
    Swiss,
    /// Modern (monospace) fonts
    Modern,
    /// Script fonts
    Script,
    /// Decorative fonts
    Decor,
    /// Technical, symbol, and mathematical fonts
    Tech,
    /// Arabic, Hebrew, or other bidirectional fonts
    Bidi,
}

impl FontFamily {
    /// Map the font-family property value to a family.
    pub const fn from_property(value: i32) -> Self {
        match value {
            1 => FontFamily::Roman,
            2 => FontFamily::Swiss,
            3 => FontFamily::Modern,
            4 => FontFamily::Script,
            5 => FontFamily::Decor,
            6 => FontFamily::Tech,
            7 => FontFamily::Bidi,
            _ => FontFamily::Nil,
        }
    }

    /// Control word naming this family.
    pub const fn control_word(self) -> &'static str {
        match self {
            FontFamily::Nil => "fnil",
            FontFamily::Roman => "froman",
            FontFamily::Swiss => "fswiss",
            FontFamily::Modern => "fmodern",
            FontFamily::Script => "fscript",
            FontFamily::Decor => "fdecor",
            FontFamily::Tech => "ftech",
            FontFamily::Bidi => "fbidi",
        }
    }
}

/// Font definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Font {
    /// Font name
    pub name: String,
    /// Font family category
    pub family: FontFamily,
    /// `\fcharset` value
    pub charset: Option<u8>,
    /// `\fprq` pitch (0 default, 1 fixed, 2 variable)
    pub pitch: Option<u8>,
    /// `\cpg` code page
    pub code_page: Option<u32>,
}

impl Font {
    /// Create a new font.
    #[inline]
    pub fn new(name: impl Into<String>, family: FontFamily) -> Self {
        Self {
            name: name.into(),
            family,
            ..Self::default()
        }
    }

    /// Set the character set.
    #[inline]
    pub fn with_charset(mut self, charset: u8) -> Self {
        self.charset = Some(charset);
        self
    }

    /// Code page text in this font is encoded in, if it declares one.
    pub fn effective_code_page(&self) -> Option<u32> {
        self.code_page.or_else(|| {
            self.charset
                .and_then(|charset| crate::encoding::charset_to_codepage(i32::from(charset)))
        })
    }
}

/// Font table containing document fonts, keyed by `\fN`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontTable {
    fonts: BTreeMap<FontRef, Font>,
}

impl FontTable {
    /// Create a new font table.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a font to the table at a specific index, replacing any earlier one.
    #[inline]
    pub fn insert(&mut self, index: FontRef, font: Font) {
        self.fonts.insert(index, font);
    }

    /// Get a font by reference.
    #[inline]
    pub fn get(&self, font_ref: FontRef) -> Option<&Font> {
        self.fonts.get(&font_ref)
    }

    /// Fonts in index order.
    pub fn iter(&self) -> impl Iterator<Item = (FontRef, &Font)> {
        self.fonts.iter().map(|(&index, font)| (index, font))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Left-aligned
    #[default]
    Left,
    /// Right-aligned
    Right,
    /// Centered
    Center,
    /// Justified
    Justify,
    /// Distributed
    Distributed,
}

impl Alignment {
    pub const fn from_property(value: i32) -> Self {
        match value {
            1 => Alignment::Right,
            2 => Alignment::Center,
            3 => Alignment::Justify,
            4 => Alignment::Distributed,
            _ => Alignment::Left,
        }
    }

    /// Control word selecting this alignment.
    pub const fn control_word(self) -> &'static str {
        match self {
            Alignment::Left => "ql",
            Alignment::Right => "qr",
            Alignment::Center => "qc",
            Alignment::Justify => "qj",
            Alignment::Distributed => "qd",
        }
    }
}

/// Spacing information for paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spacing {
    /// Space before paragraph (in twips, 1/20th of a point)
    pub before: i32,
    /// Space after paragraph (in twips)
    pub after: i32,
    /// Line spacing (in twips)
    pub line: i32,
    /// Line spacing multiplier
    pub line_multiple: bool,
}

/// Indentation information for paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Indentation {
    /// Left indent (in twips)
    pub left: i32,
    /// Right indent (in twips)
    pub right: i32,
    /// First line indent (in twips)
    pub first_line: i32,
}

/// Membership of a paragraph in a list: `\lsN\ilvlM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMembership {
    /// `\ls` index into the list override table
    pub override_index: i32,
    /// `\ilvl` level, 0-based
    pub level: u8,
}

/// Paragraph properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Paragraph {
    /// Text alignment
    pub alignment: Alignment,
    /// Spacing
    pub spacing: Spacing,
    /// Indentation
    pub indentation: Indentation,
    /// Keep paragraph on one page
    pub keep_together: bool,
    /// Keep with next paragraph
    pub keep_next: bool,
    /// Page break before
    pub page_break_before: bool,
    /// Widow/orphan control
    pub widow_control: bool,
    /// Right-to-left paragraph
    pub right_to_left: bool,
    /// Paragraph style (`\s`)
    pub style: Option<StyleRef>,
    /// Outline level (`\outlinelevel`)
    pub outline_level: Option<u8>,
    /// List membership
    pub list: Option<ListMembership>,
    /// Whether the paragraph is part of a table
    pub in_table: bool,
}

impl Paragraph {
    /// Snapshot the paragraph properties in effect.
    pub fn from_properties(properties: &PropertyTable) -> Self {
        let list = properties
            .int(PropertyKey::ListOverride)
            .map(|override_index| ListMembership {
                override_index,
                level: properties.int_or(PropertyKey::ListLevel, 0).clamp(0, 8) as u8,
            });

        Self {
            alignment: Alignment::from_property(properties.int_or(PropertyKey::Alignment, 0)),
            spacing: Spacing {
                before: properties.int_or(PropertyKey::SpaceBefore, 0),
                after: properties.int_or(PropertyKey::SpaceAfter, 0),
                line: properties.int_or(PropertyKey::LineSpacing, 0),
                line_multiple: properties.flag(PropertyKey::LineMultiple),
            },
            indentation: Indentation {
                left: properties.int_or(PropertyKey::LeftIndent, 0),
                right: properties.int_or(PropertyKey::RightIndent, 0),
                first_line: properties.int_or(PropertyKey::FirstLineIndent, 0),
            },
            keep_together: properties.flag(PropertyKey::KeepTogether),
            keep_next: properties.flag(PropertyKey::KeepWithNext),
            page_break_before: properties.flag(PropertyKey::PageBreakBefore),
            widow_control: properties.flag(PropertyKey::WidowControl),
            right_to_left: properties.flag(PropertyKey::RightToLeft),
            style: properties
                .int(PropertyKey::ParagraphStyle)
                .and_then(|s| StyleRef::try_from(s).ok()),
            outline_level: properties
                .int(PropertyKey::OutlineLevel)
                .and_then(|l| u8::try_from(l).ok()),
            list,
            in_table: properties.flag(PropertyKey::InTable),
        }
    }
}

/// Underline style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnderlineStyle {
    /// No underline
    #[default]
    None,
    /// Single underline
    Single,
    /// Double underline
    Double,
    /// Dotted underline
    Dotted,
    /// Dashed underline
    Dashed,
    /// Dash-dot underline
    DashDot,
    /// Dash-dot-dot underline
    DashDotDot,
    /// Word-only underline
    Words,
    /// Thick underline
    Thick,
    /// Wave underline
    Wave,
}

impl UnderlineStyle {
    pub const fn from_property(value: i32) -> Self {
        match value {
            0 => UnderlineStyle::None,
            2 => UnderlineStyle::Double,
            3 => UnderlineStyle::Dotted,
            4 => UnderlineStyle::Dashed,
            5 => UnderlineStyle::DashDot,
            6 => UnderlineStyle::DashDotDot,
            7 => UnderlineStyle::Words,
            8 => UnderlineStyle::Thick,
            9 => UnderlineStyle::Wave,
            _ => UnderlineStyle::Single,
        }
    }

    /// Control word selecting this style.
    pub const fn control_word(self) -> &'static str {
        match self {
            UnderlineStyle::None => "ulnone",
            UnderlineStyle::Single => "ul",
            UnderlineStyle::Double => "uldb",
            UnderlineStyle::Dotted => "uld",
            UnderlineStyle::Dashed => "uldash",
            UnderlineStyle::DashDot => "uldashd",
            UnderlineStyle::DashDotDot => "uldashdd",
            UnderlineStyle::Words => "ulw",
            UnderlineStyle::Thick => "ulth",
            UnderlineStyle::Wave => "ulwave",
        }
    }
}

/// Vertical position of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalPosition {
    #[default]
    Baseline,
    Superscript,
    Subscript,
}

const DEFAULT_FONT_SIZE: NonZeroU16 = match NonZeroU16::new(24) {
    Some(size) => size,
    None => NonZeroU16::MIN,
};

/// Character formatting properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatting {
    /// Font reference
    pub font_ref: FontRef,
    /// Font size in half-points
    pub font_size: NonZeroU16,
    /// Color reference
    pub color_ref: ColorRef,
    /// Background color reference
    pub background_color: Option<ColorRef>,
    /// Highlight color reference
    pub highlight_color: Option<ColorRef>,
    /// Underline color reference
    pub underline_color: Option<ColorRef>,
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Underline style
    pub underline: UnderlineStyle,
    /// Strikethrough
    pub strike: bool,
    /// Double strikethrough
    pub double_strike: bool,
    /// Superscript / subscript
    pub vertical: VerticalPosition,
    /// Small caps
    pub smallcaps: bool,
    /// All caps
    pub all_caps: bool,
    /// Hidden text
    pub hidden: bool,
    /// Outline
    pub outline: bool,
    /// Shadow
    pub shadow: bool,
    /// Emboss
    pub emboss: bool,
    /// Engrave (imprint)
    pub imprint: bool,
    /// Character spacing (in twips)
    pub char_spacing: i32,
    /// Horizontal scaling (percentage)
    pub char_scale: i32,
    /// Kerning (in half-points)
    pub kerning: i32,
    /// Baseline offset in half-points (`\up` minus `\dn`)
    pub baseline_offset: i32,
    /// Language id
    pub language: Option<u16>,
    /// Character style (`\cs`)
    pub style: Option<StyleRef>,
}

impl Default for Formatting {
    fn default() -> Self {
        Self {
            font_ref: 0,
            font_size: DEFAULT_FONT_SIZE,
            color_ref: 0,
            background_color: None,
            highlight_color: None,
            underline_color: None,
            bold: false,
            italic: false,
            underline: UnderlineStyle::default(),
            strike: false,
            double_strike: false,
            vertical: VerticalPosition::default(),
            smallcaps: false,
            all_caps: false,
            hidden: false,
            outline: false,
            shadow: false,
            emboss: false,
            imprint: false,
            char_spacing: 0,
            char_scale: 100,
            kerning: 0,
            baseline_offset: 0,
            language: None,
            style: None,
        }
    }
}

fn color_ref(properties: &PropertyTable, key: PropertyKey) -> Option<ColorRef> {
    properties.int(key).and_then(|c| ColorRef::try_from(c).ok())
}

impl Formatting {
    /// Snapshot the character properties in effect. Without an explicit
    /// `\f`, the document default font (`\deff`) applies.
    pub fn from_properties(properties: &PropertyTable) -> Self {
        let font = properties
            .int(PropertyKey::FontIndex)
            .unwrap_or_else(|| properties.int_or(PropertyKey::DefaultFont, 0));
        let size = properties.int_or(PropertyKey::FontSize, 24).clamp(1, i32::from(u16::MAX));
        let vertical = match properties.int_or(PropertyKey::VerticalAlign, 0) {
            1 => VerticalPosition::Superscript,
            2 => VerticalPosition::Subscript,
            _ => VerticalPosition::Baseline,
        };

        Self {
            font_ref: FontRef::try_from(font).unwrap_or(0),
            font_size: NonZeroU16::new(size as u16).unwrap_or(DEFAULT_FONT_SIZE),
            color_ref: color_ref(properties, PropertyKey::ForegroundColor).unwrap_or(0),
            background_color: color_ref(properties, PropertyKey::BackgroundColor),
            highlight_color: color_ref(properties, PropertyKey::HighlightColor).filter(|&c| c != 0),
            underline_color: color_ref(properties, PropertyKey::UnderlineColor),
            bold: properties.flag(PropertyKey::Bold),
            italic: properties.flag(PropertyKey::Italic),
            underline: properties
                .int(PropertyKey::Underline)
                .map_or(UnderlineStyle::None, UnderlineStyle::from_property),
            strike: properties.flag(PropertyKey::Strike),
            double_strike: properties.flag(PropertyKey::DoubleStrike),
            vertical,
            smallcaps: properties.flag(PropertyKey::SmallCaps),
            all_caps: properties.flag(PropertyKey::AllCaps),
            hidden: properties.flag(PropertyKey::Hidden),
            outline: properties.flag(PropertyKey::Outline),
            shadow: properties.flag(PropertyKey::Shadow),
            emboss: properties.flag(PropertyKey::Emboss),
            imprint: properties.flag(PropertyKey::Imprint),
            char_spacing: properties.int_or(PropertyKey::CharSpacing, 0),
            char_scale: properties.int_or(PropertyKey::CharScale, 100),
            kerning: properties.int_or(PropertyKey::Kerning, 0),
            baseline_offset: properties
                .int_or(PropertyKey::RaisedBy, 0)
                .saturating_sub(properties.int_or(PropertyKey::LoweredBy, 0)),
            language: properties
                .int(PropertyKey::Language)
                .and_then(|l| u16::try_from(l).ok()),
            style: properties
                .int(PropertyKey::CharacterStyle)
                .and_then(|s| StyleRef::try_from(s).ok()),
        }
    }

    /// Font size in points.
    #[inline]
    pub fn font_size_points(&self) -> f32 {
        f32::from(self.font_size.get()) / 2.0
    }
}

/// A text run with formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    /// Text content
    pub text: String,
    /// Character formatting
    pub formatting: Formatting,
}

impl Run {
    /// Create a new run.
    #[inline]
    pub fn new(text: impl Into<String>, formatting: Formatting) -> Self {
        Self {
            text: text.into(),
            formatting,
        }
    }

    /// Get the text content.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn bold(&self) -> bool {
        self.formatting.bold
    }

    #[inline]
    pub fn italic(&self) -> bool {
        self.formatting.italic
    }

    /// Check if this run has strikethrough.
    #[inline]
    pub fn strikethrough(&self) -> bool {
        self.formatting.strike || self.formatting.double_strike
    }

    /// Check if this run has underline.
    #[inline]
    pub fn underline(&self) -> bool {
        !matches!(self.formatting.underline, UnderlineStyle::None)
    }

    #[inline]
    pub fn vertical_position(&self) -> VerticalPosition {
        self.formatting.vertical
    }
}

/// A paragraph with content (runs).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphContent {
    /// Paragraph properties (alignment, spacing, indentation)
    pub properties: Paragraph,
    /// Runs contained in this paragraph
    pub runs: Vec<Run>,
}

impl ParagraphContent {
    /// Create a new paragraph with content.
    #[inline]
    pub fn new(properties: Paragraph, runs: Vec<Run>) -> Self {
        Self { properties, runs }
    }

    /// Get the text content of the paragraph.
    #[inline]
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Get the runs in this paragraph.
    #[inline]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Append text, extending the last run when formatting matches.
    pub fn push_text(&mut self, text: &str, formatting: Formatting) {
        if text.is_empty() {
            return;
        }
        match self.runs.last_mut() {
            Some(last) if last.formatting == formatting => last.text.push_str(text),
            _ => self.runs.push(Run::new(text, formatting)),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.is_empty())
    }
}

/// Document element - either a paragraph or a table.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentElement {
    /// A paragraph with formatted runs
    Paragraph(ParagraphContent),
    /// A table with rows and cells
    Table(super::table::Table),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyValue;

    #[test]
    fn test_formatting_from_properties() {
        let mut props = PropertyTable::new();
        props.set(PropertyKey::Bold, PropertyValue::Bool(true));
        props.set(PropertyKey::FontSize, PropertyValue::Int(32));
        props.set(PropertyKey::Underline, PropertyValue::Bool(true));
        props.set(PropertyKey::VerticalAlign, PropertyValue::Int(1));
        props.set(PropertyKey::DefaultFont, PropertyValue::Int(3));

        let fmt = Formatting::from_properties(&props);
        assert!(fmt.bold);
        assert!(!fmt.italic);
        assert_eq!(fmt.font_size.get(), 32);
        assert_eq!(fmt.font_size_points(), 16.0);
        assert_eq!(fmt.underline, UnderlineStyle::Single);
        assert_eq!(fmt.vertical, VerticalPosition::Superscript);
        assert_eq!(fmt.font_ref, 3);

        props.set(PropertyKey::FontIndex, PropertyValue::Int(1));
        props.set(PropertyKey::Underline, PropertyValue::Int(2));
        let fmt = Formatting::from_properties(&props);
        assert_eq!(fmt.font_ref, 1);
        assert_eq!(fmt.underline, UnderlineStyle::Double);
    }

    #[test]
    fn test_baseline_offset_saturates() {
        let mut props = PropertyTable::new();
        props.set(PropertyKey::LoweredBy, PropertyValue::Int(i32::MIN));
        assert_eq!(Formatting::from_properties(&props).baseline_offset, i32::MAX);

        props.set(PropertyKey::RaisedBy, PropertyValue::Int(i32::MIN));
        props.set(PropertyKey::LoweredBy, PropertyValue::Int(1));
        assert_eq!(Formatting::from_properties(&props).baseline_offset, i32::MIN);

        let doc = crate::RtfDocument::parse(r"{\rtf1\dn-2147483648 x\par}").unwrap();
        assert_eq!(doc.paragraphs()[0].runs()[0].formatting.baseline_offset, i32::MAX);
    }

    #[test]
    fn test_default_formatting_matches_empty_table() {
        assert_eq!(Formatting::from_properties(&PropertyTable::new()), Formatting::default());
        assert_eq!(Paragraph::from_properties(&PropertyTable::new()), Paragraph::default());
    }

    #[test]
    fn test_paragraph_list_membership() {
        let mut props = PropertyTable::new();
        props.set(PropertyKey::ListOverride, PropertyValue::Int(2));
        props.set(PropertyKey::ListLevel, PropertyValue::Int(1));
        props.set(PropertyKey::Alignment, PropertyValue::Int(3));
        let para = Paragraph::from_properties(&props);
        assert_eq!(
            para.list,
            Some(ListMembership {
                override_index: 2,
                level: 1
            })
        );
        assert_eq!(para.alignment, Alignment::Justify);
    }

    #[test]
    fn test_color_table_auto() {
        let mut table = ColorTable::new();
        assert_eq!(table.add_auto(), 0);
        assert_eq!(table.add(Color::new(255, 0, 0)), 1);
        assert!(table.is_auto(0));
        assert_eq!(table.get(0), None);
        assert_eq!(table.get(1), Some(&Color::new(255, 0, 0)));
    }

    #[test]
    fn test_run_merging() {
        let mut para = ParagraphContent::default();
        let bold = Formatting {
            bold: true,
            ..Formatting::default()
        };
        para.push_text("Hello", bold);
        para.push_text(", ", bold);
        para.push_text("World", Formatting::default());
        assert_eq!(para.runs().len(), 2);
        assert_eq!(para.text(), "Hello, World");
    }

    #[test]
    fn test_font_code_page() {
        let font = Font::new("SimSun", FontFamily::Nil).with_charset(134);
        assert_eq!(font.effective_code_page(), Some(936));
        assert_eq!(Font::new("Arial", FontFamily::Swiss).effective_code_page(), None);
    }
}
