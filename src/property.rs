//! Formatting properties scoped by RTF groups.
//!
//! Every `{` copies the current [`PropertyTable`] and every `}` throws the copy
//! away, so the table is a small fixed-size `Copy` array indexed by
//! [`PropertyKey`] rather than a hash map. Unset keys read back as their
//! default value.

use std::fmt;

/// Reset scope of a property.
///
/// `\plain`, `\pard`, `\sectd` and `\trowd` each restore the defaults of one
/// group and leave the others alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyGroup {
    /// Character formatting, reset by `\plain`
    Character,
    /// Paragraph formatting, reset by `\pard`
    Paragraph,
    /// Section formatting, reset by `\sectd`
    Section,
    /// Table row definition, reset by `\trowd`
    TableRow,
    /// Document-wide settings from the header
    Document,
    /// Values local to a destination (font entries, colors, list levels, pictures)
    Destination,
    /// Parser bookkeeping (`\uc`, `\u`, `\bin`, `\*`)
    Scope,
}

/// A property value: RTF properties are either switches or integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyValue {
    /// On/off property
    Bool(bool),
    /// Numeric property (twips, half-points, indices, enumerations)
    Int(i32),
}

impl PropertyValue {
    /// Interpret the value as a switch. Non-zero integers are on.
    #[inline]
    pub const fn as_bool(self) -> bool {
        match self {
            PropertyValue::Bool(b) => b,
            PropertyValue::Int(n) => n != 0,
        }
    }

    /// Interpret the value as an integer. Switches read as 0 or 1.
    #[inline]
    pub const fn as_int(self) -> i32 {
        match self {
            PropertyValue::Bool(b) => b as i32,
            PropertyValue::Int(n) => n,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Int(n) => write!(f, "{}", n),
        }
    }
}

const fn int(value: i32) -> Option<PropertyValue> {
    Some(PropertyValue::Int(value))
}

macro_rules! property_keys {
    ($($(#[$meta:meta])* $variant:ident => $name:literal, $group:ident, $default:expr;)*) => {
        /// Identifies one formatting property.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum PropertyKey {
            $($(#[$meta])* $variant,)*
        }

        impl PropertyKey {
            /// Every key, in declaration order.
            pub const ALL: &'static [PropertyKey] = &[$(PropertyKey::$variant,)*];

            /// Number of distinct keys.
            pub const COUNT: usize = Self::ALL.len();

            /// Human-readable name of the property.
            pub const fn name(self) -> &'static str {
                match self {
                    $(PropertyKey::$variant => $name,)*
                }
            }

            /// Reset scope the property belongs to.
            pub const fn group(self) -> PropertyGroup {
                match self {
                    $(PropertyKey::$variant => PropertyGroup::$group,)*
                }
            }

            /// Value reported while the property is unset.
            pub const fn default_value(self) -> Option<PropertyValue> {
                match self {
                    $(PropertyKey::$variant => $default,)*
                }
            }
        }
    };
}

property_keys! {
    // Character formatting
    /// `\b`
    Bold => "bold", Character, None;
    /// `\i`
    Italic => "italic", Character, None;
    /// Underline style, see [`crate::model::UnderlineStyle`]
    Underline => "underline", Character, None;
    /// `\strike`
    Strike => "strike", Character, None;
    /// `\striked`
    DoubleStrike => "double strike", Character, None;
    /// 0 = baseline, 1 = `\super`, 2 = `\sub`; `\nosupersub` restores 0
    VerticalAlign => "vertical alignment", Character, int(0);
    /// `\scaps`
    SmallCaps => "small caps", Character, None;
    /// `\caps`
    AllCaps => "all caps", Character, None;
    /// `\v`
    Hidden => "hidden", Character, None;
    /// `\outl`
    Outline => "outline", Character, None;
    /// `\shad`
    Shadow => "shadow", Character, None;
    /// `\embo`
    Emboss => "emboss", Character, None;
    /// `\impr`
    Imprint => "imprint", Character, None;
    /// `\f`; falls back to the document default font when unset
    FontIndex => "font index", Character, None;
    /// `\fs`, in half-points
    FontSize => "font size", Character, int(24);
    /// `\cf`
    ForegroundColor => "foreground color", Character, int(0);
    /// `\cb` / `\chcbpat`
    BackgroundColor => "background color", Character, None;
    /// `\highlight`
    HighlightColor => "highlight color", Character, None;
    /// `\ulc`
    UnderlineColor => "underline color", Character, None;
    /// `\expnd` / `\expndtw`, in twips
    CharSpacing => "character spacing", Character, int(0);
    /// `\charscalex`, in percent
    CharScale => "character scale", Character, int(100);
    /// `\kerning`, in half-points
    Kerning => "kerning", Character, int(0);
    /// `\lang`
    Language => "language", Character, None;
    /// `\cs`
    CharacterStyle => "character style", Character, None;
    /// `\up`, in half-points
    RaisedBy => "raised by", Character, int(0);
    /// `\dn`, in half-points
    LoweredBy => "lowered by", Character, int(0);

    // Paragraph formatting
    /// Alignment, see [`crate::model::Alignment`]
    Alignment => "alignment", Paragraph, int(0);
    /// `\li`
    LeftIndent => "left indent", Paragraph, int(0);
    /// `\ri`
    RightIndent => "right indent", Paragraph, int(0);
    /// `\fi`
    FirstLineIndent => "first line indent", Paragraph, int(0);
    /// `\sb`
    SpaceBefore => "space before", Paragraph, int(0);
    /// `\sa`
    SpaceAfter => "space after", Paragraph, int(0);
    /// `\sl`
    LineSpacing => "line spacing", Paragraph, int(0);
    /// `\slmult`
    LineMultiple => "line multiple", Paragraph, None;
    /// `\keep`
    KeepTogether => "keep together", Paragraph, None;
    /// `\keepn`
    KeepWithNext => "keep with next", Paragraph, None;
    /// `\pagebb`
    PageBreakBefore => "page break before", Paragraph, None;
    /// `\widctlpar` / `\nowidctlpar`
    WidowControl => "widow control", Paragraph, None;
    /// `\intbl`
    InTable => "in table", Paragraph, None;
    /// `\itap`, table nesting level
    TableDepth => "table depth", Paragraph, None;
    /// `\s`
    ParagraphStyle => "paragraph style", Paragraph, None;
    /// `\ls`, 1-based list override index
    ListOverride => "list override", Paragraph, None;
    /// `\ilvl`
    ListLevel => "current list level", Paragraph, None;
    /// `\outlinelevel`
    OutlineLevel => "outline level", Paragraph, None;
    /// `\rtlpar` / `\ltrpar`
    RightToLeft => "right to left", Paragraph, None;

    // Section formatting
    /// `\cols`
    Columns => "columns", Section, int(1);
    /// Section break kind assigned by `\sbknone`, `\sbkcol`, `\sbkpage`, `\sbkeven`, `\sbkodd`
    SectionBreak => "section break", Section, int(2);
    /// `\pgnstarts`
    PageNumberStart => "page number start", Section, int(1);
    /// `\pgnrestart`
    PageNumberRestart => "page number restart", Section, None;
    /// `\lndscpsxn`
    SectionLandscape => "section landscape", Section, None;
    /// `\titlepg`
    TitlePage => "title page", Section, None;

    // Table rows
    /// `\trleft`
    RowLeft => "row left", TableRow, int(0);
    /// `\trgaph`
    RowGap => "row gap", TableRow, int(0);
    /// `\trrh`
    RowHeight => "row height", TableRow, int(0);
    /// `\trhdr`
    RowHeader => "row header", TableRow, None;
    /// `\trql`, `\trqc`, `\trqr`
    RowAlignment => "row alignment", TableRow, int(0);
    /// Last `\cellx` seen
    CellBoundary => "cell boundary", TableRow, None;

    // Document settings
    /// `\ansi`, `\mac`, `\pc`, `\pca`
    CharacterSet => "character set", Document, int(0);
    /// `\ansicpg`
    AnsiCodePage => "ANSI code page", Document, None;
    /// `\deff`
    DefaultFont => "default font", Document, int(0);
    /// `\deflang`
    DefaultLanguage => "default language", Document, None;
    /// `\deftab`
    DefaultTab => "default tab width", Document, int(720);
    /// `\paperw`
    PaperWidth => "paper width", Document, int(12240);
    /// `\paperh`
    PaperHeight => "paper height", Document, int(15840);
    /// `\margl`
    MarginLeft => "left margin", Document, int(1800);
    /// `\margr`
    MarginRight => "right margin", Document, int(1800);
    /// `\margt`
    MarginTop => "top margin", Document, int(1440);
    /// `\margb`
    MarginBottom => "bottom margin", Document, int(1440);
    /// `\gutter`
    Gutter => "gutter", Document, int(0);
    /// `\landscape`
    Landscape => "landscape", Document, None;
    /// `\facingp`
    FacingPages => "facing pages", Document, None;
    /// `\ftnstart`
    FootnoteStart => "footnote start", Document, int(1);

    // Destination-local values
    /// Font family assigned by `\fnil`, `\froman`, `\fswiss`, ...
    FontFamily => "font family", Destination, int(0);
    /// `\fcharset`
    FontCharset => "font charset", Destination, None;
    /// `\fprq`
    FontPitch => "font pitch", Destination, None;
    /// `\cpg`
    FontCodePage => "font code page", Destination, None;
    /// `\red`
    ColorRed => "red", Destination, None;
    /// `\green`
    ColorGreen => "green", Destination, None;
    /// `\blue`
    ColorBlue => "blue", Destination, None;
    /// `\listid`
    ListId => "list id", Destination, None;
    /// `\listtemplateid`
    ListTemplateId => "list template id", Destination, None;
    /// `\listsimple`
    ListSimple => "list simple", Destination, None;
    /// `\listhybrid`
    ListHybrid => "list hybrid", Destination, None;
    /// `\levelnfc` / `\levelnfcn`
    LevelNumberFormat => "level number format", Destination, int(0);
    /// `\levelstartat`
    LevelStartAt => "level start at", Destination, int(1);
    /// `\leveljc` / `\leveljcn`
    LevelJustification => "level justification", Destination, int(0);
    /// `\levelfollow`
    LevelFollow => "level follow", Destination, int(0);
    /// `\levellegal`
    LevelLegal => "level legal", Destination, None;
    /// `\levelnorestart`
    LevelNoRestart => "level no restart", Destination, None;
    /// `\listoverridecount`
    ListOverrideCount => "list override count", Destination, int(0);
    /// `\sbasedon`
    BasedOn => "based on", Destination, None;
    /// `\snext`
    NextStyle => "next style", Destination, None;
    /// `\ds`
    SectionStyle => "section style", Destination, None;
    /// `\ts`
    TableStyle => "table style", Destination, None;
    /// `\additive`
    AdditiveStyle => "additive style", Destination, None;
    /// `\shidden`
    HiddenStyle => "hidden style", Destination, None;
    /// Picture format assigned by `\emfblip`, `\pngblip`, `\jpegblip`, ...
    PictureFormat => "picture format", Destination, int(0);
    /// `\picw`
    PictureWidth => "picture width", Destination, None;
    /// `\pich`
    PictureHeight => "picture height", Destination, None;
    /// `\picwgoal`
    PictureGoalWidth => "picture goal width", Destination, None;
    /// `\pichgoal`
    PictureGoalHeight => "picture goal height", Destination, None;
    /// `\picscalex`
    PictureScaleX => "picture scale x", Destination, None;
    /// `\picscaley`
    PictureScaleY => "picture scale y", Destination, None;

    // Parser bookkeeping
    /// `\uc`, fallback bytes skipped after each `\u`
    UnicodeSkip => "unicode skip", Scope, int(1);
    /// `\u`, last Unicode code unit seen
    UnicodeChar => "unicode character", Scope, None;
    /// `\bin`, length of the last binary blob
    BinaryLength => "binary length", Scope, None;
    /// `\*`, set until the next control word is dispatched
    IgnorableDestination => "ignorable destination", Scope, None;
}

/// Property values of one group.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PropertyTable {
    values: [Option<PropertyValue>; PropertyKey::COUNT],
}

impl PropertyTable {
    /// Create a table with every property unset.
    #[inline]
    pub const fn new() -> Self {
        Self {
            values: [None; PropertyKey::COUNT],
        }
    }

    /// Value of a property, falling back to its default when unset.
    #[inline]
    pub fn get(&self, key: PropertyKey) -> Option<PropertyValue> {
        self.values[key as usize].or(key.default_value())
    }

    /// Whether a property was explicitly set in this table.
    #[inline]
    pub fn is_set(&self, key: PropertyKey) -> bool {
        self.values[key as usize].is_some()
    }

    /// Set a property.
    #[inline]
    pub fn set(&mut self, key: PropertyKey, value: PropertyValue) {
        self.values[key as usize] = Some(value);
    }

    /// Unset a property so it reads back as its default.
    #[inline]
    pub fn clear(&mut self, key: PropertyKey) {
        self.values[key as usize] = None;
    }

    /// Read a switch; unset switches without a default are off.
    #[inline]
    pub fn flag(&self, key: PropertyKey) -> bool {
        self.get(key).is_some_and(PropertyValue::as_bool)
    }

    /// Read an integer property.
    #[inline]
    pub fn int(&self, key: PropertyKey) -> Option<i32> {
        self.get(key).map(PropertyValue::as_int)
    }

    /// Read an integer property with a fallback.
    #[inline]
    pub fn int_or(&self, key: PropertyKey, fallback: i32) -> i32 {
        self.int(key).unwrap_or(fallback)
    }

    /// Unset every property belonging to `group`.
    pub fn reset_group(&mut self, group: PropertyGroup) {
        for &key in PropertyKey::ALL {
            if key.group() == group {
                self.values[key as usize] = None;
            }
        }
    }

    /// Explicitly set properties, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyKey, PropertyValue)> + '_ {
        PropertyKey::ALL
            .iter()
            .filter_map(|&key| self.values[key as usize].map(|value| (key, value)))
    }
}

impl Default for PropertyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PropertyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(key, value)| (key.name(), value)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_until_set() {
        let mut table = PropertyTable::new();
        assert_eq!(table.int(PropertyKey::FontSize), Some(24));
        assert!(!table.is_set(PropertyKey::FontSize));
        assert!(!table.flag(PropertyKey::Bold));
        assert_eq!(table.int(PropertyKey::FontIndex), None);

        table.set(PropertyKey::FontSize, PropertyValue::Int(32));
        assert_eq!(table.int(PropertyKey::FontSize), Some(32));

        table.clear(PropertyKey::FontSize);
        assert_eq!(table.int(PropertyKey::FontSize), Some(24));
    }

    #[test]
    fn test_reset_group_only_touches_group() {
        let mut table = PropertyTable::new();
        table.set(PropertyKey::Bold, PropertyValue::Bool(true));
        table.set(PropertyKey::LeftIndent, PropertyValue::Int(720));
        table.set(PropertyKey::AnsiCodePage, PropertyValue::Int(1251));

        table.reset_group(PropertyGroup::Character);
        assert!(!table.flag(PropertyKey::Bold));
        assert_eq!(table.int(PropertyKey::LeftIndent), Some(720));
        assert_eq!(table.int(PropertyKey::AnsiCodePage), Some(1251));

        table.reset_group(PropertyGroup::Paragraph);
        assert_eq!(table.int(PropertyKey::LeftIndent), Some(0));
    }

    #[test]
    fn test_value_coercions() {
        assert!(PropertyValue::Int(2).as_bool());
        assert!(!PropertyValue::Int(0).as_bool());
        assert_eq!(PropertyValue::Bool(true).as_int(), 1);
    }

    #[test]
    fn test_keys_are_indexed_densely() {
        for (i, key) in PropertyKey::ALL.iter().enumerate() {
            assert_eq!(*key as usize, i);
        }
        assert_eq!(PropertyKey::COUNT, PropertyKey::ALL.len());
        assert_eq!(PropertyKey::ListLevel.name(), "current list level");
    }

    #[test]
    fn test_debug_lists_only_set_entries() {
        let mut table = PropertyTable::new();
        table.set(PropertyKey::Italic, PropertyValue::Bool(true));
        assert_eq!(format!("{:?}", table), "{\"italic\": Bool(true)}");
    }
}
