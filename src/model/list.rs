//! RTF list and numbering support.
//!
//! RTF uses a two-table system: the list table defines lists and their levels,
//! the list override table instantiates them. Paragraphs reference an override
//! by its 1-based `\ls` index.

use super::types::{Alignment, FontRef};

/// List level number format (`\levelnfc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListLevelType {
    /// Arabic numerals (1, 2, 3...)
    #[default]
    Decimal,
    /// Uppercase Roman numerals (I, II, III...)
    UpperRoman,
    /// Lowercase Roman numerals (i, ii, iii...)
    LowerRoman,
    /// Uppercase letters (A, B, C...)
    UpperLetter,
    /// Lowercase letters (a, b, c...)
    LowerLetter,
    /// Ordinal numbers (1st, 2nd, 3rd...)
    Ordinal,
    /// Cardinal text (One, Two, Three...)
    CardinalText,
    /// Ordinal text (First, Second, Third...)
    OrdinalText,
    /// Arabic numerals padded to two digits (01, 02...)
    DecimalZero,
    /// Bullet (•, ○, ■, etc.)
    Bullet,
    /// No numbering
    None,
    /// Any other `\levelnfc` value
    Other(i32),
}

impl ListLevelType {
    pub const fn from_nfc(value: i32) -> Self {
        match value {
            0 => ListLevelType::Decimal,
            1 => ListLevelType::UpperRoman,
            2 => ListLevelType::LowerRoman,
            3 => ListLevelType::UpperLetter,
            4 => ListLevelType::LowerLetter,
            5 => ListLevelType::Ordinal,
            6 => ListLevelType::CardinalText,
            7 => ListLevelType::OrdinalText,
            22 => ListLevelType::DecimalZero,
            23 => ListLevelType::Bullet,
            255 => ListLevelType::None,
            other => ListLevelType::Other(other),
        }
    }

    pub const fn nfc(self) -> i32 {
        match self {
            ListLevelType::Decimal => 0,
            ListLevelType::UpperRoman => 1,
            ListLevelType::LowerRoman => 2,
            ListLevelType::UpperLetter => 3,
            ListLevelType::LowerLetter => 4,
            ListLevelType::Ordinal => 5,
            ListLevelType::CardinalText => 6,
            ListLevelType::OrdinalText => 7,
            ListLevelType::DecimalZero => 22,
            ListLevelType::Bullet => 23,
            ListLevelType::None => 255,
            ListLevelType::Other(value) => value,
        }
    }
}

/// What follows the number (`\levelfollow`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFollow {
    #[default]
    Tab,
    Space,
    Nothing,
}

impl LevelFollow {
    pub const fn from_property(value: i32) -> Self {
        match value {
            1 => LevelFollow::Space,
            2 => LevelFollow::Nothing,
            _ => LevelFollow::Tab,
        }
    }

    pub const fn as_property(self) -> i32 {
        match self {
            LevelFollow::Tab => 0,
            LevelFollow::Space => 1,
            LevelFollow::Nothing => 2,
        }
    }
}

/// A single level in a list (for multi-level lists)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLevel {
    /// Level number (0-8, where 0 is the top level)
    pub level: u8,
    /// Level type (bullet, decimal, etc.)
    pub level_type: ListLevelType,
    /// `\leveltext` with its length prefix removed. Level placeholders are kept
    /// as the characters `\u{0}`..`\u{8}`.
    pub number_text: String,
    /// `\levelnumbers`: 1-based positions of the placeholders in `number_text`
    pub number_positions: Vec<u8>,
    /// Start value for numbering
    pub start_at: i32,
    /// Justification of the number
    pub justification: Alignment,
    /// What follows the number
    pub follow: LevelFollow,
    /// Legal numbering: previous levels shown as arabic numerals
    pub legal: bool,
    /// Do not restart after a higher level
    pub no_restart: bool,
    /// Font for the number/bullet
    pub font_ref: Option<FontRef>,
    /// Left indent of the level (in twips)
    pub indent: i32,
    /// First-line indent of the level (in twips, usually negative)
    pub first_line_indent: i32,
}

impl ListLevel {
    /// Create a new list level
    #[inline]
    pub fn new(level: u8) -> Self {
        Self {
            level,
            level_type: ListLevelType::default(),
            number_text: String::new(),
            number_positions: Vec::new(),
            start_at: 1,
            justification: Alignment::Left,
            follow: LevelFollow::default(),
            legal: false,
            no_restart: false,
            font_ref: None,
            indent: 0,
            first_line_indent: 0,
        }
    }

    /// Check if this level is a bullet
    #[inline]
    pub fn is_bullet(&self) -> bool {
        matches!(self.level_type, ListLevelType::Bullet)
    }

    /// Check if this level is numbered
    #[inline]
    pub fn is_numbered(&self) -> bool {
        !self.is_bullet() && self.level_type != ListLevelType::None
    }

    /// Render the number text for the given level counters, e.g. `"1.2."`.
    ///
    /// `counters[n]` is the current value of level `n`; missing counters
    /// render as their level's start value of 1. Only arabic rendering is
    /// done here.
    pub fn render(&self, counters: &[i32]) -> String {
        self.number_text
            .chars()
            .map(|c| match c as u32 {
                placeholder @ 0..=8 => {
                    let value = counters.get(placeholder as usize).copied().unwrap_or(1);
                    itoa::Buffer::new().format(value).to_string()
                },
                _ => c.to_string(),
            })
            .collect()
    }
}

impl Default for ListLevel {
    fn default() -> Self {
        Self::new(0)
    }
}

/// RTF list definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    /// Unique list identifier
    pub id: i32,
    /// List template ID
    pub template_id: Option<i32>,
    /// Whether this is a simple list (single level)
    pub simple: bool,
    /// Hybrid list (Word 2000 style)
    pub hybrid: bool,
    /// `\listname`
    pub name: Option<String>,
    /// List levels (up to 9 levels)
    pub levels: Vec<ListLevel>,
}

impl List {
    /// Create a new list
    #[inline]
    pub fn new(id: i32) -> Self {
        Self {
            id,
            template_id: None,
            simple: false,
            hybrid: false,
            name: None,
            levels: Vec::new(),
        }
    }

    /// Add a level to the list
    #[inline]
    pub fn add_level(&mut self, level: ListLevel) {
        self.levels.push(level);
    }

    /// Get a level by index
    #[inline]
    pub fn get_level(&self, level: u8) -> Option<&ListLevel> {
        self.levels.iter().find(|l| l.level == level)
    }

    /// Get the number of levels
    #[inline]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}

/// List override entry (instance of a list)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOverride {
    /// `\ls` index, 1-based
    pub index: i32,
    /// Original list ID this overrides
    pub list_id: i32,
    /// `\listoverridecount`
    pub override_count: i32,
}

impl ListOverride {
    /// Create a new list override
    #[inline]
    pub fn new(index: i32, list_id: i32) -> Self {
        Self {
            index,
            list_id,
            override_count: 0,
        }
    }
}

/// List table containing all list definitions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTable {
    lists: Vec<List>,
}

impl ListTable {
    /// Create a new list table
    #[inline]
    pub fn new() -> Self {
        Self { lists: Vec::new() }
    }

    /// Add a list to the table
    #[inline]
    pub fn add(&mut self, list: List) {
        self.lists.push(list);
    }

    /// Get a list by ID
    #[inline]
    pub fn get(&self, id: i32) -> Option<&List> {
        self.lists.iter().find(|l| l.id == id)
    }

    /// Get all lists
    #[inline]
    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

/// List override table containing list instances
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOverrideTable {
    overrides: Vec<ListOverride>,
}

impl ListOverrideTable {
    /// Create a new list override table
    #[inline]
    pub fn new() -> Self {
        Self {
            overrides: Vec::new(),
        }
    }

    /// Add a list override
    #[inline]
    pub fn add(&mut self, override_entry: ListOverride) {
        self.overrides.push(override_entry);
    }

    /// Get a list override by `\ls` index
    #[inline]
    pub fn get(&self, index: i32) -> Option<&ListOverride> {
        self.overrides.iter().find(|o| o.index == index)
    }

    /// Get all overrides
    #[inline]
    pub fn overrides(&self) -> &[ListOverride] {
        &self.overrides
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfc_mapping() {
        assert_eq!(ListLevelType::from_nfc(23), ListLevelType::Bullet);
        assert_eq!(ListLevelType::from_nfc(4), ListLevelType::LowerLetter);
        assert_eq!(ListLevelType::from_nfc(47).nfc(), 47);
        assert!(ListLevel {
            level_type: ListLevelType::Bullet,
            ..ListLevel::new(0)
        }
        .is_bullet());
    }

    #[test]
    fn test_render_number_text() {
        let level = ListLevel {
            number_text: "\u{0}.\u{1}.".to_string(),
            ..ListLevel::new(1)
        };
        assert_eq!(level.render(&[3, 2]), "3.2.");
        assert_eq!(level.render(&[]), "1.1.");
    }

    #[test]
    fn test_override_lookup() {
        let mut lists = ListTable::new();
        let mut list = List::new(42);
        list.add_level(ListLevel::new(0));
        lists.add(list);

        let mut overrides = ListOverrideTable::new();
        overrides.add(ListOverride::new(1, 42));

        let entry = overrides.get(1).unwrap();
        let list = lists.get(entry.list_id).unwrap();
        assert_eq!(list.level_count(), 1);
        assert!(list.get_level(0).is_some());
        assert!(overrides.get(2).is_none());
    }
}
