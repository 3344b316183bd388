//! RTF stylesheet support.

use super::types::{Formatting, Paragraph, StyleRef};

/// Style type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleType {
    /// Paragraph style (`\s`, or no number at all)
    #[default]
    Paragraph,
    /// Character style (`\cs`)
    Character,
    /// Section style (`\ds`)
    Section,
    /// Table style (`\ts`)
    Table,
}

impl StyleType {
    /// Control word that numbers a style of this type.
    pub const fn control_word(self) -> &'static str {
        match self {
            StyleType::Paragraph => "s",
            StyleType::Character => "cs",
            StyleType::Section => "ds",
            StyleType::Table => "ts",
        }
    }
}

/// RTF style definition
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Style number
    pub id: StyleRef,
    /// Style name
    pub name: String,
    /// Style type
    pub style_type: StyleType,
    /// Based-on style ID (parent style)
    pub based_on: Option<StyleRef>,
    /// Next style ID (style for next paragraph)
    pub next_style: Option<StyleRef>,
    /// Character formatting
    pub formatting: Formatting,
    /// Paragraph properties (for paragraph styles)
    pub paragraph: Option<Paragraph>,
    /// `\additive`
    pub additive: bool,
    /// Whether this style is hidden
    pub hidden: bool,
}

impl Style {
    /// Create a style of the given type with default formatting.
    pub fn new(id: StyleRef, name: impl Into<String>, style_type: StyleType) -> Self {
        Self {
            id,
            name: name.into(),
            style_type,
            based_on: None,
            next_style: None,
            formatting: Formatting::default(),
            paragraph: (style_type == StyleType::Paragraph).then(Paragraph::default),
            additive: false,
            hidden: false,
        }
    }

    /// Create a new paragraph style
    #[inline]
    pub fn paragraph(id: StyleRef, name: impl Into<String>) -> Self {
        Self::new(id, name, StyleType::Paragraph)
    }

    /// Create a new character style
    #[inline]
    pub fn character(id: StyleRef, name: impl Into<String>) -> Self {
        Self::new(id, name, StyleType::Character)
    }

    /// Check if this is a paragraph style
    #[inline]
    pub fn is_paragraph_style(&self) -> bool {
        self.style_type == StyleType::Paragraph
    }

    /// Check if this is a character style
    #[inline]
    pub fn is_character_style(&self) -> bool {
        self.style_type == StyleType::Character
    }
}

/// Stylesheet containing all style definitions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    styles: Vec<Style>,
}

impl StyleSheet {
    /// Create a new stylesheet
    #[inline]
    pub fn new() -> Self {
        Self { styles: Vec::new() }
    }

    /// Add a style to the stylesheet
    #[inline]
    pub fn add(&mut self, style: Style) {
        self.styles.push(style);
    }

    /// Get a style by type and number
    pub fn get(&self, style_type: StyleType, id: StyleRef) -> Option<&Style> {
        self.styles
            .iter()
            .find(|s| s.style_type == style_type && s.id == id)
    }

    /// Get a style by name
    pub fn get_by_name(&self, name: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.name == name)
    }

    /// Get all styles
    #[inline]
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Chain of styles from `id` up through `\sbasedon`, nearest first.
    /// Cycles end the chain.
    pub fn ancestry(&self, style_type: StyleType, id: StyleRef) -> Vec<&Style> {
        let mut chain: Vec<&Style> = Vec::new();
        let mut next = self.get(style_type, id);
        while let Some(style) = next {
            if chain.iter().any(|seen| seen.id == style.id) {
                break;
            }
            chain.push(style);
            next = style.based_on.and_then(|parent| self.get(style_type, parent));
        }
        chain
    }
}
