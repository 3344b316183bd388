//! The `\fonttbl` destination.
//!
//! Entries come either one per group (`{\f0\fswiss\fcharset0 Arial;}`) or
//! `;`-separated inside a single group. An entry is committed at its `;` or,
//! failing that, when its group closes.

use super::text::{TextAccumulator, code_page_of, split_entry};
use super::{ControlEvent, Destination, TextChunk};
use crate::catalog::{ControlKind, FlagEffect};
use crate::encoding::charset_to_codepage;
use crate::model::{Font, FontFamily, FontRef, FontTable};
use crate::property::{PropertyKey, PropertyTable};
use std::collections::HashMap;

#[derive(Debug, Default)]
struct PendingFont {
    index: FontRef,
    family: FontFamily,
    charset: Option<u8>,
    pitch: Option<u8>,
    code_page: Option<u32>,
    name: TextAccumulator,
}

/// Collects the font table.
#[derive(Debug)]
pub struct FontTableSink {
    fonts: FontTable,
    pending: Option<PendingFont>,
    depth: usize,
    default_code_page: u32,
    changed: bool,
}

impl FontTableSink {
    pub fn new(default_code_page: u32) -> Self {
        Self {
            fonts: FontTable::new(),
            pending: None,
            depth: 0,
            default_code_page,
            changed: false,
        }
    }

    /// Fonts collected so far.
    #[inline]
    pub fn fonts(&self) -> &FontTable {
        &self.fonts
    }

    /// Take the collected table.
    pub fn into_fonts(mut self) -> FontTable {
        self.commit();
        self.fonts
    }

    /// Code pages declared by fonts, if the table changed since the last call.
    pub fn take_code_pages_if_changed(&mut self) -> Option<HashMap<FontRef, u32>> {
        if !std::mem::take(&mut self.changed) {
            return None;
        }
        Some(
            self.fonts
                .iter()
                .filter_map(|(index, font)| font.effective_code_page().map(|cp| (index, cp)))
                .collect(),
        )
    }

    fn pending(&mut self) -> &mut PendingFont {
        self.pending.get_or_insert_with(PendingFont::default)
    }

    fn commit(&mut self) {
        let Some(mut pending) = self.pending.take() else {
            return;
        };
        let name = pending.name.take().trim().to_string();
        tracing::trace!(index = pending.index, %name, "font table entry");
        self.fonts.insert(
            pending.index,
            Font {
                name,
                family: pending.family,
                charset: pending.charset,
                pitch: pending.pitch,
                code_page: pending.code_page,
            },
        );
        self.changed = true;
    }
}

impl Default for FontTableSink {
    fn default() -> Self {
        Self::new(1252)
    }
}

impl Destination for FontTableSink {
    fn on_enter(&mut self, _properties: &PropertyTable) {
        self.depth += 1;
    }

    fn on_control_word(&mut self, event: &ControlEvent, _properties: &PropertyTable) {
        let descriptor = event.descriptor;
        if let ControlKind::Flag(FlagEffect::Assign(PropertyKey::FontFamily, family)) = descriptor.kind {
            self.pending().family = FontFamily::from_property(family);
            return;
        }
        let value = event.value_or(0);
        match descriptor.name {
            "f" => {
                // A new number without a preceding `;` starts a new entry
                if self.pending.as_ref().is_some_and(|p| !p.name.is_empty()) {
                    self.commit();
                }
                self.pending().index = FontRef::try_from(value).unwrap_or(0);
            },
            "fcharset" => self.pending().charset = u8::try_from(value).ok(),
            "fprq" => self.pending().pitch = u8::try_from(value).ok(),
            "cpg" => self.pending().code_page = u32::try_from(value).ok(),
            _ => {},
        }
    }

    fn on_text(&mut self, chunk: TextChunk<'_>, properties: &PropertyTable) {
        // Names live in the table group or an entry group, not deeper
        if self.depth > 2 {
            return;
        }
        match chunk {
            TextChunk::Bytes(mut bytes) => loop {
                let (name, rest) = split_entry(bytes);
                if !name.is_empty() {
                    let fallback = code_page_of(properties, self.default_code_page);
                    let pending = self.pending();
                    let code_page = pending
                        .code_page
                        .or_else(|| pending.charset.and_then(|c| charset_to_codepage(i32::from(c))))
                        .unwrap_or(fallback);
                    pending.name.push_bytes(name, code_page);
                }
                match rest {
                    Some(rest) => {
                        self.commit();
                        bytes = rest;
                    },
                    None => break,
                }
            },
            TextChunk::Unicode(text) => self.pending().name.push_str(text),
            TextChunk::Binary(_) => {},
        }
    }

    fn on_exit(&mut self, _properties: &PropertyTable) {
        if self.depth == 2 {
            self.commit();
        }
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserOptions;
    use crate::destination::{SinkId, SinkSet};
    use crate::interpreter::Interpreter;
    use crate::lexer::Lexer;

    struct Only(FontTableSink);

    impl SinkSet for Only {
        fn sink(&mut self, id: SinkId) -> Option<&mut dyn Destination> {
            match id {
                SinkId::FontTable => Some(&mut self.0),
                _ => None,
            }
        }
    }

    fn parse(input: &[u8]) -> FontTable {
        let mut sinks = Only(FontTableSink::default());
        Interpreter::new(&mut sinks, ParserOptions::default())
            .run(Lexer::new(input))
            .unwrap();
        sinks.0.into_fonts()
    }

    #[test]
    fn test_grouped_entries() {
        let fonts = parse(
            br"{\rtf1{\fonttbl{\f0\froman\fcharset0\fprq2 Times New Roman;}{\f1\fswiss Arial{\*\falt Helvetica};}}}",
        );
        assert_eq!(fonts.len(), 2);
        let times = fonts.get(0).unwrap();
        assert_eq!(times.name, "Times New Roman");
        assert_eq!(times.family, FontFamily::Roman);
        assert_eq!(times.charset, Some(0));
        assert_eq!(times.pitch, Some(2));
        assert_eq!(fonts.get(1).unwrap().name, "Arial");
        assert_eq!(fonts.get(1).unwrap().family, FontFamily::Swiss);
    }

    #[test]
    fn test_flat_entries() {
        let fonts = parse(br"{\rtf1{\fonttbl\f0\fswiss Helvetica;\f1\fmodern Courier;}}");
        assert_eq!(fonts.get(0).unwrap().name, "Helvetica");
        assert_eq!(fonts.get(1).unwrap().name, "Courier");
        assert_eq!(fonts.get(1).unwrap().family, FontFamily::Modern);
    }

    #[test]
    fn test_name_in_font_charset() {
        // "SimSun" in GBK: cb ce cc e5
        let fonts = parse(br"{\rtf1\ansi\ansicpg1252{\fonttbl{\f2\fnil\fcharset134 \'cb\'ce\'cc\'e5;}}}");
        let font = fonts.get(2).unwrap();
        assert_eq!(font.name, "\u{5b8b}\u{4f53}");
        assert_eq!(font.effective_code_page(), Some(936));
    }

    #[test]
    fn test_code_pages_reported_once() {
        let mut sink = FontTableSink::default();
        let props = PropertyTable::new();
        sink.on_enter(&props);
        sink.on_control_word(&ControlEvent::new(crate::catalog::lookup("f"), Some(3)), &props);
        sink.on_control_word(&ControlEvent::new(crate::catalog::lookup("fcharset"), Some(204)), &props);
        sink.on_text(TextChunk::Bytes(b"Cyr;"), &props);

        let pages = sink.take_code_pages_if_changed().unwrap();
        assert_eq!(pages.get(&3), Some(&1251));
        assert!(sink.take_code_pages_if_changed().is_none());
    }
}
