//! The `\listtable` and `\listoverridetable` destinations.
//!
//! ```text
//! {\*\listtable{\list\listtemplateid1\listhybrid
//!     {\listlevel\levelnfc0\leveljc0\levelfollow0\levelstartat1
//!         {\leveltext\'02\'00.;}{\levelnumbers\'01;}\fi-360\li720}
//!     {\listname Numbered;}\listid7}}
//! {\*\listoverridetable{\listoverride\listid7\listoverridecount0\ls1}}
//! ```
//!
//! Properties set inside a `\list` or `\listlevel` group are read when that
//! group closes, so their order within the group does not matter.

use super::text::{TextAccumulator, code_page_of, split_entry};
use super::{ControlEvent, Destination, TextChunk};
use crate::model::{
    Alignment, FontRef, LevelFollow, List, ListLevel, ListLevelType, ListOverride,
    ListOverrideTable, ListTable,
};
use crate::property::{PropertyKey, PropertyTable};
use smallvec::SmallVec;

/// What the innermost group of the list table is describing.
#[derive(Debug)]
enum ListContext {
    Other,
    List,
    Level,
    LevelText(TextAccumulator),
    LevelNumbers(Vec<u8>),
    Name(TextAccumulator),
}

/// Collects list definitions.
#[derive(Debug)]
pub struct ListTableSink {
    lists: ListTable,
    contexts: SmallVec<[ListContext; 6]>,
    list: Option<List>,
    level: Option<ListLevel>,
    default_code_page: u32,
}

impl ListTableSink {
    pub fn new(default_code_page: u32) -> Self {
        Self {
            lists: ListTable::new(),
            contexts: SmallVec::new(),
            list: None,
            level: None,
            default_code_page,
        }
    }

    #[inline]
    pub fn lists(&self) -> &ListTable {
        &self.lists
    }

    pub fn into_lists(self) -> ListTable {
        self.lists
    }

    fn set_context(&mut self, context: ListContext) {
        if let Some(top) = self.contexts.last_mut() {
            *top = context;
        }
    }

    fn finish_level(&mut self, properties: &PropertyTable) {
        let Some(mut level) = self.level.take() else {
            return;
        };
        level.level_type = ListLevelType::from_nfc(properties.int_or(PropertyKey::LevelNumberFormat, 0));
        level.start_at = properties.int_or(PropertyKey::LevelStartAt, 1);
        level.justification = match properties.int_or(PropertyKey::LevelJustification, 0) {
            1 => Alignment::Center,
            2 => Alignment::Right,
            _ => Alignment::Left,
        };
        level.follow = LevelFollow::from_property(properties.int_or(PropertyKey::LevelFollow, 0));
        level.legal = properties.flag(PropertyKey::LevelLegal);
        level.no_restart = properties.flag(PropertyKey::LevelNoRestart);
        level.font_ref = properties
            .int(PropertyKey::FontIndex)
            .and_then(|f| FontRef::try_from(f).ok());
        level.indent = properties.int_or(PropertyKey::LeftIndent, 0);
        level.first_line_indent = properties.int_or(PropertyKey::FirstLineIndent, 0);

        match self.list.as_mut() {
            Some(list) => {
                level.level = list.levels.len().min(8) as u8;
                list.add_level(level);
            },
            None => tracing::debug!("list level outside of a list, ignored"),
        }
    }

    fn finish_list(&mut self, properties: &PropertyTable) {
        let Some(mut list) = self.list.take() else {
            return;
        };
        list.id = properties.int_or(PropertyKey::ListId, 0);
        list.template_id = properties.int(PropertyKey::ListTemplateId);
        list.simple = properties.flag(PropertyKey::ListSimple);
        list.hybrid = properties.flag(PropertyKey::ListHybrid);
        tracing::trace!(id = list.id, levels = list.levels.len(), "list definition");
        self.lists.add(list);
    }
}

impl Default for ListTableSink {
    fn default() -> Self {
        Self::new(1252)
    }
}

impl Destination for ListTableSink {
    fn on_enter(&mut self, _properties: &PropertyTable) {
        self.contexts.push(ListContext::Other);
    }

    fn on_control_word(&mut self, event: &ControlEvent, _properties: &PropertyTable) {
        match event.name() {
            "list" => {
                self.list = Some(List::new(0));
                self.set_context(ListContext::List);
            },
            "listlevel" => {
                self.level = Some(ListLevel::new(0));
                self.set_context(ListContext::Level);
            },
            "leveltext" => self.set_context(ListContext::LevelText(TextAccumulator::new())),
            "levelnumbers" => self.set_context(ListContext::LevelNumbers(Vec::new())),
            "listname" => self.set_context(ListContext::Name(TextAccumulator::new())),
            _ => {},
        }
    }

    fn on_text(&mut self, chunk: TextChunk<'_>, properties: &PropertyTable) {
        let code_page = code_page_of(properties, self.default_code_page);
        match (self.contexts.last_mut(), chunk) {
            (Some(ListContext::LevelText(text) | ListContext::Name(text)), TextChunk::Bytes(bytes)) => {
                text.push_bytes(bytes, code_page);
            },
            (Some(ListContext::LevelText(text) | ListContext::Name(text)), TextChunk::Unicode(s)) => {
                text.push_str(s);
            },
            (Some(ListContext::LevelNumbers(numbers)), TextChunk::Bytes(bytes)) => {
                numbers.extend_from_slice(bytes);
            },
            _ => {},
        }
    }

    fn on_exit(&mut self, properties: &PropertyTable) {
        match self.contexts.pop() {
            Some(ListContext::Level) => self.finish_level(properties),
            Some(ListContext::List) => self.finish_list(properties),
            Some(ListContext::LevelText(mut text)) => {
                let text = text.take();
                let text = text.split(';').next().unwrap_or_default();
                // The first character is the length of the template
                let mut chars = text.chars();
                chars.next();
                if let Some(level) = self.level.as_mut() {
                    level.number_text = chars.as_str().to_string();
                }
            },
            Some(ListContext::LevelNumbers(numbers)) => {
                let (positions, _) = split_entry(&numbers);
                if let Some(level) = self.level.as_mut() {
                    level.number_positions = positions.to_vec();
                }
            },
            Some(ListContext::Name(mut name)) => {
                let name = name.take();
                let name = name.split(';').next().unwrap_or_default().trim();
                if let Some(list) = self.list.as_mut()
                    && !name.is_empty()
                {
                    list.name = Some(name.to_string());
                }
            },
            Some(ListContext::Other) | None => {},
        }
    }
}

/// Collects list overrides.
#[derive(Debug, Default)]
pub struct ListOverrideSink {
    overrides: ListOverrideTable,
    depth: usize,
    in_override: Option<usize>,
}

impl ListOverrideSink {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn overrides(&self) -> &ListOverrideTable {
        &self.overrides
    }

    pub fn into_overrides(self) -> ListOverrideTable {
        self.overrides
    }
}

impl Destination for ListOverrideSink {
    fn on_enter(&mut self, _properties: &PropertyTable) {
        self.depth += 1;
    }

    fn on_control_word(&mut self, event: &ControlEvent, _properties: &PropertyTable) {
        if event.name() == "listoverride" {
            self.in_override = Some(self.depth);
        }
    }

    fn on_exit(&mut self, properties: &PropertyTable) {
        if self.in_override == Some(self.depth) {
            self.in_override = None;
            let mut entry = ListOverride::new(
                properties.int_or(PropertyKey::ListOverride, 0),
                properties.int_or(PropertyKey::ListId, 0),
            );
            entry.override_count = properties.int_or(PropertyKey::ListOverrideCount, 0);
            self.overrides.add(entry);
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

    #[derive(Default)]
    struct Lists {
        table: ListTableSink,
        overrides: ListOverrideSink,
    }

    impl SinkSet for Lists {
        fn sink(&mut self, id: SinkId) -> Option<&mut dyn Destination> {
            match id {
                SinkId::ListTable => Some(&mut self.table),
                SinkId::ListOverrideTable => Some(&mut self.overrides),
                _ => None,
            }
        }
    }

    const INPUT: &[u8] = br"{\rtf1{\*\listtable{\list\listtemplateid-1\listhybrid{\listlevel\levelnfc0\leveljc0\levelfollow0\levelstartat1{\leveltext\'02\'00.;}{\levelnumbers\'01;}\fi-360\li720}{\listlevel\levelnfc23\leveljc2\levelstartat1{\leveltext\'01\u8226 ?;}{\levelnumbers;}\f3\fi-360\li1440}{\listname Steps;}\listid7}}{\*\listoverridetable{\listoverride\listid7\listoverridecount0\ls1}}}";

    #[test]
    fn test_list_table() {
        let mut sinks = Lists::default();
        Interpreter::new(&mut sinks, ParserOptions::default())
            .run(Lexer::new(INPUT))
            .unwrap();

        let lists = sinks.table.into_lists();
        let list = lists.get(7).unwrap();
        assert_eq!(list.template_id, Some(-1));
        assert!(list.hybrid);
        assert_eq!(list.name.as_deref(), Some("Steps"));
        assert_eq!(list.level_count(), 2);

        let first = list.get_level(0).unwrap();
        assert_eq!(first.level_type, ListLevelType::Decimal);
        assert_eq!(first.number_text, "\u{0}.");
        assert_eq!(first.number_positions, vec![1]);
        assert_eq!(first.indent, 720);
        assert_eq!(first.first_line_indent, -360);
        assert_eq!(first.render(&[4]), "4.");

        let second = list.get_level(1).unwrap();
        assert!(second.is_bullet());
        assert_eq!(second.number_text, "\u{2022}");
        assert_eq!(second.justification, Alignment::Right);
        assert_eq!(second.font_ref, Some(3));
        assert!(second.number_positions.is_empty());

        let overrides = sinks.overrides.into_overrides();
        let entry = overrides.get(1).unwrap();
        assert_eq!(entry.list_id, 7);
        assert_eq!(entry.override_count, 0);
    }
}
