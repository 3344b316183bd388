//! The `\stylesheet` destination.
//!
//! Each style is a group inside the stylesheet:
//! `{\s1\sbasedon0\snext0\qc\b\fs28 heading 1;}`. Formatting is snapshotted
//! from the property table when the style's group closes.

use super::text::{TextAccumulator, code_page_of, split_entry};
use super::{ControlEvent, Destination, TextChunk};
use crate::model::{Formatting, Paragraph, Style, StyleRef, StyleSheet, StyleType};
use crate::property::{PropertyKey, PropertyTable};

#[derive(Debug, Default)]
struct PendingStyle {
    style_type: StyleType,
    id: StyleRef,
    name: TextAccumulator,
    name_complete: bool,
}

/// Collects the stylesheet.
#[derive(Debug)]
pub struct StyleSheetSink {
    styles: StyleSheet,
    pending: Option<PendingStyle>,
    depth: usize,
    default_code_page: u32,
}

impl StyleSheetSink {
    pub fn new(default_code_page: u32) -> Self {
        Self {
            styles: StyleSheet::new(),
            pending: None,
            depth: 0,
            default_code_page,
        }
    }

    #[inline]
    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    pub fn into_styles(self) -> StyleSheet {
        self.styles
    }

    fn finish_style(&mut self, properties: &PropertyTable) {
        let Some(mut pending) = self.pending.take() else {
            return;
        };
        let name = pending.name.take().trim().to_string();
        let int = |key| properties.int(key).and_then(|v| StyleRef::try_from(v).ok());

        let mut style = Style::new(pending.id, name, pending.style_type);
        style.based_on = int(PropertyKey::BasedOn);
        style.next_style = int(PropertyKey::NextStyle);
        style.formatting = Formatting::from_properties(properties);
        if style.style_type == StyleType::Paragraph {
            style.paragraph = Some(Paragraph::from_properties(properties));
        }
        style.additive = properties.flag(PropertyKey::AdditiveStyle);
        style.hidden = properties.flag(PropertyKey::HiddenStyle);

        tracing::trace!(id = style.id, name = %style.name, "stylesheet entry");
        self.styles.add(style);
    }
}

impl Default for StyleSheetSink {
    fn default() -> Self {
        Self::new(1252)
    }
}

impl Destination for StyleSheetSink {
    fn on_enter(&mut self, _properties: &PropertyTable) {
        self.depth += 1;
        if self.depth == 2 {
            self.pending = Some(PendingStyle::default());
        }
    }

    fn on_control_word(&mut self, event: &ControlEvent, _properties: &PropertyTable) {
        let style_type = match event.name() {
            "s" => StyleType::Paragraph,
            "cs" => StyleType::Character,
            "ds" => StyleType::Section,
            "ts" => StyleType::Table,
            _ => return,
        };
        if let Some(pending) = self.pending.as_mut() {
            pending.style_type = style_type;
            pending.id = StyleRef::try_from(event.value_or(0)).unwrap_or(0);
        }
    }

    fn on_text(&mut self, chunk: TextChunk<'_>, properties: &PropertyTable) {
        if self.depth != 2 {
            return;
        }
        let code_page = code_page_of(properties, self.default_code_page);
        let Some(pending) = self.pending.as_mut().filter(|p| !p.name_complete) else {
            return;
        };
        match chunk {
            TextChunk::Bytes(bytes) => {
                let (name, rest) = split_entry(bytes);
                pending.name.push_bytes(name, code_page);
                pending.name_complete = rest.is_some();
            },
            TextChunk::Unicode(text) => pending.name.push_str(text),
            TextChunk::Binary(_) => {},
        }
    }

    fn on_exit(&mut self, properties: &PropertyTable) {
        if self.depth == 2 {
            self.finish_style(properties);
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
    use crate::model::Alignment;

    impl SinkSet for StyleSheetSink {
        fn sink(&mut self, id: SinkId) -> Option<&mut dyn Destination> {
            match id {
                SinkId::StyleSheet => Some(self),
                _ => None,
            }
        }
    }

    #[test]
    fn test_styles() {
        let mut sink = StyleSheetSink::default();
        Interpreter::new(&mut sink, ParserOptions::default())
            .run(Lexer::new(
                br"{\rtf1{\stylesheet{\ql\fs24 Normal;}{\s1\sbasedon0\snext0\qc\b\fs32 heading 1;}{\*\cs10\additive Default Paragraph Font;}}}",
            ))
            .unwrap();

        let styles = sink.into_styles();
        assert_eq!(styles.styles().len(), 3);

        let normal = styles.get(StyleType::Paragraph, 0).unwrap();
        assert_eq!(normal.name, "Normal");

        let heading = styles.get(StyleType::Paragraph, 1).unwrap();
        assert_eq!(heading.name, "heading 1");
        assert_eq!(heading.based_on, Some(0));
        assert_eq!(heading.next_style, Some(0));
        assert!(heading.formatting.bold);
        assert_eq!(heading.formatting.font_size.get(), 32);
        assert_eq!(heading.paragraph.unwrap().alignment, Alignment::Center);

        let font = styles.get(StyleType::Character, 10).unwrap();
        assert_eq!(font.name, "Default Paragraph Font");
        assert!(font.additive);
        assert!(font.paragraph.is_none());
    }
}
