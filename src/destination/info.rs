//! The `\info` destination, which also receives `\*\generator` and
//! `\*\password`.

use super::text::{TextAccumulator, code_page_of};
use super::{ControlEvent, Destination, TextChunk};
use crate::model::{DocumentInfo, RtfDateParts};
use crate::property::PropertyTable;
use smallvec::SmallVec;

#[derive(Debug)]
enum InfoContext {
    Other,
    Text(&'static str, TextAccumulator),
    Time(&'static str, RtfDateParts),
}

/// Collects document metadata.
#[derive(Debug)]
pub struct InfoSink {
    info: DocumentInfo,
    contexts: SmallVec<[InfoContext; 4]>,
    default_code_page: u32,
}

impl InfoSink {
    pub fn new(default_code_page: u32) -> Self {
        Self {
            info: DocumentInfo::new(),
            contexts: SmallVec::new(),
            default_code_page,
        }
    }

    #[inline]
    pub fn info(&self) -> &DocumentInfo {
        &self.info
    }

    pub fn into_info(self) -> DocumentInfo {
        self.info
    }

    fn set_context(&mut self, context: InfoContext) {
        if let Some(top) = self.contexts.last_mut() {
            *top = context;
        }
    }
}

impl Default for InfoSink {
    fn default() -> Self {
        Self::new(1252)
    }
}

impl Destination for InfoSink {
    fn on_enter(&mut self, _properties: &PropertyTable) {
        self.contexts.push(InfoContext::Other);
    }

    fn on_control_word(&mut self, event: &ControlEvent, _properties: &PropertyTable) {
        let name = event.name();
        if self.info.text_field_mut(name).is_some() {
            self.set_context(InfoContext::Text(name, TextAccumulator::new()));
        } else if self.info.time_field_mut(name).is_some() {
            self.set_context(InfoContext::Time(name, RtfDateParts::default()));
        } else if let Some(value) = event.parameter {
            if let Some(InfoContext::Time(_, parts)) = self.contexts.last_mut()
                && parts.set(name, value)
            {
                return;
            }
            if let Some(slot) = self.info.numeric_field_mut(name) {
                *slot = Some(value);
            }
        }
    }

    fn on_text(&mut self, chunk: TextChunk<'_>, properties: &PropertyTable) {
        let code_page = code_page_of(properties, self.default_code_page);
        if let Some(InfoContext::Text(_, text)) = self.contexts.last_mut() {
            match chunk {
                TextChunk::Bytes(bytes) => text.push_bytes(bytes, code_page),
                TextChunk::Unicode(s) => text.push_str(s),
                TextChunk::Binary(_) => {},
            }
        }
    }

    fn on_exit(&mut self, _properties: &PropertyTable) {
        match self.contexts.pop() {
            Some(InfoContext::Text(name, mut text)) => {
                let text = text.take();
                // The generator tag is `;`-terminated
                let value = text.trim().trim_end_matches(';').trim_end();
                if let Some(slot) = self.info.text_field_mut(name) {
                    *slot = Some(value.to_string());
                }
            },
            Some(InfoContext::Time(name, parts)) => match parts.to_datetime() {
                Some(time) => {
                    if let Some(slot) = self.info.time_field_mut(name) {
                        *slot = Some(time);
                    }
                },
                None => tracing::debug!(field = name, ?parts, "incomplete or invalid timestamp"),
            },
            Some(InfoContext::Other) | None => {},
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

    impl SinkSet for InfoSink {
        fn sink(&mut self, id: SinkId) -> Option<&mut dyn Destination> {
            match id {
                SinkId::Info => Some(self),
                _ => None,
            }
        }
    }

    fn parse(input: &[u8]) -> DocumentInfo {
        let mut sink = InfoSink::default();
        Interpreter::new(&mut sink, ParserOptions::default())
            .run(Lexer::new(input))
            .unwrap();
        sink.into_info()
    }

    #[test]
    fn test_info_group() {
        let info = parse(
            br"{\rtf1{\info{\title Quarterly Report}{\author J. Doe}{\keywords rtf, test}{\creatim\yr2023\mo4\dy15\hr9\min30}{\version2}{\nofpages3}{\nofwords120}{\*\password 0a1b}}}",
        );
        assert_eq!(info.title.as_deref(), Some("Quarterly Report"));
        assert_eq!(info.author.as_deref(), Some("J. Doe"));
        assert_eq!(info.keywords.as_deref(), Some("rtf, test"));
        assert_eq!(
            info.creation_time.map(|t| t.to_string()).as_deref(),
            Some("2023-04-15 09:30:00")
        );
        assert_eq!(info.version, Some(2));
        assert_eq!(info.pages, Some(3));
        assert_eq!(info.words, Some(120));
        assert_eq!(info.password.as_deref(), Some("0a1b"));
    }

    #[test]
    fn test_generator_outside_info() {
        let info = parse(br"{\rtf1\ansi{\*\generator Riched20 10.0.19041;}Hello}");
        assert_eq!(info.generator.as_deref(), Some("Riched20 10.0.19041"));
    }

    #[test]
    fn test_escaped_title() {
        let info = parse(br"{\rtf1\ansi\ansicpg1252{\info{\title Caf\'e9 \u8364?}}}");
        assert_eq!(info.title.as_deref(), Some("Caf\u{e9} \u{20ac}"));
    }
}
