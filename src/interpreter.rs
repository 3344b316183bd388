//! The dispatch engine.
//!
//! [`Interpreter`] consumes tokens one at a time, resolves control words
//! through the catalog, applies their effect to the group stack and forwards
//! events to the active destination.
//!
//! ```
//! use rtfkit::destination::SinkRegistry;
//! use rtfkit::interpreter::Interpreter;
//! use rtfkit::lexer::Lexer;
//! use rtfkit::ParserOptions;
//!
//! let mut sinks = SinkRegistry::new();
//! let mut interpreter = Interpreter::new(&mut sinks, ParserOptions::default());
//! interpreter.run(Lexer::new(br"{\rtf1\ansi{\mystery word}Hello}")).unwrap();
//! assert_eq!(interpreter.depth(), 0);
//! assert_eq!(interpreter.diagnostics().len(), 1);
//! ```

use crate::catalog::{self, ControlKind, ControlWordDescriptor, FlagEffect};
use crate::config::ParserOptions;
use crate::destination::{ControlEvent, Router, SinkId, SinkSet, TextChunk};
use crate::error::{RtfError, RtfResult};
use crate::lexer::{Lexer, Spanned, Token};
use crate::property::{PropertyKey, PropertyTable, PropertyValue};
use crate::stack::GroupStack;
use std::fmt;

/// A tolerated anomaly met while interpreting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A control word or symbol the catalog does not know
    UnknownControlWord { name: String, offset: usize },
    /// A destination no sink was registered for; its content was discarded
    UnrecognizedDestination { destination: SinkId, offset: usize },
    /// An ignorable group that was skipped to its closing brace
    SkippedGroup { name: String, offset: usize },
}

impl Diagnostic {
    /// Byte offset of the token that caused the diagnostic.
    pub fn offset(&self) -> usize {
        match self {
            Diagnostic::UnknownControlWord { offset, .. }
            | Diagnostic::UnrecognizedDestination { offset, .. }
            | Diagnostic::SkippedGroup { offset, .. } => *offset,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownControlWord { name, offset } => {
                write!(f, "unknown control word \\{} at byte {}", name, offset)
            },
            Diagnostic::UnrecognizedDestination {
                destination,
                offset,
            } => write!(f, "unrecognized destination {} at byte {}", destination, offset),
            Diagnostic::SkippedGroup { name, offset } => {
                write!(f, "skipped ignorable group \\*\\{} at byte {}", name, offset)
            },
        }
    }
}

/// `\u` bookkeeping: fallback units still to drop and a pending high surrogate.
#[derive(Debug, Clone, Copy, Default)]
struct UnicodeState {
    pending_skip: usize,
    high_surrogate: Option<u16>,
}


/// The RTF dispatch engine.
pub struct Interpreter<'s, S: SinkSet + ?Sized> {
    sinks: &'s mut S,
    stack: GroupStack,
    router: Router,
    options: ParserOptions,
    diagnostics: Vec<Diagnostic>,
    /// Open braces inside a skipped group, including its own
    skip_depth: usize,
    unicode: UnicodeState,
}

impl<'s, S: SinkSet + ?Sized> Interpreter<'s, S> {
    /// Create an interpreter delivering to `sinks`.
    pub fn new(sinks: &'s mut S, options: ParserOptions) -> Self {
        Self {
            sinks,
            stack: GroupStack::new(),
            router: Router::new(),
            options,
            diagnostics: Vec::new(),
            skip_depth: 0,
            unicode: UnicodeState::default(),
        }
    }

    /// Number of unmatched `{`, including those inside a skipped group.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.depth() + self.skip_depth.saturating_sub(1)
    }

    /// Destination currently receiving events.
    #[inline]
    pub fn active_destination(&self) -> SinkId {
        self.router.active()
    }

    /// Properties of the innermost group.
    #[inline]
    pub fn properties(&self) -> &PropertyTable {
        self.stack.properties()
    }

    /// Diagnostics collected so far.
    #[inline]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take the collected diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Interpret every token of `lexer`, then check that all groups closed.
    pub fn run(&mut self, mut lexer: Lexer<'_>) -> RtfResult<()> {
        for item in lexer.by_ref() {
            let Spanned { token, offset } = item?;
            self.process(token, offset)?;
        }
        self.finish(lexer.offset())
    }

    /// Check that the input ended with every group closed.
    pub fn finish(&mut self, offset: usize) -> RtfResult<()> {
        let depth = self.depth();
        if depth > 0 {
            return Err(RtfError::UnbalancedGroup { offset, depth });
        }
        Ok(())
    }

    /// Interpret one token.
    pub fn process(&mut self, token: Token<'_>, offset: usize) -> RtfResult<()> {
        tracing::trace!(?token, offset, "dispatch");

        if self.skip_depth > 0 {
            match token {
                Token::GroupOpen => self.skip_depth += 1,
                Token::GroupClose => {
                    self.skip_depth -= 1;
                    if self.skip_depth == 0 {
                        return self.close_group(offset);
                    }
                },
                _ => {},
            }
            return Ok(());
        }

        match token {
            Token::GroupOpen => self.open_group(offset),
            Token::GroupClose => self.close_group(offset),
            Token::ControlWord { name, parameter } => {
                self.dispatch(catalog::lookup(name), name, parameter, offset);
                Ok(())
            },
            Token::ControlSymbol(symbol) => {
                let descriptor = catalog::lookup_symbol(symbol);
                let name = char::from(symbol).to_string();
                self.dispatch(descriptor, &name, None, offset);
                Ok(())
            },
            Token::Text(bytes) => {
                let skip = self.unicode.pending_skip.min(bytes.len());
                self.unicode.pending_skip -= skip;
                let rest = &bytes[skip..];
                if !rest.is_empty() {
                    self.flush_surrogate();
                    self.emit_text(TextChunk::Bytes(rest));
                }
                Ok(())
            },
            Token::Binary(payload) => {
                self.flush_surrogate();
                self.emit_text(TextChunk::Binary(payload));
                Ok(())
            },
        }
    }

    fn diagnose(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(%diagnostic, "RTF diagnostic");
        if self.options.collect_diagnostics {
            self.diagnostics.push(diagnostic);
        }
    }

    fn open_group(&mut self, offset: usize) -> RtfResult<()> {
        if self.stack.depth() >= self.options.max_depth {
            return Err(RtfError::NestingTooDeep {
                offset,
                limit: self.options.max_depth,
            });
        }
        self.flush_surrogate();
        self.unicode.pending_skip = 0;
        let active = self.router.active();
        self.stack.push(active);
        let properties = self.stack.properties();
        self.router
            .active_sink(&mut *self.sinks)
            .on_enter(properties);
        Ok(())
    }

    fn close_group(&mut self, offset: usize) -> RtfResult<()> {
        if self.stack.depth() == 0 {
            return Err(RtfError::UnbalancedGroup { offset, depth: 0 });
        }
        self.flush_surrogate();
        self.unicode.pending_skip = 0;

        let active = self.router.active();
        let saved = self.stack.saved_destination();
        let properties = self.stack.properties();
        self.router.sink(&mut *self.sinks, active).on_exit(properties);
        if saved != active {
            self.router.sink(&mut *self.sinks, saved).on_exit(properties);
        }

        let restored = self.stack.pop(offset)?;
        self.router.set_active(restored);
        Ok(())
    }

    fn dispatch(
        &mut self,
        descriptor: &'static ControlWordDescriptor,
        name: &str,
        parameter: Option<i32>,
        offset: usize,
    ) {
        // Inside a \u fallback every control word stands for one character
        if self.unicode.pending_skip > 0
            && !matches!(descriptor.kind, ControlKind::Value(Some(PropertyKey::UnicodeChar)))
        {
            self.unicode.pending_skip -= 1;
            tracing::trace!(name, "control word dropped as \\u fallback");
            return;
        }

        let is_star = matches!(
            descriptor.kind,
            ControlKind::Flag(FlagEffect::Set(PropertyKey::IgnorableDestination))
        );
        if is_star {
            self.stack
                .set_property(PropertyKey::IgnorableDestination, PropertyValue::Bool(true));
            return;
        }
        let extended = self.stack.take_flag(PropertyKey::IgnorableDestination);

        let effective = descriptor.effective_parameter(parameter);
        let event = ControlEvent::new(descriptor, effective);

        match descriptor.kind {
            ControlKind::Unidentified => {
                self.diagnose(Diagnostic::UnknownControlWord {
                    name: name.to_string(),
                    offset,
                });
                if extended {
                    self.skip_group(name, offset);
                }
            },
            ControlKind::Value(key) => {
                if let (Some(key), Some(value)) = (key, effective) {
                    self.stack.set_property(key, PropertyValue::Int(value));
                }
                self.forward(&event);
                if key == Some(PropertyKey::UnicodeChar)
                    && let Some(value) = effective
                {
                    self.unicode_char(value);
                }
            },
            ControlKind::Flag(effect) => {
                match effect {
                    FlagEffect::None => {},
                    FlagEffect::Set(key) => {
                        self.stack.set_property(key, PropertyValue::Bool(true));
                    },
                    FlagEffect::Clearable(key) => {
                        self.stack
                            .set_property(key, PropertyValue::Bool(effective != Some(0)));
                    },
                    FlagEffect::Assign(key, value) => {
                        self.stack.set_property(key, PropertyValue::Int(value));
                    },
                    FlagEffect::Reset(group) => self.stack.reset_group(group),
                }
                self.forward(&event);
            },
            ControlKind::Toggle(key) => {
                if let Some(key) = key {
                    self.stack
                        .set_property(key, PropertyValue::Bool(effective != Some(0)));
                }
                self.forward(&event);
            },
            ControlKind::Symbol(text) => {
                self.flush_surrogate();
                self.emit_text(TextChunk::Unicode(text));
            },
            ControlKind::Destination(id) => self.enter_destination(&event, id, extended, offset),
            ControlKind::DestinationEx(id) => self.enter_destination(&event, id, true, offset),
        }
    }

    fn skip_group(&mut self, name: &str, offset: usize) {
        // No enclosing brace would ever end the skip
        if self.stack.depth() == 0 {
            tracing::warn!(name, offset, "Ignorable destination outside any group, reading its content");
            return;
        }
        self.diagnose(Diagnostic::SkippedGroup {
            name: name.to_string(),
            offset,
        });
        self.skip_depth = 1;
    }

    fn enter_destination(&mut self, event: &ControlEvent, id: SinkId, extended: bool, offset: usize) {
        let active = self.router.active();

        // Nothing escapes a discarded destination
        if self.router.is_discarding() || id == active {
            self.forward(event);
            return;
        }

        let target = if self.router.resolve(&mut *self.sinks, id).is_some() {
            id
        } else if extended {
            self.skip_group(event.name(), offset);
            return;
        } else {
            self.diagnose(Diagnostic::UnrecognizedDestination {
                destination: id,
                offset,
            });
            SinkId::Null
        };

        if target == active {
            return;
        }

        let saved = self.stack.saved_destination();
        let properties = self.stack.properties();
        // A second switch within one group leaves the intermediate destination
        if active != saved {
            self.router.sink(&mut *self.sinks, active).on_exit(properties);
        }
        self.router.set_active(target);
        if target != saved {
            self.router
                .sink(&mut *self.sinks, target)
                .on_enter(properties);
        }
        self.forward(event);
    }

    fn forward(&mut self, event: &ControlEvent) {
        let properties = self.stack.properties();
        self.router
            .active_sink(&mut *self.sinks)
            .on_control_word(event, properties);
    }

    fn emit_text(&mut self, chunk: TextChunk<'_>) {
        let properties = self.stack.properties();
        self.router
            .active_sink(&mut *self.sinks)
            .on_text(chunk, properties);
    }

    fn unicode_char(&mut self, value: i32) {
        // Parameters are signed 16-bit; negative values wrap
        let unit = (if value < 0 { value + 65536 } else { value }) as u32;
        let skip = self.stack.properties().int_or(PropertyKey::UnicodeSkip, 1).max(0) as usize;

        let ch = match (self.unicode.high_surrogate.take(), unit) {
            (None, 0xD800..=0xDBFF) => {
                self.unicode.high_surrogate = Some(unit as u16);
                None
            },
            (Some(high), 0xDC00..=0xDFFF) => {
                let scalar = 0x10000 + ((u32::from(high) - 0xD800) << 10) + (unit - 0xDC00);
                Some(char::from_u32(scalar).unwrap_or(char::REPLACEMENT_CHARACTER))
            },
            (Some(_), 0xD800..=0xDBFF) => {
                self.unicode.high_surrogate = Some(unit as u16);
                Some(char::REPLACEMENT_CHARACTER)
            },
            (Some(_), _) => {
                self.emit_char(char::REPLACEMENT_CHARACTER);
                Some(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER))
            },
            (None, _) => Some(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER)),
        };

        if let Some(ch) = ch {
            self.emit_char(ch);
        }
        self.unicode.pending_skip = skip;
    }

    /// Replace a high surrogate that no low surrogate followed.
    fn flush_surrogate(&mut self) {
        if let Some(high) = self.unicode.high_surrogate.take() {
            tracing::debug!(high, "Unpaired high surrogate");
            self.emit_char(char::REPLACEMENT_CHARACTER);
        }
    }

    fn emit_char(&mut self, ch: char) {
        let mut buffer = [0u8; 4];
        let text: &str = ch.encode_utf8(&mut buffer);
        self.emit_text(TextChunk::Unicode(text));
    }
}

impl<S: SinkSet + ?Sized> fmt::Debug for Interpreter<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpreter")
            .field("depth", &self.depth())
            .field("active", &self.router.active())
            .field("skip_depth", &self.skip_depth)
            .field("diagnostics", &self.diagnostics.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destination::{Destination, SinkRegistry};
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Enter,
        Exit,
        Word(&'static str, Option<i32>),
        Text(String),
        Binary(Vec<u8>),
    }

    type Log = Rc<RefCell<Vec<(SinkId, Event, PropertyTable)>>>;

    struct Recorder {
        id: SinkId,
        log: Log,
    }

    impl Destination for Recorder {
        fn on_enter(&mut self, properties: &PropertyTable) {
            self.log.borrow_mut().push((self.id, Event::Enter, *properties));
        }

        fn on_control_word(&mut self, event: &ControlEvent, properties: &PropertyTable) {
            self.log
                .borrow_mut()
                .push((self.id, Event::Word(event.name(), event.parameter), *properties));
        }

        fn on_text(&mut self, chunk: TextChunk<'_>, properties: &PropertyTable) {
            let event = match chunk {
                TextChunk::Bytes(bytes) => Event::Text(String::from_utf8_lossy(bytes).into_owned()),
                TextChunk::Unicode(text) => Event::Text(text.to_string()),
                TextChunk::Binary(bytes) => Event::Binary(bytes.to_vec()),
            };
            self.log.borrow_mut().push((self.id, event, *properties));
        }

        fn on_exit(&mut self, properties: &PropertyTable) {
            self.log.borrow_mut().push((self.id, Event::Exit, *properties));
        }
    }

    fn registry(log: &Log, ids: &[SinkId]) -> SinkRegistry {
        let mut registry = SinkRegistry::new();
        for &id in ids {
            let log = log.clone();
            registry.register(id, move || Box::new(Recorder { id, log: log.clone() }));
        }
        registry
    }

    fn run(input: &[u8], ids: &[SinkId]) -> (RtfResult<()>, Vec<(SinkId, Event, PropertyTable)>, Vec<Diagnostic>) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut sinks = registry(&log, ids);
        let mut interpreter = Interpreter::new(&mut sinks, ParserOptions::default());
        let result = interpreter.run(Lexer::new(input));
        let diagnostics = interpreter.take_diagnostics();
        drop(sinks);
        let events = log.borrow().clone();
        (result, events, diagnostics)
    }

    fn texts(events: &[(SinkId, Event, PropertyTable)], id: SinkId) -> Vec<(String, PropertyTable)> {
        events
            .iter()
            .filter_map(|(sink, event, props)| match event {
                Event::Text(text) if *sink == id => Some((text.clone(), *props)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_toggle_scopes_bold() {
        let (result, events, _) = run(br"{\rtf1\ansi\b Hello\b0 World}", &[SinkId::Document]);
        assert!(result.is_ok());

        let texts = texts(&events, SinkId::Document);
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].0, "Hello");
        assert!(texts[0].1.flag(PropertyKey::Bold));
        assert_eq!(texts[1].0, "World");
        assert!(!texts[1].1.flag(PropertyKey::Bold));
    }

    #[test]
    fn test_unknown_word_is_tolerated() {
        let (result, events, diagnostics) = run(br"{\unknownword Test}", &[SinkId::Document]);
        assert!(result.is_ok());
        assert_eq!(texts(&events, SinkId::Document)[0].0, "Test");
        assert_eq!(
            diagnostics,
            vec![Diagnostic::UnknownControlWord {
                name: "unknownword".to_string(),
                offset: 1,
            }]
        );
    }

    #[test]
    fn test_color_table_entries() {
        let (result, events, _) = run(
            br"{\rtf1{\colortbl;\red255\green0\blue0;}after}",
            &[SinkId::Document, SinkId::ColorTable],
        );
        assert!(result.is_ok());

        let table = texts(&events, SinkId::ColorTable);
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].1.int(PropertyKey::ColorRed), None);
        assert_eq!(table[1].1.int(PropertyKey::ColorRed), Some(255));
        assert_eq!(table[1].1.int(PropertyKey::ColorGreen), Some(0));
        assert_eq!(table[1].1.int(PropertyKey::ColorBlue), Some(0));

        let words: Vec<_> = events
            .iter()
            .filter_map(|(sink, event, _)| match event {
                Event::Word(name, parameter) if *sink == SinkId::ColorTable => Some((*name, *parameter)),
                _ => None,
            })
            .collect();
        assert_eq!(
            words,
            vec![
                ("colortbl", None),
                ("red", Some(255)),
                ("green", Some(0)),
                ("blue", Some(0)),
            ]
        );

        // The document is active again after the group
        assert_eq!(texts(&events, SinkId::Document)[0].0, "after");
        let color_enters = events
            .iter()
            .filter(|(sink, event, _)| *sink == SinkId::ColorTable && *event == Event::Enter)
            .count();
        let color_exits = events
            .iter()
            .filter(|(sink, event, _)| *sink == SinkId::ColorTable && *event == Event::Exit)
            .count();
        assert_eq!((color_enters, color_exits), (1, 1));
    }

    #[test]
    fn test_unclosed_group() {
        let (result, _, _) = run(br"{\rtf1 text", &[SinkId::Document]);
        match result {
            Err(RtfError::UnbalancedGroup { depth, .. }) => assert_eq!(depth, 1),
            other => panic!("expected unbalanced group, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_close_brace() {
        let (result, _, _) = run(br"{\rtf1 x}}", &[SinkId::Document]);
        assert!(matches!(
            result,
            Err(RtfError::UnbalancedGroup { offset: 9, depth: 0 })
        ));
    }

    #[test]
    fn test_binary_blob_is_opaque() {
        let (result, events, _) = run(b"{\\rtf1{\\pict\\bin5 a{b}c}done}", &[SinkId::Document, SinkId::Picture]);
        assert!(result.is_ok());
        let blobs: Vec<_> = events
            .iter()
            .filter_map(|(sink, event, _)| match event {
                Event::Binary(bytes) => Some((*sink, bytes.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(blobs, vec![(SinkId::Picture, b"a{b}c".to_vec())]);
        assert_eq!(texts(&events, SinkId::Document)[0].0, "done");
    }

    #[test]
    fn test_ignorable_unknown_group_is_skipped() {
        let (result, events, diagnostics) = run(
            br"{\rtf1{\*\mystery {nested} hidden}shown}",
            &[SinkId::Document],
        );
        assert!(result.is_ok());
        let texts: Vec<String> = texts(&events, SinkId::Document).into_iter().map(|t| t.0).collect();
        assert_eq!(texts, vec!["shown".to_string()]);
        assert!(diagnostics.iter().any(|d| matches!(d, Diagnostic::SkippedGroup { name, .. } if name == "mystery")));
    }

    #[test]
    fn test_unregistered_extended_destination_is_skipped() {
        // \listtable is ignorable; without a sink its content never reaches the document
        let (result, events, _) = run(br"{\rtf1{\*\listtable{\list x}}y}", &[SinkId::Document]);
        assert!(result.is_ok());
        let texts: Vec<String> = texts(&events, SinkId::Document).into_iter().map(|t| t.0).collect();
        assert_eq!(texts, vec!["y".to_string()]);
    }

    #[test]
    fn test_unregistered_destination_goes_to_null() {
        let (result, events, diagnostics) = run(br"{\rtf1{\header page {\b x}}body}", &[SinkId::Document]);
        assert!(result.is_ok());
        let texts: Vec<String> = texts(&events, SinkId::Document).into_iter().map(|t| t.0).collect();
        assert_eq!(texts, vec!["body".to_string()]);
        assert!(diagnostics.contains(&Diagnostic::UnrecognizedDestination {
            destination: SinkId::Named("header"),
            offset: 7,
        }));
    }

    #[test]
    fn test_destination_already_active_is_forwarded() {
        let (_, events, _) = run(br"{\info{\title Report}}", &[SinkId::Document, SinkId::Info]);
        let info: Vec<&Event> = events
            .iter()
            .filter(|(sink, _, _)| *sink == SinkId::Info)
            .map(|(_, event, _)| event)
            .collect();
        assert_eq!(
            info,
            vec![
                &Event::Enter,
                &Event::Word("info", None),
                &Event::Enter,
                &Event::Word("title", None),
                &Event::Text("Report".to_string()),
                &Event::Exit,
                &Event::Exit,
            ]
        );
    }

    #[test]
    fn test_second_switch_exits_intermediate() {
        let (_, events, _) = run(br"{\fonttbl\colortbl;}", &[SinkId::Document, SinkId::FontTable, SinkId::ColorTable]);
        let sequence: Vec<(SinkId, &Event)> = events
            .iter()
            .filter(|(_, event, _)| matches!(event, Event::Enter | Event::Exit))
            .map(|(sink, event, _)| (*sink, event))
            .collect();
        assert_eq!(
            sequence,
            vec![
                (SinkId::Document, &Event::Enter),
                (SinkId::FontTable, &Event::Enter),
                (SinkId::FontTable, &Event::Exit),
                (SinkId::ColorTable, &Event::Enter),
                (SinkId::ColorTable, &Event::Exit),
                (SinkId::Document, &Event::Exit),
            ]
        );
    }

    #[test]
    fn test_unicode_with_fallback() {
        let (_, events, _) = run(br"{\uc1\u8212?x\uc0\u233 y}", &[SinkId::Document]);
        let texts: Vec<String> = texts(&events, SinkId::Document).into_iter().map(|t| t.0).collect();
        assert_eq!(texts, vec!["\u{2014}", "x", "\u{e9}", "y"]);
    }

    #[test]
    fn test_unicode_negative_and_surrogates() {
        let (_, events, _) = run(br"{\u-3913?\u-10179?\u-8704?}", &[SinkId::Document]);
        let texts: Vec<String> = texts(&events, SinkId::Document).into_iter().map(|t| t.0).collect();
        // -3913 wraps to U+F0B7; -10179/-8704 are the surrogate pair for U+1F600
        assert_eq!(texts, vec!["\u{f0b7}", "\u{1f600}"]);
    }

    #[test]
    fn test_symbols_count_as_fallback() {
        let (_, events, _) = run(br"{\uc1\u8220\ldblquote x}", &[SinkId::Document]);
        let texts: Vec<String> = texts(&events, SinkId::Document).into_iter().map(|t| t.0).collect();
        assert_eq!(texts, vec!["\u{201c}", "x"]);
    }

    #[test]
    fn test_control_words_count_as_fallback() {
        let (_, events, _) = run(br"{\uc1\u8364\b x\uc2\u233\i\'e9y}", &[SinkId::Document]);
        let texts = texts(&events, SinkId::Document);
        let strings: Vec<&str> = texts.iter().map(|t| t.0.as_str()).collect();
        assert_eq!(strings, vec!["\u{20ac}", "x", "\u{e9}", "y"]);
        assert!(!texts[1].1.flag(PropertyKey::Bold));
        assert!(!texts[3].1.flag(PropertyKey::Italic));
    }

    #[test]
    fn test_unpaired_high_surrogate_becomes_replacement() {
        let (_, events, _) = run(br"{a\u-10179?bc{\u-10179?}\u-10179?\emdash\u-10179?\u65?}", &[SinkId::Document]);
        let texts: Vec<String> = texts(&events, SinkId::Document).into_iter().map(|t| t.0).collect();
        assert_eq!(
            texts,
            vec!["a", "\u{fffd}", "bc", "\u{fffd}", "\u{fffd}", "\u{2014}", "\u{fffd}", "A"]
        );
    }

    #[test]
    fn test_ignorable_word_at_top_level_is_read() {
        let (result, events, diagnostics) = run(br"\*\foo text{\b x}", &[SinkId::Document]);
        assert!(result.is_ok());
        let texts = texts(&events, SinkId::Document);
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].0, "text");
        assert_eq!(texts[1].0, "x");
        assert!(texts[1].1.flag(PropertyKey::Bold));
        assert!(!diagnostics.iter().any(|d| matches!(d, Diagnostic::SkippedGroup { .. })));
    }

    #[test]
    fn test_symbols_and_resets() {
        let (_, events, _) = run(br"{\b\i a\plain b\par\qc c\pard d}", &[SinkId::Document]);
        let texts = texts(&events, SinkId::Document);
        assert_eq!(texts[0].0, "a");
        assert!(texts[0].1.flag(PropertyKey::Italic));
        assert_eq!(texts[1].0, "b");
        assert!(!texts[1].1.flag(PropertyKey::Bold));
        assert_eq!(texts[2].0, "\n");
        assert_eq!(texts[3].1.int(PropertyKey::Alignment), Some(2));
        assert_eq!(texts[4].1.int(PropertyKey::Alignment), Some(0));
    }

    #[test]
    fn test_clearable_flag() {
        let (_, events, _) = run(br"{\intbl a\intbl0 b}", &[SinkId::Document]);
        let texts = texts(&events, SinkId::Document);
        assert!(texts[0].1.flag(PropertyKey::InTable));
        assert!(!texts[1].1.flag(PropertyKey::InTable));
    }

    #[test]
    fn test_nesting_limit() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut sinks = registry(&log, &[]);
        let mut interpreter = Interpreter::new(&mut sinks, ParserOptions::new().with_max_depth(3));
        let result = interpreter.run(Lexer::new(b"{{{{x}}}}"));
        assert!(matches!(
            result,
            Err(RtfError::NestingTooDeep { offset: 3, limit: 3 })
        ));
    }

    #[test]
    fn test_diagnostics_can_be_disabled() {
        let mut sinks = SinkRegistry::new();
        let mut interpreter = Interpreter::new(&mut sinks, ParserOptions::new().with_diagnostics(false));
        interpreter.run(Lexer::new(br"{\nope}")).unwrap();
        assert!(interpreter.diagnostics().is_empty());
    }

    fn balanced_groups() -> impl Strategy<Value = String> {
        let leaf = prop_oneof![
            Just(String::new()),
            "[a-z ]{1,5}",
            Just(r"\b ".to_string()),
            Just(r"\fs20 ".to_string()),
        ];
        leaf.prop_recursive(6, 48, 4, |inner| {
            prop_oneof![
                inner.clone().prop_map(|s| format!("{{{}}}", s)),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{}{}", a, b)),
                inner.clone().prop_map(|s| format!(r"{{\fonttbl {}}}", s)),
                inner.clone().prop_map(|s| format!(r"{{\colortbl {}}}", s)),
                inner.clone().prop_map(|s| format!(r"{{\*\unknown {}}}", s)),
                inner.prop_map(|s| format!(r"{{\header {}}}", s)),
            ]
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_balanced_groups_end_at_depth_zero(body in balanced_groups()) {
            let input = format!("{{\\rtf1 {}}}", body);
            let log: Log = Rc::new(RefCell::new(Vec::new()));
            let mut sinks = registry(&log, &[SinkId::Document, SinkId::FontTable, SinkId::ColorTable]);
            let mut interpreter = Interpreter::new(&mut sinks, ParserOptions::default());
            prop_assert!(interpreter.run(Lexer::new(input.as_bytes())).is_ok());
            prop_assert_eq!(interpreter.depth(), 0);
            prop_assert_eq!(interpreter.active_destination(), SinkId::Document);
        }

        #[test]
        fn prop_missing_close_reports_depth(body in balanced_groups(), extra in 1usize..5) {
            let input = format!("{}{{\\rtf1 {}", "{".repeat(extra - 1), body);
            let (result, _, _) = run(input.as_bytes(), &[SinkId::Document]);
            match result {
                Err(RtfError::UnbalancedGroup { depth, .. }) => prop_assert_eq!(depth, extra),
                other => prop_assert!(false, "expected unbalanced group, got {:?}", other),
            }
        }

        #[test]
        fn prop_enter_exit_balance(body in balanced_groups()) {
            let input = format!("{{\\rtf1 {}}}", body);
            let ids = [SinkId::Document, SinkId::FontTable, SinkId::ColorTable];
            let (result, events, _) = run(input.as_bytes(), &ids);
            prop_assert!(result.is_ok());
            for id in ids {
                let mut open = 0i64;
                for (sink, event, _) in &events {
                    if *sink != id {
                        continue;
                    }
                    match event {
                        Event::Enter => open += 1,
                        Event::Exit => {
                            open -= 1;
                            prop_assert!(open >= 0);
                        },
                        _ => {},
                    }
                }
                prop_assert_eq!(open, 0);
            }
        }

        #[test]
        fn prop_toggle_is_deterministic(parameter in proptest::option::of(-3i32..4)) {
            let word = match parameter {
                Some(p) => format!(r"\b{} ", p),
                None => r"\b ".to_string(),
            };
            let input = format!("{{{}x}}", word);
            let (_, events, _) = run(input.as_bytes(), &[SinkId::Document]);
            let texts = texts(&events, SinkId::Document);
            prop_assert_eq!(texts[0].1.flag(PropertyKey::Bold), parameter != Some(0));
        }

        #[test]
        fn prop_group_scoping(size in 1i32..100) {
            let input = format!(r"{{\fs10 a{{\fs{} b}}c}}", size);
            let (_, events, _) = run(input.as_bytes(), &[SinkId::Document]);
            let texts = texts(&events, SinkId::Document);
            prop_assert_eq!(texts[1].1.int(PropertyKey::FontSize), Some(size));
            prop_assert_eq!(texts[2].1.int(PropertyKey::FontSize), Some(10));
            prop_assert_eq!(texts[0].1, texts[2].1);
        }
    }
}
