//! Destinations: where interpreted events go.
//!
//! An RTF destination is a region of the stream whose text and control words
//! mean something specific (the font table, the document body, a picture...).
//! The interpreter delivers events to whichever [`Destination`] is active;
//! destinations are addressed by [`SinkId`] and resolved through a [`SinkSet`]
//! supplied by the application.

pub mod color;
pub mod document;
pub mod font;
pub mod info;
pub mod list;
pub mod picture;
pub mod router;
pub mod stylesheet;
pub mod text;

use crate::catalog::ControlWordDescriptor;
use crate::property::PropertyTable;
use std::collections::HashMap;
use std::fmt;

pub use router::Router;

/// Identifies a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkId {
    /// Main document text (`\rtf`, `\field`, `\fldrslt`)
    Document,
    /// `\fonttbl`
    FontTable,
    /// `\colortbl`
    ColorTable,
    /// `\stylesheet`
    StyleSheet,
    /// `\listtable`
    ListTable,
    /// `\listoverridetable`
    ListOverrideTable,
    /// `\info` and its children, plus `\*\generator`
    Info,
    /// `\pict`
    Picture,
    /// Discards everything
    Null,
    /// Any other destination, by control word name
    Named(&'static str),
}

impl fmt::Display for SinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkId::Document => f.write_str("document"),
            SinkId::FontTable => f.write_str("font table"),
            SinkId::ColorTable => f.write_str("color table"),
            SinkId::StyleSheet => f.write_str("stylesheet"),
            SinkId::ListTable => f.write_str("list table"),
            SinkId::ListOverrideTable => f.write_str("list override table"),
            SinkId::Info => f.write_str("info"),
            SinkId::Picture => f.write_str("picture"),
            SinkId::Null => f.write_str("null"),
            SinkId::Named(name) => write!(f, "\\{}", name),
        }
    }
}

/// A piece of text delivered to a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextChunk<'a> {
    /// Bytes in the current code page (literal text and `\'hh` escapes)
    Bytes(&'a [u8]),
    /// Already-decoded text (`\u` characters and symbol substitutions)
    Unicode(&'a str),
    /// Opaque `\bin` payload
    Binary(&'a [u8]),
}

/// A control word as seen by a destination.
#[derive(Debug, Clone, Copy)]
pub struct ControlEvent {
    /// Catalog entry of the word
    pub descriptor: &'static ControlWordDescriptor,
    /// Parameter after the default-passing rule was applied
    pub parameter: Option<i32>,
}

impl ControlEvent {
    #[inline]
    pub fn new(descriptor: &'static ControlWordDescriptor, parameter: Option<i32>) -> Self {
        Self {
            descriptor,
            parameter,
        }
    }

    /// Name of the control word.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    /// Parameter, or `fallback` when there is none.
    #[inline]
    pub fn value_or(&self, fallback: i32) -> i32 {
        self.parameter.unwrap_or(fallback)
    }
}

/// Receiver of interpreted events.
///
/// Every method receives the property table of the innermost group, so a
/// destination can read formatting lazily instead of tracking it. For every
/// group a destination is entered in, it sees exactly one `on_enter` and one
/// `on_exit`; `on_exit` runs before the group's properties are discarded.
pub trait Destination {
    /// The destination became active in a group (at `{` or when switched to).
    fn on_enter(&mut self, _properties: &PropertyTable) {}

    /// A control word was dispatched while this destination was active.
    fn on_control_word(&mut self, _event: &ControlEvent, _properties: &PropertyTable) {}

    /// Text was delivered.
    fn on_text(&mut self, _chunk: TextChunk<'_>, _properties: &PropertyTable) {}

    /// A group this destination was entered in is closing.
    fn on_exit(&mut self, _properties: &PropertyTable) {}
}

/// Resolves destination ids to live destinations.
///
/// Returning `None` means the destination is not recognized; the interpreter
/// then discards its content (and skips it entirely when it is ignorable).
/// Implementations usually create destinations lazily on first request and
/// keep them, so state survives re-entry.
pub trait SinkSet {
    fn sink(&mut self, id: SinkId) -> Option<&mut dyn Destination>;
}

/// Destination that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl Destination for NullSink {}

type SinkFactory = Box<dyn Fn() -> Box<dyn Destination>>;

/// A [`SinkSet`] assembled at runtime from factories.
///
/// Destinations are instantiated the first time the interpreter asks for them.
#[derive(Default)]
pub struct SinkRegistry {
    factories: HashMap<SinkId, SinkFactory>,
    sinks: HashMap<SinkId, Box<dyn Destination>>,
}

impl SinkRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for `id`, replacing any previous one.
    pub fn register<F>(&mut self, id: SinkId, factory: F) -> &mut Self
    where
        F: Fn() -> Box<dyn Destination> + 'static,
    {
        self.factories.insert(id, Box::new(factory));
        self
    }

    /// Whether a factory is registered for `id`.
    pub fn contains(&self, id: SinkId) -> bool {
        self.factories.contains_key(&id)
    }

    /// Whether the destination for `id` has been instantiated.
    pub fn is_instantiated(&self, id: SinkId) -> bool {
        self.sinks.contains_key(&id)
    }

    /// Remove and return an instantiated destination.
    pub fn take(&mut self, id: SinkId) -> Option<Box<dyn Destination>> {
        self.sinks.remove(&id)
    }
}

impl SinkSet for SinkRegistry {
    fn sink(&mut self, id: SinkId) -> Option<&mut dyn Destination> {
        if !self.sinks.contains_key(&id) {
            let factory = self.factories.get(&id)?;
            self.sinks.insert(id, factory());
        }
        let sink: &mut dyn Destination = self.sinks.get_mut(&id)?.as_mut();
        Some(sink)
    }
}

impl fmt::Debug for SinkRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkRegistry")
            .field("registered", &self.factories.keys().collect::<Vec<_>>())
            .field("instantiated", &self.sinks.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counting(Rc<Cell<u32>>);

    impl Destination for Counting {
        fn on_enter(&mut self, _properties: &PropertyTable) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_registry_instantiates_lazily_once() {
        let created = Rc::new(Cell::new(0));
        let entered = Rc::new(Cell::new(0));
        let mut registry = SinkRegistry::new();
        {
            let created = created.clone();
            let entered = entered.clone();
            registry.register(SinkId::Named("footnote"), move || {
                created.set(created.get() + 1);
                Box::new(Counting(entered.clone()))
            });
        }

        assert!(registry.contains(SinkId::Named("footnote")));
        assert!(!registry.is_instantiated(SinkId::Named("footnote")));
        assert!(registry.sink(SinkId::FontTable).is_none());

        let props = PropertyTable::new();
        for _ in 0..3 {
            if let Some(sink) = registry.sink(SinkId::Named("footnote")) {
                sink.on_enter(&props);
            }
        }
        assert_eq!(created.get(), 1);
        assert_eq!(entered.get(), 3);
        assert!(registry.take(SinkId::Named("footnote")).is_some());
    }

    #[test]
    fn test_sink_id_display() {
        assert_eq!(SinkId::ColorTable.to_string(), "color table");
        assert_eq!(SinkId::Named("header").to_string(), "\\header");
    }
}
