//! The `\colortbl` destination.

use super::{ControlEvent, Destination, TextChunk};
use crate::model::{Color, ColorTable};
use crate::property::PropertyTable;

#[derive(Debug, Clone, Copy, Default)]
struct PendingColor {
    red: Option<u8>,
    green: Option<u8>,
    blue: Option<u8>,
}

impl PendingColor {
    fn is_auto(&self) -> bool {
        self.red.is_none() && self.green.is_none() && self.blue.is_none()
    }

    fn color(&self) -> Color {
        Color::new(
            self.red.unwrap_or(0),
            self.green.unwrap_or(0),
            self.blue.unwrap_or(0),
        )
    }
}

/// Collects the color table. Each `;` ends an entry; an entry without any
/// component is the auto color.
#[derive(Debug, Default)]
pub struct ColorTableSink {
    colors: ColorTable,
    pending: PendingColor,
}

impl ColorTableSink {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    pub fn into_colors(self) -> ColorTable {
        self.colors
    }

    fn commit(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        if pending.is_auto() {
            self.colors.add_auto();
        } else {
            self.colors.add(pending.color());
        }
    }
}

impl Destination for ColorTableSink {
    fn on_control_word(&mut self, event: &ControlEvent, _properties: &PropertyTable) {
        let component = event.parameter.map(|v| v.clamp(0, 255) as u8);
        match event.name() {
            "red" => self.pending.red = component,
            "green" => self.pending.green = component,
            "blue" => self.pending.blue = component,
            _ => {},
        }
    }

    fn on_text(&mut self, chunk: TextChunk<'_>, _properties: &PropertyTable) {
        if let TextChunk::Bytes(bytes) = chunk {
            for _ in memchr::memchr_iter(b';', bytes) {
                self.commit();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(name: &str, value: i32) -> ControlEvent {
        ControlEvent::new(crate::catalog::lookup(name), Some(value))
    }

    #[test]
    fn test_entries() {
        let props = PropertyTable::new();
        let mut sink = ColorTableSink::new();
        sink.on_text(TextChunk::Bytes(b";"), &props);
        sink.on_control_word(&word("red", 255), &props);
        sink.on_control_word(&word("green", 0), &props);
        sink.on_control_word(&word("blue", 0), &props);
        sink.on_text(TextChunk::Bytes(b";"), &props);
        sink.on_control_word(&word("blue", 300), &props);
        sink.on_text(TextChunk::Bytes(b" ; "), &props);

        let colors = sink.into_colors();
        assert_eq!(colors.len(), 3);
        assert!(colors.is_auto(0));
        assert_eq!(colors.get(1), Some(&Color::new(255, 0, 0)));
        assert_eq!(colors.get(2), Some(&Color::new(0, 0, 255)));
    }

    #[test]
    fn test_adjacent_separators() {
        let props = PropertyTable::new();
        let mut sink = ColorTableSink::new();
        sink.on_text(TextChunk::Bytes(b";;"), &props);
        assert_eq!(sink.colors().len(), 2);
    }
}
