//! Text accumulation shared by the destinations.
//!
//! Code-page bytes are buffered and decoded in one go, so double-byte
//! characters split across `\'hh` escapes decode correctly.

use crate::encoding::{CharacterSet, encoding_or_default};
use crate::property::{PropertyKey, PropertyTable};

/// Code page in effect for the given properties.
///
/// `\ansicpg` wins over the character set; when neither was declared the
/// `fallback` applies.
pub fn code_page_of(properties: &PropertyTable, fallback: u32) -> u32 {
    if let Some(code_page) = properties
        .int(PropertyKey::AnsiCodePage)
        .filter(|&cp| cp > 0)
    {
        return code_page as u32;
    }
    if properties.is_set(PropertyKey::CharacterSet) {
        let set = CharacterSet::from_property(properties.int_or(PropertyKey::CharacterSet, 0));
        return set.code_page();
    }
    fallback
}

/// Buffer that collects mixed code-page bytes and Unicode text.
#[derive(Debug, Clone, Default)]
pub struct TextAccumulator {
    text: String,
    pending: Vec<u8>,
    pending_code_page: u32,
}

impl TextAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append bytes in `code_page`.
    pub fn push_bytes(&mut self, bytes: &[u8], code_page: u32) {
        if bytes.is_empty() {
            return;
        }
        if !self.pending.is_empty() && self.pending_code_page != code_page {
            self.flush();
        }
        self.pending_code_page = code_page;
        self.pending.extend_from_slice(bytes);
    }

    /// Append decoded text.
    pub fn push_str(&mut self, text: &str) {
        self.flush();
        self.text.push_str(text);
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let encoding = encoding_or_default(self.pending_code_page);
        let (decoded, had_errors) = encoding.decode_without_bom_handling(&self.pending);
        if had_errors {
            tracing::warn!(
                code_page = self.pending_code_page,
                "Malformed bytes for code page, replaced with U+FFFD"
            );
        }
        self.text.push_str(&decoded);
        self.pending.clear();
    }

    /// Whether nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.pending.is_empty()
    }

    /// Decoded text collected so far.
    pub fn as_str(&mut self) -> &str {
        self.flush();
        &self.text
    }

    /// Take the collected text, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        self.flush();
        std::mem::take(&mut self.text)
    }
}

/// Split `bytes` at the first `;`, the entry terminator of the font, color and
/// style tables. Returns the bytes before it and, if one was found, the rest
/// after it.
pub(crate) fn split_entry(bytes: &[u8]) -> (&[u8], Option<&[u8]>) {
    match memchr::memchr(b';', bytes) {
        Some(pos) => (&bytes[..pos], Some(&bytes[pos + 1..])),
        None => (bytes, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyValue;

    #[test]
    fn test_code_page_resolution() {
        let mut props = PropertyTable::new();
        assert_eq!(code_page_of(&props, 1252), 1252);

        props.set(PropertyKey::CharacterSet, PropertyValue::Int(1));
        assert_eq!(code_page_of(&props, 1252), 10000);

        props.set(PropertyKey::AnsiCodePage, PropertyValue::Int(1251));
        assert_eq!(code_page_of(&props, 1252), 1251);
    }

    #[test]
    fn test_mixed_accumulation() {
        let mut acc = TextAccumulator::new();
        acc.push_bytes(b"caf", 1252);
        acc.push_bytes(&[0xE9], 1252);
        acc.push_str(" \u{2014} ");
        acc.push_bytes(&[0xC4, 0xE3], 936);
        assert_eq!(acc.take(), "caf\u{e9} \u{2014} \u{4f60}");
        assert!(acc.is_empty());
    }

    #[test]
    fn test_double_byte_split_across_pushes() {
        let mut acc = TextAccumulator::new();
        acc.push_bytes(&[0x82], 932);
        acc.push_bytes(&[0xA0], 932);
        assert_eq!(acc.as_str(), "\u{3042}");
    }

    #[test]
    fn test_split_entry() {
        assert_eq!(split_entry(b"Arial;rest"), (&b"Arial"[..], Some(&b"rest"[..])));
        assert_eq!(split_entry(b"Arial"), (&b"Arial"[..], None));
    }
}
