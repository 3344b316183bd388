//! The control-word catalog.
//!
//! Every control word the interpreter knows about is described once, in a
//! compile-time perfect-hash table (see `words.rs`). A descriptor carries the
//! word's kind together with a typed payload (the property it sets, the text it
//! stands for, the destination it opens), the default parameter and the affixes
//! the writer puts around it. Lookup is total: names that are not catalogued
//! resolve to [`UNKNOWN`].
//!
//! The table is data, not policy. Kinds are kept exactly as catalogued even
//! where a word's name suggests otherwise, e.g. `\ansicpg` is a value and
//! `\pgnrestart` a flag.

mod words;

use crate::destination::SinkId;
use crate::property::{PropertyGroup, PropertyKey};
use std::fmt;

/// What a FLAG word does to the property table when it appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagEffect {
    /// No property effect; the word is only forwarded to the destination
    None,
    /// Set the key to `true`
    Set(PropertyKey),
    /// Set the key to `true`; an explicit `0` parameter clears it
    Clearable(PropertyKey),
    /// Assign an enumerated value (e.g. `\qc` assigns centered alignment)
    Assign(PropertyKey, i32),
    /// Restore the defaults of a property group (`\plain`, `\pard`, ...)
    Reset(PropertyGroup),
}

/// Classification of a control word, with its typed payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Carries a numeric value, optionally stored under a property key
    Value(Option<PropertyKey>),
    /// Presence switches something on
    Flag(FlagEffect),
    /// On unless the parameter is an explicit `0`
    Toggle(Option<PropertyKey>),
    /// Stands for literal text
    Symbol(&'static str),
    /// Opens a destination for the rest of the group
    Destination(SinkId),
    /// Opens a destination that readers may ignore (written after `\*`)
    DestinationEx(SinkId),
    /// Not catalogued
    Unidentified,
}

/// The plain kind of a control word, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlWordType {
    Value,
    Flag,
    Toggle,
    Symbol,
    Destination,
    DestinationEx,
    Unidentified,
}

impl fmt::Display for ControlWordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ControlWordType::Value => "VALUE",
            ControlWordType::Flag => "FLAG",
            ControlWordType::Toggle => "TOGGLE",
            ControlWordType::Symbol => "SYMBOL",
            ControlWordType::Destination => "DESTINATION",
            ControlWordType::DestinationEx => "DESTINATION_EX",
            ControlWordType::Unidentified => "UNIDENTIFIED",
        };
        f.write_str(name)
    }
}

/// Immutable catalog entry for one control word or control symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlWordDescriptor {
    /// Name without the leading backslash (`"b"`, `"fonttbl"`, `"~"`)
    pub name: &'static str,
    /// Parameter assumed when the word appears without one
    pub default_parameter: i32,
    /// Whether the default is passed on when no parameter is given
    pub pass_default: bool,
    /// Kind and payload
    pub kind: ControlKind,
    /// Text the writer emits before the name
    pub prefix: &'static str,
    /// Text the writer emits after the name and parameter
    pub suffix: &'static str,
}

/// Descriptor returned for every name the catalog does not know.
pub static UNKNOWN: ControlWordDescriptor = ControlWordDescriptor {
    name: "",
    default_parameter: 0,
    pass_default: false,
    kind: ControlKind::Unidentified,
    prefix: "\\",
    suffix: " ",
};

impl ControlWordDescriptor {
    /// Kind without payload.
    pub const fn kind_type(&self) -> ControlWordType {
        match self.kind {
            ControlKind::Value(_) => ControlWordType::Value,
            ControlKind::Flag(_) => ControlWordType::Flag,
            ControlKind::Toggle(_) => ControlWordType::Toggle,
            ControlKind::Symbol(_) => ControlWordType::Symbol,
            ControlKind::Destination(_) => ControlWordType::Destination,
            ControlKind::DestinationEx(_) => ControlWordType::DestinationEx,
            ControlKind::Unidentified => ControlWordType::Unidentified,
        }
    }

    /// Parameter after applying the default-passing rule.
    #[inline]
    pub fn effective_parameter(&self, explicit: Option<i32>) -> Option<i32> {
        explicit.or(self.pass_default.then_some(self.default_parameter))
    }

    /// Destination opened by this word, if it is a destination.
    #[inline]
    pub const fn destination(&self) -> Option<SinkId> {
        match self.kind {
            ControlKind::Destination(id) | ControlKind::DestinationEx(id) => Some(id),
            _ => None,
        }
    }

    /// Whether this is an ignorable (`\*`) destination.
    #[inline]
    pub const fn is_extended(&self) -> bool {
        matches!(self.kind, ControlKind::DestinationEx(_))
    }

    /// Whether the name was not found in the catalog.
    #[inline]
    pub const fn is_unidentified(&self) -> bool {
        matches!(self.kind, ControlKind::Unidentified)
    }

    /// Whether this word announces a binary blob (`\bin`).
    #[inline]
    pub const fn is_binary_length(&self) -> bool {
        matches!(
            self.kind,
            ControlKind::Value(Some(PropertyKey::BinaryLength))
        )
    }

    /// Property key the word stores into, if any.
    pub const fn property(&self) -> Option<PropertyKey> {
        match self.kind {
            ControlKind::Value(key) | ControlKind::Toggle(key) => key,
            ControlKind::Flag(
                FlagEffect::Set(key) | FlagEffect::Clearable(key) | FlagEffect::Assign(key, _),
            ) => Some(key),
            _ => None,
        }
    }

    /// Append the RTF spelling of this word to `out`: prefix, name, optional
    /// parameter, suffix.
    pub fn encode_into(&self, out: &mut Vec<u8>, parameter: Option<i32>) {
        out.extend_from_slice(self.prefix.as_bytes());
        out.extend_from_slice(self.name.as_bytes());
        if let Some(value) = parameter {
            let mut buffer = itoa::Buffer::new();
            out.extend_from_slice(buffer.format(value).as_bytes());
        }
        out.extend_from_slice(self.suffix.as_bytes());
    }
}

/// Look a control word up by name. Case-sensitive and total.
///
/// # Examples
///
/// ```
/// use rtfkit::catalog::{self, ControlWordType};
///
/// assert_eq!(catalog::lookup("b").kind_type(), ControlWordType::Toggle);
/// assert_eq!(catalog::lookup("fonttbl").kind_type(), ControlWordType::Destination);
/// assert!(catalog::lookup("B").is_unidentified());
/// ```
#[inline]
pub fn lookup(name: &str) -> &'static ControlWordDescriptor {
    words::CONTROL_WORDS.get(name).unwrap_or(&UNKNOWN)
}

/// Look a control symbol up by its character.
#[inline]
pub fn lookup_symbol(symbol: u8) -> &'static ControlWordDescriptor {
    match std::str::from_utf8(std::slice::from_ref(&symbol)) {
        Ok(name) => lookup(name),
        Err(_) => &UNKNOWN,
    }
}

/// Look a control word up, returning `None` for uncatalogued names.
#[inline]
pub fn get(name: &str) -> Option<&'static ControlWordDescriptor> {
    words::CONTROL_WORDS.get(name)
}

/// Number of catalogued words and symbols.
#[inline]
pub fn len() -> usize {
    words::CONTROL_WORDS.len()
}

/// Iterate over every catalog entry, in no particular order.
pub fn iter() -> impl Iterator<Item = &'static ControlWordDescriptor> {
    words::CONTROL_WORDS.values()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_keys_match_descriptor_names() {
        for (key, descriptor) in words::CONTROL_WORDS.entries() {
            assert_eq!(*key, descriptor.name);
        }
        assert!(len() > 1000);
    }

    #[test]
    fn test_authoritative_classifications() {
        assert_eq!(lookup("ansicpg").kind_type(), ControlWordType::Value);
        assert_eq!(lookup("pgnrestart").kind_type(), ControlWordType::Flag);
        assert_eq!(lookup("b").kind, ControlKind::Toggle(Some(PropertyKey::Bold)));
        assert_eq!(
            lookup("colortbl").kind,
            ControlKind::Destination(SinkId::ColorTable)
        );
        assert_eq!(
            lookup("listtable").kind,
            ControlKind::DestinationEx(SinkId::ListTable)
        );
        assert_eq!(lookup("par").kind, ControlKind::Symbol("\n"));
        assert_eq!(lookup("~").kind, ControlKind::Symbol("\u{00A0}"));
        assert!(lookup("bin").is_binary_length());
    }

    #[test]
    fn test_default_parameters() {
        let fs = lookup("fs");
        assert_eq!(fs.effective_parameter(None), Some(24));
        assert_eq!(fs.effective_parameter(Some(32)), Some(32));

        let uc = lookup("uc");
        assert_eq!(uc.effective_parameter(None), Some(1));

        let b = lookup("b");
        assert_eq!(b.effective_parameter(None), None);
    }

    #[test]
    fn test_affixes() {
        let mut out = Vec::new();
        lookup("fs").encode_into(&mut out, Some(28));
        lookup("~").encode_into(&mut out, None);
        lookup("listtable").encode_into(&mut out, None);
        assert_eq!(out, b"\\fs28 \\~\\*\\listtable ");
    }

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(lookup_symbol(b'{').kind, ControlKind::Symbol("{"));
        assert_eq!(lookup_symbol(b'\n').kind, ControlKind::Symbol("\n"));
        assert!(lookup_symbol(0xE9).is_unidentified());
    }

    #[test]
    fn test_unknown_sentinel() {
        assert!(std::ptr::eq(lookup("notaword"), &UNKNOWN));
        assert_eq!(get("notaword"), None);
        assert_eq!(UNKNOWN.kind_type(), ControlWordType::Unidentified);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_lookup_is_total(name in "[a-zA-Z]{1,12}") {
            let descriptor = lookup(&name);
            if descriptor.is_unidentified() {
                prop_assert!(get(&name).is_none());
            } else {
                prop_assert_eq!(descriptor.name, name.as_str());
            }
        }
    }
}
