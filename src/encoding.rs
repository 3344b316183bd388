//! Code page handling for RTF text.
//!
//! RTF text runs and `\'hh` escapes carry bytes in the document's code page,
//! declared by `\ansicpg` (or implied by `\ansi`, `\mac`, `\pc`, `\pca`).
//! Font entries may override it through `\fcharset`. Everything here maps
//! those declarations onto `encoding_rs` encodings.

use encoding_rs::Encoding;

/// Character set declared in the RTF header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharacterSet {
    /// ANSI (Windows-1252)
    #[default]
    Ansi,
    /// Apple Macintosh (Mac Roman)
    Mac,
    /// IBM PC code page 437
    Pc,
    /// IBM PC code page 850
    Pca,
}

impl CharacterSet {
    /// Value stored in the character-set property for this set.
    #[inline]
    pub const fn as_property(self) -> i32 {
        match self {
            CharacterSet::Ansi => 0,
            CharacterSet::Mac => 1,
            CharacterSet::Pc => 2,
            CharacterSet::Pca => 3,
        }
    }

    /// Inverse of [`CharacterSet::as_property`]; unknown values fall back to ANSI.
    #[inline]
    pub const fn from_property(value: i32) -> Self {
        match value {
            1 => CharacterSet::Mac,
            2 => CharacterSet::Pc,
            3 => CharacterSet::Pca,
            _ => CharacterSet::Ansi,
        }
    }

    /// Code page implied by the character set.
    #[inline]
    pub const fn code_page(self) -> u32 {
        match self {
            CharacterSet::Ansi => 1252,
            CharacterSet::Mac => 10000,
            CharacterSet::Pc => 437,
            CharacterSet::Pca => 850,
        }
    }
}

/// Map a Windows code page identifier to an `encoding_rs` encoding.
///
/// Code pages without an exact `encoding_rs` counterpart map to the closest
/// available encoding; truly unknown identifiers return `None`.
///
/// # Examples
///
/// ```
/// use rtfkit::encoding::codepage_to_encoding;
///
/// assert_eq!(codepage_to_encoding(936).unwrap().name(), "GBK");
/// assert!(codepage_to_encoding(12345).is_none());
/// ```
pub fn codepage_to_encoding(codepage: u32) -> Option<&'static Encoding> {
    match codepage {
        // DOS
        437 | 850 | 852 | 866 => Some(encoding_rs::IBM866),

        // Windows
        874 => Some(encoding_rs::WINDOWS_874),
        1250 => Some(encoding_rs::WINDOWS_1250),
        1251 => Some(encoding_rs::WINDOWS_1251),
        1252 => Some(encoding_rs::WINDOWS_1252),
        1253 => Some(encoding_rs::WINDOWS_1253),
        1254 => Some(encoding_rs::WINDOWS_1254),
        1255 => Some(encoding_rs::WINDOWS_1255),
        1256 => Some(encoding_rs::WINDOWS_1256),
        1257 => Some(encoding_rs::WINDOWS_1257),
        1258 => Some(encoding_rs::WINDOWS_1258),

        // East Asian
        932 => Some(encoding_rs::SHIFT_JIS),
        936 | 20936 => Some(encoding_rs::GBK),
        949 => Some(encoding_rs::EUC_KR),
        950 => Some(encoding_rs::BIG5),
        54936 => Some(encoding_rs::GB18030),
        20932 => Some(encoding_rs::EUC_JP),

        // ISO 8859
        28591 => Some(encoding_rs::WINDOWS_1252),
        28592 => Some(encoding_rs::ISO_8859_2),
        28595 => Some(encoding_rs::ISO_8859_5),
        28597 => Some(encoding_rs::ISO_8859_7),
        28598 => Some(encoding_rs::ISO_8859_8),
        28605 => Some(encoding_rs::ISO_8859_15),

        // KOI8
        20866 => Some(encoding_rs::KOI8_R),
        21866 => Some(encoding_rs::KOI8_U),

        // Macintosh
        10000 => Some(encoding_rs::MACINTOSH),
        10001 => Some(encoding_rs::SHIFT_JIS),
        10007 => Some(encoding_rs::X_MAC_CYRILLIC),

        65001 => Some(encoding_rs::UTF_8),

        _ => None,
    }
}

/// Map an `\fcharset` value to the Windows code page it implies.
///
/// Charsets 1 (default) and 2 (symbol) carry no code page of their own and
/// return `None`, as do unknown values.
pub const fn charset_to_codepage(charset: i32) -> Option<u32> {
    match charset {
        0 => Some(1252),
        77 => Some(10000),
        78 => Some(10001),
        128 => Some(932),
        129 => Some(949),
        130 => Some(1361),
        134 => Some(936),
        136 => Some(950),
        161 => Some(1253),
        162 => Some(1254),
        163 => Some(1258),
        177 => Some(1255),
        178 => Some(1256),
        186 => Some(1257),
        204 => Some(1251),
        222 => Some(874),
        238 => Some(1250),
        254 => Some(437),
        255 => Some(850),
        _ => None,
    }
}

/// Resolve the encoding for a code page, falling back to Windows-1252.
#[inline]
pub fn encoding_or_default(codepage: u32) -> &'static Encoding {
    codepage_to_encoding(codepage).unwrap_or(encoding_rs::WINDOWS_1252)
}

/// Convert an ASCII hex digit to its value.
#[inline]
pub const fn hex_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codepage_lookup() {
        assert_eq!(codepage_to_encoding(1252), Some(encoding_rs::WINDOWS_1252));
        assert_eq!(codepage_to_encoding(932), Some(encoding_rs::SHIFT_JIS));
        assert_eq!(codepage_to_encoding(1), None);
        assert_eq!(encoding_or_default(1), encoding_rs::WINDOWS_1252);
    }

    #[test]
    fn test_charset_mapping() {
        assert_eq!(charset_to_codepage(128), Some(932));
        assert_eq!(charset_to_codepage(204), Some(1251));
        assert_eq!(charset_to_codepage(2), None);
    }

    #[test]
    fn test_character_set_round_trip() {
        for set in [
            CharacterSet::Ansi,
            CharacterSet::Mac,
            CharacterSet::Pc,
            CharacterSet::Pca,
        ] {
            assert_eq!(CharacterSet::from_property(set.as_property()), set);
        }
        assert_eq!(CharacterSet::Mac.code_page(), 10000);
    }

    #[test]
    fn test_hex_nibble() {
        assert_eq!(hex_nibble(b'7'), Some(7));
        assert_eq!(hex_nibble(b'e'), Some(14));
        assert_eq!(hex_nibble(b'F'), Some(15));
        assert_eq!(hex_nibble(b'g'), None);
    }
}
