//! RTF signature detection.
//!
//! RTF files start with `{\rtf`, normally followed by the version number
//! (`{\rtf1`). Leading whitespace and a UTF-8 byte order mark are tolerated,
//! since editors occasionally prepend either.

use std::io::{Read, Seek, SeekFrom};

const RTF_SIGNATURE: &[u8] = b"{\\rtf";
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Bytes read from a stream when probing for the signature.
const PROBE_LEN: usize = 64;

/// A detected RTF signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RtfSignature {
    /// Offset of the opening `{`
    pub offset: usize,
    /// Declared version (`\rtfN`), `None` for a bare `{\rtf`
    pub version: Option<i32>,
}

/// Detect the `{\rtf` signature at the start of `bytes`.
///
/// # Examples
///
/// ```rust
/// use rtfkit::detection::detect_rtf;
///
/// let signature = detect_rtf(b"{\\rtf1\\ansi Hello}").unwrap();
/// assert_eq!(signature.version, Some(1));
///
/// assert!(detect_rtf(b"Plain text file").is_none());
/// ```
pub fn detect_rtf(bytes: &[u8]) -> Option<RtfSignature> {
    let mut start = 0;
    if bytes.starts_with(&UTF8_BOM) {
        start = UTF8_BOM.len();
    }
    start += bytes[start..]
        .iter()
        .take_while(|b| b.is_ascii_whitespace())
        .count();

    let rest = &bytes[start..];
    if !rest.starts_with(RTF_SIGNATURE) {
        return None;
    }

    let after = &rest[RTF_SIGNATURE.len()..];
    let digits = after.iter().take_while(|b| b.is_ascii_digit()).count();
    let version = if digits == 0 {
        None
    } else {
        atoi_simd::parse::<i32>(&after[..digits]).ok()
    };

    Some(RtfSignature {
        offset: start,
        version,
    })
}

/// Whether `bytes` look like an RTF document.
#[inline]
pub fn is_rtf(bytes: &[u8]) -> bool {
    detect_rtf(bytes).is_some()
}

/// Detect the signature from a reader, then rewind it to where it was.
pub fn detect_rtf_from_reader<R: Read + Seek>(reader: &mut R) -> std::io::Result<Option<RtfSignature>> {
    let start = reader.stream_position()?;
    let mut buffer = Vec::with_capacity(PROBE_LEN);
    reader.by_ref().take(PROBE_LEN as u64).read_to_end(&mut buffer)?;
    reader.seek(SeekFrom::Start(start))?;
    Ok(detect_rtf(&buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_detect_versions() {
        assert_eq!(
            detect_rtf(b"{\\rtf1\\ansi\\deff0 Hello}"),
            Some(RtfSignature {
                offset: 0,
                version: Some(1)
            })
        );
        assert_eq!(detect_rtf(b"{\\rtf}").unwrap().version, None);
    }

    #[test]
    fn test_detect_leading_noise() {
        let signature = detect_rtf(b"\xEF\xBB\xBF \r\n{\\rtf1 x}").unwrap();
        assert_eq!(signature.offset, 6);
        assert_eq!(signature.version, Some(1));
    }

    #[test]
    fn test_reject_non_rtf() {
        assert!(!is_rtf(b"Plain text file"));
        assert!(!is_rtf(b"{\\rt"));
        assert!(!is_rtf(b""));
        assert!(!is_rtf(b"x{\\rtf1}"));
    }

    #[test]
    fn test_reader_is_rewound() {
        let data = b"{\\rtf1\\ansi Hello World}";
        let mut cursor = Cursor::new(&data[..]);
        let signature = detect_rtf_from_reader(&mut cursor).unwrap();
        assert_eq!(signature.map(|s| s.version), Some(Some(1)));

        let mut buffer = Vec::new();
        cursor.read_to_end(&mut buffer).unwrap();
        assert_eq!(&buffer[..], data);
    }
}
