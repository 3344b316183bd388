//! Error types for RTF reading and writing.
//!
//! Only a handful of conditions are fatal: a stream that ends in the middle of
//! a token, braces that do not balance, and (when configured) nesting deeper
//! than the anti-bomb limit. Everything else an RTF reader meets in the wild,
//! such as unknown control words or destinations, is tolerated and reported as
//! a [`Diagnostic`](crate::interpreter::Diagnostic) instead.

use std::fmt;
use thiserror::Error;

/// Result type for RTF operations.
pub type RtfResult<T> = std::result::Result<T, RtfError>;

/// The construct the input ended inside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncation {
    /// A lone `\` at the end of input
    ControlWord,
    /// A parameter sign with no digits after it
    Parameter,
    /// A `\'` escape missing one or both hex digits
    HexEscape,
    /// A `\binN` payload shorter than `N`
    BinaryBlob,
}

impl fmt::Display for Truncation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            Truncation::ControlWord => "control word",
            Truncation::Parameter => "control word parameter",
            Truncation::HexEscape => "hex escape",
            Truncation::BinaryBlob => "binary data",
        };
        f.write_str(what)
    }
}

/// RTF errors.
#[derive(Error, Debug)]
pub enum RtfError {
    /// The stream ended in the middle of a token
    #[error("Unexpected end of input inside {what} at byte {offset}")]
    TruncatedInput { offset: usize, what: Truncation },

    /// A `}` without a matching `{`, or unclosed groups at end of input
    #[error("Unbalanced group at byte {offset}: {depth} group(s) still open")]
    UnbalancedGroup { offset: usize, depth: usize },

    /// Group nesting went past the configured limit
    #[error("Group nesting exceeds the limit of {limit} at byte {offset}")]
    NestingTooDeep { offset: usize, limit: usize },

    /// Input does not start with the `{\rtf` signature
    #[error("Not an RTF document")]
    NotRtf,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RtfError {
    /// Byte offset into the input at which a parse error was detected.
    pub fn offset(&self) -> Option<usize> {
        match self {
            RtfError::TruncatedInput { offset, .. }
            | RtfError::UnbalancedGroup { offset, .. }
            | RtfError::NestingTooDeep { offset, .. } => Some(*offset),
            RtfError::NotRtf | RtfError::Io(_) => None,
        }
    }

    /// Whether this error came from the structure of the input (as opposed to IO).
    #[inline]
    pub fn is_syntax_error(&self) -> bool {
        self.offset().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_reporting() {
        let err = RtfError::TruncatedInput {
            offset: 12,
            what: Truncation::BinaryBlob,
        };
        assert_eq!(err.offset(), Some(12));
        assert!(err.is_syntax_error());
        assert_eq!(
            err.to_string(),
            "Unexpected end of input inside binary data at byte 12"
        );

        let io = RtfError::from(std::io::Error::other("disk gone"));
        assert_eq!(io.offset(), None);
    }

    #[test]
    fn test_unbalanced_message() {
        let err = RtfError::UnbalancedGroup { offset: 10, depth: 1 };
        assert!(err.to_string().contains("1 group(s) still open"));
    }
}
