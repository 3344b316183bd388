//! RTF lexer/tokenizer.
//!
//! Splits raw RTF bytes into tokens without interpreting them. The only
//! semantic question the lexer asks is whether a control word announces binary
//! data, and it asks the catalog rather than hard-coding `\bin`.
//!
//! Text runs borrow from the input unless they contain line breaks (which RTF
//! ignores) or `\'hh` escapes (which are decoded into the run), in which case
//! the run is copied.

use crate::catalog;
use crate::encoding::hex_nibble;
use crate::error::{RtfError, RtfResult, Truncation};
use std::borrow::Cow;

/// A lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// `{`
    GroupOpen,
    /// `}`
    GroupClose,
    /// `\name` with optional signed parameter
    ControlWord {
        name: &'a str,
        parameter: Option<i32>,
    },
    /// `\` followed by a single non-letter byte
    ControlSymbol(u8),
    /// Literal bytes, with `\'hh` escapes already decoded
    Text(Cow<'a, [u8]>),
    /// Payload of a `\binN` word
    Binary(&'a [u8]),
}

/// A value tagged with the byte offset it started at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub token: T,
    pub offset: usize,
}

/// Lazy tokenizer over a byte slice.
///
/// Yields `Err` at most once; iteration ends after the first error.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
    pending_binary: Option<usize>,
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            pending_binary: None,
            failed: false,
        }
    }

    /// Current byte offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    fn truncated(&self, offset: usize, what: Truncation) -> RtfError {
        RtfError::TruncatedInput { offset, what }
    }

    fn next_token(&mut self) -> RtfResult<Option<Spanned<Token<'a>>>> {
        if let Some(len) = self.pending_binary.take() {
            let offset = self.pos;
            let payload = &self.input[offset..offset + len];
            self.pos += len;
            return Ok(Some(Spanned {
                token: Token::Binary(payload),
                offset,
            }));
        }

        // Line breaks between tokens carry no meaning
        while self.pos < self.input.len() && matches!(self.input[self.pos], b'\r' | b'\n') {
            self.pos += 1;
        }
        if self.pos >= self.input.len() {
            return Ok(None);
        }

        let offset = self.pos;
        let token = match self.input[self.pos] {
            b'{' => {
                self.pos += 1;
                Token::GroupOpen
            },
            b'}' => {
                self.pos += 1;
                Token::GroupClose
            },
            b'\\' => self.lex_backslash()?,
            _ => self.lex_text()?,
        };
        Ok(Some(Spanned { token, offset }))
    }

    fn lex_backslash(&mut self) -> RtfResult<Token<'a>> {
        let start = self.pos;
        let Some(&next) = self.input.get(start + 1) else {
            return Err(self.truncated(start, Truncation::ControlWord));
        };

        if next.is_ascii_alphabetic() {
            return self.lex_control_word();
        }

        if next == b'\'' && self.hex_escape_at(start)?.is_some() {
            return self.lex_text();
        }

        self.pos += 2;
        Ok(Token::ControlSymbol(next))
    }

    fn lex_control_word(&mut self) -> RtfResult<Token<'a>> {
        let input = self.input;
        let name_start = self.pos + 1;
        let name_end = name_start
            + input[name_start..]
                .iter()
                .take_while(|b| b.is_ascii_alphabetic())
                .count();
        let name = std::str::from_utf8(&input[name_start..name_end]).unwrap_or_default();
        self.pos = name_end;

        let parameter = self.lex_parameter()?;

        // Exactly one space is part of the word
        if input.get(self.pos) == Some(&b' ') {
            self.pos += 1;
        }

        if let Some(len) = parameter.filter(|&n| n > 0)
            && catalog::lookup(name).is_binary_length()
        {
            let len = len as usize;
            if input.len() - self.pos < len {
                return Err(self.truncated(self.pos, Truncation::BinaryBlob));
            }
            self.pending_binary = Some(len);
        }

        Ok(Token::ControlWord { name, parameter })
    }

    fn lex_parameter(&mut self) -> RtfResult<Option<i32>> {
        let input = self.input;
        let sign_at = self.pos;
        let negative = input.get(sign_at) == Some(&b'-');
        let digits_start = if negative { sign_at + 1 } else { sign_at };

        match input.get(digits_start) {
            Some(b) if b.is_ascii_digit() => {},
            None if negative => return Err(self.truncated(sign_at, Truncation::Parameter)),
            // A hyphen that is not followed by digits belongs to the next token
            _ => return Ok(None),
        }

        let digits_end = digits_start
            + input[digits_start..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count();
        self.pos = digits_end;

        let magnitude = atoi_simd::parse::<i64>(&input[digits_start..digits_end]).unwrap_or(i64::MAX);
        let value = if negative { -magnitude } else { magnitude };
        Ok(Some(value.clamp(i32::MIN as i64, i32::MAX as i64) as i32))
    }

    /// Decode a `\'hh` escape starting at `at`, if there is one.
    ///
    /// Returns `None` when `at` does not start an escape or the digits are not
    /// hexadecimal.
    fn hex_escape_at(&self, at: usize) -> RtfResult<Option<u8>> {
        let input = self.input;
        if !input[at..].starts_with(b"\\'") {
            return Ok(None);
        }
        let (Some(&hi), Some(&lo)) = (input.get(at + 2), input.get(at + 3)) else {
            return Err(self.truncated(at, Truncation::HexEscape));
        };
        Ok(match (hex_nibble(hi), hex_nibble(lo)) {
            (Some(hi), Some(lo)) => Some(hi << 4 | lo),
            _ => None,
        })
    }

    fn lex_text(&mut self) -> RtfResult<Token<'a>> {
        let input = self.input;
        let start = self.pos;
        let mut owned: Option<Vec<u8>> = None;

        loop {
            let rest = &input[self.pos..];
            let end = self.pos + memchr::memchr3(b'\\', b'{', b'}', rest).unwrap_or(rest.len());
            let segment = &input[self.pos..end];

            if owned.is_none() && memchr::memchr2(b'\r', b'\n', segment).is_some() {
                owned = Some(input[start..self.pos].to_vec());
            }
            if let Some(buf) = owned.as_mut() {
                buf.extend(segment.iter().copied().filter(|&b| b != b'\r' && b != b'\n'));
            }
            self.pos = end;

            if end >= input.len() {
                break;
            }
            match self.hex_escape_at(end)? {
                Some(byte) => {
                    owned
                        .get_or_insert_with(|| input[start..end].to_vec())
                        .push(byte);
                    self.pos = end + 4;
                },
                None => break,
            }
        }

        Ok(match owned {
            Some(buf) => Token::Text(Cow::Owned(buf)),
            None => Token::Text(Cow::Borrowed(&input[start..self.pos])),
        })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = RtfResult<Spanned<Token<'a>>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            },
        }
    }
}

/// Tokenize a whole input eagerly.
pub fn tokenize(input: &[u8]) -> RtfResult<Vec<Spanned<Token<'_>>>> {
    Lexer::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tokens(input: &[u8]) -> Vec<Token<'_>> {
        tokenize(input)
            .expect("tokenize")
            .into_iter()
            .map(|spanned| spanned.token)
            .collect()
    }

    fn word(name: &str, parameter: Option<i32>) -> Token<'_> {
        Token::ControlWord { name, parameter }
    }

    fn text(bytes: &[u8]) -> Token<'_> {
        Token::Text(Cow::Borrowed(bytes))
    }

    #[test]
    fn test_basic_tokens() {
        assert_eq!(
            tokens(b"{\\rtf1\\ansi\\b Hello\\b0 World}"),
            vec![
                Token::GroupOpen,
                word("rtf", Some(1)),
                word("ansi", None),
                word("b", None),
                text(b"Hello"),
                word("b", Some(0)),
                text(b"World"),
                Token::GroupClose,
            ]
        );
    }

    #[test]
    fn test_offsets() {
        let spans = tokenize(b"{\\b x}").unwrap();
        let offsets: Vec<usize> = spans.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0, 1, 4, 5]);
    }

    #[test]
    fn test_only_one_space_is_swallowed() {
        assert_eq!(tokens(b"\\b  x"), vec![word("b", None), text(b" x")]);
    }

    #[test]
    fn test_parameters() {
        assert_eq!(tokens(b"\\li-720"), vec![word("li", Some(-720))]);
        assert_eq!(
            tokens(b"\\fs99999999999"),
            vec![word("fs", Some(i32::MAX))]
        );
        assert_eq!(
            tokens(b"\\fs-99999999999999999999999"),
            vec![word("fs", Some(i32::MIN))]
        );
    }

    #[test]
    fn test_hyphen_without_digits_is_not_a_parameter() {
        assert_eq!(
            tokens(b"\\b-x"),
            vec![word("b", None), text(b"-x")]
        );
    }

    #[test]
    fn test_control_symbols() {
        assert_eq!(
            tokens(b"\\~\\{\\*\\\n"),
            vec![
                Token::ControlSymbol(b'~'),
                Token::ControlSymbol(b'{'),
                Token::ControlSymbol(b'*'),
                Token::ControlSymbol(b'\n'),
            ]
        );
    }

    #[test]
    fn test_hex_escapes_merge_into_text() {
        let toks = tokens(b"caf\\'e9 au lait\\'21}");
        assert_eq!(
            toks,
            vec![
                Token::Text(Cow::Owned(b"caf\xe9 au lait!".to_vec())),
                Token::GroupClose,
            ]
        );
    }

    #[test]
    fn test_text_starting_with_hex_escape() {
        assert_eq!(
            tokens(b"\\'82\\'a0"),
            vec![Token::Text(Cow::Owned(vec![0x82, 0xA0]))]
        );
    }

    #[test]
    fn test_invalid_hex_escape() {
        assert_eq!(
            tokens(b"\\'zz"),
            vec![Token::ControlSymbol(b'\''), text(b"zz")]
        );
    }

    #[test]
    fn test_line_breaks_are_removed_from_text() {
        let toks = tokens(b"\r\nHello\r\nWorld\n");
        assert_eq!(toks, vec![Token::Text(Cow::Owned(b"HelloWorld".to_vec()))]);

        match &tokens(b"plain run")[0] {
            Token::Text(Cow::Borrowed(_)) => {},
            other => panic!("expected borrowed text, got {:?}", other),
        }
    }

    #[test]
    fn test_binary_blob() {
        let toks = tokens(b"{\\bin5 a{b}c\\par}");
        assert_eq!(
            toks,
            vec![
                Token::GroupOpen,
                word("bin", Some(5)),
                Token::Binary(b"a{b}c"),
                word("par", None),
                Token::GroupClose,
            ]
        );
    }

    #[test]
    fn test_bin_without_length_is_a_plain_word() {
        assert_eq!(tokens(b"\\bin x"), vec![word("bin", None), text(b"x")]);
    }

    #[test]
    fn test_truncation_errors() {
        let cases: [(&[u8], Truncation, usize); 4] = [
            (b"{\\b x\\", Truncation::ControlWord, 5),
            (b"{\\li-", Truncation::Parameter, 4),
            (b"ab\\'4", Truncation::HexEscape, 2),
            (b"\\bin10 abc", Truncation::BinaryBlob, 7),
        ];
        for (input, expected, at) in cases {
            match tokenize(input) {
                Err(RtfError::TruncatedInput { offset, what }) => {
                    assert_eq!(what, expected);
                    assert_eq!(offset, at);
                },
                other => panic!("expected truncation for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_stops_after_first_error() {
        let mut lexer = Lexer::new(b"x\\");
        assert!(matches!(lexer.next(), Some(Ok(_))));
        assert!(matches!(lexer.next(), Some(Err(_))));
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_end_right_after_word_is_fine() {
        assert_eq!(tokens(b"\\par"), vec![word("par", None)]);
        assert_eq!(tokens(b"\\fs24"), vec![word("fs", Some(24))]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_binary_payload_is_exact(payload in proptest::collection::vec(any::<u8>(), 1..64)) {
            let mut input = format!("{{\\bin{} ", payload.len()).into_bytes();
            input.extend_from_slice(&payload);
            input.extend_from_slice(b"}");

            let toks = tokens(&input);
            prop_assert_eq!(toks.len(), 4);
            prop_assert_eq!(&toks[2], &Token::Binary(&payload));
            prop_assert_eq!(&toks[3], &Token::GroupClose);
        }

        #[test]
        fn prop_lexer_never_panics(input in proptest::collection::vec(any::<u8>(), 0..128)) {
            let _ = tokenize(&input);
        }

        #[test]
        fn prop_plain_text_round_trips(s in "[a-zA-Z0-9 .,;:!?]{1,40}") {
            let toks = tokens(s.as_bytes());
            prop_assert_eq!(toks, vec![Token::Text(Cow::Borrowed(s.as_bytes()))]);
        }
    }
}
