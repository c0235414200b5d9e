//! Best-effort flat JSON decoding.
//!
//! This module provides the [`Decoder`] that scans text for alternating
//! quoted key and value segments and collects them into a [`FlatMap`].
//!
//! ## Overview
//!
//! - **Single pass**: one forward scan over the characters, O(n)
//! - **Never fails**: malformed or truncated input yields a partial (possibly
//!   empty) map instead of an error
//! - **Strict alternation**: the scanner has no notion of nesting, so a quoted
//!   segment is a key or a value purely by position. Structural characters
//!   (`{`, `}`, `:`, `,`, `[`, `]`), whitespace and bare literals such as
//!   `true` are skipped outside of quotes.
//!
//! Because of the last point, decoding an encoded [`ScriptDocument`](crate::ScriptDocument)
//! does not give the document back: boolean fields are skipped and the step
//! objects are flattened into the same map.
//!
//! ## Usage
//!
//! ```rust
//! use flatjson::decode_flat;
//!
//! let map = decode_flat(r#"{"k": "a", "k": "b"}"#);
//! assert_eq!(map.get("k").map(String::as_str), Some("b"));
//! ```

use crate::FlatMap;
use std::str::Chars;

/// Position of the scanner relative to the quoted segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    /// Outside of any string, waiting for the opening quote of a key.
    SeekingKey,
    /// Inside a key.
    ReadingKey,
    /// Key complete, waiting for the opening quote of its value.
    SeekingValue,
    /// Inside a value.
    ReadingValue,
}

/// The best-effort flat JSON decoder.
///
/// Created via [`Decoder::new`]; [`Decoder::decode`] consumes it and returns
/// the collected pairs.
pub struct Decoder<'a> {
    chars: Chars<'a>,
    state: ScanState,
    key: String,
    value: String,
    values: FlatMap,
}

impl<'a> Decoder<'a> {
    pub fn new(input: &'a str) -> Self {
        Decoder {
            chars: input.chars(),
            state: ScanState::SeekingKey,
            key: String::new(),
            value: String::new(),
            values: FlatMap::new(),
        }
    }

    /// Current scanner state.
    #[must_use]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Maps the character after a backslash to the character it stands for.
    ///
    /// Unknown escapes yield the escaped character itself.
    #[inline]
    fn unescape(ch: char) -> char {
        match ch {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            other => other,
        }
    }

    /// Reads the character after a backslash.
    ///
    /// A backslash at the very end of input is kept as a literal backslash.
    fn read_escaped(&mut self) -> char {
        match self.chars.next() {
            Some(next) => Self::unescape(next),
            None => '\\',
        }
    }

    fn step(&mut self, ch: char) {
        self.state = match (self.state, ch) {
            (ScanState::SeekingKey, '"') => {
                self.key.clear();
                ScanState::ReadingKey
            }
            (ScanState::SeekingKey, _) => ScanState::SeekingKey,

            (ScanState::ReadingKey, '"') => ScanState::SeekingValue,
            (ScanState::ReadingKey, '\\') => {
                let unescaped = self.read_escaped();
                self.key.push(unescaped);
                ScanState::ReadingKey
            }
            (ScanState::ReadingKey, _) => {
                self.key.push(ch);
                ScanState::ReadingKey
            }

            (ScanState::SeekingValue, '"') => {
                self.value.clear();
                ScanState::ReadingValue
            }
            (ScanState::SeekingValue, _) => ScanState::SeekingValue,

            (ScanState::ReadingValue, '"') => {
                self.values
                    .insert(self.key.clone(), std::mem::take(&mut self.value));
                ScanState::SeekingKey
            }
            (ScanState::ReadingValue, '\\') => {
                let unescaped = self.read_escaped();
                self.value.push(unescaped);
                ScanState::ReadingValue
            }
            (ScanState::ReadingValue, _) => {
                self.value.push(ch);
                ScanState::ReadingValue
            }
        };
    }

    /// Scans the whole input and returns the collected pairs.
    ///
    /// A key or value still open at end of input is dropped.
    pub fn decode(mut self) -> FlatMap {
        while let Some(ch) = self.chars.next() {
            self.step(ch);
        }
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flat_map;

    fn decode(input: &str) -> FlatMap {
        Decoder::new(input).decode()
    }

    #[test]
    fn test_empty_inputs() {
        assert!(decode("").is_empty());
        assert!(decode("{}").is_empty());
        assert!(decode("{\n}").is_empty());
        assert!(decode("   \n\t").is_empty());
    }

    #[test]
    fn test_simple_object() {
        let map = decode("{\n  \"a\": \"1\",\n  \"b\": \"2\"\n}");
        assert_eq!(map, flat_map! { "a" => "1", "b" => "2" });
    }

    #[test]
    fn test_last_duplicate_wins() {
        let map = decode("{\"k\":\"a\",\"k\":\"b\"}");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("k").map(String::as_str), Some("b"));
    }

    #[test]
    fn test_value_escapes() {
        let map = decode(r#"{"k": "a\nb\rc\td\"e\\f"}"#);
        assert_eq!(
            map.get("k").map(String::as_str),
            Some("a\nb\rc\td\"e\\f")
        );
    }

    #[test]
    fn test_key_escapes() {
        let map = decode(r#"{"say \"hi\"": "x"}"#);
        assert_eq!(map.get("say \"hi\"").map(String::as_str), Some("x"));
    }

    #[test]
    fn test_unknown_escape_passes_through() {
        let map = decode(r#"{"k": "a\/b\u0041"}"#);
        assert_eq!(map.get("k").map(String::as_str), Some("a/bu0041"));
    }

    #[test]
    fn test_unterminated_value_is_dropped() {
        let map = decode("{\"k\": \"v}");
        assert!(map.is_empty());
    }

    #[test]
    fn test_trailing_backslash_does_not_overrun() {
        let mut decoder = Decoder::new("{\"k\": \"v\\");
        while let Some(ch) = decoder.chars.next() {
            decoder.step(ch);
        }
        assert_eq!(decoder.state(), ScanState::ReadingValue);
        assert_eq!(decoder.value, "v\\");
        assert!(decoder.decode().is_empty());
    }

    #[test]
    fn test_partial_result_kept() {
        let map = decode("{\"a\": \"1\", \"b\": \"unterminated");
        assert_eq!(map, flat_map! { "a" => "1" });
    }

    #[test]
    fn test_bare_literals_are_skipped() {
        // The scanner pairs quoted segments strictly, so "flag" pairs with "b".
        let map = decode("{\"a\": \"1\", \"flag\": true, \"b\": \"2\"}");
        assert_eq!(map.get("a").map(String::as_str), Some("1"));
        assert_eq!(map.get("flag").map(String::as_str), Some("b"));
        assert!(!map.contains_key("2"));
    }

    #[test]
    fn test_non_ascii() {
        let map = decode("{\"ключ\": \"値\"}");
        assert_eq!(map.get("ключ").map(String::as_str), Some("値"));
    }
}
