//! Flat JSON encoding.
//!
//! This module provides the [`Encoder`] that renders flat maps and
//! [`ScriptDocument`]s as pretty-printed JSON text.
//!
//! ## Overview
//!
//! The encoder only ever produces two shapes:
//!
//! - **Flat objects**: one `"key": "value"` line per entry at depth 1
//! - **Script documents**: string fields, then boolean fields, then a fixed
//!   `"steps"` array of flat objects
//!
//! Keys and values are escaped for `\`, `"`, newline, carriage return and tab.
//! Nothing else is touched, so non-ASCII text passes through unchanged.
//!
//! ## Known Limits
//!
//! Other control characters (U+0000 to U+001F apart from the three above, for
//! example backspace) are written raw. Such output is not strict JSON, though
//! [`decode_flat`](crate::decode_flat) still reads it back unchanged. There is
//! no `\u` escape because the decoder has no matching support.
//!
//! ## Usage
//!
//! Most users should use the functions in the crate root:
//!
//! ```rust
//! use flatjson::{encode_flat, flat_map};
//!
//! let map = flat_map! { "profile.save" => "Ctrl+S" };
//! assert_eq!(encode_flat(&map), "{\n  \"profile.save\": \"Ctrl+S\"\n}");
//! ```
//!
//! ## Direct Encoder Usage
//!
//! ```rust
//! use flatjson::{CodecOptions, Encoder, FlatMap};
//!
//! let mut encoder = Encoder::new(CodecOptions::new().with_indent(0));
//! encoder.write_flat_object(&FlatMap::new());
//! assert_eq!(encoder.into_inner(), "{\n}");
//! ```

use crate::{CodecOptions, FlatMap, ScriptDocument};

/// The flat JSON encoder.
///
/// Accumulates output in an internal buffer. Created via [`Encoder::new`];
/// the finished text is taken with [`Encoder::into_inner`].
pub struct Encoder {
    output: String,
    options: CodecOptions,
}

impl Encoder {
    pub fn new(options: CodecOptions) -> Self {
        Encoder {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    fn write_indent(&mut self, depth: usize) {
        let width = depth * self.options.indent;
        self.output.extend(std::iter::repeat(' ').take(width));
    }

    fn write_line_end(&mut self, trailing_comma: bool) {
        self.output.push_str(if trailing_comma { ",\n" } else { "\n" });
    }

    #[inline]
    fn write_escaped(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '\\' => self.output.push_str("\\\\"),
                '"' => self.output.push_str("\\\""),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                _ => self.output.push(ch),
            }
        }
        self.output.push('"');
    }

    fn write_string_field(&mut self, depth: usize, key: &str, value: &str, trailing_comma: bool) {
        self.write_indent(depth);
        self.write_escaped(key);
        self.output.push_str(": ");
        self.write_escaped(value);
        self.write_line_end(trailing_comma);
    }

    fn write_bool_field(&mut self, depth: usize, key: &str, value: bool, trailing_comma: bool) {
        self.write_indent(depth);
        self.write_escaped(key);
        self.output.push_str(if value { ": true" } else { ": false" });
        self.write_line_end(trailing_comma);
    }

    /// Writes the entries of `map` as string fields at `depth`.
    ///
    /// The last entry gets a comma only when `more_follow` is set.
    fn write_string_fields(&mut self, depth: usize, map: &FlatMap, more_follow: bool) {
        let entries = map.entries(self.options.key_order);
        let count = entries.len();
        for (index, (key, value)) in entries.into_iter().enumerate() {
            self.write_string_field(depth, key, value, index + 1 < count || more_follow);
        }
    }

    /// Writes a flat object: `{`, one string field per line, `}`.
    pub fn write_flat_object(&mut self, map: &FlatMap) {
        self.output.push_str("{\n");
        self.write_string_fields(1, map, false);
        self.output.push('}');
    }

    /// Writes a script document.
    ///
    /// Every string and bool field is followed at least by the `"steps"`
    /// field, so each of them carries a trailing comma.
    pub fn write_script_document(&mut self, document: &ScriptDocument) {
        self.output.push_str("{\n");

        self.write_string_fields(1, &document.string_values, true);

        let bools = document.bool_values.entries(self.options.key_order);
        for (key, value) in bools {
            self.write_bool_field(1, key, *value, true);
        }

        self.write_indent(1);
        self.output.push_str("\"steps\": [");
        if document.steps.is_empty() {
            self.output.push_str("]\n");
        } else {
            self.output.push('\n');
            let count = document.steps.len();
            for (index, step) in document.steps.iter().enumerate() {
                self.write_indent(2);
                self.output.push_str("{\n");
                self.write_string_fields(3, step, false);
                self.write_indent(2);
                self.output.push('}');
                self.write_line_end(index + 1 < count);
            }
            self.write_indent(1);
            self.output.push_str("]\n");
        }

        self.output.push('}');
    }
}
