//! Configuration options for encoding.
//!
//! This module provides types to customize encoded output:
//!
//! - [`CodecOptions`]: Main configuration struct
//! - [`KeyOrder`]: Whether map entries are written in insertion or sorted order
//!
//! ## Examples
//!
//! ```rust
//! use flatjson::{encode_flat_with_options, flat_map, CodecOptions, KeyOrder};
//!
//! let map = flat_map! { "b" => "2", "a" => "1" };
//!
//! let options = CodecOptions::new()
//!     .with_indent(4)
//!     .with_key_order(KeyOrder::Sorted);
//! let text = encode_flat_with_options(&map, &options);
//! assert_eq!(text, "{\n    \"a\": \"1\",\n    \"b\": \"2\"\n}");
//! ```

use serde::{Deserialize, Serialize};

/// Iteration order used for the entries of each map section.
///
/// Section order in a [`ScriptDocument`](crate::ScriptDocument) (strings, then
/// bools, then steps) is fixed; this only controls order within a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyOrder {
    /// Entries are written in the order they were inserted.
    #[default]
    Insertion,
    /// Entries are written sorted by key (byte order).
    Sorted,
}

impl KeyOrder {
    /// Returns the string representation of this ordering.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            KeyOrder::Insertion => "insertion",
            KeyOrder::Sorted => "sorted",
        }
    }
}

/// Configuration options for encoding.
///
/// # Examples
///
/// ```rust
/// use flatjson::{CodecOptions, KeyOrder};
///
/// let options = CodecOptions::new();
/// assert_eq!(options.indent, 2);
/// assert_eq!(options.key_order, KeyOrder::Insertion);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Number of spaces per nesting level.
    pub indent: usize,
    pub key_order: KeyOrder,
}

impl Default for CodecOptions {
    fn default() -> Self {
        CodecOptions {
            indent: 2,
            key_order: KeyOrder::default(),
        }
    }
}

impl CodecOptions {
    /// Creates default options (2-space indent, insertion order).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation width (number of spaces per level).
    ///
    /// Zero is allowed and yields entries flush with the braces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatjson::CodecOptions;
    ///
    /// let options = CodecOptions::new().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the per-section key order.
    #[must_use]
    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }
}
