//! # flatjson
//!
//! The text core of the Perf Report tool: a small codec for flat JSON objects,
//! the key-binding table it exports and imports, and the report form whose
//! state is previewed as a JSON script.
//!
//! ## What is a flat object?
//!
//! A JSON object whose values are all single-level strings (or, for script
//! documents, booleans). There are no numbers, no nesting other than the fixed
//! `"steps"` array of a [`ScriptDocument`], and only five escapes: `\\`, `\"`,
//! `\n`, `\r` and `\t`.
//!
//! ## Key Features
//!
//! - **Total encoding**: encoding never fails and yields well-formed JSON for
//!   text free of control characters other than newline, carriage return and tab
//! - **Best-effort decoding**: any input, truncated or not JSON at all, yields a
//!   (possibly empty) map instead of an error
//! - **Deterministic order**: maps keep insertion order, or sorted order on request
//!
//! ## Quick Start
//!
//! ```rust
//! use flatjson::{decode_flat, encode_flat, flat_map};
//!
//! let map = flat_map! {
//!     "file.exit" => "Alt+F4",
//!     "note" => "line1\nline2",
//! };
//!
//! let text = encode_flat(&map);
//! assert_eq!(text, "{\n  \"file.exit\": \"Alt+F4\",\n  \"note\": \"line1\\nline2\"\n}");
//!
//! assert_eq!(decode_flat(&text), map);
//! ```
//!
//! ### Script Documents
//!
//! ```rust
//! use flatjson::{encode_script, flat_map, ScriptDocument};
//!
//! let document = ScriptDocument {
//!     string_values: flat_map! { "x" => "1" },
//!     ..Default::default()
//! };
//! assert_eq!(encode_script(&document), "{\n  \"x\": \"1\",\n  \"steps\": []\n}");
//! ```
//!
//! Decoding is not the inverse of [`encode_script`]: [`decode_flat`] has no
//! notion of nesting and always returns a flat map.
//!
//! ## Performance Characteristics
//!
//! - **Encoding**: O(n) in the total length of keys and values
//! - **Decoding**: O(n) single forward scan, no backtracking

pub mod bindings;
pub mod de;
pub mod document;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod report;
pub mod ser;

pub use bindings::{ImportOutcome, KeyBindings, DEFAULT_KEY_BINDINGS};
pub use de::{Decoder, ScanState};
pub use document::ScriptDocument;
pub use error::{Error, Result};
pub use map::{BoolMap, FlatMap, OrderedMap};
pub use options::{CodecOptions, KeyOrder};
pub use report::{Device, PackageProfile, PerfReportForm, Prefabs};
pub use ser::Encoder;

use std::io;

/// Encodes a flat map with default options (2-space indent, insertion order).
///
/// An empty map encodes as `"{\n}"`.
///
/// # Examples
///
/// ```rust
/// use flatjson::{encode_flat, FlatMap};
///
/// assert_eq!(encode_flat(&FlatMap::new()), "{\n}");
/// ```
#[must_use]
pub fn encode_flat(map: &FlatMap) -> String {
    encode_flat_with_options(map, &CodecOptions::default())
}

/// Encodes a flat map with custom options.
#[must_use]
pub fn encode_flat_with_options(map: &FlatMap, options: &CodecOptions) -> String {
    let mut encoder = Encoder::new(options.clone());
    encoder.write_flat_object(map);
    encoder.into_inner()
}

/// Encodes a script document with default options.
#[must_use]
pub fn encode_script(document: &ScriptDocument) -> String {
    encode_script_with_options(document, &CodecOptions::default())
}

/// Encodes a script document with custom options.
///
/// # Examples
///
/// ```rust
/// use flatjson::{encode_script_with_options, CodecOptions, ScriptDocument};
///
/// let document = ScriptDocument::new().with_bool("prefab_pcaps", true);
/// let text = encode_script_with_options(&document, &CodecOptions::new().with_indent(4));
/// assert_eq!(text, "{\n    \"prefab_pcaps\": true,\n    \"steps\": []\n}");
/// ```
#[must_use]
pub fn encode_script_with_options(document: &ScriptDocument, options: &CodecOptions) -> String {
    let mut encoder = Encoder::new(options.clone());
    encoder.write_script_document(document);
    encoder.into_inner()
}

/// Decodes flat `{"key": "value"}` text into a fresh map.
///
/// Never fails. Unrecognisable input yields an empty map; for duplicate keys
/// the last value wins.
///
/// # Examples
///
/// ```rust
/// use flatjson::decode_flat;
///
/// assert!(decode_flat("").is_empty());
/// assert!(decode_flat("{\"k\": \"v}").is_empty());
/// ```
#[must_use]
pub fn decode_flat(text: &str) -> FlatMap {
    Decoder::new(text).decode()
}

/// Encodes a flat map and writes it to `writer`.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer<W>(mut writer: W, map: &FlatMap) -> Result<()>
where
    W: io::Write,
{
    writer.write_all(encode_flat(map).as_bytes())?;
    Ok(())
}

/// Encodes a script document and writes it to `writer`.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn script_to_writer<W>(mut writer: W, document: &ScriptDocument) -> Result<()>
where
    W: io::Write,
{
    writer.write_all(encode_script(document).as_bytes())?;
    Ok(())
}

/// Reads all of `reader` and decodes it as a flat map.
///
/// # Examples
///
/// ```rust
/// use flatjson::from_reader;
/// use std::io::Cursor;
///
/// let map = from_reader(Cursor::new(br#"{"a": "1"}"#)).unwrap();
/// assert_eq!(map.get("a").map(String::as_str), Some("1"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails or the data is not valid UTF-8.
pub fn from_reader<R>(mut reader: R) -> Result<FlatMap>
where
    R: io::Read,
{
    let mut string = String::new();
    reader.read_to_string(&mut string)?;
    Ok(decode_flat(&string))
}

/// Decodes flat JSON from bytes.
///
/// # Errors
///
/// Returns [`Error::Utf8`] if the bytes are not valid UTF-8.
pub fn from_slice(v: &[u8]) -> Result<FlatMap> {
    let s = std::str::from_utf8(v)?;
    Ok(decode_flat(s))
}
