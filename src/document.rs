//! The script document payload rendered in the preview pane.

use crate::{BoolMap, FlatMap};
use serde::{Deserialize, Serialize};

/// String fields, boolean fields and an ordered list of flat step objects.
///
/// Encoded by [`encode_script`](crate::encode_script) with the sections in a
/// fixed order: strings, bools, then `"steps"`. There is no decoder for this
/// shape; [`decode_flat`](crate::decode_flat) only ever yields a flat map.
///
/// # Examples
///
/// ```rust
/// use flatjson::{encode_script, ScriptDocument};
///
/// let document = ScriptDocument::new()
///     .with_string("output_file", "report")
///     .with_bool("prefab_pcaps", true)
///     .with_step([("step", "1"), ("description", "Input -> Filter nodes")]);
///
/// let text = encode_script(&document);
/// assert!(text.starts_with("{\n  \"output_file\": \"report\",\n  \"prefab_pcaps\": true,"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptDocument {
    pub string_values: FlatMap,
    pub bool_values: BoolMap,
    pub steps: Vec<FlatMap>,
}

impl ScriptDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a string field.
    #[must_use]
    pub fn with_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.string_values.insert(key, value);
        self
    }

    /// Adds or replaces a boolean field.
    #[must_use]
    pub fn with_bool(mut self, key: impl Into<String>, value: bool) -> Self {
        self.bool_values.insert(key, value);
        self
    }

    /// Appends a step built from key/value pairs.
    #[must_use]
    pub fn with_step<'a>(mut self, fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        self.steps.push(fields.into_iter().collect());
        self
    }

    /// Returns `true` if the document has no fields and no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.string_values.is_empty() && self.bool_values.is_empty() && self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let document = ScriptDocument::new()
            .with_string("a", "1")
            .with_string("a", "2")
            .with_bool("b", false)
            .with_step([("step", "1")]);

        assert_eq!(document.string_values.get("a").map(String::as_str), Some("2"));
        assert_eq!(document.bool_values.get("b"), Some(&false));
        assert_eq!(document.steps.len(), 1);
        assert!(!document.is_empty());
        assert!(ScriptDocument::new().is_empty());
    }

    #[test]
    fn test_serde_shape() {
        let document = ScriptDocument::new().with_bool("pcaps", true);
        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "string_values": {},
                "bool_values": { "pcaps": true },
                "steps": []
            })
        );
    }
}
