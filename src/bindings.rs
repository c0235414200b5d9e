//! Key-binding table with JSON export and import.
//!
//! [`DEFAULT_KEY_BINDINGS`] is the built-in table shipped with the tool. It is
//! never mutated; each session works on its own [`KeyBindings`] copy, which can
//! be exported as a flat JSON object for preview and replaced by pasted JSON.
//!
//! ## Examples
//!
//! ```rust
//! use flatjson::{CodecOptions, ImportOutcome, KeyBindings};
//!
//! let mut bindings = KeyBindings::defaults();
//! assert_eq!(bindings.get("profile.save"), Some("Ctrl+S"));
//!
//! let outcome = bindings.import(r#"{"profile.save": "Ctrl+Alt+S"}"#);
//! assert_eq!(outcome, ImportOutcome::Replaced(1));
//! assert_eq!(bindings.len(), 1);
//!
//! // Text without any key/value pair leaves the active table alone.
//! assert_eq!(bindings.import("not json"), ImportOutcome::NoBindings);
//! assert_eq!(bindings.get("profile.save"), Some("Ctrl+Alt+S"));
//!
//! let preview = bindings.export(&CodecOptions::default());
//! assert_eq!(preview, "{\n  \"profile.save\": \"Ctrl+Alt+S\"\n}");
//! ```

use crate::{decode_flat, encode_flat_with_options, CodecOptions, FlatMap};
use serde::{Deserialize, Serialize};

/// Built-in action to shortcut table.
pub const DEFAULT_KEY_BINDINGS: &[(&str, &str)] = &[
    ("file.new_window", "Ctrl+N"),
    ("file.exit", "Alt+F4"),
    ("view.reset_layout", "Ctrl+0"),
    ("profile.new", "Ctrl+Shift+N"),
    ("profile.open", "Ctrl+O"),
    ("profile.save", "Ctrl+S"),
    ("profile.edit", "Ctrl+E"),
];

/// Result of [`KeyBindings::import`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The active table was replaced by this many bindings.
    Replaced(usize),
    /// No key/value pair was found; the active table is unchanged.
    NoBindings,
}

impl ImportOutcome {
    #[must_use]
    pub fn is_replaced(&self) -> bool {
        matches!(self, ImportOutcome::Replaced(_))
    }
}

/// The per-session key-binding table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    active: FlatMap,
}

impl KeyBindings {
    /// Creates a session copy of [`DEFAULT_KEY_BINDINGS`].
    #[must_use]
    pub fn defaults() -> Self {
        KeyBindings {
            active: DEFAULT_KEY_BINDINGS.iter().copied().collect(),
        }
    }

    /// Wraps an existing map as the active table.
    #[must_use]
    pub fn from_map(active: FlatMap) -> Self {
        KeyBindings { active }
    }

    #[must_use]
    pub fn get(&self, action: &str) -> Option<&str> {
        self.active.get(action).map(String::as_str)
    }

    /// Binds `action` to `shortcut`; the latest binding of a shortcut wins.
    ///
    /// Any other action holding the same shortcut is left unbound (empty
    /// shortcut) and returned. An empty shortcut never displaces anything.
    pub fn bind(
        &mut self,
        action: impl Into<String>,
        shortcut: impl Into<String>,
    ) -> Option<String> {
        let action = action.into();
        let shortcut = shortcut.into();

        let displaced = if shortcut.is_empty() {
            None
        } else {
            self.active
                .iter()
                .find(|(other, bound)| **other != action && **bound == shortcut)
                .map(|(other, _)| other.clone())
        };

        if let Some(other) = &displaced {
            self.active.insert(other.as_str(), String::new());
            tracing::debug!(
                action = %action,
                displaced = %other,
                shortcut = %shortcut,
                "Shortcut moved to a new action"
            );
        }

        self.active.insert(action, shortcut);
        displaced
    }

    /// Restores the built-in table.
    pub fn reset_to_defaults(&mut self) {
        *self = Self::defaults();
        tracing::info!(count = self.active.len(), "Key bindings reset to defaults");
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.active.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn as_map(&self) -> &FlatMap {
        &self.active
    }

    /// Encodes the active table as a flat JSON object.
    #[must_use]
    pub fn export(&self, options: &CodecOptions) -> String {
        encode_flat_with_options(&self.active, options)
    }

    /// Decodes `text` and makes it the active table if it holds any binding.
    ///
    /// The import replaces the table rather than merging into it. Entries are
    /// bound in document order, so when two actions share a shortcut the later
    /// one keeps it and the earlier one is left unbound.
    pub fn import(&mut self, text: &str) -> ImportOutcome {
        let decoded = decode_flat(text);
        if decoded.is_empty() {
            tracing::warn!(input_len = text.len(), "Key binding import found no bindings");
            return ImportOutcome::NoBindings;
        }

        let count = decoded.len();
        let mut imported = KeyBindings::from_map(FlatMap::with_capacity(count));
        for (action, shortcut) in decoded {
            imported.bind(action, shortcut);
        }
        *self = imported;
        tracing::info!(count, "Key bindings imported");
        ImportOutcome::Replaced(count)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::defaults()
    }
}
