//! Ordered map types for flat objects.
//!
//! This module provides [`OrderedMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for object fields, and the two concrete shapes the
//! codec works with:
//!
//! - [`FlatMap`]: string keys to string values
//! - [`BoolMap`]: string keys to boolean values
//!
//! Insertion order makes encoded output deterministic for a given sequence of
//! edits. Callers that want order-independent output can ask the encoder for
//! [`KeyOrder::Sorted`](crate::KeyOrder::Sorted) instead.
//!
//! ## Examples
//!
//! ```rust
//! use flatjson::FlatMap;
//!
//! let mut map = FlatMap::new();
//! map.insert("name", "Alice");
//! map.insert("role", "admin");
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").map(String::as_str), Some("Alice"));
//! ```

use crate::options::KeyOrder;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An ordered map of unique string keys to values of type `V`.
///
/// Inserting an existing key replaces its value in place, keeping the key's
/// original position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedMap<V>(IndexMap<String, V>);

/// A flat mapping of string keys to string values.
pub type FlatMap = OrderedMap<String>;

/// A flat mapping of string keys to boolean values.
pub type BoolMap = OrderedMap<bool>;

impl<V> OrderedMap<V> {
    /// Creates an empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatjson::FlatMap;
    ///
    /// let map = FlatMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        OrderedMap(IndexMap::new())
    }

    /// Creates an empty map with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatjson::BoolMap;
    ///
    /// let mut map = BoolMap::new();
    /// assert!(map.insert("pcaps", false).is_none());
    /// assert_eq!(map.insert("pcaps", true), Some(false));
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<V>) -> Option<V> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.0.shift_remove(key)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, V> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, V> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, V> {
        self.0.iter()
    }

    /// Returns the entries in the requested order.
    pub(crate) fn entries(&self, order: KeyOrder) -> Vec<(&String, &V)> {
        let mut entries: Vec<_> = self.0.iter().collect();
        if order == KeyOrder::Sorted {
            entries.sort_by(|a, b| a.0.cmp(b.0));
        }
        entries
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<HashMap<String, V>> for OrderedMap<V> {
    fn from(map: HashMap<String, V>) -> Self {
        OrderedMap(map.into_iter().collect())
    }
}

impl<V> From<OrderedMap<V>> for HashMap<String, V> {
    fn from(map: OrderedMap<V>) -> Self {
        map.0.into_iter().collect()
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a OrderedMap<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = indexmap::map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
        OrderedMap(IndexMap::from_iter(iter))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for FlatMap {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}
