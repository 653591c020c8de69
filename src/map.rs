//! Keyed map of fact values.
//!
//! This module provides [`MapValue`], a wrapper around [`IndexMap`] that
//! keeps entries in insertion order. Renderers walk the entries in that
//! order, so the same map always produces the same text, JSON and YAML.
//!
//! ## Examples
//!
//! ```rust
//! use fact_values::{MapValue, StringValue, Value};
//!
//! let map: MapValue = vec![
//!     ("family".to_string(), Value::from("RedHat")),
//!     ("name".to_string(), Value::from("Fedora")),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get::<StringValue>("name").map(|s| s.value().as_str()), Some("Fedora"));
//! ```

use crate::value::Downcast;
use crate::Value;
use indexmap::IndexMap;

/// An insertion-ordered, owned mapping of unique string keys to [`Value`]
/// nodes.
///
/// Like [`ArrayValue`](crate::ArrayValue), a map is built once and is
/// immutable afterwards. When a key repeats during construction the entry
/// keeps its first position and takes the last value.
///
/// # Examples
///
/// ```rust
/// use fact_values::{MapValue, Value};
///
/// let map: MapValue = vec![
///     ("first".to_string(), Value::from(1)),
///     ("second".to_string(), Value::from(2)),
///     ("first".to_string(), Value::from(3)),
/// ]
/// .into_iter()
/// .collect();
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// assert_eq!(map.value("first").and_then(|v| v.as_i64()), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapValue {
    elements: IndexMap<String, Value>,
}

impl MapValue {
    /// Creates a map that takes ownership of `elements`.
    #[must_use]
    pub fn new(elements: IndexMap<String, Value>) -> Self {
        MapValue { elements }
    }

    /// Returns the underlying entries in insertion order.
    #[inline]
    #[must_use]
    pub fn elements(&self) -> &IndexMap<String, Value> {
        &self.elements
    }

    /// Returns the value under `key` as `K`, or `None` if the key is absent
    /// or holds another kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fact_values::{fact, ArrayValue, StringValue};
    ///
    /// let value = fact!({"kernel": "Linux"});
    /// let map = value.as_map().unwrap();
    ///
    /// assert!(map.get::<StringValue>("kernel").is_some());
    /// assert!(map.get::<ArrayValue>("kernel").is_none());
    /// assert!(map.get::<StringValue>("missing").is_none());
    /// ```
    #[inline]
    #[must_use]
    pub fn get<K: Downcast>(&self, key: &str) -> Option<&K> {
        self.elements.get(key).and_then(K::downcast)
    }

    /// Returns the raw node under `key`.
    #[inline]
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.elements.get(key)
    }

    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.elements.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.elements.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.elements.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.elements.iter()
    }

    /// Consumes the map and returns its entries.
    #[must_use]
    pub fn into_elements(self) -> IndexMap<String, Value> {
        self.elements
    }
}

impl From<IndexMap<String, Value>> for MapValue {
    fn from(elements: IndexMap<String, Value>) -> Self {
        MapValue::new(elements)
    }
}

impl IntoIterator for MapValue {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a MapValue {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl FromIterator<(String, Value)> for MapValue {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        MapValue::new(IndexMap::from_iter(iter))
    }
}
