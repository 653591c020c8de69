//! Ordered array of fact values.
//!
//! [`ArrayValue`] owns its elements in insertion order. It is built once from
//! an owned sequence and never changes afterwards; the order it was given is
//! the order every renderer writes.

use crate::value::Downcast;
use crate::Value;

/// An ordered, owned sequence of [`Value`] nodes.
///
/// # Examples
///
/// ```rust
/// use fact_values::{ArrayValue, IntegerValue, Value};
///
/// let empty = ArrayValue::default();
/// assert_eq!(empty.elements().len(), 0);
///
/// let numbers: ArrayValue = (1..=3).map(Value::from).collect();
/// assert_eq!(numbers.len(), 3);
/// assert_eq!(numbers.get::<IntegerValue>(2).map(|i| *i.value()), Some(3));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ArrayValue {
    elements: Vec<Value>,
}

impl ArrayValue {
    /// Creates an array that takes ownership of `elements`.
    #[must_use]
    pub fn new(elements: Vec<Value>) -> Self {
        ArrayValue { elements }
    }

    /// Returns the elements in order.
    #[inline]
    #[must_use]
    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

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

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    /// Returns the element at `index` as `K`, or `None` if it is another kind.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds. Use [`ArrayValue::try_get`] when
    /// the index is not known to be valid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fact_values::{fact, ArrayValue, StringValue};
    ///
    /// let value = fact!(["1", ["child"]]);
    /// let array = value.as_array().unwrap();
    ///
    /// assert!(array.get::<StringValue>(0).is_some());
    /// assert!(array.get::<ArrayValue>(0).is_none());
    /// assert_eq!(array.get::<ArrayValue>(1).map(|a| a.len()), Some(1));
    /// ```
    #[inline]
    #[must_use]
    pub fn get<K: Downcast>(&self, index: usize) -> Option<&K> {
        K::downcast(&self.elements[index])
    }

    /// Like [`ArrayValue::get`], but also returns `None` when `index` is out
    /// of bounds.
    #[inline]
    #[must_use]
    pub fn try_get<K: Downcast>(&self, index: usize) -> Option<&K> {
        self.elements.get(index).and_then(K::downcast)
    }

    /// Consumes the array and returns its elements.
    #[must_use]
    pub fn into_elements(self) -> Vec<Value> {
        self.elements
    }
}

impl From<Vec<Value>> for ArrayValue {
    fn from(elements: Vec<Value>) -> Self {
        ArrayValue::new(elements)
    }
}

impl FromIterator<Value> for ArrayValue {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        ArrayValue::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ArrayValue {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArrayValue {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
