//! The fact value tree.
//!
//! This module provides the [`Value`] enum, the node type of every fact tree,
//! together with the scalar leaf type [`ScalarValue`] and the [`Kind`]
//! discriminator used for checked downcasts.
//!
//! ## Core Types
//!
//! - [`Value`]: one node: a scalar, an [`ArrayValue`] or a [`MapValue`]
//! - [`ScalarValue`]: a leaf wrapping one primitive, aliased as
//!   [`StringValue`], [`IntegerValue`], [`BooleanValue`] and [`DoubleValue`]
//! - [`Kind`]: which variant a node is
//! - [`Downcast`]: implemented by the six concrete node types so containers
//!   can offer typed access
//!
//! ## Usage Patterns
//!
//! ### Building a tree
//!
//! Trees are built bottom-up; each child is moved into its container exactly
//! once.
//!
//! ```rust
//! use fact_values::{ArrayValue, Value};
//!
//! let child = ArrayValue::new(vec![Value::from("child")]);
//! let root = ArrayValue::new(vec![Value::from("1"), Value::from(2), Value::from(child)]);
//! assert_eq!(root.len(), 3);
//! ```
//!
//! ### Typed access
//!
//! ```rust
//! use fact_values::{fact, ArrayValue, IntegerValue, StringValue, Value};
//!
//! let value = fact!(["1", 2]);
//! let array = value.downcast_ref::<ArrayValue>().unwrap();
//!
//! assert_eq!(array.get::<StringValue>(0).map(|s| s.value().as_str()), Some("1"));
//! assert_eq!(array.get::<IntegerValue>(1).map(|i| *i.value()), Some(2));
//!
//! // Asking for the wrong kind is not an error, just an empty result.
//! assert!(array.get::<ArrayValue>(0).is_none());
//! ```

use crate::formatter::FilterToken;
use crate::{ArrayValue, MapValue};
use std::fmt;

/// A single node in a fact tree.
///
/// The set of variants is closed: four scalar kinds and two containers.
/// Containers own their children outright, so a tree never contains cycles
/// and dropping the root drops everything below it.
///
/// # Examples
///
/// ```rust
/// use fact_values::{Kind, Value};
///
/// let text = Value::from("hello");
/// let number = Value::from(42);
///
/// assert_eq!(text.kind(), Kind::String);
/// assert_eq!(number.kind(), Kind::Integer);
/// assert_eq!(number.as_i64(), Some(42));
/// assert_eq!(text.as_i64(), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(StringValue),
    Integer(IntegerValue),
    Boolean(BooleanValue),
    Double(DoubleValue),
    Array(ArrayValue),
    Map(MapValue),
}

/// The discriminator of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    String,
    Integer,
    Boolean,
    Double,
    Array,
    Map,
}

impl Kind {
    /// Returns the lowercase name of this kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fact_values::Kind;
    ///
    /// assert_eq!(Kind::Array.as_str(), "array");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Integer => "integer",
            Kind::Boolean => "boolean",
            Kind::Double => "double",
            Kind::Array => "array",
            Kind::Map => "map",
        }
    }

    /// Returns `true` for the four scalar kinds.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Kind::Array | Kind::Map)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A leaf node wrapping exactly one primitive.
///
/// Scalars are immutable; [`ScalarValue::value`] hands out a reference to
/// the wrapped primitive.
///
/// # Examples
///
/// ```rust
/// use fact_values::{IntegerValue, StringValue};
///
/// let name = StringValue::from("eth0");
/// let mtu = IntegerValue::new(1500);
///
/// assert_eq!(name.value(), "eth0");
/// assert_eq!(*mtu.value(), 1500);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ScalarValue<T> {
    value: T,
}

pub type StringValue = ScalarValue<String>;
pub type IntegerValue = ScalarValue<i64>;
pub type BooleanValue = ScalarValue<bool>;
pub type DoubleValue = ScalarValue<f64>;

impl<T> ScalarValue<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        ScalarValue { value }
    }

    /// Returns the wrapped primitive.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the scalar and returns the wrapped primitive.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl From<&str> for StringValue {
    fn from(value: &str) -> Self {
        ScalarValue::new(value.to_string())
    }
}

impl From<String> for StringValue {
    fn from(value: String) -> Self {
        ScalarValue::new(value)
    }
}

impl From<i64> for IntegerValue {
    fn from(value: i64) -> Self {
        ScalarValue::new(value)
    }
}

impl From<bool> for BooleanValue {
    fn from(value: bool) -> Self {
        ScalarValue::new(value)
    }
}

impl From<f64> for DoubleValue {
    fn from(value: f64) -> Self {
        ScalarValue::new(value)
    }
}

/// Checked conversion from a [`Value`] to one concrete node type.
///
/// Implemented by [`StringValue`], [`IntegerValue`], [`BooleanValue`],
/// [`DoubleValue`], [`ArrayValue`] and [`MapValue`]. `downcast` succeeds if
/// and only if the node's kind is [`Downcast::KIND`].
pub trait Downcast: Sized {
    const KIND: Kind;

    fn downcast(value: &Value) -> Option<&Self>;
}

macro_rules! impl_downcast {
    ($ty:ty, $variant:ident) => {
        impl Downcast for $ty {
            const KIND: Kind = Kind::$variant;

            #[inline]
            fn downcast(value: &Value) -> Option<&Self> {
                match value {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

impl_downcast!(StringValue, String);
impl_downcast!(IntegerValue, Integer);
impl_downcast!(BooleanValue, Boolean);
impl_downcast!(DoubleValue, Double);
impl_downcast!(ArrayValue, Array);
impl_downcast!(MapValue, Map);

impl Value {
    /// Returns the kind of this node.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::String(_) => Kind::String,
            Value::Integer(_) => Kind::Integer,
            Value::Boolean(_) => Kind::Boolean,
            Value::Double(_) => Kind::Double,
            Value::Array(_) => Kind::Array,
            Value::Map(_) => Kind::Map,
        }
    }

    /// Returns this node as `K` if its kind matches, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fact_values::{BooleanValue, StringValue, Value};
    ///
    /// let value = Value::from(true);
    /// assert_eq!(value.downcast_ref::<BooleanValue>().map(|b| *b.value()), Some(true));
    /// assert!(value.downcast_ref::<StringValue>().is_none());
    /// ```
    #[inline]
    #[must_use]
    pub fn downcast_ref<K: Downcast>(&self) -> Option<&K> {
        K::downcast(self)
    }

    /// Returns `true` if this node is of kind `K`.
    #[inline]
    #[must_use]
    pub fn is<K: Downcast>(&self) -> bool {
        self.kind() == K::KIND
    }

    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        self.kind().is_scalar()
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.value()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i.value()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b.value()),
            _ => None,
        }
    }

    /// Returns the double if this node is a [`DoubleValue`].
    ///
    /// Integers are not widened; use [`Value::as_i64`] for them.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d.value()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&ArrayValue> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Walks down the tree along `path`.
    ///
    /// Maps are entered by [`FilterToken::Key`], arrays by
    /// [`FilterToken::Index`]. Returns `None` as soon as a segment does not
    /// match the node it is applied to. An empty path returns `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fact_values::{fact, FilterToken};
    ///
    /// let os = fact!({"release": {"full": "12.4", "major": "12"}});
    /// let major = os.dig(&[FilterToken::key("release"), FilterToken::key("major")]);
    /// assert_eq!(major.and_then(|v| v.as_str()), Some("12"));
    ///
    /// let disks = fact!(["sda", "sdb"]);
    /// assert_eq!(disks.dig(&[FilterToken::Index(1)]).and_then(|v| v.as_str()), Some("sdb"));
    /// assert!(disks.dig(&[FilterToken::Index(2)]).is_none());
    /// ```
    #[must_use]
    pub fn dig(&self, path: &[FilterToken]) -> Option<&Value> {
        let mut current = self;
        for token in path {
            current = match (current, token) {
                (Value::Map(map), FilterToken::Key(key)) => map.elements().get(key.as_str())?,
                (Value::Map(map), FilterToken::Index(index)) => {
                    map.elements().get(index.to_string().as_str())?
                }
                (Value::Array(array), FilterToken::Index(index)) => array.elements().get(*index)?,
                (Value::Array(array), FilterToken::Key(key)) => {
                    let index = key.parse::<usize>().ok()?;
                    array.elements().get(index)?
                }
                _ => return None,
            };
        }
        Some(current)
    }
}

impl From<StringValue> for Value {
    fn from(value: StringValue) -> Self {
        Value::String(value)
    }
}

impl From<IntegerValue> for Value {
    fn from(value: IntegerValue) -> Self {
        Value::Integer(value)
    }
}

impl From<BooleanValue> for Value {
    fn from(value: BooleanValue) -> Self {
        Value::Boolean(value)
    }
}

impl From<DoubleValue> for Value {
    fn from(value: DoubleValue) -> Self {
        Value::Double(value)
    }
}

impl From<ArrayValue> for Value {
    fn from(value: ArrayValue) -> Self {
        Value::Array(value)
    }
}

impl From<MapValue> for Value {
    fn from(value: MapValue) -> Self {
        Value::Map(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(ScalarValue::new(value))
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Integer(ScalarValue::new(value as i64))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Integer(ScalarValue::new(value as i64))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(ScalarValue::new(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(ScalarValue::new(value))
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Integer(ScalarValue::new(value as i64))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Integer(ScalarValue::new(value as i64))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(ScalarValue::new(value as i64))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Double(ScalarValue::new(value as f64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(ScalarValue::new(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(ScalarValue::new(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(ScalarValue::new(value.to_string()))
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(ArrayValue::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of_each_variant() {
        assert_eq!(Value::from("x").kind(), Kind::String);
        assert_eq!(Value::from(1).kind(), Kind::Integer);
        assert_eq!(Value::from(false).kind(), Kind::Boolean);
        assert_eq!(Value::from(1.5).kind(), Kind::Double);
        assert_eq!(Value::from(ArrayValue::default()).kind(), Kind::Array);
        assert_eq!(Value::from(MapValue::default()).kind(), Kind::Map);
    }

    #[test]
    fn test_downcast_only_matches_own_kind() {
        let value = Value::from(7);
        assert_eq!(value.downcast_ref::<IntegerValue>().map(|i| *i.value()), Some(7));
        assert!(value.downcast_ref::<StringValue>().is_none());
        assert!(value.downcast_ref::<DoubleValue>().is_none());
        assert!(value.downcast_ref::<ArrayValue>().is_none());
        assert!(value.is::<IntegerValue>());
        assert!(!value.is::<MapValue>());
    }

    #[test]
    fn test_as_f64_does_not_widen_integers() {
        assert_eq!(Value::from(2).as_f64(), None);
        assert_eq!(Value::from(2.0).as_f64(), Some(2.0));
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(42u32), Value::Integer(ScalarValue::new(42)));
        assert_eq!(Value::from(i64::MIN).as_i64(), Some(i64::MIN));
        assert_eq!(
            Value::from("test".to_string()),
            Value::String(StringValue::from("test"))
        );
    }

    #[test]
    fn test_dig_mismatched_segment() {
        let value = Value::from(vec![Value::from(1)]);
        assert!(value.dig(&[FilterToken::key("name")]).is_none());
        assert_eq!(value.dig(&[FilterToken::key("0")]).and_then(Value::as_i64), Some(1));
        assert_eq!(value.dig(&[]), Some(&value));
        assert!(Value::from(1).dig(&[FilterToken::Index(0)]).is_none());
    }

    #[test]
    fn test_scalar_kind_flag() {
        assert!(Kind::Double.is_scalar());
        assert!(!Kind::Map.is_scalar());
        assert!(Value::from("s").is_scalar());
    }
}
