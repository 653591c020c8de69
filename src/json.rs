//! JSON rendering.
//!
//! There are two ways to get JSON out of a fact tree:
//!
//! - [`Value::write_json`] / [`Value::to_json`] build a [`serde_json::Value`]
//!   document node directly.
//! - [`Value`] implements [`serde::Serialize`], so any serde serializer can
//!   act as the sink.
//!
//! # Fact to JSON Mapping
//!
//! | Fact      | JSON                                  |
//! |-----------|---------------------------------------|
//! | `string`  | string                                |
//! | `integer` | number, exact `i64`                   |
//! | `boolean` | true/false                            |
//! | `double`  | number (`null` for NaN and infinity)  |
//! | `array`   | array                                 |
//! | `map`     | object, keys in insertion order       |
//!
//! # Example
//!
//! ```
//! use fact_values::fact;
//!
//! let value = fact!(["1", 2, ["child"]]);
//! let json = value.to_json();
//!
//! assert_eq!(json[0].as_str(), Some("1"));
//! assert_eq!(json[1].as_i64(), Some(2));
//! assert_eq!(json[2][0].as_str(), Some("child"));
//! ```

use crate::{ArrayValue, MapValue, Value};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

impl Value {
    /// Replaces `out` with the JSON representation of this node.
    ///
    /// Only `out` and the nodes created below it are touched; the fact tree
    /// itself is read-only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fact_values::Value;
    ///
    /// let mut node = serde_json::Value::Null;
    /// Value::from(i64::MAX).write_json(&mut node);
    /// assert_eq!(node.as_i64(), Some(i64::MAX));
    /// ```
    pub fn write_json(&self, out: &mut JsonValue) {
        *out = match self {
            Value::String(s) => JsonValue::String(s.value().clone()),
            Value::Integer(i) => JsonValue::Number((*i.value()).into()),
            Value::Boolean(b) => JsonValue::Bool(*b.value()),
            Value::Double(d) => serde_json::Number::from_f64(*d.value())
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Value::Array(a) => {
                let mut node = JsonValue::Null;
                a.write_json(&mut node);
                node
            }
            Value::Map(m) => {
                let mut node = JsonValue::Null;
                m.write_json(&mut node);
                node
            }
        };
    }

    /// Returns the JSON representation of this node as a new document.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        let mut node = JsonValue::Null;
        self.write_json(&mut node);
        node
    }
}

impl ArrayValue {
    /// Replaces `out` with a JSON array of the elements, in order.
    pub fn write_json(&self, out: &mut JsonValue) {
        let elements = self
            .iter()
            .map(|element| {
                let mut node = JsonValue::Null;
                element.write_json(&mut node);
                node
            })
            .collect();
        *out = JsonValue::Array(elements);
    }
}

impl MapValue {
    /// Replaces `out` with a JSON object of the entries, in insertion order.
    pub fn write_json(&self, out: &mut JsonValue) {
        let mut object = serde_json::Map::with_capacity(self.len());
        for (key, value) in self.iter() {
            let mut node = JsonValue::Null;
            value.write_json(&mut node);
            object.insert(key.clone(), node);
        }
        *out = JsonValue::Object(object);
    }
}

impl Serialize for ArrayValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self.iter() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl Serialize for MapValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s.value()),
            Value::Integer(i) => serializer.serialize_i64(*i.value()),
            Value::Boolean(b) => serializer.serialize_bool(*b.value()),
            Value::Double(d) => serializer.serialize_f64(*d.value()),
            Value::Array(a) => a.serialize(serializer),
            Value::Map(m) => m.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(Value::from("x").to_json(), json!("x"));
        assert_eq!(Value::from(-7).to_json(), json!(-7));
        assert_eq!(Value::from(false).to_json(), json!(false));
        assert_eq!(Value::from(0.5).to_json(), json!(0.5));
    }

    #[test]
    fn test_non_finite_double_is_null() {
        assert_eq!(Value::from(f64::NAN).to_json(), JsonValue::Null);
        assert_eq!(Value::from(f64::INFINITY).to_json(), JsonValue::Null);
    }

    #[test]
    fn test_integer_keeps_full_precision() {
        let json = Value::from(i64::MIN).to_json();
        assert_eq!(json.as_i64(), Some(i64::MIN));
    }

    #[test]
    fn test_map_keeps_insertion_order() {
        let map: MapValue = vec![
            ("zeta".to_string(), Value::from(1)),
            ("alpha".to_string(), Value::from(2)),
        ]
        .into_iter()
        .collect();

        let text = serde_json::to_string(&Value::from(map).to_json()).unwrap();
        assert_eq!(text, r#"{"zeta":1,"alpha":2}"#);
    }

    #[test]
    fn test_write_json_overwrites_node() {
        let mut node = json!({"stale": true});
        Value::from(ArrayValue::default()).write_json(&mut node);
        assert_eq!(node, json!([]));
    }

    #[test]
    fn test_serialize_matches_tree_builder() {
        let map: MapValue = vec![
            ("name".to_string(), Value::from("eth0")),
            ("mtu".to_string(), Value::from(1500)),
            ("up".to_string(), Value::from(true)),
            ("addresses".to_string(), Value::from(vec![Value::from("10.0.0.1")])),
        ]
        .into_iter()
        .collect();
        let value = Value::from(map);

        assert_eq!(serde_json::to_value(&value).unwrap(), value.to_json());
    }
}
