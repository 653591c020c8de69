//! Human-readable text rendering.
//!
//! Every node implements [`fmt::Display`]:
//!
//! | Kind    | Rendering                     |
//! |---------|-------------------------------|
//! | string  | the string, unquoted          |
//! | integer | decimal digits                |
//! | boolean | `true` / `false`              |
//! | double  | shortest round-trip digits; exponent form (`1e300`, `2.5e-7`) below 1e-5 or from 1e16 up |
//! | array   | `[ e0, e1 ]`, empty `[ ]`     |
//! | map     | `{ k => v }`, empty `{ }`     |
//!
//! ```rust
//! use fact_values::fact;
//!
//! let value = fact!(["1", 2, ["child"]]);
//! assert_eq!(value.to_string(), "[ 1, 2, [ child ] ]");
//!
//! let value = fact!({"family": "Debian", "cores": [0, 1]});
//! assert_eq!(value.to_string(), "{ family => Debian, cores => [ 0, 1 ] }");
//! ```

use crate::{ArrayValue, BooleanValue, DoubleValue, IntegerValue, MapValue, StringValue, Value};
use std::fmt;

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self.value(), f)
                }
            }
        )*
    };
}

impl_display!(StringValue, IntegerValue, BooleanValue);

impl fmt::Display for DoubleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = *self.value();
        let magnitude = d.abs();
        if d.is_finite() && magnitude != 0.0 && !(1e-5..1e16).contains(&magnitude) {
            write!(f, "{:e}", d)
        } else {
            write!(f, "{}", d)
        }
    }
}

impl fmt::Display for ArrayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", element)?;
        }
        // An empty array has a single space between the brackets.
        if !self.is_empty() {
            f.write_str(" ")?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for MapValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} => {}", key, value)?;
        }
        if !self.is_empty() {
            f.write_str(" ")?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => fmt::Display::fmt(s, f),
            Value::Integer(i) => fmt::Display::fmt(i, f),
            Value::Boolean(b) => fmt::Display::fmt(b, f),
            Value::Double(d) => fmt::Display::fmt(d, f),
            Value::Array(a) => fmt::Display::fmt(a, f),
            Value::Map(m) => fmt::Display::fmt(m, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars() {
        assert_eq!(Value::from("plain text").to_string(), "plain text");
        assert_eq!(Value::from(-42).to_string(), "-42");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_doubles_switch_to_exponent_form() {
        assert_eq!(Value::from(1e300).to_string(), "1e300");
        assert_eq!(Value::from(-2.5e-7).to_string(), "-2.5e-7");
        assert_eq!(Value::from(123456.75).to_string(), "123456.75");
        assert_eq!(Value::from(0.0).to_string(), "0");
        assert_eq!(Value::from(f64::INFINITY).to_string(), "inf");
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(ArrayValue::default().to_string(), "[ ]");
        assert_eq!(MapValue::default().to_string(), "{ }");
    }

    #[test]
    fn test_nested_containers() {
        let inner = MapValue::from_iter(vec![("a".to_string(), Value::from(1))]);
        let array = ArrayValue::new(vec![Value::from(inner), Value::from(ArrayValue::default())]);
        assert_eq!(array.to_string(), "[ { a => 1 }, [ ] ]");
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let value = Value::from(vec![Value::from("x"), Value::from(vec![Value::from(1.25)])]);
        assert_eq!(value.to_string(), value.to_string());
    }
}
