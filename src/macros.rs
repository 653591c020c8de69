/// Builds a [`Value`](crate::Value) tree from a JSON-like literal.
///
/// Arrays become [`ArrayValue`](crate::ArrayValue)s, objects become
/// [`MapValue`](crate::MapValue)s with keys in the order written, and any
/// other expression goes through `Value::from`.
///
/// ```rust
/// use fact_values::fact;
///
/// let value = fact!({
///     "hostname": "web01",
///     "processors": {"count": 4, "isa": "x86_64"},
///     "disks": ["sda", "sdb"]
/// });
/// assert!(value.as_map().is_some());
/// ```
#[macro_export]
macro_rules! fact {
    // Handle empty array
    ([]) => {
        $crate::Value::Array($crate::ArrayValue::default())
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array($crate::ArrayValue::new(vec![$($crate::fact!($elem)),*]))
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Map($crate::MapValue::default())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let entries: ::std::vec::Vec<(::std::string::String, $crate::Value)> = vec![
            $(($key.to_string(), $crate::fact!($value))),*
        ];
        $crate::Value::Map(entries.into_iter().collect())
    }};

    // Scalars and prebuilt values
    ($s:expr) => {
        $crate::Value::from($s)
    };
}

#[cfg(test)]
mod tests {
    use crate::{ArrayValue, MapValue, Value};

    #[test]
    fn test_fact_macro_scalars() {
        assert_eq!(fact!(true), Value::from(true));
        assert_eq!(fact!(42), Value::from(42));
        assert_eq!(fact!(3.5), Value::from(3.5));
        assert_eq!(fact!("hello"), Value::from("hello"));
    }

    #[test]
    fn test_fact_macro_arrays() {
        assert_eq!(fact!([]), Value::Array(ArrayValue::default()));

        let arr = fact!(["1", 2, ["child"]]);
        match arr {
            Value::Array(array) => {
                assert_eq!(array.len(), 3);
                assert_eq!(array.elements()[0], Value::from("1"));
                assert_eq!(array.elements()[1], Value::from(2));
                assert_eq!(array.elements()[2], Value::from(vec![Value::from("child")]));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_fact_macro_objects() {
        assert_eq!(fact!({}), Value::Map(MapValue::default()));

        let obj = fact!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            Value::Map(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.value("name"), Some(&Value::from("Alice")));
                assert_eq!(map.value("age"), Some(&Value::from(30)));
                let keys: Vec<_> = map.keys().map(String::as_str).collect();
                assert_eq!(keys, vec!["name", "age"]);
            }
            _ => panic!("Expected map"),
        }
    }
}
