//! # fact_values
//!
//! A tree-shaped value model for discovered system facts, with renderers for
//! JSON, YAML and a flattened human-readable text form.
//!
//! ## What is a fact tree?
//!
//! Inventory tools describe a machine as a set of named facts. A fact may be
//! a plain scalar (`kernel => Linux`) or a nested structure (a list of disks,
//! a map of network interfaces). This crate models such values as a closed
//! set of node kinds:
//!
//! - **Scalars**: string, 64-bit integer, boolean and double
//! - **Arrays**: ordered sequences of nodes
//! - **Maps**: insertion-ordered string keys to nodes
//!
//! Containers own their children, trees are built bottom-up and never change
//! once assembled, so any number of threads can render the same tree at the
//! same time.
//!
//! ## Quick Start
//!
//! ```rust
//! use fact_values::{fact, to_json_string, to_text_string, to_yaml_string};
//!
//! let value = fact!(["1", 2, ["child"]]);
//!
//! assert_eq!(to_text_string(&value), "[ 1, 2, [ child ] ]");
//! assert_eq!(to_json_string(&value).unwrap(), r#"["1",2,["child"]]"#);
//! assert_eq!(to_yaml_string(&value), "- \"1\"\n- 2\n-\n  - \"child\"\n");
//! ```
//!
//! ### Building trees by hand
//!
//! ```rust
//! use fact_values::{ArrayValue, IntegerValue, StringValue, Value};
//!
//! let children = vec![Value::from("child")];
//! let elements = vec![
//!     Value::from("1"),
//!     Value::from(2),
//!     Value::from(ArrayValue::new(children)),
//! ];
//! let array = ArrayValue::new(elements);
//!
//! assert_eq!(array.get::<StringValue>(0).map(|s| s.value().as_str()), Some("1"));
//! assert_eq!(array.get::<IntegerValue>(1).map(|i| *i.value()), Some(2));
//! assert!(array.get::<ArrayValue>(0).is_none());
//! ```
//!
//! ### Formatting resolved facts
//!
//! ```rust
//! use fact_values::{FactFormatter, LegacyFormatter, ResolvedFact, Value};
//!
//! let facts = vec![
//!     ResolvedFact::new("kernel", Some(Value::from("Linux"))),
//!     ResolvedFact::new("os.family", Some(Value::from("Debian"))),
//! ];
//!
//! let text = LegacyFormatter.format(&facts).unwrap();
//! assert_eq!(text, "kernel => Linux\nos => { family => Debian }");
//! ```
//!
//! ## Modules
//!
//! - [`value`] - node types, kinds and checked downcasts
//! - [`json`] - JSON document building and `serde::Serialize`
//! - [`yaml`] - YAML event sink and block-style emitter
//! - [`text`] - `Display` rendering
//! - [`formatter`] - legacy, JSON and YAML output of resolved facts
//! - [`options`] - output format selection and YAML options

pub mod array;
pub mod error;
pub mod formatter;
pub mod json;
pub mod macros;
pub mod map;
pub mod options;
pub mod text;
pub mod value;
pub mod yaml;

pub use array::ArrayValue;
pub use error::{Error, Result};
pub use formatter::{
    FactCollection, FactFormatter, FilterToken, JsonFormatter, LegacyFormatter, ResolvedFact,
    YamlFormatter,
};
pub use map::MapValue;
pub use options::{Format, YamlOptions};
pub use value::{
    BooleanValue, Downcast, DoubleValue, IntegerValue, Kind, ScalarValue, StringValue, Value,
};
pub use yaml::{Emitter, YamlSink};

use std::io;

/// Render a value in the flattened text form.
///
/// # Examples
///
/// ```rust
/// use fact_values::{fact, to_text_string};
///
/// assert_eq!(to_text_string(&fact!({"up": true})), "{ up => true }");
/// ```
#[must_use]
pub fn to_text_string(value: &Value) -> String {
    value.to_string()
}

/// Build the JSON document of a value.
#[must_use]
pub fn to_json_value(value: &Value) -> serde_json::Value {
    value.to_json()
}

/// Render a value as compact JSON text.
///
/// # Errors
///
/// Returns `Error::Json` if the JSON encoder fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json_string(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(&value.to_json())?)
}

/// Render a value as indented JSON text.
///
/// # Examples
///
/// ```rust
/// use fact_values::{fact, to_json_string_pretty};
///
/// let json = to_json_string_pretty(&fact!({"cores": [0, 1]})).unwrap();
/// assert_eq!(json, "{\n  \"cores\": [\n    0,\n    1\n  ]\n}");
/// ```
///
/// # Errors
///
/// Returns `Error::Json` if the JSON encoder fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json_string_pretty(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(&value.to_json())?)
}

/// Render a value as block-style YAML with default options.
#[must_use]
pub fn to_yaml_string(value: &Value) -> String {
    to_yaml_string_with_options(value, YamlOptions::default())
}

/// Render a value as block-style YAML with custom options.
#[must_use]
pub fn to_yaml_string_with_options(value: &Value, options: YamlOptions) -> String {
    let mut emitter = Emitter::new(options);
    value.write_yaml(&mut emitter);
    emitter.into_inner()
}

/// Render a value in the given output format.
///
/// # Examples
///
/// ```rust
/// use fact_values::{fact, to_string_as, Format};
///
/// let value = fact!([1, 2]);
/// assert_eq!(to_string_as(&value, Format::Text).unwrap(), "[ 1, 2 ]");
/// assert_eq!(to_string_as(&value, Format::Json).unwrap(), "[1,2]");
/// assert_eq!(to_string_as(&value, Format::Yaml).unwrap(), "- 1\n- 2\n");
/// ```
///
/// # Errors
///
/// Returns `Error::Json` if a JSON format is requested and encoding fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_as(value: &Value, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(to_text_string(value)),
        Format::Json => to_json_string(value),
        Format::PrettyJson => to_json_string_pretty(value),
        Format::Yaml => Ok(to_yaml_string(value)),
    }
}

/// Render a value in the given output format into a writer.
///
/// # Examples
///
/// ```rust
/// use fact_values::{fact, to_writer, Format};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &fact!(["a"]), Format::Text).unwrap();
/// assert_eq!(buffer, b"[ a ]");
/// ```
///
/// # Errors
///
/// Returns an error if rendering fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(mut writer: W, value: &Value, format: Format) -> Result<()>
where
    W: io::Write,
{
    let rendered = to_string_as(value, format)?;
    writer
        .write_all(rendered.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
