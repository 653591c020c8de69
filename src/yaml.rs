//! YAML rendering.
//!
//! A fact tree is rendered to YAML in two steps. [`Value::write_yaml`] walks
//! the tree and issues value-shaped events (scalars, sequence and mapping
//! boundaries, mapping keys) into a [`YamlSink`]. The sink decides what to do
//! with them:
//!
//! - [`Emitter`] turns the events into block-style YAML text
//! - `Vec<Event>` records them, which is handy when asserting on structure
//!
//! ## Output conventions
//!
//! - strings are always double-quoted, so `"1"` never reads back as a number
//! - integers and booleans are bare; doubles are bare and always carry a `.`
//!   or an exponent
//! - a collection nested in a sequence entry starts with a bare `-` and is
//!   indented one level below it
//! - empty collections are written in flow style: `[]` and `{}`
//! - every line ends with `\n`
//!
//! ```rust
//! use fact_values::{fact, to_yaml_string};
//!
//! let value = fact!(["1", 2, ["child"]]);
//! assert_eq!(to_yaml_string(&value), "- \"1\"\n- 2\n-\n  - \"child\"\n");
//! ```

use crate::{ArrayValue, MapValue, Value, YamlOptions};

/// A borrowed scalar as seen by a [`YamlSink`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar<'a> {
    String(&'a str),
    Integer(i64),
    Boolean(bool),
    Double(f64),
}

/// An owned YAML event, as recorded by the `Vec<Event>` sink.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    String(String),
    Integer(i64),
    Boolean(bool),
    Double(f64),
    SequenceStart,
    SequenceEnd,
    MappingStart,
    Key(String),
    MappingEnd,
}

/// Receiver of the YAML event stream of a fact tree.
///
/// Events arrive in document order. Inside a mapping every value is preceded
/// by exactly one [`YamlSink::key`] call.
pub trait YamlSink {
    fn scalar(&mut self, scalar: Scalar<'_>);

    fn begin_seq(&mut self);

    fn end_seq(&mut self);

    fn begin_map(&mut self);

    fn key(&mut self, key: &str);

    fn end_map(&mut self);
}

impl YamlSink for Vec<Event> {
    fn scalar(&mut self, scalar: Scalar<'_>) {
        self.push(match scalar {
            Scalar::String(s) => Event::String(s.to_string()),
            Scalar::Integer(i) => Event::Integer(i),
            Scalar::Boolean(b) => Event::Boolean(b),
            Scalar::Double(d) => Event::Double(d),
        });
    }

    fn begin_seq(&mut self) {
        self.push(Event::SequenceStart);
    }

    fn end_seq(&mut self) {
        self.push(Event::SequenceEnd);
    }

    fn begin_map(&mut self) {
        self.push(Event::MappingStart);
    }

    fn key(&mut self, key: &str) {
        self.push(Event::Key(key.to_string()));
    }

    fn end_map(&mut self) {
        self.push(Event::MappingEnd);
    }
}

impl Value {
    /// Issues the YAML events of this node into `sink`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fact_values::fact;
    /// use fact_values::yaml::Event;
    ///
    /// let mut events = Vec::new();
    /// fact!({"up": true}).write_yaml(&mut events);
    ///
    /// assert_eq!(
    ///     events,
    ///     vec![
    ///         Event::MappingStart,
    ///         Event::Key("up".to_string()),
    ///         Event::Boolean(true),
    ///         Event::MappingEnd,
    ///     ]
    /// );
    /// ```
    pub fn write_yaml<S: YamlSink + ?Sized>(&self, sink: &mut S) {
        match self {
            Value::String(s) => sink.scalar(Scalar::String(s.value())),
            Value::Integer(i) => sink.scalar(Scalar::Integer(*i.value())),
            Value::Boolean(b) => sink.scalar(Scalar::Boolean(*b.value())),
            Value::Double(d) => sink.scalar(Scalar::Double(*d.value())),
            Value::Array(a) => a.write_yaml(sink),
            Value::Map(m) => m.write_yaml(sink),
        }
    }
}

impl ArrayValue {
    pub fn write_yaml<S: YamlSink + ?Sized>(&self, sink: &mut S) {
        sink.begin_seq();
        for element in self.iter() {
            element.write_yaml(sink);
        }
        sink.end_seq();
    }
}

impl MapValue {
    pub fn write_yaml<S: YamlSink + ?Sized>(&self, sink: &mut S) {
        sink.begin_map();
        for (key, value) in self.iter() {
            sink.key(key);
            value.write_yaml(sink);
        }
        sink.end_map();
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Collection {
    Sequence,
    Mapping,
}

/// An open collection on the emitter stack.
#[derive(Debug)]
struct Frame {
    collection: Collection,
    indent: usize,
    /// Line introducing this collection (`-`, `key:`), written once the first
    /// child arrives. Empty for the root collection.
    header: String,
    opened: bool,
    pending_key: Option<String>,
}

/// Block-style YAML text emitter.
///
/// # Examples
///
/// ```rust
/// use fact_values::fact;
/// use fact_values::yaml::Emitter;
///
/// let mut emitter = Emitter::default();
/// fact!({"os": {"name": "Fedora", "release": [39, 1]}}).write_yaml(&mut emitter);
///
/// assert_eq!(
///     emitter.into_inner(),
///     "os:\n  name: \"Fedora\"\n  release:\n    - 39\n    - 1\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct Emitter {
    output: String,
    options: YamlOptions,
    stack: Vec<Frame>,
    started: bool,
}

impl Emitter {
    /// Creates an emitter. An `indent` of zero is treated as one.
    pub fn new(mut options: YamlOptions) -> Self {
        options.indent = options.indent.max(1);
        Emitter {
            output: String::with_capacity(256),
            options,
            stack: Vec::new(),
            started: false,
        }
    }

    /// Returns the text emitted so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    fn start_document(&mut self) {
        if !self.started {
            self.started = true;
            if self.options.document_start {
                self.output.push_str("---\n");
            }
        }
    }

    /// Writes the header of the innermost collection if this is its first child.
    fn open_parent(&mut self) {
        if let Some(frame) = self.stack.last_mut() {
            if !frame.opened {
                frame.opened = true;
                if !frame.header.is_empty() {
                    self.output.push_str(&frame.header);
                    self.output.push('\n');
                }
            }
        }
    }

    fn child_prefix(&mut self) -> String {
        match self.stack.last_mut() {
            None => String::new(),
            Some(frame) => {
                let indent = " ".repeat(frame.indent);
                match frame.collection {
                    Collection::Sequence => format!("{}-", indent),
                    Collection::Mapping => {
                        let key = frame.pending_key.take().unwrap_or_default();
                        format!("{}{}:", indent, format_key(&key))
                    }
                }
            }
        }
    }

    fn child_indent(&self) -> usize {
        self.stack
            .last()
            .map_or(0, |frame| frame.indent + self.options.indent)
    }

    fn begin_collection(&mut self, collection: Collection) {
        self.start_document();
        self.open_parent();
        let indent = self.child_indent();
        let header = self.child_prefix();
        self.stack.push(Frame {
            collection,
            indent,
            header,
            opened: false,
            pending_key: None,
        });
    }

    fn end_collection(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        if frame.opened {
            return;
        }
        let empty = match frame.collection {
            Collection::Sequence => "[]",
            Collection::Mapping => "{}",
        };
        if !frame.header.is_empty() {
            self.output.push_str(&frame.header);
            self.output.push(' ');
        }
        self.output.push_str(empty);
        self.output.push('\n');
    }
}

impl YamlSink for Emitter {
    fn scalar(&mut self, scalar: Scalar<'_>) {
        self.start_document();
        self.open_parent();
        let prefix = self.child_prefix();
        if !prefix.is_empty() {
            self.output.push_str(&prefix);
            self.output.push(' ');
        }
        write_scalar(&mut self.output, scalar);
        self.output.push('\n');
    }

    fn begin_seq(&mut self) {
        self.begin_collection(Collection::Sequence);
    }

    fn end_seq(&mut self) {
        self.end_collection();
    }

    fn begin_map(&mut self) {
        self.begin_collection(Collection::Mapping);
    }

    fn key(&mut self, key: &str) {
        if let Some(frame) = self.stack.last_mut() {
            frame.pending_key = Some(key.to_string());
        }
    }

    fn end_map(&mut self) {
        self.end_collection();
    }
}

fn write_scalar(output: &mut String, scalar: Scalar<'_>) {
    match scalar {
        Scalar::String(s) => write_quoted(output, s),
        Scalar::Integer(i) => output.push_str(&i.to_string()),
        Scalar::Boolean(b) => output.push_str(if b { "true" } else { "false" }),
        Scalar::Double(d) => output.push_str(&format_double(d)),
    }
}

fn format_double(d: f64) -> String {
    if d.is_nan() {
        return ".nan".to_string();
    }
    if d.is_infinite() {
        return if d > 0.0 { ".inf" } else { "-.inf" }.to_string();
    }
    // Debug keeps a fractional part on whole numbers (`2.0`) and switches to
    // an exponent for very large or small magnitudes (`1e300`).
    let s = format!("{:?}", d);
    match s.find('e') {
        Some(pos) if !s[..pos].contains('.') => format!("{}.0{}", &s[..pos], &s[pos..]),
        _ => s,
    }
}

fn write_quoted(output: &mut String, s: &str) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            '\0' => output.push_str("\\0"),
            c if needs_escape(c) => {
                let code = c as u32;
                if code <= 0xFFFF {
                    output.push_str(&format!("\\u{:04X}", code));
                } else {
                    output.push_str(&format!("\\U{:08X}", code));
                }
            }
            _ => output.push(ch),
        }
    }
    output.push('"');
}

/// Characters a YAML reader would reject, fold or strip inside a quoted scalar.
fn needs_escape(c: char) -> bool {
    c.is_control() || matches!(c, '\u{2028}' | '\u{2029}' | '\u{FEFF}' | '\u{FFFE}' | '\u{FFFF}')
}

fn format_key(key: &str) -> String {
    if is_plain_key(key) {
        key.to_string()
    } else {
        let mut quoted = String::with_capacity(key.len() + 2);
        write_quoted(&mut quoted, key);
        quoted
    }
}

fn is_plain_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-' | '/')) {
        return false;
    }

    // Words a YAML 1.1 reader would resolve to a boolean or null.
    const RESERVED: &[&str] = &["true", "false", "yes", "no", "on", "off", "y", "n", "null"];
    let lower = key.to_ascii_lowercase();
    !RESERVED.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fact, to_yaml_string};

    fn emit(value: &Value) -> String {
        let mut emitter = Emitter::default();
        value.write_yaml(&mut emitter);
        emitter.into_inner()
    }

    #[test]
    fn test_reference_array() {
        let value = fact!(["1", 2, ["child"]]);
        assert_eq!(emit(&value), "- \"1\"\n- 2\n-\n  - \"child\"\n");
    }

    #[test]
    fn test_root_scalars() {
        assert_eq!(emit(&Value::from("x")), "\"x\"\n");
        assert_eq!(emit(&Value::from(3)), "3\n");
        assert_eq!(emit(&Value::from(false)), "false\n");
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(emit(&fact!([])), "[]\n");
        assert_eq!(emit(&fact!({})), "{}\n");
        assert_eq!(emit(&fact!([[], {}])), "- []\n- {}\n");
        assert_eq!(emit(&fact!({"none": []})), "none: []\n");
    }

    #[test]
    fn test_map_inside_sequence() {
        let value = fact!([{"name": "lo", "mtu": 65536}]);
        assert_eq!(emit(&value), "-\n  name: \"lo\"\n  mtu: 65536\n");
    }

    #[test]
    fn test_sequence_inside_map() {
        let value = fact!({"disks": ["sda", "sdb"], "count": 2});
        assert_eq!(emit(&value), "disks:\n  - \"sda\"\n  - \"sdb\"\ncount: 2\n");
    }

    #[test]
    fn test_string_escapes() {
        let value = Value::from("say \"hi\"\\\n\tbye\u{1}");
        assert_eq!(emit(&value), "\"say \\\"hi\\\"\\\\\\n\\tbye\\u0001\"\n");
        assert_eq!(emit(&Value::from("a\u{2028}b")), "\"a\\u2028b\"\n");
    }

    #[test]
    fn test_doubles() {
        assert_eq!(format_double(2.0), "2.0");
        assert_eq!(format_double(-0.25), "-0.25");
        assert_eq!(format_double(1e300), "1.0e300");
        assert_eq!(format_double(f64::NAN), ".nan");
        assert_eq!(format_double(f64::INFINITY), ".inf");
        assert_eq!(format_double(f64::NEG_INFINITY), "-.inf");
    }

    #[test]
    fn test_key_quoting() {
        assert_eq!(format_key("os"), "os");
        assert_eq!(format_key("ssh.rsa-key_2"), "ssh.rsa-key_2");
        assert_eq!(format_key("yes"), "\"yes\"");
        assert_eq!(format_key("2nd"), "\"2nd\"");
        assert_eq!(format_key("with space"), "\"with space\"");
        assert_eq!(format_key(""), "\"\"");
    }

    #[test]
    fn test_custom_indent_and_document_start() {
        let value = fact!({"a": [1]});
        let options = YamlOptions::new().with_indent(4).with_document_start(true);
        let mut emitter = Emitter::new(options);
        value.write_yaml(&mut emitter);
        assert_eq!(emitter.as_str(), "---\na:\n    - 1\n");
    }

    #[test]
    fn test_zero_indent_still_nests() {
        let mut options = YamlOptions::new();
        options.indent = 0;
        let mut emitter = Emitter::new(options);
        fact!([[1], 2]).write_yaml(&mut emitter);
        assert_eq!(emitter.as_str(), "-\n - 1\n- 2\n");
    }

    #[test]
    fn test_event_recorder() {
        let mut events = Vec::new();
        fact!(["1", [2.5]]).write_yaml(&mut events);
        assert_eq!(
            events,
            vec![
                Event::SequenceStart,
                Event::String("1".to_string()),
                Event::SequenceStart,
                Event::Double(2.5),
                Event::SequenceEnd,
                Event::SequenceEnd,
            ]
        );
    }

    #[test]
    fn test_unbalanced_end_is_ignored() {
        let mut emitter = Emitter::default();
        emitter.end_seq();
        emitter.scalar(Scalar::Integer(1));
        assert_eq!(emitter.into_inner(), "1\n");
    }

    #[test]
    fn test_crate_helper_matches_emitter() {
        let value = fact!({"kernel": "Linux", "uptime": {"days": 3}});
        assert_eq!(to_yaml_string(&value), emit(&value));
    }
}
