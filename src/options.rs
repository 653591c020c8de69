//! Output format selection and rendering options.
//!
//! This module provides types to choose and tune an output form:
//!
//! - [`Format`]: which renderer to run (text, JSON, pretty JSON or YAML)
//! - [`YamlOptions`]: indentation and document marker for the YAML emitter
//!
//! ## Examples
//!
//! ```rust
//! use fact_values::{fact, to_string_as, to_yaml_string_with_options, Format, YamlOptions};
//!
//! let value = fact!({"os": {"family": "Linux"}});
//!
//! let format: Format = "yaml".parse().unwrap();
//! let yaml = to_string_as(&value, format).unwrap();
//! assert_eq!(yaml, "os:\n  family: \"Linux\"\n");
//!
//! let options = YamlOptions::new().with_indent(4).with_document_start(true);
//! let yaml = to_yaml_string_with_options(&value, options);
//! assert_eq!(yaml, "---\nos:\n    family: \"Linux\"\n");
//! ```

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Output form of a rendered value tree.
///
/// # Examples
///
/// ```rust
/// use fact_values::Format;
///
/// assert_eq!(Format::Text.as_str(), "text");
/// assert_eq!(Format::PrettyJson.as_str(), "pretty-json");
/// assert_eq!("YAML".parse::<Format>().unwrap(), Format::Yaml);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
    PrettyJson,
    Yaml,
}

impl Format {
    /// Returns the canonical name of this format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Json => "json",
            Format::PrettyJson => "pretty-json",
            Format::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            "pretty-json" => Ok(Format::PrettyJson),
            "yaml" => Ok(Format::Yaml),
            _ => Err(Error::unknown_format(s)),
        }
    }
}

/// Configuration for the YAML [`Emitter`](crate::yaml::Emitter).
///
/// # Examples
///
/// ```rust
/// use fact_values::YamlOptions;
///
/// let options = YamlOptions::new();
/// assert_eq!(options.indent, 2);
/// assert!(!options.document_start);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YamlOptions {
    /// Spaces added per nesting level; the emitter treats 0 as 1.
    pub indent: usize,
    /// Emit a `---` line before the document.
    pub document_start: bool,
}

impl Default for YamlOptions {
    fn default() -> Self {
        YamlOptions {
            indent: 2,
            document_start: false,
        }
    }
}

impl YamlOptions {
    /// Creates default options (2-space indent, no document marker).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation size. Values below 1 are raised to 1 so nested
    /// collections stay distinguishable from their parent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fact_values::YamlOptions;
    ///
    /// assert_eq!(YamlOptions::new().with_indent(4).indent, 4);
    /// assert_eq!(YamlOptions::new().with_indent(0).indent, 1);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent.max(1);
        self
    }

    /// Enables or disables the leading `---` document marker.
    #[must_use]
    pub fn with_document_start(mut self, document_start: bool) -> Self {
        self.document_start = document_start;
        self
    }
}
