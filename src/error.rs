//! Error types for fact rendering.
//!
//! Building a value tree and rendering it never fails: typed access that
//! hits the wrong kind yields `None` instead of an error. The errors in this
//! module only come from the machinery around the renderers:
//!
//! - **I/O Errors**: writing rendered output to an [`std::io::Write`] sink
//! - **JSON Errors**: encoding a JSON tree to a string
//! - **Unknown Formats**: parsing an output format name
//!
//! ## Examples
//!
//! ```rust
//! use fact_values::{Error, Format};
//!
//! let result: Result<Format, Error> = "toml".parse();
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     assert!(err.to_string().contains("toml"));
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all errors raised around fact rendering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error while writing rendered output
    #[error("IO error: {0}")]
    Io(String),

    /// JSON encoding failed
    #[error("JSON error: {0}")]
    Json(String),

    /// An output format name that is not one of text, json, pretty-json or yaml
    #[error("Unknown output format '{0}': expected one of text, json, pretty-json, yaml")]
    UnknownFormat(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an unknown format error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fact_values::Error;
    ///
    /// let err = Error::unknown_format("xml");
    /// assert!(err.to_string().contains("'xml'"));
    /// ```
    pub fn unknown_format(name: &str) -> Self {
        Error::UnknownFormat(name.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fact_values::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
