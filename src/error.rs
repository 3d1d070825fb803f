use std::path::PathBuf;

use thiserror::Error;

/// Defines errors that may occur while updating a translation file
#[derive(Error, Debug)]
pub enum UpdateError {
    /// The target translation file does not exist
    #[error("Translation file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The file exists but could not be read
    #[error("Failed to read translation file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid UTF-8 JSON
    #[error("Failed to parse JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file parsed, but its top-level value is not an object
    #[error("Expected a JSON object at the top level of {}, found {found}", .path.display())]
    NotAnObject { path: PathBuf, found: &'static str },

    /// Serializing or writing the file failed
    #[error("Failed to write translation file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An intermediate segment of a dotted path holds a non-object value
    #[error("Cannot descend into '{path}': existing value is {found}, not an object")]
    TypeMismatch { path: String, found: &'static str },

    /// Positional insertion was requested relative to a key that is absent
    #[error("Cannot insert section '{section}': anchor key '{anchor}' not found")]
    AnchorNotFound { section: String, anchor: String },

    /// The section to insert already exists in the document
    #[error("Section '{0}' already exists")]
    SectionExists(String),

    #[error("Invalid key path '{path}': {reason}")]
    InvalidKeyPath { path: String, reason: String },

    #[error("Invalid locale code '{0}'")]
    InvalidLocale(String),

    /// A locale was selected but the plan carries no updates for it
    #[error("No updates defined for locale '{0}'")]
    MissingPayload(String),
}

/// JSON type name used in error messages.
#[must_use]
pub const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
