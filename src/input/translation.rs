//! Translation document loading and saving

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{
    Map,
    Value,
};

use crate::error::{
    UpdateError,
    json_type_name,
};
use crate::types::KeyPath;

/// One locale's translation document.
///
/// Backed by an insertion-ordered map, so iteration order is the order keys
/// appear in the file (or the order edits placed them).
pub type Document = Map<String, Value>;

/// Indentation used when writing translation files.
const INDENT: &[u8] = b"    ";

/// Load a translation file as an ordered JSON object.
///
/// # Errors
/// - [`UpdateError::FileNotFound`] if the file does not exist
/// - [`UpdateError::Read`] for any other I/O failure
/// - [`UpdateError::Parse`] if the content is not valid UTF-8 JSON
/// - [`UpdateError::NotAnObject`] if the top-level value is not an object
pub fn load_document(path: &Path) -> Result<Document, UpdateError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(UpdateError::FileNotFound(path.to_path_buf()));
        }
        Err(source) => return Err(UpdateError::Read { path: path.to_path_buf(), source }),
    };

    let value: Value = serde_json::from_slice(&bytes)
        .map_err(|source| UpdateError::Parse { path: path.to_path_buf(), source })?;

    match value {
        Value::Object(map) => Ok(map),
        other => {
            Err(UpdateError::NotAnObject { path: path.to_path_buf(), found: json_type_name(&other) })
        }
    }
}

fn render_bytes(document: &Document) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)?;
    Ok(buf)
}

/// Serialize a document with 4-space indentation.
///
/// Non-ASCII characters are written as-is, and no trailing newline is added.
pub fn render_document(document: &Document) -> Result<String, serde_json::Error> {
    String::from_utf8(render_bytes(document)?).map_err(serde::ser::Error::custom)
}

/// Overwrite `path` with the rendered document.
///
/// # Errors
/// Returns [`UpdateError::Write`] if serialization or the write fails.
pub fn save_document(path: &Path, document: &Document) -> Result<(), UpdateError> {
    let bytes = render_bytes(document)
        .map_err(|e| UpdateError::Write { path: path.to_path_buf(), source: e.into() })?;

    std::fs::write(path, bytes)
        .map_err(|source| UpdateError::Write { path: path.to_path_buf(), source })
}

/// Look up the value at a dotted key path.
#[must_use]
pub fn read_path<'a>(document: &'a Document, path: &KeyPath) -> Option<&'a Value> {
    let (last, parents) = path.split_last()?;

    let mut current = document;
    for segment in parents {
        current = current.get(segment)?.as_object()?;
    }
    current.get(last)
}

/// Every leaf of the document, as the list of object keys leading to it.
///
/// Anything that is not an object is a leaf, arrays included. Empty objects
/// have no leaves.
#[must_use]
pub fn leaf_paths(document: &Document) -> HashSet<Vec<String>> {
    let mut result = HashSet::new();
    collect_leaf_paths(document, &mut Vec::new(), &mut result);
    result
}

fn collect_leaf_paths(
    map: &Map<String, Value>,
    prefix: &mut Vec<String>,
    result: &mut HashSet<Vec<String>>,
) {
    for (key, value) in map {
        prefix.push(key.clone());
        if let Value::Object(inner) = value {
            collect_leaf_paths(inner, prefix, result);
        } else {
            result.insert(prefix.clone());
        }
        prefix.pop();
    }
}
