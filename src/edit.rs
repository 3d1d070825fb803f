//! In-memory edits applied to a translation document

use serde_json::{
    Map,
    Value,
};

use crate::error::{
    UpdateError,
    json_type_name,
};
use crate::input::translation::Document;
use crate::plan::UpdateOperation;
use crate::types::KeyPath;

/// Insert a new top-level section immediately before `before_key`.
///
/// All other keys keep their relative order and values.
///
/// # Errors
/// - [`UpdateError::SectionExists`] if `section_key` is already present
/// - [`UpdateError::AnchorNotFound`] if `before_key` is absent
pub fn insert_section_before_key(
    document: Document,
    section_key: &str,
    section_value: Map<String, Value>,
    before_key: &str,
) -> Result<Document, UpdateError> {
    if document.contains_key(section_key) {
        return Err(UpdateError::SectionExists(section_key.to_string()));
    }
    if !document.contains_key(before_key) {
        return Err(UpdateError::AnchorNotFound {
            section: section_key.to_string(),
            anchor: before_key.to_string(),
        });
    }

    let mut section = Some(Value::Object(section_value));
    let mut ordered = Document::new();
    for (key, value) in document {
        if key == before_key
            && let Some(section) = section.take()
        {
            ordered.insert(section_key.to_string(), section);
        }
        ordered.insert(key, value);
    }

    Ok(ordered)
}

/// Set `value` at a dotted key path, creating missing intermediate objects.
///
/// An existing final key keeps its position and is overwritten whatever its
/// previous type; a new final key is appended to its parent object.
///
/// # Errors
/// Returns [`UpdateError::TypeMismatch`] if an intermediate segment already
/// holds a non-object value. The document is left unchanged in that case.
pub fn apply_dotted_update(
    document: &mut Document,
    path: &KeyPath,
    value: Value,
) -> Result<(), UpdateError> {
    let Some((last, parents)) = path.split_last() else {
        return Err(UpdateError::InvalidKeyPath {
            path: path.to_string(),
            reason: "path is empty".to_string(),
        });
    };

    let mut current = document;
    for (depth, segment) in parents.iter().enumerate() {
        // Only pre-existing levels can mismatch, so nothing has been created
        // yet when this returns an error.
        let entry = current.entry(segment.clone()).or_insert_with(|| Value::Object(Map::new()));
        current = match entry {
            Value::Object(map) => map,
            other => {
                return Err(UpdateError::TypeMismatch {
                    path: path.prefix(depth + 1),
                    found: json_type_name(other),
                });
            }
        };
    }

    current.insert(last.clone(), value);
    Ok(())
}

/// Apply one plan operation, returning the edited document.
pub fn apply_operation(
    document: Document,
    operation: &UpdateOperation,
    separator: &str,
) -> Result<Document, UpdateError> {
    match operation {
        UpdateOperation::InsertSection { key, before, value } => {
            tracing::debug!(section = %key, before = %before, "Inserting section");
            insert_section_before_key(document, key, value.clone(), before)
        }
        UpdateOperation::Set { path, value } => {
            tracing::debug!(path = %path, "Setting value");
            let key_path = KeyPath::parse(path, separator)?;
            let mut document = document;
            apply_dotted_update(&mut document, &key_path, value.clone())?;
            Ok(document)
        }
    }
}
