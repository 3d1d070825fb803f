//! Update plans: which edits to apply to which locale.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    Map,
    Value,
};

use crate::config::ValidationError;
use crate::types::{
    KeyPath,
    Locale,
};

/// A single edit to a translation document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum UpdateOperation {
    /// Insert a new top-level section immediately before an existing key.
    InsertSection {
        key: String,
        before: String,
        value: Map<String, Value>,
    },
    /// Set a value at a dotted key path, creating missing parents.
    Set { path: String, value: Value },
}

/// Operations for one locale, applied in order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleUpdate {
    pub locale: Locale,
    pub operations: Vec<UpdateOperation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlan {
    #[serde(default)]
    pub name: Option<String>,
    pub updates: Vec<LocaleUpdate>,
}

impl UpdatePlan {
    /// Locales in plan order.
    #[must_use]
    pub fn locales(&self) -> Vec<Locale> {
        self.updates.iter().map(|u| u.locale.clone()).collect()
    }

    #[must_use]
    pub fn operations_for(&self, locale: &Locale) -> Option<&[UpdateOperation]> {
        self.updates.iter().find(|u| &u.locale == locale).map(|u| u.operations.as_slice())
    }

    /// # Errors
    /// - No updates at all
    /// - A locale listed twice
    /// - An empty operation list
    /// - Empty section/anchor keys, or a section anchored on itself
    /// - A `set` path that does not parse with `key_separator`
    pub fn validate(&self, key_separator: &str) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.updates.is_empty() {
            errors.push(ValidationError::new("updates", "At least one locale update is required"));
        }

        let mut seen = HashSet::new();
        for (index, update) in self.updates.iter().enumerate() {
            let field = format!("updates[{index}]");

            if !seen.insert(&update.locale) {
                errors.push(ValidationError::new(
                    format!("{field}.locale"),
                    format!("Locale '{}' is listed more than once", update.locale),
                ));
            }

            if update.operations.is_empty() {
                errors.push(ValidationError::new(
                    format!("{field}.operations"),
                    "At least one operation is required",
                ));
            }

            for (op_index, operation) in update.operations.iter().enumerate() {
                let op_field = format!("{field}.operations[{op_index}]");
                validate_operation(operation, key_separator, &op_field, &mut errors);
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn validate_operation(
    operation: &UpdateOperation,
    key_separator: &str,
    field: &str,
    errors: &mut Vec<ValidationError>,
) {
    match operation {
        UpdateOperation::InsertSection { key, before, .. } => {
            if key.is_empty() {
                errors.push(ValidationError::new(
                    format!("{field}.key"),
                    "The section key cannot be empty",
                ));
            }
            if before.is_empty() {
                errors.push(ValidationError::new(
                    format!("{field}.before"),
                    "The anchor key cannot be empty",
                ));
            } else if key == before {
                errors.push(ValidationError::new(
                    format!("{field}.before"),
                    format!("Section '{key}' cannot be inserted before itself"),
                ));
            }
        }
        UpdateOperation::Set { path, .. } => {
            if let Err(e) = KeyPath::parse(path, key_separator) {
                errors.push(ValidationError::new(format!("{field}.path"), e.to_string()));
            }
        }
    }
}

/// Plans shipped with the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Adds the `feedback` section before `districts` (en, si, ta).
    Feedback,
    /// Sets `helpRequests.pageInstruction` (si, en, ta).
    PageInstruction,
}

impl Preset {
    pub const ALL: [Self; 2] = [Self::Feedback, Self::PageInstruction];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Feedback => "feedback",
            Self::PageInstruction => "page-instruction",
        }
    }

    const fn source(self) -> &'static str {
        match self {
            Self::Feedback => include_str!("../presets/feedback.json"),
            Self::PageInstruction => include_str!("../presets/page-instruction.json"),
        }
    }

    /// # Errors
    /// Only if the embedded preset JSON is malformed.
    pub fn plan(self) -> Result<UpdatePlan, serde_json::Error> {
        serde_json::from_str(self.source())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|preset| preset.name() == s).ok_or_else(|| {
            let names: Vec<_> = Self::ALL.iter().map(|p| p.name()).collect();
            format!("unknown preset '{s}' (expected one of: {})", names.join(", "))
        })
    }
}
