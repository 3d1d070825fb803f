//! Core types used throughout the project.

use std::fmt;
use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::error::UpdateError;

/// Locale code selecting one translation document (e.g. "en", "si", "ta").
///
/// Only ASCII letters, digits, `-` and `_` are accepted so a locale can
/// never escape the translations directory when joined into a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// # Errors
    /// Returns [`UpdateError::InvalidLocale`] for empty codes or codes with
    /// characters outside `[A-Za-z0-9_-]`.
    pub fn new(code: impl Into<String>) -> Result<Self, UpdateError> {
        let code = code.into();
        let valid = !code.is_empty()
            && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid { Ok(Self(code)) } else { Err(UpdateError::InvalidLocale(code)) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<base>/<locale>.json`
    #[must_use]
    pub fn file_path(&self, base_path: &Path) -> PathBuf {
        base_path.join(format!("{}.json", self.0))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Locale {
    type Error = UpdateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

/// A dotted key path such as `helpRequests.pageInstruction`, already split
/// into its segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<String>,
    separator: String,
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join(self.separator.as_str()))
    }
}

impl KeyPath {
    /// Splits `raw` on `separator`.
    ///
    /// # Errors
    /// Returns [`UpdateError::InvalidKeyPath`] when the path is empty or
    /// contains an empty segment (`a..b`, `.a`, `a.`).
    pub fn parse(raw: &str, separator: &str) -> Result<Self, UpdateError> {
        if separator.is_empty() {
            return Err(UpdateError::InvalidKeyPath {
                path: raw.to_string(),
                reason: "key separator is empty".to_string(),
            });
        }
        if raw.is_empty() {
            return Err(UpdateError::InvalidKeyPath {
                path: raw.to_string(),
                reason: "path is empty".to_string(),
            });
        }

        let segments: Vec<String> = raw.split(separator).map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(UpdateError::InvalidKeyPath {
                path: raw.to_string(),
                reason: "path contains an empty segment".to_string(),
            });
        }

        Ok(Self { segments, separator: separator.to_string() })
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Splits into the intermediate segments and the final key.
    #[must_use]
    pub fn split_last(&self) -> Option<(&String, &[String])> {
        self.segments.split_last()
    }

    /// The first `depth` segments joined back with the separator.
    #[must_use]
    pub fn prefix(&self, depth: usize) -> String {
        let head: Vec<&str> = self.segments.iter().take(depth).map(String::as_str).collect();
        head.join(self.separator.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::simple("en")]
    #[case::region("en-US")]
    #[case::underscore("zh_Hant")]
    fn test_locale_valid(#[case] code: &str) {
        assert_that!(Locale::new(code), ok(anything()));
    }

    #[rstest]
    #[case::empty("")]
    #[case::path_traversal("../en")]
    #[case::slash("en/si")]
    #[case::space("en US")]
    fn test_locale_invalid(#[case] code: &str) {
        assert_that!(Locale::new(code), err(anything()));
    }

    #[rstest]
    fn test_locale_file_path() {
        let locale = Locale::new("si").unwrap();

        let path = locale.file_path(Path::new("client/src/lib/translations"));

        assert_eq!(path, PathBuf::from("client/src/lib/translations/si.json"));
    }

    #[rstest]
    fn test_locale_deserialize_rejects_invalid() {
        let result: std::result::Result<Locale, _> = serde_json::from_str(r#""../etc""#);

        assert!(result.is_err());
    }

    #[rstest]
    #[case("helpRequests.pageInstruction", ".", &["helpRequests", "pageInstruction"])]
    #[case("single", ".", &["single"])]
    #[case("a:b:c", ":", &["a", "b", "c"])]
    fn test_key_path_parse(#[case] raw: &str, #[case] separator: &str, #[case] expected: &[&str]) {
        let path = KeyPath::parse(raw, separator).unwrap();

        assert_eq!(path.segments(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::double_separator("a..b")]
    #[case::leading_separator(".a")]
    #[case::trailing_separator("a.")]
    fn test_key_path_parse_invalid(#[case] raw: &str) {
        assert!(matches!(KeyPath::parse(raw, "."), Err(UpdateError::InvalidKeyPath { .. })));
    }

    #[rstest]
    fn test_key_path_prefix() {
        let path = KeyPath::parse("a:b:c", ":").unwrap();

        assert_that!(path.prefix(2), eq("a:b"));
    }
}
