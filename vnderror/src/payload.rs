//! Error payload types for the vnd.error media type.
//!
//! The media type has two wire shapes. A single reported problem is a bare
//! object ([`VndError`]); multiple problems travel as a HAL collection with
//! the entries under `_embedded.errors` ([`VndErrors`]). Both shapes may
//! carry `_links`.

use std::fmt;
use std::ops;
use std::slice;
use std::vec;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::link::{Link, Links};

/// Correlation identifier tying a reported error to a server-side log entry.
///
/// Payloads in the wild carry both string logrefs (`"logref": "abc"`) and
/// integer logrefs (`"logref": 42`). Integers are normalized to their
/// decimal string form on deserialization; serialization always emits the
/// string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Logref(String);

impl Logref {
    /// Creates a logref from its string form.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the logref as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Logref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Logref {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Logref {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for Logref {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for Logref {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LogrefWire {
    Text(String),
    Number(u64),
}

impl<'de> Deserialize<'de> for Logref {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match LogrefWire::deserialize(deserializer)? {
            LogrefWire::Text(value) => Ok(Self(value)),
            LogrefWire::Number(value) => Ok(Self(value.to_string())),
        }
    }
}

/// A single reported problem.
///
/// This is also the single-error wire shape: a response body consisting of
/// one bare error object. Both `logref` and `message` are required when
/// parsing; unknown members are ignored.
///
/// JSON format:
/// ```json
/// {
///   "logref": "42",
///   "message": "Validation failed",
///   "path": "/username",
///   "_links": {
///     "help": { "href": "http://example.com/help" }
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VndError {
    /// Correlation identifier for the error.
    pub logref: Logref,

    /// Human-readable description of the problem.
    pub message: String,

    /// JSON pointer to the request member the error refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Hyperlinks relating the error to other resources.
    #[serde(rename = "_links", default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
}

impl VndError {
    /// Creates an error with the given logref and message.
    #[must_use]
    pub fn new(logref: impl Into<Logref>, message: impl Into<String>) -> Self {
        Self {
            logref: logref.into(),
            message: message.into(),
            path: None,
            links: Links::new(),
        }
    }

    /// Sets the JSON pointer to the offending request member.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Registers a hyperlink under `rel`.
    #[must_use]
    pub fn with_link(mut self, rel: impl Into<String>, link: Link) -> Self {
        self.links.insert(rel, link);
        self
    }
}

/// An ordered collection of reported problems.
///
/// This is the collection wire shape. The entries live under
/// `_embedded.errors`, which is required when parsing; a body missing it
/// does not parse as this shape. `_links` and `total` are optional.
/// Entry order is the payload order and is preserved end to end.
///
/// JSON format:
/// ```json
/// {
///   "total": 2,
///   "_links": {
///     "describes": { "href": "http://example.com/batch/7" }
///   },
///   "_embedded": {
///     "errors": [
///       { "logref": "1", "message": "First error" },
///       { "logref": "2", "message": "Second error" }
///     ]
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VndErrors {
    errors: Vec<VndError>,
    links: Links,
    total: Option<u64>,
}

impl VndErrors {
    /// Creates a collection from entries, preserving their order.
    #[must_use]
    pub fn new(errors: Vec<VndError>) -> Self {
        Self {
            errors,
            links: Links::new(),
            total: None,
        }
    }

    /// Sets the collection-level hyperlinks.
    #[must_use]
    pub fn with_links(mut self, links: Links) -> Self {
        self.links = links;
        self
    }

    /// Sets the total reported by the payload.
    #[must_use]
    pub const fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    /// Entries in payload order.
    #[must_use]
    pub fn as_slice(&self) -> &[VndError] {
        &self.errors
    }

    /// Iterates over entries in payload order.
    pub fn iter(&self) -> slice::Iter<'_, VndError> {
        self.errors.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if the collection has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The first entry, if any.
    #[must_use]
    pub fn first(&self) -> Option<&VndError> {
        self.errors.first()
    }

    /// Collection-level hyperlinks.
    #[must_use]
    pub const fn links(&self) -> &Links {
        &self.links
    }

    /// Total number of errors reported by the payload, when present.
    ///
    /// Servers may report a total larger than the number of embedded
    /// entries when truncating large collections.
    #[must_use]
    pub const fn total(&self) -> Option<u64> {
        self.total
    }
}

impl From<VndError> for VndErrors {
    /// Wraps a single reported error in a one-element collection.
    fn from(error: VndError) -> Self {
        Self::new(vec![error])
    }
}

impl From<Vec<VndError>> for VndErrors {
    fn from(errors: Vec<VndError>) -> Self {
        Self::new(errors)
    }
}

impl FromIterator<VndError> for VndErrors {
    fn from_iter<I: IntoIterator<Item = VndError>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for VndErrors {
    type Item = VndError;
    type IntoIter = vec::IntoIter<VndError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a VndErrors {
    type Item = &'a VndError;
    type IntoIter = slice::Iter<'a, VndError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl ops::Index<usize> for VndErrors {
    type Output = VndError;

    fn index(&self, index: usize) -> &VndError {
        &self.errors[index]
    }
}

#[derive(Serialize, Deserialize)]
struct VndErrorsWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total: Option<u64>,
    #[serde(rename = "_links", default, skip_serializing_if = "Links::is_empty")]
    links: Links,
    #[serde(rename = "_embedded")]
    embedded: EmbeddedWire,
}

#[derive(Serialize, Deserialize)]
struct EmbeddedWire {
    errors: Vec<VndError>,
}

impl Serialize for VndErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = VndErrorsWire {
            total: self.total,
            links: self.links.clone(),
            embedded: EmbeddedWire {
                errors: self.errors.clone(),
            },
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for VndErrors {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = VndErrorsWire::deserialize(deserializer)?;
        Ok(Self {
            errors: wire.embedded.errors,
            links: wire.links,
            total: wire.total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::REL_HELP;

    #[test]
    fn test_vnd_error_parse_minimal() {
        let json = r#"{"logref": "abc", "message": "Test error"}"#;
        let error: VndError = serde_json::from_str(json).unwrap();
        assert_eq!(error.logref.as_str(), "abc");
        assert_eq!(error.message, "Test error");
        assert!(error.path.is_none());
        assert!(error.links.is_empty());
    }

    #[test]
    fn test_vnd_error_parse_numeric_logref() {
        let json = r#"{"logref": 42, "message": "Validation failed"}"#;
        let error: VndError = serde_json::from_str(json).unwrap();
        assert_eq!(error.logref.as_str(), "42");
    }

    #[test]
    fn test_vnd_error_parse_rejects_missing_members() {
        assert!(serde_json::from_str::<VndError>(r#"{"foo": "bar"}"#).is_err());
        assert!(serde_json::from_str::<VndError>(r#"{"message": "no logref"}"#).is_err());
        assert!(serde_json::from_str::<VndError>(r#"{"logref": "abc"}"#).is_err());
    }

    #[test]
    fn test_vnd_error_parse_ignores_unknown_members() {
        let json = r#"{"logref": "abc", "message": "Test error", "severity": "fatal"}"#;
        let error: VndError = serde_json::from_str(json).unwrap();
        assert_eq!(error.message, "Test error");
    }

    #[test]
    fn test_vnd_error_parse_with_links() {
        let json = r#"{
            "logref": "abc",
            "message": "Test error",
            "path": "/username",
            "_links": {"help": {"href": "http://example.com/help"}}
        }"#;
        let error: VndError = serde_json::from_str(json).unwrap();
        assert_eq!(error.path.as_deref(), Some("/username"));
        assert_eq!(
            error.links.get(REL_HELP).unwrap().href,
            "http://example.com/help"
        );
    }

    #[test]
    fn test_vnd_error_serialize_skips_absent_members() {
        let error = VndError::new("abc", "Test error");
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"logref": "abc", "message": "Test error"})
        );
    }

    #[test]
    fn test_vnd_errors_parse_collection() {
        let json = r#"{
            "_links": {"help": {"href": "http://example.com/help"}},
            "_embedded": {
                "errors": [
                    {"logref": "1", "message": "First error"},
                    {"logref": "2", "message": "Second error"}
                ]
            }
        }"#;
        let errors: VndErrors = serde_json::from_str(json).unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first().unwrap().message, "First error");
        assert_eq!(errors[1].message, "Second error");
        assert!(errors.links().get(REL_HELP).is_some());
    }

    #[test]
    fn test_vnd_errors_parse_requires_embedded() {
        let single = r#"{"logref": "abc", "message": "Test error"}"#;
        assert!(serde_json::from_str::<VndErrors>(single).is_err());
    }

    #[test]
    fn test_vnd_errors_parse_empty_entries() {
        let json = r#"{"_embedded": {"errors": []}}"#;
        let errors: VndErrors = serde_json::from_str(json).unwrap();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_vnd_errors_parse_total() {
        let json = r#"{"total": 7, "_embedded": {"errors": [{"logref": 1, "message": "m"}]}}"#;
        let errors: VndErrors = serde_json::from_str(json).unwrap();
        assert_eq!(errors.total(), Some(7));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_vnd_errors_round_trip_preserves_order() {
        let errors: VndErrors = (1u64..=3)
            .map(|n| VndError::new(n, format!("error {n}")))
            .collect();
        let json = serde_json::to_string(&errors).unwrap();
        let back: VndErrors = serde_json::from_str(&json).unwrap();
        assert_eq!(errors, back);
        let messages: Vec<&str> = back.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["error 1", "error 2", "error 3"]);
    }

    #[test]
    fn test_vnd_errors_from_single() {
        let errors = VndErrors::from(VndError::new("abc", "Test error"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().unwrap().logref.as_str(), "abc");
    }

    #[test]
    fn test_vnd_errors_serialize_wire_shape() {
        let entries = vec![VndError::new("a", "first"), VndError::new("b", "second")];
        let errors = VndErrors::new(entries);
        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "_embedded": {
                    "errors": [
                        {"logref": "a", "message": "first"},
                        {"logref": "b", "message": "second"}
                    ]
                }
            })
        );
    }
}
