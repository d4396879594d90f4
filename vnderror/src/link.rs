//! HAL hyperlinks attached to vnd.error payloads.
//!
//! Both wire shapes may carry a `_links` object relating the error to other
//! resources. The media type reserves a small set of relations (`help`,
//! `describes`, `about`, `profile`); arbitrary relations are preserved.

use std::collections::BTreeMap;
use std::slice;

use serde::{Deserialize, Serialize};

/// Link relation for a document describing how to resolve the error.
pub const REL_HELP: &str = "help";

/// Link relation for the resource the error describes.
pub const REL_DESCRIBES: &str = "describes";

/// Link relation for the resource the error is about.
pub const REL_ABOUT: &str = "about";

/// Link relation for a profile document qualifying the error.
pub const REL_PROFILE: &str = "profile";

/// A single HAL link object.
///
/// JSON format:
/// ```json
/// {
///   "href": "http://example.com/help/validation",
///   "title": "Validation help"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target URI of the link.
    pub href: String,

    /// Human-readable label for the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Link {
    /// Creates a link pointing at `href`.
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            title: None,
        }
    }

    /// Sets the human-readable label.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// The links registered under a single relation.
///
/// HAL permits a relation to map to either one link object or an array of
/// link objects; both forms round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkValue {
    /// A single link object.
    Single(Link),
    /// An array of link objects.
    Multiple(Vec<Link>),
}

impl LinkValue {
    /// Returns the links under this relation as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Link] {
        match self {
            Self::Single(link) => slice::from_ref(link),
            Self::Multiple(links) => links,
        }
    }

    /// Returns the first link under this relation, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Link> {
        self.as_slice().first()
    }
}

impl From<Link> for LinkValue {
    fn from(link: Link) -> Self {
        Self::Single(link)
    }
}

impl From<Vec<Link>> for LinkValue {
    fn from(links: Vec<Link>) -> Self {
        Self::Multiple(links)
    }
}

/// A `_links` object: link relations in stable (alphabetical) order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Links(BTreeMap<String, LinkValue>);

impl Links {
    /// Creates an empty link set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no relations are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of registered relations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the first link registered under `rel`, if any.
    #[must_use]
    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.0.get(rel).and_then(LinkValue::first)
    }

    /// Registers `value` under `rel`, replacing any existing value.
    pub fn insert(&mut self, rel: impl Into<String>, value: impl Into<LinkValue>) {
        self.0.insert(rel.into(), value.into());
    }

    /// Registers `value` under `rel` and returns the updated set.
    #[must_use]
    pub fn with(mut self, rel: impl Into<String>, value: impl Into<LinkValue>) -> Self {
        self.insert(rel, value);
        self
    }

    /// Iterates over relations and their link values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LinkValue)> {
        self.0.iter().map(|(rel, value)| (rel.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_parse_single_object_relation() {
        let json = r#"{"help": {"href": "http://example.com/help"}}"#;
        let links: Links = serde_json::from_str(json).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links.get(REL_HELP).unwrap().href, "http://example.com/help");
    }

    #[test]
    fn test_links_parse_array_relation() {
        let json = r#"{"about": [{"href": "http://a"}, {"href": "http://b"}]}"#;
        let links: Links = serde_json::from_str(json).unwrap();
        let value = links.iter().next().unwrap().1;
        assert_eq!(value.as_slice().len(), 2);
        assert_eq!(links.get(REL_ABOUT).unwrap().href, "http://a");
    }

    #[test]
    fn test_links_round_trip() {
        let links = Links::new()
            .with(REL_HELP, Link::new("http://example.com/help"))
            .with(
                REL_ABOUT,
                Link::new("http://example.com/user/1").with_title("User resource"),
            );
        let json = serde_json::to_string(&links).unwrap();
        let back: Links = serde_json::from_str(&json).unwrap();
        assert_eq!(links, back);
    }

    #[test]
    fn test_links_get_missing_relation() {
        let links = Links::new();
        assert!(links.is_empty());
        assert!(links.get(REL_PROFILE).is_none());
    }
}
