//! Content-type detection over response headers.
//!
//! Routing to the vnd.error decode path is decided purely from the
//! `Content-Type` headers; the body plays no part in the decision.

use http::HeaderMap;
use http::header::CONTENT_TYPE;

use vnderror::is_vnd_error_media_type;

/// Returns `true` if any `Content-Type` value designates a vnd.error body.
///
/// Every `Content-Type` value is examined. A value matches by
/// case-sensitive substring containment, so parameterized values such as
/// `application/vnd.error+json;charset=UTF-8` match. Values that are not
/// valid UTF-8 never match.
#[must_use]
pub fn has_vnd_error_content_type(headers: &HeaderMap) -> bool {
    headers
        .get_all(CONTENT_TYPE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(is_vnd_error_media_type)
}
