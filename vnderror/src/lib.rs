//! Wire format types for the `application/vnd.error+json` media type.
//!
//! This crate defines the serialization-level data structures for vnd.error
//! payloads, the ordered shape-fallback decode that accepts both the
//! collection and single-error wire forms, and the media-type matching used
//! for content negotiation. It has minimal dependencies (only `serde`,
//! `serde_json` and `thiserror`) and carries no HTTP types; transport
//! integration lives in `vnderror-http`.
//!
//! # Modules
//!
//! - [`payload`] — Error payload types (`VndError`, `VndErrors`, `Logref`)
//! - [`link`] — HAL hyperlinks attached to payloads (`Link`, `Links`)
//! - [`decode`] — Shape-fallback decoding and the codec seam

pub mod decode;
pub mod link;
pub mod payload;

pub use decode::{CodecError, DecodeError, JsonCodec, VndErrorCodec, decode, decode_with};
pub use link::{Link, LinkValue, Links};
pub use payload::{Logref, VndError, VndErrors};

/// Canonical media type for vnd.error payloads.
pub const MEDIA_TYPE: &str = "application/vnd.error+json";

/// Returns `true` if a `Content-Type` value designates a vnd.error payload.
///
/// Matching is case-sensitive substring containment, so values carrying
/// parameters such as `application/vnd.error+json;charset=UTF-8` match.
#[must_use]
pub fn is_vnd_error_media_type(value: &str) -> bool {
    value.contains(MEDIA_TYPE)
}
