//! Shape-fallback decoding for vnd.error payloads.
//!
//! A vnd.error body is either a collection (`_embedded.errors`) or a single
//! bare error object. Decoding runs an ordered sequence of parse attempts:
//! the collection shape first, then the single-error shape, with a single
//! bare error wrapped into a one-element [`VndErrors`]. The first attempt's
//! failure is kept only as data and surfaces solely through [`DecodeError`]
//! when the fallback fails too.
//!
//! Attempts operate on a fully buffered body, so a failed attempt always
//! means the bytes do not match the shape; transport failures never reach
//! this layer.

use crate::payload::{VndError, VndErrors};

/// Failure raised by a single [`VndErrorCodec`] parse attempt.
pub type CodecError = Box<dyn std::error::Error + Send + Sync>;

/// Deserializes vnd.error payloads from raw body bytes.
///
/// This is the injection seam for applications that need parsing behavior
/// other than the default; [`JsonCodec`] is the stock implementation. The
/// shape-fallback order is fixed by [`decode_with`] and is not a codec
/// concern.
pub trait VndErrorCodec: Send + Sync {
    /// Parses the collection shape (`_embedded.errors`).
    ///
    /// # Errors
    ///
    /// Returns an error when `body` does not match the collection shape.
    fn decode_collection(&self, body: &[u8]) -> Result<VndErrors, CodecError>;

    /// Parses the single-error shape (one bare error object).
    ///
    /// # Errors
    ///
    /// Returns an error when `body` does not match the single-error shape.
    fn decode_single(&self, body: &[u8]) -> Result<VndError, CodecError>;
}

/// The default codec, backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl VndErrorCodec for JsonCodec {
    fn decode_collection(&self, body: &[u8]) -> Result<VndErrors, CodecError> {
        serde_json::from_slice(body).map_err(Into::into)
    }

    fn decode_single(&self, body: &[u8]) -> Result<VndError, CodecError> {
        serde_json::from_slice(body).map_err(Into::into)
    }
}

/// Neither wire shape matched the body.
///
/// Carries the failure from each attempt so callers can log why a body that
/// announced the vnd.error media type could not be decoded.
#[derive(Debug, thiserror::Error)]
#[error("body matches neither vnd.error shape (collection: {collection}; single: {single})")]
pub struct DecodeError {
    /// Failure from the collection-shape attempt.
    pub collection: CodecError,

    /// Failure from the single-error-shape attempt.
    pub single: CodecError,
}

/// Decodes a vnd.error body through `codec`.
///
/// Tries the collection shape first and falls back to the single-error
/// shape, wrapping a bare error into a one-element collection. A fallback
/// success discards the first attempt's failure.
///
/// # Errors
///
/// Returns [`DecodeError`] with both attempt failures when the body matches
/// neither shape.
pub fn decode_with<C>(codec: &C, body: &[u8]) -> Result<VndErrors, DecodeError>
where
    C: VndErrorCodec + ?Sized,
{
    let collection_failure = match codec.decode_collection(body) {
        Ok(errors) => return Ok(errors),
        Err(failure) => failure,
    };
    match codec.decode_single(body) {
        Ok(error) => Ok(VndErrors::from(error)),
        Err(single_failure) => Err(DecodeError {
            collection: collection_failure,
            single: single_failure,
        }),
    }
}

/// Decodes a vnd.error body with the default [`JsonCodec`].
///
/// # Errors
///
/// Returns [`DecodeError`] when the body matches neither wire shape.
pub fn decode(body: &[u8]) -> Result<VndErrors, DecodeError> {
    decode_with(&JsonCodec, body)
}
