//! The vnd.error response decoder.
//!
//! This module converts one failed HTTP response into one value of the
//! [`ResponseError`] taxonomy. Whether a response counts as failed is the
//! caller's decision; the [`middleware`](crate::middleware) makes that call
//! for reqwest clients.

use std::fmt::Display;
use std::sync::Arc;

use reqwest::Response;
use vnderror::decode::{JsonCodec, VndErrorCodec, decode_with};

use crate::error::{ResponseError, StatusFailure, VndErrorFailure};
use crate::headers::has_vnd_error_content_type;

#[cfg(feature = "telemetry")]
use tracing::{debug, instrument, trace};

/// Decodes failed responses into the [`ResponseError`] taxonomy.
///
/// The decoder routes on the `Content-Type` headers, reads the body at most
/// once, and degrades any undecodable vnd.error payload to a plain
/// [`StatusFailure`] rather than raising a parse error. Given the same
/// status, headers, and body it always produces the same result.
pub struct VndErrorDecoder {
    codec: Arc<dyn VndErrorCodec>,
}

impl std::fmt::Debug for VndErrorDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VndErrorDecoder").finish_non_exhaustive()
    }
}

impl Default for VndErrorDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl VndErrorDecoder {
    /// Creates a decoder with the default [`JsonCodec`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            codec: Arc::new(JsonCodec),
        }
    }

    /// Replaces the payload codec.
    ///
    /// The shape-fallback order stays with the decoder; the codec only
    /// parses the individual shapes.
    #[must_use]
    pub fn with_codec(mut self, codec: impl VndErrorCodec + 'static) -> Self {
        self.codec = Arc::new(codec);
        self
    }

    /// Decodes a failed `response` into a [`ResponseError`].
    ///
    /// `request_id` identifies the originating request; it is carried into
    /// the status failure and into telemetry.
    ///
    /// When no `Content-Type` value announces a vnd.error payload the body
    /// is not read at all. Otherwise the body is read exactly once and run
    /// through the shape fallback; a body matching neither shape degrades
    /// to the status failure with the cause recorded as a telemetry event.
    /// Consuming the response closes its body stream on every branch.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "vnderror.decoder.decode", skip(self, response))
    )]
    pub async fn decode(&self, request_id: &str, response: Response) -> ResponseError {
        let status = response.status();

        if !has_vnd_error_content_type(response.headers()) {
            #[cfg(feature = "telemetry")]
            trace!(status = ?status, "No vnd.error content type, skipping body");
            return StatusFailure::new(request_id, status).into();
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(read_failure) => {
                record_degradation(request_id, &read_failure);
                return StatusFailure::new(request_id, status).into();
            }
        };

        match decode_with(self.codec.as_ref(), &body) {
            Ok(errors) => {
                #[cfg(feature = "telemetry")]
                debug!(entries = errors.len(), "Decoded vnd.error payload");
                VndErrorFailure::new(status, errors).into()
            }
            Err(decode_failure) => {
                record_degradation(request_id, &decode_failure);
                StatusFailure::new(request_id, status).into()
            }
        }
    }
}

/// Records the cause of a degraded decode as a telemetry event.
#[cfg(feature = "telemetry")]
fn record_degradation<E: Display>(request_id: &str, cause: &E) {
    tracing::event!(
        tracing::Level::ERROR,
        error = %cause,
        request_id,
        "Degrading vnd.error response to a status failure"
    );
}

/// Records the cause of a degraded decode as a telemetry event.
/// Noop if telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
fn record_degradation<E: Display>(_request_id: &str, _cause: &E) {}
