//! reqwest middleware that raises decoded errors for failed responses.
//!
//! Installing [`VndErrorMiddleware`] makes a reqwest client behave like an
//! RPC client surface: every 4xx/5xx response is handed to the
//! [`VndErrorDecoder`] and surfaced as an error, so calling code only ever
//! sees successful responses or the [`ResponseError`] taxonomy.

use http::Extensions;
use reqwest::{Client, ClientBuilder, Request, Response};
use reqwest_middleware as rqm;

use crate::decoder::VndErrorDecoder;
use crate::error::ResponseError;

#[cfg(feature = "telemetry")]
use tracing::{instrument, trace};

/// Middleware that converts failed responses into typed errors.
///
/// 1xx, 2xx and 3xx responses pass through untouched; redirect handling
/// stays with the client. For 4xx and 5xx responses the decoder runs and
/// its result is surfaced as [`rqm::Error::Middleware`]. Use
/// [`response_error`] to recover the typed value from that wrapper.
#[derive(Debug, Default)]
pub struct VndErrorMiddleware {
    decoder: VndErrorDecoder,
}

impl VndErrorMiddleware {
    /// Creates the middleware around an existing decoder.
    #[must_use]
    pub fn new(decoder: VndErrorDecoder) -> Self {
        Self { decoder }
    }
}

/// Runs the next middleware or HTTP client with optional telemetry instrumentation.
#[cfg_attr(feature = "telemetry", instrument(name = "vnderror.reqwest.next", skip_all))]
async fn run_next(
    next: rqm::Next<'_>,
    req: Request,
    extensions: &mut Extensions,
) -> rqm::Result<Response> {
    next.run(req, extensions).await
}

#[async_trait::async_trait]
impl rqm::Middleware for VndErrorMiddleware {
    /// Handles a request, decoding failed responses into typed errors.
    ///
    /// The request identifier carried into the decoder is derived from the
    /// request line (method and URL).
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "vnderror.reqwest.handle", skip_all)
    )]
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: rqm::Next<'_>,
    ) -> rqm::Result<Response> {
        let request_id = format!("{} {}", req.method(), req.url());
        let res = run_next(next, req, extensions).await?;

        let status = res.status();
        if !(status.is_client_error() || status.is_server_error()) {
            #[cfg(feature = "telemetry")]
            trace!(status = ?status, "Response is not a failure, passing through");
            return Ok(res);
        }

        let error = self.decoder.decode(&request_id, res).await;
        Err(rqm::Error::Middleware(error.into()))
    }
}

/// Recovers the typed [`ResponseError`] from a middleware error.
///
/// Returns `None` for transport errors and for middleware errors raised by
/// other middlewares.
#[must_use]
pub fn response_error(error: &rqm::Error) -> Option<&ResponseError> {
    match error {
        rqm::Error::Middleware(inner) => inner.downcast_ref::<ResponseError>(),
        rqm::Error::Reqwest(_) => None,
    }
}

/// Trait for adding vnd.error decoding to reqwest clients.
///
/// Implemented on [`Client`], [`ClientBuilder`], and
/// [`rqm::ClientBuilder`], so one call wires the middleware in wherever
/// the client is constructed.
pub trait ReqwestWithVndErrors {
    /// The type produced by attaching the middleware.
    type Output;

    /// Attaches the vnd.error decoding middleware.
    fn with_vnd_errors(self, middleware: VndErrorMiddleware) -> Self::Output;
}

impl ReqwestWithVndErrors for Client {
    type Output = rqm::ClientBuilder;

    fn with_vnd_errors(self, middleware: VndErrorMiddleware) -> Self::Output {
        rqm::ClientBuilder::new(self).with(middleware)
    }
}

impl ReqwestWithVndErrors for ClientBuilder {
    type Output = Result<rqm::ClientBuilder, reqwest::Error>;

    fn with_vnd_errors(self, middleware: VndErrorMiddleware) -> Self::Output {
        Ok(rqm::ClientBuilder::new(self.build()?).with(middleware))
    }
}

impl ReqwestWithVndErrors for rqm::ClientBuilder {
    type Output = Self;

    fn with_vnd_errors(self, middleware: VndErrorMiddleware) -> Self::Output {
        self.with(middleware)
    }
}
