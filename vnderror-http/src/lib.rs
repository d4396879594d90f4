#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! HTTP client integration for vnd.error decoding.
//!
//! Turns a failed response that announces the `application/vnd.error+json`
//! media type into a structured, typed error, and every other failed
//! response into a plain status error. The (feature-gated) reqwest
//! middleware installs the decoding at the client seam, so callers observe
//! exactly the two-variant [`error::ResponseError`] taxonomy and nothing
//! else.
//!
//! # Modules
//!
//! - [`headers`] — Content-type detection over response headers
//! - [`error`] — The raised error taxonomy
//! - [`decoder`] — The response decoder (feature: `client`)
//! - [`middleware`] — reqwest middleware and client wiring (feature: `client`)
//!
//! # Feature Flags
//!
//! - `client` - Enables the reqwest decoder and middleware
//! - `telemetry` - Enables tracing instrumentation for debugging and monitoring

pub mod error;
pub mod headers;

#[cfg(feature = "client")]
pub mod decoder;
#[cfg(feature = "client")]
pub mod middleware;

pub use error::{ResponseError, StatusFailure, VndErrorFailure};

#[cfg(feature = "client")]
pub use decoder::VndErrorDecoder;
#[cfg(feature = "client")]
pub use middleware::{ReqwestWithVndErrors, VndErrorMiddleware, response_error};
