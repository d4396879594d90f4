//! The error taxonomy raised for failed responses.
//!
//! Decoding always produces exactly one of two outcomes: a structured
//! [`VndErrorFailure`] when the response carried a decodable vnd.error
//! payload, or a plain [`StatusFailure`] otherwise. Undecodable payloads
//! degrade to the status failure; they are never raised as parse errors.

use std::fmt;

use http::StatusCode;
use vnderror::VndErrors;

/// Failure raised for a non-success response.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResponseError {
    /// The response carried a decodable vnd.error payload.
    #[error("{0}")]
    VndError(#[from] VndErrorFailure),

    /// No structured payload was available; only the status is known.
    #[error("{0}")]
    Status(#[from] StatusFailure),
}

impl ResponseError {
    /// HTTP status of the failed response.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::VndError(failure) => failure.status,
            Self::Status(failure) => failure.status,
        }
    }

    /// The decoded error collection, when the response carried one.
    #[must_use]
    pub const fn vnd_errors(&self) -> Option<&VndErrors> {
        match self {
            Self::VndError(failure) => Some(&failure.errors),
            Self::Status(_) => None,
        }
    }
}

/// A failure described by a decoded vnd.error payload.
///
/// Carries the parsed error collection together with the status code of
/// the response it was decoded from.
#[derive(Debug, Clone)]
pub struct VndErrorFailure {
    /// HTTP status of the response the payload was decoded from.
    pub status: StatusCode,
    /// The decoded error collection, in payload order.
    pub errors: VndErrors,
    /// Optional detail message set by the constructing caller.
    pub message: Option<String>,
}

impl VndErrorFailure {
    /// Creates a failure from a decoded collection and the response status.
    #[must_use]
    pub const fn new(status: StatusCode, errors: VndErrors) -> Self {
        Self {
            status,
            errors,
            message: None,
        }
    }

    /// Sets the detail message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Display for VndErrorFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        } else if let Some(first) = self.errors.first() {
            write!(f, ": {}", first.message)?;
            if self.errors.len() > 1 {
                write!(f, " (and {} more)", self.errors.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for VndErrorFailure {}

/// A failure known only by its HTTP status.
#[derive(Debug, Clone)]
pub struct StatusFailure {
    /// Identifier of the originating request.
    pub request_id: String,
    /// HTTP status of the failed response.
    pub status: StatusCode,
}

impl StatusFailure {
    /// Creates a status failure for the given request identifier.
    #[must_use]
    pub fn new(request_id: impl Into<String>, status: StatusCode) -> Self {
        Self {
            request_id: request_id.into(),
            status,
        }
    }
}

impl fmt::Display for StatusFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "request `{}` failed with status {}",
            self.request_id, self.status
        )
    }
}

impl std::error::Error for StatusFailure {}
