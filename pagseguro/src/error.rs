//! Error types for the PagSeguro client.

use http::StatusCode;
use http::header::InvalidHeaderValue;
use pagseguro_proto::{ApiError, ErrorEnvelope};

use crate::constants::NON_STANDARD_ERROR_HINT;

/// Errors returned by [`PagSeguroClient`](crate::PagSeguroClient).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The gateway rejected the request with one or more structured errors.
    #[error(transparent)]
    Api(#[from] ApiErrors),

    /// The gateway answered with a body that matches no known error shape.
    #[error(
        "error processing request(http status code: {}): {}",
        .status.as_u16(),
        NON_STANDARD_ERROR_HINT
    )]
    NonStandard {
        /// The HTTP status code.
        status: StatusCode,
    },

    /// HTTP transport error, including timeouts.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The order could not be encoded as JSON.
    #[error("failed to serialize order: {0}")]
    Serialize(#[from] serde_json::Error),

    /// URL parse error.
    #[error("URL parse error: {context}: {source}")]
    UrlParse {
        /// Human-readable context.
        context: &'static str,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// The token cannot be sent as an `Authorization` header.
    #[error("invalid authorization token: {0}")]
    InvalidToken(#[source] InvalidHeaderValue),
}

impl Error {
    /// Maps a non-`201` response to an error.
    pub(crate) fn from_response(status: StatusCode, body: &[u8]) -> Self {
        ErrorEnvelope::parse(body).map_or(Self::NonStandard { status }, |envelope| {
            Self::Api(ApiErrors::new(status, envelope.into_errors()))
        })
    }

    /// Returns the structured gateway errors, if the response carried any.
    #[must_use]
    pub const fn api_errors(&self) -> Option<&ApiErrors> {
        match self {
            Self::Api(errors) => Some(errors),
            _ => None,
        }
    }

    /// Returns the HTTP status code the gateway answered with, if any.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api(errors) => Some(errors.status),
            Self::NonStandard { status } => Some(*status),
            Self::Http(err) => err.status(),
            _ => None,
        }
    }
}

/// Structured validation errors reported by the gateway.
///
/// Only built from a response body that matched one of the known error
/// envelopes, so [`ApiErrors::error_messages`] is never empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("error processing request(http status code: {})", .status.as_u16())]
pub struct ApiErrors {
    status: StatusCode,
    error_messages: Vec<ApiError>,
}

impl ApiErrors {
    pub(crate) const fn new(status: StatusCode, error_messages: Vec<ApiError>) -> Self {
        Self {
            status,
            error_messages,
        }
    }

    /// The HTTP status code of the response.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// The reported errors, in the order the gateway listed them.
    #[must_use]
    pub fn error_messages(&self) -> &[ApiError] {
        &self.error_messages
    }

    /// Consumes `self`, returning the reported errors.
    #[must_use]
    pub fn into_error_messages(self) -> Vec<ApiError> {
        self.error_messages
    }

    /// Returns `true` if any entry carries the given code.
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.error_messages.iter().any(|e| e.code == code)
    }
}

impl<'a> IntoIterator for &'a ApiErrors {
    type Item = &'a ApiError;
    type IntoIter = std::slice::Iter<'a, ApiError>;

    fn into_iter(self) -> Self::IntoIter {
        self.error_messages.iter()
    }
}
