//! Error types for the uinames client.

use derive_more::{Display, Error, From};

/// Main error type for uinames operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Requested amount outside the range accepted by the service.
    #[display("amount must be between 1 and 500 (inclusive)")]
    #[from(skip)]
    InvalidAmount {
        /// The rejected amount.
        amount: u16,
    },

    /// The service rejected the request: non-200 status with an error payload.
    ///
    /// This is the expected business error path, distinct from transport and
    /// decode failures.
    #[display("{status_text} - {message}")]
    #[from(skip)]
    Service {
        /// HTTP status code.
        status: u16,
        /// HTTP status line text (e.g., "Bad Request").
        status_text: String,
        /// Service-supplied error message.
        message: String,
    },

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// The response carried no body.
    #[display("missing HTTP response body")]
    #[from(skip)]
    MissingBody,

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "[2].credit_card.pin").
        path: String,
        /// Error message.
        message: String,
    },

    /// Query string serialization error.
    #[display("query serialization error: {_0}")]
    #[from]
    QuerySerialization(serde_urlencoded::ser::Error),

    /// Birthdate string that does not match the service date format.
    #[display("invalid birthdate: {_0}")]
    #[from]
    InvalidBirthdate(chrono::ParseError),

    /// Photo reference that is not a valid URL.
    #[display("invalid photo URL: {_0}")]
    #[from(skip)]
    InvalidPhoto(url::ParseError),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a service error from a status code and service message.
    ///
    /// The status line text is derived from the status code.
    #[must_use]
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        Self::Service {
            status,
            status_text: status_text(status),
            message: message.into(),
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if the service rejected the request.
    #[must_use]
    pub const fn is_service(&self) -> bool {
        matches!(self, Self::Service { .. })
    }

    /// Returns the HTTP status code if this is a service error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Status line text for a status code, falling back to the decimal code for
/// codes without a canonical reason phrase.
fn status_text(status: u16) -> String {
    http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .map_or_else(|| status.to_string(), str::to_owned)
}
