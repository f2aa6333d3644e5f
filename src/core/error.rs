use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A transport-level failure (DNS, connect, TLS, body read).
    ///
    /// The request URL is stripped before the error is stored so the API token
    /// never ends up in messages or logs.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The server returned an unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error, without its query string.
        url: String,
    },

    /// The server returned an unsuccessful status with a Marketaux error envelope.
    #[error("Marketaux error ({status}) {code}: {message}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The machine-readable error code, e.g. `invalid_api_token`.
        code: String,
        /// The human-readable message.
        message: String,
    },

    /// The response body was not JSON, or was missing a field the normalizer requires.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Required configuration (the API token) is missing.
    #[error("Missing configuration: {0}")]
    Config(String),

    /// A request parameter was outside its accepted range.
    #[error("Invalid parameter: {0}")]
    InvalidParams(String),
}

impl Error {
    /// Returns `true` for failures reaching the upstream or receiving a non-2xx reply.
    ///
    /// These are the errors a caller should surface as "connection error" and let
    /// the user retry manually.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. } | Self::Api { .. })
    }

    /// Returns `true` when the upstream answered but with an unexpected body shape.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.without_url())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedResponse(e.to_string())
    }
}
