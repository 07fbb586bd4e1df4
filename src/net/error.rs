//! Request error taxonomy for the API client.
//!
//! Four failure layers, strictly ordered: the transport could not complete
//! the exchange; the server answered outside 2xx; the body was not the
//! JSON we expected; the body was well-formed but carried an application
//! error envelope.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by [`crate::net::http::ApiClient`] operations.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Transport failure — DNS, TLS, connection refused, timeout.
    #[error("network error: {0}")]
    Network(String),

    /// Server reachable but the response status was not 2xx.
    #[error("http status {status}")]
    Http { status: u16, body: String },

    /// A 2xx response carrying an application-level error envelope.
    #[error("api error: {0}")]
    Api(String),

    /// Response body was not the JSON we expected.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("http client build failed: {0}")]
    ClientBuild(String),
}

impl RequestError {
    /// HTTP status code, when the server produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for transport-layer failures (nothing reached the server).
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
